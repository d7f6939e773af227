//! Congestion Model
//!
//! Predicts a discrete congestion risk for each sampled traffic edge.

mod congestion;

pub use congestion::{
    CongestionModel, CongestionRisk, ModelError, TrainingSample, REFERENCE_SAMPLES,
};

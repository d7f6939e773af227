//! Congestion Risk Model
//!
//! Nearest-neighbour regressor mapping (vehicle count, average speed) to a
//! discrete congestion risk. Features are min-max normalised over the
//! training table so that counts and speeds contribute on the same scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of neighbours consulted per prediction
const DEFAULT_K: usize = 3;

/// Discrete congestion risk served in `congestion_risk`.
///
/// `High` is the value dashboards treat as an active incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CongestionRisk {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl CongestionRisk {
    /// Round a continuous score to the nearest risk level, clamping to range
    pub fn from_score(score: f64) -> Self {
        let rounded = score.round();
        if rounded.is_nan() || rounded <= 0.0 {
            CongestionRisk::Low
        } else if rounded >= 2.0 {
            CongestionRisk::High
        } else {
            CongestionRisk::Medium
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_incident(self) -> bool {
        self == CongestionRisk::High
    }
}

impl From<CongestionRisk> for u8 {
    fn from(risk: CongestionRisk) -> Self {
        risk.as_u8()
    }
}

impl TryFrom<u8> for CongestionRisk {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CongestionRisk::Low),
            1 => Ok(CongestionRisk::Medium),
            2 => Ok(CongestionRisk::High),
            other => Err(ModelError::InvalidRisk(other)),
        }
    }
}

impl fmt::Display for CongestionRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CongestionRisk::Low => write!(f, "low"),
            CongestionRisk::Medium => write!(f, "medium"),
            CongestionRisk::High => write!(f, "high"),
        }
    }
}

/// One labelled observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSample {
    pub vehicle_count: f64,
    pub avg_speed_kmh: f64,
    pub risk: CongestionRisk,
}

impl TrainingSample {
    pub const fn new(vehicle_count: f64, avg_speed_kmh: f64, risk: CongestionRisk) -> Self {
        Self {
            vehicle_count,
            avg_speed_kmh,
            risk,
        }
    }
}

/// Reference observations the production model is trained on
pub const REFERENCE_SAMPLES: [TrainingSample; 6] = [
    TrainingSample::new(10.0, 60.0, CongestionRisk::Low),
    TrainingSample::new(25.0, 45.0, CongestionRisk::Low),
    TrainingSample::new(40.0, 30.0, CongestionRisk::Medium),
    TrainingSample::new(60.0, 25.0, CongestionRisk::Medium),
    TrainingSample::new(80.0, 15.0, CongestionRisk::High),
    TrainingSample::new(100.0, 10.0, CongestionRisk::High),
];

/// Model errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Training set is empty")]
    EmptyTrainingSet,

    #[error("Training sample {index} has a non-finite feature")]
    InvalidSample { index: usize },

    #[error("Invalid congestion risk value: {0}")]
    InvalidRisk(u8),
}

/// Per-feature min/max used for normalisation
#[derive(Debug, Clone, Copy)]
struct FeatureRange {
    min: f64,
    max: f64,
}

impl FeatureRange {
    fn fit(values: impl Iterator<Item = f64>) -> Self {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        Self { min, max }
    }

    fn scale(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            0.0
        } else {
            (value - self.min) / span
        }
    }
}

/// Trained congestion model
#[derive(Debug, Clone)]
pub struct CongestionModel {
    samples: Vec<TrainingSample>,
    vehicles: FeatureRange,
    speed: FeatureRange,
    k: usize,
}

impl CongestionModel {
    /// Fit the model to a set of labelled samples
    pub fn train(samples: &[TrainingSample]) -> Result<Self, ModelError> {
        if samples.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        if let Some(index) = samples
            .iter()
            .position(|s| !s.vehicle_count.is_finite() || !s.avg_speed_kmh.is_finite())
        {
            return Err(ModelError::InvalidSample { index });
        }

        let vehicles = FeatureRange::fit(samples.iter().map(|s| s.vehicle_count));
        let speed = FeatureRange::fit(samples.iter().map(|s| s.avg_speed_kmh));

        tracing::debug!(samples = samples.len(), "Trained congestion model");

        Ok(Self {
            samples: samples.to_vec(),
            vehicles,
            speed,
            k: DEFAULT_K.min(samples.len()),
        })
    }

    /// Model trained on [`REFERENCE_SAMPLES`]
    pub fn reference() -> Self {
        Self {
            samples: REFERENCE_SAMPLES.to_vec(),
            vehicles: FeatureRange { min: 10.0, max: 100.0 },
            speed: FeatureRange { min: 10.0, max: 60.0 },
            k: DEFAULT_K,
        }
    }

    /// Continuous risk score before rounding
    pub fn score(&self, vehicle_count: f64, avg_speed_kmh: f64) -> f64 {
        let x = self.vehicles.scale(vehicle_count);
        let y = self.speed.scale(avg_speed_kmh);

        let mut distances: Vec<(f64, CongestionRisk)> = self
            .samples
            .iter()
            .map(|s| {
                let dx = self.vehicles.scale(s.vehicle_count) - x;
                let dy = self.speed.scale(s.avg_speed_kmh) - y;
                ((dx * dx + dy * dy).sqrt(), s.risk)
            })
            .collect();

        distances.sort_by(|a, b| a.0.total_cmp(&b.0));

        // Exact hit on a training sample reproduces its label
        if let Some(&(d, risk)) = distances.first() {
            if d < 1e-9 {
                return risk.as_u8() as f64;
            }
        }

        let (weighted, total) = distances
            .iter()
            .take(self.k)
            .fold((0.0, 0.0), |(acc, w_sum), &(d, risk)| {
                let w = 1.0 / d;
                (acc + w * risk.as_u8() as f64, w_sum + w)
            });

        if total == 0.0 {
            0.0
        } else {
            weighted / total
        }
    }

    /// Predict the discrete risk for one observation
    pub fn predict(&self, vehicle_count: u32, avg_speed_kmh: f64) -> CongestionRisk {
        CongestionRisk::from_score(self.score(vehicle_count as f64, avg_speed_kmh))
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Default for CongestionModel {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_empty_fails() {
        let err = CongestionModel::train(&[]).unwrap_err();
        assert!(matches!(err, ModelError::EmptyTrainingSet));
    }

    #[test]
    fn test_train_rejects_nan() {
        let samples = [
            TrainingSample::new(10.0, 60.0, CongestionRisk::Low),
            TrainingSample::new(f64::NAN, 30.0, CongestionRisk::Medium),
        ];
        let err = CongestionModel::train(&samples).unwrap_err();
        assert!(matches!(err, ModelError::InvalidSample { index: 1 }));
    }

    #[test]
    fn test_reproduces_training_labels() {
        let model = CongestionModel::train(&REFERENCE_SAMPLES).unwrap();
        for sample in REFERENCE_SAMPLES {
            let predicted = model.predict(sample.vehicle_count as u32, sample.avg_speed_kmh);
            assert_eq!(predicted, sample.risk);
        }
    }

    #[test]
    fn test_reference_matches_trained() {
        let trained = CongestionModel::train(&REFERENCE_SAMPLES).unwrap();
        let reference = CongestionModel::reference();
        for (count, speed) in [(15, 55.0), (35, 33.0), (70, 20.0), (45, 12.0)] {
            assert_eq!(trained.predict(count, speed), reference.predict(count, speed));
        }
    }

    #[test]
    fn test_light_traffic_is_low() {
        let model = CongestionModel::reference();
        assert_eq!(model.predict(12, 58.0), CongestionRisk::Low);
    }

    #[test]
    fn test_heavy_traffic_is_high() {
        let model = CongestionModel::reference();
        assert_eq!(model.predict(95, 11.0), CongestionRisk::High);
        assert!(model.predict(95, 11.0).is_incident());
    }

    #[test]
    fn test_single_sample_model() {
        let model =
            CongestionModel::train(&[TrainingSample::new(50.0, 30.0, CongestionRisk::Medium)])
                .unwrap();
        assert_eq!(model.predict(10, 80.0), CongestionRisk::Medium);
    }

    #[test]
    fn test_from_score_clamps() {
        assert_eq!(CongestionRisk::from_score(-3.0), CongestionRisk::Low);
        assert_eq!(CongestionRisk::from_score(0.49), CongestionRisk::Low);
        assert_eq!(CongestionRisk::from_score(0.5), CongestionRisk::Medium);
        assert_eq!(CongestionRisk::from_score(1.49), CongestionRisk::Medium);
        assert_eq!(CongestionRisk::from_score(7.0), CongestionRisk::High);
        assert_eq!(CongestionRisk::from_score(f64::NAN), CongestionRisk::Low);
    }

    #[test]
    fn test_risk_serializes_as_number() {
        assert_eq!(serde_json::to_string(&CongestionRisk::High).unwrap(), "2");
        let risk: CongestionRisk = serde_json::from_str("1").unwrap();
        assert_eq!(risk, CongestionRisk::Medium);
        assert!(serde_json::from_str::<CongestionRisk>("5").is_err());
    }
}

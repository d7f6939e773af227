//! Dashboard Aggregates
//!
//! Summary figures derived from the current record set. Recomputed on
//! every render; all of them accept an empty set.

use std::fmt;

use super::traffic::{TrafficRecord, TrafficSnapshot};

/// Shown when there are no records to aggregate
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown on data-driven cards while a fetch is in flight
pub const LOADING_PLACEHOLDER: &str = "...";

pub const SPEED_UNIT: &str = "kmph";

/// Mean risk below this is Low
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.5;

/// Mean risk at or above this is High
pub const HIGH_RISK_THRESHOLD: f64 = 1.5;

/// Signal health until a signal-health feed exists
pub const SIGNALS_STAT: &str = "156/158";

/// Congestion band for a risk value or a mean of risk values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CongestionLevel {
    Low,
    Medium,
    High,
}

impl CongestionLevel {
    pub fn classify(risk: f64) -> Self {
        if risk < MEDIUM_RISK_THRESHOLD {
            CongestionLevel::Low
        } else if risk < HIGH_RISK_THRESHOLD {
            CongestionLevel::Medium
        } else {
            CongestionLevel::High
        }
    }

    /// Tailwind text colour for this band
    pub fn text_class(&self) -> &'static str {
        match self {
            CongestionLevel::Low => "text-green-400",
            CongestionLevel::Medium => "text-amber-400",
            CongestionLevel::High => "text-red-400",
        }
    }

    /// Tailwind background colour for this band
    pub fn bg_class(&self) -> &'static str {
        match self {
            CongestionLevel::Low => "bg-green-400",
            CongestionLevel::Medium => "bg-amber-400",
            CongestionLevel::High => "bg-red-400",
        }
    }
}

impl fmt::Display for CongestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CongestionLevel::Low => write!(f, "Low"),
            CongestionLevel::Medium => write!(f, "Medium"),
            CongestionLevel::High => write!(f, "High"),
        }
    }
}

fn mean(records: &[TrafficRecord], field: impl Fn(&TrafficRecord) -> f64) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(field).sum();
    Some(sum / records.len() as f64)
}

/// Band of the mean congestion risk, or "N/A"
pub fn overall_congestion(records: &[TrafficRecord]) -> String {
    mean(records, |r| r.congestion_risk)
        .map(|m| CongestionLevel::classify(m).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Records flagged as an active incident
pub fn total_incidents(records: &[TrafficRecord]) -> usize {
    records.iter().filter(|r| r.is_incident()).count()
}

/// Mean speed to one decimal with unit, or "N/A"
pub fn avg_speed(records: &[TrafficRecord]) -> String {
    mean(records, |r| r.avg_speed_kmh)
        .map(|m| format!("{:.1} {}", m, SPEED_UNIT))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn signals_stat() -> &'static str {
    SIGNALS_STAT
}

/// Text for the four summary cards
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardMetrics {
    pub congestion: String,
    pub incidents: String,
    pub avg_speed: String,
    pub signals: String,
}

impl DashboardMetrics {
    /// Data-driven cards show the loading placeholder while a fetch is in
    /// flight; the signals card never does.
    pub fn from_snapshot(snapshot: &TrafficSnapshot) -> Self {
        let records = &snapshot.records;
        let gated = |value: String| {
            if snapshot.loading {
                LOADING_PLACEHOLDER.to_string()
            } else {
                value
            }
        };

        Self {
            congestion: gated(overall_congestion(records)),
            incidents: gated(format!("{} Active", total_incidents(records))),
            avg_speed: gated(avg_speed(records)),
            signals: signals_stat().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::traffic::record;

    fn with_risks(risks: &[f64]) -> Vec<TrafficRecord> {
        risks.iter().map(|&r| record("a", "b", 30.0, r)).collect()
    }

    fn with_speeds(speeds: &[f64]) -> Vec<TrafficRecord> {
        speeds.iter().map(|&s| record("a", "b", s, 0.0)).collect()
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(overall_congestion(&[]), "N/A");
        assert_eq!(avg_speed(&[]), "N/A");
        assert_eq!(total_incidents(&[]), 0);
    }

    #[test]
    fn test_congestion_bands() {
        assert_eq!(overall_congestion(&with_risks(&[0.2, 0.3, 0.4])), "Low");
        assert_eq!(overall_congestion(&with_risks(&[0.5, 1.0, 1.4])), "Medium");
        assert_eq!(overall_congestion(&with_risks(&[1.5, 2.0])), "High");
    }

    #[test]
    fn test_congestion_boundaries_inclusive_below() {
        assert_eq!(overall_congestion(&with_risks(&[0.5])), "Medium");
        assert_eq!(overall_congestion(&with_risks(&[0.0, 1.0])), "Medium");
        assert_eq!(overall_congestion(&with_risks(&[1.5])), "High");
        assert_eq!(overall_congestion(&with_risks(&[1.0, 2.0])), "High");
    }

    #[test]
    fn test_incidents_count_exact_code() {
        let records = with_risks(&[2.0, 2.0, 1.0, 0.0, 3.0, 2.5]);
        assert_eq!(total_incidents(&records), 2);
    }

    #[test]
    fn test_avg_speed_formatting() {
        assert_eq!(avg_speed(&with_speeds(&[40.0, 50.0])), "45.0 kmph");
        assert_eq!(avg_speed(&with_speeds(&[33.333])), "33.3 kmph");
        assert_eq!(avg_speed(&with_speeds(&[10.0, 10.4])), "10.2 kmph");
    }

    #[test]
    fn test_signals_stat_is_constant() {
        assert_eq!(signals_stat(), "156/158");
    }

    #[test]
    fn test_cards_while_loading() {
        let snapshot = TrafficSnapshot::new();
        let metrics = DashboardMetrics::from_snapshot(&snapshot);

        assert_eq!(metrics.congestion, "...");
        assert_eq!(metrics.incidents, "...");
        assert_eq!(metrics.avg_speed, "...");
        assert_eq!(metrics.signals, "156/158");
    }

    #[test]
    fn test_cards_after_load() {
        let mut snapshot = TrafficSnapshot::new();
        snapshot.apply(
            Ok(vec![record("a", "b", 40.0, 2.0), record("b", "c", 50.0, 1.0)]),
            0,
        );
        let metrics = DashboardMetrics::from_snapshot(&snapshot);

        assert_eq!(metrics.congestion, "High");
        assert_eq!(metrics.incidents, "1 Active");
        assert_eq!(metrics.avg_speed, "45.0 kmph");
    }

    #[test]
    fn test_classify_per_record() {
        assert_eq!(CongestionLevel::classify(0.0), CongestionLevel::Low);
        assert_eq!(CongestionLevel::classify(1.0), CongestionLevel::Medium);
        assert_eq!(CongestionLevel::classify(2.0), CongestionLevel::High);
    }
}

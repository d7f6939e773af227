//! Traffic Feed State
//!
//! The record set held by the dashboard and the loading/error flags that
//! travel with it.

use crate::api::FetchError;

/// Congestion risk code the feed uses to flag an active incident
pub const INCIDENT_RISK: f64 = 2.0;

/// One observed traffic edge, as served by `GET /api/traffic`
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TrafficRecord {
    pub from: String,
    pub to: String,
    pub distance_m: f64,
    pub duration_s: f64,
    pub avg_speed_kmh: f64,
    pub vehicle_count: u32,
    pub congestion_risk: f64,
    /// Sample time, displayed verbatim
    pub timestamp: String,
}

impl TrafficRecord {
    /// Exactly [`INCIDENT_RISK`]; higher or fractional codes don't count
    pub fn is_incident(&self) -> bool {
        self.congestion_risk == INCIDENT_RISK
    }
}

/// How a poll result changed the health of the feed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedTransition {
    Unchanged,
    /// First failure after data had been flowing
    Lost,
    /// First success after a failure
    Restored,
}

/// Everything one poll tick may change, updated as a unit
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficSnapshot {
    /// Most recent successful fetch, in full
    pub records: Vec<TrafficRecord>,
    /// A fetch is in flight
    pub loading: bool,
    /// User-facing message for the last failed fetch
    pub error: Option<String>,
    /// Milliseconds since epoch of the last successful fetch
    pub last_updated: Option<i64>,
}

impl Default for TrafficSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficSnapshot {
    /// Empty record set, loading until the first poll resolves
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
            last_updated: None,
        }
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Apply one poll outcome.
    ///
    /// Success replaces the records wholesale and clears the error; failure
    /// keeps the previous records and records the error. Either way the
    /// fetch is no longer in flight.
    pub fn apply(
        &mut self,
        outcome: Result<Vec<TrafficRecord>, FetchError>,
        now_ms: i64,
    ) -> FeedTransition {
        let was_failing = self.error.is_some();

        let transition = match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
                self.last_updated = Some(now_ms);
                if was_failing {
                    FeedTransition::Restored
                } else {
                    FeedTransition::Unchanged
                }
            }
            Err(e) => {
                self.error = Some(e.user_message().to_string());
                if !was_failing && self.last_updated.is_some() {
                    FeedTransition::Lost
                } else {
                    FeedTransition::Unchanged
                }
            }
        };

        self.loading = false;
        transition
    }
}

#[cfg(test)]
pub(crate) fn record(from: &str, to: &str, speed: f64, risk: f64) -> TrafficRecord {
    TrafficRecord {
        from: from.to_string(),
        to: to.to_string(),
        distance_m: 1000.0,
        duration_s: 120.0,
        avg_speed_kmh: speed,
        vehicle_count: 20,
        congestion_risk: risk,
        timestamp: "2024-05-01T08:00:00".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_and_loading() {
        let snapshot = TrafficSnapshot::new();
        assert!(snapshot.records.is_empty());
        assert!(snapshot.loading);
        assert!(snapshot.error.is_none());
    }

    #[test]
    fn test_success_replaces_wholesale() {
        let mut snapshot = TrafficSnapshot::new();
        snapshot.apply(
            Ok(vec![record("sensor_A", "sensor_B", 40.0, 0.0), record("sensor_B", "sensor_C", 30.0, 1.0)]),
            1_000,
        );
        snapshot.begin_fetch();
        snapshot.apply(Ok(vec![record("sensor_C", "sensor_A", 20.0, 2.0)]), 6_000);

        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].from, "sensor_C");
        assert_eq!(snapshot.last_updated, Some(6_000));
        assert!(!snapshot.loading);
    }

    #[test]
    fn test_failure_keeps_previous_records() {
        let mut snapshot = TrafficSnapshot::new();
        let records = vec![record("sensor_A", "sensor_B", 40.0, 0.0)];
        snapshot.apply(Ok(records.clone()), 1_000);

        snapshot.begin_fetch();
        let transition = snapshot.apply(Err(FetchError::Status(503)), 6_000);

        assert_eq!(snapshot.records, records);
        assert_eq!(snapshot.error.as_deref(), Some("Failed to fetch traffic data"));
        assert_eq!(snapshot.last_updated, Some(1_000));
        assert!(!snapshot.loading);
        assert_eq!(transition, FeedTransition::Lost);
    }

    #[test]
    fn test_success_clears_error() {
        let mut snapshot = TrafficSnapshot::new();
        snapshot.apply(Err(FetchError::Network("offline".to_string())), 1_000);
        assert!(snapshot.error.is_some());

        let transition = snapshot.apply(Ok(vec![]), 6_000);
        assert!(snapshot.error.is_none());
        assert_eq!(transition, FeedTransition::Restored);
    }

    #[test]
    fn test_repeated_failures_report_once() {
        let mut snapshot = TrafficSnapshot::new();
        snapshot.apply(Ok(vec![]), 1_000);

        let first = snapshot.apply(Err(FetchError::Status(500)), 6_000);
        let second = snapshot.apply(Err(FetchError::Status(500)), 11_000);
        assert_eq!(first, FeedTransition::Lost);
        assert_eq!(second, FeedTransition::Unchanged);
    }

    #[test]
    fn test_parse_failure_treated_like_transport_failure() {
        let mut a = TrafficSnapshot::new();
        let mut b = TrafficSnapshot::new();
        a.apply(Err(FetchError::Parse("expected value".to_string())), 0);
        b.apply(Err(FetchError::Network("connection refused".to_string())), 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_incident_is_exact() {
        assert!(record("a", "b", 10.0, 2.0).is_incident());
        assert!(!record("a", "b", 10.0, 2.5).is_incident());
        assert!(!record("a", "b", 10.0, 3.0).is_incident());
        assert!(!record("a", "b", 10.0, 1.0).is_incident());
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "from": "sensor_A",
            "to": "sensor_B",
            "distance_m": 1500,
            "duration_s": 300,
            "avg_speed_kmh": 18.0,
            "vehicle_count": 33,
            "congestion_risk": 1,
            "timestamp": "2024-05-01T08:00:00.123456"
        }"#;

        let record: TrafficRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.distance_m, 1500.0);
        assert_eq!(record.vehicle_count, 33);
        assert_eq!(record.congestion_risk, 1.0);
    }
}

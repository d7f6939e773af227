//! Sensor Network Topology
//!
//! The fixed set of sensors, monitored edges and signalised junctions.

use super::types::{GeoPoint, Sensor, SignalSite};

pub static SENSORS: [Sensor; 3] = [
    Sensor {
        id: "sensor_A",
        location: GeoPoint::new(28.7041, 77.1025),
    },
    Sensor {
        id: "sensor_B",
        location: GeoPoint::new(28.7050, 77.1050),
    },
    Sensor {
        id: "sensor_C",
        location: GeoPoint::new(28.7060, 77.1000),
    },
];

/// Directed edges sampled on every generation pass, in output order
pub const SENSOR_PAIRS: [(&str, &str); 3] = [
    ("sensor_A", "sensor_B"),
    ("sensor_B", "sensor_C"),
    ("sensor_C", "sensor_A"),
];

pub static SIGNAL_SITES: [SignalSite; 3] = [
    SignalSite {
        id: "signal_1",
        name: "MG Road Junction",
        location: GeoPoint::new(28.7045, 77.1030),
    },
    SignalSite {
        id: "signal_2",
        name: "NH-48 Crossing",
        location: GeoPoint::new(28.7055, 77.1060),
    },
    SignalSite {
        id: "signal_3",
        name: "Market Square",
        location: GeoPoint::new(28.7065, 77.1010),
    },
];

/// Look up a sensor by id
pub fn sensor(id: &str) -> Option<&'static Sensor> {
    SENSORS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_resolves() {
        for (from, to) in SENSOR_PAIRS {
            assert!(sensor(from).is_some(), "unknown sensor {}", from);
            assert!(sensor(to).is_some(), "unknown sensor {}", to);
            assert_ne!(from, to);
        }
    }

    #[test]
    fn test_unknown_sensor() {
        assert!(sensor("sensor_Z").is_none());
    }
}

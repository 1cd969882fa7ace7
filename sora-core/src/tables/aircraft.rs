//! UA size/speed classes

use serde::{Deserialize, Serialize};
use std::fmt;

/// UA class: maximum characteristic dimension and maximum speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UaClass {
    #[serde(rename = "1m_25ms")]
    Class1m25ms,
    #[serde(rename = "3m_35ms")]
    Class3m35ms,
    #[serde(rename = "8m_75ms")]
    Class8m75ms,
    #[serde(rename = "20m_120ms")]
    Class20m120ms,
    #[serde(rename = "40m_200ms")]
    Class40m200ms,
}

impl UaClass {
    pub const ALL: [UaClass; 5] = [
        UaClass::Class1m25ms,
        UaClass::Class3m35ms,
        UaClass::Class8m75ms,
        UaClass::Class20m120ms,
        UaClass::Class40m200ms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UaClass::Class1m25ms => "1m_25ms",
            UaClass::Class3m35ms => "3m_35ms",
            UaClass::Class8m75ms => "8m_75ms",
            UaClass::Class20m120ms => "20m_120ms",
            UaClass::Class40m200ms => "40m_200ms",
        }
    }

    /// Column index in the intrinsic GRC matrix
    pub fn index(&self) -> usize {
        match self {
            UaClass::Class1m25ms => 0,
            UaClass::Class3m35ms => 1,
            UaClass::Class8m75ms => 2,
            UaClass::Class20m120ms => 3,
            UaClass::Class40m200ms => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UaClass::Class1m25ms => "1 m / 25 m/s",
            UaClass::Class3m35ms => "3 m / 35 m/s",
            UaClass::Class8m75ms => "8 m / 75 m/s",
            UaClass::Class20m120ms => "20 m / 120 m/s",
            UaClass::Class40m200ms => "40 m / 200 m/s",
        }
    }

    /// Maximum characteristic dimension (wingspan or rotor diameter) in metres
    pub fn max_dimension_m(&self) -> f64 {
        match self {
            UaClass::Class1m25ms => 1.0,
            UaClass::Class3m35ms => 3.0,
            UaClass::Class8m75ms => 8.0,
            UaClass::Class20m120ms => 20.0,
            UaClass::Class40m200ms => 40.0,
        }
    }

    /// Maximum speed in metres per second
    pub fn max_speed_mps(&self) -> f64 {
        match self {
            UaClass::Class1m25ms => 25.0,
            UaClass::Class3m35ms => 35.0,
            UaClass::Class8m75ms => 75.0,
            UaClass::Class20m120ms => 120.0,
            UaClass::Class40m200ms => 200.0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UaClass::Class1m25ms => "Small multirotors and light fixed-wing",
            UaClass::Class3m35ms => "Medium multirotors and small fixed-wing",
            UaClass::Class8m75ms => "Large multirotors and medium fixed-wing",
            UaClass::Class20m120ms => "Large fixed-wing and helicopter-class UA",
            UaClass::Class40m200ms => "Very large fixed-wing UA",
        }
    }
}

impl fmt::Display for UaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, class) in UaClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }

    #[test]
    fn test_deserialize_class_key() {
        let class: UaClass = serde_json::from_str("\"20m_120ms\"").unwrap();
        assert_eq!(class, UaClass::Class20m120ms);
        assert_eq!(class.max_speed_mps(), 120.0);
        assert!(serde_json::from_str::<UaClass>("\"2m_30ms\"").is_err());
    }
}

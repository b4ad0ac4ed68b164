//! Reading Module - Input Schema and Validation
//!
//! A `SensorReading` is built fresh per submission, validated against the
//! documented domains, encoded into the canonical feature vector, and
//! discarded. Nothing here touches the artifacts.

pub mod layout;
pub mod vector;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use vector::FeatureVector;

// ============================================================================
// CONFIDENCE
// ============================================================================

/// MODIS detection confidence.
///
/// The ordinal encoding (low=0, nominal=1, high=2) matches the artifact's
/// training-time encoding and must not change independently of the artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Nominal,
    High,
}

impl Confidence {
    pub fn ordinal(&self) -> u8 {
        match self {
            Confidence::Low => 0,
            Confidence::Nominal => 1,
            Confidence::High => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Nominal => "nominal",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Confidence::Low),
            "nominal" => Ok(Confidence::Nominal),
            "high" => Ok(Confidence::High),
            _ => Err(ValidationError {
                field: "confidence",
                value: f32::NAN,
                min: 0.0,
                max: 2.0,
            }),
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Input field outside its documented domain.
///
/// Caller-recoverable: the request is rejected before the artifacts are
/// touched and may be resubmitted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field} = {value} is outside the valid range [{min}, {max}]")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub min: f32,
    pub max: f32,
}

// ============================================================================
// SENSOR READING
// ============================================================================

/// One MODIS thermal anomaly observation as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Band 21/22 brightness temperature in Kelvin
    pub brightness: f32,
    /// Band 31 surface temperature in Kelvin
    pub bright_t31: f32,
    /// Fire Radiative Power in megawatts
    pub frp: f32,
    /// Pixel width on the ground in kilometers
    pub scan: f32,
    /// Pixel height on the ground in kilometers
    pub track: f32,
    /// Detection confidence reported by the MODIS algorithm
    pub confidence: Confidence,
}

impl SensorReading {
    /// Field names and values in canonical layout order.
    ///
    /// This is the only place the struct fields meet FEATURE_LAYOUT; the UI
    /// presents them in a different order, the artifacts were fit on this one.
    pub fn named_values(&self) -> [(&'static str, f32); FEATURE_COUNT] {
        [
            ("brightness", self.brightness),
            ("bright_t31", self.bright_t31),
            ("frp", self.frp),
            ("scan", self.scan),
            ("track", self.track),
            ("confidence", self.confidence.ordinal() as f32),
        ]
    }

    /// Check every field against its inclusive domain.
    ///
    /// NaN fails every domain. The first offending field is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, (field, value)) in self.named_values().into_iter().enumerate() {
            let (min, max) = layout::FEATURE_DOMAINS[index];
            if !(value >= min && value <= max) {
                return Err(ValidationError {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Encode into the canonical feature vector. Does not validate.
    pub fn to_vector(&self) -> FeatureVector {
        let mut values = [0.0f32; FEATURE_COUNT];
        for (i, (_, value)) in self.named_values().into_iter().enumerate() {
            values[i] = value;
        }
        FeatureVector::from_values(values)
    }
}

// ============================================================================
// TESTS
// ============================================================================

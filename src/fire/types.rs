//! Fire Types
//!
//! Core types for fire-type classification. No logic beyond the literal
//! lookup tables, which are part of the bit-exact output contract.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// FIRE CLASS
// ============================================================================

/// MODIS fire-type classes. The label space is closed: the artifacts were
/// trained on exactly these four codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireClass {
    /// Code 0
    VegetationFire,
    /// Code 1
    Volcano,
    /// Code 2
    StaticLandSource,
    /// Code 3
    Offshore,
}

impl FireClass {
    pub const ALL: [FireClass; 4] = [
        FireClass::VegetationFire,
        FireClass::Volcano,
        FireClass::StaticLandSource,
        FireClass::Offshore,
    ];

    /// Map a predicted code into the closed label space.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(FireClass::VegetationFire),
            1 => Some(FireClass::Volcano),
            2 => Some(FireClass::StaticLandSource),
            3 => Some(FireClass::Offshore),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            FireClass::VegetationFire => 0,
            FireClass::Volcano => 1,
            FireClass::StaticLandSource => 2,
            FireClass::Offshore => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FireClass::VegetationFire => "vegetation_fire",
            FireClass::Volcano => "volcano",
            FireClass::StaticLandSource => "static_land_source",
            FireClass::Offshore => "offshore",
        }
    }

    /// Human label, exact contract string
    pub fn label(&self) -> &'static str {
        match self {
            FireClass::VegetationFire => "Vegetation Fire",
            FireClass::Volcano => "Volcano",
            FireClass::StaticLandSource => "Static Land Source",
            FireClass::Offshore => "Offshore",
        }
    }

    /// Short description, exact contract string
    pub fn description(&self) -> &'static str {
        match self {
            FireClass::VegetationFire => {
                "Natural vegetation fires — forests, grasslands, agricultural burns"
            }
            FireClass::Volcano => "Volcanic thermal activity (rare in Indian subcontinent)",
            FireClass::StaticLandSource => {
                "Industrial fires, gas flares, urban thermal sources"
            }
            FireClass::Offshore => {
                "Maritime fires, offshore platforms, coastal thermal activity"
            }
        }
    }

    /// Contextual note, exact contract string
    pub fn context(&self) -> &'static str {
        match self {
            FireClass::VegetationFire => {
                "Common during dry seasons, particularly in forest areas and agricultural regions"
            }
            FireClass::Volcano => {
                "Typically associated with volcanic regions — uncommon in India"
            }
            FireClass::StaticLandSource => {
                "Often related to industrial activities, refineries, or urban fire incidents"
            }
            FireClass::Offshore => {
                "Usually occurs in coastal areas, shipping lanes, or offshore installations"
            }
        }
    }
}

impl fmt::Display for FireClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// UNKNOWN LABEL
// ============================================================================

/// Predicted code outside the closed label space.
///
/// Surfaced instead of defaulting to an "Unknown" label: an out-of-range
/// code means the artifact and this schema disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("model predicted fire type code {0}, outside the known set 0..=3")]
pub struct UnknownLabelError(pub i64);

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Result of fire-type classification, enriched with the literal tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub fire_class: FireClass,
    pub code: u8,
    pub label: String,
    pub description: String,
    pub context: String,
}

impl ClassificationResult {
    /// Enrich a known class with its contract strings.
    pub fn for_class(fire_class: FireClass) -> Self {
        Self {
            fire_class,
            code: fire_class.code(),
            label: fire_class.label().to_string(),
            description: fire_class.description().to_string(),
            context: fire_class.context().to_string(),
        }
    }

    /// Enrich a raw predicted code, rejecting anything outside the set.
    pub fn from_code(code: i64) -> Result<Self, UnknownLabelError> {
        FireClass::from_code(code)
            .map(Self::for_class)
            .ok_or(UnknownLabelError(code))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping_roundtrip() {
        for class in FireClass::ALL {
            assert_eq!(FireClass::from_code(class.code() as i64), Some(class));
        }
        assert_eq!(FireClass::from_code(4), None);
        assert_eq!(FireClass::from_code(-1), None);
    }

    #[test]
    fn test_labels_match_contract() {
        assert_eq!(FireClass::VegetationFire.label(), "Vegetation Fire");
        assert_eq!(FireClass::Volcano.label(), "Volcano");
        assert_eq!(FireClass::StaticLandSource.label(), "Static Land Source");
        assert_eq!(FireClass::Offshore.label(), "Offshore");
    }

    #[test]
    fn test_descriptions_match_contract() {
        assert_eq!(
            FireClass::VegetationFire.description(),
            "Natural vegetation fires — forests, grasslands, agricultural burns"
        );
        assert_eq!(
            FireClass::Offshore.context(),
            "Usually occurs in coastal areas, shipping lanes, or offshore installations"
        );
    }

    #[test]
    fn test_result_enrichment() {
        let result = ClassificationResult::from_code(2).unwrap();
        assert_eq!(result.fire_class, FireClass::StaticLandSource);
        assert_eq!(result.code, 2);
        assert_eq!(result.label, "Static Land Source");
        assert_eq!(
            result.description,
            "Industrial fires, gas flares, urban thermal sources"
        );
        assert_eq!(
            result.context,
            "Often related to industrial activities, refineries, or urban fire incidents"
        );
    }

    #[test]
    fn test_unknown_code_is_error() {
        let err = ClassificationResult::from_code(7).unwrap_err();
        assert_eq!(err, UnknownLabelError(7));
        assert!(ClassificationResult::from_code(-2).is_err());
    }
}

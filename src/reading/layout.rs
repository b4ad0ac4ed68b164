//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The scaler and classifier were fit on this exact order. Rules:
//! 1. Add feature -> increment FEATURE_VERSION and retrain the artifacts
//! 2. Change order -> increment FEATURE_VERSION and retrain the artifacts
//! 3. Never permute the order independently of the artifacts

use once_cell::sync::Lazy;

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

/// Feature names in the exact order the artifacts were fit on.
/// This is the SINGLE SOURCE OF TRUTH for feature layout.
pub const FEATURE_LAYOUT: &[&str] = &[
    "brightness", // 0: Band 21/22 brightness temperature (K)
    "bright_t31", // 1: Band 31 surface temperature (K)
    "frp",        // 2: Fire Radiative Power (MW)
    "scan",       // 3: Pixel width on the ground (km)
    "track",      // 4: Pixel height on the ground (km)
    "confidence", // 5: Detection confidence ordinal (low=0, nominal=1, high=2)
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 6;

/// Inclusive (min, max) domain per feature, indexed like FEATURE_LAYOUT.
pub const FEATURE_DOMAINS: &[(f32, f32)] = &[
    (250.0, 500.0),  // brightness (K)
    (250.0, 400.0),  // bright_t31 (K)
    (0.0, 1000.0),   // frp (MW)
    (0.5, 5.0),      // scan (km)
    (0.5, 5.0),      // track (km)
    (0.0, 2.0),      // confidence ordinal
];

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// Compute CRC32 hash of the feature layout
/// Used to detect layout mismatches at runtime
pub fn compute_layout_hash() -> u32 {
    let mut hasher = crc32fast::Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

static LAYOUT_HASH: Lazy<u32> = Lazy::new(compute_layout_hash);

/// Get layout hash (computed once, inputs are const)
pub fn layout_hash() -> u32 {
    *LAYOUT_HASH
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when feature layout doesn't match expected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), \
     got v{actual_version} (hash: {actual_hash:08x})"
)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

/// Validate that incoming data matches current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<(), LayoutMismatchError> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current_hash,
            actual_version: incoming_version,
            actual_hash: incoming_hash,
        });
    }

    Ok(())
}

// ============================================================================
// FEATURE LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

/// Get the inclusive domain for a feature index
pub fn feature_domain(index: usize) -> Option<(f32, f32)> {
    FEATURE_DOMAINS.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================

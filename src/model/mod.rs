//! Model Module - Artifact Capability Seam
//!
//! The scaler and classifier are externally trained, load-once, read-only
//! artifacts. They are reached through the two traits below so the pipeline
//! never depends on a concrete serialization format.

pub mod classifier;
pub mod scaler;

pub use classifier::{ModelMetadata, OnnxClassifier};
pub use scaler::StandardScaler;

use crate::reading::FEATURE_COUNT;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Unexpected failure inside transform or predict.
///
/// Indicates a schema/artifact mismatch, not a transient failure. Never
/// retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("inference failed: {0}")]
pub struct InferenceError(pub String);

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Pre-fit scaling transform over the canonical feature order.
///
/// Implementations carry training-time statistics verbatim and never compute
/// their own.
pub trait Scaler: Send + Sync {
    fn transform(
        &self,
        features: &[f32; FEATURE_COUNT],
    ) -> Result<[f32; FEATURE_COUNT], InferenceError>;
}

/// Pre-fit multi-class classifier over the scaler's output space.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f32; FEATURE_COUNT]) -> Result<i64, InferenceError>;
}

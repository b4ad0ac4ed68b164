//! Inference Service
//!
//! The full request pipeline: validate, encode, scale, predict, enrich.
//! Stateless per call; the service holds only the two load-once artifacts
//! behind their capability traits, so parallel callers are safe.

use crate::artifacts::{ArtifactError, ArtifactPaths};
use crate::fire::{ClassificationResult, UnknownLabelError};
use crate::model::{Classifier, InferenceError, OnnxClassifier, Scaler, StandardScaler};
use crate::reading::{SensorReading, ValidationError};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Per-request error umbrella for [`InferenceService::classify`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabelError),
}

// ============================================================================
// SERVICE
// ============================================================================

/// The inference service: one scaler, one classifier, both immutable after
/// construction. Built explicitly at startup and injected into callers.
pub struct InferenceService {
    scaler: Box<dyn Scaler>,
    classifier: Box<dyn Classifier>,
}

impl InferenceService {
    /// Assemble from already-loaded artifacts.
    pub fn new(scaler: Box<dyn Scaler>, classifier: Box<dyn Classifier>) -> Self {
        Self { scaler, classifier }
    }

    /// Load both artifacts from resolved paths. Any failure is fatal: the
    /// service must not exist partially initialized.
    pub fn from_artifacts(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let scaler = StandardScaler::load(&paths.scaler)?;
        let classifier = OnnxClassifier::load(&paths.model)?;

        let meta = classifier.metadata();
        log::info!(
            "Model ready: {} ({} features, loaded at {})",
            meta.model_path,
            meta.features,
            meta.loaded_at
        );

        Ok(Self::new(Box::new(scaler), Box::new(classifier)))
    }

    /// Classify one reading.
    ///
    /// 1. Validate every field against its documented domain
    /// 2. Encode into the canonical feature vector
    /// 3. Apply the pre-fit scaling transform
    /// 4. Run the pre-fit classifier
    /// 5. Enrich the predicted code with the literal label tables
    ///
    /// Pure function of the reading and the loaded artifacts.
    pub fn classify(&self, reading: &SensorReading) -> Result<ClassificationResult, ClassifyError> {
        reading.validate()?;

        let vector = reading.to_vector();
        let scaled = self.scaler.transform(vector.as_array())?;
        let code = self.classifier.predict(&scaled)?;

        let result = ClassificationResult::from_code(code)?;
        log::debug!("classified reading as {} (code {})", result.label, result.code);

        Ok(result)
    }
}

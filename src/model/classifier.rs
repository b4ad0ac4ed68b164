//! ONNX Classifier - native ONNX Runtime integration
//!
//! The trained fire-type model is re-exported to ONNX at training time and
//! loaded here once at startup. Prediction runs entirely in memory.

use chrono::{DateTime, Utc};
use ndarray::Array2;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;

use super::{Classifier, InferenceError};
use crate::artifacts::ArtifactError;
use crate::reading::FEATURE_COUNT;

/// Model metadata for status reporting. Never part of a classification
/// result, so results stay byte-identical for identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub features: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Pre-trained multi-class fire-type classifier behind an ONNX session.
///
/// The session needs `&mut` to run, so it sits behind a lock; everything
/// else about the classifier is immutable after load.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    metadata: ModelMetadata,
}

impl OnnxClassifier {
    /// Load the ONNX model from file. Fails fast so the service never starts
    /// partially initialized.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        log::info!("Loading ONNX model from: {}", path.display());

        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let session = Session::builder()
            .map_err(|e| ArtifactError::InvalidModel(format!("failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ArtifactError::InvalidModel(format!("failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ArtifactError::InvalidModel(format!("failed to load model: {}", e)))?;

        log::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            metadata: ModelMetadata {
                model_path: path.display().to_string(),
                features: FEATURE_COUNT,
                loaded_at: Utc::now(),
            },
        })
    }

    /// Get model metadata
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &[f32; FEATURE_COUNT]) -> Result<i64, InferenceError> {
        let mut session = self.session.lock();

        // Input tensor: shape (1, features)
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.to_vec())
            .map_err(|e| InferenceError(format!("failed to create array: {}", e)))?;

        // Get output name BEFORE run to avoid borrow conflict
        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| InferenceError("no output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("failed to create tensor: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError("no output from model".to_string()))?;

        // Converted sklearn models emit either an int64 label tensor or
        // per-class scores, depending on export options. Accept both.
        if let Ok(labels) = output.try_extract_tensor::<i64>() {
            let data = labels.1;
            return data
                .first()
                .copied()
                .ok_or_else(|| InferenceError("label output is empty".to_string()));
        }

        let scores = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("failed to extract output: {}", e)))?;

        let data = scores.1;
        if data.is_empty() {
            return Err(InferenceError("score output is empty".to_string()));
        }

        let mut best = 0usize;
        for (i, &score) in data.iter().enumerate() {
            if score > data[best] {
                best = i;
            }
        }

        Ok(best as i64)
    }
}

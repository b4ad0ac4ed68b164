//! Standard Scaler - hand-ported standardization coefficients
//!
//! The training pipeline exports the fitted scaler's per-feature mean and
//! scale into a JSON sidecar. Loading checks the sidecar against the
//! canonical layout so a stale export fails at startup, not at predict time.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::{InferenceError, Scaler};
use crate::artifacts::ArtifactError;
use crate::reading::{FEATURE_COUNT, FEATURE_LAYOUT};

/// Sidecar file format, as exported at training time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    /// Per-feature mean in canonical order
    pub mean: Vec<f32>,
    /// Per-feature scale (standard deviation) in canonical order
    pub scale: Vec<f32>,
    /// Optional echo of the training-time feature names, checked when present
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

/// Standardization transform: `(x - mean) / scale` per feature
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: [f32; FEATURE_COUNT],
    scale: [f32; FEATURE_COUNT],
}

impl StandardScaler {
    /// Build from sidecar parameters, rejecting any schema drift.
    pub fn from_params(params: ScalerParams) -> Result<Self, ArtifactError> {
        if let Some(names) = &params.feature_names {
            let expected: Vec<&str> = FEATURE_LAYOUT.to_vec();
            let actual: Vec<&str> = names.iter().map(String::as_str).collect();
            if actual != expected {
                return Err(ArtifactError::InvalidScaler(format!(
                    "feature names {:?} do not match the canonical layout {:?}",
                    actual, expected
                )));
            }
        }

        if params.mean.len() != FEATURE_COUNT || params.scale.len() != FEATURE_COUNT {
            return Err(ArtifactError::InvalidScaler(format!(
                "expected {} mean/scale entries, got {}/{}",
                FEATURE_COUNT,
                params.mean.len(),
                params.scale.len()
            )));
        }

        let mut mean = [0.0f32; FEATURE_COUNT];
        let mut scale = [0.0f32; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            if !params.scale[i].is_finite() || params.scale[i] == 0.0 {
                return Err(ArtifactError::InvalidScaler(format!(
                    "scale[{}] = {} is not usable",
                    i, params.scale[i]
                )));
            }
            if !params.mean[i].is_finite() {
                return Err(ArtifactError::InvalidScaler(format!(
                    "mean[{}] = {} is not usable",
                    i, params.mean[i]
                )));
            }
            mean[i] = params.mean[i];
            scale[i] = params.scale[i];
        }

        Ok(Self { mean, scale })
    }

    /// Load the sidecar from disk.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        log::info!("Loading scaler parameters from: {}", path.display());

        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let params: ScalerParams = serde_json::from_str(&content)
            .map_err(|e| ArtifactError::InvalidScaler(format!("parse failed: {}", e)))?;

        Self::from_params(params)
    }
}

impl Scaler for StandardScaler {
    fn transform(
        &self,
        features: &[f32; FEATURE_COUNT],
    ) -> Result<[f32; FEATURE_COUNT], InferenceError> {
        let mut scaled = [0.0f32; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            scaled[i] = (features[i] - self.mean[i]) / self.scale[i];
        }
        Ok(scaled)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ScalerParams {
        ScalerParams {
            mean: vec![330.0, 300.0, 50.0, 1.5, 1.5, 1.0],
            scale: vec![20.0, 10.0, 25.0, 0.5, 0.5, 0.5],
            feature_names: None,
        }
    }

    #[test]
    fn test_transform_standardizes() {
        let scaler = StandardScaler::from_params(params()).unwrap();
        let scaled = scaler.transform(&[330.0, 310.0, 25.0, 1.0, 2.0, 1.0]).unwrap();

        assert_eq!(scaled[0], 0.0);
        assert_eq!(scaled[1], 1.0);
        assert_eq!(scaled[2], -1.0);
        assert_eq!(scaled[3], -1.0);
        assert_eq!(scaled[4], 1.0);
        assert_eq!(scaled[5], 0.0);
    }

    #[test]
    fn test_matching_feature_names_accepted() {
        let mut p = params();
        p.feature_names = Some(
            ["brightness", "bright_t31", "frp", "scan", "track", "confidence"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        assert!(StandardScaler::from_params(p).is_ok());
    }

    #[test]
    fn test_mismatched_feature_names_rejected() {
        let mut p = params();
        p.feature_names = Some(
            ["bright_t31", "brightness", "frp", "scan", "track", "confidence"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        assert!(matches!(
            StandardScaler::from_params(p),
            Err(ArtifactError::InvalidScaler(_))
        ));
    }

    #[test]
    fn test_wrong_dimensionality_rejected() {
        let mut p = params();
        p.mean.pop();
        assert!(matches!(
            StandardScaler::from_params(p),
            Err(ArtifactError::InvalidScaler(_))
        ));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut p = params();
        p.scale[2] = 0.0;
        assert!(StandardScaler::from_params(p).is_err());
    }

    #[test]
    fn test_load_from_sidecar_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        fs::write(
            &path,
            serde_json::to_string(&params()).unwrap(),
        )
        .unwrap();

        let scaler = StandardScaler::load(&path).unwrap();
        assert_eq!(scaler, StandardScaler::from_params(params()).unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            StandardScaler::load(&path),
            Err(ArtifactError::NotFound(_))
        ));
    }
}

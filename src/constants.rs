//! Central Configuration Constants
//!
//! Single source of truth for artifact resolution defaults.
//! To change default artifact names or env vars, only edit this file.

use std::path::PathBuf;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "modis-fire-core";

/// Default scaler sidecar file name inside the cache directory
pub const SCALER_FILE: &str = "scaler.json";

/// Default classifier file name inside the cache directory
pub const MODEL_FILE: &str = "fire_detection_model.onnx";

/// Cache directory name under the platform local-data dir
pub const CACHE_DIR_NAME: &str = "modis-fire";

// ============================================
// Environment variable names
// ============================================

/// Explicit local path to the scaler sidecar
pub const ENV_SCALER_PATH: &str = "FIRE_SCALER_PATH";

/// Explicit local path to the ONNX classifier
pub const ENV_MODEL_PATH: &str = "FIRE_MODEL_PATH";

/// Remote URL to fetch the scaler sidecar from when not cached
pub const ENV_SCALER_URL: &str = "FIRE_SCALER_URL";

/// Remote URL to fetch the classifier from when not cached
pub const ENV_MODEL_URL: &str = "FIRE_MODEL_URL";

/// Expected SHA-256 of the scaler sidecar (hex)
pub const ENV_SCALER_SHA256: &str = "FIRE_SCALER_SHA256";

/// Expected SHA-256 of the classifier (hex)
pub const ENV_MODEL_SHA256: &str = "FIRE_MODEL_SHA256";

/// Override for the artifact cache directory
pub const ENV_CACHE_DIR: &str = "FIRE_ARTIFACT_DIR";

/// Default artifact cache directory
pub fn default_cache_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CACHE_DIR_NAME)
        .join("models")
}

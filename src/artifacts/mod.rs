//! Artifacts Module - Acquisition, Cache, and Integrity
//!
//! Resolves the scaler sidecar and the ONNX classifier before the service
//! starts. Startup-only concern: once both paths resolve, inference never
//! touches the filesystem or the network again.

pub mod integrity;

use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::constants;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Startup failure to obtain or parse an artifact. Always fatal: the service
/// must not serve any request without both artifacts ready.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("checksum mismatch for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("failed to read {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("invalid scaler artifact: {0}")]
    InvalidScaler(String),

    #[error("invalid model artifact: {0}")]
    InvalidModel(String),
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Where the two artifacts come from.
///
/// An explicit path wins; otherwise the cache is used and populated from the
/// configured URL on first run.
#[derive(Debug, Clone, Default)]
pub struct ArtifactConfig {
    pub scaler_path: Option<PathBuf>,
    pub model_path: Option<PathBuf>,
    pub scaler_url: Option<String>,
    pub model_url: Option<String>,
    pub scaler_sha256: Option<String>,
    pub model_sha256: Option<String>,
    pub cache_dir: Option<PathBuf>,
}

impl ArtifactConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            scaler_path: env::var(constants::ENV_SCALER_PATH).ok().map(PathBuf::from),
            model_path: env::var(constants::ENV_MODEL_PATH).ok().map(PathBuf::from),
            scaler_url: env::var(constants::ENV_SCALER_URL).ok(),
            model_url: env::var(constants::ENV_MODEL_URL).ok(),
            scaler_sha256: env::var(constants::ENV_SCALER_SHA256).ok(),
            model_sha256: env::var(constants::ENV_MODEL_SHA256).ok(),
            cache_dir: env::var(constants::ENV_CACHE_DIR).ok().map(PathBuf::from),
        }
    }

    fn cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(constants::default_cache_dir)
    }
}

/// Resolved on-disk locations of both artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub scaler: PathBuf,
    pub model: PathBuf,
}

// ============================================================================
// STORE
// ============================================================================

/// Resolves artifacts per [`ArtifactConfig`]: explicit path, else cached
/// file, else one-time download into the cache.
pub struct ArtifactStore {
    config: ArtifactConfig,
}

impl ArtifactStore {
    pub fn new(config: ArtifactConfig) -> Self {
        Self { config }
    }

    /// Resolve both artifacts or fail.
    pub fn ensure(&self) -> Result<ArtifactPaths, ArtifactError> {
        let cache_dir = self.config.cache_dir();
        fs::create_dir_all(&cache_dir).map_err(|e| ArtifactError::Io {
            path: cache_dir.clone(),
            reason: e.to_string(),
        })?;

        let scaler = resolve(
            self.config.scaler_path.as_deref(),
            self.config.scaler_url.as_deref(),
            &cache_dir.join(constants::SCALER_FILE),
            self.config.scaler_sha256.as_deref(),
        )?;

        let model = resolve(
            self.config.model_path.as_deref(),
            self.config.model_url.as_deref(),
            &cache_dir.join(constants::MODEL_FILE),
            self.config.model_sha256.as_deref(),
        )?;

        Ok(ArtifactPaths { scaler, model })
    }
}

fn resolve(
    explicit: Option<&Path>,
    url: Option<&str>,
    cached: &Path,
    sha256: Option<&str>,
) -> Result<PathBuf, ArtifactError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ArtifactError::NotFound(path.to_path_buf()));
        }
        verify(path, sha256)?;
        return Ok(path.to_path_buf());
    }

    if !cached.exists() {
        let url = url.ok_or_else(|| ArtifactError::NotFound(cached.to_path_buf()))?;
        download(url, cached)?;
    }

    verify(cached, sha256)?;
    Ok(cached.to_path_buf())
}

fn download(url: &str, dest: &Path) -> Result<(), ArtifactError> {
    log::info!("Downloading artifact from: {}", url);

    let response = ureq::get(url).call().map_err(|e| ArtifactError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ArtifactError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    fs::write(dest, &bytes).map_err(|e| ArtifactError::Io {
        path: dest.to_path_buf(),
        reason: e.to_string(),
    })?;

    log::info!("Cached artifact at: {}", dest.display());
    Ok(())
}

fn verify(path: &Path, expected: Option<&str>) -> Result<(), ArtifactError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let actual = integrity::sha256_file(path)?;
    if !actual.eq_ignore_ascii_case(expected) {
        return Err(ArtifactError::ChecksumMismatch {
            path: path.to_path_buf(),
            expected: expected.to_string(),
            actual,
        });
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(dir: &Path) -> ArtifactConfig {
        ArtifactConfig {
            cache_dir: Some(dir.to_path_buf()),
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_paths_win() {
        let dir = tempfile::tempdir().unwrap();
        let scaler = dir.path().join("my-scaler.json");
        let model = dir.path().join("my-model.onnx");
        fs::write(&scaler, b"{}").unwrap();
        fs::write(&model, b"onnx").unwrap();

        let mut config = config_with(dir.path());
        config.scaler_path = Some(scaler.clone());
        config.model_path = Some(model.clone());

        let paths = ArtifactStore::new(config).ensure().unwrap();
        assert_eq!(paths, ArtifactPaths { scaler, model });
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_with(dir.path());
        config.scaler_path = Some(dir.path().join("absent.json"));

        assert!(matches!(
            ArtifactStore::new(config).ensure(),
            Err(ArtifactError::NotFound(_))
        ));
    }

    #[test]
    fn test_cached_files_used_without_url() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(constants::SCALER_FILE), b"{}").unwrap();
        fs::write(dir.path().join(constants::MODEL_FILE), b"onnx").unwrap();

        let paths = ArtifactStore::new(config_with(dir.path())).ensure().unwrap();
        assert_eq!(paths.scaler, dir.path().join(constants::SCALER_FILE));
        assert_eq!(paths.model, dir.path().join(constants::MODEL_FILE));
    }

    #[test]
    fn test_missing_cache_without_url_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ArtifactStore::new(config_with(dir.path())).ensure(),
            Err(ArtifactError::NotFound(_))
        ));
    }

    #[test]
    fn test_checksum_verification() {
        let dir = tempfile::tempdir().unwrap();
        let scaler = dir.path().join(constants::SCALER_FILE);
        fs::write(&scaler, b"{}").unwrap();
        fs::write(dir.path().join(constants::MODEL_FILE), b"onnx").unwrap();

        let good = integrity::sha256_file(&scaler).unwrap();

        let mut config = config_with(dir.path());
        config.scaler_sha256 = Some(good.to_uppercase());
        assert!(ArtifactStore::new(config).ensure().is_ok());

        let mut config = config_with(dir.path());
        config.scaler_sha256 = Some("deadbeef".to_string());
        assert!(matches!(
            ArtifactStore::new(config).ensure(),
            Err(ArtifactError::ChecksumMismatch { .. })
        ));
    }
}

//! Artifact Integrity
//!
//! Streaming SHA-256 of artifact files, checked against the configured
//! expected digests before the artifacts are loaded.

use sha2::{Digest, Sha256};
use std::fs;
use std::io::Read;
use std::path::Path;

use super::ArtifactError;

/// SHA-256 of a file, lowercase hex.
pub fn sha256_file(path: &Path) -> Result<String, ArtifactError> {
    let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(|e| ArtifactError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifact.bin");
        fs::write(&path, b"abc").unwrap();

        assert_eq!(
            sha256_file(&path).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            sha256_file(&dir.path().join("absent")),
            Err(ArtifactError::Io { .. })
        ));
    }
}

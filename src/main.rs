//! Service binary: resolve artifacts, classify one reading, print JSON.
//!
//! The reading is read as JSON from the path given as the first argument, or
//! from stdin when no argument (or "-") is given. The presentation layer is
//! expected to embed the library directly; this binary is the operator
//! surface for the same pipeline.

use std::io::Read;
use std::process::ExitCode;

use modis_fire_core::artifacts::{ArtifactConfig, ArtifactStore};
use modis_fire_core::fire::advisory;
use modis_fire_core::{constants, InferenceService, SensorReading};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}", constants::APP_NAME, constants::APP_VERSION);

    let config = ArtifactConfig::from_env();
    let paths = match ArtifactStore::new(config).ensure() {
        Ok(paths) => paths,
        Err(e) => {
            log::error!("Artifact resolution failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let service = match InferenceService::from_artifacts(&paths) {
        Ok(service) => service,
        Err(e) => {
            log::error!("Artifact load failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let input = match read_input() {
        Ok(input) => input,
        Err(e) => {
            log::error!("Failed to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let reading: SensorReading = match serde_json::from_str(&input) {
        Ok(reading) => reading,
        Err(e) => {
            log::error!("Failed to parse reading: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match service.classify(&reading) {
        Ok(result) => {
            let payload = serde_json::json!({
                "result": result,
                "advisory": advisory::advise(&reading),
                "profile": advisory::parameter_profile(&reading),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).unwrap_or_default()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Classification failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_input() -> std::io::Result<String> {
    let arg = std::env::args().nth(1);
    match arg.as_deref() {
        Some("-") | None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

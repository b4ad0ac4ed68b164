//! MODIS Fire Classification - Core Inference Service
//!
//! Validates six-field MODIS thermal anomaly readings, applies the pre-fit
//! scaler, runs the pre-trained fire-type classifier, and maps the predicted
//! code to the fixed label tables. The interactive page that collects the
//! readings lives elsewhere and calls into [`InferenceService`].
//!
//! ## Structure
//! - `reading` - Input schema, canonical feature layout, validation
//! - `model` - Scaler/classifier capability seam (ONNX + coefficient sidecar)
//! - `fire` - Closed fire-type label space and advisory heuristics
//! - `artifacts` - Startup-only artifact acquisition, cache, and integrity
//! - `service` - The `classify` pipeline

pub mod constants;
pub mod reading;
pub mod model;
pub mod fire;
pub mod artifacts;
pub mod service;


// Re-export the request-path types for convenience
pub use fire::{ClassificationResult, FireClass, UnknownLabelError};
pub use reading::{Confidence, SensorReading, ValidationError};
pub use service::{ClassifyError, InferenceService};

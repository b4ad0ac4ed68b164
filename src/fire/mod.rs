//! Fire Module
//!
//! The closed fire-type label space and the presentational advisory bands.
//!
//! ## Structure
//! - `types`: FireClass, literal label tables, ClassificationResult
//! - `advisory`: threshold commentary for the UI layer, decoupled from
//!   classification

pub mod advisory;
pub mod types;

pub use advisory::{advise, parameter_profile, AdvisoryReport, IntensityBand, TemperatureBand};
pub use types::{ClassificationResult, FireClass, UnknownLabelError};

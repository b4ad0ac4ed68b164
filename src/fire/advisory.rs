//! Advisory Bands
//!
//! Threshold commentary the presentation layer renders next to a result.
//! Entirely decoupled from the classifier contract: these bands read the raw
//! reading only, and changing them never changes a classification.

use serde::{Deserialize, Serialize};

use crate::reading::{SensorReading, FEATURE_COUNT};

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Brightness minus bright_t31 above this suggests an active fire (K)
pub const ACTIVE_FIRE_DIFFERENTIAL_K: f32 = 50.0;

/// Differential above this is still notable (K)
pub const MODERATE_DIFFERENTIAL_K: f32 = 20.0;

/// FRP above this is a high-intensity fire (MW)
pub const HIGH_INTENSITY_MW: f32 = 50.0;

/// FRP above this is a moderate-intensity fire (MW)
pub const MODERATE_INTENSITY_MW: f32 = 20.0;

// ============================================================================
// BANDS
// ============================================================================

/// Temperature differential band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureBand {
    ActiveFire,
    Moderate,
    Smoldering,
}

impl TemperatureBand {
    pub fn message(&self) -> &'static str {
        match self {
            TemperatureBand::ActiveFire => "High temperature differential suggests active fire",
            TemperatureBand::Moderate => "Moderate temperature differential",
            TemperatureBand::Smoldering => "Low temperature differential - possible smoldering",
        }
    }
}

/// Fire intensity band from FRP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntensityBand {
    High,
    Moderate,
    Low,
}

impl IntensityBand {
    pub fn message(&self) -> &'static str {
        match self {
            IntensityBand::High => "High intensity fire - immediate attention required",
            IntensityBand::Moderate => "Moderate intensity fire",
            IntensityBand::Low => "Low intensity thermal anomaly",
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Advisory commentary for one reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub temperature_differential_k: f32,
    pub temperature: TemperatureBand,
    pub intensity: IntensityBand,
}

/// Band a reading. Presentational only.
pub fn advise(reading: &SensorReading) -> AdvisoryReport {
    let differential = reading.brightness - reading.bright_t31;

    let temperature = if differential > ACTIVE_FIRE_DIFFERENTIAL_K {
        TemperatureBand::ActiveFire
    } else if differential > MODERATE_DIFFERENTIAL_K {
        TemperatureBand::Moderate
    } else {
        TemperatureBand::Smoldering
    };

    let intensity = if reading.frp > HIGH_INTENSITY_MW {
        IntensityBand::High
    } else if reading.frp > MODERATE_INTENSITY_MW {
        IntensityBand::Moderate
    } else {
        IntensityBand::Low
    };

    AdvisoryReport {
        temperature_differential_k: differential,
        temperature,
        intensity,
    }
}

/// Normalized 0-100 profile of the six inputs, in canonical order, for the
/// radar view the UI draws.
pub fn parameter_profile(reading: &SensorReading) -> [f32; FEATURE_COUNT] {
    [
        (reading.brightness / 400.0 * 100.0).min(100.0),
        (reading.bright_t31 / 350.0 * 100.0).min(100.0),
        (reading.frp / 100.0 * 100.0).min(100.0),
        reading.scan / 5.0 * 100.0,
        reading.track / 5.0 * 100.0,
        reading.confidence.ordinal() as f32 / 2.0 * 100.0,
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Confidence;

    fn reading(brightness: f32, bright_t31: f32, frp: f32) -> SensorReading {
        SensorReading {
            brightness,
            bright_t31,
            frp,
            scan: 1.0,
            track: 1.0,
            confidence: Confidence::Nominal,
        }
    }

    #[test]
    fn test_temperature_banding() {
        assert_eq!(
            advise(&reading(360.0, 295.0, 10.0)).temperature,
            TemperatureBand::ActiveFire
        );
        assert_eq!(
            advise(&reading(320.0, 295.0, 10.0)).temperature,
            TemperatureBand::Moderate
        );
        assert_eq!(
            advise(&reading(300.0, 295.0, 10.0)).temperature,
            TemperatureBand::Smoldering
        );
    }

    #[test]
    fn test_intensity_banding() {
        assert_eq!(advise(&reading(320.0, 295.0, 75.0)).intensity, IntensityBand::High);
        assert_eq!(
            advise(&reading(320.0, 295.0, 30.0)).intensity,
            IntensityBand::Moderate
        );
        assert_eq!(advise(&reading(320.0, 295.0, 5.0)).intensity, IntensityBand::Low);
    }

    #[test]
    fn test_band_boundaries_are_exclusive() {
        // Exactly at a threshold stays in the lower band
        assert_eq!(
            advise(&reading(345.0, 295.0, 10.0)).temperature,
            TemperatureBand::Moderate
        );
        assert_eq!(
            advise(&reading(320.0, 295.0, 50.0)).intensity,
            IntensityBand::Moderate
        );
    }

    #[test]
    fn test_parameter_profile_normalization() {
        let profile = parameter_profile(&SensorReading {
            brightness: 320.0,
            bright_t31: 295.0,
            frp: 25.0,
            scan: 1.0,
            track: 1.0,
            confidence: Confidence::Nominal,
        });

        assert_eq!(profile[0], 80.0);
        assert!((profile[1] - 84.285_71).abs() < 1e-3);
        assert_eq!(profile[2], 25.0);
        assert_eq!(profile[3], 20.0);
        assert_eq!(profile[4], 20.0);
        assert_eq!(profile[5], 50.0);
    }

    #[test]
    fn test_parameter_profile_caps_at_100() {
        let profile = parameter_profile(&reading(450.0, 380.0, 500.0));
        assert_eq!(profile[0], 100.0);
        assert_eq!(profile[1], 100.0);
        assert_eq!(profile[2], 100.0);
    }
}

// Strong typing over raw host values. Newtypes for timestamps, enums for phases and decisions.

use serde::{Deserialize, Serialize};

use crate::error::{ArbiterError, Result};

/// Timestamp in microseconds on the arbiter's clock. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_micros(us: u64) -> Self {
        Timestamp(us)
    }

    pub fn from_millis(ms: u64) -> Self {
        Timestamp(ms.saturating_mul(1000))
    }

    pub fn as_micros(&self) -> u64 {
        self.0
    }

    pub fn as_millis(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Timestamp `us` microseconds later, saturating at the end of the clock.
    pub fn after_micros(&self, us: u64) -> Self {
        Timestamp(self.0.saturating_add(us))
    }
}

/// Camera pose proposed by the host for the current frame.
/// Angles are degrees, position is local OpenGL metres, `zoom` is the magnification factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub heading: f64,
    pub zoom: f64,
}

impl CameraPose {
    pub fn with_zoom(zoom: f64) -> Self {
        CameraPose {
            zoom,
            ..Default::default()
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        CameraPose {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            roll: 0.0,
            pitch: 0.0,
            heading: 0.0,
            zoom: 1.0,
        }
    }
}

/// Phase tag carried by every command event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandPhase {
    Begin,
    Continue,
    End,
}

/// Outcome of one camera-authority callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraControl {
    /// Keep exclusive control next frame.
    Retain,
    /// Hand the camera back to the host.
    Release,
}

impl CameraControl {
    pub fn is_retained(self) -> bool {
        matches!(self, CameraControl::Retain)
    }
}

/// Arbiter configuration. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbiterConfig {
    /// Grace after the hold action is released or the toggle is switched off (microseconds).
    #[serde(default = "default_hold_release_grace")]
    pub hold_release_grace_us: u64,
    /// Grace after any native zoom command (microseconds).
    #[serde(default = "default_zoom_command_grace")]
    pub zoom_command_grace_us: u64,
    /// Grace after any quick-look command (microseconds).
    #[serde(default = "default_quick_look_grace")]
    pub quick_look_grace_us: u64,
    /// Zoom target before anything has been learned.
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,
    /// Carry position and orientation forward one frame while overriding zoom.
    #[serde(default)]
    pub extrapolate_motion: bool,
}

fn default_hold_release_grace() -> u64 {
    500_000 // 500ms
}

fn default_zoom_command_grace() -> u64 {
    550_000 // 550ms
}

fn default_quick_look_grace() -> u64 {
    1_250_000 // 1250ms
}

fn default_initial_zoom() -> f64 {
    1.0
}

impl Default for ArbiterConfig {
    fn default() -> Self {
        ArbiterConfig {
            hold_release_grace_us: default_hold_release_grace(),
            zoom_command_grace_us: default_zoom_command_grace(),
            quick_look_grace_us: default_quick_look_grace(),
            initial_zoom: default_initial_zoom(),
            extrapolate_motion: false,
        }
    }
}

impl ArbiterConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ArbiterConfig = serde_json::from_str(json)
            .map_err(|e| ArbiterError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.initial_zoom.is_finite() || self.initial_zoom <= 0.0 {
            return Err(ArbiterError::InvalidConfig(format!(
                "initial_zoom must be a positive number, got {}",
                self.initial_zoom
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_conversions() {
        let ts = Timestamp::from_millis(1_500);
        assert_eq!(ts.as_micros(), 1_500_000);
        assert!((ts.as_millis() - 1500.0).abs() < 0.0001);
        assert_eq!(Timestamp::from_micros(u64::MAX).after_micros(1).as_micros(), u64::MAX);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = ArbiterConfig::from_json("{}").unwrap();
        assert_eq!(config, ArbiterConfig::default());
        assert_eq!(config.hold_release_grace_us, 500_000);
        assert_eq!(config.zoom_command_grace_us, 550_000);
        assert_eq!(config.quick_look_grace_us, 1_250_000);
        assert!(!config.extrapolate_motion);
    }

    #[test]
    fn config_overrides_apply() {
        let config =
            ArbiterConfig::from_json(r#"{"quick_look_grace_us":2000000,"extrapolate_motion":true}"#)
                .unwrap();
        assert_eq!(config.quick_look_grace_us, 2_000_000);
        assert!(config.extrapolate_motion);
        assert_eq!(config.initial_zoom, 1.0);
    }

    #[test]
    fn rejects_bad_initial_zoom() {
        let err = ArbiterConfig::from_json(r#"{"initial_zoom":0.0}"#).unwrap_err();
        assert!(matches!(err, ArbiterError::InvalidConfig(_)));
        let err = ArbiterConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ArbiterError::InvalidConfig(_)));
    }
}

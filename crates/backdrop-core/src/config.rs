//! Externally supplied tuning for a backdrop instance.
//!
//! The host page owns these values; the renderer only reads them. Use
//! [`BackdropConfig::validate`] to reject bad input outright, or
//! [`BackdropConfig::sanitized`] to clamp it into range.

use thiserror::Error;

pub const DENSITY_MIN: f32 = 0.3;
pub const DENSITY_MAX: f32 = 1.0;
pub const DEFAULT_LINK_DISTANCE: f32 = 140.0;
pub const DEFAULT_SPEED: f32 = 0.35;

/// Which decorative scene to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Drifting particles linked by fading lines when close together.
    Network,
    /// A drafting grid with sliding highlight traces and pulsing nodes.
    Blueprint,
}

impl Variant {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "network" | "particles" => Some(Variant::Network),
            "blueprint" | "grid" => Some(Variant::Blueprint),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropConfig {
    pub enabled: bool,
    /// Scales primitive counts; valid range is [0.3, 1.0].
    pub density: f32,
    /// Max distance (logical px) at which two particles are linked. Blueprint
    /// trace lengths scale with it relative to [`DEFAULT_LINK_DISTANCE`].
    pub link_distance: f32,
    /// Motion speed multiplier. Zero freezes both variants.
    pub speed: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            density: 0.7,
            link_distance: DEFAULT_LINK_DISTANCE,
            speed: DEFAULT_SPEED,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("density {0} is outside [0.3, 1.0]")]
    DensityOutOfRange(f32),
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidValue { field: &'static str, value: f32 },
}

impl BackdropConfig {
    /// Blueprint rate multiplier; 1.0 at the default speed.
    pub fn motion_scale(&self) -> f32 {
        self.speed / DEFAULT_SPEED
    }

    /// Blueprint trace length multiplier; 1.0 at the default link distance.
    pub fn reach_scale(&self) -> f32 {
        self.link_distance / DEFAULT_LINK_DISTANCE
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.density.is_finite() || !(DENSITY_MIN..=DENSITY_MAX).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange(self.density));
        }
        for (field, value) in [("link_distance", self.link_distance), ("speed", self.speed)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }

    /// Build from optional host overrides; out-of-range input is clamped
    /// rather than rejected so a bad attribute never hides the backdrop.
    pub fn from_overrides(
        enabled: Option<bool>,
        density: Option<f32>,
        link_distance: Option<f32>,
        speed: Option<f32>,
    ) -> Self {
        let defaults = Self::default();
        let config = Self {
            enabled: enabled.unwrap_or(defaults.enabled),
            density: density.unwrap_or(defaults.density),
            link_distance: link_distance.unwrap_or(defaults.link_distance),
            speed: speed.unwrap_or(defaults.speed),
        };
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[backdrop] {}; clamping config", e);
                config.sanitized()
            }
        }
    }

    /// Clamp every field into range, replacing non-finite values with defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f32, d: f32| if v.is_finite() { v } else { d };
        Self {
            enabled: self.enabled,
            density: finite_or(self.density, defaults.density).clamp(DENSITY_MIN, DENSITY_MAX),
            link_distance: finite_or(self.link_distance, defaults.link_distance).max(0.0),
            speed: finite_or(self.speed, defaults.speed).max(0.0),
        }
    }
}

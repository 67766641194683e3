//! Exponential air-density model used by the drag integrator.

use serde::{Deserialize, Serialize};

use crate::constants::{ATMOSPHERE_SCALE_HEIGHT_M, SEA_LEVEL_AIR_DENSITY};
use crate::inputs::ConfigError;

/// Air density decaying exponentially with altitude:
/// ρ(h) = ρ0 · exp(−h/H).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    sea_level_density: f64,
    scale_height: f64,
}

impl Atmosphere {
    /// Build a model from a sea-level density and scale height.
    ///
    /// `scale_height <= 0` would make the density non-monotonic (or divide
    /// by zero), so it is rejected up front.
    pub fn new(sea_level_density: f64, scale_height: f64) -> Result<Self, ConfigError> {
        if scale_height <= 0.0 {
            return Err(ConfigError::NonPositiveScaleHeight(scale_height));
        }
        if sea_level_density < 0.0 {
            return Err(ConfigError::NegativeAirDensity(sea_level_density));
        }
        Ok(Self {
            sea_level_density,
            scale_height,
        })
    }

    /// Standard Earth atmosphere (ρ0 = 1.225 kg/m³, H = 8500 m).
    pub fn standard() -> Self {
        Self {
            sea_level_density: SEA_LEVEL_AIR_DENSITY,
            scale_height: ATMOSPHERE_SCALE_HEIGHT_M,
        }
    }

    /// Air density at the given altitude (m).
    pub fn density(&self, altitude: f64) -> f64 {
        self.sea_level_density * (-altitude / self.scale_height).exp()
    }

    pub fn sea_level_density(&self) -> f64 {
        self.sea_level_density
    }
}

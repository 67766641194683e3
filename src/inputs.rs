//! Parameter records consumed by the solvers, with fail-fast validation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::constants::{
    ATMOSPHERE_SCALE_HEIGHT_M, EARTH_RADIUS_M, EARTH_ROTATION_PERIOD_S, G_ACCEL_MPS2,
    SEA_LEVEL_AIR_DENSITY,
};
use crate::forces::ForceModel;

/// Configuration error raised before any stepping begins.
///
/// Invalid parameters are never silently replaced with defaults; each
/// variant names the field that made the run ill-posed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Gravity must be strictly positive for closed-form and inverse work
    NonPositiveGravity(f64),
    /// Projectile mass must be strictly positive
    NonPositiveMass(f64),
    /// Atmospheric scale height must be strictly positive
    NonPositiveScaleHeight(f64),
    /// Sea-level air density must be non-negative
    NegativeAirDensity(f64),
    /// Coefficient of restitution must lie in [0, 1]
    RestitutionOutOfRange(f64),
    /// Planet radius must be strictly positive
    NonPositivePlanetRadius(f64),
    /// Rotation period must be non-zero
    ZeroRotationPeriod,
    /// The dual-angle solver rejects targets with zero horizontal offset
    VerticalTarget,
    /// A density comparison was requested without a drag block
    MissingDragParams,
    /// Launch angle must lie in the open interval (0°, 180°)
    AngleOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::NonPositiveGravity(g) => {
                write!(f, "gravity must be > 0, got {g}")
            }
            ConfigError::NonPositiveMass(m) => {
                write!(f, "projectile mass must be > 0, got {m}")
            }
            ConfigError::NonPositiveScaleHeight(h) => {
                write!(f, "atmospheric scale height must be > 0, got {h}")
            }
            ConfigError::NegativeAirDensity(rho) => {
                write!(f, "sea-level air density must be >= 0, got {rho}")
            }
            ConfigError::RestitutionOutOfRange(e) => {
                write!(f, "coefficient of restitution must lie in [0, 1], got {e}")
            }
            ConfigError::NonPositivePlanetRadius(r) => {
                write!(f, "planet radius must be > 0, got {r}")
            }
            ConfigError::ZeroRotationPeriod => {
                write!(f, "rotation period must be non-zero")
            }
            ConfigError::VerticalTarget => {
                write!(f, "target x must be non-zero for the dual-angle solver")
            }
            ConfigError::MissingDragParams => {
                write!(f, "drag parameters are required for a density comparison")
            }
            ConfigError::AngleOutOfRange(deg) => {
                write!(f, "launch angle must lie in (0, 180) degrees, got {deg}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Quadratic-drag model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragParams {
    /// Drag coefficient Cd (dimensionless)
    pub drag_coefficient: f64,
    /// Cross-sectional area A (m²)
    pub cross_section_area: f64,
    /// Projectile mass m (kg)
    pub mass: f64,
    /// Air density at sea level ρ0 (kg/m³)
    pub sea_level_density: f64,
    /// Atmospheric scale height H (m)
    pub scale_height: f64,
}

impl Default for DragParams {
    fn default() -> Self {
        Self {
            drag_coefficient: 0.1,
            cross_section_area: 0.007854,
            mass: 0.1,
            sea_level_density: SEA_LEVEL_AIR_DENSITY,
            scale_height: ATMOSPHERE_SCALE_HEIGHT_M,
        }
    }
}

/// Restitutive-bounce model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceParams {
    /// Coefficient of restitution e, fraction of vertical speed kept per bounce
    pub restitution: f64,
    /// Number of ground contacts after which the run terminates
    pub max_bounces: u32,
}

impl Default for BounceParams {
    fn default() -> Self {
        Self {
            restitution: 0.7,
            max_bounces: 6,
        }
    }
}

/// Rotating spherical-body model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationParams {
    /// Planet radius R (m)
    pub planet_radius: f64,
    /// Rotation period T_rot (s); sign selects the rotation direction
    pub rotation_period: f64,
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            planet_radius: EARTH_RADIUS_M,
            rotation_period: EARTH_ROTATION_PERIOD_S,
        }
    }
}

/// Full parameter record for a forward simulation.
///
/// The optional model blocks select which physical effects the stepping
/// integrator applies; with none present the run is gravity-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Launch height h0 (m)
    pub launch_height: f64,
    /// Launch angle θ (degrees from horizontal)
    pub launch_angle_deg: f64,
    /// Launch speed v0 (m/s)
    pub launch_speed: f64,
    /// Gravitational acceleration g (m/s²)
    pub gravity: f64,
    /// Quadratic drag through an exponential atmosphere, when present
    pub drag: Option<DragParams>,
    /// Elastic ground bounces, when present
    pub bounce: Option<BounceParams>,
    /// Coriolis/centrifugal motion over a rotating sphere, when present
    pub rotation: Option<RotationParams>,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            launch_height: 0.0,
            launch_angle_deg: 45.0,
            launch_speed: 10.0,
            gravity: G_ACCEL_MPS2,
            drag: None,
            bounce: None,
            rotation: None,
        }
    }
}

impl SimulationParameters {
    /// Resolve the force model these parameters select, validating the
    /// fields that model depends on.
    ///
    /// The integrator deliberately does not reject `gravity <= 0`: a net
    /// upward acceleration is a legal (if unusual) input that terminates
    /// through the step safeguard instead of looping forever.
    pub fn force_model(&self) -> Result<ForceModel, ConfigError> {
        if let Some(rotation) = self.rotation {
            if rotation.planet_radius <= 0.0 {
                return Err(ConfigError::NonPositivePlanetRadius(rotation.planet_radius));
            }
            if rotation.rotation_period == 0.0 {
                return Err(ConfigError::ZeroRotationPeriod);
            }
            return Ok(ForceModel::Rotating(rotation));
        }
        if let Some(drag) = self.drag {
            if drag.mass <= 0.0 {
                return Err(ConfigError::NonPositiveMass(drag.mass));
            }
            if drag.scale_height <= 0.0 {
                return Err(ConfigError::NonPositiveScaleHeight(drag.scale_height));
            }
            if drag.sea_level_density < 0.0 {
                return Err(ConfigError::NegativeAirDensity(drag.sea_level_density));
            }
            return Ok(ForceModel::Drag(drag));
        }
        if let Some(bounce) = self.bounce {
            if !(0.0..=1.0).contains(&bounce.restitution) {
                return Err(ConfigError::RestitutionOutOfRange(bounce.restitution));
            }
            return Ok(ForceModel::Bouncing(bounce));
        }
        Ok(ForceModel::GravityOnly)
    }

    /// Validate the fields the closed-form equations divide by.
    pub fn validate_closed_form(&self) -> Result<(), ConfigError> {
        if self.gravity <= 0.0 {
            return Err(ConfigError::NonPositiveGravity(self.gravity));
        }
        if self.launch_angle_deg <= 0.0 || self.launch_angle_deg >= 180.0 {
            return Err(ConfigError::AngleOutOfRange(self.launch_angle_deg));
        }
        Ok(())
    }
}

/// Point the inverse solver must reach, relative to the launch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub x: f64,
    pub y: f64,
}

impl Target {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_gravity_only() {
        let params = SimulationParameters::default();
        assert!(matches!(params.force_model(), Ok(ForceModel::GravityOnly)));
    }

    #[test]
    fn test_rotation_takes_precedence() {
        let params = SimulationParameters {
            drag: Some(DragParams::default()),
            rotation: Some(RotationParams::default()),
            ..Default::default()
        };
        assert!(matches!(params.force_model(), Ok(ForceModel::Rotating(_))));
    }

    #[test]
    fn test_zero_mass_rejected() {
        let params = SimulationParameters {
            drag: Some(DragParams {
                mass: 0.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            params.force_model(),
            Err(ConfigError::NonPositiveMass(0.0))
        );
    }

    #[test]
    fn test_negative_scale_height_rejected() {
        let params = SimulationParameters {
            drag: Some(DragParams {
                scale_height: -10.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            params.force_model(),
            Err(ConfigError::NonPositiveScaleHeight(-10.0))
        );
    }

    #[test]
    fn test_restitution_bounds() {
        let params = SimulationParameters {
            bounce: Some(BounceParams {
                restitution: 1.2,
                max_bounces: 3,
            }),
            ..Default::default()
        };
        assert_eq!(
            params.force_model(),
            Err(ConfigError::RestitutionOutOfRange(1.2))
        );
    }

    #[test]
    fn test_closed_form_rejects_zero_gravity() {
        let params = SimulationParameters {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(params.validate_closed_form().is_err());
    }

    #[test]
    fn test_closed_form_rejects_downward_angle() {
        let params = SimulationParameters {
            launch_angle_deg: -5.0,
            ..Default::default()
        };
        assert!(params.validate_closed_form().is_err());
    }
}

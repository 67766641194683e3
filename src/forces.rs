//! Tagged force models consumed by the stepping integrator.
//!
//! A single stepping routine matches on the variant to pick accelerations,
//! the update scheme and the termination predicate; no model carries its
//! own loop.

use nalgebra::Vector3;

use crate::atmosphere::Atmosphere;
use crate::constants::{DEFAULT_TIME_STEP, SPHERICAL_TIME_STEP};
use crate::inputs::{BounceParams, DragParams, RotationParams};

/// Which physical effects act on the projectile during stepping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceModel {
    /// Constant downward gravity, nothing else
    GravityOnly,
    /// Gravity plus quadratic drag through an exponential atmosphere
    Drag(DragParams),
    /// Gravity plus restitutive ground bounces
    Bouncing(BounceParams),
    /// Inverse-square gravity plus Coriolis and centrifugal terms over a
    /// rotating sphere
    Rotating(RotationParams),
}

impl ForceModel {
    /// Fixed integration step for this model (s).
    pub fn time_step(&self) -> f64 {
        match self {
            ForceModel::Rotating(_) => SPHERICAL_TIME_STEP,
            _ => DEFAULT_TIME_STEP,
        }
    }
}

/// Planar acceleration under gravity and quadratic drag.
///
/// `k = ½·Cd·ρ(y)·A/m`, `a = −k·|v|·v − (0, g)`. The density is evaluated
/// at the current altitude unless `density_override` pins it (used for the
/// constant-density companion run).
pub fn drag_acceleration(
    drag: &DragParams,
    atmosphere: &Atmosphere,
    gravity: f64,
    y: f64,
    vx: f64,
    vy: f64,
    density_override: Option<f64>,
) -> (f64, f64) {
    let density = density_override.unwrap_or_else(|| atmosphere.density(y));
    let k = 0.5 * drag.drag_coefficient * density * drag.cross_section_area / drag.mass;
    let speed = (vx * vx + vy * vy).sqrt();
    (-k * speed * vx, -gravity - k * speed * vy)
}

/// Acceleration in the frame co-rotating with the planet.
///
/// Gravity scales as `(R/r)²` toward the planet center; rotation about the
/// z axis at `ω = 2π/T_rot` adds the Coriolis term `2ω×v` and the
/// centrifugal term `ω²·(x, y, 0)`.
pub fn rotating_acceleration(
    rotation: &RotationParams,
    gravity: f64,
    pos: &Vector3<f64>,
    vel: &Vector3<f64>,
) -> Vector3<f64> {
    let omega = 2.0 * std::f64::consts::PI / rotation.rotation_period;
    let r = pos.norm();
    let g_scaled = gravity * (rotation.planet_radius / r).powi(2);

    Vector3::new(
        -g_scaled * pos.x / r + 2.0 * omega * vel.y + omega * omega * pos.x,
        -g_scaled * pos.y / r - 2.0 * omega * vel.x + omega * omega * pos.y,
        -g_scaled * pos.z / r,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_RADIUS_M;

    #[test]
    fn test_drag_opposes_motion() {
        let drag = DragParams::default();
        let atmo = Atmosphere::standard();
        let (ax, ay) = drag_acceleration(&drag, &atmo, 9.81, 0.0, 10.0, 5.0, None);
        assert!(ax < 0.0);
        assert!(ay < -9.81);

        // Falling: drag pushes up against gravity
        let (_, ay_fall) = drag_acceleration(&drag, &atmo, 9.81, 0.0, 0.0, -10.0, None);
        assert!(ay_fall > -9.81);
    }

    #[test]
    fn test_drag_weakens_with_altitude() {
        let drag = DragParams::default();
        let atmo = Atmosphere::standard();
        let (ax_low, _) = drag_acceleration(&drag, &atmo, 9.81, 0.0, 50.0, 0.0, None);
        let (ax_high, _) = drag_acceleration(&drag, &atmo, 9.81, 20_000.0, 50.0, 0.0, None);
        assert!(ax_high.abs() < ax_low.abs());
    }

    #[test]
    fn test_density_override_pins_sea_level() {
        let drag = DragParams::default();
        let atmo = Atmosphere::standard();
        let sea = atmo.sea_level_density();
        let (ax_pinned, _) =
            drag_acceleration(&drag, &atmo, 9.81, 20_000.0, 50.0, 0.0, Some(sea));
        let (ax_sea, _) = drag_acceleration(&drag, &atmo, 9.81, 0.0, 50.0, 0.0, None);
        assert!((ax_pinned - ax_sea).abs() < 1e-12);
    }

    #[test]
    fn test_rotating_gravity_points_inward_at_surface() {
        let rotation = RotationParams {
            planet_radius: EARTH_RADIUS_M,
            rotation_period: 1e18, // effectively non-rotating
        };
        let pos = Vector3::new(0.0, 0.0, EARTH_RADIUS_M);
        let vel = Vector3::new(100.0, 0.0, 0.0);
        let a = rotating_acceleration(&rotation, 9.81, &pos, &vel);
        assert!(a.x.abs() < 1e-6);
        assert!(a.y.abs() < 1e-6);
        assert!((a.z + 9.81).abs() < 1e-6);
    }

    #[test]
    fn test_inverse_square_falloff() {
        let rotation = RotationParams {
            planet_radius: EARTH_RADIUS_M,
            rotation_period: 1e18,
        };
        let vel = Vector3::zeros();
        let surface = rotating_acceleration(
            &rotation,
            9.81,
            &Vector3::new(0.0, 0.0, EARTH_RADIUS_M),
            &vel,
        );
        let doubled = rotating_acceleration(
            &rotation,
            9.81,
            &Vector3::new(0.0, 0.0, 2.0 * EARTH_RADIUS_M),
            &vel,
        );
        assert!((doubled.norm() - surface.norm() / 4.0).abs() < 1e-9);
    }
}

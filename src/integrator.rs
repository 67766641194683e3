//! Fixed-timestep stepping integrator over the tagged force models.
//!
//! One routine advances all four models; a model contributes its
//! acceleration, its update scheme and its termination predicate. Runs are
//! bounded by a hard step cap, and a NaN or infinity ends the run with the
//! points produced so far.

use nalgebra::Vector3;

use crate::atmosphere::Atmosphere;
use crate::constants::MAX_INTEGRATION_STEPS;
use crate::forces::{drag_acceleration, rotating_acceleration, ForceModel};
use crate::inputs::{BounceParams, ConfigError, DragParams, RotationParams, SimulationParameters};
use crate::kinematics::launch_components;
use crate::summary::{summarize, summarize_spatial};
use crate::trajectory::{Termination, TrajectoryPoint, TrajectoryResult};

/// Run the stepping integrator with the force model the parameters select.
pub fn integrate(params: &SimulationParameters) -> Result<TrajectoryResult, ConfigError> {
    let model = params.force_model()?;
    let result = match model {
        ForceModel::GravityOnly => integrate_planar(params, None, None),
        ForceModel::Drag(drag) => {
            let atmosphere = Atmosphere::new(drag.sea_level_density, drag.scale_height)?;
            integrate_planar(params, Some((drag, atmosphere)), None)
        }
        ForceModel::Bouncing(bounce) => integrate_bouncing(params, &bounce),
        ForceModel::Rotating(rotation) => integrate_rotating(params, &rotation),
    };
    Ok(result)
}

/// Drag run paired with its constant-density reference.
///
/// The reference holds ρ at the sea-level value so callers can compare
/// diminishing against constant air resistance for the same launch.
#[derive(Debug, Clone, PartialEq)]
pub struct DragComparison {
    /// Density decays with altitude (the physical run)
    pub variable_density: TrajectoryResult,
    /// Density pinned at ρ0 for the whole flight
    pub constant_density: TrajectoryResult,
}

/// Integrate the drag model twice, once with the exponential atmosphere
/// and once with density pinned at sea level.
pub fn integrate_drag_comparison(
    params: &SimulationParameters,
) -> Result<DragComparison, ConfigError> {
    let Some(drag) = params.drag else {
        return Err(ConfigError::MissingDragParams);
    };
    let params = SimulationParameters {
        bounce: None,
        rotation: None,
        ..params.clone()
    };
    params.force_model()?;
    let atmosphere = Atmosphere::new(drag.sea_level_density, drag.scale_height)?;
    let variable = integrate_planar(&params, Some((drag, atmosphere)), None);
    let constant = integrate_planar(&params, Some((drag, atmosphere)), Some(drag.sea_level_density));
    Ok(DragComparison {
        variable_density: variable,
        constant_density: constant,
    })
}

/// Gravity-only and quadratic-drag stepping.
///
/// Scheme: `pos += v·dt + ½·a·dt²`, then `v += a·dt`. Terminates when the
/// newly produced sample dips below the ground.
fn integrate_planar(
    params: &SimulationParameters,
    drag: Option<(DragParams, Atmosphere)>,
    density_override: Option<f64>,
) -> TrajectoryResult {
    let dt = match drag {
        Some((d, _)) => ForceModel::Drag(d).time_step(),
        None => ForceModel::GravityOnly.time_step(),
    };
    let g = params.gravity;

    let (mut vx, mut vy) = launch_components(params.launch_speed, params.launch_angle_deg);
    let mut x = 0.0;
    let mut y = params.launch_height;
    let mut t = 0.0;

    let mut points = Vec::new();
    points.push(TrajectoryPoint::planar(t, x, y, vx, vy));

    let mut termination = Termination::MaxStepsSafeguard;
    for _ in 0..MAX_INTEGRATION_STEPS {
        let (ax, ay) = match &drag {
            Some((d, atmo)) => drag_acceleration(d, atmo, g, y, vx, vy, density_override),
            None => (0.0, -g),
        };

        x += vx * dt + 0.5 * ax * dt * dt;
        y += vy * dt + 0.5 * ay * dt * dt;
        vx += ax * dt;
        vy += ay * dt;
        t += dt;

        let point = TrajectoryPoint::planar(t, x, y, vx, vy);
        if point.is_corrupt() {
            termination = Termination::Diverged;
            break;
        }
        points.push(point);

        if y < 0.0 {
            termination = Termination::GroundImpact;
            break;
        }
    }

    let summary = summarize(&points);
    TrajectoryResult {
        points,
        termination,
        summary,
    }
}

/// Restitutive-bounce stepping.
///
/// Scheme: `x += vx·dt`, `y += vy·dt − ½·g·dt²`; a predicted negative
/// height reflects (`y → −y`, `vy → −e·vy`) and counts a bounce; gravity
/// is applied to `vy` after the sample is recorded.
fn integrate_bouncing(params: &SimulationParameters, bounce: &BounceParams) -> TrajectoryResult {
    let dt = ForceModel::Bouncing(*bounce).time_step();
    let g = params.gravity;

    let (vx, mut vy) = launch_components(params.launch_speed, params.launch_angle_deg);
    let mut x = 0.0;
    let mut y = params.launch_height;
    let mut t = 0.0;
    let mut bounces = 0u32;

    let mut points = Vec::new();
    points.push(TrajectoryPoint::planar(t, x, y, vx, vy));

    let mut termination = Termination::MaxStepsSafeguard;
    for _ in 0..MAX_INTEGRATION_STEPS {
        x += vx * dt;
        let mut y_new = y + vy * dt - 0.5 * g * dt * dt;

        let mut bounced = false;
        if y_new < 0.0 {
            y_new = -y_new;
            vy = -bounce.restitution * vy;
            bounces += 1;
            bounced = true;
        }
        y = y_new;
        t += dt;

        let point = TrajectoryPoint::planar(t, x, y, vx, vy);
        if point.is_corrupt() {
            termination = Termination::Diverged;
            break;
        }
        points.push(point);

        if bounced && bounce.restitution == 0.0 {
            // A dead bounce leaves no vertical speed to bounce again with.
            termination = Termination::GroundImpact;
            break;
        }
        if bounces >= bounce.max_bounces {
            termination = Termination::BounceLimitReached;
            break;
        }

        vy -= g * dt;
    }

    let summary = summarize(&points);
    TrajectoryResult {
        points,
        termination,
        summary,
    }
}

/// Rotating spherical-body stepping, 3-D state in the co-rotating frame.
///
/// Scheme: `pos += v·dt` with the old velocity, then `v += a(pos)·dt`.
/// Launch is from `(0, 0, R + h0)` with the vertical component along z;
/// the run ends when the radial distance returns to the surface.
fn integrate_rotating(
    params: &SimulationParameters,
    rotation: &RotationParams,
) -> TrajectoryResult {
    let dt = ForceModel::Rotating(*rotation).time_step();
    let theta = params.launch_angle_deg.to_radians();

    let mut pos = Vector3::new(0.0, 0.0, rotation.planet_radius + params.launch_height);
    let mut vel = Vector3::new(
        params.launch_speed * theta.cos(),
        0.0,
        params.launch_speed * theta.sin(),
    );
    let mut t = 0.0;

    let mut points = Vec::new();
    points.push(TrajectoryPoint::spatial(
        t,
        [pos.x, pos.y, pos.z],
        [vel.x, vel.y, vel.z],
    ));

    let mut termination = Termination::MaxStepsSafeguard;
    for _ in 0..MAX_INTEGRATION_STEPS {
        pos += vel * dt;
        let accel = rotating_acceleration(rotation, params.gravity, &pos, &vel);
        vel += accel * dt;
        t += dt;

        let point = TrajectoryPoint::spatial(t, [pos.x, pos.y, pos.z], [vel.x, vel.y, vel.z]);
        if point.is_corrupt() {
            termination = Termination::Diverged;
            break;
        }
        points.push(point);

        if pos.norm() <= rotation.planet_radius {
            termination = Termination::GroundImpact;
            break;
        }
    }

    let summary = summarize_spatial(&points);
    TrajectoryResult {
        points,
        termination,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_RADIUS_M;
    use crate::summary::bounce_apex_heights;

    fn flat_shot() -> SimulationParameters {
        SimulationParameters {
            launch_height: 0.0,
            launch_angle_deg: 45.0,
            launch_speed: 10.0,
            gravity: 9.81,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_point_is_launch_state() {
        let result = integrate(&flat_shot()).unwrap();
        let first = &result.points[0];
        assert!(first.t.abs() < 1e-12);
        assert!(first.x.abs() < 1e-12);
        assert!(first.y.abs() < 1e-12);
        let expected_v = 10.0 / 2.0f64.sqrt();
        assert!((first.vx - expected_v).abs() < 1e-12);
        assert!((first.vy - expected_v).abs() < 1e-12);
    }

    #[test]
    fn test_gravity_only_matches_closed_form_within_one_percent() {
        let params = flat_shot();
        let stepped = integrate(&params).unwrap();
        assert_eq!(stepped.termination, Termination::GroundImpact);

        let exact = crate::closed_form::flight_metrics(&params).unwrap();
        let relative = (stepped.summary.range - exact.range).abs() / exact.range;
        assert!(relative < 0.01, "relative range error {relative}");
    }

    #[test]
    fn test_time_strictly_increasing() {
        let result = integrate(&flat_shot()).unwrap();
        for pair in result.points.windows(2) {
            assert!(pair[1].t > pair[0].t);
        }
    }

    #[test]
    fn test_upward_gravity_hits_safeguard() {
        let mut params = flat_shot();
        params.gravity = -9.81;
        let result = integrate(&params).unwrap();
        assert_eq!(result.termination, Termination::MaxStepsSafeguard);
        assert_eq!(result.points.len(), MAX_INTEGRATION_STEPS + 1);
    }

    #[test]
    fn test_drag_shortens_range() {
        let mut params = flat_shot();
        params.launch_speed = 50.0;
        let vacuum = integrate(&params).unwrap();

        params.drag = Some(DragParams::default());
        let dragged = integrate(&params).unwrap();
        assert_eq!(dragged.termination, Termination::GroundImpact);
        assert!(dragged.summary.range < vacuum.summary.range);
    }

    #[test]
    fn test_constant_density_drags_harder_when_lofted() {
        let params = SimulationParameters {
            launch_height: 0.0,
            launch_angle_deg: 60.0,
            launch_speed: 80.0,
            gravity: 9.81,
            drag: Some(DragParams {
                drag_coefficient: 0.5,
                cross_section_area: 0.05,
                mass: 0.5,
                scale_height: 1000.0, // thin atmosphere: altitude matters
                ..Default::default()
            }),
            ..Default::default()
        };
        let comparison = integrate_drag_comparison(&params).unwrap();
        assert!(
            comparison.constant_density.summary.range
                < comparison.variable_density.summary.range
        );
    }

    #[test]
    fn test_drag_comparison_requires_drag_block() {
        let err = integrate_drag_comparison(&SimulationParameters::default()).unwrap_err();
        assert_eq!(err, ConfigError::MissingDragParams);
    }

    #[test]
    fn test_bounce_count_terminates_run() {
        let params = SimulationParameters {
            launch_height: 10.0,
            launch_angle_deg: 45.0,
            launch_speed: 5.0,
            gravity: 9.81,
            bounce: Some(BounceParams {
                restitution: 0.7,
                max_bounces: 3,
            }),
            ..Default::default()
        };
        let result = integrate(&params).unwrap();
        assert_eq!(result.termination, Termination::BounceLimitReached);
    }

    #[test]
    fn test_bounce_apexes_decay() {
        let params = SimulationParameters {
            launch_height: 10.0,
            launch_angle_deg: 45.0,
            launch_speed: 5.0,
            gravity: 9.81,
            bounce: Some(BounceParams {
                restitution: 0.5,
                max_bounces: 4,
            }),
            ..Default::default()
        };
        let result = integrate(&params).unwrap();
        let apexes = bounce_apex_heights(&result.points);
        assert!(apexes.len() >= 2);
        for pair in apexes.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_dead_bounce_stops_at_first_contact() {
        let params = SimulationParameters {
            launch_height: 5.0,
            launch_angle_deg: 45.0,
            launch_speed: 5.0,
            gravity: 9.81,
            bounce: Some(BounceParams {
                restitution: 0.0,
                max_bounces: 5,
            }),
            ..Default::default()
        };
        let result = integrate(&params).unwrap();
        assert_eq!(result.termination, Termination::GroundImpact);
        // Only the launch arc's apex exists; no rebound apex follows.
        let apexes = bounce_apex_heights(&result.points);
        assert!(apexes.len() <= 1);
        let last = result.points.last().unwrap();
        assert!(last.vy.abs() < 1e-12);
    }

    #[test]
    fn test_rotating_launch_and_surface_return() {
        let params = SimulationParameters {
            launch_height: 0.0,
            launch_angle_deg: 45.0,
            launch_speed: 2000.0,
            gravity: 9.81,
            rotation: Some(RotationParams::default()),
            ..Default::default()
        };
        let result = integrate(&params).unwrap();
        assert_eq!(result.termination, Termination::GroundImpact);

        let first = &result.points[0];
        assert!((first.z - EARTH_RADIUS_M).abs() < 1e-6);

        let last = result.points.last().unwrap();
        let r = (last.x * last.x + last.y * last.y + last.z * last.z).sqrt();
        assert!(r <= EARTH_RADIUS_M + 1e-6);
    }

    #[test]
    fn test_no_corrupt_points_in_results() {
        let mut params = flat_shot();
        params.drag = Some(DragParams::default());
        let result = integrate(&params).unwrap();
        assert!(result.points.iter().all(|p| !p.is_corrupt()));
    }
}

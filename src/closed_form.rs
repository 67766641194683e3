//! Exact flat/offset-height projectile equations.
//!
//! No stepping happens here: every quantity comes from the standard
//! constant-gravity closed forms, which makes this module the accuracy
//! reference the stepping integrator is validated against.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SAMPLE_COUNT;
use crate::inputs::{ConfigError, SimulationParameters};
use crate::kinematics::{launch_components, quadratic_roots};
use crate::trajectory::{Termination, TrajectoryPoint, TrajectoryResult};

/// Scalar flight metrics from the closed-form equations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightMetrics {
    /// Total time of flight T (s)
    pub time_of_flight: f64,
    /// Horizontal landing distance (m)
    pub range: f64,
    /// Maximum height reached (m)
    pub apogee_height: f64,
    /// Time at which the apogee occurs (s)
    pub apogee_time: f64,
    /// Horizontal position of the apogee (m)
    pub apogee_x: f64,
}

/// Evaluate the closed-form flight metrics for the given launch state.
///
/// `T = (v0·sinθ + sqrt((v0·sinθ)² + 2·g·h0)) / g`, `R = v0·cosθ·T`,
/// apogee at `h0 + (v0·sinθ)²/(2g)`. A vertical shot (cosθ = 0) has
/// range 0 by definition.
pub fn flight_metrics(params: &SimulationParameters) -> Result<FlightMetrics, ConfigError> {
    params.validate_closed_form()?;
    let g = params.gravity;
    let h0 = params.launch_height;
    let (vx, vy) = launch_components(params.launch_speed, params.launch_angle_deg);

    let time_of_flight = (vy + (vy * vy + 2.0 * g * h0).sqrt()) / g;
    let apogee_time = (vy / g).max(0.0);
    Ok(FlightMetrics {
        time_of_flight,
        range: vx * time_of_flight,
        apogee_height: h0 + (vy * vy) / (2.0 * g),
        apogee_time,
        apogee_x: vx * apogee_time,
    })
}

/// Produce a trajectory by evaluating the closed-form position at `samples`
/// equally spaced times over `[0, T]`.
///
/// Never iterates and never diverges; the last point lies exactly on the
/// ground (y = 0 up to rounding).
pub fn sample_trajectory(
    params: &SimulationParameters,
    samples: usize,
) -> Result<TrajectoryResult, ConfigError> {
    let metrics = flight_metrics(params)?;
    let n = samples.max(1);
    let g = params.gravity;
    let h0 = params.launch_height;
    let (vx0, vy0) = launch_components(params.launch_speed, params.launch_angle_deg);

    let mut points = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let t = metrics.time_of_flight * i as f64 / n as f64;
        let x = vx0 * t;
        let y = h0 + vy0 * t - 0.5 * g * t * t;
        let vy = vy0 - g * t;
        // The final sample is the landing point; clamp rounding noise in y.
        let y = if i == n { y.max(0.0) } else { y };
        points.push(TrajectoryPoint::planar(t, x, y, vx0, vy));
    }

    let summary = crate::summary::summarize(&points);
    Ok(TrajectoryResult {
        points,
        termination: Termination::GroundImpact,
        summary,
    })
}

/// Sample with the default point count (100 intervals).
pub fn sample_trajectory_default(
    params: &SimulationParameters,
) -> Result<TrajectoryResult, ConfigError> {
    sample_trajectory(params, DEFAULT_SAMPLE_COUNT)
}

/// Height of the bounding parabola at horizontal distance `x`.
///
/// The envelope of every trajectory launched at speed `v0` from height `h0`:
/// `y(x) = h0 + v0²/(2g) − g·x²/(2·v0²)`. Points above it are unreachable
/// at that speed regardless of angle.
pub fn bounding_parabola(launch_speed: f64, gravity: f64, launch_height: f64, x: f64) -> f64 {
    launch_height + launch_speed * launch_speed / (2.0 * gravity)
        - gravity * x * x / (2.0 * launch_speed * launch_speed)
}

/// Straight-line distance from the launch point at time `t` for a
/// flat-ground shot:
/// `s(t) = sqrt(v0²·t² − g·t³·v0·sinθ + ¼·g²·t⁴)`.
pub fn distance_from_launch(launch_speed: f64, angle_deg: f64, gravity: f64, t: f64) -> f64 {
    let u = launch_speed;
    let sin_theta = angle_deg.to_radians().sin();
    (u * u * t * t - gravity * t * t * t * u * sin_theta
        + 0.25 * gravity * gravity * t * t * t * t)
        .sqrt()
}

/// Times at which the distance-from-launch curve turns around,
/// `(t_minus, t_plus)`, low first.
///
/// For steep launches the projectile briefly moves back toward the launch
/// point; the turning points exist only when `sinθ ≥ sqrt(8/9)`
/// (θ ≳ 70.5°). Flat launches return `None`.
pub fn distance_turning_points(
    launch_speed: f64,
    angle_deg: f64,
    gravity: f64,
) -> Option<(f64, f64)> {
    let u = launch_speed;
    let g = gravity;
    let sin_theta = angle_deg.to_radians().sin();
    // ds²/dt = 0 reduces to g²·t² − 3·g·u·sinθ·t + 2·u² = 0 after dividing
    // out the t = 0 root.
    let (t_plus, t_minus) = quadratic_roots(g * g, -3.0 * g * u * sin_theta, 2.0 * u * u)?;
    Some((t_minus, t_plus))
}

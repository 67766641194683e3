//! Inverse solvers: launch parameters from a desired target or outcome.
//!
//! All of these work on the gravity-only closed forms. Drag and the other
//! stepping models have no closed-form inverse and are out of scope here.

use serde::{Deserialize, Serialize};

use crate::closed_form::{flight_metrics, FlightMetrics};
use crate::constants::{MIN_SPEED_SEARCH_HIGH, MIN_SPEED_SEARCH_LOW, MIN_SPEED_TOLERANCE};
use crate::inputs::{ConfigError, SimulationParameters, Target};

/// Outcome of the dual-angle solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum AngleSolution {
    /// The target lies outside the bounding parabola at this speed
    Unreachable,
    /// Two launch angles hit the target (equal at the reachability boundary)
    Reachable {
        /// Steeper, lofted solution (degrees)
        high_deg: f64,
        /// Flatter, direct solution (degrees)
        low_deg: f64,
    },
}

/// Discriminant of the dual-angle quadratic,
/// `Δ = v0⁴ − g·(g·x² + 2·y·v0²)`.
///
/// Non-negative exactly when the target is reachable at speed `v0`.
fn reachability_discriminant(speed: f64, gravity: f64, target: Target) -> f64 {
    let v2 = speed * speed;
    v2 * v2 - gravity * (gravity * target.x * target.x + 2.0 * target.y * v2)
}

/// Both launch angles that pass through `target` at the given speed.
///
/// `θ = atan((v0² ± sqrt(Δ)) / (g·x))`, steeper solution first. A target
/// directly above or below the launch point has no horizontal equation to
/// solve and is rejected.
pub fn launch_angles(
    speed: f64,
    gravity: f64,
    target: Target,
) -> Result<AngleSolution, ConfigError> {
    if gravity <= 0.0 {
        return Err(ConfigError::NonPositiveGravity(gravity));
    }
    if target.x == 0.0 {
        return Err(ConfigError::VerticalTarget);
    }

    let discriminant = reachability_discriminant(speed, gravity, target);
    if discriminant < 0.0 {
        return Ok(AngleSolution::Unreachable);
    }

    let v2 = speed * speed;
    let root = discriminant.sqrt();
    let gx = gravity * target.x;
    let high_deg = ((v2 + root) / gx).atan().to_degrees();
    let low_deg = ((v2 - root) / gx).atan().to_degrees();
    Ok(AngleSolution::Reachable { high_deg, low_deg })
}

/// Smallest launch speed that reaches `target`, found by bisecting the
/// reachability predicate over the standard search interval.
///
/// Returns `None` when the upper search bound itself cannot reach the
/// target.
pub fn minimum_speed(gravity: f64, target: Target) -> Result<Option<f64>, ConfigError> {
    if gravity <= 0.0 {
        return Err(ConfigError::NonPositiveGravity(gravity));
    }
    if target.x == 0.0 {
        return Err(ConfigError::VerticalTarget);
    }

    let reachable = |v: f64| reachability_discriminant(v, gravity, target) >= 0.0;

    let mut low = MIN_SPEED_SEARCH_LOW;
    let mut high = MIN_SPEED_SEARCH_HIGH;
    if !reachable(high) {
        return Ok(None);
    }

    while high - low > MIN_SPEED_TOLERANCE {
        let mid = 0.5 * (low + high);
        if reachable(mid) {
            high = mid;
        } else {
            low = mid;
        }
    }
    Ok(Some(high))
}

/// Exact minimum launch speed, `v_min = sqrt(g·(y + sqrt(x² + y²)))`.
///
/// Companion to the bisection search; agreement between the two is a
/// correctness check on both.
pub fn minimum_speed_closed_form(gravity: f64, target: Target) -> Result<f64, ConfigError> {
    if gravity <= 0.0 {
        return Err(ConfigError::NonPositiveGravity(gravity));
    }
    let reach = (target.x * target.x + target.y * target.y).sqrt();
    Ok((gravity * (target.y + reach)).sqrt())
}

/// Range-maximizing launch angle in degrees for a launch from height `h0`,
/// `θ_opt = asin(1 / sqrt(2 + 2·g·h0/v0²))`.
///
/// Reduces to 45° at ground level and flattens as the launch point rises.
pub fn optimum_angle(speed: f64, gravity: f64, launch_height: f64) -> Result<f64, ConfigError> {
    if gravity <= 0.0 {
        return Err(ConfigError::NonPositiveGravity(gravity));
    }
    let arg = 1.0 / (2.0 + 2.0 * gravity * launch_height / (speed * speed)).sqrt();
    Ok(arg.asin().to_degrees())
}

/// Flight metrics of the range-maximizing launch from height `h0`.
pub fn max_range_metrics(
    speed: f64,
    gravity: f64,
    launch_height: f64,
) -> Result<FlightMetrics, ConfigError> {
    let angle = optimum_angle(speed, gravity, launch_height)?;
    flight_metrics(&SimulationParameters {
        launch_height,
        launch_angle_deg: angle,
        launch_speed: speed,
        gravity,
        ..Default::default()
    })
}

//! Batch evaluation across launch angles and multi-shot target solutions.
//!
//! Every entry is independent of the others, so both sweeps fan out over
//! rayon and collect in input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::closed_form::flight_metrics;
use crate::inputs::{ConfigError, SimulationParameters, Target};
use crate::inverse::{launch_angles, minimum_speed_closed_form, AngleSolution};
use crate::kinematics::launch_components;
use crate::trajectory::TrajectoryPoint;

/// One row of an angle-to-range table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRangeEntry {
    pub angle_deg: f64,
    pub range: f64,
    pub time_of_flight: f64,
    pub apogee_height: f64,
}

/// Evaluate the closed-form range at `steps + 1` angles equally spaced over
/// `[start_deg, end_deg]`.
///
/// Angles outside the closed-form domain fail the whole sweep rather than
/// producing a partial table.
pub fn angle_range_sweep(
    base: &SimulationParameters,
    start_deg: f64,
    end_deg: f64,
    steps: usize,
) -> Result<Vec<AngleRangeEntry>, ConfigError> {
    let n = steps.max(1);
    (0..=n)
        .into_par_iter()
        .map(|i| {
            let angle_deg = start_deg + (end_deg - start_deg) * i as f64 / n as f64;
            let params = SimulationParameters {
                launch_angle_deg: angle_deg,
                ..base.clone()
            };
            let metrics = flight_metrics(&params)?;
            Ok(AngleRangeEntry {
                angle_deg,
                range: metrics.range,
                time_of_flight: metrics.time_of_flight,
                apogee_height: metrics.apogee_height,
            })
        })
        .collect()
}

/// One launch that passes through the aim target, with its sampled path
/// from launch to the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AimShot {
    pub angle_deg: f64,
    pub speed: f64,
    /// Time at which the shot reaches the target (s)
    pub time_to_target: f64,
    pub points: Vec<TrajectoryPoint>,
}

/// Everything the aim solver knows about a target at a given speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum AimSolution {
    /// The requested speed cannot reach the target; carries the speed that
    /// barely would
    Unreachable { minimum_speed: f64 },
    /// High and low solutions at the requested speed, plus the single shot
    /// at the minimum speed
    Reachable {
        high: AimShot,
        low: AimShot,
        minimum: AimShot,
    },
}

/// Solve the aim problem: both angles at the requested speed and the
/// minimum-speed shot, each with its sampled path to the target.
///
/// The three paths are independent and are sampled in parallel.
pub fn aim(
    speed: f64,
    gravity: f64,
    target: Target,
    samples: usize,
) -> Result<AimSolution, ConfigError> {
    let solution = launch_angles(speed, gravity, target)?;
    let v_min = minimum_speed_closed_form(gravity, target)?;

    let AngleSolution::Reachable { high_deg, low_deg } = solution else {
        return Ok(AimSolution::Unreachable {
            minimum_speed: v_min,
        });
    };

    // At the minimum speed the discriminant vanishes and the two angles
    // coincide at atan(v_min² / (g·x)).
    let min_deg = (v_min * v_min / (gravity * target.x)).atan().to_degrees();

    let ((high, low), minimum) = rayon::join(
        || {
            rayon::join(
                || sample_shot(high_deg, speed, gravity, target, samples),
                || sample_shot(low_deg, speed, gravity, target, samples),
            )
        },
        || sample_shot(min_deg, v_min, gravity, target, samples),
    );
    Ok(AimSolution::Reachable { high, low, minimum })
}

/// Sample the closed-form path from launch until it reaches the target's
/// horizontal offset.
fn sample_shot(
    angle_deg: f64,
    speed: f64,
    gravity: f64,
    target: Target,
    samples: usize,
) -> AimShot {
    let (vx, vy) = launch_components(speed, angle_deg);
    let time_to_target = target.x / vx;
    let n = samples.max(1);

    let points = (0..=n)
        .map(|i| {
            let t = time_to_target * i as f64 / n as f64;
            TrajectoryPoint::planar(
                t,
                vx * t,
                vy * t - 0.5 * gravity * t * t,
                vx,
                vy - gravity * t,
            )
        })
        .collect();

    AimShot {
        angle_deg,
        speed,
        time_to_target,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::G_ACCEL_MPS2;

    #[test]
    fn test_sweep_covers_interval_in_order() {
        let base = SimulationParameters::default();
        let table = angle_range_sweep(&base, 10.0, 80.0, 70).unwrap();
        assert_eq!(table.len(), 71);
        assert!((table[0].angle_deg - 10.0).abs() < 1e-12);
        assert!((table[70].angle_deg - 80.0).abs() < 1e-12);
        for pair in table.windows(2) {
            assert!(pair[1].angle_deg > pair[0].angle_deg);
        }
    }

    #[test]
    fn test_sweep_peaks_at_45_from_ground() {
        let base = SimulationParameters::default();
        let table = angle_range_sweep(&base, 1.0, 89.0, 88).unwrap();
        let best = table
            .iter()
            .max_by(|a, b| a.range.partial_cmp(&b.range).unwrap())
            .unwrap();
        assert!((best.angle_deg - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_rejects_invalid_angles() {
        let base = SimulationParameters::default();
        assert!(angle_range_sweep(&base, -10.0, 80.0, 9).is_err());
    }

    #[test]
    fn test_aim_shots_end_on_target() {
        let target = Target::new(10.0, 5.0);
        let solution = aim(15.0, G_ACCEL_MPS2, target, 50).unwrap();
        let AimSolution::Reachable { high, low, minimum } = solution else {
            panic!("target should be reachable at 15 m/s");
        };

        for shot in [&high, &low, &minimum] {
            assert_eq!(shot.points.len(), 51);
            let last = shot.points.last().unwrap();
            assert!((last.x - target.x).abs() < 1e-9, "{}", shot.angle_deg);
            assert!((last.y - target.y).abs() < 1e-6, "{}", shot.angle_deg);
        }
        assert!(high.angle_deg > low.angle_deg);
        assert!(minimum.speed < high.speed);
    }

    #[test]
    fn test_aim_reports_minimum_speed_when_unreachable() {
        let target = Target::new(100.0, 20.0);
        let solution = aim(10.0, G_ACCEL_MPS2, target, 10).unwrap();
        let AimSolution::Unreachable { minimum_speed } = solution else {
            panic!("target should not be reachable at 10 m/s");
        };
        let exact = minimum_speed_closed_form(G_ACCEL_MPS2, target).unwrap();
        assert!((minimum_speed - exact).abs() < 1e-12);
    }

    #[test]
    fn test_minimum_shot_grazes_the_target() {
        let target = Target::new(10.0, 0.0);
        let solution = aim(15.0, G_ACCEL_MPS2, target, 20).unwrap();
        let AimSolution::Reachable { minimum, .. } = solution else {
            panic!("ground target should be reachable");
        };
        // Ground target at minimum speed is the classic 45 degree shot.
        assert!((minimum.angle_deg - 45.0).abs() < 1e-9);
    }
}

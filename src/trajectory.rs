//! Trajectory sample records and run outcomes.

use serde::{Deserialize, Serialize};

use crate::kinematics::speed;

/// Single time-ordered sample along a trajectory.
///
/// `z` and `vz` are zero for the planar models and only meaningful for the
/// rotating spherical model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Time since launch (s)
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    /// Speed magnitude (m/s)
    pub v: f64,
}

impl TrajectoryPoint {
    pub fn planar(t: f64, x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            t,
            x,
            y,
            z: 0.0,
            vx,
            vy,
            vz: 0.0,
            v: speed(vx, vy),
        }
    }

    pub fn spatial(t: f64, pos: [f64; 3], vel: [f64; 3]) -> Self {
        Self {
            t,
            x: pos[0],
            y: pos[1],
            z: pos[2],
            vx: vel[0],
            vy: vel[1],
            vz: vel[2],
            v: (vel[0] * vel[0] + vel[1] * vel[1] + vel[2] * vel[2]).sqrt(),
        }
    }

    /// True if any component is NaN or infinite.
    ///
    /// The speed magnitude is included: it overflows before the velocity
    /// components do, and a returned point must be finite throughout.
    pub fn is_corrupt(&self) -> bool {
        ![self.t, self.x, self.y, self.z, self.vx, self.vy, self.vz, self.v]
            .iter()
            .all(|c| c.is_finite())
    }
}

/// Why a run stopped producing points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    /// Natural end: the model's ground predicate was satisfied
    GroundImpact,
    /// The configured number of bounces was reached
    BounceLimitReached,
    /// Step cap hit before natural termination; result is incomplete
    MaxStepsSafeguard,
    /// NaN/infinity appeared mid-integration; points are pre-divergence only
    Diverged,
}

impl Termination {
    /// Whether the trajectory represents a finished flight.
    pub fn is_complete(&self) -> bool {
        matches!(
            self,
            Termination::GroundImpact | Termination::BounceLimitReached
        )
    }
}

/// Complete output of a forward run: ordered samples, the reason the run
/// ended, and the derived scalar metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryResult {
    pub points: Vec<TrajectoryPoint>,
    pub termination: Termination,
    pub summary: crate::summary::TrajectorySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_detection() {
        let good = TrajectoryPoint::planar(0.0, 0.0, 0.0, 1.0, 1.0);
        assert!(!good.is_corrupt());

        let mut bad = good;
        bad.vy = f64::NAN;
        assert!(bad.is_corrupt());

        bad.vy = f64::INFINITY;
        assert!(bad.is_corrupt());

        // Overflow in the magnitude alone still counts.
        let mut overflowed = good;
        overflowed.v = f64::INFINITY;
        assert!(overflowed.is_corrupt());
    }

    #[test]
    fn test_termination_completeness() {
        assert!(Termination::GroundImpact.is_complete());
        assert!(Termination::BounceLimitReached.is_complete());
        assert!(!Termination::MaxStepsSafeguard.is_complete());
        assert!(!Termination::Diverged.is_complete());
    }
}

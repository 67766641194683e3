//! Pure reductions over a point sequence into scalar flight metrics.

use serde::{Deserialize, Serialize};

use crate::inputs::RotationParams;
use crate::trajectory::TrajectoryPoint;

/// Derived scalar metrics for a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    /// Horizontal distance at landing (m)
    pub range: f64,
    /// Total flight time (s)
    pub time_of_flight: f64,
    /// Maximum height reached (m)
    pub apogee_height: f64,
    /// Horizontal position of the apogee (m)
    pub apogee_x: f64,
    /// Time of the apogee (s)
    pub apogee_time: f64,
    /// Arc length along the sampled trajectory (m)
    pub distance_traveled: f64,
}

impl TrajectorySummary {
    fn empty() -> Self {
        Self {
            range: 0.0,
            time_of_flight: 0.0,
            apogee_height: 0.0,
            apogee_x: 0.0,
            apogee_time: 0.0,
            distance_traveled: 0.0,
        }
    }
}

/// Reduce a point sequence to its summary metrics.
///
/// When the ground crossing falls between two samples (last `y >= 0`
/// followed by the first `y < 0`), the landing is linearly interpolated so
/// range and time of flight are exact rather than quantized to the step.
pub fn summarize(points: &[TrajectoryPoint]) -> TrajectorySummary {
    let Some(last) = points.last() else {
        return TrajectorySummary::empty();
    };

    let landing = interpolated_landing(points);
    let (range, time_of_flight) = match landing {
        Some(p) => (p.x, p.t),
        None => (last.x, last.t),
    };

    let mut apogee = points[0];
    for p in points {
        if p.y > apogee.y {
            apogee = *p;
        }
    }

    let mut distance_traveled = 0.0;
    for pair in points.windows(2) {
        let dx = pair[1].x - pair[0].x;
        let dy = pair[1].y - pair[0].y;
        let dz = pair[1].z - pair[0].z;
        distance_traveled += (dx * dx + dy * dy + dz * dz).sqrt();
    }

    TrajectorySummary {
        range,
        time_of_flight,
        apogee_height: apogee.y,
        apogee_x: apogee.x,
        apogee_time: apogee.t,
        distance_traveled,
    }
}

/// Summary variant for the rotating spherical model, where `y` is a
/// horizontal coordinate and ground contact is radial, so zero-crossing
/// interpolation does not apply.
pub fn summarize_spatial(points: &[TrajectoryPoint]) -> TrajectorySummary {
    let Some(last) = points.last() else {
        return TrajectorySummary::empty();
    };

    let mut apogee = points[0];
    for p in points {
        if p.z > apogee.z {
            apogee = *p;
        }
    }

    let mut distance_traveled = 0.0;
    for pair in points.windows(2) {
        let dx = pair[1].x - pair[0].x;
        let dy = pair[1].y - pair[0].y;
        let dz = pair[1].z - pair[0].z;
        distance_traveled += (dx * dx + dy * dy + dz * dz).sqrt();
    }

    TrajectorySummary {
        range: last.x,
        time_of_flight: last.t,
        apogee_height: apogee.z,
        apogee_x: apogee.x,
        apogee_time: apogee.t,
        distance_traveled,
    }
}

/// Exact zero-crossing landing point, if the sequence ends by dipping
/// below the ground between two samples.
///
/// Interpolates `x`, `t` and `vy` by the crossing ratio
/// `prev_y / (prev_y - y)`; `vx` is unchanged by the planar force models
/// and carries over.
pub fn interpolated_landing(points: &[TrajectoryPoint]) -> Option<TrajectoryPoint> {
    let crossing = points
        .windows(2)
        .rev()
        .find(|pair| pair[0].y >= 0.0 && pair[1].y < 0.0)?;
    let (prev, next) = (crossing[0], crossing[1]);

    let ratio = prev.y / (prev.y - next.y);
    let x = prev.x + ratio * (next.x - prev.x);
    let t = prev.t + ratio * (next.t - prev.t);
    let vy = prev.vy + ratio * (next.vy - prev.vy);
    Some(TrajectoryPoint::planar(t, x, 0.0, next.vx, vy))
}

/// Landing latitude/longitude in degrees for the rotating spherical model.
///
/// Derived from the final point normalized by the planet radius:
/// `lat = asin(z/R)`, `lon = atan2(y/R, x/R)`.
pub fn landing_lat_lon(points: &[TrajectoryPoint], rotation: &RotationParams) -> Option<(f64, f64)> {
    let last = points.last()?;
    let r = rotation.planet_radius;
    let lat = (last.z / r).clamp(-1.0, 1.0).asin().to_degrees();
    let lon = (last.y / r).atan2(last.x / r).to_degrees();
    Some((lat, lon))
}

/// Heights of the local apexes of a bouncing trajectory, in time order.
///
/// A sample is an apex when its height tops both neighbors; used to check
/// restitution energy decay across bounces.
pub fn bounce_apex_heights(points: &[TrajectoryPoint]) -> Vec<f64> {
    points
        .windows(3)
        .filter(|w| w[1].y > w[0].y && w[1].y >= w[2].y)
        .map(|w| w[1].y)
        .collect()
}

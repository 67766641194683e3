//! # Projectile Engine
//!
//! Projectile trajectory simulation and inverse-solver engine: closed-form
//! flat-ground flight, fixed-step integration under drag, ground bounces and
//! rotating-planet motion, and the target-solving inverses.

// Re-export the main types and functions
pub use closed_form::{
    bounding_parabola, distance_from_launch, distance_turning_points, flight_metrics,
    sample_trajectory, sample_trajectory_default, FlightMetrics,
};
pub use inputs::{
    BounceParams, ConfigError, DragParams, RotationParams, SimulationParameters, Target,
};
pub use integrator::{integrate, integrate_drag_comparison, DragComparison};
pub use inverse::{
    launch_angles, max_range_metrics, minimum_speed, minimum_speed_closed_form, optimum_angle,
    AngleSolution,
};
pub use summary::{bounce_apex_heights, landing_lat_lon, TrajectorySummary};
pub use sweep::{aim, angle_range_sweep, AimShot, AimSolution, AngleRangeEntry};
pub use trajectory::{Termination, TrajectoryPoint, TrajectoryResult};

// Module declarations
pub mod atmosphere;
pub mod closed_form;
pub mod constants;
pub mod forces;
pub mod inputs;
pub mod integrator;
pub mod inverse;
mod kinematics;
pub mod summary;
pub mod sweep;
pub mod trajectory;

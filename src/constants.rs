/// Physical constants and solver defaults shared across the engine

/// Gravitational acceleration at the Earth's surface (m/s²)
pub const G_ACCEL_MPS2: f64 = 9.81;

/// Standard air density at sea level (kg/m³)
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225;

/// Exponential-atmosphere scale height (m)
///
/// Air density is modelled as ρ(h) = ρ0 · exp(−h/H). A scale height of
/// 8500 m reproduces the usual engineering approximation of the lower
/// atmosphere and matches the default the drag scenario was tuned against.
pub const ATMOSPHERE_SCALE_HEIGHT_M: f64 = 8500.0;

/// Mean Earth radius (m), default planet for the rotating-frame model
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Earth rotation period (s), default for the rotating-frame model
pub const EARTH_ROTATION_PERIOD_S: f64 = 86_400.0;

/// Fixed time step for the planar stepping models (s)
pub const DEFAULT_TIME_STEP: f64 = 0.01;

/// Fixed time step for the rotating spherical model (s)
///
/// The spherical scenario covers hundreds of kilometres per run; a coarser
/// step keeps point counts comparable to the planar models.
pub const SPHERICAL_TIME_STEP: f64 = 0.1;

/// Hard cap on integration steps per run
///
/// Fail-safe against parameter sets with no natural termination (for
/// example a net upward acceleration). Not a precision control.
pub const MAX_INTEGRATION_STEPS: usize = 10_000;

/// Default number of samples produced by the closed-form solver
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Lower bound of the minimum-speed bisection interval (m/s)
pub const MIN_SPEED_SEARCH_LOW: f64 = 0.0;

/// Upper bound of the minimum-speed bisection interval (m/s)
pub const MIN_SPEED_SEARCH_HIGH: f64 = 100.0;

/// Bisection tolerance for the minimum-speed solver (m/s)
pub const MIN_SPEED_TOLERANCE: f64 = 0.01;

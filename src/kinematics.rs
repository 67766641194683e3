//! Scalar kinematics helpers shared by the solvers.

/// Decompose a launch speed into horizontal and vertical components.
///
/// `angle_deg` is measured from the horizontal; returns `(vx, vy)`.
pub fn launch_components(speed: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (speed * theta.cos(), speed * theta.sin())
}

/// Magnitude of a planar velocity.
pub fn speed(vx: f64, vy: f64) -> f64 {
    (vx * vx + vy * vy).sqrt()
}

/// Real roots of `a·x² + b·x + c = 0`, larger root first.
///
/// Returns `None` when the discriminant is negative or the equation is
/// degenerate (`a = 0`).
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a.abs() < f64::EPSILON {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let r1 = (-b + sqrt_d) / (2.0 * a);
    let r2 = (-b - sqrt_d) / (2.0 * a);
    if r1 >= r2 {
        Some((r1, r2))
    } else {
        Some((r2, r1))
    }
}

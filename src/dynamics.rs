use nalgebra::Vector2;

use crate::types::G;

// ---------------------------------------------------------------------------
// Equations of motion (point mass, linear drag)
// ---------------------------------------------------------------------------

/// Acceleration on the projectile for a given velocity.
///
/// Forces modeled:
///   1. Gravity — constant, straight down
///   2. Drag    — linear in velocity, opposing it on each axis independently
///
/// The acceleration depends only on velocity, never position, which is what
/// lets the midpoint integrator get away with re-evaluating at a half-step
/// velocity alone.
pub fn accel(vel: Vector2<f64>, k: f64) -> Vector2<f64> {
    Vector2::new(-k * vel.x, -k * vel.y - G)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

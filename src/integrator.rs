use std::str::FromStr;

use thiserror::Error;

use crate::dynamics::accel;
use crate::types::State;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("unknown integration method `{0}` (expected \"euler\" or \"rk2\")")]
    UnknownMethod(String),
}

// ---------------------------------------------------------------------------
// Method selection
// ---------------------------------------------------------------------------

/// Time-stepping scheme. A closed enum so an unrecognized selection cannot
/// reach the simulation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Forward Euler, first order.
    Euler,
    /// Midpoint Runge-Kutta, second order.
    Rk2,
}

impl Method {
    /// Advance a state by one step of this scheme.
    pub fn step(&self, state: &State, k: f64, dt: f64) -> State {
        match self {
            Method::Euler => euler_step(state, k, dt),
            Method::Rk2 => rk2_step(state, k, dt),
        }
    }

}

impl FromStr for Method {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euler" => Ok(Method::Euler),
            "rk2" => Ok(Method::Rk2),
            other => Err(SimError::UnknownMethod(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Single-step integrators
// ---------------------------------------------------------------------------

/// Forward Euler step: position advances with the current velocity, velocity
/// with the acceleration at the current state. Local truncation error O(dt^2).
pub fn euler_step(state: &State, k: f64, dt: f64) -> State {
    let a = accel(state.vel, k);
    State {
        pos: state.pos + state.vel * dt,
        vel: state.vel + a * dt,
    }
}

/// Midpoint (RK2) step for the velocity ODE: re-evaluate the acceleration at
/// a half-step velocity estimate, then advance the full step with it.
///
/// The position update uses the half-step velocity alone, not an average of
/// stage velocities. Since the acceleration depends only on velocity this is
/// still the second-order Taylor update for position.
pub fn rk2_step(state: &State, k: f64, dt: f64) -> State {
    let a1 = accel(state.vel, k);
    let vel_half = state.vel + a1 * (dt / 2.0);
    let a2 = accel(vel_half, k);
    State {
        pos: state.pos + vel_half * dt,
        vel: state.vel + a2 * dt,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use nalgebra::Vector2;

use crate::integrator::Method;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G: f64 = 9.81; // gravitational acceleration, m/s^2

/// Hard cap on integration steps per run. A trajectory that never crosses
/// the ground (e.g. an oversized dt exciting the drag term) is truncated
/// here and the partial history returned as-is.
pub const MAX_STEPS: usize = 10_000;

// ---------------------------------------------------------------------------
// Kinematic state
// ---------------------------------------------------------------------------

/// Point-mass state at a single instant.
/// Frame: x downrange, y up, origin at the launch point.
#[derive(Debug, Clone, Copy)]
pub struct State {
    pub pos: Vector2<f64>, // m
    pub vel: Vector2<f64>, // m/s
}

impl State {
    /// Initial state for a launch: at the origin (raised by h0), velocity
    /// resolved from speed and elevation angle.
    pub fn at_launch(v0: f64, angle_deg: f64, h0: f64) -> State {
        let angle = angle_deg.to_radians();
        State {
            pos: Vector2::new(0.0, h0),
            vel: Vector2::new(v0 * angle.cos(), v0 * angle.sin()),
        }
    }
}

// ---------------------------------------------------------------------------
// Launch definition
// ---------------------------------------------------------------------------

/// Everything that parametrizes one simulation run. Immutable once built.
#[derive(Debug, Clone)]
pub struct Launch {
    pub v0: f64,        // launch speed, m/s
    pub angle_deg: f64, // elevation angle, degrees
    pub h0: f64,        // initial height, m
    pub k: f64,         // linear drag coefficient, 1/s
    pub dt: f64,        // integration timestep, s
    pub method: Method,
}

impl Default for Launch {
    fn default() -> Self {
        Self {
            v0: 25.0,
            angle_deg: 45.0,
            h0: 0.0,
            k: 0.0,
            dt: 0.01, // 100 Hz
            method: Method::Euler,
        }
    }
}

// ---------------------------------------------------------------------------
// Trajectory history
// ---------------------------------------------------------------------------

/// Recorded flight path: parallel x/y sequences, one entry per step plus the
/// initial point. The two vectors always have equal length.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Trajectory {
    pub fn with_capacity(n: usize) -> Trajectory {
        Trajectory {
            xs: Vec::with_capacity(n),
            ys: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, pos: Vector2<f64>) {
        self.xs.push(pos.x);
        self.ys.push(pos.y);
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Highest recorded altitude.
    pub fn peak_height(&self) -> f64 {
        self.ys.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Horizontal distance at the last recorded point.
    pub fn range(&self) -> f64 {
        self.xs.last().copied().unwrap_or(0.0)
    }

    pub fn last_y(&self) -> f64 {
        self.ys.last().copied().unwrap_or(0.0)
    }

    /// (x, y) pairs, handy for plotting.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| [x, y])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use crate::integrator::{Method, SimError};
use crate::types::{Launch, State, Trajectory, MAX_STEPS};

// ---------------------------------------------------------------------------
// Trajectory simulation loop
// ---------------------------------------------------------------------------

/// Run one launch from release to touchdown.
///
/// The history is seeded with the initial point, then grows by one point per
/// integration step. Touchdown is detected on the previous step's altitude,
/// so the first point below ground level is still recorded — the last entry
/// of a completed flight sits just under y = 0. Runs that never come down
/// are cut off after `MAX_STEPS` points and returned truncated, silently.
pub fn simulate(launch: &Launch) -> Trajectory {
    let mut state = State::at_launch(launch.v0, launch.angle_deg, launch.h0);

    let mut trajectory = Trajectory::with_capacity(1024);
    trajectory.push(state.pos);

    for _ in 0..MAX_STEPS {
        if state.pos.y < 0.0 {
            break;
        }
        state = launch.method.step(&state, launch.k, launch.dt);
        trajectory.push(state.pos);
    }

    trajectory
}

/// String-keyed convenience surface: parse the method name, then simulate.
/// Fails fast on an unrecognized method, before any stepping.
pub fn simulate_trajectory(
    v0: f64,
    angle_deg: f64,
    h0: f64,
    k: f64,
    dt: f64,
    method: &str,
) -> Result<(Vec<f64>, Vec<f64>), SimError> {
    let method: Method = method.parse()?;
    let trajectory = simulate(&Launch {
        v0,
        angle_deg,
        h0,
        k,
        dt,
        method,
    });
    Ok((trajectory.xs, trajectory.ys))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::G;

    fn launch(v0: f64, k: f64, dt: f64, method: Method) -> Launch {
        Launch {
            v0,
            angle_deg: 45.0,
            h0: 0.0,
            k,
            dt,
            method,
        }
    }

    #[test]
    fn history_starts_at_the_launch_point() {
        let traj = simulate(&Launch {
            h0: 3.5,
            ..Launch::default()
        });
        assert_eq!(traj.xs.len(), traj.ys.len());
        assert!(traj.len() >= 1);
        assert_eq!(traj.xs[0], 0.0);
        assert_eq!(traj.ys[0], 3.5);
    }

    #[test]
    fn flight_ends_just_below_ground() {
        for method in [Method::Euler, Method::Rk2] {
            let traj = simulate(&launch(25.0, 0.3, 0.05, method));
            let n = traj.len();
            assert!(n >= 2);
            assert!(traj.ys[n - 1] < 0.0, "last point should be underground");
            assert!(traj.ys[n - 2] >= 0.0, "only one point may overshoot");
        }
    }

    #[test]
    fn step_cap_truncates_a_long_fall() {
        // Dropped from 1 km with a 0.1 ms step: ~143k steps to the ground,
        // so the cap fires first and the partial history comes back as-is.
        let traj = simulate(&Launch {
            v0: 0.0,
            h0: 1000.0,
            dt: 1e-4,
            ..Launch::default()
        });
        assert_eq!(traj.len(), MAX_STEPS + 1);
        assert!(traj.last_y() > 0.0, "cap fired before touchdown");
    }

    #[test]
    fn history_never_exceeds_the_cap() {
        for dt in [1e-4, 0.01, 0.5] {
            for k in [0.0, 0.8] {
                let traj = simulate(&launch(25.0, k, dt, Method::Euler));
                assert!(traj.len() <= MAX_STEPS + 1);
            }
        }
    }

    #[test]
    fn starting_underground_records_a_single_point() {
        let traj = simulate(&Launch {
            h0: -1.0,
            ..Launch::default()
        });
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.ys[0], -1.0);
    }

    #[test]
    fn vacuum_flight_matches_the_analytic_parabola() {
        // v0 = 25 m/s at 45 deg, no drag: apex = v0^2 sin^2(45)/(2g) ~ 15.93 m,
        // range = v0^2 sin(90)/g ~ 63.7 m. Forward Euler at this dt sits a
        // shade under 3% above the apex (the discrete sum overshoots).
        let (xs, ys) = simulate_trajectory(25.0, 45.0, 0.0, 0.0, 0.05, "euler").unwrap();
        assert_eq!(xs.len(), ys.len());

        let peak = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let apex = 25.0_f64.powi(2) * 0.5 / (2.0 * G);
        assert!(
            (peak - apex).abs() / apex < 0.03,
            "peak {peak:.2} vs analytic {apex:.2}"
        );

        let range = *xs.last().unwrap();
        let analytic_range = 25.0_f64.powi(2) / G;
        assert!(
            (range - analytic_range).abs() / analytic_range < 0.05,
            "range {range:.2} vs analytic {analytic_range:.2}"
        );
    }

    #[test]
    fn drag_shortens_the_flight() {
        let free = simulate(&launch(25.0, 0.0, 0.05, Method::Euler));
        let dragged = simulate(&launch(25.0, 0.8, 0.05, Method::Euler));
        assert!(dragged.range() < free.range());
        assert!(dragged.peak_height() < free.peak_height());
    }

    #[test]
    fn rk2_tracks_the_reference_tighter_than_euler() {
        // Matched-time comparison against a fine-step RK2 reference: at
        // t = n * 0.1 the coarse RK2 position should sit much closer to the
        // dt = 0.001 solution than coarse Euler does.
        let k = 0.5;
        let reference = simulate(&launch(25.0, k, 0.001, Method::Rk2));
        let euler = simulate(&launch(25.0, k, 0.1, Method::Euler));
        let rk2 = simulate(&launch(25.0, k, 0.1, Method::Rk2));

        let mut err_euler = 0.0;
        let mut err_rk2 = 0.0;
        for n in 1..=15_usize {
            let r = n * 100; // same instant in the reference history
            assert!(r < reference.len() && n < euler.len() && n < rk2.len());
            err_euler += (euler.xs[n] - reference.xs[r]).hypot(euler.ys[n] - reference.ys[r]);
            err_rk2 += (rk2.xs[n] - reference.xs[r]).hypot(rk2.ys[n] - reference.ys[r]);
        }
        assert!(
            err_rk2 < err_euler,
            "rk2 error {err_rk2:.4} should undercut euler error {err_euler:.4}"
        );
    }

    #[test]
    fn unknown_method_fails_before_stepping() {
        let err = simulate_trajectory(25.0, 45.0, 0.0, 0.0, 0.05, "invalid").unwrap_err();
        assert_eq!(err, SimError::UnknownMethod("invalid".into()));
    }
}

use std::io;

use projectile_sim::io::csv;
use projectile_sim::types::Launch;
use projectile_sim::{simulate, Method, Trajectory};

// ---------------------------------------------------------------------------
// Study parameters
// ---------------------------------------------------------------------------

const V0: f64 = 25.0; // m/s
const ANGLE: f64 = 45.0; // deg
const H0: f64 = 0.0; // m

/// Study A: drag sweep, forward Euler at dt = 0.05.
const K_VALUES: [f64; 4] = [0.0, 0.1, 0.3, 0.8];
const SWEEP_DT: f64 = 0.05;

/// Study B: Euler vs RK2 at a coarse step, against a fine-step RK2 reference.
const K_COMPARE: f64 = 0.5;
const COARSE_DT: f64 = 0.1;
const REFERENCE_DT: f64 = 0.001;

fn main() -> io::Result<()> {
    println!();
    println!("====================================================================");
    println!("  PROJECTILE FLIGHT SIMULATION — linear drag");
    println!("====================================================================");
    println!();
    println!("  Launch: v0={V0} m/s   angle={ANGLE} deg   h0={H0} m");
    println!();

    // -----------------------------------------------------------------------
    // Study A: trajectory vs drag coefficient
    // -----------------------------------------------------------------------
    println!("  Drag Sweep (euler, dt={SWEEP_DT} s)");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>6}  {:>9}  {:>9}  {:>10}  {:>7}",
        "k(1/s)", "peak (m)", "range (m)", "flight (s)", "points"
    );

    for k in K_VALUES {
        let traj = simulate(&Launch {
            v0: V0,
            angle_deg: ANGLE,
            h0: H0,
            k,
            dt: SWEEP_DT,
            method: Method::Euler,
        });
        print_row(k, SWEEP_DT, &traj);
        csv::write_trajectory_file(&format!("trajectory_k{k}.csv"), &traj)?;
    }
    println!();

    // -----------------------------------------------------------------------
    // Study B: integration error, Euler vs RK2
    // -----------------------------------------------------------------------
    println!("  Method Comparison (k={K_COMPARE})");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>14}  {:>9}  {:>9}  {:>10}  {:>7}",
        "series", "peak (m)", "range (m)", "flight (s)", "points"
    );

    let series = [
        ("euler", Method::Euler, COARSE_DT),
        ("rk2", Method::Rk2, COARSE_DT),
        ("rk2-reference", Method::Rk2, REFERENCE_DT),
    ];
    for (label, method, dt) in series {
        let traj = simulate(&Launch {
            v0: V0,
            angle_deg: ANGLE,
            h0: H0,
            k: K_COMPARE,
            dt,
            method,
        });
        println!(
            "  {:>14}  {:>9.2}  {:>9.2}  {:>10.2}  {:>7}",
            format!("{label} dt={dt}"),
            traj.peak_height(),
            traj.range(),
            (traj.len() - 1) as f64 * dt,
            traj.len()
        );
        csv::write_trajectory_file(&format!("compare_{label}.csv"), &traj)?;
    }

    println!();
    println!("  Each series written to its CSV file in the working directory.");
    println!("====================================================================");
    println!();

    Ok(())
}

fn print_row(k: f64, dt: f64, traj: &Trajectory) {
    println!(
        "  {:>6}  {:>9.2}  {:>9.2}  {:>10.2}  {:>7}",
        k,
        traj.peak_height(),
        traj.range(),
        (traj.len() - 1) as f64 * dt,
        traj.len()
    );
}

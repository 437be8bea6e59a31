use std::io::{self, Write};

use crate::types::Trajectory;

/// Write a trajectory to CSV format.
///
/// Columns: x, y (meters), one row per recorded point.
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(writer, "x,y")?;
    for [x, y] in trajectory.points() {
        writeln!(writer, "{x:.4},{y:.4}")?;
    }
    Ok(())
}

/// Write a trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &Trajectory) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

//! CSV export of the finished trajectory

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::simulation::states::Trajectory;

/// Write a header plus one `t,u,v` row per stored sample
pub fn write_csv(traj: &Trajectory, path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(b"t,u,v\n")?;
    for i in 0..traj.len() {
        writeln!(writer, "{},{},{}", traj.time(i), traj.u[i], traj.v[i])?;
    }

    writer.flush()
}

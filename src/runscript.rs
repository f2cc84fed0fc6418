use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::Options;

/// Appends one `./RRDP <config_dir>/config<i>.txt` line per instance to the
/// run script, creating it if absent. The script is never truncated, so
/// repeated runs accumulate lines.
pub fn append_run_lines(opts: &Options, script_path: &Path) -> io::Result<()> {
    let mut script = OpenOptions::new()
        .create(true)
        .append(true)
        .open(script_path)?;
    for i in 0..opts.instance_count {
        writeln!(script, "./RRDP {}/config{}.txt", opts.config_dir, i + 1)?;
    }
    Ok(())
}

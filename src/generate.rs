use log::info;
use rand::Rng;
use std::fs::{self, File};
use std::io::{self, Write};

use crate::cli::Options;

/// Writes one config file per instance index into the config directory,
/// creating the directory (and missing parents) first. Existing files with
/// the same names are overwritten. Each file gets an independently drawn
/// source vertex in `[0, dimension)` for row and column.
///
/// The label spacing is fixed: the downstream consumer parses these files
/// by exact label text.
pub fn generate_configs<R: Rng>(opts: &Options, rng: &mut R) -> io::Result<()> {
    fs::create_dir_all(&opts.config_dir)?;

    for i in 1..=opts.instance_count {
        let path = format!("{}/config{i}.txt", opts.config_dir);
        let row = rng.gen_range(0..opts.dimension);
        let column = rng.gen_range(0..opts.dimension);

        let mut file = File::create(&path)?;
        writeln!(file, "INSTANCE_PATH:   {}/instance{i}.txt", opts.instance_dir)?;
        writeln!(file, "DIMENSION:   {}", opts.dimension)?;
        writeln!(file, "SOURCE_VERTEX_ROW:  {row}")?;
        writeln!(file, "SOURCE_VERTEX_COLUMN:  {column}")?;
        writeln!(file, "REPEAT_TIME: {}", opts.repeat_time)?;

        info!("Generated {path}");
    }
    Ok(())
}

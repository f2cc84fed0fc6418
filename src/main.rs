use log::{info, LevelFilter};
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::Path;
use std::{env, io, process};

mod cli;
mod generate;
mod runscript;

/// The script run-invocation lines are appended to, in the working directory.
const RUN_SCRIPT: &str = "run.sh";

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match cli::parse(&args) {
        Ok(opts) => opts,
        Err(cli::ArgError::HelpRequested) => {
            print!("{}", cli::USAGE);
            process::exit(0);
        }
        Err(err) => {
            println!("{err}");
            if matches!(err, cli::ArgError::UnknownArgument(_)) {
                print!("{}", cli::USAGE);
            }
            process::exit(1);
        }
    };

    // Bare-message pattern so progress lines read as plain stdout text.
    let stdout: ConsoleAppender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();
    let log_config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .unwrap();
    log4rs::init_config(log_config).unwrap();

    let mut rng = SmallRng::from_entropy();
    generate::generate_configs(&opts, &mut rng)?;
    info!("Config files generation completed.");

    runscript::append_run_lines(&opts, Path::new(RUN_SCRIPT))?;
    info!("Run file generation completed.");
    Ok(())
}

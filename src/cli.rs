use std::fmt;

pub const USAGE: &str = "\
Usage: rrdp-confgen [Options]
Options:
\t-dim: The dimension of the graph (default: 50)
\t-instances: The number of instances to be tested (default: 1000)
\t-repeat: The number of times each algorithm runs on each instance (default: 1000)
\t-mode: The mode of instance path (default: 0). 0 for general instances and 1 for special instances
\t-ConfigDir: Directory for config files (default: Config/[dim])
\t-InsDir: Base directory for instance files (default: ./General(or Special)_Instances/[dim])
\t-h: Display this help and exit
";

/// Fully resolved run parameters. Directory defaults are filled in during
/// parsing, so downstream code never sees an unset path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub dimension: u32,
    pub instance_count: u32,
    pub repeat_time: u32,
    pub mode: i32,
    pub config_dir: String,
    pub instance_dir: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ArgError {
    HelpRequested,
    /// A flag's value did not parse as an integer.
    InvalidValue(&'static str),
    /// A flag appeared as the last token, with no value after it.
    MissingValue(&'static str),
    /// A token in flag position that matches no known flag.
    UnknownArgument(String),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::HelpRequested => write!(f, "help requested"),
            ArgError::InvalidValue(flag) => write!(f, "Error: {flag} must be an integer."),
            ArgError::MissingValue(flag) => write!(f, "Error: {flag} requires a value."),
            ArgError::UnknownArgument(token) => write!(f, "Error: Unknown argument '{token}'."),
        }
    }
}

enum Field {
    Dim,
    Instances,
    Repeat,
    Mode,
    ConfigDir,
    InsDir,
}

/// Flag schema: every flag takes exactly one value token.
const FLAGS: &[(&str, Field)] = &[
    ("-dim", Field::Dim),
    ("-instances", Field::Instances),
    ("-repeat", Field::Repeat),
    ("-mode", Field::Mode),
    ("-ConfigDir", Field::ConfigDir),
    ("-InsDir", Field::InsDir),
];

fn parse_int<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, ArgError> {
    value.parse().map_err(|_| ArgError::InvalidValue(flag))
}

/// Parses the argument list (program name already stripped) into resolved
/// [`Options`]. Tokens are consumed strictly in (flag, value) pairs.
pub fn parse(args: &[String]) -> Result<Options, ArgError> {
    // -h wins regardless of position, before anything else is inspected.
    if args.iter().any(|a| a == "-h") {
        return Err(ArgError::HelpRequested);
    }

    let mut dimension: u32 = 50;
    let mut instance_count: u32 = 1000;
    let mut repeat_time: u32 = 1000;
    let mut mode: i32 = 0;
    let mut config_dir: Option<String> = None;
    let mut instance_dir: Option<String> = None;

    for pair in args.chunks(2) {
        let (flag, field) = FLAGS
            .iter()
            .find(|(name, _)| *name == pair[0])
            .map(|(name, field)| (*name, field))
            .ok_or_else(|| ArgError::UnknownArgument(pair[0].clone()))?;
        let value = pair.get(1).ok_or(ArgError::MissingValue(flag))?;
        match field {
            Field::Dim => dimension = parse_int(flag, value)?,
            Field::Instances => instance_count = parse_int(flag, value)?,
            Field::Repeat => repeat_time = parse_int(flag, value)?,
            Field::Mode => mode = parse_int(flag, value)?,
            Field::ConfigDir => config_dir = Some(value.clone()),
            Field::InsDir => instance_dir = Some(value.clone()),
        }
    }

    let config_dir = config_dir.unwrap_or_else(|| format!("Config/{dimension}"));
    let instance_dir = instance_dir.unwrap_or_else(|| {
        if mode == 0 {
            format!("./General_Instances/{dimension}")
        } else {
            format!("./Special_Instances/{dimension}")
        }
    });

    Ok(Options {
        dimension,
        instance_count,
        repeat_time,
        mode,
        config_dir,
        instance_dir,
    })
}

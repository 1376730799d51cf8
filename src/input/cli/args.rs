use crate::controllers::session::config::{DEFAULT_SIZE, DEFAULT_ZOOM_SCALE, SessionConfig};
use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::util::available_threads::available_threads;
use crate::input::cli::errors::CliError;
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "fractal.png";
pub const DEFAULT_VERBOSITY: &str = "info";
pub const VERBOSITY_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Everything one command-line run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub config: SessionConfig,
    /// Zoom clicks applied in order after the first frame.
    pub zooms: Vec<Point>,
    pub output: PathBuf,
    pub verbosity: String,
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", value))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("bad x in '{}': {}", value, err))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("bad y in '{}': {}", value, err))?;

    Ok(Point::new(x, y))
}

pub fn build_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Mandelbrot, Tricorn and Burning Ship escape-time fractals")
        .arg(
            Arg::new("fractal")
                .short('f')
                .long("fractal")
                .value_name("NAME")
                .value_parser(FractalKinds::from_name)
                .help("Fractal to render: Mandelbrot (default), Tricorn or 'Burning Ship'"),
        )
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .value_name("PIXELS")
                .value_parser(clap::value_parser!(u32))
                .help(format!("Width and height of the square image (default: {})", DEFAULT_SIZE)),
        )
        .arg(
            Arg::new("zoom")
                .short('z')
                .long("zoom")
                .value_name("X,Y")
                .action(ArgAction::Append)
                .value_parser(parse_point)
                .help("Zoom in centred on pixel X,Y of the previous frame; repeat to zoom further"),
        )
        .arg(
            Arg::new("zoom-scale")
                .long("zoom-scale")
                .value_name("SCALE")
                .value_parser(clap::value_parser!(f64))
                .help(format!("Viewport scale per zoom (default: {})", DEFAULT_ZOOM_SCALE)),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("THREADS")
                .value_parser(clap::value_parser!(usize))
                .help("Number of threads computing rows (min: 1, default: cores available)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_OUTPUT)
                .help("Image to write; the extension picks the format (.png or .ppm)"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .value_name("VERBOSITY_LEVEL")
                .value_parser(PossibleValuesParser::new(VERBOSITY_LEVELS))
                .ignore_case(true)
                .default_value(DEFAULT_VERBOSITY)
                .help("Set verbosity level for output (trace, debug, info (default), warn, error)"),
        )
}

pub fn cli_options_from_matches(matches: &ArgMatches) -> Result<CliOptions, CliError> {
    let defaults = SessionConfig::default();

    let threads = match matches.get_one::<usize>("threads") {
        Some(&threads) => NonZeroUsize::new(threads).ok_or(CliError::InvalidThreads)?,
        None => available_threads(),
    };

    let config = SessionConfig {
        size: matches.get_one::<u32>("size").copied().unwrap_or(defaults.size),
        zoom_scale: matches
            .get_one::<f64>("zoom-scale")
            .copied()
            .unwrap_or(defaults.zoom_scale),
        threads,
        fractal: matches
            .get_one::<FractalKinds>("fractal")
            .copied()
            .unwrap_or(defaults.fractal),
    };

    let zooms = matches
        .get_many::<Point>("zoom")
        .map(|points| points.copied().collect())
        .unwrap_or_default();

    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let verbosity = matches
        .get_one::<String>("verbosity")
        .cloned()
        .unwrap_or_else(|| DEFAULT_VERBOSITY.to_string());

    Ok(CliOptions {
        config,
        zooms,
        output,
        verbosity,
    })
}

pub fn parse_args<I, T>(args: I) -> Result<CliOptions, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;

    cli_options_from_matches(&matches)
}

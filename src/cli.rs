use anyhow::{Context as _, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, builder::PossibleValuesParser};
use dupcheck_core::Strategy;
use strum::IntoEnumIterator as _;

pub const STRATEGY_ENV: &str = "DUPCHECK_STRATEGY";

/// Runtime settings collected from flags and the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub strategy: Strategy,
    pub log_level: log::LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            log_level: log::LevelFilter::Warn,
        }
    }
}

pub fn build_command() -> Command {
    let default_strategy: &'static str = Strategy::default().into();

    Command::new("dupcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reads test cases from stdin and prints YES for each one containing a repeated value, NO otherwise")
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .short('s')
                .env(STRATEGY_ENV)
                .value_parser(PossibleValuesParser::new(
                    Strategy::iter().map(<&'static str>::from),
                ))
                .default_value(default_strategy)
                .help("Duplicate detection strategy"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Set verbose output level"),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let strategy = match matches.get_one::<String>("strategy") {
            Some(name) => name
                .parse()
                .with_context(|| format!("unknown strategy: {name}"))?,
            None => Strategy::default(),
        };

        let log_level = match matches.get_count("verbose") {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        Ok(Self {
            strategy,
            log_level,
        })
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `-v`
pub fn setup_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

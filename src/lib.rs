//! Command line front end for [`dupcheck_core`]

pub mod cli;

pub use cli::{Config, build_command, setup_logging};

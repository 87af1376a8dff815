//! Typed configuration assembled from the command line.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration variables related to input/output operations.
#[derive(Clone, Debug)]
pub struct IOConfig {
    /// Input netlist path.
    pub input_file: PathBuf,
    /// Output partition report path.
    pub output_file: PathBuf,
    /// Optional path to write a machine-readable JSON summary to.
    pub json_stats_file: Option<PathBuf>,
}

/// Overall partitioner configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub io: IOConfig,
}

impl Config {
    /// Construct a baseline configuration from the clap argument matches.
    pub fn from_args(matches: &clap::ArgMatches) -> Result<Self> {
        Ok(Config {
            io: IOConfig {
                input_file: PathBuf::from(
                    matches
                        .value_of_os("INPUT")
                        .context("INPUT is a required argument")?,
                ),
                output_file: PathBuf::from(
                    matches
                        .value_of_os("OUTPUT")
                        .context("OUTPUT is a required argument")?,
                ),
                json_stats_file: matches.value_of_os("JSON_STATS").map(PathBuf::from),
            },
        })
    }
}

//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AnalysisOptions, Mode, OutputFormat, RunConfig};

/// Summarise and plot per-block timing measurements.
#[derive(Parser, Debug)]
#[command(name = "blocktime", version, about)]
pub struct Cli {
    /// Headerless CSV with two integer columns: block,time
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Analyse only the first N rows (after sorting and averaging)
    #[arg(value_name = "MAX_BLOCKS", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_blocks: Option<u64>,

    /// Use every record, or the mean time of each block
    #[arg(long, short = 'm', value_enum, default_value_t = Mode::Raw)]
    pub mode: Mode,

    /// Also print the autocorrelation of the series
    #[arg(long, short = 'a')]
    pub autocorrelation: bool,

    /// Print the first N values before the statistics
    #[arg(long, value_name = "N")]
    pub preview: Option<usize>,

    /// Statistics output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print statistics only, do not open the plot window
    #[arg(long)]
    pub no_plot: bool,

    /// Enable debug logging for blocktime
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            options: AnalysisOptions {
                mode: self.mode,
                limit: self
                    .max_blocks
                    .map(|k| usize::try_from(k).unwrap_or(usize::MAX)),
                autocorrelation: self.autocorrelation,
            },
            preview: self.preview,
            format: self.format,
            plot: !self.no_plot,
            ..RunConfig::new(self.csv)
        }
    }
}

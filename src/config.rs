use std::path::PathBuf;

use clap::ValueEnum;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// How raw records become the analysed series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// One point per record.
    #[default]
    Raw,
    /// One point per block: the mean of its times.
    Average,
}

/// Shape of the statistics printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The knobs that decide which series is analysed. The viewer edits these
/// live, so they are kept apart from the one-shot settings in [`RunConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisOptions {
    pub mode: Mode,
    /// Keep only the first N rows after sorting (and averaging).
    pub limit: Option<usize>,
    pub autocorrelation: bool,
}

/// Everything one invocation needs, parsed once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub path: PathBuf,
    pub options: AnalysisOptions,
    /// Print this many leading values before the statistics.
    pub preview: Option<usize>,
    pub format: OutputFormat,
    /// Open the viewer window after printing.
    pub plot: bool,
}

impl RunConfig {
    /// Defaults for `path`: raw mode, no limit, text output, plot shown.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RunConfig {
            path: path.into(),
            options: AnalysisOptions::default(),
            preview: None,
            format: OutputFormat::default(),
            plot: true,
        }
    }
}

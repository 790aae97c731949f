use std::path::{Path, PathBuf};

use crate::color::SeriesColors;
use crate::config::{AnalysisOptions, Mode};
use crate::data::model::Dataset;
use crate::pipeline::{Analysis, analyze};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct AppState {
    /// File the dataset came from.
    pub path: Option<PathBuf>,

    /// Loaded records (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Which series is shown; edited from the side panel.
    pub options: AnalysisOptions,

    /// Series and statistics for the current options (cached).
    pub analysis: Option<Analysis>,

    /// Line colours.
    pub colors: SeriesColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            path: None,
            dataset: None,
            options,
            analysis: None,
            colors: SeriesColors::default(),
            status_message: None,
        }
    }

    /// State for a dataset that has already been analysed with `options`.
    pub fn with_analysis(
        path: &Path,
        dataset: Dataset,
        options: AnalysisOptions,
        analysis: Analysis,
    ) -> Self {
        Self {
            path: Some(path.to_path_buf()),
            dataset: Some(dataset),
            analysis: Some(analysis),
            ..Self::new(options)
        }
    }

    /// Ingest a newly loaded dataset and analyse it with the current options.
    pub fn set_dataset(&mut self, path: &Path, dataset: Dataset) {
        self.path = Some(path.to_path_buf());
        self.dataset = Some(dataset);
        self.reanalyze();
    }

    /// Recompute `analysis` after an option change.
    pub fn reanalyze(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        match analyze(ds, &self.options) {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Cannot analyse dataset: {e}");
                self.analysis = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Largest sensible row limit for the current mode.
    pub fn max_rows(&self) -> usize {
        match (&self.dataset, self.options.mode) {
            (None, _) => 0,
            (Some(ds), Mode::Raw) => ds.len(),
            (Some(ds), Mode::Average) => ds.block_count(),
        }
    }
}

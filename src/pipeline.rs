use crate::config::{AnalysisOptions, Mode};
use crate::data::aggregate::average_by_block;
use crate::data::model::{Dataset, Series};
use crate::data::select::truncate_series;
use crate::error::StatsError;
use crate::stats::{self, Summary};

// ---------------------------------------------------------------------------
// Dataset → selected series → statistics
// ---------------------------------------------------------------------------

/// The result of one pass over a loaded dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub series: Series,
    pub summary: Summary,
    /// Present only when requested in the options.
    pub autocorrelation: Option<Vec<f64>>,
}

/// Build the series `options` describe and compute its statistics.
pub fn analyze(dataset: &Dataset, options: &AnalysisOptions) -> Result<Analysis, StatsError> {
    let series = match options.mode {
        Mode::Raw => Series::from_records(dataset.records()),
        Mode::Average => Series::from_averages(&average_by_block(dataset.records())),
    };
    let series = truncate_series(series, options.limit);

    let summary = stats::summarize(&series.values)?;
    let autocorrelation = options
        .autocorrelation
        .then(|| stats::autocorrelation(&series.values));

    Ok(Analysis {
        series,
        summary,
        autocorrelation,
    })
}

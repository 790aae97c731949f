//! Printing an [`Analysis`] to a writer.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::pipeline::Analysis;
use crate::stats::Summary;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    summary: &'a Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<&'a [f64]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    autocorrelation: Option<&'a [f64]>,
}

/// Write the statistics in `format`, preceded by the first `preview` values.
pub fn write_report<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    format: OutputFormat,
    preview: Option<usize>,
) -> Result<()> {
    let values = &analysis.series.values;
    let preview = preview.map(|k| &values[..k.min(values.len())]);
    match format {
        OutputFormat::Text => write_text(out, analysis, preview),
        OutputFormat::Json => write_json(out, analysis, preview),
    }
}

fn write_text<W: Write>(out: &mut W, analysis: &Analysis, preview: Option<&[f64]>) -> Result<()> {
    let s = &analysis.summary;
    if let Some(values) = preview {
        writeln!(out, "{}", format_values(values))?;
    }
    writeln!(out, "N: {}", s.n)?;
    writeln!(out, "Mean: {:.6}", s.mean)?;
    writeln!(out, "Std. dev.: {:.6}", s.std_dev)?;
    match s.cv {
        Some(cv) => writeln!(out, "Std. dev. compared to mean: {cv:.6}")?,
        None => writeln!(out, "Std. dev. compared to mean: undefined")?,
    }
    if let Some(acf) = &analysis.autocorrelation {
        writeln!(out, "Auto correlation: {}", format_values(acf))?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, analysis: &Analysis, preview: Option<&[f64]>) -> Result<()> {
    let report = JsonReport {
        summary: &analysis.summary,
        preview,
        autocorrelation: analysis.autocorrelation.as_deref(),
    };
    serde_json::to_writer(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// `[a b c]`, whole numbers without a fractional part.
pub fn format_values(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(" "))
}

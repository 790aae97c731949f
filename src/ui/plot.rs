use eframe::egui::Ui;
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Timing plot (central panel)
// ---------------------------------------------------------------------------

/// Render the series, its mean and ±1σ band, and the autocorrelation if any.
pub fn timing_plot(ui: &mut Ui, state: &AppState) {
    let analysis = match &state.analysis {
        Some(a) => a,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a timing CSV to plot it  (File → Open…)");
            });
            return;
        }
    };

    let colors = &state.colors;
    let summary = &analysis.summary;

    let series_height = if analysis.autocorrelation.is_some() {
        ui.available_height() * 0.6
    } else {
        ui.available_height()
    };

    Plot::new("timing_plot")
        .legend(Legend::default())
        .height(series_height)
        .x_axis_label("Index")
        .y_axis_label("Time")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(indexed(&analysis.series.values))
                    .name("time")
                    .color(colors.values)
                    .width(1.5),
            );
            plot_ui.hline(HLine::new(summary.mean).name("mean").color(colors.mean));
            for y in [summary.mean - summary.std_dev, summary.mean + summary.std_dev] {
                plot_ui.hline(
                    HLine::new(y)
                        .name("mean ± std. dev.")
                        .color(colors.spread)
                        .style(LineStyle::dashed_loose()),
                );
            }
        });

    if let Some(acf) = &analysis.autocorrelation {
        ui.separator();
        Plot::new("autocorrelation_plot")
            .legend(Legend::default())
            .x_axis_label("Index")
            .y_axis_label("Auto correlation")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(indexed(acf))
                        .name("auto correlation")
                        .color(colors.autocorrelation)
                        .width(1.5),
                );
            });
    }
}

/// `(i, v)` points, one per value.
fn indexed(values: &[f64]) -> PlotPoints<'_> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_indexed_from_zero() {
        let values = [7.0, 3.5, 9.0];
        let points = indexed(&values);
        let xy: Vec<(f64, f64)> = points.points().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(xy, vec![(0.0, 7.0), (1.0, 3.5), (2.0, 9.0)]);
    }
}

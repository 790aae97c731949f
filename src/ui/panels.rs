use eframe::egui::{self, Color32, RichText, Ui};

use crate::config::Mode;
use crate::report::format_values;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – statistics and series controls
// ---------------------------------------------------------------------------

/// Render the left panel: what is plotted and its statistics.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let before = state.options;

    ui.strong("Mode");
    ui.horizontal(|ui: &mut Ui| {
        ui.radio_value(&mut state.options.mode, Mode::Raw, "Raw");
        ui.radio_value(&mut state.options.mode, Mode::Average, "Average per block");
    });

    ui.add_space(4.0);
    let max_rows = state.max_rows().max(1);
    let mut limited = state.options.limit.is_some();
    ui.checkbox(&mut limited, "Limit rows");
    if limited {
        let mut k = state.options.limit.unwrap_or(max_rows).clamp(1, max_rows);
        ui.add(egui::Slider::new(&mut k, 1..=max_rows).text("rows"));
        state.options.limit = Some(k);
    } else {
        state.options.limit = None;
    }

    ui.checkbox(&mut state.options.autocorrelation, "Auto correlation");

    if state.options != before {
        log::debug!("Options changed: {:?}", state.options);
        state.reanalyze();
    }

    ui.separator();
    ui.strong("Statistics");

    let Some(analysis) = &state.analysis else {
        return;
    };
    let s = &analysis.summary;
    egui::Grid::new("stats_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("N");
            ui.label(s.n.to_string());
            ui.end_row();

            ui.label("Mean");
            ui.label(format!("{:.6}", s.mean));
            ui.end_row();

            ui.label("Std. dev.");
            ui.label(format!("{:.6}", s.std_dev));
            ui.end_row();

            ui.label("Std. dev. / mean");
            ui.label(match s.cv {
                Some(cv) => format!("{cv:.6}"),
                None => "undefined".to_string(),
            });
            ui.end_row();
        });

    if let Some(acf) = &analysis.autocorrelation {
        ui.add_space(4.0);
        egui::CollapsingHeader::new("Auto correlation values")
            .default_open(false)
            .show(ui, |ui: &mut Ui| {
                egui::ScrollArea::vertical().show(ui, |ui: &mut Ui| {
                    ui.label(RichText::new(format_values(acf)).monospace());
                });
            });
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(path), Some(ds)) = (&state.path, &state.dataset) {
            ui.label(format!(
                "{}: {} records, {} blocks",
                path.display(),
                ds.len(),
                ds.block_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open timing data")
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(&path, dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::generate_palette;
use crate::config::SeriesSpec;
use crate::data::model::GradientSeries;
use crate::data::reader;
use crate::state::AppState;
use crate::ui::plot::series_color;

// ---------------------------------------------------------------------------
// Left side panel – series visibility
// ---------------------------------------------------------------------------

/// Render the left series panel: one visibility checkbox per series, in
/// configuration order, tinted with the series color.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    if state.series.is_empty() {
        ui.label("No series loaded.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.show_all();
        }
        if ui.small_button("None").clicked() {
            state.hide_all();
        }
    });
    ui.separator();

    let fallback = generate_palette(state.series.len());

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, series) in state.series.iter().enumerate() {
                let color = series_color(series, &fallback, idx);
                let label = match series.spec.legend_name() {
                    Some(name) => name.to_string(),
                    None => format!("series {idx}"),
                };
                let text = RichText::new(format!("{label}  ({} pts)", series.len()))
                    .color(color);
                ui.checkbox(&mut state.visible[idx], text);
            }
        });
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

        ui.label(format!(
            "{} series loaded, {} visible",
            state.series.len(),
            state.visible_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Append one more gradient file chosen interactively. A failed read keeps
/// the already-loaded series untouched and only sets the status line.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open gradient history")
        .add_filter("Gradient files", &["txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    match reader::read_gradient_file(&path) {
        Ok(values) => {
            log::info!("loaded {} design points from {}", values.len(), path.display());

            let label = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let spec = SeriesSpec {
                file: path,
                label,
                color: None,
                line_style: Default::default(),
                marker: Default::default(),
                scatter: false,
            };
            state.push_series(GradientSeries::new(spec, values));
            state.status_message = None;
        }
        Err(e) => {
            log::error!("failed to load {}: {e}", path.display());
            state.status_message = Some(format!("Error: {}: {e}", path.display()));
        }
    }
}

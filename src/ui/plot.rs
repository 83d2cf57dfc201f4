use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::generate_palette;
use crate::data::model::GradientSeries;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Comparative convergence plot (central panel)
// ---------------------------------------------------------------------------

const X_LABEL: &str = "Design Point";
const Y_LABEL: &str = "Gradient of Objective";

/// Render every visible series overlaid on one chart.
pub fn convergence_plot(ui: &mut Ui, state: &AppState) {
    if state.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No gradient series configured  (File → Open…)");
        });
        return;
    }

    // Fallback hues for specs that carry no color token, keyed by series
    // index so a series keeps its hue when others are hidden.
    let fallback = generate_palette(state.series.len());

    Plot::new("convergence_plot")
        .legend(Legend::default())
        .x_axis_label(X_LABEL)
        .y_axis_label(Y_LABEL)
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (idx, series) in state.series.iter().enumerate() {
                if !state.visible[idx] {
                    continue;
                }

                let color = series_color(series, &fallback, idx);
                let name = series.spec.legend_name().unwrap_or("");

                // Scatter series get markers only; line series get the
                // configured line plus marker points when a marker token was
                // given (same name, so the legend shows one entry per series).
                if !series.spec.scatter {
                    if let Some(style) = series.spec.line_style.to_egui() {
                        let points: PlotPoints = index_points(&series.values).into();
                        plot_ui.line(
                            Line::new(points)
                                .name(name)
                                .color(color)
                                .style(style)
                                .width(1.5),
                        );
                    }
                }

                // A scatter trace must draw a marker even when no marker
                // token was configured.
                let marker = series
                    .spec
                    .marker
                    .to_egui()
                    .or_else(|| series.spec.scatter.then_some(MarkerShape::Circle));

                if let Some(shape) = marker {
                    let points: PlotPoints = index_points(&series.values).into();
                    plot_ui.points(
                        Points::new(points)
                            .name(name)
                            .color(color)
                            .shape(shape)
                            .radius(series.spec.marker.radius()),
                    );
                }
            }
        });
}

/// Configured color, or the palette fallback for this index.
pub fn series_color(series: &GradientSeries, fallback: &[Color32], idx: usize) -> Color32 {
    series
        .spec
        .color
        .or_else(|| fallback.get(idx).copied())
        .unwrap_or(Color32::LIGHT_BLUE)
}

/// Synthesize x-coordinates for a series: its own local design-point index
/// `0..len-1`, never a range shared with other series.
pub fn index_points(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeriesSpec;

    fn series(label: &str, n: usize) -> GradientSeries {
        let spec: SeriesSpec =
            serde_json::from_str(&format!(r#"{{ "file": "g.txt", "label": "{label}" }}"#))
                .unwrap();
        GradientSeries::new(spec, (0..n).map(|i| 1.0 / (i + 1) as f64).collect())
    }

    #[test]
    fn x_coordinates_are_the_local_index_range() {
        let points = index_points(&[4.0, 2.0, 1.0]);
        assert_eq!(points, [[0.0, 4.0], [1.0, 2.0], [2.0, 1.0]]);
    }

    #[test]
    fn empty_series_plots_no_points() {
        assert!(index_points(&[]).is_empty());
    }

    #[test]
    fn differing_lengths_keep_independent_ranges() {
        // Labels "A", "", "C" with lengths 5, 3, 5: three traces, legend
        // entries exactly ["A", "C"], x-ranges 0..=4, 0..=2, 0..=4.
        let all = [series("A", 5), series("", 3), series("C", 5)];

        let legend: Vec<&str> = all.iter().filter_map(|s| s.spec.legend_name()).collect();
        assert_eq!(legend, ["A", "C"]);

        let last_x: Vec<f64> = all
            .iter()
            .map(|s| index_points(&s.values).last().unwrap()[0])
            .collect();
        assert_eq!(last_x, [4.0, 2.0, 4.0]);

        for s in &all {
            assert_eq!(index_points(&s.values).len(), s.len());
        }
    }

    #[test]
    fn explicit_color_wins_over_fallback() {
        let spec: SeriesSpec =
            serde_json::from_str(r#"{ "file": "g.txt", "color": "m" }"#).unwrap();
        let with_color = GradientSeries::new(spec, vec![1.0]);
        let without_color = series("A", 1);

        let fallback = generate_palette(2);
        assert_eq!(
            series_color(&with_color, &fallback, 0),
            Color32::from_rgb(255, 0, 255)
        );
        assert_eq!(series_color(&without_color, &fallback, 1), fallback[1]);
    }
}

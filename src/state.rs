use crate::data::model::GradientSeries;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// All loaded series, in configuration order (draw and legend order).
    pub series: Vec<GradientSeries>,

    /// Per-series visibility toggle, parallel to `series`. Appending a
    /// series appends its flag, so the two never diverge.
    pub visible: Vec<bool>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Wrap the series read at startup; everything starts visible.
    pub fn new(series: Vec<GradientSeries>) -> Self {
        let visible = vec![true; series.len()];
        Self {
            series,
            visible,
            status_message: None,
        }
    }

    /// Append a series opened at runtime and make it visible.
    pub fn push_series(&mut self, series: GradientSeries) {
        self.series.push(series);
        self.visible.push(true);
    }

    /// Series currently drawn.
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn show_all(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = true);
    }

    pub fn hide_all(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeriesSpec;

    fn series(label: &str, n: usize) -> GradientSeries {
        let spec: SeriesSpec =
            serde_json::from_str(&format!(r#"{{ "file": "g.txt", "label": "{label}" }}"#))
                .unwrap();
        GradientSeries::new(spec, vec![1.0; n])
    }

    #[test]
    fn visibility_tracks_series() {
        let mut state = AppState::new(vec![series("A", 5), series("B", 3)]);
        assert_eq!(state.visible_count(), 2);

        state.visible[0] = false;
        assert_eq!(state.visible_count(), 1);

        state.push_series(series("C", 7));
        assert_eq!(state.series.len(), 3);
        assert_eq!(state.visible.len(), 3);
        assert!(state.visible[2]);

        state.hide_all();
        assert_eq!(state.visible_count(), 0);
        state.show_all();
        assert_eq!(state.visible_count(), 3);
    }
}

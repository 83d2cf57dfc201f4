use crate::config::SeriesSpec;

// ---------------------------------------------------------------------------
// GradientSeries – one configured source and its parsed values
// ---------------------------------------------------------------------------

/// One gradient history: the static spec paired with the values read from
/// its file. Pairing them in a single record at read time means the style
/// for a trace can never drift from the data it was read for.
#[derive(Debug, Clone)]
pub struct GradientSeries {
    /// Static configuration this series was read under.
    pub spec: SeriesSpec,

    /// Gradient-of-objective magnitude per design point. The index is the
    /// design-point number; the x-axis is synthesized from it, so series of
    /// differing lengths each span their own `0..len-1` range.
    pub values: Vec<f64>,
}

impl GradientSeries {
    pub fn new(spec: SeriesSpec, values: Vec<f64>) -> Self {
        GradientSeries { spec, values }
    }

    /// Number of design points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

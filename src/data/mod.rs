/// Data layer: gradient history parsing and the series model.
///
/// Architecture:
/// ```text
///   Gradient.txt (one value per line, blank-line sentinel)
///        │
///        ▼
///   ┌──────────┐
///   │  reader   │  parse file → Vec<f64>, pair with its SeriesSpec
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ GradientSeries  │  spec + values, one per configured file
///   └────────────────┘
///        │
///        ▼
///      ui::plot
/// ```

pub mod model;
pub mod reader;

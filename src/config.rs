use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui::Color32;
use egui_plot::{LineStyle, MarkerShape};
use serde::Deserialize;

use crate::color;

// ---------------------------------------------------------------------------
// Launch-time configuration
// ---------------------------------------------------------------------------

/// The complete launch-time configuration: a base directory prefix and the
/// ordered series list. Order defines draw order, z-order, and legend order.
///
/// This is an explicit value handed to the pipeline, never module state, so
/// independent invocations (and tests) share nothing.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotConfig {
    /// Prefix joined onto every series file path.
    #[serde(default)]
    pub base_dir: PathBuf,

    pub series: Vec<SeriesSpec>,
}

impl PlotConfig {
    /// Load and validate a configuration file (JSON).
    pub fn from_file(path: &Path) -> Result<PlotConfig> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file '{}'", path.display()))
    }
}

// ---------------------------------------------------------------------------
// SeriesSpec – static per-series configuration
// ---------------------------------------------------------------------------

/// One configured data source and how to draw it. Immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesSpec {
    /// Path to the gradient history file, relative to `base_dir`.
    pub file: PathBuf,

    /// Legend label. An empty label suppresses the legend entry.
    #[serde(default)]
    pub label: String,

    /// Color token (`"r"`, `"c"`, `"#40a0ff"`, …). When omitted, a palette
    /// hue keyed by series index is used instead.
    #[serde(default, deserialize_with = "color::deserialize_color")]
    pub color: Option<Color32>,

    /// Line style token (`"-"`, `"--"`, `":"`, `"-."`, `""`).
    #[serde(default)]
    pub line_style: LineKind,

    /// Marker token (`"."`, `"o"`, `"s"`, `"x"`, `"+"`, `"^"`, `"v"`,
    /// `"d"`, `"*"`, `""`).
    #[serde(default)]
    pub marker: MarkerKind,

    /// Draw markers only, no connecting line.
    #[serde(default)]
    pub scatter: bool,
}

impl SeriesSpec {
    /// The series file path with the configured base directory applied.
    pub fn resolved_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.file)
    }

    /// The legend entry for this series, if any.
    pub fn legend_name(&self) -> Option<&str> {
        (!self.label.is_empty()).then_some(self.label.as_str())
    }
}

// ---------------------------------------------------------------------------
// Style tokens
// ---------------------------------------------------------------------------

/// Line style, using the solver team's familiar matplotlib tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LineKind {
    #[default]
    #[serde(rename = "-")]
    Solid,
    #[serde(rename = "--")]
    Dashed,
    #[serde(rename = ":")]
    Dotted,
    /// Rendered as a short dash; egui has no native dash-dot pattern.
    #[serde(rename = "-.")]
    DashDot,
    #[serde(rename = "")]
    None,
}

impl LineKind {
    pub fn to_egui(self) -> Option<LineStyle> {
        match self {
            LineKind::Solid => Some(LineStyle::Solid),
            LineKind::Dashed => Some(LineStyle::Dashed { length: 10.0 }),
            LineKind::Dotted => Some(LineStyle::Dotted { spacing: 6.0 }),
            LineKind::DashDot => Some(LineStyle::Dashed { length: 5.0 }),
            LineKind::None => None,
        }
    }
}

/// Point marker, same token vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum MarkerKind {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = ".")]
    Dot,
    #[serde(rename = "o")]
    Circle,
    #[serde(rename = "s")]
    Square,
    #[serde(rename = "x")]
    Cross,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "^")]
    TriangleUp,
    #[serde(rename = "v")]
    TriangleDown,
    #[serde(rename = "d")]
    Diamond,
    #[serde(rename = "*")]
    Asterisk,
}

impl MarkerKind {
    pub fn to_egui(self) -> Option<MarkerShape> {
        match self {
            MarkerKind::None => None,
            MarkerKind::Dot | MarkerKind::Circle => Some(MarkerShape::Circle),
            MarkerKind::Square => Some(MarkerShape::Square),
            MarkerKind::Cross => Some(MarkerShape::Cross),
            MarkerKind::Plus => Some(MarkerShape::Plus),
            MarkerKind::TriangleUp => Some(MarkerShape::Up),
            MarkerKind::TriangleDown => Some(MarkerShape::Down),
            MarkerKind::Diamond => Some(MarkerShape::Diamond),
            MarkerKind::Asterisk => Some(MarkerShape::Asterisk),
        }
    }

    /// The `.` token matches matplotlib's small point marker.
    pub fn radius(self) -> f32 {
        match self {
            MarkerKind::Dot => 1.5,
            _ => 3.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

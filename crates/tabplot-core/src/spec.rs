// File: crates/tabplot-core/src/spec.rs
// Summary: Chart specification: kind, field selectors, sampling, and layout.

use crate::color::{ColorSpec, Color, STEELBLUE};
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Histogram,
    Scatter,
    Bubble,
    Line,
}

/// Declarative description of one chart over a loaded table.
///
/// `width`/`height` are the plot area after margins. `sample_limit` takes
/// the first N records; for bar and pie it is applied before domain
/// computation (slice-then-scale), for scatter, bubble and line it limits
/// only the plotted records while domains stay fitted to the full table.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_field: String,
    pub y_field: String,
    pub size_field: Option<String>,
    pub sample_limit: Option<usize>,
    pub bin_count: usize,
    pub width: f64,
    pub height: f64,
    pub color: ColorSpec,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, x_field: impl Into<String>, y_field: impl Into<String>) -> Self {
        let insets = Insets::default();
        let color = match kind {
            ChartKind::Pie => ColorSpec::Category10,
            _ => ColorSpec::Fixed(STEELBLUE),
        };
        Self {
            kind,
            x_field: x_field.into(),
            y_field: y_field.into(),
            size_field: None,
            sample_limit: None,
            bin_count: 10,
            width: (WIDTH - insets.hsum() as i32) as f64,
            height: (HEIGHT - insets.vsum() as i32) as f64,
            color,
        }
    }

    /// Histogram over a single numeric column (the y selector is unused).
    pub fn histogram(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(ChartKind::Histogram, field.clone(), field)
    }

    /// Take only the first `n` records (see type-level docs for when this
    /// affects domains).
    pub fn with_sample_limit(mut self, n: usize) -> Self {
        self.sample_limit = Some(n);
        self
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bin_count = bins;
        self
    }

    /// Third numeric column driving bubble radius.
    pub fn with_size_field(mut self, field: impl Into<String>) -> Self {
        self.size_field = Some(field.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = ColorSpec::Fixed(color);
        self
    }

    pub fn with_plot_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

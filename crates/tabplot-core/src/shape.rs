// File: crates/tabplot-core/src/shape.rs
// Summary: Encoder output: shapes with pixel geometry plus the scales that produced them.

use crate::color::Color;
use crate::scale::Scale;

/// One renderable shape in plot-area pixel coordinates (the margin
/// translation is the presentation adapter's concern). Coordinates may be
/// NaN when a sentinel propagated through a scale; such shapes collapse to
/// degenerate geometry instead of being excluded.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect { x: f64, y: f64, width: f64, height: f64, fill: Color },
    Circle { cx: f64, cy: f64, r: f64, fill: Color },
    /// Pie wedge. Angles are radians from 12 o'clock, increasing clockwise.
    Arc {
        cx: f64,
        cy: f64,
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
        fill: Color,
    },
    /// Polyline through `points` in record order (not sorted by x).
    Path { points: Vec<(f64, f64)>, stroke: Color, stroke_width: f64 },
}

/// The scales an encoding was computed with, kept for axis rendering or
/// inspection. Pie charts carry no positional scales.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScaleSet {
    pub x: Option<Scale>,
    pub y: Option<Scale>,
    pub size: Option<Scale>,
}

/// Result of one encode pass. Transient: no scene graph is retained.
#[derive(Clone, Debug, PartialEq)]
pub struct Encoding {
    pub scales: ScaleSet,
    pub shapes: Vec<Shape>,
}

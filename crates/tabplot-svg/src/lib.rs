// File: crates/tabplot-svg/src/lib.rs
// Summary: Stateless SVG presentation adapter for encodings produced by tabplot-core.

use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use tabplot_core::{Encoding, Insets, Shape};

/// Render an encoding as a standalone SVG document. The plot area is
/// translated by the left/top insets; geometry itself is taken verbatim
/// from the encoding. Shapes whose geometry carries a NaN sentinel are
/// skipped here: the collapse to nothing-drawn already happened upstream,
/// this adapter just refuses to emit invalid markup for them.
pub fn document(encoding: &Encoding, width: f64, height: f64, insets: &Insets) -> String {
    let total_w = width + insets.hsum() as f64;
    let total_h = height + insets.vsum() as f64;

    let mut out = String::with_capacity(1024 + encoding.shapes.len() * 96);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{total_w}\" height=\"{total_h}\">\n"
    ));
    out.push_str(&format!(
        "<g transform=\"translate({},{})\">\n",
        insets.left, insets.top
    ));
    for shape in &encoding.shapes {
        push_shape(&mut out, shape);
    }
    out.push_str("</g>\n</svg>\n");
    out
}

/// Write the SVG document to `path`, creating parent directories.
pub fn write(
    encoding: &Encoding,
    width: f64,
    height: f64,
    insets: &Insets,
    path: impl AsRef<Path>,
) -> Result<()> {
    let svg = document(encoding, width, height, insets);
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path.as_ref(), svg)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}

fn push_shape(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Rect { x, y, width, height, fill } => {
            if !finite(&[*x, *y, *width, *height]) {
                return;
            }
            out.push_str(&format!(
                "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"{}\"/>\n",
                fill.to_hex()
            ));
        }
        Shape::Circle { cx, cy, r, fill } => {
            if !finite(&[*cx, *cy, *r]) {
                return;
            }
            out.push_str(&format!(
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{}\"/>\n",
                fill.to_hex()
            ));
        }
        Shape::Arc { cx, cy, inner_radius, outer_radius, start_angle, end_angle, fill } => {
            if !finite(&[*cx, *cy, *inner_radius, *outer_radius, *start_angle, *end_angle]) {
                return;
            }
            out.push_str(&format!(
                "<path d=\"{}\" fill=\"{}\"/>\n",
                wedge_path(*cx, *cy, *outer_radius, *start_angle, *end_angle),
                fill.to_hex()
            ));
        }
        Shape::Path { points, stroke, stroke_width } => {
            let mut d = String::new();
            for &(x, y) in points {
                if !finite(&[x, y]) {
                    continue;
                }
                if d.is_empty() {
                    d.push_str(&format!("M{x:.2} {y:.2}"));
                } else {
                    d.push_str(&format!(" L{x:.2} {y:.2}"));
                }
            }
            if d.is_empty() {
                return;
            }
            out.push_str(&format!(
                "<path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{stroke_width}\"/>\n",
                stroke.to_hex()
            ));
        }
    }
}

fn finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Path data for a filled pie wedge from `a0` to `a1` radians, measured
/// from 12 o'clock and increasing clockwise.
fn wedge_path(cx: f64, cy: f64, r: f64, a0: f64, a1: f64) -> String {
    let (x0, y0) = (cx + r * a0.sin(), cy - r * a0.cos());
    let (x1, y1) = (cx + r * a1.sin(), cy - r * a1.cos());
    let large_arc = if (a1 - a0).abs() > PI { 1 } else { 0 };
    format!(
        "M{cx:.2} {cy:.2} L{x0:.2} {y0:.2} A{r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    )
}

// File: crates/tabplot-core/src/encode.rs
// Summary: Pure chart encoder: table + spec in, scales and shapes out. One routine per kind.

use std::f64::consts::TAU;

use crate::scale::{BandScale, LinearScale, Scale, SqrtScale};
use crate::shape::{Encoding, ScaleSet, Shape};
use crate::spec::{ChartKind, ChartSpec};
use crate::stats::{bin_counts, extent, linspace, max_value};
use crate::table::{SchemaError, Table};

/// Fixed dot radius for scatter points.
const POINT_RADIUS: f64 = 5.0;
/// Bubble radius range in pixels; area-proportional via the sqrt scale.
const BUBBLE_RADIUS: (f64, f64) = (2.0, 20.0);
/// Fraction of each band step left as padding between bars.
const BAND_PADDING: f64 = 0.1;
/// Line stroke width in pixels.
const LINE_STROKE: f64 = 1.5;

/// Compute the visual encoding for one chart. Pure: the same table and spec
/// always produce the same scales and shapes, and the table is never
/// mutated. Drawing the result is the presentation adapter's job.
pub fn encode(table: &Table, spec: &ChartSpec) -> Result<Encoding, SchemaError> {
    match spec.kind {
        ChartKind::Bar => encode_bar(table, spec),
        ChartKind::Pie => encode_pie(table, spec),
        ChartKind::Histogram => encode_histogram(table, spec),
        ChartKind::Scatter => encode_scatter(table, spec, false),
        ChartKind::Bubble => encode_scatter(table, spec, true),
        ChartKind::Line => encode_line(table, spec),
    }
}

/// Number of records actually encoded: min(sample_limit, |table|).
fn sample_len(table: &Table, spec: &ChartSpec) -> usize {
    spec.sample_limit.map_or(table.len(), |n| n.min(table.len()))
}

/// NaN-pair extent, so an all-sentinel column degrades to NaN scales
/// rather than a panic.
fn extent_or_nan(values: &[f64]) -> (f64, f64) {
    extent(values).unwrap_or((f64::NAN, f64::NAN))
}

fn encode_bar(table: &Table, spec: &ChartSpec) -> Result<Encoding, SchemaError> {
    let n = sample_len(table, spec);
    let keys = table.strings(&spec.x_field)?;
    let values = table.numeric(&spec.y_field)?;

    // Slice-then-scale: both domains come from the sampled prefix only, so
    // the axis ranges differ from a full-table fit.
    let x = BandScale::new(keys[..n].iter().copied(), (0.0, spec.width), BAND_PADDING);
    let y = LinearScale::new((0.0, max_value(&values[..n])), (spec.height, 0.0));

    let shapes = (0..n)
        .map(|i| {
            let top = y.to_px(values[i]);
            Shape::Rect {
                x: x.position(keys[i]),
                y: top,
                width: x.bandwidth(),
                height: spec.height - top,
                fill: spec.color.pick(i),
            }
        })
        .collect();

    Ok(Encoding {
        scales: ScaleSet { x: Some(Scale::Band(x)), y: Some(Scale::Linear(y)), size: None },
        shapes,
    })
}

fn encode_pie(table: &Table, spec: &ChartSpec) -> Result<Encoding, SchemaError> {
    let n = sample_len(table, spec);
    let values = table.numeric(&spec.y_field)?;
    let values = &values[..n];
    let total: f64 = values.iter().sum();

    let cx = spec.width / 2.0;
    let cy = spec.height / 2.0;
    let outer = spec.width.min(spec.height) / 2.0;

    // Wedges accumulate in record order from 12 o'clock; a sentinel value
    // poisons every following angle, collapsing those wedges.
    let mut start = 0.0;
    let mut shapes = Vec::with_capacity(n);
    for (i, &v) in values.iter().enumerate() {
        let end = start + v / total * TAU;
        shapes.push(Shape::Arc {
            cx,
            cy,
            inner_radius: 0.0,
            outer_radius: outer,
            start_angle: start,
            end_angle: end,
            fill: spec.color.pick(i),
        });
        start = end;
    }

    Ok(Encoding { scales: ScaleSet::default(), shapes })
}

fn encode_histogram(table: &Table, spec: &ChartSpec) -> Result<Encoding, SchemaError> {
    // Histograms always bin the full column; sample_limit does not apply.
    let values = table.numeric(&spec.x_field)?;
    let (lo, hi) = extent_or_nan(&values);
    let counts = bin_counts(&values, lo, hi, spec.bin_count);
    let edges = linspace(lo, hi, spec.bin_count + 1);
    let peak = counts.iter().copied().max().unwrap_or(0) as f64;

    let x = LinearScale::new((lo, hi), (0.0, spec.width));
    let y = LinearScale::new((0.0, peak), (spec.height, 0.0));

    let shapes = (0..spec.bin_count)
        .map(|i| {
            let left = x.to_px(edges[i]);
            let right = x.to_px(edges[i + 1]);
            let top = y.to_px(counts[i] as f64);
            Shape::Rect {
                x: left,
                y: top,
                width: right - left - 1.0, // 1px gap between adjacent bins
                height: spec.height - top,
                fill: spec.color.pick(i),
            }
        })
        .collect();

    Ok(Encoding {
        scales: ScaleSet { x: Some(Scale::Linear(x)), y: Some(Scale::Linear(y)), size: None },
        shapes,
    })
}

fn encode_scatter(table: &Table, spec: &ChartSpec, sized: bool) -> Result<Encoding, SchemaError> {
    let xs = table.numeric(&spec.x_field)?;
    let ys = table.numeric(&spec.y_field)?;

    // Positional domains fit the full table even when only a prefix of
    // records is drawn.
    let x = LinearScale::new(extent_or_nan(&xs), (0.0, spec.width));
    let y = LinearScale::new(extent_or_nan(&ys), (spec.height, 0.0));

    let r = if sized {
        let field = spec.size_field.as_deref().ok_or(SchemaError::MissingSizeField)?;
        let sizes = table.numeric(field)?;
        // Radius fitted to the full column as well, so drawn bubbles may
        // use only part of the radius range when a sample is taken.
        let scale = SqrtScale::new(extent_or_nan(&sizes), BUBBLE_RADIUS);
        Some((scale, sizes))
    } else {
        None
    };

    let n = sample_len(table, spec);
    let shapes = (0..n)
        .map(|i| Shape::Circle {
            cx: x.to_px(xs[i]),
            cy: y.to_px(ys[i]),
            r: match &r {
                Some((scale, sizes)) => scale.to_px(sizes[i]),
                None => POINT_RADIUS,
            },
            fill: spec.color.pick(i),
        })
        .collect();

    Ok(Encoding {
        scales: ScaleSet {
            x: Some(Scale::Linear(x)),
            y: Some(Scale::Linear(y)),
            size: r.map(|(scale, _)| Scale::Sqrt(scale)),
        },
        shapes,
    })
}

fn encode_line(table: &Table, spec: &ChartSpec) -> Result<Encoding, SchemaError> {
    let ts = table.dates(&spec.x_field)?;
    let ys = table.numeric(&spec.y_field)?;

    let x = LinearScale::new(extent_or_nan(&ts), (0.0, spec.width));
    let y = LinearScale::new((0.0, max_value(&ys)), (spec.height, 0.0));

    // One continuous path in record order; callers pre-sort the table when
    // chronological order matters.
    let n = sample_len(table, spec);
    let points = (0..n).map(|i| (x.to_px(ts[i]), y.to_px(ys[i]))).collect();
    let shapes = vec![Shape::Path {
        points,
        stroke: spec.color.pick(0),
        stroke_width: LINE_STROKE,
    }];

    Ok(Encoding {
        scales: ScaleSet { x: Some(Scale::Time(x)), y: Some(Scale::Linear(y)), size: None },
        shapes,
    })
}

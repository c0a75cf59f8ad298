// File: crates/tabplot-core/tests/encode.rs
// Purpose: Validate encoder output per chart kind: shape counts, domains,
//          sampling rules, and purity.

use std::f64::consts::TAU;

use tabplot_core::{
    encode, ChartKind, ChartSpec, Scale, SchemaError, Shape, Table, CATEGORY10,
};

fn table(headers: &[&str], rows: Vec<Vec<&str>>) -> Table {
    Table::new(
        headers.iter().map(|s| s.to_string()).collect(),
        rows.into_iter()
            .map(|r| r.into_iter().map(|s| s.to_string()).collect())
            .collect(),
    )
    .expect("valid table")
}

/// 100 rows with ascending X (as label and number), Y = 2*X, Size = X.
fn ascending_table() -> Table {
    let rows: Vec<Vec<String>> = (0..100)
        .map(|i| vec![format!("{i}"), format!("{}", 2 * i), format!("{i}")])
        .collect();
    Table::new(
        vec!["X".into(), "Y".into(), "Size".into()],
        rows,
    )
    .expect("valid table")
}

#[test]
fn encode_is_pure() {
    let t = ascending_table();
    for kind in [ChartKind::Bar, ChartKind::Scatter, ChartKind::Histogram] {
        let spec = ChartSpec::new(kind, "X", "Y").with_sample_limit(10);
        let a = encode(&t, &spec).expect("encode");
        let b = encode(&t, &spec).expect("encode");
        assert_eq!(a, b, "same table and spec must encode identically");
    }
}

#[test]
fn bar_sample_limit_bounds_domain_and_shapes() {
    let t = ascending_table();
    let spec = ChartSpec::new(ChartKind::Bar, "X", "Y").with_sample_limit(10);
    let enc = encode(&t, &spec).expect("encode");
    assert_eq!(enc.shapes.len(), 10);

    match &enc.scales.x {
        Some(Scale::Band(band)) => {
            let want: Vec<String> = (0..10).map(|i| i.to_string()).collect();
            assert_eq!(band.domain(), &want[..], "domain is the sampled prefix in row order");
        }
        other => panic!("expected band x scale, got {other:?}"),
    }
}

#[test]
fn bar_geometry_uses_sampled_max() {
    let t = table(
        &["K", "V"],
        vec![vec!["a", "5"], vec!["b", "10"], vec!["c", "1000"]],
    );
    // sample stops before the 1000 row, so the y domain max is 10
    let spec = ChartSpec::new(ChartKind::Bar, "K", "V")
        .with_sample_limit(2)
        .with_plot_size(100.0, 100.0);
    let enc = encode(&t, &spec).expect("encode");
    assert_eq!(enc.shapes.len(), 2);
    match &enc.shapes[1] {
        Shape::Rect { y, height, .. } => {
            assert!((y - 0.0).abs() < 1e-9, "max value reaches the top");
            assert!((height - 100.0).abs() < 1e-9);
        }
        other => panic!("expected rect, got {other:?}"),
    }
    match &enc.shapes[0] {
        Shape::Rect { y, height, .. } => {
            assert!((y - 50.0).abs() < 1e-9, "half the sampled max sits mid-plot");
            assert!((height - 50.0).abs() < 1e-9);
        }
        other => panic!("expected rect, got {other:?}"),
    }
}

#[test]
fn bar_sentinel_value_collapses_to_degenerate_rect() {
    let t = table(&["K", "V"], vec![vec!["a", "5"], vec!["b", "oops"]]);
    let spec = ChartSpec::new(ChartKind::Bar, "K", "V").with_plot_size(100.0, 100.0);
    let enc = encode(&t, &spec).expect("encode");
    assert_eq!(enc.shapes.len(), 2, "bad rows are kept, not excluded");
    match &enc.shapes[1] {
        Shape::Rect { y, height, .. } => {
            assert!(y.is_nan());
            assert!(height.is_nan());
        }
        other => panic!("expected rect, got {other:?}"),
    }
}

#[test]
fn pie_spans_are_proportional_and_sum_to_tau() {
    let t = table(
        &["K", "V"],
        vec![vec!["a", "1"], vec!["b", "1"], vec!["c", "2"]],
    );
    let spec = ChartSpec::new(ChartKind::Pie, "K", "V");
    let enc = encode(&t, &spec).expect("encode");
    assert_eq!(enc.shapes.len(), 3);

    let mut spans = Vec::new();
    let mut last_end = 0.0;
    for (i, shape) in enc.shapes.iter().enumerate() {
        match shape {
            Shape::Arc { start_angle, end_angle, fill, .. } => {
                assert!((start_angle - last_end).abs() < 1e-12, "wedges are contiguous");
                spans.push(end_angle - start_angle);
                last_end = *end_angle;
                assert_eq!(*fill, CATEGORY10[i % 10], "palette cycles by index");
            }
            other => panic!("expected arc, got {other:?}"),
        }
    }
    assert!((last_end - TAU).abs() < 1e-9, "wedges cover the full circle");
    assert!((spans[0] - TAU / 4.0).abs() < 1e-9);
    assert!((spans[1] - TAU / 4.0).abs() < 1e-9);
    assert!((spans[2] - TAU / 2.0).abs() < 1e-9);
}

#[test]
fn pie_sample_limit_bounds_wedge_count() {
    let t = ascending_table();
    let spec = ChartSpec::new(ChartKind::Pie, "X", "Y").with_sample_limit(5);
    let enc = encode(&t, &spec).expect("encode");
    assert_eq!(enc.shapes.len(), 5);
}

#[test]
fn histogram_emits_one_rect_per_bin_including_empty() {
    let rows: Vec<Vec<String>> = (1..=10).map(|v| vec![v.to_string()]).collect();
    let t = Table::new(vec!["V".into()], rows).expect("valid table");
    let spec = ChartSpec::histogram("V").with_bins(5).with_plot_size(100.0, 100.0);
    let enc = encode(&t, &spec).expect("encode");
    assert_eq!(enc.shapes.len(), 5);

    // 1..=10 over 5 bins puts 2 values everywhere, so every bar tops out
    for shape in &enc.shapes {
        match shape {
            Shape::Rect { y, height, .. } => {
                assert!((y - 0.0).abs() < 1e-9);
                assert!((height - 100.0).abs() < 1e-9);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }
}

#[test]
fn histogram_ignores_sample_limit() {
    let t = ascending_table();
    let limited = ChartSpec::histogram("X").with_bins(4).with_sample_limit(3);
    let full = ChartSpec::histogram("X").with_bins(4);
    let a = encode(&t, &limited).expect("encode");
    let b = encode(&t, &full).expect("encode");
    assert_eq!(a, b, "histograms always bin the full column");
}

#[test]
fn scatter_plots_prefix_against_full_table_domains() {
    let t = ascending_table();
    let spec = ChartSpec::new(ChartKind::Scatter, "X", "Y")
        .with_sample_limit(50)
        .with_plot_size(99.0, 100.0);
    let enc = encode(&t, &spec).expect("encode");
    assert_eq!(enc.shapes.len(), 50);

    // x domain is 0..99 over a 99px range, so record i sits at pixel i
    match &enc.shapes[10] {
        Shape::Circle { cx, r, .. } => {
            assert!((cx - 10.0).abs() < 1e-9, "domain fitted to the full table");
            assert_eq!(*r, 5.0, "scatter radius is fixed");
        }
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn scatter_without_limit_plots_every_record() {
    let t = ascending_table();
    let spec = ChartSpec::new(ChartKind::Scatter, "X", "Y");
    let enc = encode(&t, &spec).expect("encode");
    assert_eq!(enc.shapes.len(), 100);
}

#[test]
fn bubble_radius_is_fitted_to_full_column() {
    let t = ascending_table();
    let spec = ChartSpec::new(ChartKind::Bubble, "X", "Y")
        .with_size_field("Size")
        .with_sample_limit(1);
    let enc = encode(&t, &spec).expect("encode");
    assert_eq!(enc.shapes.len(), 1);

    // sizes span 0..99 across the whole table; the single drawn record has
    // size 0, so it gets the bottom of the radius range rather than the
    // midpoint a sample-only (degenerate) domain would give
    match &enc.shapes[0] {
        Shape::Circle { r, .. } => assert!((r - 2.0).abs() < 1e-9, "got {r}"),
        other => panic!("expected circle, got {other:?}"),
    }
    assert!(matches!(enc.scales.size, Some(Scale::Sqrt(_))));
}

#[test]
fn bubble_requires_size_field() {
    let t = ascending_table();
    let spec = ChartSpec::new(ChartKind::Bubble, "X", "Y");
    let err = encode(&t, &spec).unwrap_err();
    assert_eq!(err, SchemaError::MissingSizeField);
}

#[test]
fn line_is_a_single_path_in_record_order() {
    let t = table(
        &["Date", "Close"],
        vec![
            vec!["2024-01-01", "0"],
            vec!["2024-01-03", "4"],
            vec!["2024-01-02", "2"],
        ],
    );
    let spec = ChartSpec::new(ChartKind::Line, "Date", "Close").with_plot_size(100.0, 100.0);
    let enc = encode(&t, &spec).expect("encode");
    assert_eq!(enc.shapes.len(), 1);

    match &enc.shapes[0] {
        Shape::Path { points, .. } => {
            assert_eq!(points.len(), 3);
            // records are connected in table order, so x jumps backwards
            assert!((points[0].0 - 0.0).abs() < 1e-9);
            assert!((points[1].0 - 100.0).abs() < 1e-9);
            assert!((points[2].0 - 50.0).abs() < 1e-9);
            // y domain is [0, max], max at the top of the plot
            assert!((points[1].1 - 0.0).abs() < 1e-9);
            assert!((points[0].1 - 100.0).abs() < 1e-9);
        }
        other => panic!("expected path, got {other:?}"),
    }
    assert!(matches!(enc.scales.x, Some(Scale::Time(_))));
}

#[test]
fn unknown_column_surfaces_as_schema_error() {
    let t = ascending_table();
    let spec = ChartSpec::new(ChartKind::Scatter, "X", "Nope");
    let err = encode(&t, &spec).unwrap_err();
    assert_eq!(err, SchemaError::UnknownColumn("Nope".to_string()));
}

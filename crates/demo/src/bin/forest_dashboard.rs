// File: crates/demo/src/bin/forest_dashboard.rs
// Summary: Loads the forest-cover CSV and writes bar, pie, histogram, scatter,
//          and bubble SVGs over prefix samples of the table.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tabplot_core::color::{GREEN, ORANGE, PURPLE};
use tabplot_core::{encode, ChartKind, ChartSpec, Insets, Table};

fn main() -> Result<()> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "covtype.csv".to_string());
    let path = Path::new(&raw);

    let table = Table::load(path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows, columns: {:?}", table.len(), table.headers());

    // Smaller canvas than the stock dashboard: 500x300 with tighter margins.
    let insets = Insets::new(40, 30, 20, 40);
    let width = (500 - insets.hsum()) as f64;
    let height = (300 - insets.vsum()) as f64;

    let charts = [
        (
            "bar",
            ChartSpec::new(ChartKind::Bar, "Elevation", "Aspect").with_sample_limit(10),
        ),
        (
            "pie",
            ChartSpec::new(ChartKind::Pie, "Elevation", "Aspect").with_sample_limit(5),
        ),
        (
            "hist",
            ChartSpec::histogram("Slope").with_bins(10).with_color(ORANGE),
        ),
        (
            "scatter",
            ChartSpec::new(
                ChartKind::Scatter,
                "Elevation",
                "Horizontal_Distance_To_Hydrology",
            )
            .with_sample_limit(50)
            .with_color(GREEN),
        ),
        (
            "bubble",
            ChartSpec::new(
                ChartKind::Bubble,
                "Elevation",
                "Horizontal_Distance_To_Hydrology",
            )
            .with_size_field("Vertical_Distance_To_Hydrology")
            .with_sample_limit(50)
            .with_color(PURPLE),
        ),
    ];

    for (suffix, spec) in charts {
        let spec = spec.with_plot_size(width, height);
        let encoding = encode(&table, &spec)
            .with_context(|| format!("encoding {suffix} chart"))?;
        let out = out_name_with(path, suffix);
        tabplot_svg::write(&encoding, spec.width, spec.height, &insets, &out)?;
        println!("Wrote {} ({} shapes)", out.display(), encoding.shapes.len());
    }

    Ok(())
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.svg
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{stem}_{suffix}.svg"));
    out
}

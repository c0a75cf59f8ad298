// File: crates/demo/src/bin/stock_dashboard.rs
// Summary: Loads an OHLCV CSV and writes line, bar, scatter, and histogram SVGs
//          plus the Open/Close correlation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tabplot_core::{encode, pearson, ChartKind, ChartSpec, Insets, Table};

fn main() -> Result<()> {
    // Accept path from CLI or fall back to sample filename (supports .csv/.cvs swap)
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "yahoo_data_converted.csv".to_string());

    let (path, used_alt) = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());
    if used_alt {
        println!("  (extension swapped between .csv/.cvs)");
    }

    let table = Table::load(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows, columns: {:?}", table.len(), table.headers());

    let insets = Insets::default();
    let charts = [
        ("line", ChartSpec::new(ChartKind::Line, "Date", "Close")),
        ("bar", ChartSpec::new(ChartKind::Bar, "Date", "Volume")),
        ("scatter", ChartSpec::new(ChartKind::Scatter, "Open", "Close")),
        ("hist", ChartSpec::histogram("Close").with_bins(10)),
    ];

    for (suffix, spec) in &charts {
        let encoding = encode(&table, spec)
            .with_context(|| format!("encoding {suffix} chart"))?;
        let out = out_name_with(&path, suffix);
        tabplot_svg::write(&encoding, spec.width, spec.height, &insets, &out)?;
        println!("Wrote {} ({} shapes)", out.display(), encoding.shapes.len());
    }

    let open = table.numeric("Open")?;
    let close = table.numeric("Close")?;
    println!(
        "Pearson correlation (Open vs Close): {:.4}",
        pearson(&open, &close)
    );

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Produce output file name like target/out/chart_<stem>_<suffix>.svg
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    if short.is_empty() {
        out.push(format!("chart_{suffix}.svg"));
    } else {
        out.push(format!("chart_{short}_{suffix}.svg"));
    }
    out
}

// File: crates/tabplot-core/src/stats.rs
// Summary: Numeric helpers: extents, equal-width binning, Pearson correlation.

/// (min, max) of a column ignoring NaN sentinels; None when no finite
/// value remains.
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for &v in values {
        if v.is_nan() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
        any = true;
    }
    if any { Some((min, max)) } else { None }
}

/// Maximum ignoring NaN sentinels; NaN when nothing finite remains.
pub fn max_value(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NAN, f64::max)
}

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Count `values` into `bins` equal-width intervals over [lo, hi).
/// The last bin also includes `hi`, so the extent maximum is never dropped.
/// NaN sentinels and out-of-domain values fall into no bin, which keeps the
/// total equal to the number of in-domain, non-sentinel values.
pub fn bin_counts(values: &[f64], lo: f64, hi: f64, bins: usize) -> Vec<usize> {
    let mut counts = vec![0usize; bins];
    if bins == 0 {
        return counts;
    }
    let span = hi - lo;
    if !(span > 0.0) {
        // degenerate or undefined domain: only exact matches on `lo` count
        for &v in values {
            if v == lo {
                counts[0] += 1;
            }
        }
        return counts;
    }
    let width = span / bins as f64;
    for &v in values {
        if v.is_nan() || v < lo || v > hi {
            continue;
        }
        let mut i = ((v - lo) / width) as usize;
        if i >= bins {
            i = bins - 1; // v == hi folds into the last bin
        }
        counts[i] += 1;
    }
    counts
}

/// Product-moment correlation of two equal-length series (pairs are zipped;
/// n must be at least 1). Returns NaN for constant input, which callers
/// treat as "undefined" rather than an error. No clamping is applied, so
/// rounding can push the result fractionally outside [-1, 1].
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len()) as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for (&a, &b) in x.iter().zip(y.iter()) {
        sum_x += a;
        sum_y += b;
        sum_xy += a * b;
        sum_xx += a * a;
        sum_yy += b * b;
    }
    let cov = n * sum_xy - sum_x * sum_y;
    let var_x = n * sum_xx - sum_x * sum_x;
    let var_y = n * sum_yy - sum_y * sum_y;
    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }
    cov / (var_x * var_y).sqrt()
}

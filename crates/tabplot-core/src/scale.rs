// File: crates/tabplot-core/src/scale.rs
// Summary: Value-to-pixel scale transforms: linear, signed sqrt, band, time.

use std::collections::HashMap;

/// Continuous linear scale mapping domain [d0, d1] onto range [r0, r1].
/// Monotonic when d0 < d1; a degenerate domain (d0 == d1) maps every input
/// to the midpoint of the range. NaN in, NaN out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span == 0.0 {
            return self.r0 + (self.r1 - self.r0) * 0.5;
        }
        self.r0 + (v - self.d0) / span * (self.r1 - self.r0)
    }
}

/// Square-root scale for area-proportional radii. Uses a signed sqrt so
/// negative domain values (e.g. vertical distances below a reference)
/// still order correctly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let lo = signed_sqrt(self.d0);
        let hi = signed_sqrt(self.d1);
        let span = hi - lo;
        if span == 0.0 {
            return self.r0 + (self.r1 - self.r0) * 0.5;
        }
        self.r0 + (signed_sqrt(v) - lo) / span * (self.r1 - self.r0)
    }
}

#[inline]
fn signed_sqrt(v: f64) -> f64 {
    if v < 0.0 { -(-v).sqrt() } else { v.sqrt() }
}

/// Band scale: discrete categories mapped to evenly spaced, non-overlapping
/// pixel intervals. Duplicate keys collapse to their first occurrence, so
/// the domain preserves source order but is a set. Unknown keys position
/// to NaN (the sentinel), never panic.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    pub r0: f64,
    pub r1: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    /// `padding` applies both between bands and at the outer edges, as a
    /// fraction of the step; bands are centre-aligned within the range.
    pub fn new<I, S>(keys: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain: Vec<String> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for key in keys {
            let key = key.into();
            if !index.contains_key(&key) {
                index.insert(key.clone(), domain.len());
                domain.push(key);
            }
        }

        let (r0, r1) = range;
        let n = domain.len() as f64;
        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);
        Self { domain, index, r0, r1, step, bandwidth, start }
    }

    /// Left pixel edge of the band for `key`, or NaN for unknown keys.
    pub fn position(&self, key: &str) -> f64 {
        match self.index.get(key) {
            Some(&i) => self.start + self.step * i as f64,
            None => f64::NAN,
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Category labels in first-occurrence order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }
}

/// Tagged scale as stored in an encoding's [`crate::ScaleSet`]. Time is a
/// linear scale over epoch seconds; the tag records that the domain is
/// temporal.
#[derive(Clone, Debug, PartialEq)]
pub enum Scale {
    Linear(LinearScale),
    Sqrt(SqrtScale),
    Band(BandScale),
    Time(LinearScale),
}

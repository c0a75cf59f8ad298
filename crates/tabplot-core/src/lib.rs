// File: crates/tabplot-core/src/lib.rs
// Summary: Core library entry point; exports the table loader, scales, encoder, and statistics.

pub mod color;
pub mod encode;
pub mod scale;
pub mod shape;
pub mod spec;
pub mod stats;
pub mod table;
pub mod types;

pub use color::{Color, ColorSpec, CATEGORY10};
pub use encode::encode;
pub use scale::{BandScale, LinearScale, Scale, SqrtScale};
pub use shape::{Encoding, ScaleSet, Shape};
pub use spec::{ChartKind, ChartSpec};
pub use stats::{bin_counts, extent, pearson};
pub use table::{LoadError, Record, SchemaError, Table};
pub use types::Insets;

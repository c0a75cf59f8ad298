// File: crates/tabplot-core/src/color.rs
// Summary: RGB fill type, named fills, and the 10-color categorical palette.

/// Opaque RGB color as written into SVG fill/stroke attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form for markup attributes.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const STEELBLUE: Color = Color::rgb(0x46, 0x82, 0xb4);
pub const ORANGE: Color = Color::rgb(0xff, 0xa5, 0x00);
pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
pub const PURPLE: Color = Color::rgb(0x80, 0x00, 0x80);

/// Category10 qualitative palette; categorical fills cycle through it by index.
pub const CATEGORY10: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];

/// Fill policy for a chart: one static color, or the palette indexed by record position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSpec {
    Fixed(Color),
    Category10,
}

impl ColorSpec {
    /// Fill for the shape at index `i`.
    pub fn pick(&self, i: usize) -> Color {
        match self {
            ColorSpec::Fixed(c) => *c,
            ColorSpec::Category10 => CATEGORY10[i % CATEGORY10.len()],
        }
    }
}

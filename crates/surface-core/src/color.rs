use crate::error::{Result, SurfaceError};

/// Linear RGBA color with channels in the \[0, 1\] range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub rgba: [f64; 4],
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { rgba: [r, g, b, a] }
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_hex(hex));
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(invalid_hex(hex)),
        };
        let channel = |i: usize| -> Result<f64> {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| invalid_hex(hex))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, 1.0))
    }

    pub fn r(&self) -> f64 {
        self.rgba[0]
    }
    pub fn g(&self) -> f64 {
        self.rgba[1]
    }
    pub fn b(&self) -> f64 {
        self.rgba[2]
    }
    pub fn a(&self) -> f64 {
        self.rgba[3]
    }

    /// Component-wise product, used to combine material and light colors.
    #[inline]
    pub fn modulate(&self, other: &Color) -> Color {
        let mut out = *self;
        for (c, o) in out.rgba.iter_mut().zip(other.rgba) {
            *c *= o;
        }
        out
    }

    #[inline]
    pub fn scale(&self, s: f64) -> Color {
        let mut out = *self;
        for c in &mut out.rgba {
            *c *= s;
        }
        out
    }

    #[inline]
    pub fn add(&self, other: &Color) -> Color {
        let mut out = *self;
        for (c, o) in out.rgba.iter_mut().zip(other.rgba) {
            *c += o;
        }
        out
    }

    #[inline]
    pub fn clamped(&self) -> Color {
        let mut out = *self;
        for c in &mut out.rgba {
            *c = c.clamp(0.0, 1.0);
        }
        out
    }

    /// CSS `rgba(r,g,b,a)` with 8-bit color channels.
    pub fn to_css(&self) -> String {
        let c = self.clamped();
        format!(
            "rgba({},{},{},{})",
            to_byte(c.r()),
            to_byte(c.g()),
            to_byte(c.b()),
            c.a()
        )
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        let c = self.clamped();
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(c.r()),
            to_byte(c.g()),
            to_byte(c.b())
        )
    }
}

#[inline]
fn to_byte(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

fn invalid_hex(hex: &str) -> SurfaceError {
    SurfaceError::Configuration(format!("invalid hex color {hex:?}"))
}

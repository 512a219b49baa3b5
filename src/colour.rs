//! Colour type and RGBA parsing.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{DarkError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Light grey used when no valid colour is supplied.
    pub const DEFAULT: Self = Self::new(240, 240, 240, 255);

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Human-readable form used in progress output.
    /// e.g. "RGB(240, 240, 240) with Alpha 255"
    pub fn describe(self) -> String {
        format!(
            "RGB({}, {}, {}) with Alpha {}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Colour {
    type Err = DarkError;

    fn from_str(s: &str) -> Result<Self> {
        parse_rgba(s).ok_or_else(|| DarkError::InvalidColor {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

fn rgba_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*$")
            .expect("RGBA pattern is a valid regex")
    })
}

/// Parse an `R,G,B,A` string.
///
/// Whitespace is allowed around each component. Returns `None` when the
/// shape does not match or any component is outside 0-255.
pub fn parse_rgba(s: &str) -> Option<Colour> {
    let caps = rgba_pattern().captures(s)?;

    let mut parts = [0u8; 4];
    for (i, part) in parts.iter_mut().enumerate() {
        // At most three ASCII digits, so only values above 255 fail here
        *part = caps.get(i + 1)?.as_str().parse().ok()?;
    }

    let [r, g, b, a] = parts;
    Some(Colour::new(r, g, b, a))
}

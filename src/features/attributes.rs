//! Declarative attribute sets
//!
//! Hosts can describe an indicator with a small JSON object instead of
//! calling setters, e.g.
//!
//! ```json
//! { "fillColor": "#FFFFFF", "strokeColor": "#80FFFFFF", "radius": "4dp" }
//! ```
//!
//! Values are read through a [`StyledAttributes`] reader obtained from the
//! set. Each read reports its own error so a single malformed field never
//! spoils the others.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::indicator::Argb;

pub const FILL_COLOR: &str = "fillColor";
pub const STROKE_COLOR: &str = "strokeColor";
pub const RADIUS: &str = "radius";
pub const CIRCLE_INTERVAL: &str = "circleInterval";
pub const PAGE_TOTAL_COUNT: &str = "pageTotalCount";
pub const PADDING: &str = "padding";

/// Screen metrics used to turn dimensions into pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel
    pub density: f32,
    /// Pixels per scale-independent pixel (density times font scale)
    pub scaled_density: f32,
    /// Physical pixels per inch along the x axis
    pub xdpi: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            density: 1.0,
            scaled_density: 1.0,
            xdpi: 160.0,
        }
    }
}

impl DisplayMetrics {
    /// Metrics for a given scale factor, as reported by the windowing system
    pub fn with_scale_factor(scale: f32) -> Self {
        Self {
            density: scale,
            scaled_density: scale,
            xdpi: 160.0 * scale,
        }
    }
}

/// Unit of a [`Dimension`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Dp,
    Sp,
    Pt,
    In,
    Mm,
}

/// A length with a unit, e.g. `4dp`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f32,
    pub unit: Unit,
}

impl Dimension {
    pub const fn px(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    /// Convert to device pixels
    pub fn to_px(self, metrics: DisplayMetrics) -> f32 {
        match self.unit {
            Unit::Px => self.value,
            Unit::Dp => self.value * metrics.density,
            Unit::Sp => self.value * metrics.scaled_density,
            Unit::Pt => self.value * metrics.xdpi / 72.0,
            Unit::In => self.value * metrics.xdpi,
            Unit::Mm => self.value * metrics.xdpi / 25.4,
        }
    }
}

impl FromStr for Dimension {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (number, suffix) = s.split_at(split);

        let unit = match suffix.to_ascii_lowercase().as_str() {
            "" | "px" => Unit::Px,
            "dp" | "dip" => Unit::Dp,
            "sp" => Unit::Sp,
            "pt" => Unit::Pt,
            "in" => Unit::In,
            "mm" => Unit::Mm,
            _ => return Err(AttributeError::InvalidDimension(s.to_string())),
        };
        let value = number
            .trim()
            .parse::<f32>()
            .map_err(|_| AttributeError::InvalidDimension(s.to_string()))?;
        if !value.is_finite() {
            return Err(AttributeError::InvalidDimension(s.to_string()));
        }

        Ok(Self { value, unit })
    }
}

/// Parse `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`
///
/// Forms without alpha are opaque.
pub fn parse_color(s: &str) -> Result<Argb, AttributeError> {
    let invalid = || AttributeError::InvalidColor(s.to_string());
    let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let raw = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

    // Short forms repeat each nibble: #F80 -> #FF8800
    let expand = |nibbles: u32, digits: u32| -> u32 {
        (0..digits).rev().fold(0, |acc, i| {
            let n = (nibbles >> (i * 4)) & 0xF;
            (acc << 8) | (n << 4) | n
        })
    };

    match hex.len() {
        3 => Ok(Argb(0xFF00_0000 | expand(raw, 3))),
        4 => Ok(Argb(expand(raw, 4))),
        6 => Ok(Argb(0xFF00_0000 | raw)),
        8 => Ok(Argb(raw)),
        _ => Err(invalid()),
    }
}

/// A named set of raw attribute values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    values: BTreeMap<String, Value>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Parse a set from a JSON object
    pub fn from_json_str(content: &str) -> Result<Self, AttributeError> {
        serde_json::from_str(content).map_err(|e| AttributeError::Parse(e.to_string()))
    }

    /// Load a set from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, AttributeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AttributeError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Open a reader that resolves values against `metrics`
    ///
    /// The reader is released when dropped.
    pub fn obtain_styled(&self, metrics: DisplayMetrics) -> StyledAttributes<'_> {
        StyledAttributes {
            set: self,
            metrics,
            consumed: BTreeSet::new(),
        }
    }
}

/// Scoped, typed view over an [`AttributeSet`]
///
/// Every getter returns `Ok(None)` when the attribute is absent and an error
/// when it is present but unreadable.
pub struct StyledAttributes<'a> {
    set: &'a AttributeSet,
    metrics: DisplayMetrics,
    consumed: BTreeSet<&'a str>,
}

impl<'a> StyledAttributes<'a> {
    fn raw(&mut self, key: &str) -> Option<&'a Value> {
        let set = self.set;
        let (name, value) = set.values.get_key_value(key)?;
        self.consumed.insert(name.as_str());
        Some(value)
    }

    /// Read a color given as an ARGB integer or a hex string
    pub fn color(&mut self, key: &str) -> Result<Option<Argb>, AttributeError> {
        let Some(value) = self.raw(key) else {
            return Ok(None);
        };
        match value {
            Value::String(s) => parse_color(s).map(Some),
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(|v| Some(Argb(v)))
                .ok_or_else(|| AttributeError::InvalidColor(n.to_string())),
            other => Err(AttributeError::InvalidColor(other.to_string())),
        }
    }

    /// Read a dimension and convert it to pixels
    pub fn dimension(&mut self, key: &str) -> Result<Option<f32>, AttributeError> {
        let Some(value) = self.raw(key) else {
            return Ok(None);
        };
        let dimension = match value {
            Value::String(s) => s.parse::<Dimension>()?,
            Value::Number(n) => n
                .as_f64()
                .map(|v| Dimension::px(v as f32))
                .ok_or_else(|| AttributeError::InvalidDimension(n.to_string()))?,
            other => return Err(AttributeError::InvalidDimension(other.to_string())),
        };
        // Large numbers overflow f32 on the way in or through the unit scale
        let px = dimension.to_px(self.metrics);
        if !px.is_finite() {
            return Err(AttributeError::InvalidDimension(value.to_string()));
        }
        Ok(Some(px))
    }

    /// Read a non-negative count
    pub fn count(&mut self, key: &str) -> Result<Option<u32>, AttributeError> {
        let Some(value) = self.raw(key) else {
            return Ok(None);
        };
        value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .map(Some)
            .ok_or_else(|| AttributeError::InvalidInteger(value.to_string()))
    }
}

impl Drop for StyledAttributes<'_> {
    fn drop(&mut self) {
        let ignored: Vec<&str> = self
            .set
            .values
            .keys()
            .map(String::as_str)
            .filter(|key| !self.consumed.contains(key))
            .collect();
        if ignored.is_empty() {
            tracing::debug!("Released styled attributes");
        } else {
            tracing::debug!(?ignored, "Released styled attributes with unrecognized keys");
        }
    }
}

/// Errors that can occur while reading attributes
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeError {
    Io(String),
    Parse(String),
    InvalidColor(String),
    InvalidDimension(String),
    InvalidInteger(String),
}

impl std::fmt::Display for AttributeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeError::Io(e) => write!(f, "IO error: {}", e),
            AttributeError::Parse(e) => write!(f, "Parse error: {}", e),
            AttributeError::InvalidColor(v) => write!(f, "Invalid color: {}", v),
            AttributeError::InvalidDimension(v) => write!(f, "Invalid dimension: {}", v),
            AttributeError::InvalidInteger(v) => write!(f, "Invalid integer: {}", v),
        }
    }
}

impl std::error::Error for AttributeError {}

//! Color preference: hex color → HSV hue → mood.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};
use crate::mood::MoodCategory;

/// Color the picker shows before the user touches it.
pub const DEFAULT_PICKER_COLOR: &str = "#00f900";

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").expect("static regex")
});

/// Hue bands `[low, high)` checked in order after the red wrap-around test.
const HUE_BANDS: [(f64, f64, MoodCategory); 6] = [
    (0.05, 0.15, MoodCategory::Happy),      // orange
    (0.15, 0.25, MoodCategory::Happy),      // yellow
    (0.25, 0.45, MoodCategory::Calm),       // green
    (0.45, 0.65, MoodCategory::Sad),        // blue
    (0.65, 0.85, MoodCategory::Thoughtful), // purple
    (0.85, 0.95, MoodCategory::Energetic),  // pink / magenta
];

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(input: &str) -> MoodResult<Self> {
        let malformed = || MoodError::MalformedColor {
            input: input.to_string(),
        };
        let caps = HEX_COLOR.captures(input.trim()).ok_or_else(malformed)?;
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).map_err(|_| malformed());
        Ok(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Hue, saturation and value, each in `[0, 1]`. Hue is in `[0, 1)`.
    ///
    /// Achromatic colors (r = g = b) have hue 0.
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let v = maxc;
        if minc == maxc {
            return (0.0, 0.0, v);
        }
        let delta = maxc - minc;
        let s = delta / maxc;
        let rc = (maxc - r) / delta;
        let gc = (maxc - g) / delta;
        let bc = (maxc - b) / delta;
        let h = if r == maxc {
            bc - gc
        } else if g == maxc {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        ((h / 6.0).rem_euclid(1.0), s, v)
    }
}

impl FromStr for Rgb {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Classify a hue in `[0, 1)`.
pub fn classify_hue(h: f64) -> MoodCategory {
    if h < 0.05 || h >= 0.95 {
        return MoodCategory::Energetic;
    }
    HUE_BANDS
        .iter()
        .find(|(low, high, _)| h >= *low && h < *high)
        .map(|(_, _, mood)| *mood)
        .unwrap_or(MoodCategory::Energetic)
}

/// Classify a color by its hue.
pub fn classify_color(color: Rgb) -> MoodCategory {
    let (h, _, _) = color.to_hsv();
    let mood = classify_hue(h);
    log::debug!("color signal: {} hue={:.3} mood={}", color, h, mood);
    mood
}

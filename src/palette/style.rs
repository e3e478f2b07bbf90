//! Rendering styles
//!
//! A style fixes the saturation and lightness ranges for every letter of a
//! name. The style is picked once, from the first letter, and never changes
//! mid-name.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Selection order. Index `seed % 4` picks the style.
pub const STYLES: [Style; 4] = [Style::Pastel, Style::Neon, Style::Metallic, Style::Vivid];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Pastel,
    Neon,
    Metallic,
    Vivid,
}

impl Style {
    pub fn from_seed(seed: u32) -> Self {
        STYLES[seed as usize % STYLES.len()]
    }

    pub fn saturation(&self) -> RangeInclusive<f64> {
        match self {
            Style::Pastel => 0.3..=0.5,
            Style::Neon => 0.9..=1.0,
            Style::Metallic => 0.6..=0.8,
            Style::Vivid => 0.75..=0.85,
        }
    }

    pub fn lightness(&self) -> RangeInclusive<f64> {
        match self {
            Style::Pastel => 0.75..=0.9,
            Style::Neon => 0.5..=0.65,
            Style::Metallic => 0.3..=0.5,
            Style::Vivid => 0.55..=0.65,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Style::Pastel => "pastel",
            Style::Neon => "neon",
            Style::Metallic => "metallic",
            Style::Vivid => "vivid",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Map `seed` onto `[min, max]` using its last three decimal digits
pub fn stable_uniform(range: RangeInclusive<f64>, seed: u32) -> f64 {
    let (min, max) = range.into_inner();
    min + f64::from(seed % 1000) / 1000.0 * (max - min)
}

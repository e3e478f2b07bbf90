//! Name palette generation
//!
//! Every unique letter of a name gets one color. Colors are chained: each
//! letter's seed folds in the previous letter's seed, so the same letter can
//! color differently in different names. No randomness is involved.

pub mod color;
pub mod style;

use log::{debug, trace};
use serde::Serialize;
use std::collections::HashSet;

pub use color::{Hls, Rgb};
pub use style::{Style, stable_uniform};

const LETTER_MULTIPLIER: u32 = 37;
const CHAIN_MULTIPLIER: u32 = 11;
const SEED_MODULUS: u32 = 10_000;
const HUE_STEP_DEGREES: f64 = 1.3;

/// One letter of a name and its color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// Uppercase form of the letter. Usually one char, but e.g. `ß` becomes `SS`.
    pub letter: String,
    pub color: Rgb,
}

/// The swatches of a name together with the style they were drawn in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// `None` when the name had no letters
    pub style: Option<Style>,
    pub swatches: Vec<Swatch>,
}

impl Palette {
    pub fn generate(name: &str) -> Self {
        let normalized = normalize(name);

        let Some(first) = normalized.chars().find(|c| c.is_alphabetic()) else {
            debug!("No letters in {:?}, empty palette", name);
            return Self {
                style: None,
                swatches: Vec::new(),
            };
        };

        let style = Style::from_seed(letter_seed(first, 0));
        debug!("Name {:?} renders in {} style (first letter '{}')", normalized, style, first);

        let mut seen = HashSet::new();
        let mut swatches = Vec::new();
        let mut prev_seed = 0;

        for c in normalized.chars().filter(|c| c.is_alphabetic()) {
            if !seen.insert(c) {
                continue;
            }

            let seed = letter_seed(c, prev_seed);
            prev_seed = seed;

            let color = color_for_seed(style, seed);
            trace!("'{}' seed={} color={}", c, seed, color);

            swatches.push(Swatch {
                letter: c.to_uppercase().collect(),
                color,
            });
        }

        Self {
            style: Some(style),
            swatches,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.swatches.iter().map(|s| s.color)
    }
}

/// Swatches for `name` in first-occurrence order; empty when it has no letters
pub fn generate_palette(name: &str) -> Vec<Swatch> {
    Palette::generate(name).swatches
}

pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn letter_seed(c: char, prev_seed: u32) -> u32 {
    (u32::from(c) * LETTER_MULTIPLIER + prev_seed * CHAIN_MULTIPLIER) % SEED_MODULUS
}

fn color_for_seed(style: Style, seed: u32) -> Rgb {
    let s = stable_uniform(style.saturation(), seed);
    let l = stable_uniform(style.lightness(), seed);
    let degrees = (f64::from(seed) * HUE_STEP_DEGREES) % 360.0;

    Rgb::from_hls(Hls { h: degrees / 360.0, l, s })
}

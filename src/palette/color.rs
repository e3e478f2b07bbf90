//! RGB colors and HLS conversions
//!
//! Conversions follow the classic HLS model: hue, lightness and saturation
//! are all fractions in `[0, 1]`. Channels are quantized by truncation, so
//! `0.999 * 255` lands on 254, not 255.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// An sRGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in hue/lightness/saturation space, all components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub h: f64,
    pub l: f64,
    pub s: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert an HLS color to RGB, truncating each channel to an integer
    pub fn from_hls(hls: Hls) -> Self {
        let Hls { h, l, s } = hls;
        if s == 0.0 {
            let v = quantize(l);
            return Self::new(v, v, v);
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
        let m1 = 2.0 * l - m2;

        Self::new(
            quantize(channel(m1, m2, h + ONE_THIRD)),
            quantize(channel(m1, m2, h)),
            quantize(channel(m1, m2, h - ONE_THIRD)),
        )
    }

    pub fn to_hls(self) -> Hls {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let sumc = maxc + minc;
        let rangec = maxc - minc;
        let l = sumc / 2.0;

        if minc == maxc {
            return Hls { h: 0.0, l, s: 0.0 };
        }

        let s = if l <= 0.5 {
            rangec / sumc
        } else {
            rangec / (2.0 - maxc - minc)
        };

        let rc = (maxc - r) / rangec;
        let gc = (maxc - g) / rangec;
        let bc = (maxc - b) / rangec;

        let h = if r == maxc {
            bc - gc
        } else if g == maxc {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hls {
            h: (h / 6.0).rem_euclid(1.0),
            l,
            s,
        }
    }

    /// Hue as a fraction of a full turn, `[0, 1)`
    pub fn hue(self) -> f64 {
        self.to_hls().h
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

// `as` saturates, so out-of-range floats clamp to 0 or 255
fn quantize(v: f64) -> u8 {
    (v * 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Error returned when a hex color string is malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRgbError(String);

impl fmt::Display for ParseRgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color '{}' (expected #rrggbb)", self.0)
    }
}

impl std::error::Error for ParseRgbError {}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseRgbError(s.to_string()));
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ParseRgbError(s.to_string()));
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors_from_hls() {
        assert_eq!(Rgb::from_hls(Hls { h: 0.0, l: 0.5, s: 1.0 }), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hls(Hls { h: ONE_THIRD, l: 0.5, s: 1.0 }), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hls(Hls { h: TWO_THIRDS, l: 0.5, s: 1.0 }), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_grey_when_unsaturated() {
        assert_eq!(Rgb::from_hls(Hls { h: 0.7, l: 0.5, s: 0.0 }), Rgb::new(127, 127, 127));
        let hls = Rgb::new(90, 90, 90).to_hls();
        assert_eq!(hls.h, 0.0);
        assert_eq!(hls.s, 0.0);
    }

    #[test]
    fn test_hue_of_known_colors() {
        assert_eq!(Rgb::new(255, 0, 0).hue(), 0.0);
        assert!((Rgb::new(204, 255, 0).hue() - 0.2).abs() < 1e-9);
        assert!((Rgb::new(204, 0, 255).hue() - 0.8).abs() < 1e-9);
        // magenta-red wraps below zero before normalizing
        let h = Rgb::new(255, 0, 10).hue();
        assert!(h > 0.99 && h < 1.0, "hue was {h}");
    }

    #[test]
    fn test_roundtrip_stays_close() {
        let original = Hls { h: 0.42, l: 0.6, s: 0.8 };
        let back = Rgb::from_hls(original).to_hls();
        assert!((back.h - original.h).abs() < 0.01);
        assert!((back.l - original.l).abs() < 0.01);
        assert!((back.s - original.s).abs() < 0.01);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb::new(0xbb, 0x76, 0x1d).to_hex(), "#bb761d");
        assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#19e482".parse::<Rgb>().unwrap(), Rgb::new(0x19, 0xe4, 0x82));
        assert_eq!("19E482".parse::<Rgb>().unwrap(), Rgb::new(0x19, 0xe4, 0x82));
        assert!("#19e48".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
        assert!("#19e4821".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(250, 49, 97)).unwrap();
        assert_eq!(json, "\"#fa3161\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(250, 49, 97));
    }
}

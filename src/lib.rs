//! Deterministic name palettes and aura traits
//!
//! [`palette`] turns a name into one color per unique letter; [`aura`] reads
//! personality traits from those colors' hues. Both are pure: the same name
//! always yields the same output.

pub mod aura;
pub mod palette;

pub use aura::{Aura, Trait, classify, traits_for_palette};
pub use palette::{Palette, Rgb, Style, Swatch, generate_palette};

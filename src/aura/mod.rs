//! Aura reading
//!
//! Classifies every color of a palette and keeps each trait once, in the
//! order it first appeared.

pub mod traits;

use indexmap::IndexSet;
use log::debug;
use serde::Serialize;

use crate::palette::{Palette, Rgb};

pub use traits::{Trait, classify};

pub const FALLBACK_MESSAGE: &str = "Couldn't generate your aura. Try a different name.";

/// Deduplicated traits for `colors`, first occurrence wins
pub fn traits_for_palette<I>(colors: I) -> Vec<Trait>
where
    I: IntoIterator<Item = Rgb>,
{
    colors.into_iter().map(classify).collect::<IndexSet<_>>().into_iter().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aura {
    pub traits: Vec<Trait>,
    pub message: String,
}

impl Aura {
    pub fn read(palette: &Palette) -> Self {
        let traits = traits_for_palette(palette.colors());
        debug!("Aura traits: {:?}", traits);
        let message = sentence(&traits);
        Self { traits, message }
    }

    /// False when the palette had nothing to classify
    pub fn is_found(&self) -> bool {
        !self.traits.is_empty()
    }
}

fn sentence(traits: &[Trait]) -> String {
    if traits.is_empty() {
        return FALLBACK_MESSAGE.to_string();
    }
    let words: Vec<&str> = traits.iter().map(Trait::word).collect();
    format!("Your name radiates {} energy.", words.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOYFUL: Rgb = Rgb::new(204, 255, 0);
    const CALM: Rgb = Rgb::new(204, 0, 255);

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let traits = traits_for_palette([JOYFUL, CALM, JOYFUL]);
        assert_eq!(traits, vec![Trait::Joyful, Trait::Calm]);
    }

    #[test]
    fn test_empty_palette_has_no_traits() {
        assert!(traits_for_palette(Vec::<Rgb>::new()).is_empty());
        let aura = Aura::read(&Palette::generate("123"));
        assert!(!aura.is_found());
        assert_eq!(aura.message, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_bo_aura() {
        let aura = Aura::read(&Palette::generate("Bo"));
        assert_eq!(aura.traits, vec![Trait::Energetic, Trait::Peaceful]);
        assert_eq!(aura.message, "Your name radiates energetic, peaceful energy.");
    }

    #[test]
    fn test_longer_names() {
        let grace = Aura::read(&Palette::generate("Grace"));
        assert_eq!(
            grace.traits,
            vec![
                Trait::Calm,
                Trait::Joyful,
                Trait::Passionate,
                Trait::Peaceful,
                Trait::Creative
            ]
        );

        // six letters, four distinct traits
        let max = Aura::read(&Palette::generate("Maximilian"));
        assert_eq!(
            max.traits,
            vec![Trait::Creative, Trait::Calm, Trait::Mysterious, Trait::Joyful]
        );
    }

    #[test]
    fn test_single_trait_sentence() {
        let aura = Aura::read(&Palette::generate("aaa"));
        assert_eq!(aura.message, "Your name radiates passionate energy.");
    }
}

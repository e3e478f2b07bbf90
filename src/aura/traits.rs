//! Hue-bucketed aura traits
//!
//! Hue is circular, so red at both ends of the range reads as passionate.

use serde::{Deserialize, Serialize};

use crate::palette::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Passionate,
    Energetic,
    Joyful,
    Balanced,
    Peaceful,
    Creative,
    Calm,
    Mysterious,
}

impl Trait {
    /// Bucket a hue given as a fraction of a full turn
    pub fn from_hue(hue: f64) -> Self {
        if !(0.05..=0.95).contains(&hue) {
            Trait::Passionate
        } else if hue < 0.15 {
            Trait::Energetic
        } else if hue < 0.25 {
            Trait::Joyful
        } else if hue < 0.40 {
            Trait::Balanced
        } else if hue < 0.55 {
            Trait::Peaceful
        } else if hue < 0.70 {
            Trait::Creative
        } else if hue < 0.85 {
            Trait::Calm
        } else {
            Trait::Mysterious
        }
    }

    pub fn word(&self) -> &'static str {
        match self {
            Trait::Passionate => "passionate",
            Trait::Energetic => "energetic",
            Trait::Joyful => "joyful",
            Trait::Balanced => "balanced",
            Trait::Peaceful => "peaceful",
            Trait::Creative => "creative",
            Trait::Calm => "calm",
            Trait::Mysterious => "mysterious",
        }
    }
}

impl std::fmt::Display for Trait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word())
    }
}

pub fn classify(color: Rgb) -> Trait {
    Trait::from_hue(color.hue())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_buckets() {
        let cases = [
            (0.0, Trait::Passionate),
            (0.04, Trait::Passionate),
            (0.06, Trait::Energetic),
            (0.20, Trait::Joyful),
            (0.30, Trait::Balanced),
            (0.50, Trait::Peaceful),
            (0.60, Trait::Creative),
            (0.80, Trait::Calm),
            (0.90, Trait::Mysterious),
            (0.96, Trait::Passionate),
            (0.99, Trait::Passionate),
        ];
        for (hue, expected) in cases {
            assert_eq!(Trait::from_hue(hue), expected, "hue {hue}");
        }
    }

    #[test]
    fn test_bucket_edges() {
        assert_eq!(Trait::from_hue(0.05), Trait::Energetic);
        assert_eq!(Trait::from_hue(0.15), Trait::Joyful);
        assert_eq!(Trait::from_hue(0.25), Trait::Balanced);
        assert_eq!(Trait::from_hue(0.40), Trait::Peaceful);
        assert_eq!(Trait::from_hue(0.55), Trait::Creative);
        assert_eq!(Trait::from_hue(0.70), Trait::Calm);
        assert_eq!(Trait::from_hue(0.85), Trait::Mysterious);
        // 0.95 itself stays mysterious; only strictly above wraps
        assert_eq!(Trait::from_hue(0.95), Trait::Mysterious);
        assert_eq!(Trait::from_hue(0.9500001), Trait::Passionate);
    }

    #[test]
    fn test_classify_colors() {
        assert_eq!(classify(Rgb::new(255, 0, 0)), Trait::Passionate);
        assert_eq!(classify(Rgb::new(204, 255, 0)), Trait::Joyful);
        assert_eq!(classify(Rgb::new(0, 255, 0)), Trait::Balanced);
        assert_eq!(classify(Rgb::new(0, 0, 255)), Trait::Creative);
        assert_eq!(classify(Rgb::new(204, 0, 255)), Trait::Calm);
        assert_eq!(classify(Rgb::new(255, 0, 10)), Trait::Passionate);
    }

    #[test]
    fn test_greys_read_as_passionate() {
        // greys have hue 0
        assert_eq!(classify(Rgb::new(128, 128, 128)), Trait::Passionate);
    }

    #[test]
    fn test_trait_words() {
        assert_eq!(Trait::Mysterious.to_string(), "mysterious");
        assert_eq!(serde_json::to_string(&Trait::Calm).unwrap(), "\"calm\"");
    }
}

//! Classify arbitrary colors, bypassing name palettes

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::aura::{self, Trait};
use crate::cli::OutputFormat;
use crate::palette::Rgb;

#[derive(Serialize)]
struct Classified {
    color: Rgb,
    hue: f64,
    r#trait: Trait,
}

#[derive(Serialize)]
struct ClassifyOutput {
    colors: Vec<Classified>,
    traits: Vec<Trait>,
}

pub fn run(colors: &[Rgb], format: OutputFormat) -> Result<()> {
    let classified: Vec<Classified> = colors
        .iter()
        .map(|&color| Classified {
            color,
            hue: color.hue(),
            r#trait: aura::classify(color),
        })
        .collect();
    let output = ClassifyOutput {
        colors: classified,
        traits: aura::traits_for_palette(colors.iter().copied()),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&output)?),
        OutputFormat::Html => {
            for c in &output.colors {
                println!(
                    "<div style='background-color:{}; padding:4px;'><code>{}</code> {}</div>",
                    c.color, c.color, c.r#trait
                );
            }
        }
        OutputFormat::Text => {
            for c in &output.colors {
                let Rgb { r, g, b } = c.color;
                println!(
                    "  {} {} {} {}",
                    "  ".on_truecolor(r, g, b),
                    c.color,
                    format!("hue {:.3}", c.hue).dimmed(),
                    c.r#trait.word().cyan()
                );
            }
        }
    }

    Ok(())
}

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::palette::{Palette, Style, Swatch};
use crate::render;

#[derive(Serialize)]
struct PaletteOutput<'a> {
    name: &'a str,
    style: Option<Style>,
    swatches: &'a [Swatch],
}

pub fn run(name: &str, format: OutputFormat, config: &Config) -> Result<()> {
    let palette = Palette::generate(name);
    let output = PaletteOutput {
        name,
        style: palette.style,
        swatches: &palette.swatches,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&output)?),
        OutputFormat::Html => {
            for swatch in &palette.swatches {
                println!("{}", render::swatch_html(swatch));
            }
        }
        OutputFormat::Text => {
            match palette.style {
                Some(style) => println!("{} ({}):", "Palette".cyan(), style.name().dimmed()),
                None => println!("{}:", "Palette".cyan()),
            }
            println!("{}", render::palette_text(&palette, &config.display));
        }
    }

    Ok(())
}

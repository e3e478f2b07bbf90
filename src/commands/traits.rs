use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::aura::{Aura, Trait};
use crate::cli::OutputFormat;
use crate::palette::Palette;
use crate::render;

#[derive(Serialize)]
struct TraitsOutput<'a> {
    name: &'a str,
    traits: &'a [Trait],
    message: &'a str,
}

pub fn run(name: &str, format: OutputFormat) -> Result<()> {
    let aura = Aura::read(&Palette::generate(name));
    let output = TraitsOutput {
        name,
        traits: &aura.traits,
        message: &aura.message,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&output)?),
        OutputFormat::Html => println!("{}", render::aura_html(&aura)),
        OutputFormat::Text => {
            if aura.is_found() {
                println!("{} {}", "Traits:".dimmed(), render::trait_list_text(&aura.traits));
            }
            println!("{}", render::aura_text(&aura));
        }
    }

    Ok(())
}

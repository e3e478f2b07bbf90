//! Full name reading: palette plus aura
//!
//! Names come from the command line, or one per line from stdin when none
//! are given. A name without letters is not an error; it renders the
//! fallback message.

use colored::*;
use eyre::{Context, Result};
use log::info;
use serde::Serialize;
use std::io::{self, BufRead};

use crate::aura::{Aura, Trait};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::palette::{self, Palette, Style, Swatch};
use crate::render;

#[derive(Debug, Serialize)]
pub struct Reading {
    pub name: String,
    pub normalized: String,
    pub style: Option<Style>,
    pub palette: Vec<Swatch>,
    pub traits: Vec<Trait>,
    pub message: String,
}

impl Reading {
    pub fn new(name: &str) -> Self {
        let palette = Palette::generate(name);
        let aura = Aura::read(&palette);
        Self {
            name: name.to_string(),
            normalized: palette::normalize(name),
            style: palette.style,
            palette: palette.swatches,
            traits: aura.traits,
            message: aura.message,
        }
    }
}

pub fn run(names: Vec<String>, format: OutputFormat, config: &Config) -> Result<()> {
    let names = if names.is_empty() { read_names(io::stdin().lock())? } else { names };
    info!("Reading {} name(s)", names.len());

    match format {
        OutputFormat::Json => {
            let readings: Vec<Reading> = names.iter().map(|n| Reading::new(n)).collect();
            println!("{}", serde_json::to_string_pretty(&readings)?);
        }
        OutputFormat::Yaml => {
            let readings: Vec<Reading> = names.iter().map(|n| Reading::new(n)).collect();
            println!("{}", serde_yaml::to_string(&readings)?);
        }
        OutputFormat::Html => {
            for name in &names {
                let palette = Palette::generate(name);
                let aura = Aura::read(&palette);
                println!("{}", render::page_html(name, &palette, &aura));
            }
        }
        OutputFormat::Text => {
            for (i, name) in names.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_text(name, config);
            }
        }
    }

    Ok(())
}

fn print_text(name: &str, config: &Config) {
    let palette = Palette::generate(name);
    let aura = Aura::read(&palette);

    println!("{}", name.trim().bold());
    match palette.style {
        Some(style) => println!("{} ({}):", "Your Name Palette".cyan(), style.name().dimmed()),
        None => println!("{}:", "Your Name Palette".cyan()),
    }
    println!("{}", render::palette_text(&palette, &config.display));
    println!();
    println!("{}:", "Your Name Aura".cyan());
    println!("  {}", render::aura_text(&aura));
}

/// One name per line; surrounding whitespace is kept for the palette to trim
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.context("Failed to read name from stdin"))
        .collect()
}

//! Presentation of palettes and auras
//!
//! Text output draws each letter over a truecolor block, wrapped to the
//! terminal width. HTML output produces the same swatch cards as inline-styled
//! `<div>`s that can be dropped into a page.

use colored::*;
use terminal_size::{Width, terminal_size};

use crate::aura::{Aura, Trait};
use crate::config::DisplayConfig;
use crate::palette::{Palette, Rgb, Swatch};

const FALLBACK_TERMINAL_WIDTH: usize = 80;
const CELL_GAP: usize = 1;

/// Number of swatch cells that fit in `width` columns (at least one)
pub fn swatches_per_row(width: usize, cell: usize) -> usize {
    ((width + CELL_GAP) / (cell + CELL_GAP)).max(1)
}

fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(FALLBACK_TERMINAL_WIDTH)
}

/// Black or white, whichever reads better on `bg`
fn contrast_text(bg: Rgb) -> Rgb {
    let luma = 0.299 * f64::from(bg.r) + 0.587 * f64::from(bg.g) + 0.114 * f64::from(bg.b);
    if luma > 140.0 { Rgb::new(0, 0, 0) } else { Rgb::new(255, 255, 255) }
}

fn cell_width(display: &DisplayConfig) -> usize {
    // "#rrggbb" needs 7 cells
    if display.show_hex {
        display.swatch_width().max(7)
    } else {
        display.swatch_width()
    }
}

fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

/// Lines for a row of swatches: letter block, plain block, optional hex codes
fn swatch_row(row: &[Swatch], display: &DisplayConfig) -> Vec<String> {
    let cell = cell_width(display);
    let gap = " ".repeat(CELL_GAP);

    let mut letters = Vec::new();
    let mut blocks = Vec::new();
    let mut hexes = Vec::new();

    for swatch in row {
        let Rgb { r, g, b } = swatch.color;
        let fg = contrast_text(swatch.color);
        letters.push(
            center(&swatch.letter, cell)
                .bold()
                .truecolor(fg.r, fg.g, fg.b)
                .on_truecolor(r, g, b)
                .to_string(),
        );
        blocks.push(" ".repeat(cell).on_truecolor(r, g, b).to_string());
        hexes.push(center(&swatch.color.to_hex(), cell).dimmed().to_string());
    }

    let mut lines = vec![letters.join(&gap), blocks.join(&gap)];
    if display.show_hex {
        lines.push(hexes.join(&gap));
    }
    lines
}

pub fn palette_text(palette: &Palette, display: &DisplayConfig) -> String {
    if palette.is_empty() {
        return format!("  {}", "(no letters to color)".dimmed());
    }

    let cell = cell_width(display);
    let per_row = swatches_per_row(terminal_width().saturating_sub(2), cell);

    let mut out = Vec::new();
    for row in palette.swatches.chunks(per_row) {
        for line in swatch_row(row, display) {
            out.push(format!("  {}", line));
        }
        out.push(String::new());
    }
    out.pop();
    out.join("\n")
}

pub fn aura_text(aura: &Aura) -> String {
    if aura.is_found() {
        format!("{} {}", "✓".green(), aura.message.green())
    } else {
        format!("{} {}", "!".yellow(), aura.message.yellow())
    }
}

pub fn trait_list_text(traits: &[Trait]) -> String {
    traits.iter().map(|t| t.word().cyan().to_string()).collect::<Vec<_>>().join(", ")
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn swatch_html(swatch: &Swatch) -> String {
    let hex = swatch.color.to_hex();
    format!(
        "<div style='text-align: center;'>\
         <b>{}</b><br>\
         <div style='background-color:{}; width:60px; height:60px; border-radius:6px; margin:auto;'></div><br>\
         <code>{}</code>\
         </div>",
        escape_html(&swatch.letter),
        hex,
        hex
    )
}

pub fn aura_html(aura: &Aura) -> String {
    let class = if aura.is_found() { "success" } else { "warning" };
    format!("<p class='{}'>{}</p>", class, escape_html(&aura.message))
}

pub fn page_html(name: &str, palette: &Palette, aura: &Aura) -> String {
    let mut out = String::new();
    out.push_str(&format!("<section class='name-aura' data-name='{}'>\n", escape_html(name)));
    out.push_str("<h3>Your Name Palette:</h3>\n");
    out.push_str("<div style='display: flex; gap: 12px;'>\n");
    for swatch in &palette.swatches {
        out.push_str(&swatch_html(swatch));
        out.push('\n');
    }
    out.push_str("</div>\n<hr>\n<h3>Your Name Aura:</h3>\n");
    out.push_str(&aura_html(aura));
    out.push_str("\n</section>");
    out
}

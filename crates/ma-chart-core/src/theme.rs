// File: crates/ma-chart-core/src/theme.rs
// Summary: Light/Dark palettes and CSS-style color parsing for the line stroke.

use skia_safe as skia;

use crate::error::{ChartError, Result};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub text: skia::Color,
    pub grid: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_border: skia::Color,
}

impl Theme {
    /// Black on white with light-gray dashed gridlines.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            axis_line: skia::Color::BLACK,
            text: skia::Color::BLACK,
            grid: skia::Color::from_argb(255, 211, 211, 211), // lightgray
            tooltip_fill: skia::Color::from_argb(235, 255, 255, 255),
            tooltip_border: skia::Color::from_argb(255, 120, 120, 120),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            text: skia::Color::from_argb(255, 235, 235, 245),
            grid: skia::Color::from_argb(255, 60, 60, 66),
            tooltip_fill: skia::Color::from_argb(235, 36, 36, 42),
            tooltip_border: skia::Color::from_argb(255, 150, 150, 160),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Built-in presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Result<Theme> {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ChartError::invalid(format!("unknown theme '{name}'")))
}

/// Parse a CSS named color or `#rgb` / `#rrggbb` hex string.
pub fn parse_color(s: &str) -> Result<skia::Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ChartError::invalid(format!("bad hex color '{s}'")));
    }
    let (r, g, b) = match s.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "gray" | "grey" => (128, 128, 128),
        "lightgray" | "lightgrey" => (211, 211, 211),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "teal" => (0, 128, 128),
        "navy" => (0, 0, 128),
        "crimson" => (220, 20, 60),
        "steelblue" => (70, 130, 180),
        "goldenrod" => (218, 165, 32),
        _ => return Err(ChartError::invalid(format!("unknown color '{s}'"))),
    };
    Ok(skia::Color::from_rgb(r, g, b))
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            // #abc is shorthand for #aabbcc
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
            Some(skia::Color::from_rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

//! Named status colors
//!
//! The sixteen basic web colors. Note that `GREEN` is the half-intensity
//! web green; full-intensity green is `LIME`.

use super::{Rgb, rgb_from_u32};

pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
pub const WHITE: Rgb = rgb_from_u32(0xFF_FFFF);
pub const RED: Rgb = rgb_from_u32(0xFF_0000);
pub const LIME: Rgb = rgb_from_u32(0x00_FF00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_FF00);
pub const CYAN: Rgb = rgb_from_u32(0x00_FFFF);
pub const MAGENTA: Rgb = rgb_from_u32(0xFF_00FF);
pub const SILVER: Rgb = rgb_from_u32(0xC0_C0C0);
pub const GRAY: Rgb = rgb_from_u32(0x80_8080);
pub const MAROON: Rgb = rgb_from_u32(0x80_0000);
pub const OLIVE: Rgb = rgb_from_u32(0x80_8000);
pub const GREEN: Rgb = rgb_from_u32(0x00_8000);
pub const PURPLE: Rgb = rgb_from_u32(0x80_0080);
pub const TEAL: Rgb = rgb_from_u32(0x00_8080);
pub const NAVY: Rgb = rgb_from_u32(0x00_0080);

/// All named colors with their lowercase names
pub const NAMED_COLORS: [(&str, Rgb); 16] = [
    ("black", BLACK),
    ("white", WHITE),
    ("red", RED),
    ("lime", LIME),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("cyan", CYAN),
    ("magenta", MAGENTA),
    ("silver", SILVER),
    ("gray", GRAY),
    ("maroon", MAROON),
    ("olive", OLIVE),
    ("green", GREEN),
    ("purple", PURPLE),
    ("teal", TEAL),
    ("navy", NAVY),
];

/// Look up a named color
///
/// Names are lowercase, e.g. `"red"` or `"navy"`.
pub fn parse_color_name(name: &str) -> Option<Rgb> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}

/// Get the name of a color if it is one of the named colors
pub fn color_name(color: Rgb) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(_, candidate)| *candidate == color)
        .map(|(name, _)| *name)
}

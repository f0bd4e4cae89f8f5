use crate::color::Rgb;

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// The top byte is ignored.
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Invert every channel of a color
///
/// Used for common-anode LEDs, where a low duty cycle means full brightness.
#[inline]
pub const fn invert(color: Rgb) -> Rgb {
    Rgb {
        r: 255 - color.r,
        g: 255 - color.g,
        b: 255 - color.b,
    }
}

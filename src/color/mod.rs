mod palette;
mod utils;

use smart_leds::RGB8;

pub use palette::{
    BLACK, BLUE, CYAN, GRAY, GREEN, LIME, MAGENTA, MAROON, NAMED_COLORS, NAVY, OLIVE, PURPLE, RED,
    SILVER, TEAL, WHITE, YELLOW, color_name, parse_color_name,
};
pub use utils::{invert, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;

//! Addressable pixel strings (WS2812 and friends)

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelRenderer;
use crate::color::{BLACK, Rgb};

/// Renders through any [`SmartLedsWrite`] implementation
///
/// The whole strip is pushed on every render, since bus-based LEDs can only
/// be updated as a whole.
pub struct SmartLedsRenderer<W> {
    writer: W,
    /// Number of dark pixels sent before the status pixels
    skip_leds: usize,
}

impl<W> SmartLedsRenderer<W> {
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            skip_leds: 0,
        }
    }

    /// Create a renderer that keeps the first `skip_leds` pixels of the
    /// strip dark, e.g. a sacrificial level-shifting pixel.
    pub const fn new_with_skip(writer: W, skip_leds: usize) -> Self {
        Self { writer, skip_leds }
    }

    pub const fn skip_leds(&self) -> usize {
        self.skip_leds
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> PixelRenderer for SmartLedsRenderer<W>
where
    W: SmartLedsWrite,
    Rgb: Into<W::Color>,
{
    fn render(&mut self, colors: &[Rgb]) {
        let frame = core::iter::repeat_n(BLACK, self.skip_leds).chain(colors.iter().copied());
        if self.writer.write(frame).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsRenderer.render] failed to write {} pixels", colors.len());
        }
    }
}

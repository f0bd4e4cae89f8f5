//! Intent channel
//!
//! Lets other contexts (button handlers, network tasks, interrupts) post
//! status changes. The polling loop drains the queue and applies the intents
//! to the engine.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelRenderer;
use crate::channel::{Channel, Receiver, Sender};
use crate::color::Rgb;
use crate::engine::StatusLed;
use crate::style::BlinkStyle;

/// Default number of intents that can be queued
pub const DEFAULT_INTENT_QUEUE_SIZE: usize = 8;

/// A queued status change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIntent {
    /// Change the base color and style of a pixel
    SetColorStyle {
        pixel: usize,
        color: Rgb,
        style: BlinkStyle,
    },
    /// Override a pixel, starting when the intent is processed
    Override {
        pixel: usize,
        color: Rgb,
        style: BlinkStyle,
        duration: Duration,
        clear_on_change: bool,
    },
    /// Drop the override of a pixel
    ClearOverride { pixel: usize },
    /// Render the current state
    Show,
}

impl StatusIntent {
    /// Solid color shorthand
    pub const fn set_color(pixel: usize, color: Rgb) -> Self {
        Self::SetColorStyle {
            pixel,
            color,
            style: BlinkStyle::On,
        }
    }

    /// Override shorthand that clears when the base state changes
    pub const fn flash(pixel: usize, color: Rgb, style: BlinkStyle, duration: Duration) -> Self {
        Self::Override {
            pixel,
            color,
            style,
            duration,
            clear_on_change: true,
        }
    }

    /// Pixel the intent targets, if any
    pub const fn pixel(&self) -> Option<usize> {
        match *self {
            Self::SetColorStyle { pixel, .. }
            | Self::Override { pixel, .. }
            | Self::ClearOverride { pixel } => Some(pixel),
            Self::Show => None,
        }
    }
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, StatusIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, StatusIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<StatusIntent, SIZE>;

/// Applies queued intents to an engine
pub struct IntentProcessor<'a, const SIZE: usize = DEFAULT_INTENT_QUEUE_SIZE> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    /// Create a new intent processor
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Apply all pending intents and render once (non-blocking)
    ///
    /// Intents for pixels the engine does not have are dropped. Returns the
    /// number of applied intents; nothing is rendered if it is zero.
    pub fn process_pending<R: PixelRenderer, const N: usize>(
        &mut self,
        engine: &mut StatusLed<R, N>,
        now: Instant,
    ) -> usize {
        let applied = self.apply_pending(engine, now);
        if applied > 0 {
            engine.show();
        }
        applied
    }

    /// Apply all pending intents without rendering (non-blocking)
    ///
    /// The caller is responsible for rendering when the result is non-zero.
    pub fn apply_pending<R: PixelRenderer, const N: usize>(
        &mut self,
        engine: &mut StatusLed<R, N>,
        now: Instant,
    ) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.intents.try_receive() {
            if intent.pixel().is_some_and(|pixel| pixel >= N) {
                #[cfg(feature = "esp32-log")]
                println!("[IntentProcessor] dropping intent for unknown pixel: {:?}", intent);
                continue;
            }
            apply(engine, intent, now);
            applied += 1;
        }
        applied
    }
}

fn apply<R: PixelRenderer, const N: usize>(
    engine: &mut StatusLed<R, N>,
    intent: StatusIntent,
    now: Instant,
) {
    match intent {
        StatusIntent::SetColorStyle {
            pixel,
            color,
            style,
        } => engine.set_color_style(pixel, color, style, false),
        StatusIntent::Override {
            pixel,
            color,
            style,
            duration,
            clear_on_change,
        } => {
            engine.apply_override(pixel, color, style, duration, clear_on_change, now);
            engine.update_needs_polling();
        }
        StatusIntent::ClearOverride { pixel } => engine.clear_override(pixel, false),
        StatusIntent::Show => {
            // Rendered by the caller once the queue is drained
        }
    }
}

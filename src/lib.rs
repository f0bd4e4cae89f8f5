#![no_std]

pub mod channel;
pub mod color;
pub mod driver;
pub mod engine;
pub mod intent;
pub mod pixel;
pub mod scheduler;
pub mod style;

pub use channel::{TryReceiveError, TrySendError};
pub use driver::{RgbPwmPins, RgbPwmRenderer, SmartLedsRenderer};
pub use engine::{StatusLed, StatusLedConfig};
pub use intent::{IntentChannel, IntentProcessor, IntentReceiver, IntentSender, StatusIntent};
pub use pixel::{PixelOverride, PixelState};
pub use scheduler::{PollResult, PollScheduler};
pub use style::{BlinkStyle, BlinkTimings};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract pixel renderer trait
///
/// Implement this trait to support different hardware platforms.
/// The status LED engine is generic over this trait.
pub trait PixelRenderer {
    /// One-time hardware setup, called when the engine is created
    fn setup_hardware(&mut self, _pixel_count: usize) {}

    /// Write colors of all pixels to the hardware
    fn render(&mut self, colors: &[Rgb]);
}

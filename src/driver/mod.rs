//! Ready-made pixel renderers
//!
//! Thin adapters from [`PixelRenderer`](crate::PixelRenderer) to common
//! hardware abstractions.

mod bus;
mod pwm;

pub use bus::SmartLedsRenderer;
pub use pwm::{RgbPwmPins, RgbPwmRenderer};

//! Discrete RGB LEDs on PWM channels

use embedded_hal::pwm::SetDutyCycle;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelRenderer;
use crate::color::{BLACK, Rgb, invert};

/// PWM channels driving the three dies of one RGB LED
#[derive(Debug)]
pub struct RgbPwmPins<P> {
    pub r: P,
    pub g: P,
    pub b: P,
}

impl<P: SetDutyCycle> RgbPwmPins<P> {
    /// Write a color, scaling each 8-bit channel to the PWM range
    fn write(&mut self, color: Rgb) -> Result<(), P::Error> {
        self.r.set_duty_cycle_fraction(u16::from(color.r), 255)?;
        self.g.set_duty_cycle_fraction(u16::from(color.g), 255)?;
        self.b.set_duty_cycle_fraction(u16::from(color.b), 255)
    }
}

/// Renders `N` RGB LEDs connected to PWM outputs
///
/// Pixel `i` of the engine is driven by `pins[i]`.
pub struct RgbPwmRenderer<P, const N: usize> {
    pins: [RgbPwmPins<P>; N],
    /// Common pin tied to VCC, so a lower duty cycle means a brighter die
    common_anode: bool,
}

impl<P: SetDutyCycle, const N: usize> RgbPwmRenderer<P, N> {
    pub const fn new(pins: [RgbPwmPins<P>; N], common_anode: bool) -> Self {
        Self { pins, common_anode }
    }

    pub const fn is_common_anode(&self) -> bool {
        self.common_anode
    }

    pub fn pins(&self) -> &[RgbPwmPins<P>; N] {
        &self.pins
    }

    pub fn into_pins(self) -> [RgbPwmPins<P>; N] {
        self.pins
    }

    fn write_all<'c>(&mut self, colors: impl Iterator<Item = &'c Rgb>) {
        let common_anode = self.common_anode;
        for (_index, (pins, color)) in self.pins.iter_mut().zip(colors).enumerate() {
            let color = if common_anode { invert(*color) } else { *color };
            if pins.write(color).is_err() {
                #[cfg(feature = "esp32-log")]
                println!("[RgbPwmRenderer] failed to set duty cycle of pixel {}", _index);
            }
        }
    }
}

impl<P: SetDutyCycle, const N: usize> PixelRenderer for RgbPwmRenderer<P, N> {
    fn setup_hardware(&mut self, pixel_count: usize) {
        debug_assert_eq!(
            pixel_count, N,
            "engine pixel count does not match the number of PWM pin sets"
        );
        self.write_all([BLACK; N].iter());
    }

    fn render(&mut self, colors: &[Rgb]) {
        self.write_all(colors.iter());
    }
}

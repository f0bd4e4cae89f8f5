use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelRenderer;
use crate::color::{BLACK, Rgb};
use crate::pixel::{PixelOverride, PixelState, effective};
use crate::style::{BlinkStyle, BlinkTimings};

/// Configuration for the status LED engine
#[derive(Debug, Clone, Default)]
pub struct StatusLedConfig {
    pub timings: BlinkTimings,
}

/// Status LED engine
///
/// Owns the base and override state of `N` pixels and decides when the
/// renderer has to be called. Call [`StatusLed::tick`] from the main loop as
/// often as possible; it only renders when the output actually changes.
pub struct StatusLed<R: PixelRenderer, const N: usize> {
    // External dependencies and configuration
    renderer: R,
    timings: BlinkTimings,

    // Internal state
    pixels: [PixelState; N],
    overrides: [PixelOverride; N],
    frame_buffer: [Rgb; N],
    needs_polling: bool,
}

impl<R: PixelRenderer, const N: usize> StatusLed<R, N> {
    /// Create a new engine with default blink timings
    pub fn new(renderer: R) -> Self {
        Self::with_config(renderer, &StatusLedConfig::default())
    }

    /// Create a new engine
    ///
    /// All pixels start solid black. The renderer's hardware setup hook is
    /// called once before returning.
    pub fn with_config(mut renderer: R, config: &StatusLedConfig) -> Self {
        #[cfg(feature = "esp32-log")]
        println!("[StatusLed.new] setting up {} pixels", N);
        renderer.setup_hardware(N);

        Self {
            renderer,
            timings: config.timings,
            pixels: [PixelState::OFF; N],
            overrides: [PixelOverride::INACTIVE; N],
            frame_buffer: [BLACK; N],
            needs_polling: false,
        }
    }

    /// Number of managed pixels
    pub const fn pixel_count(&self) -> usize {
        N
    }

    /// Check if `tick` has any work to do
    pub const fn needs_polling(&self) -> bool {
        self.needs_polling
    }

    /// Blink intervals in use
    pub const fn timings(&self) -> &BlinkTimings {
        &self.timings
    }

    /// Get a reference to the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a mutable reference to the renderer
    ///
    /// Writing to the hardware directly is overwritten by the next render.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Set a solid color
    pub fn set_color(&mut self, pixel: usize, color: Rgb, show_now: bool) {
        self.set_color_style(pixel, color, BlinkStyle::On, show_now);
    }

    /// Set the base color and style of a pixel
    ///
    /// The blink clock of the pixel keeps running. An active override with
    /// `clear_on_change` set is dropped so the new state shows at once.
    /// Pass `show_now = false` to batch several changes and call
    /// [`StatusLed::show`] afterwards.
    pub fn set_color_style(&mut self, pixel: usize, color: Rgb, style: BlinkStyle, show_now: bool) {
        if !Self::contains(pixel) {
            return;
        }
        self.pixels[pixel].restyle(color, style);

        let over = &mut self.overrides[pixel];
        if over.is_active() && over.clears_on_change() {
            #[cfg(feature = "esp32-log")]
            println!("[StatusLed.set_color_style] base changed, clearing override on pixel {}", pixel);
            over.deactivate();
        }

        if show_now {
            self.show();
        }
        self.update_needs_polling();
    }

    /// Temporarily override a pixel, dropping the override when the base
    /// state changes
    pub fn set_override(
        &mut self,
        pixel: usize,
        color: Rgb,
        style: BlinkStyle,
        duration: Duration,
        now: Instant,
    ) {
        self.set_override_style(pixel, color, style, duration, true, now);
    }

    /// Temporarily override the color and style of a pixel
    ///
    /// Replaces any previous override. The override shows immediately and
    /// expires `duration` after `now`. A zero duration clears the override.
    pub fn set_override_style(
        &mut self,
        pixel: usize,
        color: Rgb,
        style: BlinkStyle,
        duration: Duration,
        clear_on_change: bool,
        now: Instant,
    ) {
        if !Self::contains(pixel) {
            return;
        }
        self.apply_override(pixel, color, style, duration, clear_on_change, now);
        self.update_needs_polling();
        self.show();
    }

    /// Drop the override of a pixel before it expires
    pub fn clear_override(&mut self, pixel: usize, show_now: bool) {
        if !Self::contains(pixel) {
            return;
        }
        self.overrides[pixel].deactivate();
        if show_now {
            self.show();
        }
        self.update_needs_polling();
    }

    /// Check if a pixel has an active override
    pub fn has_override(&self, pixel: usize) -> bool {
        Self::contains(pixel) && self.overrides[pixel].is_active()
    }

    /// Base state of a pixel, ignoring overrides
    pub fn base_state(&self, pixel: usize) -> Option<&PixelState> {
        self.pixels.get(pixel)
    }

    /// Override of a pixel, if one is active
    pub fn override_state(&self, pixel: usize) -> Option<&PixelOverride> {
        self.overrides.get(pixel).filter(|over| over.is_active())
    }

    /// Style of the state currently shown on a pixel
    pub fn effective_style(&self, pixel: usize) -> BlinkStyle {
        if !Self::contains(pixel) {
            return BlinkStyle::On;
        }
        effective(&self.pixels[pixel], &self.overrides[pixel]).style()
    }

    /// Color a pixel shows right now
    ///
    /// Uses the override if one is active, and black during the off phase of
    /// a blink.
    pub fn resolve_color(&self, pixel: usize) -> Rgb {
        if !Self::contains(pixel) {
            return BLACK;
        }
        effective(&self.pixels[pixel], &self.overrides[pixel]).resolve()
    }

    /// Process one polling step
    ///
    /// Expires overrides, then advances blink phases of the shown states.
    /// Renders at most once. Returns true if the frame was rendered.
    ///
    /// `needs_polling` is recomputed here when an override expires, so it
    /// turns false as soon as every pixel is solid again.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.needs_polling {
            return false;
        }

        let expired = self.expire_overrides(now);
        if expired {
            self.update_needs_polling();
        }

        let toggled = self.needs_polling && self.advance_blinks(now);

        if expired || toggled {
            self.show();
            return true;
        }
        false
    }

    /// Earliest instant at which `tick` could change the output
    ///
    /// Returns None if every pixel is solid and no override is active.
    pub fn next_event(&self, now: Instant) -> Option<Instant> {
        if !self.needs_polling {
            return None;
        }
        let mut next: Option<Instant> = None;
        for (base, over) in self.pixels.iter().zip(&self.overrides) {
            let expiry = over.is_active().then(|| over.expires_at());
            let toggle = effective(base, over).next_toggle(now, &self.timings);
            for candidate in [expiry, toggle].into_iter().flatten() {
                next = Some(next.map_or(candidate, |current| current.min(candidate)));
            }
        }
        next.map(|at| at.max(now))
    }

    /// Render all pixels now
    pub fn show(&mut self) {
        let states = self.pixels.iter().zip(&self.overrides);
        for (slot, (base, over)) in self.frame_buffer.iter_mut().zip(states) {
            *slot = effective(base, over).resolve();
        }
        self.renderer.render(&self.frame_buffer);
    }

    /// Replace the override without rendering
    pub(crate) fn apply_override(
        &mut self,
        pixel: usize,
        color: Rgb,
        style: BlinkStyle,
        duration: Duration,
        clear_on_change: bool,
        now: Instant,
    ) {
        let mut over = PixelOverride::new(color, style, duration, clear_on_change, now);
        // The reset clock fires right away, so a blinking override starts
        // in its visible phase.
        over.state_mut().advance(now, &self.timings);

        #[cfg(feature = "esp32-log")]
        println!(
            "[StatusLed.apply_override] pixel {} overridden with {:?} ({}) for {}ms",
            pixel,
            color,
            style.as_str(),
            duration.as_millis()
        );
        self.overrides[pixel] = over;
    }

    /// Deactivate every override that has run its duration
    ///
    /// Returns true if any override expired.
    fn expire_overrides(&mut self, now: Instant) -> bool {
        let mut expired = false;
        for (_pixel, over) in self.overrides.iter_mut().enumerate() {
            if over.is_active() && over.is_expired(now) {
                #[cfg(feature = "esp32-log")]
                println!("[StatusLed.tick] override expired on pixel {}", _pixel);
                over.deactivate();
                expired = true;
            }
        }
        expired
    }

    /// Advance the blink phase of every shown state
    ///
    /// Returns true if any phase toggled.
    fn advance_blinks(&mut self, now: Instant) -> bool {
        let timings = self.timings;
        let mut toggled = false;
        for (base, over) in self.pixels.iter_mut().zip(self.overrides.iter_mut()) {
            let state = if over.is_active() {
                over.state_mut()
            } else {
                base
            };
            toggled |= state.advance(now, &timings);
        }
        toggled
    }

    /// Recompute whether `tick` has any work to do
    pub(crate) fn update_needs_polling(&mut self) {
        self.needs_polling = self
            .pixels
            .iter()
            .zip(&self.overrides)
            .any(|(base, over)| over.is_active() || base.style().is_blinking());
    }

    /// Check a pixel index
    ///
    /// Out-of-range indices are a caller bug: they panic in debug builds and
    /// are ignored in release builds.
    pub(crate) fn contains(pixel: usize) -> bool {
        debug_assert!(pixel < N, "pixel index {} out of range (pixel count {})", pixel, N);
        pixel < N
    }
}

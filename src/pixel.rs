//! Per-pixel state
//!
//! A pixel has a base state, set by the application, and an optional
//! override that temporarily replaces it.

use embassy_time::{Duration, Instant};

use crate::color::{BLACK, Rgb};
use crate::style::{BlinkStyle, BlinkTimings};

/// Commanded appearance of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelState {
    color: Rgb,
    style: BlinkStyle,
    /// Time of the last blink toggle. `None` means the clock was reset
    /// and the next evaluation toggles immediately.
    last_toggle: Option<Instant>,
    /// Whether the blink is in its visible phase
    blink_on: bool,
}

impl PixelState {
    /// Solid black, the power-on state of every pixel
    pub const OFF: Self = Self::new(BLACK, BlinkStyle::On);

    /// Create a state with a reset blink clock
    pub const fn new(color: Rgb, style: BlinkStyle) -> Self {
        Self {
            color,
            style,
            last_toggle: None,
            blink_on: false,
        }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn style(&self) -> BlinkStyle {
        self.style
    }

    pub const fn last_toggle(&self) -> Option<Instant> {
        self.last_toggle
    }

    pub const fn is_blink_on(&self) -> bool {
        self.blink_on
    }

    /// Replace color and style, keeping the blink clock running
    pub(crate) fn restyle(&mut self, color: Rgb, style: BlinkStyle) {
        self.color = color;
        self.style = style;
    }

    /// Color to show right now
    ///
    /// Blinking styles show black during their off phase.
    pub const fn resolve(&self) -> Rgb {
        if !self.style.is_blinking() || self.blink_on {
            self.color
        } else {
            BLACK
        }
    }

    /// Advance the blink phase
    ///
    /// Returns true if the phase toggled.
    pub(crate) fn advance(&mut self, now: Instant, timings: &BlinkTimings) -> bool {
        let Some(interval) = timings.interval(self.style) else {
            return false;
        };
        let due = match self.last_toggle {
            Some(last) => now.saturating_duration_since(last) >= interval,
            None => true,
        };
        if !due {
            return false;
        }
        self.last_toggle = Some(now);
        self.blink_on = !self.blink_on;
        true
    }

    /// Instant of the next blink toggle, or None for solid styles
    ///
    /// Overdue toggles are reported as `now`.
    pub(crate) fn next_toggle(&self, now: Instant, timings: &BlinkTimings) -> Option<Instant> {
        let interval = timings.interval(self.style)?;
        let Some(last) = self.last_toggle else {
            return Some(now);
        };
        let at = last.checked_add(interval).unwrap_or(Instant::MAX);
        Some(at.max(now))
    }
}

impl Default for PixelState {
    fn default() -> Self {
        Self::OFF
    }
}

/// Time-bounded replacement for a pixel's base state
///
/// An override with zero duration is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelOverride {
    state: PixelState,
    start: Instant,
    duration: Duration,
    /// Drop the override when the base state changes
    clear_on_change: bool,
}

impl PixelOverride {
    pub const INACTIVE: Self = Self {
        state: PixelState::OFF,
        start: Instant::from_ticks(0),
        duration: Duration::from_ticks(0),
        clear_on_change: false,
    };

    /// Create an override starting at `now` with a reset blink clock
    pub const fn new(
        color: Rgb,
        style: BlinkStyle,
        duration: Duration,
        clear_on_change: bool,
        now: Instant,
    ) -> Self {
        Self {
            state: PixelState::new(color, style),
            start: now,
            duration,
            clear_on_change,
        }
    }

    pub const fn state(&self) -> &PixelState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut PixelState {
        &mut self.state
    }

    pub const fn start(&self) -> Instant {
        self.start
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub const fn clears_on_change(&self) -> bool {
        self.clear_on_change
    }

    pub const fn is_active(&self) -> bool {
        self.duration.as_ticks() > 0
    }

    /// Check whether the override has run its full duration at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Instant at which the override expires
    pub fn expires_at(&self) -> Instant {
        self.start.checked_add(self.duration).unwrap_or(Instant::MAX)
    }

    pub(crate) fn deactivate(&mut self) {
        self.duration = Duration::from_ticks(0);
    }
}

impl Default for PixelOverride {
    fn default() -> Self {
        Self::INACTIVE
    }
}

/// Pick the state that is currently shown
pub(crate) const fn effective<'a>(
    base: &'a PixelState,
    over: &'a PixelOverride,
) -> &'a PixelState {
    if over.is_active() { &over.state } else { base }
}

//! Blink styles and their timing

use embassy_time::Duration;

const STYLE_NAME_ON: &str = "on";
const STYLE_NAME_BLINK_SLOW: &str = "blink_slow";
const STYLE_NAME_BLINK_FAST: &str = "blink_fast";

const STYLE_ID_ON: u8 = 0;
const STYLE_ID_BLINK_SLOW: u8 = 1;
const STYLE_ID_BLINK_FAST: u8 = 2;

/// Default half-period of the slow blink
pub const SLOW_BLINK_INTERVAL: Duration = Duration::from_millis(1000);

/// Default half-period of the fast blink
pub const FAST_BLINK_INTERVAL: Duration = Duration::from_millis(250);

/// How a pixel shows its color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum BlinkStyle {
    /// Solid color
    #[default]
    On = STYLE_ID_ON,
    /// Toggle every [`BlinkTimings::slow`]
    BlinkSlow = STYLE_ID_BLINK_SLOW,
    /// Toggle every [`BlinkTimings::fast`]
    BlinkFast = STYLE_ID_BLINK_FAST,
}

impl BlinkStyle {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            STYLE_ID_ON => Self::On,
            STYLE_ID_BLINK_SLOW => Self::BlinkSlow,
            STYLE_ID_BLINK_FAST => Self::BlinkFast,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub fn parse_from_str(value: &str) -> Option<Self> {
        Some(match value {
            STYLE_NAME_ON => Self::On,
            STYLE_NAME_BLINK_SLOW => Self::BlinkSlow,
            STYLE_NAME_BLINK_FAST => Self::BlinkFast,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => STYLE_NAME_ON,
            Self::BlinkSlow => STYLE_NAME_BLINK_SLOW,
            Self::BlinkFast => STYLE_NAME_BLINK_FAST,
        }
    }

    /// Check if the style toggles over time
    pub const fn is_blinking(self) -> bool {
        !matches!(self, Self::On)
    }
}

/// Blink half-periods for each blinking style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTimings {
    /// Interval between toggles of [`BlinkStyle::BlinkSlow`]
    pub slow: Duration,
    /// Interval between toggles of [`BlinkStyle::BlinkFast`]
    pub fast: Duration,
}

impl BlinkTimings {
    /// Get the toggle interval for a style
    ///
    /// Returns None for solid styles.
    pub const fn interval(&self, style: BlinkStyle) -> Option<Duration> {
        match style {
            BlinkStyle::On => None,
            BlinkStyle::BlinkSlow => Some(self.slow),
            BlinkStyle::BlinkFast => Some(self.fast),
        }
    }
}

impl Default for BlinkTimings {
    fn default() -> Self {
        Self {
            slow: SLOW_BLINK_INTERVAL,
            fast: FAST_BLINK_INTERVAL,
        }
    }
}

//! Poll scheduling
//!
//! Drives the engine from a plain loop without async/await or
//! platform-specific timers. The caller is responsible for sleeping between
//! polls; the scheduler tells it for how long nothing will change.

use embassy_time::{Duration, Instant};

use crate::PixelRenderer;
use crate::engine::StatusLed;
use crate::intent::{DEFAULT_INTENT_QUEUE_SIZE, IntentProcessor, IntentReceiver};

/// Default upper bound on the sleep between polls.
///
/// Keeps queued intents from waiting behind a long idle period.
pub const DEFAULT_MAX_IDLE: Duration = Duration::from_millis(50);

/// Result of a poll.
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// Whether the frame was rendered during this poll.
    pub rendered: bool,
    /// The deadline for the next poll.
    pub next_deadline: Instant,
    /// How long to wait until the next poll (zero if a change is already due).
    pub sleep_duration: Duration,
}

/// Portable poll scheduler for a [`StatusLed`].
///
/// ```ignore
/// let mut scheduler = PollScheduler::with_intents(engine, CHANNEL.receiver());
///
/// loop {
///     let now = Instant::from_millis(millis());
///     let result = scheduler.poll(now);
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct PollScheduler<
    'a,
    R: PixelRenderer,
    const N: usize,
    const SIZE: usize = DEFAULT_INTENT_QUEUE_SIZE,
> {
    engine: StatusLed<R, N>,
    intents: Option<IntentProcessor<'a, SIZE>>,
    max_idle: Duration,
}

impl<R: PixelRenderer, const N: usize> PollScheduler<'_, R, N> {
    /// Create a scheduler without an intent channel.
    pub fn new(engine: StatusLed<R, N>) -> Self {
        Self {
            engine,
            intents: None,
            max_idle: DEFAULT_MAX_IDLE,
        }
    }
}

impl<'a, R: PixelRenderer, const N: usize, const SIZE: usize> PollScheduler<'a, R, N, SIZE> {
    /// Create a scheduler that applies intents from `receiver` on every poll.
    pub fn with_intents(engine: StatusLed<R, N>, receiver: IntentReceiver<'a, SIZE>) -> Self {
        Self {
            engine,
            intents: Some(IntentProcessor::new(receiver)),
            max_idle: DEFAULT_MAX_IDLE,
        }
    }

    /// Set the upper bound on the sleep between polls.
    #[must_use]
    pub fn with_max_idle(mut self, max_idle: Duration) -> Self {
        self.max_idle = max_idle;
        self
    }

    /// Run one polling pass and return timing info.
    ///
    /// This method:
    /// 1. Applies pending intents without rendering
    /// 2. Ticks the engine
    /// 3. Renders if intents were applied and the tick did not render
    /// 4. Computes the deadline of the next change, capped by the idle bound
    ///
    /// The frame is rendered at most once per poll.
    pub fn poll(&mut self, now: Instant) -> PollResult {
        let applied = match self.intents.as_mut() {
            Some(intents) => intents.apply_pending(&mut self.engine, now),
            None => 0,
        };
        let mut rendered = self.engine.tick(now);
        if applied > 0 && !rendered {
            self.engine.show();
            rendered = true;
        }

        let idle_deadline = now.checked_add(self.max_idle).unwrap_or(Instant::MAX);
        let next_deadline = self
            .engine
            .next_event(now)
            .map_or(idle_deadline, |event| event.min(idle_deadline));

        PollResult {
            rendered,
            next_deadline,
            sleep_duration: next_deadline.saturating_duration_since(now),
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &StatusLed<R, N> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut StatusLed<R, N> {
        &mut self.engine
    }

    /// Take the engine back.
    pub fn into_engine(self) -> StatusLed<R, N> {
        self.engine
    }
}

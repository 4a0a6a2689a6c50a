use std::fmt;

/// Countdown length, in units, when nothing else is configured.
pub const DEFAULT_DURATION_UNITS: u32 = 15;

/// Identifies one countdown started by a `TimerController`.
///
/// Ticks carrying a token from a cancelled or superseded countdown are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountdownToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining: u32 },
    Expired,
}

type TickCallback = Box<dyn FnMut(u32)>;
type ExpireCallback = Box<dyn FnMut()>;

/// Per-question countdown.
///
/// The controller never schedules anything itself. The host event loop calls
/// `tick` once per unit with the token returned by `start`; the controller
/// decrements, reports through the tick callback and, on reaching zero, through
/// the expiry callback. At most one countdown is live at a time.
pub struct TimerController {
    generation: u64,
    remaining: Option<u32>,
    on_tick: Option<TickCallback>,
    on_expire: Option<ExpireCallback>,
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation: 0,
            remaining: None,
            on_tick: None,
            on_expire: None,
        }
    }

    /// Called with the remaining units after every decrement, zero included.
    #[must_use]
    pub fn with_on_tick(mut self, on_tick: impl FnMut(u32) + 'static) -> Self {
        self.on_tick = Some(Box::new(on_tick));
        self
    }

    /// Called once when a countdown reaches zero.
    #[must_use]
    pub fn with_on_expire(mut self, on_expire: impl FnMut() + 'static) -> Self {
        self.on_expire = Some(Box::new(on_expire));
        self
    }

    /// Begin counting down from `units`, cancelling any active countdown.
    pub fn start(&mut self, units: u32) -> CountdownToken {
        self.cancel();
        self.remaining = Some(units);
        CountdownToken(self.generation)
    }

    /// Stop the active countdown. Does nothing when idle.
    pub fn cancel(&mut self) {
        if self.remaining.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Advance the countdown identified by `token` by one unit.
    ///
    /// Returns `None` without firing any callback when `token` is stale.
    pub fn tick(&mut self, token: CountdownToken) -> Option<TimerEvent> {
        if token.0 != self.generation {
            return None;
        }
        let current = self.remaining?;
        let next = current.saturating_sub(1);

        if let Some(on_tick) = self.on_tick.as_mut() {
            on_tick(next);
        }

        if next > 0 {
            self.remaining = Some(next);
            return Some(TimerEvent::Tick { remaining: next });
        }

        self.cancel();
        if let Some(on_expire) = self.on_expire.as_mut() {
            on_expire();
        }
        Some(TimerEvent::Expired)
    }
}

impl fmt::Debug for TimerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerController")
            .field("generation", &self.generation)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

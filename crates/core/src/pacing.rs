//! Pacing: turns wall-clock time and held keys into discrete move ticks.
//!
//! Holding any direction key switches the move interval from the base delay
//! to the fast delay. A tick fires once `now - last_tick >= interval`, and
//! `last_tick` is then set to `now` (not advanced by the interval), so a long
//! stall produces one tick, never a burst of catch-up ticks.

use arrayvec::ArrayVec;

use crate::types::{InputEvent, LogicalKey};

/// Set of currently held logical keys.
///
/// Press always inserts, release always removes; repeated presses are
/// idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    keys: ArrayVec<LogicalKey, 8>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: LogicalKey) {
        if !self.keys.contains(&key) {
            // Capacity equals the number of logical keys, so this cannot fail.
            let _ = self.keys.try_push(key);
        }
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.keys.retain(|k| *k != key);
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(k) => self.press(k),
            InputEvent::KeyUp(k) => self.release(k),
        }
    }

    pub fn contains(&self, key: LogicalKey) -> bool {
        self.keys.contains(&key)
    }

    /// True when any of the four direction keys is held.
    pub fn any_direction(&self) -> bool {
        self.keys.iter().any(|k| k.is_direction())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaceController {
    base_delay_ms: u32,
    fast_delay_ms: u32,
    last_tick_ms: Option<u64>,
}

impl PaceController {
    pub fn new(base_delay_ms: u32, fast_delay_ms: u32) -> Self {
        Self {
            base_delay_ms,
            fast_delay_ms,
            last_tick_ms: None,
        }
    }

    /// Effective move interval for the current held-key state.
    pub fn interval_ms(&self, held: &HeldKeys) -> u32 {
        if held.any_direction() {
            self.fast_delay_ms
        } else {
            self.base_delay_ms
        }
    }

    /// Decide whether a tick fires at `now_ms`.
    ///
    /// The first call only records the baseline. At most one tick fires per
    /// call regardless of how many intervals have elapsed.
    pub fn poll(&mut self, now_ms: u64, held: &HeldKeys) -> bool {
        let Some(last) = self.last_tick_ms else {
            self.last_tick_ms = Some(now_ms);
            return false;
        };

        let interval = self.interval_ms(held) as u64;
        if now_ms.saturating_sub(last) >= interval {
            self.last_tick_ms = Some(now_ms);
            return true;
        }
        false
    }

    pub fn last_tick_ms(&self) -> Option<u64> {
        self.last_tick_ms
    }

    /// Forget the baseline; the next poll re-establishes it.
    pub fn reset(&mut self) {
        self.last_tick_ms = None;
    }
}

//! Key-down/key-up tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{InputEvent, LogicalKey, KEY_RELEASE_TIMEOUT_MS};

/// Turns raw terminal key events into logical [`InputEvent`]s.
///
/// Direction keys are tracked as held until their release arrives, or (when
/// the terminal never reports releases) until no press or repeat has been
/// seen for the release timeout.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    held: ArrayVec<(LogicalKey, u64), 4>,
    key_release_timeout_ms: u64,
    release_events: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS as u64,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Whether the terminal reports key releases; disables the timeout.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.held.iter().any(|(k, _)| *k == key)
    }

    /// Translate one terminal key event observed at `now_ms`.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) -> Option<InputEvent> {
        let logical = map_key(key)?;
        match key.kind {
            KeyEventKind::Press => {
                if logical.is_direction() {
                    self.touch(logical, now_ms);
                }
                Some(InputEvent::KeyDown(logical))
            }
            KeyEventKind::Repeat => {
                if logical.is_direction() {
                    self.touch(logical, now_ms);
                }
                None
            }
            KeyEventKind::Release => {
                let pos = self.held.iter().position(|(k, _)| *k == logical)?;
                self.held.remove(pos);
                Some(InputEvent::KeyUp(logical))
            }
        }
    }

    fn touch(&mut self, key: LogicalKey, now_ms: u64) {
        if let Some(entry) = self.held.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = now_ms;
        } else {
            let _ = self.held.try_push((key, now_ms));
        }
    }

    /// Synthesize releases for keys that went quiet.
    pub fn update(&mut self, now_ms: u64) -> ArrayVec<InputEvent, 4> {
        let mut released = ArrayVec::new();
        if self.release_events {
            return released;
        }
        let timeout = self.key_release_timeout_ms;
        self.held.retain(|(key, last)| {
            if now_ms.saturating_sub(*last) > timeout {
                released.push(InputEvent::KeyUp(*key));
                false
            } else {
                true
            }
        });
        released
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_emits_key_down_and_tracks_direction() {
        let mut kt = KeyTracker::new();
        assert_eq!(
            kt.handle_key(key(KeyCode::Left, KeyEventKind::Press), 0),
            Some(InputEvent::KeyDown(LogicalKey::Left))
        );
        assert!(kt.is_held(LogicalKey::Left));

        assert_eq!(
            kt.handle_key(key(KeyCode::Enter, KeyEventKind::Press), 0),
            Some(InputEvent::KeyDown(LogicalKey::Confirm))
        );
        assert!(!kt.is_held(LogicalKey::Confirm));
    }

    #[test]
    fn test_release_event_emits_key_up() {
        let mut kt = KeyTracker::new().with_release_events(true);
        kt.handle_key(key(KeyCode::Up, KeyEventKind::Press), 0);
        assert_eq!(
            kt.handle_key(key(KeyCode::Up, KeyEventKind::Release), 500),
            Some(InputEvent::KeyUp(LogicalKey::Up))
        );
        assert!(!kt.is_held(LogicalKey::Up));

        // Already released.
        assert_eq!(kt.handle_key(key(KeyCode::Up, KeyEventKind::Release), 600), None);
    }

    #[test]
    fn test_auto_release_triggers_after_timeout_without_key_release_events() {
        let mut kt = KeyTracker::new().with_key_release_timeout_ms(50);
        kt.handle_key(key(KeyCode::Right, KeyEventKind::Press), 0);

        assert!(kt.update(50).is_empty());
        assert_eq!(kt.update(51).as_slice(), &[InputEvent::KeyUp(LogicalKey::Right)]);
        assert!(!kt.is_held(LogicalKey::Right));
        assert!(kt.update(100).is_empty());
    }

    #[test]
    fn test_repeat_extends_hold() {
        let mut kt = KeyTracker::new().with_key_release_timeout_ms(50);
        kt.handle_key(key(KeyCode::Down, KeyEventKind::Press), 0);
        assert_eq!(kt.handle_key(key(KeyCode::Down, KeyEventKind::Repeat), 40), None);
        assert!(kt.update(80).is_empty());
        assert_eq!(kt.update(91).len(), 1);
    }

    #[test]
    fn test_release_events_disable_timeout() {
        let mut kt = KeyTracker::new().with_release_events(true);
        kt.handle_key(key(KeyCode::Left, KeyEventKind::Press), 0);
        assert!(kt.update(10_000).is_empty());
        assert!(kt.is_held(LogicalKey::Left));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut kt = KeyTracker::new();
        assert_eq!(kt.handle_key(key(KeyCode::Char('x'), KeyEventKind::Press), 0), None);
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(KeyTracker::new().key_release_timeout_ms() > 0);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut kt = KeyTracker::new();
        kt.handle_key(key(KeyCode::Left, KeyEventKind::Press), 0);
        kt.reset();
        assert!(kt.update(10_000).is_empty());
    }
}

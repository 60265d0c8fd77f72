//! Input intent
//!
//! The platform pushes `(key, active)` events whenever it sees them; the
//! step drains the queue once at frame start. Held state persists across
//! frames until a later event for the same key changes it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub key: String,
    pub active: bool,
}

impl InputEvent {
    pub fn new(key: &str, active: bool) -> Self {
        Self {
            key: key.to_lowercase(),
            active,
        }
    }
}

/// Logical actions of one player mapped to keys
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub jump: String,
    pub grapple: String,
    /// Only read when shooting is enabled
    #[serde(default)]
    pub shoot: Option<String>,
}

impl KeyBindings {
    pub fn player_one() -> Self {
        Self {
            left: "a".into(),
            right: "d".into(),
            jump: "w".into(),
            grapple: "c".into(),
            shoot: Some("x".into()),
        }
    }

    pub fn player_two() -> Self {
        Self {
            left: "j".into(),
            right: "l".into(),
            jump: "i".into(),
            grapple: "/".into(),
            shoot: Some(".".into()),
        }
    }

    /// Keys as `InputEvent` stores them (lower-cased)
    pub fn lowercase(&mut self) {
        for key in [&mut self.left, &mut self.right, &mut self.jump, &mut self.grapple] {
            *key = key.to_lowercase();
        }
        if let Some(shoot) = self.shoot.as_mut() {
            *shoot = shoot.to_lowercase();
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        [&self.left, &self.right, &self.jump, &self.grapple]
            .iter()
            .all(|k| !k.is_empty())
    }

    /// Resolve this player's actions against the held-key table
    pub fn intent(&self, input: &InputState, shooting_enabled: bool) -> PlayerIntent {
        PlayerIntent {
            left: input.is_held(&self.left),
            right: input.is_held(&self.right),
            jump: input.is_held(&self.jump),
            grapple: input.is_held(&self.grapple),
            shoot: shooting_enabled
                && self.shoot.as_deref().map(|k| input.is_held(k)).unwrap_or(false),
        }
    }
}

/// What one player wants this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub grapple: bool,
    pub shoot: bool,
}

/// Event queue + persistent held-key table
#[derive(Clone, Debug, Default)]
pub struct InputState {
    pending: Vec<InputEvent>,
    held: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Apply every queued event in order (last write wins per key).
    /// Returns the number of events consumed.
    pub fn drain(&mut self) -> usize {
        let count = self.pending.len();
        for event in self.pending.drain(..) {
            self.held.insert(event.key, event.active);
        }
        count
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }

    /// Forget everything (pending and held)
    pub fn reset(&mut self) {
        self.pending.clear();
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_apply_only_on_drain() {
        let mut input = InputState::new();
        input.push(InputEvent::new("A", true));
        assert!(!input.is_held("a"));
        assert_eq!(input.drain(), 1);
        assert!(input.is_held("a"));
        assert_eq!(input.pending_count(), 0);
    }

    #[test]
    fn last_write_wins_within_a_frame() {
        let mut input = InputState::new();
        input.push(InputEvent::new("d", true));
        input.push(InputEvent::new("d", false));
        input.push(InputEvent::new("w", false));
        input.push(InputEvent::new("w", true));
        input.drain();
        assert!(!input.is_held("d"));
        assert!(input.is_held("w"));
    }

    #[test]
    fn held_state_persists_across_drains() {
        let mut input = InputState::new();
        input.push(InputEvent::new("c", true));
        input.drain();
        input.drain();
        assert!(input.is_held("c"));
    }

    #[test]
    fn lowercased_bindings_match_events() {
        let mut binds = KeyBindings {
            left: "A".into(),
            right: "D".into(),
            jump: "W".into(),
            grapple: "C".into(),
            shoot: Some("X".into()),
        };
        binds.lowercase();
        assert_eq!(binds.right, "d");
        assert_eq!(binds.shoot.as_deref(), Some("x"));

        let mut input = InputState::new();
        input.push(InputEvent::new("D", true));
        input.drain();
        assert!(binds.intent(&input, false).right);
    }

    #[test]
    fn shoot_is_ignored_unless_enabled() {
        let mut input = InputState::new();
        input.push(InputEvent::new("x", true));
        input.push(InputEvent::new("a", true));
        input.drain();

        let binds = KeyBindings::player_one();
        let intent = binds.intent(&input, false);
        assert!(intent.left && !intent.shoot);
        assert!(binds.intent(&input, true).shoot);
    }
}

//! Keyboard state
//!
//! Key events arrive asynchronously from the browser; the game reads one
//! snapshot per tick. Held state tracks key-down/key-up, presses are
//! edge-triggered and cleared once a tick has consumed them.

use crate::sim::TickInput;

/// Logical game inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
    Confirm,
}

impl Action {
    const ALL: [Action; 5] = [
        Action::P1Up,
        Action::P1Down,
        Action::P2Up,
        Action::P2Down,
        Action::Confirm,
    ];

    /// Map a `KeyboardEvent.code` to an action
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Action::P1Up),
            "KeyS" => Some(Action::P1Down),
            "ArrowUp" => Some(Action::P2Up),
            "ArrowDown" => Some(Action::P2Down),
            "Enter" | "NumpadEnter" => Some(Action::Confirm),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Held and freshly pressed actions
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: [bool; Action::ALL.len()],
    pressed: [bool; Action::ALL.len()],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Returns true if the key belongs to the game.
    pub fn key_down(&mut self, code: &str, repeat: bool) -> bool {
        let Some(action) = Action::from_code(code) else {
            return false;
        };
        let i = action.index();
        if !self.held[i] && !repeat {
            self.pressed[i] = true;
        }
        self.held[i] = true;
        true
    }

    /// Record a key-up. Returns true if the key belongs to the game.
    pub fn key_up(&mut self, code: &str) -> bool {
        let Some(action) = Action::from_code(code) else {
            return false;
        };
        self.held[action.index()] = false;
        true
    }

    pub fn is_down(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed[action.index()]
    }

    /// Input for the upcoming tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            p1_up: self.is_down(Action::P1Up),
            p1_down: self.is_down(Action::P1Down),
            p2_up: self.is_down(Action::P2Up),
            p2_down: self.is_down(Action::P2Down),
            confirm: self.is_pressed(Action::Confirm),
        }
    }

    /// Forget presses once a tick has seen them
    pub fn end_tick(&mut self) {
        self.pressed = Default::default();
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_code("KeyW"), Some(Action::P1Up));
        assert_eq!(Action::from_code("ArrowDown"), Some(Action::P2Down));
        assert_eq!(Action::from_code("NumpadEnter"), Some(Action::Confirm));
        assert_eq!(Action::from_code("Space"), None);
    }

    #[test]
    fn test_held_keys_persist_across_ticks() {
        let mut kb = Keyboard::new();
        assert!(kb.key_down("KeyS", false));
        kb.end_tick();
        assert!(kb.snapshot().p1_down);
        kb.key_up("KeyS");
        assert!(!kb.snapshot().p1_down);
    }

    #[test]
    fn test_confirm_is_edge_triggered() {
        let mut kb = Keyboard::new();
        kb.key_down("Enter", false);
        assert!(kb.snapshot().confirm);
        kb.end_tick();
        assert!(!kb.snapshot().confirm);

        // Auto-repeat while held does not fire again
        kb.key_down("Enter", true);
        assert!(!kb.snapshot().confirm);

        kb.key_up("Enter");
        kb.key_down("Enter", false);
        assert!(kb.snapshot().confirm);
    }

    #[test]
    fn test_tap_between_ticks_still_counts() {
        let mut kb = Keyboard::new();
        kb.key_down("Enter", false);
        kb.key_up("Enter");
        let input = kb.snapshot();
        assert!(input.confirm);
        assert!(!kb.is_down(Action::Confirm));
    }

    #[test]
    fn test_foreign_keys_ignored() {
        let mut kb = Keyboard::new();
        assert!(!kb.key_down("KeyQ", false));
        assert!(!kb.key_up("KeyQ"));
        assert_eq!(kb.snapshot(), TickInput::default());
    }

    #[test]
    fn test_release_all() {
        let mut kb = Keyboard::new();
        kb.key_down("ArrowUp", false);
        kb.key_down("Enter", false);
        kb.release_all();
        assert_eq!(kb.snapshot(), TickInput::default());
    }
}

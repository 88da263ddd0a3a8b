//! Alt / Ctrl latch
//!
//! Latches follow the modifier keys' own press and release events. They are
//! never combined with other key codes; callers read them alongside the code
//! they get back.

use super::event::KeyEvent;
use super::keys::{self, KeyCode};

/// Modifier latch snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
}

impl Modifiers {
    /// Update the latches and resolve the event to the code the caller sees
    ///
    /// Only a press of a non-modifier key yields a code; everything else
    /// yields 0.
    pub fn apply(&mut self, event: KeyEvent) -> KeyCode {
        match event {
            KeyEvent::Idle => 0,
            KeyEvent::Pressed(code) | KeyEvent::Held(code) if keys::is_modifier(code) => {
                self.latch(code, true);
                0
            }
            KeyEvent::Released(code) if keys::is_modifier(code) => {
                self.latch(code, false);
                0
            }
            KeyEvent::Pressed(code) => code,
            KeyEvent::Held(_) | KeyEvent::Released(_) => 0,
        }
    }

    fn latch(&mut self, code: KeyCode, down: bool) {
        match code {
            keys::ALT => self.alt = down,
            keys::CTRL => self.ctrl = down,
            _ => {}
        }
    }
}

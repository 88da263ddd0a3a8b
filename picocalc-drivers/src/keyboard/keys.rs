//! Key codes reported by the keyboard controller
//!
//! Printable keys report their ASCII value. Everything else uses the
//! codes below.

/// Raw key code as sent on the bus
pub type KeyCode = u8;

pub const ALT: KeyCode = 0xA1;
pub const CTRL: KeyCode = 0xA5;

pub const BACKSPACE: KeyCode = 0x08;
pub const ESC: KeyCode = 0xB1;

pub const LEFT: KeyCode = 0xB4;
pub const UP: KeyCode = 0xB5;
pub const DOWN: KeyCode = 0xB6;
pub const RIGHT: KeyCode = 0xB7;

pub const INS: KeyCode = 0xD1;
pub const HOME: KeyCode = 0xD2;
pub const DEL: KeyCode = 0xD4;
pub const END: KeyCode = 0xD5;

pub const F1: KeyCode = 0x81;
pub const F2: KeyCode = 0x82;
pub const F3: KeyCode = 0x83;
pub const F4: KeyCode = 0x84;
pub const F5: KeyCode = 0x85;
pub const F6: KeyCode = 0x86;
pub const F7: KeyCode = 0x87;
pub const F8: KeyCode = 0x88;
pub const F9: KeyCode = 0x89;
// not 0x8A
pub const F10: KeyCode = 0x90;

/// Alt or Ctrl
pub const fn is_modifier(code: KeyCode) -> bool {
    matches!(code, ALT | CTRL)
}

/// Printable ASCII, space through tilde
pub const fn is_printable(code: KeyCode) -> bool {
    matches!(code, 0x20..=0x7E)
}

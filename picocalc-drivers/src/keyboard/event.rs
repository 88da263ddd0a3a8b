//! Keyboard response decoding
//!
//! Every poll returns two bytes: an event tag and a key code.
//!
//! | tag | meaning  |
//! |-----|----------|
//! | 0   | idle     |
//! | 1   | pressed  |
//! | 2   | held     |
//! | 3   | released |

use super::keys::KeyCode;

const TAG_IDLE: u8 = 0;
const TAG_PRESSED: u8 = 1;
const TAG_HELD: u8 = 2;
const TAG_RELEASED: u8 = 3;

/// One decoded keyboard response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    /// Nothing happened since the last poll
    Idle,
    Pressed(KeyCode),
    Held(KeyCode),
    Released(KeyCode),
}

impl KeyEvent {
    /// Decode a raw response
    ///
    /// Only `[0, 0]` is idle. Any other tag 0 response, and any tag above 3,
    /// is rejected with the offending tag.
    pub fn parse(raw: [u8; 2]) -> Result<Self, u8> {
        let [tag, code] = raw;
        match tag {
            TAG_IDLE if code == 0 => Ok(KeyEvent::Idle),
            TAG_PRESSED => Ok(KeyEvent::Pressed(code)),
            TAG_HELD => Ok(KeyEvent::Held(code)),
            TAG_RELEASED => Ok(KeyEvent::Released(code)),
            other => Err(other),
        }
    }

    /// Key code carried by the event, if any
    pub fn code(&self) -> Option<KeyCode> {
        match *self {
            KeyEvent::Idle => None,
            KeyEvent::Pressed(c) | KeyEvent::Held(c) | KeyEvent::Released(c) => Some(c),
        }
    }
}

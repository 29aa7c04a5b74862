//! Held-key snapshot for the four flight directions.
//!
//! Each direction is bound to an arrow key and a WASD alias. Both physical
//! keys are tracked separately and a direction counts as held while either
//! one is down.

use crate::input::queue::InputEvent;

/// A logical flight key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];

    /// Browser key codes bound to this key: the arrow first, then the letter.
    pub fn key_codes(self) -> [u32; 2] {
        match self {
            Key::Up => [38, 87],    // ArrowUp, W
            Key::Down => [40, 83],  // ArrowDown, S
            Key::Left => [37, 65],  // ArrowLeft, A
            Key::Right => [39, 68], // ArrowRight, D
        }
    }

    /// Map a browser key code to a flight key. Arrows and WASD are bound.
    pub fn from_key_code(code: u32) -> Option<Key> {
        Self::ALL.into_iter().find(|k| k.key_codes().contains(&code))
    }

    fn slot(self) -> u8 {
        match self {
            Key::Up => 0,
            Key::Down => 1,
            Key::Left => 2,
            Key::Right => 3,
        }
    }

    /// Both physical-key bits for this direction.
    fn mask(self) -> u8 {
        0b11 << (self.slot() * 2)
    }
}

/// Bit for one bound physical key, or `None` for unbound codes.
fn code_bit(code: u32) -> Option<u8> {
    let key = Key::from_key_code(code)?;
    let alias = key.key_codes().iter().position(|c| *c == code)? as u8;
    Some(1 << (key.slot() * 2 + alias))
}

/// Which bound physical keys are down at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    held: u8,
}

impl KeyState {
    /// No keys held.
    pub const NONE: KeyState = KeyState { held: 0 };

    /// Builder: this snapshot with `key` additionally held (via its arrow).
    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    /// Hold the arrow bound to `key`.
    pub fn press(&mut self, key: Key) {
        self.press_code(key.key_codes()[0]);
    }

    /// Release every physical key bound to `key`.
    pub fn release(&mut self, key: Key) {
        self.held &= !key.mask();
    }

    pub fn press_code(&mut self, code: u32) {
        if let Some(bit) = code_bit(code) {
            self.held |= bit;
        }
    }

    pub fn release_code(&mut self, code: u32) {
        if let Some(bit) = code_bit(code) {
            self.held &= !bit;
        }
    }

    /// True while the arrow or its alias is down.
    pub fn is_held(&self, key: Key) -> bool {
        self.held & key.mask() != 0
    }

    /// Fold a raw event into the snapshot. Unbound keys are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => self.press_code(key_code),
            InputEvent::KeyUp { key_code } => self.release_code(key_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_alias() {
        assert_eq!(Key::from_key_code(38), Key::from_key_code(87));
        assert_eq!(Key::from_key_code(40), Key::from_key_code(83));
        assert_eq!(Key::from_key_code(37), Key::from_key_code(65));
        assert_eq!(Key::from_key_code(39), Key::from_key_code(68));
        assert_eq!(Key::from_key_code(39), Some(Key::Right));
        assert_eq!(Key::from_key_code(13), None);
    }

    #[test]
    fn press_and_release() {
        let mut keys = KeyState::NONE;
        keys.press(Key::Left);
        keys.press(Key::Up);
        assert!(keys.is_held(Key::Left));
        assert!(keys.is_held(Key::Up));
        assert!(!keys.is_held(Key::Right));

        keys.release(Key::Left);
        assert!(!keys.is_held(Key::Left));
        assert!(keys.is_held(Key::Up));
    }

    #[test]
    fn alias_release_keeps_other_binding_held() {
        let mut keys = KeyState::NONE;
        keys.apply(&InputEvent::KeyDown { key_code: 39 }); // ArrowRight
        keys.apply(&InputEvent::KeyDown { key_code: 68 }); // D
        keys.apply(&InputEvent::KeyUp { key_code: 68 });
        // ArrowRight is still down.
        assert!(keys.is_held(Key::Right));

        keys.apply(&InputEvent::KeyUp { key_code: 39 });
        assert!(!keys.is_held(Key::Right));
        assert_eq!(keys, KeyState::NONE);
    }

    #[test]
    fn letter_alone_holds_direction() {
        let mut keys = KeyState::NONE;
        keys.apply(&InputEvent::KeyDown { key_code: 87 }); // W
        assert!(keys.is_held(Key::Up));
        keys.apply(&InputEvent::KeyUp { key_code: 38 }); // ArrowUp was never down
        assert!(keys.is_held(Key::Up));
    }

    #[test]
    fn unbound_codes_are_ignored() {
        let mut keys = KeyState::NONE;
        keys.apply(&InputEvent::KeyDown { key_code: 32 });
        assert_eq!(keys, KeyState::NONE);
    }
}

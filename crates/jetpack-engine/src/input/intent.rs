//! Input mapper: held keys → movement intent.

use crate::input::keys::{Key, KeyState};

/// Horizontal steering requested this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnDirection {
    Left,
    Right,
    #[default]
    None,
}

/// What the player asked for this tick. Produced fresh every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementIntent {
    pub thrust_requested: bool,
    pub turn: TurnDirection,
}

impl MovementIntent {
    /// No thrust, no turn.
    pub const NEUTRAL: MovementIntent = MovementIntent {
        thrust_requested: false,
        turn: TurnDirection::None,
    };
}

/// Interpret a key snapshot.
///
/// Right wins over Left when both are held. Turning in either direction also
/// engages the jetpack, and Up engages it on its own. Down is ignored.
pub fn map_intent(keys: &KeyState) -> MovementIntent {
    let turn = if keys.is_held(Key::Right) {
        TurnDirection::Right
    } else if keys.is_held(Key::Left) {
        TurnDirection::Left
    } else {
        TurnDirection::None
    };

    MovementIntent {
        thrust_requested: keys.is_held(Key::Up) || turn != TurnDirection::None,
        turn,
    }
}

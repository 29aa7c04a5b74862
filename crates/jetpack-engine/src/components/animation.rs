//! Jetpack animation state machine.
//!
//! Idle while the jetpack is off; otherwise alternates between two thrust
//! frames, flipping once every [`THRUST_FRAME_TICKS`] ticks. Purely visual:
//! nothing here feeds back into physics.

/// Ticks each thrust frame stays on screen (≈12 Hz at 60 ticks/s).
pub const THRUST_FRAME_TICKS: u32 = 5;

/// Which jetpack sprite to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JetpackVariant {
    #[default]
    Idle,
    ThrustA,
    ThrustB,
}

impl JetpackVariant {
    pub const ALL: [JetpackVariant; 3] = [
        JetpackVariant::Idle,
        JetpackVariant::ThrustA,
        JetpackVariant::ThrustB,
    ];

    /// Dense index for per-variant lookup tables.
    pub fn index(self) -> usize {
        match self {
            JetpackVariant::Idle => 0,
            JetpackVariant::ThrustA => 1,
            JetpackVariant::ThrustB => 2,
        }
    }

    pub fn is_thrusting(self) -> bool {
        self != JetpackVariant::Idle
    }
}

/// Animation/input coupling for the jetpack. Lives for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThrustState {
    pub jetpack_on: bool,
    pub frame_toggle: bool,
    /// Always in `0..THRUST_FRAME_TICKS`.
    pub frame_counter: u32,
    pub active: JetpackVariant,
}

impl ThrustState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick with this tick's resolved thrust. Returns the variant
    /// to draw.
    ///
    /// Counter and toggle are kept (not reset) while idle.
    pub fn advance(&mut self, jetpack_on: bool) -> JetpackVariant {
        self.jetpack_on = jetpack_on;
        if !jetpack_on {
            self.active = JetpackVariant::Idle;
            return self.active;
        }

        self.frame_counter += 1;
        if self.frame_counter >= THRUST_FRAME_TICKS {
            self.frame_counter = 0;
            self.frame_toggle = !self.frame_toggle;
        }

        self.active = if self.frame_toggle {
            JetpackVariant::ThrustA
        } else {
            JetpackVariant::ThrustB
        };
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::JetpackVariant::{Idle, ThrustA, ThrustB};

    #[test]
    fn starts_idle() {
        let state = ThrustState::new();
        assert_eq!(state.active, Idle);
        assert_eq!(state.frame_counter, 0);
        assert!(!state.frame_toggle);
    }

    #[test]
    fn cadence_over_ten_ticks() {
        let mut state = ThrustState::new();
        let seq: Vec<_> = (0..10).map(|_| state.advance(true)).collect();
        // Toggle starts false: four ticks of B, flip on tick 5, four of A,
        // flip back on tick 10.
        assert_eq!(
            seq,
            vec![ThrustB, ThrustB, ThrustB, ThrustB, ThrustA, ThrustA, ThrustA, ThrustA, ThrustA, ThrustB]
        );
        assert_eq!(state.frame_counter, 0);
        assert!(!state.frame_toggle);
    }

    #[test]
    fn counter_stays_in_range() {
        let mut state = ThrustState::new();
        for _ in 0..53 {
            state.advance(true);
            assert!(state.frame_counter < THRUST_FRAME_TICKS);
        }
    }

    #[test]
    fn idle_on_the_same_tick_thrust_stops() {
        let mut state = ThrustState::new();
        for _ in 0..7 {
            state.advance(true);
        }
        assert_eq!(state.active, ThrustA);

        assert_eq!(state.advance(false), Idle);
        assert_eq!(state.active, Idle);
        assert!(!state.jetpack_on);
    }

    #[test]
    fn idle_preserves_cadence_counters() {
        let mut state = ThrustState::new();
        for _ in 0..3 {
            state.advance(true);
        }
        state.advance(false);
        assert_eq!(state.frame_counter, 3);

        // Two more thrust ticks complete the interrupted frame.
        assert_eq!(state.advance(true), ThrustB);
        assert_eq!(state.advance(true), ThrustA);
    }

    #[test]
    fn variant_indices_are_dense() {
        for (i, v) in JetpackVariant::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
        assert!(!Idle.is_thrusting());
        assert!(ThrustA.is_thrusting());
    }
}

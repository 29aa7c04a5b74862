//! Physics integrator for the jetpack pilot.
//!
//! Semi-implicit Euler with per-tick units: position advances with the
//! previous tick's velocity, then velocity reacts to this tick's intent.
//! The ground at y = 0 is the only collider.

use glam::DVec2;

use crate::api::config::PhysicsParams;
use crate::input::intent::{MovementIntent, TurnDirection};

/// Horizontal mirror for the pilot sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Unmirrored (+1). The sprite's native orientation faces left.
    #[default]
    Left,
    /// Mirrored (-1).
    Right,
}

impl Facing {
    /// Horizontal scale sign used when drawing.
    pub fn sign(self) -> f64 {
        match self {
            Facing::Left => 1.0,
            Facing::Right => -1.0,
        }
    }
}

/// The pilot's physical state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KinematicState {
    /// Offset from the ground-level origin. `y >= 0` after every step.
    pub position: DVec2,
    pub velocity: DVec2,
    /// Visual tilt in radians. Not used for collision.
    pub rotation: f64,
    pub facing: Facing,
}

#[cfg(test)]
impl KinematicState {
    fn is_grounded(&self) -> bool {
        self.position.y == 0.0
    }
}

/// Advance the state by one tick.
pub fn step(state: KinematicState, intent: MovementIntent, params: &PhysicsParams) -> KinematicState {
    let mut next = state;

    // 1. Integrate with last tick's velocity.
    next.position += state.velocity;

    // 2. Vertical acceleration.
    if intent.thrust_requested {
        next.velocity.y += params.jet_acceleration;
    } else {
        next.velocity.y -= params.gravity;
    }

    // 3. Steering, or drag back toward zero when no turn is held.
    let tilt = params.tilt;
    match intent.turn {
        TurnDirection::Right => {
            next.facing = Facing::Right;
            next.rotation -= tilt;
            next.velocity.x += tilt * 3.0;
        }
        TurnDirection::Left => {
            next.facing = Facing::Left;
            next.rotation += tilt;
            next.velocity.x -= tilt * 3.0;
        }
        TurnDirection::None => {
            // Fixed-size steps; velocity near zero may flip sign tick to tick.
            if next.velocity.x < 0.0 {
                next.rotation -= tilt / 3.0;
                next.velocity.x += tilt;
            } else if next.velocity.x > 0.0 {
                next.rotation += tilt / 3.0;
                next.velocity.x -= tilt;
            }
        }
    }

    // 4. Ground collision.
    if next.position.y < 0.0 {
        log::trace!("ground contact at x={:.3}, vy={:.5}", next.position.x, next.velocity.y);
        next.position.y = 0.0;
        next.velocity.y *= params.bounce;
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRUST: MovementIntent = MovementIntent {
        thrust_requested: true,
        turn: TurnDirection::None,
    };

    fn right() -> MovementIntent {
        MovementIntent { thrust_requested: true, turn: TurnDirection::Right }
    }

    fn left() -> MovementIntent {
        MovementIntent { thrust_requested: true, turn: TurnDirection::Left }
    }

    #[test]
    fn position_uses_previous_velocity() {
        let params = PhysicsParams::default();
        let state = KinematicState {
            position: DVec2::new(0.0, 10.0),
            velocity: DVec2::new(0.5, 1.0),
            ..Default::default()
        };
        let next = step(state, THRUST, &params);
        assert_eq!(next.position, DVec2::new(0.5, 11.0));
        assert_eq!(next.velocity.y, 1.0 + params.jet_acceleration);
    }

    #[test]
    fn gravity_pulls_when_idle() {
        let params = PhysicsParams::default();
        let state = KinematicState {
            position: DVec2::new(0.0, 100.0),
            ..Default::default()
        };
        let next = step(state, MovementIntent::NEUTRAL, &params);
        assert_eq!(next.position.y, 100.0);
        assert_eq!(next.velocity.y, -params.gravity);
    }

    #[test]
    fn right_turn_mirrors_and_tilts() {
        let params = PhysicsParams::default();
        let next = step(KinematicState::default(), right(), &params);
        assert_eq!(next.facing, Facing::Right);
        assert_eq!(next.facing.sign(), -1.0);
        assert_eq!(next.rotation, -params.tilt);
        assert_eq!(next.velocity.x, params.tilt * 3.0);
    }

    #[test]
    fn left_turn_unmirrors_and_tilts() {
        let params = PhysicsParams::default();
        let start = KinematicState { facing: Facing::Right, ..Default::default() };
        let next = step(start, left(), &params);
        assert_eq!(next.facing, Facing::Left);
        assert_eq!(next.rotation, params.tilt);
        assert_eq!(next.velocity.x, -params.tilt * 3.0);
    }

    #[test]
    fn drag_moves_velocity_toward_zero() {
        let params = PhysicsParams::default();
        let state = KinematicState {
            position: DVec2::new(0.0, 50.0),
            velocity: DVec2::new(0.01, 0.0),
            ..Default::default()
        };
        let next = step(state, MovementIntent::NEUTRAL, &params);
        assert_eq!(next.velocity.x, 0.01 - params.tilt);
        assert_eq!(next.rotation, params.tilt / 3.0);

        let state = KinematicState {
            position: DVec2::new(0.0, 50.0),
            velocity: DVec2::new(-0.01, 0.0),
            ..Default::default()
        };
        let next = step(state, MovementIntent::NEUTRAL, &params);
        assert_eq!(next.velocity.x, -0.01 + params.tilt);
        assert_eq!(next.rotation, -params.tilt / 3.0);
    }

    #[test]
    fn drag_leaves_exact_zero_alone() {
        let params = PhysicsParams::default();
        let state = KinematicState {
            position: DVec2::new(3.0, 50.0),
            rotation: 0.25,
            ..Default::default()
        };
        let next = step(state, MovementIntent::NEUTRAL, &params);
        assert_eq!(next.velocity.x, 0.0);
        assert_eq!(next.rotation, 0.25);
    }

    #[test]
    fn drag_can_overshoot_zero() {
        let params = PhysicsParams::default();
        let state = KinematicState {
            position: DVec2::new(0.0, 50.0),
            velocity: DVec2::new(0.0004, 0.0),
            ..Default::default()
        };
        let next = step(state, MovementIntent::NEUTRAL, &params);
        assert!(next.velocity.x < 0.0, "vx={}", next.velocity.x);
        let after = step(next, MovementIntent::NEUTRAL, &params);
        assert!(after.velocity.x > 0.0, "vx={}", after.velocity.x);
    }

    #[test]
    fn ground_bounce_clamps_and_damps() {
        let params = PhysicsParams::default();
        let state = KinematicState {
            position: DVec2::new(0.0, 0.5),
            velocity: DVec2::new(0.0, -2.0),
            ..Default::default()
        };
        let next = step(state, MovementIntent::NEUTRAL, &params);
        assert_eq!(next.position.y, 0.0);
        assert!(next.is_grounded());
        // Incoming velocity is the post-gravity value for this tick.
        let incoming = -2.0 - params.gravity;
        assert_eq!(next.velocity.y, -0.3 * incoming);
        assert!(next.velocity.y > 0.0);
    }

    #[test]
    fn no_bounce_above_ground() {
        let params = PhysicsParams::default();
        let state = KinematicState {
            position: DVec2::new(0.0, 5.0),
            velocity: DVec2::new(0.0, -2.0),
            ..Default::default()
        };
        let next = step(state, MovementIntent::NEUTRAL, &params);
        assert_eq!(next.position.y, 3.0);
        assert_eq!(next.velocity.y, -2.0 - params.gravity);
    }

    #[test]
    fn resting_on_ground_never_sinks() {
        let params = PhysicsParams::default();
        let mut state = KinematicState::default();
        for _ in 0..500 {
            state = step(state, MovementIntent::NEUTRAL, &params);
            assert!(state.position.y >= 0.0);
        }
    }

    #[test]
    fn identical_inputs_are_bit_identical() {
        let params = PhysicsParams::default();
        let intents = [THRUST, right(), MovementIntent::NEUTRAL, left(), left()];
        let run = || {
            let mut state = KinematicState::default();
            let mut trace = Vec::new();
            for i in 0..300 {
                state = step(state, intents[i % intents.len()], &params);
                trace.push(state);
            }
            trace
        };
        let a = run();
        let b = run();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.position.x.to_bits(), y.position.x.to_bits());
            assert_eq!(x.position.y.to_bits(), y.position.y.to_bits());
            assert_eq!(x.velocity.x.to_bits(), y.velocity.x.to_bits());
            assert_eq!(x.velocity.y.to_bits(), y.velocity.y.to_bits());
            assert_eq!(x.rotation.to_bits(), y.rotation.to_bits());
        }
    }
}

//! One tick of flight: input → physics → animation → camera.

use glam::{DAffine2, DVec2};

use crate::api::config::FlightConfig;
use crate::components::animation::{JetpackVariant, ThrustState};
use crate::core::physics::{self, Facing, KinematicState};
use crate::input::intent::{map_intent, MovementIntent};
use crate::input::keys::KeyState;
use crate::renderer::camera::CameraState;

/// What a tick hands to the renderer. Plain data; drawing it simulates nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    pub position: DVec2,
    pub rotation: f64,
    pub facing: Facing,
    pub variant: JetpackVariant,
    pub focus: DVec2,
    /// Screen-anchored draw position of the pilot.
    pub anchor: DVec2,
    /// World → screen transform for this frame.
    pub view: DAffine2,
}

/// The whole simulation state, advanced by exclusive `&mut` once per tick.
pub struct Simulation {
    config: FlightConfig,
    kinematics: KinematicState,
    thrust: ThrustState,
    camera: CameraState,
    ticks: u64,
}

impl Simulation {
    /// Pilot at rest on the ground, jetpack idle, camera on the viewport center.
    pub fn new(config: FlightConfig) -> Self {
        let camera = CameraState::from_config(&config);
        Self {
            config,
            kinematics: KinematicState::default(),
            thrust: ThrustState::new(),
            camera,
            ticks: 0,
        }
    }

    /// Run one tick with the keys held right now.
    pub fn tick(&mut self, keys: &KeyState) -> FrameOutput {
        let intent = map_intent(keys);
        self.step_intent(intent)
    }

    /// Run one tick from an already-mapped intent.
    pub fn step_intent(&mut self, intent: MovementIntent) -> FrameOutput {
        self.kinematics = physics::step(self.kinematics, intent, &self.config.physics);
        let variant = self.thrust.advance(intent.thrust_requested);
        let anchor = self.config.anchor(self.kinematics.position);
        self.camera.update(anchor);
        self.ticks += 1;

        FrameOutput {
            position: self.kinematics.position,
            rotation: self.kinematics.rotation,
            facing: self.kinematics.facing,
            variant,
            focus: self.camera.focus,
            anchor,
            view: self.camera.view_matrix(self.config.viewport_center()),
        }
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn kinematics(&self) -> &KinematicState {
        &self.kinematics
    }

    pub fn thrust(&self) -> &ThrustState {
        &self.thrust
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

use glam::DVec2;

/// Per-tick downward acceleration when the jetpack is off (units/tick²).
pub const GRAVITY: f64 = 0.004;
/// Per-tick upward acceleration while thrusting (units/tick²).
pub const JET_ACCELERATION: f64 = 0.008;
/// Rotation/velocity increment applied per tick while turning or drifting.
pub const TILT: f64 = 0.001;
/// Vertical velocity multiplier on ground contact.
pub const BOUNCE: f64 = -0.3;
/// Fraction of the distance to the target the camera closes per tick.
pub const CAMERA_SMOOTHING: f64 = 0.02;

/// Tunables for the physics integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    pub gravity: f64,
    pub jet_acceleration: f64,
    pub tilt: f64,
    pub bounce: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jet_acceleration: JET_ACCELERATION,
            tilt: TILT,
            bounce: BOUNCE,
        }
    }
}

/// Camera clamp rectangle. There is no lower y bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Default for CameraBounds {
    fn default() -> Self {
        Self {
            x_min: -14843.0,
            x_max: 25085.0,
            y_max: 22500.0,
        }
    }
}

/// Configuration for the flight simulation and its presentation.
/// Every default is a compile-time constant; callers override fields with
/// struct-update syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightConfig {
    pub physics: PhysicsParams,
    pub camera_smoothing: f64,
    pub camera_bounds: CameraBounds,
    /// Viewport size in screen units (default: 1024x768).
    pub viewport: DVec2,
    /// Ground level sits this far below the viewport center.
    pub ground_offset: f64,
    /// Base scale applied to the jetpack sprite.
    pub sprite_scale: f64,
    /// Uniform scale of the sky and ground backdrop.
    pub backdrop_scale: f64,
    /// Simulation ticks per second; physics constants are per tick.
    pub tick_rate: f64,
    /// Clear colour, RGB in [0, 1].
    pub clear_color: [f32; 3],
    pub title: String,
    pub banner: String,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            camera_smoothing: CAMERA_SMOOTHING,
            camera_bounds: CameraBounds::default(),
            viewport: DVec2::new(1024.0, 768.0),
            ground_offset: 372.0,
            sprite_scale: 4.0,
            backdrop_scale: 10.0,
            tick_rate: 60.0,
            clear_color: [0.0, 128.0 / 255.0, 0.0],
            title: "Jetpack!".to_string(),
            banner: "Explore the Skies with WASD or Arrow Keys!".to_string(),
        }
    }
}

impl FlightConfig {
    pub fn viewport_center(&self) -> DVec2 {
        self.viewport / 2.0
    }

    /// Screen-anchored position of a world offset: where the player is drawn
    /// and what the camera chases. World y = 0 lands on the ground line.
    pub fn anchor(&self, position: DVec2) -> DVec2 {
        self.viewport_center() + position - DVec2::new(0.0, self.ground_offset)
    }
}

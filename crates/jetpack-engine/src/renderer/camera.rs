use glam::{DAffine2, DVec2};

use crate::api::config::{CameraBounds, FlightConfig};

/// Follow camera for the side-scrolling view.
/// Chases its target with a single-pole low-pass filter, then clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Current smoothed camera center in anchored world space.
    pub focus: DVec2,
    /// Fraction of the remaining distance closed each tick (0.0 = frozen, 1.0 = snap).
    pub smoothing: f64,
    pub bounds: CameraBounds,
}

impl CameraState {
    pub fn new(focus: DVec2, smoothing: f64, bounds: CameraBounds) -> Self {
        Self {
            focus,
            smoothing,
            bounds,
        }
    }

    /// Camera centered on the viewport, using the configured smoothing and bounds.
    pub fn from_config(config: &FlightConfig) -> Self {
        Self::new(
            config.viewport_center(),
            config.camera_smoothing,
            config.camera_bounds,
        )
    }

    /// Move the focus toward `target` and clamp. Call once per tick.
    pub fn update(&mut self, target: DVec2) {
        self.focus += (target - self.focus) * self.smoothing;
        self.clamp_to_bounds();
        debug_assert!(self.is_within_bounds(), "focus {:?} escaped bounds", self.focus);
    }

    /// Clamp x to `[x_min, x_max]` and y to `<= y_max`. No floor on y.
    fn clamp_to_bounds(&mut self) {
        let CameraBounds { x_min, x_max, y_max } = self.bounds;
        if self.focus.x > x_max {
            self.focus.x = x_max;
        } else if self.focus.x < x_min {
            self.focus.x = x_min;
        }
        if self.focus.y > y_max {
            self.focus.y = y_max;
        }
    }

    /// Translation that puts the focus at the viewport center.
    pub fn view_offset(&self, viewport_center: DVec2) -> DVec2 {
        viewport_center - self.focus
    }

    /// World → screen transform for this frame. Derived, never stored.
    pub fn view_matrix(&self, viewport_center: DVec2) -> DAffine2 {
        DAffine2::from_translation(self.view_offset(viewport_center))
    }

    pub fn is_within_bounds(&self) -> bool {
        self.focus.x >= self.bounds.x_min
            && self.focus.x <= self.bounds.x_max
            && self.focus.y <= self.bounds.y_max
    }
}

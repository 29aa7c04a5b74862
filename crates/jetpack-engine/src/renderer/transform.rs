//! Draw transforms for the flight scene.
//!
//! All transforms are 2D affine maps composed right-to-left: the rightmost
//! factor is applied to the sprite's local coordinates first.

use glam::{DAffine2, DVec2};

use crate::core::physics::Facing;

/// Vertical lift of the sky backdrop above the viewport center, before scaling.
pub const BACKDROP_LIFT: f64 = 766.0;

/// Pilot sprite transform.
///
/// Order: uniform `scale` about the origin, translate to `anchor`, mirror
/// horizontally about `anchor`, rotate about `anchor`.
pub fn sprite_transform(anchor: DVec2, facing: Facing, rotation: f64, scale: f64) -> DAffine2 {
    DAffine2::from_translation(anchor)
        * DAffine2::from_angle(rotation)
        * DAffine2::from_scale(DVec2::new(facing.sign(), 1.0))
        * DAffine2::from_scale(DVec2::splat(scale))
}

/// Sky backdrop transform: move above the viewport center, then scale the
/// whole result about the origin.
pub fn backdrop_transform(viewport_center: DVec2, scale: f64) -> DAffine2 {
    DAffine2::from_scale(DVec2::splat(scale))
        * DAffine2::from_translation(viewport_center + DVec2::new(0.0, BACKDROP_LIFT))
}

/// Ground strip transform: centered on the ground line under the viewport.
pub fn ground_transform(ground_anchor: DVec2, scale: f64) -> DAffine2 {
    DAffine2::from_translation(ground_anchor) * DAffine2::from_scale(DVec2::splat(scale))
}

/// Flatten into column-major `[a, b, c, d, tx, ty]` for the wire format.
pub fn to_cols(transform: &DAffine2) -> [f32; 6] {
    let m = transform.matrix2;
    let t = transform.translation;
    [
        m.x_axis.x as f32,
        m.x_axis.y as f32,
        m.y_axis.x as f32,
        m.y_axis.y as f32,
        t.x as f32,
        t.y as f32,
    ]
}

//! Services the flight core needs from its host.
//!
//! The core never opens windows, decodes images or rasterizes glyphs. The host
//! implements these traits and the core drives them once per tick.

use glam::DAffine2;

use crate::assets::error::AssetError;
use crate::input::keys::KeyState;

/// Resolves image names into renderable handles.
pub trait ImageService {
    /// Opaque, host-owned renderable.
    type Image;

    /// Load an image by name. Missing or corrupt assets are errors.
    fn load_image(&mut self, name: &str) -> Result<Self::Image, AssetError>;
}

/// Builds text renderers from font files.
pub trait FontService {
    type Font;

    fn load_font(&mut self, path: &str, size: f32) -> Result<Self::Font, AssetError>;
}

/// A render target that can draw handles produced by its own services.
pub trait Surface: ImageService + FontService {
    /// Fill the whole target. RGB in [0, 1].
    fn clear(&mut self, color: [f32; 3]);

    /// World → screen transform applied to every following draw.
    fn set_view(&mut self, view: DAffine2);

    /// Filtered (`true`) or nearest-neighbour (`false`) sampling for following draws.
    fn set_smooth(&mut self, smooth: bool);

    fn draw_image(&mut self, image: &Self::Image, transform: DAffine2);

    fn draw_text(&mut self, font: &Self::Font, text: &str, transform: DAffine2);
}

/// Window lifecycle and input polling.
pub trait Window {
    /// Polled once per tick; `true` ends the session.
    fn is_closed(&self) -> bool;

    /// Present the previous frame and block until the next frame boundary.
    fn update(&mut self);

    /// Keys held right now.
    fn keys(&self) -> KeyState;
}

use glam::{DAffine2, DVec2};

use crate::api::config::FlightConfig;
use crate::api::sim::FrameOutput;
use crate::assets::error::AssetError;
use crate::assets::registry::{AssetCatalog, FontId, ImageId, SpriteSet};
use crate::renderer::instance::{RenderBuffer, RenderInstance, FLAG_SMOOTH, FLAG_TEXT};
use crate::renderer::traits::{FontService, ImageService, Surface};
use crate::renderer::transform::{backdrop_transform, ground_transform, sprite_transform, to_cols};
use crate::systems::text::Banner;

/// Issue one frame of draw calls.
///
/// Paint order: clear, camera view, sky, ground, banner (all smooth-sampled),
/// then the pilot with nearest-neighbour sampling.
pub fn draw_frame<S: Surface>(
    surface: &mut S,
    sprites: &SpriteSet<S::Image>,
    banner: &Banner<S::Font>,
    frame: &FrameOutput,
    config: &FlightConfig,
) {
    let center = config.viewport_center();
    surface.clear(config.clear_color);
    surface.set_view(frame.view);

    surface.set_smooth(true);
    surface.draw_image(&sprites.background, backdrop_transform(center, config.backdrop_scale));
    surface.draw_image(
        &sprites.ground,
        ground_transform(config.anchor(DVec2::ZERO), config.backdrop_scale),
    );
    surface.draw_text(&banner.font, &banner.message, banner.transform());

    surface.set_smooth(false);
    surface.draw_image(
        sprites.jetpack(frame.variant),
        sprite_transform(frame.anchor, frame.facing, frame.rotation, config.sprite_scale),
    );
}

/// A [`Surface`] that records draw calls into a [`RenderBuffer`] for a host
/// renderer to replay. Asset names resolve through an [`AssetCatalog`].
pub struct BufferSurface<'a> {
    pub catalog: &'a mut AssetCatalog,
    pub buffer: &'a mut RenderBuffer,
    smooth: bool,
}

impl<'a> BufferSurface<'a> {
    /// Starts a fresh frame: previous instances and labels are dropped.
    pub fn new(catalog: &'a mut AssetCatalog, buffer: &'a mut RenderBuffer) -> Self {
        buffer.clear();
        Self {
            catalog,
            buffer,
            smooth: false,
        }
    }

    fn flags(&self) -> u32 {
        if self.smooth {
            FLAG_SMOOTH
        } else {
            0
        }
    }
}

impl ImageService for BufferSurface<'_> {
    type Image = ImageId;

    fn load_image(&mut self, name: &str) -> Result<ImageId, AssetError> {
        self.catalog.load_image(name)
    }
}

impl FontService for BufferSurface<'_> {
    type Font = FontId;

    fn load_font(&mut self, path: &str, size: f32) -> Result<FontId, AssetError> {
        self.catalog.load_font(path, size)
    }
}

impl Surface for BufferSurface<'_> {
    fn clear(&mut self, color: [f32; 3]) {
        self.buffer.clear_color = color;
    }

    fn set_view(&mut self, view: DAffine2) {
        self.buffer.view = to_cols(&view);
    }

    fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    fn draw_image(&mut self, image: &ImageId, transform: DAffine2) {
        let flags = self.flags();
        self.buffer.push(RenderInstance::new(&transform, image.0, flags));
    }

    fn draw_text(&mut self, font: &FontId, text: &str, transform: DAffine2) {
        let flags = self.flags() | FLAG_TEXT;
        self.buffer.push(RenderInstance::new(&transform, font.0, flags));
        self.buffer.labels.push(text.to_string());
    }
}

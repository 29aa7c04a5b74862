use std::collections::HashMap;

use crate::assets::error::AssetError;
use crate::assets::manifest::AssetManifest;
use crate::components::animation::JetpackVariant;
use crate::renderer::traits::{FontService, ImageService};

/// Every image the flight scene draws, resolved once at startup.
///
/// The jetpack variants are looked up by [`JetpackVariant`] each tick; no
/// image is loaded after construction.
#[derive(Debug, Clone)]
pub struct SpriteSet<I> {
    pub background: I,
    pub ground: I,
    jetpack: [I; 3],
}

impl<I> SpriteSet<I> {
    /// Resolve all images named by `manifest`. The first failure aborts.
    pub fn load<S>(manifest: &AssetManifest, images: &mut S) -> Result<Self, AssetError>
    where
        S: ImageService<Image = I>,
    {
        let background = images.load_image(&manifest.background)?;
        let ground = images.load_image(&manifest.ground)?;
        let jetpack = [
            images.load_image(manifest.jetpack.name(JetpackVariant::Idle))?,
            images.load_image(manifest.jetpack.name(JetpackVariant::ThrustA))?,
            images.load_image(manifest.jetpack.name(JetpackVariant::ThrustB))?,
        ];
        log::info!(
            "resolved sprites: {}, {}, {}/{}/{}",
            manifest.background,
            manifest.ground,
            manifest.jetpack.idle,
            manifest.jetpack.thrust_a,
            manifest.jetpack.thrust_b
        );
        Ok(Self {
            background,
            ground,
            jetpack,
        })
    }

    /// Handle for the given jetpack variant.
    pub fn jetpack(&self, variant: JetpackVariant) -> &I {
        &self.jetpack[variant.index()]
    }
}

/// Index of an image registered with an [`AssetCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Index of a font registered with an [`AssetCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// Name → index table for assets a host has already decoded.
///
/// Hosts that own decoding (e.g. the browser) register each asset they
/// loaded; the core then resolves names through the ordinary service traits
/// and gets back indices the host can map to its own textures.
#[derive(Debug, Default)]
pub struct AssetCatalog {
    images: HashMap<String, ImageId>,
    fonts: HashMap<String, FontId>,
    font_sizes: Vec<f32>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decoded image. Re-registering a name returns its existing id.
    pub fn register_image(&mut self, name: impl Into<String>) -> ImageId {
        let next = ImageId(self.images.len() as u32);
        *self.images.entry(name.into()).or_insert(next)
    }

    /// Register a font file the host can rasterize.
    pub fn register_font(&mut self, path: impl Into<String>) -> FontId {
        let next = FontId(self.fonts.len() as u32);
        let id = *self.fonts.entry(path.into()).or_insert(next);
        if id.0 as usize == self.font_sizes.len() {
            self.font_sizes.push(0.0);
        }
        id
    }

    /// Size most recently requested for a font, if it has been loaded.
    pub fn font_size(&self, id: FontId) -> Option<f32> {
        self.font_sizes.get(id.0 as usize).copied().filter(|s| *s > 0.0)
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

impl ImageService for AssetCatalog {
    type Image = ImageId;

    fn load_image(&mut self, name: &str) -> Result<ImageId, AssetError> {
        self.images
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::not_found(name))
    }
}

impl FontService for AssetCatalog {
    type Font = FontId;

    fn load_font(&mut self, path: &str, size: f32) -> Result<FontId, AssetError> {
        let id = self
            .fonts
            .get(path)
            .copied()
            .ok_or_else(|| AssetError::not_found(path))?;
        if size.is_nan() || size <= 0.0 {
            return Err(AssetError::Font {
                path: path.to_string(),
                reason: format!("invalid size {size}"),
            });
        }
        self.font_sizes[id.0 as usize] = size;
        Ok(id)
    }
}

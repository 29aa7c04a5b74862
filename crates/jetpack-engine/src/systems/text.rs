//! On-screen banner text.
//!
//! The banner is world-anchored: it sits at a fixed spot near the starting
//! view and scrolls away with the camera like any other scenery.

use glam::{DAffine2, DVec2};

use crate::api::config::FlightConfig;
use crate::assets::error::AssetError;
use crate::assets::manifest::AssetManifest;
use crate::renderer::traits::FontService;

/// Offset of the banner's baseline origin from the viewport center.
pub const BANNER_OFFSET: DVec2 = DVec2::new(-450.0, -200.0);

/// A line of text bound to a loaded font.
#[derive(Debug, Clone)]
pub struct Banner<F> {
    pub font: F,
    pub message: String,
    /// World-space origin of the first glyph.
    pub origin: DVec2,
}

impl<F> Banner<F> {
    /// Load the manifest font and place the configured message.
    pub fn load<S>(manifest: &AssetManifest, config: &FlightConfig, fonts: &mut S) -> Result<Self, AssetError>
    where
        S: FontService<Font = F>,
    {
        let font = fonts.load_font(&manifest.font.path, manifest.font.size)?;
        Ok(Self {
            font,
            message: config.banner.clone(),
            origin: config.viewport_center() + BANNER_OFFSET,
        })
    }

    pub fn transform(&self) -> DAffine2 {
        DAffine2::from_translation(self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::registry::{AssetCatalog, FontId};

    #[test]
    fn banner_sits_left_of_and_below_center() {
        let mut catalog = AssetCatalog::new();
        catalog.register_font("intuitive.ttf");
        let banner = Banner::load(&AssetManifest::default(), &FlightConfig::default(), &mut catalog).unwrap();

        assert_eq!(banner.font, FontId(0));
        assert_eq!(banner.origin, DVec2::new(62.0, 184.0));
        assert!(banner.message.contains("WASD"));
        assert_eq!(banner.transform().translation, banner.origin);
    }

    #[test]
    fn missing_font_fails() {
        let mut catalog = AssetCatalog::new();
        let result = Banner::load(&AssetManifest::default(), &FlightConfig::default(), &mut catalog);
        assert!(result.is_err());
    }
}

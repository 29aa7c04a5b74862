use serde::{Deserialize, Serialize};

use crate::components::animation::JetpackVariant;

/// Names of every image and font the flight scene needs.
/// Loaded from JSON; any omitted field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    /// Sky backdrop image.
    pub background: String,
    /// Ground strip image.
    pub ground: String,
    /// Jetpack sprite per animation variant.
    pub jetpack: JetpackSprites,
    /// Banner font.
    pub font: FontDescriptor,
}

/// One image name per [`JetpackVariant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JetpackSprites {
    pub idle: String,
    pub thrust_a: String,
    pub thrust_b: String,
}

/// A font file and the pixel size to rasterize it at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    pub path: String,
    pub size: f32,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            background: "sky.png".to_string(),
            ground: "ground.png".to_string(),
            jetpack: JetpackSprites::default(),
            font: FontDescriptor::default(),
        }
    }
}

impl Default for JetpackSprites {
    fn default() -> Self {
        Self {
            idle: "jetpack.png".to_string(),
            thrust_a: "jetpack-on.png".to_string(),
            thrust_b: "jetpack-on2.png".to_string(),
        }
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            path: "intuitive.ttf".to_string(),
            size: 50.0,
        }
    }
}

impl JetpackSprites {
    pub fn name(&self, variant: JetpackVariant) -> &str {
        match variant {
            JetpackVariant::Idle => &self.idle,
            JetpackVariant::ThrustA => &self.thrust_a,
            JetpackVariant::ThrustB => &self.thrust_b,
        }
    }
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Every image name in load order: backdrop, ground, then jetpack variants.
    pub fn image_names(&self) -> Vec<&str> {
        let mut names = vec![self.background.as_str(), self.ground.as_str()];
        names.extend(JetpackVariant::ALL.iter().map(|v| self.jetpack.name(*v)));
        names
    }
}

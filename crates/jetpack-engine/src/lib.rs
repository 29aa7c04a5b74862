pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::app::{run, SessionSummary};
pub use api::config::{CameraBounds, FlightConfig, PhysicsParams};
pub use api::sim::{FrameOutput, Simulation};
pub use assets::error::AssetError;
pub use assets::manifest::AssetManifest;
pub use assets::registry::{AssetCatalog, FontId, ImageId, SpriteSet};
pub use components::animation::{JetpackVariant, ThrustState};
pub use crate::core::physics::{Facing, KinematicState};
pub use crate::core::time::FramePacer;
pub use input::intent::{map_intent, MovementIntent, TurnDirection};
pub use input::keys::{Key, KeyState};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::CameraState;
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use renderer::traits::{FontService, ImageService, Surface, Window};
pub use systems::render::{draw_frame, BufferSurface};
pub use systems::text::Banner;

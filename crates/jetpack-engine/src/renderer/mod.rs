pub mod camera;
pub mod instance;
pub mod traits;
pub mod transform;

// Re-export the host contract for convenient access
pub use traits::{FontService, ImageService, Surface, Window};

use bytemuck::{Pod, Zeroable};
use glam::DAffine2;

use crate::renderer::transform::to_cols;

/// Sample the texture with filtering (otherwise nearest-neighbour).
pub const FLAG_SMOOTH: u32 = 1 << 0;
/// `resource` is a font id and the instance draws the next queued label.
pub const FLAG_TEXT: u32 = 1 << 1;

/// One draw call, written to shared memory for the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Affine matrix, column-major: x axis (a, b), y axis (c, d).
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    /// Translation.
    pub tx: f32,
    pub ty: f32,
    /// Image id, or font id for text instances.
    pub resource: f32,
    /// Bitwise OR of `FLAG_*`, stored as a float.
    pub flags: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(transform: &DAffine2, resource: u32, flags: u32) -> Self {
        let [a, b, c, d, tx, ty] = to_cols(transform);
        Self {
            a,
            b,
            c,
            d,
            tx,
            ty,
            resource: resource as f32,
            flags: flags as f32,
        }
    }

    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags as u32 & flag != 0
    }
}

/// Everything the host needs to present one frame.
pub struct RenderBuffer {
    /// Draw calls in paint order.
    pub instances: Vec<RenderInstance>,
    /// Text for each `FLAG_TEXT` instance, in the same order.
    pub labels: Vec<String>,
    /// World → screen matrix, column-major `[a, b, c, d, tx, ty]`.
    pub view: [f32; 6],
    pub clear_color: [f32; 3],
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            labels: Vec::new(),
            view: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            clear_color: [0.0; 3],
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.labels.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

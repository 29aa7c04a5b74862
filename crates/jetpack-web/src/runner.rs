use jetpack_engine::{
    draw_frame, AssetCatalog, AssetError, AssetManifest, Banner, BufferSurface, FlightConfig,
    FontId, FrameOutput, FramePacer, ImageId, InputEvent, InputQueue, KeyState, RenderBuffer,
    Simulation, SpriteSet,
};

/// Most ticks run for a single browser frame; older backlog is dropped.
pub const MAX_CATCH_UP: u32 = 4;

/// Assets resolved by `init`.
struct LoadedScene {
    sprites: SpriteSet<ImageId>,
    banner: Banner<FontId>,
}

/// Wires the flight core to a browser host.
///
/// The host registers the images and fonts it decoded, calls `init` once,
/// forwards key events, and calls `tick` every animation frame. After each
/// tick the render buffer holds the draw calls for the latest simulated frame.
pub struct FlightRunner {
    sim: Simulation,
    catalog: AssetCatalog,
    input: InputQueue,
    keys: KeyState,
    pacer: FramePacer,
    render_buffer: RenderBuffer,
    scene: Option<LoadedScene>,
    last_frame: Option<FrameOutput>,
}

impl FlightRunner {
    pub fn new(config: FlightConfig) -> Self {
        let pacer = FramePacer::new(config.tick_rate, MAX_CATCH_UP);
        Self {
            sim: Simulation::new(config),
            catalog: AssetCatalog::new(),
            input: InputQueue::new(),
            keys: KeyState::NONE,
            pacer,
            render_buffer: RenderBuffer::with_capacity(4),
            scene: None,
            last_frame: None,
        }
    }

    pub fn register_image(&mut self, name: &str) -> u32 {
        self.catalog.register_image(name).0
    }

    pub fn register_font(&mut self, path: &str) -> u32 {
        self.catalog.register_font(path).0
    }

    /// Resolve every asset named by the manifest. Fails on the first missing one.
    pub fn init(&mut self, manifest_json: &str) -> Result<(), AssetError> {
        let manifest = AssetManifest::from_json(manifest_json)?;
        let sprites = SpriteSet::load(&manifest, &mut self.catalog)?;
        let banner = Banner::load(&manifest, self.sim.config(), &mut self.catalog)?;
        self.scene = Some(LoadedScene { sprites, banner });
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.scene.is_some()
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Advance by `dt` seconds of wall-clock time and redraw if any tick ran.
    pub fn tick(&mut self, dt: f64) {
        let Some(scene) = &self.scene else {
            return;
        };

        for event in self.input.drain() {
            self.keys.apply(&event);
        }

        let steps = self.pacer.advance(dt);
        for _ in 0..steps {
            self.last_frame = Some(self.sim.tick(&self.keys));
        }

        if steps > 0 {
            if let Some(frame) = &self.last_frame {
                let mut surface = BufferSurface::new(&mut self.catalog, &mut self.render_buffer);
                draw_frame(&mut surface, &scene.sprites, &scene.banner, frame, self.sim.config());
            }
        }
    }

    // ---- Accessors for the host renderer ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.render_buffer.labels.get(index).map(String::as_str)
    }

    pub fn view(&self) -> [f32; 6] {
        self.render_buffer.view
    }

    pub fn clear_color(&self) -> [f32; 3] {
        self.render_buffer.clear_color
    }

    pub fn font_size(&self, font: u32) -> f32 {
        self.catalog.font_size(FontId(font)).unwrap_or(0.0)
    }

    pub fn last_frame(&self) -> Option<&FrameOutput> {
        self.last_frame.as_ref()
    }

    pub fn config(&self) -> &FlightConfig {
        self.sim.config()
    }

    pub fn ticks(&self) -> u64 {
        self.sim.ticks()
    }
}

impl Default for FlightRunner {
    fn default() -> Self {
        Self::new(FlightConfig::default())
    }
}

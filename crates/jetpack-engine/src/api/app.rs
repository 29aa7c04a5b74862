//! Host-driven session loop.

use crate::api::config::FlightConfig;
use crate::api::sim::{FrameOutput, Simulation};
use crate::assets::error::AssetError;
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::SpriteSet;
use crate::renderer::traits::{Surface, Window};
use crate::systems::render::draw_frame;
use crate::systems::text::Banner;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub last_frame: Option<FrameOutput>,
}

/// Run a flight session until the host window closes.
///
/// All assets are resolved before the first tick; any failure returns
/// immediately and no frame is drawn.
pub fn run<H>(host: &mut H, config: FlightConfig, manifest: &AssetManifest) -> Result<SessionSummary, AssetError>
where
    H: Surface + Window,
{
    let sprites = SpriteSet::load(manifest, &mut *host)?;
    let banner = Banner::load(manifest, &config, &mut *host)?;
    log::info!("{}: assets ready, starting session", config.title);

    let mut sim = Simulation::new(config);
    let mut last_frame = None;
    while !host.is_closed() {
        host.update();
        let frame = sim.tick(&host.keys());
        draw_frame(&mut *host, &sprites, &banner, &frame, sim.config());
        last_frame = Some(frame);
    }

    log::info!("session ended after {} ticks", sim.ticks());
    Ok(SessionSummary {
        ticks: sim.ticks(),
        last_frame,
    })
}

use std::sync::Arc;

use atrium_content::LinkSet;
use atrium_layout::ZoneMap;
use atrium_nav::Navigator;
use atrium_overlay::OverlayController;

use crate::scene::SceneGraph;

pub struct GameState {
    pub tick: u64,
    /// Milliseconds of simulated time, advanced once per step. Every timer
    /// and trajectory in the subsystems runs on this clock.
    pub clock_ms: u64,

    pub zones: Arc<ZoneMap>,
    pub scene: SceneGraph,

    // Player rig; position is owned and mutated by the navigator only
    pub navigator: Navigator,

    pub overlays: OverlayController,
    pub links: LinkSet,

    /// Overlay panels register as collidable geometry (collision strategy
    /// only). Explicit so the player being blocked by their own UI is a
    /// choice, not a cache accident.
    pub collide_panels: bool,
}

impl GameState {
    pub fn new(
        zones: Arc<ZoneMap>,
        scene: SceneGraph,
        navigator: Navigator,
        overlays: OverlayController,
        links: LinkSet,
        collide_panels: bool,
    ) -> Self {
        Self {
            tick: 0,
            clock_ms: 0,
            zones,
            scene,
            navigator,
            overlays,
            links,
            collide_panels,
        }
    }
}

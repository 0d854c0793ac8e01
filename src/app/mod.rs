mod events;
mod step;
mod watchers;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

use atrium_content::LinkSet;
use atrium_geom::Vec3;
use atrium_layout::{LayoutConfig, ZoneMap};
use atrium_nav::{CollisionValidator, NavConfig, Navigator, PlayerState, ZoneClampValidator};
use atrium_overlay::{OverlayConfig, OverlayController};
use hashbrown::HashMap;

use crate::event::EventQueue;
use crate::gamestate::GameState;
use crate::scene::SceneGraph;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovementStrategy {
    ZoneClamp,
    Collision,
}

pub struct AppConfig {
    pub layout: LayoutConfig,
    pub links: LinkSet,
    pub links_path: Option<PathBuf>,
    pub watch_links: bool,
    pub strategy: MovementStrategy,
    pub collide_panels: bool,
    pub nav: NavConfig,
    pub overlay: OverlayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            links: LinkSet::fallback(),
            links_path: None,
            watch_links: false,
            strategy: MovementStrategy::ZoneClamp,
            collide_panels: false,
            nav: NavConfig::default(),
            overlay: OverlayConfig::default(),
        }
    }
}

pub struct App {
    pub gs: GameState,
    pub queue: EventQueue,
    pub(crate) links_path: Option<PathBuf>,
    pub(crate) links_event_rx: Option<Receiver<()>>,
    // Session-wide processed-event tallies for the shutdown summary
    pub(crate) evt_processed_total: u64,
    pub(crate) evt_processed_by: HashMap<&'static str, u64>,
}

impl App {
    pub fn new(cfg: AppConfig) -> Self {
        let zones = Arc::new(ZoneMap::from_config(&cfg.layout));
        let scene = SceneGraph::from_layout(&cfg.layout, &zones, cfg.collide_panels);
        let spawn = zones.hub().center.lifted(0.0);
        let validator: Box<dyn atrium_nav::MovementValidator> = match cfg.strategy {
            MovementStrategy::ZoneClamp => Box::new(ZoneClampValidator::new(zones.clone())),
            MovementStrategy::Collision => Box::new(CollisionValidator::new(0.1, 0.35)),
        };
        let navigator = Navigator::new(PlayerState::new(spawn), validator, cfg.nav, 0);
        let overlays = OverlayController::new(cfg.overlay);

        let links_event_rx = match (&cfg.links_path, cfg.watch_links) {
            (Some(path), true) => Some(watchers::spawn_links_watcher(path.clone())),
            _ => None,
        };
        log::info!(
            "scene ready: {} anchor(s), strategy {:?}, spawn ({:.1},{:.1})",
            scene.anchors().len(),
            cfg.strategy,
            spawn.x,
            spawn.z
        );
        Self {
            gs: GameState::new(
                zones,
                scene,
                navigator,
                overlays,
                cfg.links,
                cfg.collide_panels,
            ),
            queue: EventQueue::new(),
            links_path: cfg.links_path,
            links_event_rx,
            evt_processed_total: 0,
            evt_processed_by: HashMap::new(),
        }
    }

    pub fn player_position(&self) -> Vec3 {
        self.gs.navigator.position()
    }

    pub fn processed_events(&self) -> u64 {
        self.evt_processed_total
    }

    /// Processed-event counts, busiest first (stable order for equal counts).
    pub fn event_tally(&self) -> Vec<(&'static str, u64)> {
        let mut pairs: Vec<(&'static str, u64)> =
            self.evt_processed_by.iter().map(|(k, v)| (*k, *v)).collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        pairs
    }
}

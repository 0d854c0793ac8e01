mod app;
mod event;
mod gamestate;
mod scene;

use std::path::PathBuf;

use atrium_content::load_links_or_fallback;
use atrium_geom::Vec3;
use atrium_layout::{AnchorKind, LayoutConfig, load_layout_from_path};
use clap::{Parser, ValueEnum};

use crate::app::{App, AppConfig, MovementStrategy};
use crate::event::Event;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Clamp every candidate position into the nearest region
    Zone,
    /// Reject steps that push the player sphere into solid volumes
    Collision,
}

#[derive(Parser)]
#[command(
    name = "atrium",
    about = "Point-and-teleport walkthrough core, driven headlessly"
)]
struct Cli {
    /// Layout TOML; the built-in reference layout when omitted
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Links override TOML; built-in defaults when omitted or unusable
    #[arg(long)]
    links: Option<PathBuf>,
    /// Pick up edits to the links file while running
    #[arg(long)]
    watch_links: bool,
    #[arg(long, value_enum, default_value_t = Strategy::Zone)]
    validator: Strategy,
    /// Overlay panels register as collidable geometry (collision validator)
    #[arg(long)]
    collide_panels: bool,
    /// Simulated frames to run
    #[arg(long, default_value_t = 1000)]
    ticks: u64,
    /// Milliseconds per simulated frame
    #[arg(long, default_value_t = 16)]
    tick_ms: u32,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let layout = match &cli.layout {
        Some(p) => match load_layout_from_path(p) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!(
                    "layout {} unusable ({}); using reference layout",
                    p.display(),
                    e
                );
                LayoutConfig::default()
            }
        },
        None => LayoutConfig::default(),
    };
    let links = load_links_or_fallback(cli.links.as_deref());

    let mut app = App::new(AppConfig {
        layout,
        links,
        links_path: cli.links.clone(),
        watch_links: cli.watch_links,
        strategy: match cli.validator {
            Strategy::Zone => MovementStrategy::ZoneClamp,
            Strategy::Collision => MovementStrategy::Collision,
        },
        collide_panels: cli.collide_panels,
        nav: Default::default(),
        overlay: Default::default(),
    });

    script_demo_session(&mut app);
    for _ in 0..cli.ticks {
        app.step(cli.tick_ms);
    }

    let pos = app.player_position();
    let region = app.gs.zones.classify(pos.xz()).map(|r| r.kind);
    log::info!(
        "session over after {} tick(s): player at ({:.2},{:.2}) in {:?}, {} overlay(s) open, {} event(s) processed",
        app.gs.tick,
        pos.x,
        pos.z,
        region,
        app.gs.overlays.open_count(),
        app.processed_events()
    );
    for (label, count) in app.event_tally() {
        log::debug!("  {:>3} x {}", count, label);
    }
}

/// A canned visit: teleport into the first themed room, dwell on its orb,
/// follow the panel's link, then walk back toward the corridor. Exercises the
/// same paths a headset session would, on the simulated clock.
fn script_demo_session(app: &mut App) {
    let Some(orb) = app
        .gs
        .scene
        .anchors()
        .iter()
        .find(|a| a.kind == AnchorKind::Orb)
        .map(|a| a.id)
    else {
        return;
    };
    let q = &mut app.queue;
    q.emit_at(5, Event::YawChanged { yaw_deg: 0.0 });
    // Past the navigator's arm window; overshoots on purpose to show the clamp
    q.emit_at(
        110,
        Event::TeleportRequested {
            target: Vec3::new(40.0, 0.0, 0.0),
        },
    );
    q.emit_at(170, Event::AnchorActivated { anchor: orb });
    // The ray settling onto the fresh panel reads as a momentary gap
    q.emit_at(
        176,
        Event::OverlayAttentionChanged {
            anchor: orb,
            attended: false,
        },
    );
    q.emit_at(
        200,
        Event::OverlayAttentionChanged {
            anchor: orb,
            attended: true,
        },
    );
    q.emit_at(320, Event::LinkOpenRequested { anchor: orb });
    q.emit_at(
        360,
        Event::OverlayAttentionChanged {
            anchor: orb,
            attended: false,
        },
    );
    q.emit_at(
        400,
        Event::OverlayAttentionChanged {
            anchor: orb,
            attended: true,
        },
    );
    q.emit_at(700, Event::WalkHoldChanged { dir: -1.0 });
    q.emit_at(820, Event::WalkHoldChanged { dir: 0.0 });
}

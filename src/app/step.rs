use super::App;
use crate::gamestate::GameState;

impl App {
    /// One cooperative tick: drain file-watcher signals, process this tick's
    /// events, then advance the subsystems. The navigator's position update
    /// happens before the overlay controller (or any other consumer) runs for
    /// this frame.
    pub fn step(&mut self, dt_ms: u32) {
        self.gs.clock_ms += dt_ms as u64;
        self.process_links_file_events();

        let mut processed = 0usize;
        let max_events = 1000usize;
        while let Some(env) = self.queue.pop_ready() {
            log::trace!("event {} (tick {}): {}", env.id, env.tick, env.kind.label());
            self.evt_processed_total = self.evt_processed_total.saturating_add(1);
            *self.evt_processed_by.entry(env.kind.label()).or_insert(0) += 1;
            self.handle_event(env);
            processed += 1;
            if processed >= max_events {
                break;
            }
        }
        if processed >= max_events && self.queue.queued() > 0 {
            log::warn!(
                "event budget hit with {} event(s) still queued",
                self.queue.queued()
            );
        }

        let now = self.gs.clock_ms;
        let GameState {
            navigator,
            scene,
            overlays,
            collide_panels,
            ..
        } = &mut self.gs;
        navigator.tick(now, dt_ms, &*scene);
        let closed = overlays.tick(&mut *scene, now);
        if !closed.is_empty() {
            for anchor in &closed {
                log::info!("overlay for anchor {} timed out", anchor.0);
            }
            if *collide_panels {
                navigator.geometry_changed();
            }
        }

        self.gs.tick = self.gs.tick.wrapping_add(1);
        self.queue.advance_tick();
        let stale = self.queue.count_stale();
        if stale > 0 {
            log::error!("{} stale event(s) left in past tick buckets", stale);
        }
    }
}

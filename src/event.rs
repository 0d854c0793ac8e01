use std::collections::{BTreeMap, VecDeque};

use atrium_geom::Vec3;
use atrium_overlay::AnchorId;

/// Input-derived intents and subsystem notifications, all processed on the
/// single cooperative tick.
#[derive(Clone, Debug)]
pub enum Event {
    // Pointer/gaze activation carrying a world hit point
    TeleportRequested { target: Vec3 },
    // Continuous walk/back hold state: +1 forward, -1 back, 0 released
    WalkHoldChanged { dir: f32 },
    YawChanged { yaw_deg: f32 },

    // Anchor interactions
    AnchorActivated { anchor: AnchorId },
    OverlayCloseRequested { anchor: AnchorId },
    OverlayAttentionChanged { anchor: AnchorId, attended: bool },
    LinkOpenRequested { anchor: AnchorId },

    // Content override file changed on disk
    LinksFileChanged,
}

impl Event {
    pub fn label(&self) -> &'static str {
        match self {
            Event::TeleportRequested { .. } => "TeleportRequested",
            Event::WalkHoldChanged { .. } => "WalkHoldChanged",
            Event::YawChanged { .. } => "YawChanged",
            Event::AnchorActivated { .. } => "AnchorActivated",
            Event::OverlayCloseRequested { .. } => "OverlayCloseRequested",
            Event::OverlayAttentionChanged { .. } => "OverlayAttentionChanged",
            Event::LinkOpenRequested { .. } => "LinkOpenRequested",
            Event::LinksFileChanged => "LinksFileChanged",
        }
    }
}

pub struct EventEnvelope {
    pub id: u64,
    pub tick: u64,
    pub kind: Event,
}

/// Tick-bucketed FIFO. Events emitted for a future tick stay queued until the
/// clock reaches them; within a tick, processing order is emission order.
pub struct EventQueue {
    by_tick: BTreeMap<u64, VecDeque<EventEnvelope>>,
    pub now: u64,
    next_id: u64,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            by_tick: BTreeMap::new(),
            now: 0,
            next_id: 1,
        }
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1).max(1);
        id
    }

    pub fn emit_now(&mut self, kind: Event) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope {
            id,
            tick: self.now,
            kind,
        };
        self.by_tick.entry(self.now).or_default().push_back(env);
        id
    }

    pub fn emit_at(&mut self, tick: u64, kind: Event) -> u64 {
        let id = self.alloc_id();
        let env = EventEnvelope { id, tick, kind };
        self.by_tick.entry(tick).or_default().push_back(env);
        id
    }

    pub fn emit_after(&mut self, delta: u64, kind: Event) -> u64 {
        self.emit_at(self.now + delta, kind)
    }

    pub fn pop_ready(&mut self) -> Option<EventEnvelope> {
        self.by_tick.get_mut(&self.now).and_then(|q| q.pop_front())
    }

    pub fn queued(&self) -> usize {
        self.by_tick.values().map(|q| q.len()).sum()
    }

    pub fn advance_tick(&mut self) {
        if let Some(q) = self.by_tick.get(&self.now) {
            if q.is_empty() {
                self.by_tick.remove(&self.now);
            }
        }
        self.now = self.now.wrapping_add(1);
    }

    /// Events stranded in past tick buckets will never be processed; the
    /// step loop logs when any are detected.
    pub fn count_stale(&self) -> usize {
        self.by_tick.range(..self.now).map(|(_, q)| q.len()).sum()
    }
}

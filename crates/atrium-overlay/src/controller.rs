use atrium_geom::Vec3;
use hashbrown::HashMap;

use crate::timer::{TimerHandle, TimerService};

/// A fixed activation point in the scene (orb, picture frame, doorway).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnchorId(pub u32);

/// A node the scene graph handed back for an inserted panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayContent {
    pub title: String,
    pub url: String,
}

/// What was done to the anchor's own visual when the panel opened, so close
/// can restore it. Owned by the controller for the overlay's lifetime, never
/// stashed on the anchor itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorVisualState {
    Unchanged,
    Hidden,
}

/// Scene-graph insertion seam. The host supplies this at each call; the
/// controller never does ambient lookups.
pub trait ScenePort {
    fn anchor_position(&self, anchor: AnchorId) -> Option<Vec3>;
    fn insert_panel(&mut self, anchor: AnchorId, content: &OverlayContent, at: Vec3) -> NodeId;
    fn remove_panel(&mut self, node: NodeId);
    fn set_anchor_hidden(&mut self, anchor: AnchorId, hidden: bool);
}

#[derive(Clone, Copy, Debug)]
pub struct OverlayTiming {
    pub auto_close_ms: u64,
    /// Attention-loss signals are ignored for this window after open: the
    /// pointer ray settling onto the freshly created panel can register as a
    /// momentary attention gap on the first rendered frame.
    pub lockout_ms: u64,
    /// Delay between a genuine attention loss and the close it schedules, so
    /// brief involuntary glances away do not shut the panel mid-read.
    pub grace_ms: u64,
}

impl Default for OverlayTiming {
    fn default() -> Self {
        Self {
            auto_close_ms: 8000,
            lockout_ms: 300,
            grace_ms: 1200,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OverlayConfig {
    pub timing: OverlayTiming,
    /// Vertical offset of the panel above the anchor's world position.
    pub lift: f32,
    /// Hide the anchor's own visual while its panel is open (orb → panel
    /// layouts); restored on close.
    pub hide_anchor: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            timing: OverlayTiming::default(),
            lift: 0.35,
            hide_anchor: true,
        }
    }
}

#[derive(Debug)]
struct Overlay {
    content: OverlayContent,
    node: NodeId,
    opened_at_ms: u64,
    auto_close: TimerHandle,
    arm: TimerHandle,
    attention: Option<TimerHandle>,
    attention_armed: bool,
    restore: AnchorVisualState,
}

#[derive(Clone, Copy, Debug)]
enum TimerKind {
    AutoClose(AnchorId),
    ArmAttention(AnchorId),
    AttentionClose(AnchorId),
}

/// Per-anchor overlay lifecycle. At most one live overlay per anchor; every
/// teardown path is idempotent and cancels both timers unconditionally so a
/// once-scheduled callback can never act on a replaced instance.
pub struct OverlayController {
    overlays: HashMap<AnchorId, Overlay>,
    timers: TimerService<TimerKind>,
    cfg: OverlayConfig,
}

impl OverlayController {
    pub fn new(cfg: OverlayConfig) -> Self {
        Self {
            overlays: HashMap::new(),
            timers: TimerService::new(),
            cfg,
        }
    }

    #[inline]
    pub fn is_open(&self, anchor: AnchorId) -> bool {
        self.overlays.contains_key(&anchor)
    }

    #[inline]
    pub fn open_count(&self) -> usize {
        self.overlays.len()
    }

    /// Pending timer entries; exposed for leak assertions in tests.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn content(&self, anchor: AnchorId) -> Option<&OverlayContent> {
        self.overlays.get(&anchor).map(|o| &o.content)
    }

    /// URL behind the open panel's action control, if any.
    pub fn activate_link(&self, anchor: AnchorId) -> Option<&str> {
        self.overlays.get(&anchor).map(|o| o.content.url.as_str())
    }

    /// Open a panel for `anchor`. Re-activating an open anchor is a re-open:
    /// the previous instance is torn down synchronously first, so two
    /// overlays are never alive for one anchor.
    ///
    /// Panics if the anchor has no world position — opening an overlay for an
    /// entity outside the scene graph is a bug in the caller, not a runtime
    /// condition to recover from.
    pub fn open(
        &mut self,
        scene: &mut dyn ScenePort,
        anchor: AnchorId,
        content: OverlayContent,
        now_ms: u64,
    ) -> NodeId {
        self.close(scene, anchor);

        let Some(base) = scene.anchor_position(anchor) else {
            panic!("overlay anchor {anchor:?} is not in the scene graph");
        };
        let node = scene.insert_panel(anchor, &content, base + Vec3::UP * self.cfg.lift);
        let restore = if self.cfg.hide_anchor {
            scene.set_anchor_hidden(anchor, true);
            AnchorVisualState::Hidden
        } else {
            AnchorVisualState::Unchanged
        };

        let t = self.cfg.timing;
        let auto_close = self
            .timers
            .schedule(now_ms, t.auto_close_ms, TimerKind::AutoClose(anchor));
        let arm = self
            .timers
            .schedule(now_ms, t.lockout_ms, TimerKind::ArmAttention(anchor));
        log::info!("overlay opened for anchor {} ({})", anchor.0, content.title);
        self.overlays.insert(
            anchor,
            Overlay {
                content,
                node,
                opened_at_ms: now_ms,
                auto_close,
                arm,
                attention: None,
                attention_armed: false,
                restore,
            },
        );
        node
    }

    /// Tear down `anchor`'s overlay. No-op when nothing is open for it.
    pub fn close(&mut self, scene: &mut dyn ScenePort, anchor: AnchorId) -> bool {
        let Some(overlay) = self.overlays.remove(&anchor) else {
            return false;
        };
        // Cancel unconditionally: a due-but-unprocessed timer must not fire
        // against the node we are about to remove.
        self.timers.cancel(overlay.auto_close);
        self.timers.cancel(overlay.arm);
        if let Some(h) = overlay.attention {
            self.timers.cancel(h);
        }
        scene.remove_panel(overlay.node);
        if overlay.restore == AnchorVisualState::Hidden {
            scene.set_anchor_hidden(anchor, false);
        }
        log::info!("overlay closed for anchor {}", anchor.0);
        true
    }

    /// The pointer/gaze ray settled back on the panel: abort any pending
    /// attention-loss close.
    pub fn attention_gained(&mut self, anchor: AnchorId) {
        if let Some(overlay) = self.overlays.get_mut(&anchor) {
            if let Some(h) = overlay.attention.take() {
                self.timers.cancel(h);
            }
        }
    }

    /// The ray left the panel. Ignored during the startup lockout; otherwise
    /// (re)schedules the close after the grace period.
    pub fn attention_lost(&mut self, anchor: AnchorId, now_ms: u64) {
        let grace = self.cfg.timing.grace_ms;
        if let Some(overlay) = self.overlays.get_mut(&anchor) {
            if !overlay.attention_armed {
                return;
            }
            if let Some(h) = overlay.attention.take() {
                self.timers.cancel(h);
            }
            overlay.attention = Some(self.timers.schedule(
                now_ms,
                grace,
                TimerKind::AttentionClose(anchor),
            ));
        }
    }

    /// Fire every timer due at `now_ms`. Returns the anchors whose overlays
    /// closed this tick.
    pub fn tick(&mut self, scene: &mut dyn ScenePort, now_ms: u64) -> Vec<AnchorId> {
        let mut closed = Vec::new();
        while let Some((_, kind)) = self.timers.pop_due(now_ms) {
            match kind {
                TimerKind::ArmAttention(anchor) => {
                    if let Some(overlay) = self.overlays.get_mut(&anchor) {
                        overlay.attention_armed = true;
                    }
                }
                TimerKind::AutoClose(anchor) | TimerKind::AttentionClose(anchor) => {
                    if self.close(scene, anchor) {
                        closed.push(anchor);
                    }
                }
            }
        }
        closed
    }

    pub fn opened_at(&self, anchor: AnchorId) -> Option<u64> {
        self.overlays.get(&anchor).map(|o| o.opened_at_ms)
    }
}

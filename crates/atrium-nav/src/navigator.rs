use std::f32::consts::PI;

use atrium_geom::Vec3;

use crate::player::PlayerState;
use crate::validator::{MovementValidator, SolidSource};

/// One validated start→end trajectory. Superseded by any later request,
/// never queued.
#[derive(Clone, Copy, Debug)]
pub struct MoveRequest {
    pub start: Vec3,
    pub end: Vec3,
    pub started_at_ms: u64,
    pub duration_ms: u32,
}

impl MoveRequest {
    /// Eased position at `now`; the flag reports completion.
    fn sample(&self, now_ms: u64) -> (Vec3, bool) {
        let elapsed = now_ms.saturating_sub(self.started_at_ms) as f32;
        let t = (elapsed / self.duration_ms.max(1) as f32).min(1.0);
        let k = (1.0 - (PI * t).cos()) * 0.5;
        (self.start + (self.end - self.start) * k, t >= 1.0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NavConfig {
    /// Requests landing within this distance of the current position (or the
    /// in-flight destination) are dropped silently.
    pub deadzone: f32,
    /// All move requests are ignored for this window after construction, so
    /// an accidental activation during load is not read as a teleport.
    pub arm_delay_ms: u64,
    pub teleport_ms: u32,
    pub walk_speed: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            deadzone: 0.4,
            arm_delay_ms: 1500,
            teleport_ms: 900,
            walk_speed: 2.6,
        }
    }
}

/// Moves the player rig. Owns [`PlayerState`] exclusively; consumers read the
/// snapshot through [`Navigator::player`].
pub struct Navigator {
    player: PlayerState,
    validator: Box<dyn MovementValidator>,
    cfg: NavConfig,
    in_flight: Option<MoveRequest>,
    armed_at_ms: u64,
    yaw_deg: f32,
    walk: f32,
}

impl Navigator {
    pub fn new(
        player: PlayerState,
        validator: Box<dyn MovementValidator>,
        cfg: NavConfig,
        now_ms: u64,
    ) -> Self {
        let armed_at_ms = now_ms + cfg.arm_delay_ms;
        Self {
            player,
            validator,
            cfg,
            in_flight: None,
            armed_at_ms,
            yaw_deg: 0.0,
            walk: 0.0,
        }
    }

    #[inline]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.player.pos
    }

    #[inline]
    pub fn in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn set_yaw(&mut self, yaw_deg: f32) {
        self.yaw_deg = yaw_deg;
    }

    /// Continuous walk/back hold state: +1 forward, -1 back, 0 released.
    pub fn set_walk(&mut self, dir: f32) {
        self.walk = dir.clamp(-1.0, 1.0);
    }

    /// Forwarded to the active strategy when the host changes solid geometry
    /// (only hosts that opted panels into collision call this).
    pub fn geometry_changed(&mut self) {
        self.validator.geometry_changed();
    }

    /// View-forward flattened to the horizontal plane.
    fn forward_flat(&self) -> Vec3 {
        let yaw = self.yaw_deg.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin()).normalized()
    }

    /// Validate a pointed-at target and start moving toward it. Returns
    /// whether a new trajectory was accepted. A request inside the deadzone
    /// of the current position or of the in-flight destination is dropped; an
    /// accepted request replaces any trajectory in progress, starting from
    /// the position the rig is at right now.
    pub fn request_move(&mut self, target: Vec3, now_ms: u64, source: &dyn SolidSource) -> bool {
        if now_ms < self.armed_at_ms {
            log::debug!("move request ignored: navigator not yet armed");
            return false;
        }
        let end = self
            .validator
            .validate(self.player.pos, target, source)
            .with_y(self.player.pos.y);
        if end.distance_xz(self.player.pos) <= self.cfg.deadzone {
            return false;
        }
        if let Some(req) = &self.in_flight {
            if end.distance_xz(req.end) <= self.cfg.deadzone {
                return false;
            }
        }
        log::debug!(
            "teleport accepted: ({:.2},{:.2}) -> ({:.2},{:.2})",
            self.player.pos.x,
            self.player.pos.z,
            end.x,
            end.z
        );
        self.in_flight = Some(MoveRequest {
            start: self.player.pos,
            end,
            started_at_ms: now_ms,
            duration_ms: self.cfg.teleport_ms,
        });
        true
    }

    /// Advance the rig for this frame. Walk input takes over from any
    /// teleport in flight — latest intent wins, same as supersession.
    pub fn tick(&mut self, now_ms: u64, dt_ms: u32, source: &dyn SolidSource) {
        if self.walk != 0.0 {
            self.in_flight = None;
            let dt = dt_ms as f32 / 1000.0;
            let step = self.forward_flat() * (self.walk * self.cfg.walk_speed * dt);
            let candidate = self.player.pos + step;
            self.player.pos = self
                .validator
                .validate(self.player.pos, candidate, source)
                .with_y(self.player.pos.y);
            return;
        }
        if let Some(req) = self.in_flight {
            let (pos, done) = req.sample(now_ms);
            self.player.pos = pos;
            if done {
                self.in_flight = None;
            }
        }
    }
}

use std::sync::Arc;

use atrium_geom::{Aabb, Vec3};
use atrium_layout::ZoneMap;

/// Supplies world-space bounds for everything flagged solid. Implemented by
/// the host's scene model; the navigation core never invents geometry.
pub trait SolidSource {
    fn solid_volumes(&self) -> Vec<Aabb>;
}

/// A source with no solids. Used by the zone-clamp strategy and by tests.
pub struct EmptySource;

impl SolidSource for EmptySource {
    fn solid_volumes(&self) -> Vec<Aabb> {
        Vec::new()
    }
}

/// One movement strategy: given the current position and a candidate, return
/// the position that is actually accepted. Chosen once at scene construction;
/// the navigator's tick logic is identical regardless of which is active.
pub trait MovementValidator {
    fn validate(&mut self, current: Vec3, candidate: Vec3, source: &dyn SolidSource) -> Vec3;

    /// The host changed solid geometry. Only meaningful for strategies that
    /// cache it; the default is a no-op.
    fn geometry_changed(&mut self) {}
}

/// Region-based strategy: candidates are pulled into the nearest valid region
/// on the ground plane. Never rejects — a malformed candidate lands in the
/// hub.
pub struct ZoneClampValidator {
    zones: Arc<ZoneMap>,
}

impl ZoneClampValidator {
    pub fn new(zones: Arc<ZoneMap>) -> Self {
        Self { zones }
    }
}

impl MovementValidator for ZoneClampValidator {
    fn validate(&mut self, _current: Vec3, candidate: Vec3, _source: &dyn SolidSource) -> Vec3 {
        let clamped = self.zones.clamp(candidate.xz());
        let y = if candidate.y.is_finite() {
            candidate.y
        } else {
            0.0
        };
        clamped.lifted(y)
    }
}

/// The set of axis-aligned volumes the collision strategy tests against.
/// Rebuilt wholesale from the source, never mutated incrementally.
pub struct CollisionField {
    volumes: Vec<Aabb>,
    margin: f32,
    built: bool,
}

impl CollisionField {
    pub fn new(margin: f32) -> Self {
        Self {
            volumes: Vec::new(),
            margin,
            built: false,
        }
    }

    /// Force a rescan on the next use. Only called by hosts that opted into
    /// dynamic geometry becoming collidable.
    pub fn mark_dirty(&mut self) {
        self.built = false;
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn rebuild(&mut self, source: &dyn SolidSource) {
        self.volumes = source
            .solid_volumes()
            .into_iter()
            .map(|v| v.expanded(self.margin))
            .collect();
        self.built = true;
        log::debug!("collision field rebuilt: {} volume(s)", self.volumes.len());
    }

    /// Would a sphere of `radius` at `center` intersect anything solid?
    pub fn test(&self, center: Vec3, radius: f32) -> bool {
        self.volumes
            .iter()
            .any(|v| v.intersects_sphere(center, radius))
    }
}

/// Collision-based strategy: a step that would push the player-radius sphere
/// into a solid volume is rejected outright, leaving the player at the last
/// valid position. The volume set is built lazily on first use — scene bounds
/// are not valid during construction.
pub struct CollisionValidator {
    field: CollisionField,
    radius: f32,
    probe_height: f32,
}

impl CollisionValidator {
    pub fn new(margin: f32, radius: f32) -> Self {
        Self {
            field: CollisionField::new(margin),
            radius,
            probe_height: 0.9,
        }
    }

    pub fn field_mut(&mut self) -> &mut CollisionField {
        &mut self.field
    }
}

impl MovementValidator for CollisionValidator {
    fn validate(&mut self, current: Vec3, candidate: Vec3, source: &dyn SolidSource) -> Vec3 {
        if !candidate.is_finite() {
            return current;
        }
        if !self.field.built {
            self.field.rebuild(source);
        }
        let probe = candidate + Vec3::UP * self.probe_height;
        if self.field.test(probe, self.radius) {
            current
        } else {
            candidate
        }
    }

    fn geometry_changed(&mut self) {
        self.field.mark_dirty();
    }
}

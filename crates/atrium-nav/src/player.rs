use atrium_geom::Vec3;

/// The single player rig. Position is the feet point on the walkable plane;
/// only the [`Navigator`](crate::Navigator) mutates it, everything else reads
/// a snapshot.
#[derive(Clone, Copy, Debug)]
pub struct PlayerState {
    pub pos: Vec3,
    pub height: f32,
}

impl PlayerState {
    pub fn new(spawn: Vec3) -> Self {
        Self {
            pos: spawn,
            height: 1.6,
        }
    }

    #[inline]
    pub fn eye_position(&self) -> Vec3 {
        self.pos + Vec3::UP * self.height
    }
}

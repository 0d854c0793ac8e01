use atrium_geom::Vec2;

use crate::config::{LayoutConfig, WingDir};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionKind {
    Hub,
    Corridor,
    Room,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    AlongX,
    AlongZ,
}

/// A bounded area of navigable space. Extents are navigable extents: the
/// interior wall margin was already removed when the map was built.
#[derive(Clone, Copy, Debug)]
pub struct Region {
    pub kind: RegionKind,
    pub center: Vec2,
    pub half: Vec2,
    pub axis: Axis,
}

impl Region {
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (p.x - self.center.x).abs() <= self.half.x && (p.z - self.center.z).abs() <= self.half.z
    }

    #[inline]
    pub fn clamp_into(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.center.x - self.half.x, self.center.x + self.half.x),
            p.z.clamp(self.center.z - self.half.z, self.center.z + self.half.z),
        )
    }
}

/// Per-wing routing data for points outside every region: the corridor strip
/// measured outward from the hub center.
#[derive(Clone, Copy, Debug)]
struct Strip {
    dir: WingDir,
    lateral_half: f32,
    near: f32,
    far: f32,
    room_idx: usize,
}

#[inline]
fn decompose(dir: WingDir, p: Vec2) -> (f32, f32) {
    match dir {
        WingDir::PosX => (p.x, p.z),
        WingDir::NegX => (-p.x, p.z),
        WingDir::PosZ => (p.z, p.x),
        WingDir::NegZ => (-p.z, p.x),
    }
}

#[inline]
fn compose(dir: WingDir, along: f32, lateral: f32) -> Vec2 {
    match dir {
        WingDir::PosX => Vec2::new(along, lateral),
        WingDir::NegX => Vec2::new(-along, lateral),
        WingDir::PosZ => Vec2::new(lateral, along),
        WingDir::NegZ => Vec2::new(lateral, -along),
    }
}

#[inline]
fn axis_of(dir: WingDir) -> Axis {
    match dir {
        WingDir::PosX | WingDir::NegX => Axis::AlongX,
        WingDir::PosZ | WingDir::NegZ => Axis::AlongZ,
    }
}

pub struct ZoneMap {
    // regions[0] is always the hub; corridors precede rooms so that iteration
    // order is also classification precedence.
    regions: Vec<Region>,
    strips: Vec<Strip>,
}

impl ZoneMap {
    pub fn from_config(cfg: &LayoutConfig) -> Self {
        let m = cfg.wall_margin.max(0.0);
        let hub_half = (cfg.hub.half_size - m).max(0.5);
        let lateral_half = (cfg.corridor.width * 0.5 - m).max(0.25);
        let room_half = (cfg.room.half_size - m).max(0.5);
        let near = hub_half;
        let far = hub_half + cfg.corridor.length;

        let mut regions = vec![Region {
            kind: RegionKind::Hub,
            center: Vec2::ZERO,
            half: Vec2::new(hub_half, hub_half),
            axis: Axis::AlongX,
        }];
        let mut rooms = Vec::new();
        let mut strips = Vec::new();
        for wing in &cfg.wings {
            let axis = axis_of(wing.dir);
            let corr_center = compose(wing.dir, (near + far) * 0.5, 0.0);
            let corr_half = match axis {
                Axis::AlongX => Vec2::new(cfg.corridor.length * 0.5, lateral_half),
                Axis::AlongZ => Vec2::new(lateral_half, cfg.corridor.length * 0.5),
            };
            regions.push(Region {
                kind: RegionKind::Corridor,
                center: corr_center,
                half: corr_half,
                axis,
            });
            rooms.push((
                wing.dir,
                Region {
                    kind: RegionKind::Room,
                    center: compose(wing.dir, far + room_half, 0.0),
                    half: Vec2::new(room_half, room_half),
                    axis,
                },
            ));
        }
        for (dir, room) in rooms {
            strips.push(Strip {
                dir,
                lateral_half,
                near,
                far,
                room_idx: regions.len(),
            });
            regions.push(room);
        }
        Self { regions, strips }
    }

    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[inline]
    pub fn hub(&self) -> &Region {
        &self.regions[0]
    }

    pub fn room_center(&self, dir: WingDir) -> Option<Vec2> {
        self.strips
            .iter()
            .find(|s| s.dir == dir)
            .map(|s| self.regions[s.room_idx].center)
    }

    /// Which region contains `p`. Precedence is fixed: Hub, then corridors,
    /// then rooms — ties at doorways always resolve toward the hub.
    pub fn classify(&self, p: Vec2) -> Option<&Region> {
        if !p.is_finite() {
            return None;
        }
        self.regions.iter().find(|r| r.contains(p))
    }

    /// Nearest valid point to `p`. A point already inside a region is
    /// returned unchanged; anything else is routed through the corridor strip
    /// it lies in, or pulled back into the hub as a fail-safe so a malformed
    /// hit point never strands the player outside all geometry.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        if !p.is_finite() {
            return self.hub().center;
        }
        if self.classify(p).is_some() {
            return p;
        }
        for strip in &self.strips {
            let (along, lateral) = decompose(strip.dir, p);
            if along > 0.0 && lateral.abs() <= strip.lateral_half {
                if along > strip.far {
                    // Past the corridor's end: the point belongs to the room
                    // at its terminus; clamp each axis to the room's extents.
                    return self.regions[strip.room_idx].clamp_into(p);
                }
                let along = along.clamp(strip.near, strip.far);
                let lateral = lateral.clamp(-strip.lateral_half, strip.lateral_half);
                return compose(strip.dir, along, lateral);
            }
        }
        self.hub().clamp_into(p)
    }
}

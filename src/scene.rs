use atrium_geom::{Aabb, Vec3};
use atrium_layout::{AnchorKind, LayoutConfig, ZoneMap};
use atrium_nav::SolidSource;
use atrium_overlay::{AnchorId, NodeId, OverlayContent, ScenePort};
use hashbrown::HashMap;

#[derive(Clone, Debug)]
pub struct AnchorEntity {
    pub id: AnchorId,
    pub name: String,
    pub kind: AnchorKind,
    pub pos: Vec3,
    pub hidden: bool,
}

/// Headless scene model: the anchors and decoration the excluded
/// scene-construction code would normally supply, plus the panel nodes the
/// overlay controller inserts. Doubles as the solid-geometry source for the
/// collision movement strategy.
pub struct SceneGraph {
    anchors: Vec<AnchorEntity>,
    // panel node -> world position it was inserted at
    panels: HashMap<NodeId, Vec3>,
    decor: Vec<Aabb>,
    /// Registered panels count as solid. Whether the player's own UI should
    /// block them is a layout choice, so it is explicit, never implied.
    collide_panels: bool,
    next_node: u64,
}

impl SceneGraph {
    /// Build anchors and decoration from the layout. Anchors are numbered in
    /// declaration order (hub first, then wings), which is also how content
    /// entries are keyed to them.
    pub fn from_layout(cfg: &LayoutConfig, zones: &ZoneMap, collide_panels: bool) -> Self {
        let mut anchors = Vec::new();
        let mut decor = Vec::new();
        let hub = zones.hub();
        for spec in &cfg.hub.anchors {
            anchors.push(AnchorEntity {
                id: AnchorId(anchors.len() as u32),
                name: spec.name.clone(),
                kind: spec.kind,
                pos: Vec3::new(
                    hub.center.x + spec.offset[0],
                    spec.height,
                    hub.center.z + spec.offset[1],
                ),
                hidden: false,
            });
        }
        for wing in &cfg.wings {
            let Some(room) = zones.room_center(wing.dir) else {
                continue;
            };
            for spec in &wing.anchors {
                anchors.push(AnchorEntity {
                    id: AnchorId(anchors.len() as u32),
                    name: spec.name.clone(),
                    kind: spec.kind,
                    pos: Vec3::new(room.x + spec.offset[0], spec.height, room.z + spec.offset[1]),
                    hidden: false,
                });
            }
            // A pedestal under each room's display keeps the collision
            // strategy honest without modeling full wall geometry.
            decor.push(Aabb::from_center_half(
                Vec3::new(room.x, 0.5, room.z + 2.5),
                Vec3::new(0.4, 0.5, 0.4),
            ));
        }
        for a in &anchors {
            log::debug!(
                "anchor {} '{}' ({:?}) at ({:.1},{:.1},{:.1})",
                a.id.0,
                a.name,
                a.kind,
                a.pos.x,
                a.pos.y,
                a.pos.z
            );
        }
        Self {
            anchors,
            panels: HashMap::new(),
            decor,
            collide_panels,
            next_node: 0,
        }
    }

    pub fn anchors(&self) -> &[AnchorEntity] {
        &self.anchors
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}

impl ScenePort for SceneGraph {
    fn anchor_position(&self, anchor: AnchorId) -> Option<Vec3> {
        self.anchors.get(anchor.0 as usize).map(|a| a.pos)
    }

    fn insert_panel(&mut self, anchor: AnchorId, content: &OverlayContent, at: Vec3) -> NodeId {
        self.next_node += 1;
        let node = NodeId(self.next_node);
        log::debug!(
            "panel {} inserted for anchor {} at ({:.1},{:.1},{:.1}): {}",
            node.0,
            anchor.0,
            at.x,
            at.y,
            at.z,
            content.title
        );
        self.panels.insert(node, at);
        node
    }

    fn remove_panel(&mut self, node: NodeId) {
        if self.panels.remove(&node).is_some() {
            log::debug!("panel {} removed", node.0);
        }
    }

    fn set_anchor_hidden(&mut self, anchor: AnchorId, hidden: bool) {
        if let Some(a) = self.anchors.get_mut(anchor.0 as usize) {
            a.hidden = hidden;
        }
    }
}

impl SolidSource for SceneGraph {
    fn solid_volumes(&self) -> Vec<Aabb> {
        let mut out = self.decor.clone();
        if self.collide_panels {
            // The volume reaches down to the floor: the panel plus its stand.
            out.extend(self.panels.values().map(|at| {
                Aabb::new(
                    Vec3::new(at.x - 0.65, 0.0, at.z - 0.05),
                    Vec3::new(at.x + 0.65, at.y + 0.4, at.z + 0.05),
                )
            }));
        }
        out
    }
}

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WingDir {
    PosX,
    NegX,
    PosZ,
    NegZ,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    Orb,
    Frame,
    Doorway,
}

impl Default for AnchorKind {
    fn default() -> Self {
        AnchorKind::Orb
    }
}

/// A fixed activation point placed relative to its owning region's center.
#[derive(Clone, Debug, Deserialize)]
pub struct AnchorSpec {
    pub name: String,
    #[serde(default)]
    pub kind: AnchorKind,
    /// Offset from the region center on the ground plane.
    #[serde(default)]
    pub offset: [f32; 2],
    #[serde(default = "default_anchor_height")]
    pub height: f32,
}

fn default_anchor_height() -> f32 {
    1.5
}

#[derive(Clone, Debug, Deserialize)]
pub struct WingConfig {
    pub dir: WingDir,
    pub name: String,
    #[serde(default, rename = "anchor")]
    pub anchors: Vec<AnchorSpec>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HubConfig {
    pub half_size: f32,
    #[serde(default, rename = "anchor")]
    pub anchors: Vec<AnchorSpec>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CorridorConfig {
    pub length: f32,
    pub width: f32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RoomConfig {
    pub half_size: f32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LayoutConfig {
    pub hub: HubConfig,
    pub corridor: CorridorConfig,
    pub room: RoomConfig,
    /// Interior margin keeping the player rig off walls. Subtracted from the
    /// physical extents when navigable regions are built.
    #[serde(default = "default_wall_margin")]
    pub wall_margin: f32,
    #[serde(default, rename = "wing")]
    pub wings: Vec<WingConfig>,
}

fn default_wall_margin() -> f32 {
    0.75
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let orb = |name: &str| AnchorSpec {
            name: name.to_string(),
            kind: AnchorKind::Orb,
            offset: [0.0, 0.0],
            height: default_anchor_height(),
        };
        Self {
            hub: HubConfig {
                half_size: 9.75,
                anchors: vec![
                    AnchorSpec {
                        name: "hub-north".to_string(),
                        kind: AnchorKind::Frame,
                        offset: [0.0, -6.0],
                        height: 1.8,
                    },
                    AnchorSpec {
                        name: "hub-south".to_string(),
                        kind: AnchorKind::Frame,
                        offset: [0.0, 6.0],
                        height: 1.8,
                    },
                ],
            },
            corridor: CorridorConfig {
                length: 14.0,
                width: 3.5,
            },
            room: RoomConfig { half_size: 6.75 },
            wall_margin: default_wall_margin(),
            wings: vec![
                WingConfig {
                    dir: WingDir::PosX,
                    name: "park".to_string(),
                    anchors: vec![orb("park-orb")],
                },
                WingConfig {
                    dir: WingDir::NegX,
                    name: "forest".to_string(),
                    anchors: vec![orb("forest-orb")],
                },
                WingConfig {
                    dir: WingDir::PosZ,
                    name: "city".to_string(),
                    anchors: vec![orb("city-orb")],
                },
                WingConfig {
                    dir: WingDir::NegZ,
                    name: "club".to_string(),
                    anchors: vec![orb("club-orb")],
                },
            ],
        }
    }
}

pub fn load_layout_from_path(path: &Path) -> Result<LayoutConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: LayoutConfig = toml::from_str(&s)?;
    Ok(cfg)
}

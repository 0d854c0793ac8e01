//! Static description of navigable space: a central hub, corridor wings, and
//! the themed rooms at their ends. Answers "which region contains this point"
//! and "pull this point back into bounds".
#![forbid(unsafe_code)]

mod config;
mod zones;

pub use config::{
    AnchorKind, AnchorSpec, LayoutConfig, WingConfig, WingDir, load_layout_from_path,
};
pub use zones::{Axis, Region, RegionKind, ZoneMap};

//! Transient content panels anchored to world positions: open on activation,
//! auto-close on a timer or after attention leaves, tear down idempotently.
#![forbid(unsafe_code)]

mod controller;
mod timer;

pub use controller::{
    AnchorId, AnchorVisualState, NodeId, OverlayConfig, OverlayContent, OverlayController,
    OverlayTiming, ScenePort,
};
pub use timer::{TimerHandle, TimerService};

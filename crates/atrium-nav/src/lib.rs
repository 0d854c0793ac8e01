//! Player movement: validating pointed-at targets against the layout (or the
//! collision field) and animating the rig toward them.
#![forbid(unsafe_code)]

mod navigator;
mod player;
mod validator;

pub use navigator::{MoveRequest, NavConfig, Navigator};
pub use player::PlayerState;
pub use validator::{
    CollisionField, CollisionValidator, EmptySource, MovementValidator, SolidSource,
    ZoneClampValidator,
};

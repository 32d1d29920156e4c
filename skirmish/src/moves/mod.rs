mod r#move;
mod move_target;
mod registry;

pub use r#move::{
    BattleMove,
    StatusEffectDescriptor,
};
pub use move_target::MoveTarget;
pub use registry::{
    LocalMoveRegistry,
    MoveRegistry,
};

mod battle_error;
mod validation_error;

pub use battle_error::BattleError;
pub use validation_error::ValidationError;

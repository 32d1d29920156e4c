mod battle_config;
mod tuning;

pub use battle_config::BattleConfig;
pub use tuning::{
    DamageFormula,
    Tuning,
};

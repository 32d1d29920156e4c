mod action;
mod battle_kind;
pub mod calculations;
mod context;
mod core_battle;
mod core_battle_actions;
mod core_battle_effects;
mod core_battle_logs;
mod engine;
mod events;
mod outcome;
mod participant;
mod reward;
mod speed_order;
mod state;
mod status;

pub use action::BattleAction;
pub use battle_kind::BattleKind;
pub use context::ResolutionContext;
pub use core_battle::{
    ActionReport,
    advance_turn,
    create_battle,
    finish_battle,
    resolve_action,
};
pub use core_battle_effects::{
    tick_participant,
    tick_status_effects,
};
pub use engine::{
    BattleEngine,
    BattleEngineBuilder,
    BattleEngineOptions,
};
pub use events::{
    BattleEvent,
    BattleEventSink,
    ChannelEventSink,
    NoopEventSink,
    ParticipantIdentity,
};
pub use outcome::{
    check_termination,
    flee_outcome,
};
pub use participant::{
    BattleParticipant,
    Combatant,
    MAX_KNOWN_MOVES,
    StatModifiers,
    Team,
};
pub use reward::{
    BattleReward,
    DropCandidate,
    RewardItem,
    RewardPayload,
    SpecialRewardCandidate,
    SpecialRewardKind,
    generate_reward_table,
    roll_drops,
    roll_rewards,
    roll_special_rewards,
};
pub use speed_order::{
    SpeedOrderable,
    compare_speed,
    turn_order,
};
pub use state::{
    BattleResult,
    BattleState,
    EndReason,
    Winner,
};
pub use status::{
    ModifiedStat,
    StatusApplication,
    StatusEffectInstance,
    StatusEffectKind,
};

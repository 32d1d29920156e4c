use thiserror::Error;

use crate::error::ValidationError;

/// An error rejecting a single engine operation.
///
/// Every variant is recoverable: the rejected call leaves the battle exactly as it was, so the
/// caller may correct the request and try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A battle is already active.
    #[error("a battle is already in progress")]
    AlreadyInProgress,
    /// No battle is active.
    #[error("no battle is active")]
    NoActiveBattle,
    /// The battle has already produced a result.
    #[error("battle has already ended")]
    BattleAlreadyEnded,
    /// The acting participant does not exist.
    #[error("participant {0} not found")]
    ParticipantNotFound(String),
    /// The acting participant exists but it is not their turn.
    #[error("it is not {0}'s turn")]
    OutOfTurn(String),
    /// The move registry has no move with the given ID.
    #[error("move {0} not found")]
    MoveNotFound(String),
    /// The participant does not know the move.
    #[error("{participant} does not know move {move_id}")]
    MoveNotKnown {
        participant: String,
        move_id: String,
    },
    /// The requested target does not exist.
    #[error("no valid target {0}")]
    NoValidTarget(String),
    /// The participant cannot pay for the move.
    #[error("{participant} needs {required} action points but has {available}")]
    InsufficientActionPoints {
        participant: String,
        required: u32,
        available: u32,
    },
    /// The battle does not allow fleeing.
    #[error("fleeing is not allowed in this battle")]
    FleeNotAllowed,
    /// The battle does not allow items.
    #[error("items are not allowed in this battle")]
    ItemsNotAllowed,
    /// The inventory has none of the item.
    #[error("item {0} is not available")]
    ItemNotAvailable(String),
    /// Battle input or tuning failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ValidationError),
}

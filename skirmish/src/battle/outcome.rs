use crate::battle::{
    BattleState,
    EndReason,
    Team,
    Winner,
};

/// Checks whether the battle is over.
///
/// A fainted participant loses. Otherwise, the battle is a draw once the turn cap is reached.
/// Fleeing ends the battle directly and is not detected here.
pub fn check_termination(state: &BattleState) -> Option<(Winner, EndReason)> {
    if state.player().fainted() {
        return Some((Winner::Opponent, EndReason::Defeat));
    }
    if state.opponent().fainted() {
        return Some((Winner::Player, EndReason::Victory));
    }
    if state.turn() >= state.turn_cap() {
        return Some((Winner::Draw, EndReason::Timeout));
    }
    None
}

/// The outcome of a successful flee by a participant on the given team.
pub fn flee_outcome(team: Team) -> (Winner, EndReason) {
    (Winner::from(team.opposite()), EndReason::Flee)
}

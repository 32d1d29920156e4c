use serde::{
    Deserialize,
    Serialize,
};

/// An action submitted by the participant whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleAction {
    /// Uses a known move.
    ///
    /// If no target is given, the move's target type decides.
    UseMove {
        participant: String,
        #[serde(rename = "move")]
        move_id: String,
        #[serde(default)]
        target: Option<String>,
    },
    /// Uses an item from the host's inventory. Costs no action points.
    ///
    /// If no target is given, the item is used on the participant using it.
    UseItem {
        participant: String,
        item: String,
        #[serde(default)]
        target: Option<String>,
    },
    /// Attempts to end the battle early.
    Flee { participant: String },
    /// Passes the turn to recover action points.
    SkipTurn { participant: String },
}

impl BattleAction {
    pub fn use_move<P, M>(participant: P, move_id: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self::UseMove {
            participant: participant.into(),
            move_id: move_id.into(),
            target: None,
        }
    }

    pub fn use_move_on<P, M, T>(participant: P, move_id: M, target: T) -> Self
    where
        P: Into<String>,
        M: Into<String>,
        T: Into<String>,
    {
        Self::UseMove {
            participant: participant.into(),
            move_id: move_id.into(),
            target: Some(target.into()),
        }
    }

    pub fn use_item<P, I>(participant: P, item: I) -> Self
    where
        P: Into<String>,
        I: Into<String>,
    {
        Self::UseItem {
            participant: participant.into(),
            item: item.into(),
            target: None,
        }
    }

    pub fn flee<P: Into<String>>(participant: P) -> Self {
        Self::Flee {
            participant: participant.into(),
        }
    }

    pub fn skip_turn<P: Into<String>>(participant: P) -> Self {
        Self::SkipTurn {
            participant: participant.into(),
        }
    }

    /// ID of the acting participant.
    pub fn participant(&self) -> &str {
        match self {
            Self::UseMove { participant, .. }
            | Self::UseItem { participant, .. }
            | Self::Flee { participant }
            | Self::SkipTurn { participant } => participant,
        }
    }
}

#[cfg(test)]
mod action_test {
    use crate::{
        battle::BattleAction,
        common::{
            test_deserialization,
            test_serialization,
        },
    };

    #[test]
    fn serializes_tagged() {
        test_serialization(
            BattleAction::use_move("pip", "tackle"),
            r#"{"type":"use_move","participant":"pip","move":"tackle","target":null}"#,
        );
        test_serialization(
            BattleAction::skip_turn("pip"),
            r#"{"type":"skip_turn","participant":"pip"}"#,
        );
    }

    #[test]
    fn deserializes_without_target() {
        test_deserialization(
            r#"{"type":"use_item","participant":"pip","item":"potion"}"#,
            BattleAction::use_item("pip", "potion"),
        );
        test_deserialization(
            r#"{"type":"use_move","participant":"pip","move":"growl","target":"rex"}"#,
            BattleAction::use_move_on("pip", "growl", "rex"),
        );
    }

    #[test]
    fn names_participant() {
        assert_eq!(BattleAction::flee("rex").participant(), "rex");
    }
}

use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The default target of a move.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveTarget {
    /// The participant on the opposing team.
    #[string = "Opponent"]
    #[default]
    Opponent,
    /// The user of the move.
    #[string = "Self"]
    #[alias = "User"]
    User,
}

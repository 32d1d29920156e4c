use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::StatusEffectKind,
    moves::MoveTarget,
};

/// Describes the status effect a move may inflict on its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffectDescriptor {
    /// Kind of effect.
    pub kind: StatusEffectKind,
    /// Percentage chance, from 0 to 100, that the effect is applied when the move hits.
    pub chance: f64,
    /// Number of full turn cycles the effect lasts.
    pub duration: u32,
    /// Whether reapplying the effect increases its intensity.
    #[serde(default)]
    pub stackable: bool,
}

/// A move that can be used in battle.
///
/// Moves are read-only data provided by a
/// [`MoveRegistry`][`crate::moves::MoveRegistry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleMove {
    pub id: String,
    pub name: String,
    /// Action points spent to use the move.
    #[serde(default)]
    pub cost: u32,
    /// Base power. Zero for moves that only apply status effects.
    #[serde(default)]
    pub power: u32,
    /// Percentage accuracy.
    ///
    /// If unset, the tuned base accuracy is used.
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub target: MoveTarget,
    #[serde(default)]
    pub status_effect: Option<StatusEffectDescriptor>,
}

impl BattleMove {
    /// Does the move deal damage?
    pub fn deals_damage(&self) -> bool {
        self.power > 0
    }
}

#[cfg(test)]
mod move_test {
    use pretty_assertions::assert_eq;

    use crate::{
        battle::StatusEffectKind,
        moves::{
            BattleMove,
            MoveTarget,
            StatusEffectDescriptor,
        },
    };

    #[test]
    fn deserializes_with_defaults() {
        let got = serde_json::from_str::<BattleMove>(
            r#"{
                "id": "tackle",
                "name": "Tackle",
                "power": 30
            }"#,
        )
        .unwrap();
        assert_eq!(
            got,
            BattleMove {
                id: "tackle".to_owned(),
                name: "Tackle".to_owned(),
                cost: 0,
                power: 30,
                accuracy: None,
                target: MoveTarget::Opponent,
                status_effect: None,
            }
        );
        assert!(got.deals_damage());
    }

    #[test]
    fn deserializes_status_effect() {
        let got = serde_json::from_str::<BattleMove>(
            r#"{
                "id": "toxic-spit",
                "name": "Toxic Spit",
                "cost": 15,
                "accuracy": 90,
                "status_effect": {
                    "kind": "Poisoned",
                    "chance": 100,
                    "duration": 3,
                    "stackable": true
                }
            }"#,
        )
        .unwrap();
        assert!(!got.deals_damage());
        assert_eq!(got.accuracy, Some(90.0));
        assert_eq!(
            got.status_effect,
            Some(StatusEffectDescriptor {
                kind: StatusEffectKind::Poisoned,
                chance: 100.0,
                duration: 3,
                stackable: true,
            })
        );
    }
}

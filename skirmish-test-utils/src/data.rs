use skirmish::{
    battle::{
        Combatant,
        StatusEffectKind,
    },
    items::{
        BattleItem,
        ItemEffect,
    },
    moves::{
        BattleMove,
        MoveTarget,
        StatusEffectDescriptor,
    },
};

/// A combatant with unremarkable stats that knows the common test moves.
pub fn combatant(id: &str, name: &str, speed: u32) -> Combatant {
    Combatant {
        id: id.to_owned(),
        name: name.to_owned(),
        max_health: 100,
        max_action_points: 30,
        attack: 20,
        defense: 10,
        speed,
        level: 5,
        moves: ["tackle", "ember", "toxic", "harden"]
            .map(String::from)
            .to_vec(),
    }
}

/// Moves used across integration tests.
pub fn test_moves() -> Vec<BattleMove> {
    Vec::from([
        BattleMove {
            id: "tackle".to_owned(),
            name: "Tackle".to_owned(),
            cost: 5,
            power: 30,
            accuracy: None,
            target: MoveTarget::Opponent,
            status_effect: None,
        },
        BattleMove {
            id: "ember".to_owned(),
            name: "Ember".to_owned(),
            cost: 8,
            power: 20,
            accuracy: Some(100.0),
            target: MoveTarget::Opponent,
            status_effect: Some(StatusEffectDescriptor {
                kind: StatusEffectKind::Burned,
                chance: 30.0,
                duration: 3,
                stackable: false,
            }),
        },
        BattleMove {
            id: "toxic".to_owned(),
            name: "Toxic".to_owned(),
            cost: 6,
            power: 0,
            accuracy: Some(90.0),
            target: MoveTarget::Opponent,
            status_effect: Some(StatusEffectDescriptor {
                kind: StatusEffectKind::Poisoned,
                chance: 100.0,
                duration: 3,
                stackable: true,
            }),
        },
        BattleMove {
            id: "harden".to_owned(),
            name: "Harden".to_owned(),
            cost: 4,
            power: 0,
            accuracy: Some(100.0),
            target: MoveTarget::User,
            status_effect: Some(StatusEffectDescriptor {
                kind: StatusEffectKind::Armored,
                chance: 100.0,
                duration: 2,
                stackable: true,
            }),
        },
        BattleMove {
            id: "whiff".to_owned(),
            name: "Whiff".to_owned(),
            cost: 1,
            power: 50,
            accuracy: Some(0.0),
            target: MoveTarget::Opponent,
            status_effect: None,
        },
    ])
}

/// Items used across integration tests.
pub fn test_items() -> Vec<BattleItem> {
    Vec::from([
        BattleItem::new("potion", "Potion", ItemEffect::Heal(20)),
        BattleItem::new("ether", "Ether", ItemEffect::RestoreActionPoints(10)),
        BattleItem::new(
            "antidote",
            "Antidote",
            ItemEffect::Cure(Some(StatusEffectKind::Poisoned)),
        ),
        BattleItem::new("panacea", "Panacea", ItemEffect::Cure(None)),
    ])
}

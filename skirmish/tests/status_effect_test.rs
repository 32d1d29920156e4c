#[cfg(test)]
mod status_effect_test {
    use pretty_assertions::assert_eq;
    use skirmish::{
        battle::{
            BattleAction,
            BattleEngine,
            BattleState,
            EndReason,
            StatusEffectInstance,
            StatusEffectKind,
            Winner,
        },
        config::{
            BattleConfig,
            Tuning,
        },
        moves::{
            BattleMove,
            MoveTarget,
            StatusEffectDescriptor,
        },
    };
    use skirmish_test_utils::{
        TestBattleBuilder,
        assert_new_messages_eq,
        combatant,
        get_controlled_rng_for_engine,
    };

    fn jinx(duration: u32) -> BattleMove {
        BattleMove {
            id: "jinx".to_owned(),
            name: "Jinx".to_owned(),
            cost: 2,
            power: 0,
            accuracy: Some(100.0),
            target: MoveTarget::Opponent,
            status_effect: Some(StatusEffectDescriptor {
                kind: StatusEffectKind::Slowed,
                chance: 100.0,
                duration,
                stackable: false,
            }),
        }
    }

    fn make_engine(tuning: Tuning, duration: u32) -> BattleEngine {
        TestBattleBuilder::new()
            .with_seed(0)
            .with_controlled_rng(true)
            .with_tuning(tuning)
            .with_move(jinx(duration))
            .build()
            .unwrap()
    }

    fn always_roll_low(engine: &mut BattleEngine, draws: usize) {
        get_controlled_rng_for_engine(engine)
            .unwrap()
            .insert_fake_unit_values_relative_to_sequence_count((1..=draws).map(|i| (i, 0.0)));
    }

    #[test]
    fn effect_with_one_turn_expires_after_one_cycle() {
        let mut engine = make_engine(Tuning::default(), 1);
        let mut pip = combatant("pip", "Pip", 10);
        pip.moves = Vec::from(["jinx".to_owned()]);
        engine
            .initialize_battle(pip, combatant("rex", "Rex", 5), BattleConfig::default())
            .unwrap();

        always_roll_low(&mut engine, 2);
        let report = engine
            .process_action(BattleAction::use_move("pip", "jinx"))
            .unwrap();
        assert_new_messages_eq(&report.entries, &["Pip used Jinx on Rex!", "Rex is now slowed!"]);
        let rex = engine.current_battle().unwrap().opponent();
        assert_eq!(
            rex.status_effects,
            Vec::from([StatusEffectInstance::new(StatusEffectKind::Slowed, 1)])
        );
        assert_eq!(rex.modifiers.speed, 0.5);

        let report = engine
            .process_action(BattleAction::skip_turn("rex"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &[
                "Rex rested and recovered 0 action points.",
                "Rex is no longer slowed.",
            ],
        );
        let rex = engine.current_battle().unwrap().opponent();
        assert!(rex.status_effects.is_empty());
        assert_eq!(rex.modifiers.speed, 1.0);
    }

    #[test]
    fn stackable_effect_intensifies_damage_over_time() {
        let mut engine = make_engine(Tuning::default(), 1);
        engine
            .initialize_battle(
                combatant("pip", "Pip", 10),
                combatant("rex", "Rex", 5),
                BattleConfig::default(),
            )
            .unwrap();

        always_roll_low(&mut engine, 2);
        let report = engine
            .process_action(BattleAction::use_move("pip", "toxic"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &["Pip used Toxic on Rex!", "Rex is now poisoned!"],
        );
        let report = engine
            .process_action(BattleAction::skip_turn("rex"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &[
                "Rex rested and recovered 0 action points.",
                "Rex took 10 damage from being poisoned.",
            ],
        );
        assert_eq!(report.entries[1].damage, Some(10));
        assert_eq!(report.entries[1].turn, 1);
        let rex = engine.current_battle().unwrap().opponent();
        assert_eq!(rex.health, 90);
        assert_eq!(rex.status_effects[0].turns_remaining, 2);

        always_roll_low(&mut engine, 2);
        let report = engine
            .process_action(BattleAction::use_move("pip", "toxic"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &[
                "Pip used Toxic on Rex!",
                "Rex is even more poisoned (intensity 2)!",
            ],
        );
        let rex = engine.current_battle().unwrap().opponent();
        assert_eq!(
            rex.status_effects,
            Vec::from([StatusEffectInstance {
                kind: StatusEffectKind::Poisoned,
                turns_remaining: 3,
                intensity: 2,
            }])
        );

        let report = engine
            .process_action(BattleAction::skip_turn("rex"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &[
                "Rex rested and recovered 0 action points.",
                "Rex took 20 damage from being poisoned.",
            ],
        );
        assert_eq!(engine.current_battle().unwrap().opponent().health, 70);
    }

    #[test]
    fn non_stackable_effect_is_not_reapplied() {
        let mut engine = make_engine(Tuning::default(), 1);
        let mut rex = combatant("rex", "Rex", 5);
        rex.max_health = 300;
        engine
            .initialize_battle(combatant("pip", "Pip", 10), rex, BattleConfig::default())
            .unwrap();

        // Accuracy, no critical hit, status chance.
        get_controlled_rng_for_engine(&mut engine)
            .unwrap()
            .insert_fake_unit_values_relative_to_sequence_count([(1, 0.0), (2, 0.99), (3, 0.0)]);
        let report = engine
            .process_action(BattleAction::use_move("pip", "ember"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &["Pip used Ember on Rex for 52 damage!", "Rex is now burned!"],
        );
        assert_eq!(
            engine.current_battle().unwrap().opponent().modifiers.attack,
            0.75
        );

        let report = engine
            .process_action(BattleAction::skip_turn("rex"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &[
                "Rex rested and recovered 0 action points.",
                "Rex took 30 damage from being burned.",
            ],
        );

        get_controlled_rng_for_engine(&mut engine)
            .unwrap()
            .insert_fake_unit_values_relative_to_sequence_count([(1, 0.0), (2, 0.99), (3, 0.0)]);
        let report = engine
            .process_action(BattleAction::use_move("pip", "ember"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &["Pip used Ember on Rex for 52 damage!", "Rex is already burned."],
        );
        let rex = engine.current_battle().unwrap().opponent();
        assert_eq!(rex.health, 166);
        assert_eq!(
            rex.status_effects,
            Vec::from([StatusEffectInstance {
                kind: StatusEffectKind::Burned,
                turns_remaining: 2,
                intensity: 1,
            }])
        );
    }

    #[test]
    fn damage_over_time_can_end_battle() {
        let mut engine = make_engine(
            Tuning {
                status_damage_percent: 100.0,
                ..Default::default()
            },
            1,
        );
        engine
            .initialize_battle(
                combatant("pip", "Pip", 10),
                combatant("rex", "Rex", 5),
                BattleConfig::default(),
            )
            .unwrap();

        always_roll_low(&mut engine, 2);
        engine
            .process_action(BattleAction::use_move("pip", "toxic"))
            .unwrap();
        let report = engine
            .process_action(BattleAction::skip_turn("rex"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &[
                "Rex rested and recovered 0 action points.",
                "Rex took 100 damage from being poisoned.",
                "Rex fainted!",
                "Pip won the battle (victory).",
            ],
        );
        let result = report.result.unwrap();
        assert_eq!(result.winner, Winner::Player);
        assert_eq!(result.end_reason, EndReason::Victory);
        assert_eq!(result.turns, 1);
    }

    #[test]
    fn turn_order_ignores_speed_modifiers() {
        let mut engine = make_engine(Tuning::default(), 3);
        let mut rex = combatant("rex", "Rex", 8);
        rex.moves = Vec::from(["jinx".to_owned()]);
        engine
            .initialize_battle(combatant("pip", "Pip", 10), rex, BattleConfig::default())
            .unwrap();

        engine.process_action(BattleAction::skip_turn("pip")).unwrap();
        always_roll_low(&mut engine, 2);
        engine
            .process_action(BattleAction::use_move("rex", "jinx"))
            .unwrap();

        let state = engine.current_battle().unwrap();
        assert_eq!(state.player().effective_speed(), 5.0);
        assert_eq!(state.turn_order(), [0, 1]);
        assert_eq!(state.current_participant().id, "pip");
        assert_eq!(state.player().status_effects[0].turns_remaining, 2);
    }

    #[test]
    fn adjacent_effects_expiring_together_are_all_removed() {
        let mut engine = make_engine(Tuning::default(), 1);
        engine
            .initialize_battle(
                combatant("pip", "Pip", 10),
                combatant("rex", "Rex", 5),
                BattleConfig::default(),
            )
            .unwrap();
        let mut saved = serde_json::to_value(engine.current_battle().unwrap()).unwrap();
        saved["participants"][1]["status_effects"] = serde_json::to_value(Vec::from([
            StatusEffectInstance::new(StatusEffectKind::Poisoned, 1),
            StatusEffectInstance::new(StatusEffectKind::Slowed, 1),
            StatusEffectInstance::new(StatusEffectKind::Burned, 2),
        ]))
        .unwrap();
        engine.reset();
        engine
            .restore(serde_json::from_value::<BattleState>(saved).unwrap())
            .unwrap();

        engine.process_action(BattleAction::skip_turn("pip")).unwrap();
        let report = engine
            .process_action(BattleAction::skip_turn("rex"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &[
                "Rex rested and recovered 0 action points.",
                "Rex took 10 damage from being poisoned.",
                "Rex is no longer poisoned.",
                "Rex is no longer slowed.",
                "Rex took 10 damage from being burned.",
            ],
        );
        let rex = engine.current_battle().unwrap().opponent();
        assert_eq!(rex.health, 80);
        assert_eq!(
            rex.status_effects,
            Vec::from([StatusEffectInstance {
                kind: StatusEffectKind::Burned,
                turns_remaining: 1,
                intensity: 1,
            }])
        );
        assert_eq!(rex.modifiers.speed, 1.0);
    }
}

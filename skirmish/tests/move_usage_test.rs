#[cfg(test)]
mod move_usage_test {
    use pretty_assertions::assert_eq;
    use skirmish::{
        battle::{
            BattleAction,
            BattleEngine,
            Combatant,
        },
        config::{
            BattleConfig,
            Tuning,
        },
        error::BattleError,
    };
    use skirmish_test_utils::{
        TestBattleBuilder,
        assert_error_message,
        assert_new_messages_eq,
        combatant,
        get_controlled_rng_for_engine,
    };

    fn make_engine(seed: u64, tuning: Tuning) -> BattleEngine {
        TestBattleBuilder::new()
            .with_seed(seed)
            .with_controlled_rng(true)
            .with_tuning(tuning)
            .build()
            .unwrap()
    }

    fn start(engine: &mut BattleEngine, pip: Combatant, rex: Combatant) {
        engine
            .initialize_battle(pip, rex, BattleConfig::default())
            .unwrap();
    }

    #[test]
    fn always_deals_at_least_one_damage() {
        let mut engine = make_engine(0, Tuning::default());
        let mut rex = combatant("rex", "Rex", 5);
        rex.defense = 500;
        start(&mut engine, combatant("pip", "Pip", 10), rex);
        get_controlled_rng_for_engine(&mut engine)
            .unwrap()
            .insert_fake_unit_values_relative_to_sequence_count([(1, 0.0), (2, 0.99)]);

        let report = engine
            .process_action(BattleAction::use_move("pip", "tackle"))
            .unwrap();
        assert_new_messages_eq(&report.entries, &["Pip used Tackle on Rex for 1 damage!"]);
        assert_eq!(engine.current_battle().unwrap().opponent().health, 99);
    }

    #[test]
    fn guaranteed_critical_multiplies_damage() {
        let mut engine = make_engine(
            0,
            Tuning {
                critical_hit_chance: 100.0,
                ..Default::default()
            },
        );
        start(
            &mut engine,
            combatant("pip", "Pip", 10),
            combatant("rex", "Rex", 5),
        );
        get_controlled_rng_for_engine(&mut engine)
            .unwrap()
            .insert_fake_unit_values_relative_to_sequence_count([(1, 0.0), (2, 0.9999)]);

        let report = engine
            .process_action(BattleAction::use_move("pip", "tackle"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &["Pip used Tackle on Rex for 93 damage! A critical hit!"],
        );
        assert_eq!(report.entries[0].damage, Some(93));
        assert_eq!(engine.current_battle().unwrap().opponent().health, 7);
    }

    #[test]
    fn zero_accuracy_never_hits() {
        let mut engine = make_engine(12345, Tuning::default());
        let mut pip = combatant("pip", "Pip", 10);
        pip.moves = Vec::from(["whiff".to_owned()]);
        start(&mut engine, pip, combatant("rex", "Rex", 5));

        for _ in 0..20 {
            let report = engine
                .process_action(BattleAction::use_move("pip", "whiff"))
                .unwrap();
            assert_new_messages_eq(&report.entries, &["Pip used Whiff, but it missed!"]);
            engine.process_action(BattleAction::skip_turn("rex")).unwrap();
        }
        let state = engine.current_battle().unwrap();
        assert_eq!(state.opponent().health, 100);
        // Missed moves are not refunded.
        assert_eq!(state.player().action_points, 10);
    }

    #[test]
    fn miss_consumes_only_accuracy_roll() {
        let mut engine = make_engine(0, Tuning::default());
        start(
            &mut engine,
            combatant("pip", "Pip", 10),
            combatant("rex", "Rex", 5),
        );
        let rng = get_controlled_rng_for_engine(&mut engine).unwrap();
        let before = rng.sequence_count();
        rng.insert_fake_unit_values_relative_to_sequence_count([(1, 0.99)]);

        engine
            .process_action(BattleAction::use_move("pip", "tackle"))
            .unwrap();
        let rng = get_controlled_rng_for_engine(&mut engine).unwrap();
        assert_eq!(rng.sequence_count(), before + 1);
        let state = engine.current_battle().unwrap();
        assert_eq!(state.opponent().health, 100);
        assert_eq!(state.player().action_points, 25);
    }

    #[test]
    fn self_targeted_move_applies_to_user() {
        let mut engine = make_engine(0, Tuning::default());
        start(
            &mut engine,
            combatant("pip", "Pip", 10),
            combatant("rex", "Rex", 5),
        );
        get_controlled_rng_for_engine(&mut engine)
            .unwrap()
            .insert_fake_unit_values_relative_to_sequence_count([(1, 0.5), (2, 0.5)]);

        let report = engine
            .process_action(BattleAction::use_move("pip", "harden"))
            .unwrap();
        assert_new_messages_eq(&report.entries, &["Pip used Harden!", "Pip is now armored!"]);
        let state = engine.current_battle().unwrap();
        assert_eq!(state.player().modifiers.defense, 1.5);
        assert_eq!(state.opponent().modifiers.defense, 1.0);
    }

    #[test]
    fn skip_turn_restores_up_to_maximum() {
        let mut engine = make_engine(0, Tuning::default());
        start(
            &mut engine,
            combatant("pip", "Pip", 10),
            combatant("rex", "Rex", 5),
        );
        get_controlled_rng_for_engine(&mut engine)
            .unwrap()
            .insert_fake_unit_values_relative_to_sequence_count([(1, 0.0), (2, 0.99)]);
        engine
            .process_action(BattleAction::use_move("pip", "tackle"))
            .unwrap();
        engine.process_action(BattleAction::skip_turn("rex")).unwrap();
        assert_eq!(engine.current_battle().unwrap().player().action_points, 25);

        let report = engine
            .process_action(BattleAction::skip_turn("pip"))
            .unwrap();
        assert_new_messages_eq(
            &report.entries,
            &["Pip rested and recovered 5 action points."],
        );
        assert_eq!(engine.current_battle().unwrap().player().action_points, 30);
    }

    #[test]
    fn rejects_invalid_moves_without_changes() {
        let mut engine = make_engine(0, Tuning::default());
        let mut pip = combatant("pip", "Pip", 10);
        pip.max_action_points = 3;
        pip.moves = ["tackle", "whiff", "mystery"].map(String::from).to_vec();
        start(&mut engine, pip, combatant("rex", "Rex", 5));

        let before = engine.current_battle().unwrap().clone();
        let count = get_controlled_rng_for_engine(&mut engine)
            .unwrap()
            .sequence_count();

        assert_error_message(
            engine.process_action(BattleAction::use_move("ghost", "tackle")),
            "participant ghost not found",
        );
        assert_error_message(
            engine.process_action(BattleAction::skip_turn("rex")),
            "it is not rex's turn",
        );
        assert_error_message(
            engine.process_action(BattleAction::use_move("pip", "ember")),
            "pip does not know move ember",
        );
        assert_error_message(
            engine.process_action(BattleAction::use_move("pip", "mystery")),
            "move mystery not found",
        );
        assert_eq!(
            engine.process_action(BattleAction::use_move("pip", "tackle")),
            Err(BattleError::InsufficientActionPoints {
                participant: "pip".to_owned(),
                required: 5,
                available: 3,
            })
        );
        assert_error_message(
            engine.process_action(BattleAction::use_move_on("pip", "whiff", "ghost")),
            "no valid target ghost",
        );

        assert_eq!(engine.current_battle(), Some(&before));
        assert_eq!(
            get_controlled_rng_for_engine(&mut engine)
                .unwrap()
                .sequence_count(),
            count
        );
    }
}

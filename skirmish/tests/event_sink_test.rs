#[cfg(test)]
mod event_sink_test {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use skirmish::{
        battle::{
            BattleAction,
            BattleEvent,
            BattleKind,
            ChannelEventSink,
            EndReason,
            ParticipantIdentity,
            Team,
        },
        config::BattleConfig,
    };
    use skirmish_test_utils::{
        FailingEventSink,
        RecordingEventSink,
        TestBattleBuilder,
        combatant,
        get_controlled_rng_for_engine,
    };

    #[test]
    fn announces_start_and_end() {
        let sink = RecordingEventSink::new();
        let mut engine = TestBattleBuilder::new()
            .with_seed(0)
            .with_controlled_rng(true)
            .with_event_sink(sink.clone())
            .build()
            .unwrap();
        let id = engine
            .initialize_battle(
                combatant("pip", "Pip", 10),
                combatant("rex", "Rex", 5),
                BattleConfig::default(),
            )
            .unwrap()
            .id();
        assert_eq!(
            sink.events(),
            Vec::from([BattleEvent::Started {
                battle: id,
                kind: BattleKind::Wild,
                participants: Vec::from([
                    ParticipantIdentity {
                        id: "pip".to_owned(),
                        name: "Pip".to_owned(),
                        team: Team::Player,
                    },
                    ParticipantIdentity {
                        id: "rex".to_owned(),
                        name: "Rex".to_owned(),
                        team: Team::Opponent,
                    },
                ]),
            }])
        );

        get_controlled_rng_for_engine(&mut engine)
            .unwrap()
            .insert_fake_unit_values_relative_to_sequence_count([(1, 0.0)]);
        let result = engine
            .process_action(BattleAction::flee("pip"))
            .unwrap()
            .result
            .unwrap();
        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            BattleEvent::Ended {
                battle: id,
                result,
            }
        );
    }

    #[test]
    fn delivery_failure_does_not_affect_battle() {
        let mut engine = TestBattleBuilder::new()
            .with_seed(0)
            .with_event_sink(FailingEventSink)
            .build()
            .unwrap();
        engine
            .initialize_battle(
                combatant("pip", "Pip", 10),
                combatant("rex", "Rex", 5),
                BattleConfig::default(),
            )
            .unwrap();
        let result = engine.shutdown().unwrap();
        assert_eq!(result.end_reason, EndReason::Timeout);
        assert!(engine.take_finished_battle().is_some());
    }

    #[test]
    fn channel_receives_events() {
        let (sink, mut rx) = ChannelEventSink::new();
        let mut engine = TestBattleBuilder::new()
            .with_event_sink(sink)
            .build()
            .unwrap();
        engine
            .initialize_battle(
                combatant("pip", "Pip", 10),
                combatant("rex", "Rex", 5),
                BattleConfig::default(),
            )
            .unwrap();
        engine.shutdown();
        assert_matches!(rx.try_recv(), Ok(BattleEvent::Started { .. }));
        assert_matches!(rx.try_recv(), Ok(BattleEvent::Ended { .. }));
        assert!(rx.try_recv().is_err());
    }
}

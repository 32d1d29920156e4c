use skirmish::log::BattleLogEntry;

/// [`assert`]s that the messages of the given log entries match exactly.
#[track_caller]
pub fn assert_new_messages_eq(entries: &[BattleLogEntry], expected: &[&str]) {
    let got = entries
        .iter()
        .map(|entry| entry.message.as_str())
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, expected);
}

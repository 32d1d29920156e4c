use skirmish::error::BattleError;

/// [`assert`]s that the result is a [`BattleError`] with the given message.
#[track_caller]
pub fn assert_error_message<T>(result: Result<T, BattleError>, message: &str) {
    match result {
        Ok(_) => panic!("expected error \"{message}\", got Ok"),
        Err(err) => pretty_assertions::assert_eq!(err.to_string(), message),
    }
}

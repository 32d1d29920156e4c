use std::fmt::Display;

use thiserror::Error;

/// An error resulting from some validation process.
///
/// Collects every problem found instead of stopping at the first one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Checks if the problem list is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Records a new problem.
    pub fn add<S>(&mut self, problem: S)
    where
        S: Into<String>,
    {
        self.problems.push(problem.into());
    }

    /// Converts the collected problems into a result, succeeding if there were none.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.problems.join("; "))
    }
}

impl<S> FromIterator<S> for ValidationError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}

impl<S> Extend<S> for ValidationError
where
    S: Into<String>,
{
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.problems.extend(iter.into_iter().map(|s| s.into()));
    }
}

#[cfg(test)]
mod validation_error_test {
    use crate::error::ValidationError;

    #[test]
    fn joins_problems_in_message() {
        let error = ValidationError::from_iter(["turn cap is zero", "max health is zero"]);
        assert_eq!(
            error.to_string(),
            "validation failed: turn cap is zero; max health is zero"
        );
    }

    #[test]
    fn empty_error_converts_to_ok() {
        assert_eq!(ValidationError::default().into_result(), Ok(()));
        let mut error = ValidationError::default();
        error.add("bad");
        assert!(error.into_result().is_err());
    }
}

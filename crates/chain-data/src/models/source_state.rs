use crate::errors::SourceError;

/// Settlement state of one asynchronous data source.
///
/// Every category source starts out `Pending` and settles exactly once per
/// refresh cycle, either `Resolved` with its data or `Failed` with the error
/// message. Consumers that only care about "data or nothing" use
/// [`value`](Self::value); the pending/failed distinction is kept for
/// availability gating and degradation reporting.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SourceState<T> {
    /// The source has not settled yet.
    #[default]
    Pending,

    /// The source settled successfully.
    Resolved(T),

    /// The source settled with a failure.
    Failed(String),
}

impl<T> SourceState<T> {
    /// Build a settled state from a source result.
    pub fn from_result(result: Result<T, SourceError>) -> Self {
        match result {
            Ok(value) => Self::Resolved(value),
            Err(error) => Self::Failed(error.to_string()),
        }
    }

    /// Returns the resolved value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true once the source has settled (resolved or failed).
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns true when the source settled with a failure.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

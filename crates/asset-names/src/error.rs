use thiserror::Error;

/// Failures while building or running an affix pattern.
///
/// None of these reach the callers of the formatters: a pattern that cannot be
/// built or run behaves as one that never matches.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("capture token is empty")]
    EmptyToken,

    #[error("failed to compile pattern for capture token {token:?}")]
    Compile {
        token: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("pattern failed while matching")]
    Match {
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

use thiserror::Error;

/// Errors produced while resolving a URL.
///
/// These never escape [`crate::MediaResolver::process_url`]; the orchestrator
/// folds them into the failure envelope of `UnifiedResult`.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Client(#[from] socialdown::SocialdownError),

    /// Provider responded but the payload fails a transform precondition.
    /// Carries the provider's own error message when one was present.
    #[error("{0}")]
    Transform(String),
}

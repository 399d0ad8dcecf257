use thiserror::Error;

/// Failure modes of remote resolution. Mock resolution never fails.
///
/// Nothing here is retried or recovered internally: every error propagates to
/// the caller as-is, and the system stays ready for the next request. The UI
/// renders the `Display` text and retries by resubmission.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The network call could not be completed at all (DNS failure, refused
    /// connection, transport-level timeout).
    #[error("scoring request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The remote endpoint answered with a non-success status. The body is
    /// not parsed on failure.
    #[error("scoring endpoint returned HTTP {status}")]
    RemoteStatus { status: u16 },

    /// The response body was not a valid prediction payload.
    #[error("could not decode scoring response: {0}")]
    Decode(#[source] reqwest::Error),
}

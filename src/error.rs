//! Errors surfaced by an invocation.
//!
//! Nothing here is caught or translated: the handler returns these to the
//! Lambda runtime, which reports them as a failed invocation.

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("SDK version unavailable: {0}")]
    SdkVersionUnavailable(String),
}

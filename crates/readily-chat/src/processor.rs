use async_trait::async_trait;
use readily_core::ReadilyResult;
use readily_session::SessionContext;

/// Anything that can answer chat messages against a session context.
///
/// The gateway holds the session lock while `process` runs, so an
/// implementation sees a consistent context for the whole message.
#[async_trait]
pub trait MessageProcessor: Send + Sync {
    /// Text sent to a client when its session is created, and as the reply
    /// to `help` or anything unrecognized.
    fn welcome_message(&self) -> &str;

    /// Answers one message. User input errors are returned as `Err` values
    /// for which [`ReadilyError::is_user_error`](readily_core::ReadilyError::is_user_error)
    /// holds; the context is left untouched in that case.
    async fn process(&self, context: &mut SessionContext, message: &str) -> ReadilyResult<String>;
}

//! AWS error rendering
//!
//! `SdkError`'s Display is a stub ("service error"); the useful code and
//! message live in the operation error's metadata. Every fetcher routes
//! its failures through [`api_error`] so the report's error line carries
//! the real reason.

use anyhow::anyhow;
use aws_sdk_ec2::error::{ProvideErrorMetadata, SdkError};

/// Convert a failed SDK call into the error reported to the user.
///
/// Service errors (the API answered with a failure) render as
/// `failed to <action>: <code>: <message>`. Transport failures
/// (connection, timeout, response construction) keep their own source
/// chain under the action context.
pub fn api_error<E, R>(action: &str, err: SdkError<E, R>) -> anyhow::Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    if let Some(service) = err.as_service_error() {
        let line = service_line(action, service.meta().code(), service.meta().message());
        return anyhow!(line);
    }
    anyhow::Error::new(err).context(format!("failed to {action}"))
}

/// One-line description of a failed service call.
fn service_line(action: &str, code: Option<&str>, message: Option<&str>) -> String {
    format!(
        "failed to {action}: {}: {}",
        code.unwrap_or("UnknownError"),
        message.unwrap_or("no message provided"),
    )
}

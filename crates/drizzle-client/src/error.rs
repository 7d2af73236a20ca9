//! Error hierarchy for drizzle-client.
//!
//! Follows the "canonical error struct" pattern: a public struct wrapping a
//! `pub(crate)` kind enum, with `is_xxx()` predicates instead of an exposed
//! `ErrorKind` so variants can be added without breaking changes.

use thiserror::Error;

/// Root error type for the connection manager.
///
/// Connect failures are deliberately coarse: every non-success outcome of the
/// native handshake collapses into a single connect error kind carrying only
/// the native message text. Retry and reconnect policy belongs to the caller.
///
/// # Example
///
/// ```rust,ignore
/// use drizzle_client::ClientError;
///
/// fn handle_error(err: ClientError) {
///     if err.is_connect() {
///         eprintln!("handshake failed: {err}");
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[error("{kind}")]
pub struct ClientError {
    kind: ErrorKind,
}

/// Internal error classification.
#[derive(Error, Debug)]
#[non_exhaustive]
pub(crate) enum ErrorKind {
    /// The native connect/handshake call did not return success.
    #[error("connection failed: {0}")]
    Connect(String),

    /// `close` was called on a connection that is already closed.
    #[error("closing a closed connection")]
    ClosedConnection,

    /// Connect options could not be resolved (bad URL, bad addressing).
    #[error("invalid connection options: {0}")]
    Options(String),
}

impl ClientError {
    /// Create a coarse connect failure from the native error text.
    #[must_use]
    pub fn connect(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Connect(message.into()),
        }
    }

    /// Create the strict double-close usage error.
    #[must_use]
    pub const fn closed_connection() -> Self {
        Self {
            kind: ErrorKind::ClosedConnection,
        }
    }

    /// Create an invalid-options error.
    #[must_use]
    pub fn options(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Options(message.into()),
        }
    }

    /// True if this error came from the native connect/handshake.
    #[must_use]
    pub const fn is_connect(&self) -> bool {
        matches!(self.kind, ErrorKind::Connect(_))
    }

    /// True if this error is the double-close usage error.
    #[must_use]
    pub const fn is_closed_connection(&self) -> bool {
        matches!(self.kind, ErrorKind::ClosedConnection)
    }

    /// True if this error came from option resolution.
    #[must_use]
    pub const fn is_options(&self) -> bool {
        matches!(self.kind, ErrorKind::Options(_))
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::options(format!("invalid URL: {err}"))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_error_display() {
        let err = ClientError::connect("handshake refused");
        assert!(err.is_connect());
        assert_eq!(err.to_string(), "connection failed: handshake refused");
    }

    #[test]
    fn test_closed_connection_message() {
        let err = ClientError::closed_connection();
        assert!(err.is_closed_connection());
        assert!(!err.is_connect());
        assert_eq!(err.to_string(), "closing a closed connection");
    }

    #[test]
    fn test_options_error_from_url() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = ClientError::from(parse_err);
        assert!(err.is_options());
    }
}

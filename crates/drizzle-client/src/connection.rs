//! Connection lifecycle.
//!
//! A [`Connection`] is either fully open (live native session) or fully
//! closed; no partial state is observable. Establishment and construction
//! are one step: [`Connection::open`] performs the synchronous handshake and
//! only returns an object on success. Closed is terminal — a closed
//! connection never reopens, a new one must be constructed instead.

use std::fmt;

use crate::driver::{Driver, Session};
use crate::error::{ClientError, Result};
use crate::options::{ConnectOptions, Endpoint};

/// One logical link to a database server.
///
/// Single-threaded synchronous model: the native handle is not assumed
/// thread-safe, so a `Connection` must not be shared across threads without
/// external synchronization. Use one connection per thread or task.
pub struct Connection {
    /// `Some` is the whole open/closed state; no separate flag exists.
    session: Option<Box<dyn Session>>,
    endpoint: Endpoint,
}

impl Connection {
    /// Establish a connection: configure the native handle from `opts` and
    /// perform the handshake, blocking until it completes or fails.
    ///
    /// On failure no object is produced; the coarse connect error is the
    /// only artifact. Nothing is retried.
    pub fn open<D: Driver + ?Sized>(driver: &D, opts: &ConnectOptions) -> Result<Self> {
        let endpoint = opts.endpoint();
        let session = driver.connect(opts)?;
        Ok(Self {
            session: Some(session),
            endpoint,
        })
    }

    /// True while the underlying session is live.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Logical negation of [`is_open`](Self::is_open), computed on read.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        !self.is_open()
    }

    /// The addressing mode this connection was established with.
    /// Immutable for the lifetime of the object.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Terminate the session and release the native handle.
    ///
    /// Strict contract: calling `close` on an already-closed connection is a
    /// usage error, not a no-op, and leaves the state unchanged.
    pub fn close(&mut self) -> Result<()> {
        match self.session.take() {
            Some(mut session) => session.shutdown(),
            None => Err(ClientError::closed_connection()),
        }
    }
}

impl Drop for Connection {
    /// Scoped-resource guarantee: an open connection is closed before the
    /// memory is reclaimed. No caller is positioned to observe a failure
    /// here, so a shutdown error is swallowed.
    fn drop(&mut self) {
        if let Some(mut session) = self.session.take() {
            if let Err(err) = session.shutdown() {
                tracing::debug!(%err, "implicit close failed");
            }
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("open", &self.is_open())
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl fmt::Display for Connection {
    /// Diagnostic rendering, not machine-parseable: resolved address and a
    /// per-instance identity token when open, token and closed marker
    /// otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = std::ptr::from_ref(self) as usize;
        if self.is_open() {
            write!(
                f,
                "<drizzle connection open to '{}' at {token:x}>",
                self.endpoint
            )
        } else {
            write!(f, "<drizzle connection closed at {token:x}>")
        }
    }
}

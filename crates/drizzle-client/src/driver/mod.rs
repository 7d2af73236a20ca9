//! The seam between connection lifecycle and the native client library.
//!
//! The connection manager never speaks the wire protocol itself. A [`Driver`]
//! performs the staged handle configuration (addressing, auth, database,
//! capability flags, connect timeout) and the synchronous handshake; the
//! [`Session`] it returns is the live native handle, opaque to everything
//! above this module.

pub mod mysql;

pub use mysql::MysqlDriver;

use crate::error::Result;
use crate::options::ConnectOptions;

/// A live native session handle.
///
/// Not assumed thread-safe: callers needing concurrency must use one session
/// per thread or synchronize externally.
pub trait Session: Send {
    /// Terminate the underlying network session and release the handle.
    ///
    /// Called exactly once per open session; the owning connection guards
    /// against a second call.
    fn shutdown(&mut self) -> Result<()>;
}

/// Factory for native sessions.
pub trait Driver {
    /// Configure a native handle from `opts` and perform the synchronous
    /// connect/handshake, blocking the calling thread for its full duration.
    ///
    /// Any non-success outcome of the handshake collapses into the single
    /// coarse connect error kind.
    fn connect(&self, opts: &ConnectOptions) -> Result<Box<dyn Session>>;
}

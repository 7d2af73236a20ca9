//! Connection lifecycle manager over the MySQL native client.
//!
//! This crate owns exactly one concern: establishing, closing, and reporting
//! the state of a single logical connection to a MySQL/Drizzle-compatible
//! server over TCP or a local domain socket. Everything protocol-shaped —
//! wire framing, the authentication handshake, charset negotiation, query
//! execution, result decoding — is delegated to the native client behind the
//! [`driver::Driver`] seam.
//!
//! # Features
//!
//! - Two-state lifecycle: fully open or fully closed, nothing in between
//! - Strict close contract: closing a closed connection is a usage error
//! - Scoped-resource teardown on drop, with errors swallowed
//! - Unix socket addressing with exclusive precedence over TCP host/port
//!
//! # Example
//!
//! ```rust,ignore
//! use drizzle_client::{ConnectOptions, Connection, MysqlDriver};
//!
//! let opts = ConnectOptions::new().host("localhost").user("root");
//! let mut conn = Connection::open(&MysqlDriver::new(), &opts)?;
//! assert!(conn.is_open());
//! conn.close()?;
//! ```
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod connection;
pub mod driver;
pub mod error;
pub mod options;

// Re-export main types for convenience
pub use connection::Connection;
pub use driver::{Driver, MysqlDriver, Session};
pub use error::{ClientError, Result};
pub use options::{ClientFlags, ConnectOptions, DEFAULT_HOST, DEFAULT_TCP_PORT, Endpoint};

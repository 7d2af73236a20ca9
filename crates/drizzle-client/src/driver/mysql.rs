//! Production driver over the `mysql` native client crate.
//!
//! All protocol work (framing, authentication, charset negotiation) is
//! delegated to `mysql::Conn`; this module only marshals [`ConnectOptions`]
//! into the native option builder and translates the handshake outcome.

use std::fmt;

use mysql::consts::CapabilityFlags;
use mysql::{Conn, OptsBuilder};

use crate::driver::{Driver, Session};
use crate::error::{ClientError, Result};
use crate::options::{ConnectOptions, Endpoint};

/// Driver backed by `mysql::Conn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlDriver;

impl MysqlDriver {
    /// Create the driver. Stateless; one instance serves any number of
    /// connect calls.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Driver for MysqlDriver {
    fn connect(&self, opts: &ConnectOptions) -> Result<Box<dyn Session>> {
        let endpoint = opts.endpoint();
        tracing::debug!(%endpoint, "establishing native session");

        let mut builder = OptsBuilder::new();
        match &endpoint {
            Endpoint::Tcp { host, port } => {
                builder = builder
                    .ip_or_hostname(Some(host.clone()))
                    .tcp_port(*port)
                    .prefer_socket(false);
            }
            Endpoint::Unix { path } => {
                builder = builder.socket(Some(path.to_string_lossy().into_owned()));
            }
        }
        builder = builder
            .user(opts.user_ref())
            .pass(opts.password_ref())
            .db_name(opts.database_ref())
            .tcp_connect_timeout(opts.connect_timeout_ref())
            .additional_capabilities(CapabilityFlags::from_bits_truncate(
                opts.client_flags_ref().bits().into(),
            ));
        // init_command is carried for the query layer, never run here.

        let conn = Conn::new(builder).map_err(|e| ClientError::connect(e.to_string()))?;
        tracing::debug!(%endpoint, "native session established");
        Ok(Box::new(MysqlSession { conn: Some(conn) }))
    }
}

/// Live `mysql::Conn` handle. Dropping the inner connection sends the
/// protocol-level quit and releases the socket.
struct MysqlSession {
    conn: Option<Conn>,
}

impl fmt::Debug for MysqlSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MysqlSession")
            .field("live", &self.conn.is_some())
            .finish()
    }
}

impl Session for MysqlSession {
    fn shutdown(&mut self) -> Result<()> {
        if self.conn.take().is_some() {
            tracing::debug!("native session released");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_shutdown_is_single_shot() {
        let mut session = MysqlSession { conn: None };
        assert!(session.shutdown().is_ok());
        assert!(session.shutdown().is_ok());
    }
}

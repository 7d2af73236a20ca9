//! `PyO3` connection wrapper for Python.
//!
//! A module-level `connect()` returns a `connection` object whose whole job
//! is lifecycle: `close()`, the `open`/`closed` attributes, and the
//! caller-owned converter mapping. The native session lives in
//! `drizzle-client`; queries and result handling belong to a layer above
//! this one.

use std::time::Duration;

use parking_lot::Mutex;
use pyo3::exceptions::PyAttributeError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use drizzle_client::{ConnectOptions, Connection, Endpoint, MysqlDriver};

use crate::error::PyDrizzleError;

/// Python `connection` class.
///
/// Either fully open or fully closed; `close()` on a closed connection is a
/// `ProgrammingError`, never a no-op. An open connection left to the garbage
/// collector is closed implicitly, with any teardown error swallowed.
#[pyclass(name = "connection", module = "_drizzle")]
#[derive(Debug)]
pub struct PyConnection {
    /// Lifecycle state and native handle.
    inner: Mutex<Connection>,
    /// Caller-owned type-conversion mapping; held, never inspected.
    /// `None` once the close path has released the reference.
    converter: Mutex<Option<Py<PyAny>>>,
}

impl PyConnection {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn establish(
        py: Python<'_>,
        host: Option<String>,
        user: Option<String>,
        passwd: Option<String>,
        db: Option<String>,
        port: u16,
        conv: Option<Bound<'_, PyAny>>,
        unix_socket: Option<String>,
        connect_timeout: u64,
        init_command: Option<String>,
        client_flag: u32,
    ) -> PyResult<Self> {
        let mut opts = ConnectOptions::new().port(port).client_flags(client_flag);
        if let Some(host) = host {
            opts = opts.host(host);
        }
        if let Some(user) = user {
            opts = opts.user(user);
        }
        if let Some(passwd) = passwd {
            opts = opts.password(passwd);
        }
        if let Some(db) = db {
            opts = opts.database(db);
        }
        if let Some(unix_socket) = unix_socket {
            opts = opts.unix_socket(unix_socket);
        }
        if connect_timeout > 0 {
            opts = opts.connect_timeout(Duration::from_secs(connect_timeout));
        }
        if let Some(init_command) = init_command {
            opts = opts.init_command(init_command);
        }

        let conn = Connection::open(&MysqlDriver::new(), &opts).map_err(PyDrizzleError::from)?;
        let converter = match conv {
            Some(mapping) => mapping.unbind(),
            None => PyDict::new(py).into_any().unbind(),
        };

        Ok(Self {
            inner: Mutex::new(conn),
            converter: Mutex::new(Some(converter)),
        })
    }
}

#[pymethods]
impl PyConnection {
    #[new]
    #[allow(clippy::too_many_arguments)]
    #[pyo3(signature = (host=None, user=None, passwd=None, db=None, port=0, conv=None,
                        unix_socket=None, connect_timeout=0, init_command=None, client_flag=0))]
    fn new(
        py: Python<'_>,
        host: Option<String>,
        user: Option<String>,
        passwd: Option<String>,
        db: Option<String>,
        port: u16,
        conv: Option<Bound<'_, PyAny>>,
        unix_socket: Option<String>,
        connect_timeout: u64,
        init_command: Option<String>,
        client_flag: u32,
    ) -> PyResult<Self> {
        Self::establish(
            py,
            host,
            user,
            passwd,
            db,
            port,
            conv,
            unix_socket,
            connect_timeout,
            init_command,
            client_flag,
        )
    }

    /// Close the connection. No further activity possible.
    fn close(&self) -> PyResult<()> {
        self.inner.lock().close().map_err(PyDrizzleError::from)?;
        // Release the converter reference along with the session.
        *self.converter.lock() = None;
        Ok(())
    }

    /// True if connection is open.
    #[getter]
    fn open(&self) -> bool {
        self.inner.lock().is_open()
    }

    /// True if connection is closed. Always the negation of `open`.
    #[getter]
    fn closed(&self) -> bool {
        self.inner.lock().is_closed()
    }

    /// Type conversion mapping.
    #[getter]
    fn converter(&self, py: Python<'_>) -> Option<Py<PyAny>> {
        self.converter.lock().as_ref().map(|c| c.clone_ref(py))
    }

    #[setter]
    fn set_converter(&self, value: Option<Py<PyAny>>) -> PyResult<()> {
        let Some(value) = value else {
            return Err(PyAttributeError::new_err(
                "can't delete connection attributes",
            ));
        };
        *self.converter.lock() = Some(value);
        Ok(())
    }

    fn __repr__(slf: &Bound<'_, Self>) -> String {
        let token = slf.as_ptr() as usize;
        let me = slf.borrow();
        let inner = me.inner.lock();
        repr_string(inner.is_open().then(|| inner.endpoint()), token)
    }
}

/// Diagnostic rendering: resolved address plus identity token when open,
/// token and closed marker otherwise.
fn repr_string(endpoint: Option<&Endpoint>, token: usize) -> String {
    match endpoint {
        Some(endpoint) => format!("<_drizzle.connection open to '{endpoint}' at {token:x}>"),
        None => format!("<_drizzle.connection closed at {token:x}>"),
    }
}

/// Returns a Drizzle connection object.
///
/// host
///     string, host to connect
#[pyfunction]
#[allow(clippy::too_many_arguments)]
#[pyo3(signature = (host=None, user=None, passwd=None, db=None, port=0, conv=None,
                    unix_socket=None, connect_timeout=0, init_command=None, client_flag=0))]
pub fn connect(
    py: Python<'_>,
    host: Option<String>,
    user: Option<String>,
    passwd: Option<String>,
    db: Option<String>,
    port: u16,
    conv: Option<Bound<'_, PyAny>>,
    unix_socket: Option<String>,
    connect_timeout: u64,
    init_command: Option<String>,
    client_flag: u32,
) -> PyResult<PyConnection> {
    PyConnection::establish(
        py,
        host,
        user,
        passwd,
        db,
        port,
        conv,
        unix_socket,
        connect_timeout,
        init_command,
        client_flag,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repr_open_format() {
        let endpoint = ConnectOptions::new().host("db.example.com").endpoint();
        let rendered = repr_string(Some(&endpoint), 0x7f12_3456);
        assert_eq!(
            rendered,
            "<_drizzle.connection open to 'db.example.com' at 7f123456>"
        );
    }

    #[test]
    fn test_repr_uses_socket_path_for_unix() {
        let endpoint = ConnectOptions::new()
            .unix_socket("/var/run/drizzle.sock")
            .endpoint();
        let rendered = repr_string(Some(&endpoint), 0xabc);
        assert_eq!(
            rendered,
            "<_drizzle.connection open to '/var/run/drizzle.sock' at abc>"
        );
    }

    #[test]
    fn test_repr_closed_format() {
        let rendered = repr_string(None, 0xabc);
        assert_eq!(rendered, "<_drizzle.connection closed at abc>");
    }
}

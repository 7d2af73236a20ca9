//! Error types and Python exception mapping.
//!
//! Maps connection-manager errors to DB-API 2.0 Python exceptions:
//! - `InternalError`: the native connect/handshake did not return success
//!   (deliberately coarse, one kind for every connect failure)
//! - `ProgrammingError`: closing a closed connection
//! - `InterfaceError`: bad connection parameters

use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use pyo3::{PyErr, create_exception};
use thiserror::Error;

use drizzle_client::ClientError;

// DB-API 2.0 exception hierarchy, rooted at DrizzleError
create_exception!(_drizzle, DrizzleError, PyException, "Base Drizzle error.");
create_exception!(_drizzle, Warning, PyException, "Database warning.");
create_exception!(_drizzle, Error, DrizzleError, "Generic error.");
create_exception!(_drizzle, InterfaceError, Error, "Interface error.");
create_exception!(_drizzle, DatabaseError, Error, "Database error.");
create_exception!(_drizzle, DataError, DatabaseError, "Data error.");
create_exception!(
    _drizzle,
    OperationalError,
    DatabaseError,
    "Operational error."
);
create_exception!(
    _drizzle,
    IntegrityError,
    DatabaseError,
    "Integrity error."
);
create_exception!(_drizzle, InternalError, DatabaseError, "Internal error.");
create_exception!(
    _drizzle,
    ProgrammingError,
    DatabaseError,
    "Programming error."
);
create_exception!(
    _drizzle,
    NotSupportedError,
    DatabaseError,
    "Not supported error."
);

/// Drizzle Python driver error.
#[derive(Debug, Error)]
pub enum PyDrizzleError {
    /// Interface error (connection parameters, driver issues).
    #[error("InterfaceError: {0}")]
    Interface(String),

    /// Operational error (connection lost, timeout).
    #[error("OperationalError: {0}")]
    Operational(String),

    /// Programming error (API misuse, such as double close).
    #[error("ProgrammingError: {0}")]
    Programming(String),

    /// Internal error (handshake failure, generic internal classification).
    #[error("InternalError: {0}")]
    Internal(String),
}

impl PyDrizzleError {
    /// Create an interface error.
    #[must_use]
    pub fn interface(msg: impl Into<String>) -> Self {
        Self::Interface(msg.into())
    }

    /// Create an operational error.
    #[must_use]
    pub fn operational(msg: impl Into<String>) -> Self {
        Self::Operational(msg.into())
    }

    /// Create a programming error.
    #[must_use]
    pub fn programming(msg: impl Into<String>) -> Self {
        Self::Programming(msg.into())
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ClientError> for PyDrizzleError {
    fn from(err: ClientError) -> Self {
        if err.is_closed_connection() {
            Self::Programming(err.to_string())
        } else if err.is_options() {
            Self::Interface(err.to_string())
        } else {
            // Every connect failure collapses into the one internal kind.
            Self::Internal(err.to_string())
        }
    }
}

impl From<PyDrizzleError> for PyErr {
    fn from(err: PyDrizzleError) -> Self {
        match err {
            PyDrizzleError::Interface(msg) => InterfaceError::new_err(msg),
            PyDrizzleError::Operational(msg) => OperationalError::new_err(msg),
            PyDrizzleError::Programming(msg) => ProgrammingError::new_err(msg),
            PyDrizzleError::Internal(msg) => InternalError::new_err(msg),
        }
    }
}

/// Register exception types with the Python module.
pub fn register_exceptions(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("DrizzleError", py.get_type::<DrizzleError>())?;
    m.add("Warning", py.get_type::<Warning>())?;
    m.add("Error", py.get_type::<Error>())?;
    m.add("InterfaceError", py.get_type::<InterfaceError>())?;
    m.add("DatabaseError", py.get_type::<DatabaseError>())?;
    m.add("DataError", py.get_type::<DataError>())?;
    m.add("OperationalError", py.get_type::<OperationalError>())?;
    m.add("IntegrityError", py.get_type::<IntegrityError>())?;
    m.add("InternalError", py.get_type::<InternalError>())?;
    m.add("ProgrammingError", py.get_type::<ProgrammingError>())?;
    m.add("NotSupportedError", py.get_type::<NotSupportedError>())?;
    Ok(())
}

//! The Drizzle API in Python form!
//!
//! `_drizzle` exposes exactly the connection lifecycle: `connect()`, the
//! `connection` class, and the DB-API exception hierarchy. Query execution
//! and result handling live in pure-Python layers above this module.
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod connection;
pub mod error;

pub use connection::PyConnection;
pub use error::PyDrizzleError;

use pyo3::prelude::*;

#[pymodule]
fn _drizzle(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyConnection>()?;
    m.add_function(wrap_pyfunction!(connection::connect, m)?)?;
    error::register_exceptions(py, m)?;
    m.add("NULL", "NULL")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

//! Connect failures against unreachable endpoints.
//!
//! These exercise the production `MysqlDriver` without a server: a refused
//! loopback port and a nonexistent socket path both collapse into the single
//! coarse connect error, and no connection object is produced.

use std::time::Duration;

use drizzle_client::{ConnectOptions, Connection, MysqlDriver};

#[test]
fn test_refused_tcp_endpoint_is_connect_error() {
    // Port 1 on loopback: nothing listens there, connect is refused outright.
    let opts = ConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .user("root")
        .database("test")
        .connect_timeout(Duration::from_secs(2));

    let err = Connection::open(&MysqlDriver::new(), &opts).unwrap_err();
    assert!(err.is_connect(), "unexpected error: {err}");
}

#[test]
fn test_missing_unix_socket_is_connect_error() {
    let opts = ConnectOptions::new()
        .unix_socket("/nonexistent/drizzle.sock")
        .user("root");

    let err = Connection::open(&MysqlDriver::new(), &opts).unwrap_err();
    assert!(err.is_connect(), "unexpected error: {err}");
}

#[test]
#[ignore] // Requires a reachable MySQL/Drizzle server on localhost
fn test_connect_close_against_live_server() {
    let opts = ConnectOptions::new()
        .host("localhost")
        .port(3306)
        .user("root")
        .database("test");

    let mut conn = Connection::open(&MysqlDriver::new(), &opts).unwrap();
    assert!(conn.is_open());
    conn.close().unwrap();
    assert!(conn.is_closed());
}

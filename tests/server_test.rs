use std::net::SocketAddr;

use spotrelay::server::{bind, login_url};

#[test]
fn test_login_url_uses_bound_address() {
    let addr: SocketAddr = "127.0.0.1:5000".parse().unwrap();
    assert_eq!(login_url(addr), "http://127.0.0.1:5000/auth/login");
}

#[test]
fn test_login_url_replaces_wildcard_address() {
    let v4: SocketAddr = "0.0.0.0:5000".parse().unwrap();
    assert_eq!(login_url(v4), "http://127.0.0.1:5000/auth/login");

    let v6: SocketAddr = "[::]:8080".parse().unwrap();
    assert_eq!(login_url(v6), "http://[::1]:8080/auth/login");
}

#[tokio::test]
async fn test_bind_reports_actual_port() {
    let listener = bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    assert_ne!(addr.port(), 0);
    assert_eq!(
        login_url(addr),
        format!("http://127.0.0.1:{}/auth/login", addr.port())
    );
}

#[tokio::test]
async fn test_bind_rejects_malformed_address() {
    assert!(bind("localhost").await.is_err());
    assert!(bind("not-an-address:5000").await.is_err());
}

#[tokio::test]
async fn test_bind_fails_when_port_is_taken() {
    let first = bind("127.0.0.1:0").await.unwrap();
    let taken = first.local_addr().unwrap().to_string();

    assert!(bind(&taken).await.is_err());
}

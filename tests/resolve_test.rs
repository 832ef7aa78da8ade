//! Hostname resolution tests

use xio_collector::error::CollectorError;
use xio_collector::resolve::{resolve_array, split_host_port};

#[test]
fn test_split_plain_host_uses_default_port() {
    assert_eq!(
        split_host_port("xio01.example.com", 443),
        Some(("xio01.example.com", 443))
    );
}

#[test]
fn test_split_host_with_port() {
    assert_eq!(split_host_port("xio01:8443", 443), Some(("xio01", 8443)));
}

#[test]
fn test_split_bracketed_ipv6() {
    assert_eq!(split_host_port("[::1]:8443", 443), Some(("::1", 8443)));
    assert_eq!(split_host_port("[fe80::1]", 443), Some(("fe80::1", 443)));
}

#[test]
fn test_split_bare_ipv6_uses_default_port() {
    assert_eq!(split_host_port("fe80::1", 80), Some(("fe80::1", 80)));
}

#[test]
fn test_split_rejects_malformed_input() {
    assert_eq!(split_host_port("", 443), None);
    assert_eq!(split_host_port("xio01:", 443), None);
    assert_eq!(split_host_port(":443", 443), None);
    assert_eq!(split_host_port("xio01:99999", 443), None);
    assert_eq!(split_host_port("[::1", 443), None);
    assert_eq!(split_host_port("[::1]8443", 443), None);
}

#[tokio::test]
async fn test_loopback_resolves() {
    let addrs = resolve_array("127.0.0.1:8443", 443)
        .await
        .expect("loopback should resolve");

    assert!(addrs.iter().any(|a| a.port() == 8443 && a.ip().is_loopback()));
}

#[tokio::test]
async fn test_invalid_tld_does_not_resolve() {
    // Given: A name under the reserved .invalid TLD
    let result = resolve_array("xio-missing.invalid", 443).await;

    // Then: Reported as a resolution error naming the host
    match result {
        Err(CollectorError::Resolution { host, .. }) => assert_eq!(host, "xio-missing.invalid"),
        other => panic!("Expected Resolution, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_name_is_resolution_error() {
    let result = resolve_array("xio01:notaport", 443).await;

    assert!(matches!(result, Err(CollectorError::Resolution { .. })));
}

//! End-to-end tests of the `bf` binary

use mockito::{Matcher, Server};
use std::process::Command;

fn bf(endpoint: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bf"));
    cmd.env("BITFLYER_API_ENDPOINT", endpoint)
        .env("BITFLYER_API_KEY", "TEST_KEY")
        .env("BITFLYER_API_SECRET", "TEST_SECRET")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_api_key_exits_before_any_request() {
    let mut server = Server::new();
    let any = server.mock("GET", Matcher::Any).expect(0).create();

    let output = bf(&server.url())
        .env_remove("BITFLYER_API_KEY")
        .arg("status")
        .output()
        .unwrap();

    any.assert();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("BITFLYER_API_KEY"));
}

#[test]
fn test_missing_api_secret_exits_before_any_request() {
    let mut server = Server::new();
    let any = server.mock("GET", Matcher::Any).expect(0).create();

    let output = bf(&server.url())
        .env("BITFLYER_API_SECRET", "")
        .arg("history")
        .output()
        .unwrap();

    any.assert();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("BITFLYER_API_SECRET"));
}

#[test]
fn test_status_prints_single_json_line() {
    let mut server = Server::new();
    let _balance = server
        .mock("GET", "/v1/me/getbalance")
        .with_body(
            r#"[{"currency_code": "JPY", "amount": 1000, "available": 1000},
                {"currency_code": "BTC", "amount": 0.5, "available": 0.5}]"#,
        )
        .create();
    let _ticker = server
        .mock("GET", "/v1/ticker")
        .with_body(
            r#"{"product_code": "BTC_JPY", "timestamp": "2015-07-08T02:50:59.97",
                "tick_id": 1, "best_bid": 1900, "best_ask": 2000, "best_bid_size": 1,
                "best_ask_size": 1, "total_bid_depth": 1, "total_ask_depth": 1,
                "ltp": 1950, "volume": 1, "volume_by_product": 1}"#,
        )
        .create();

    let output = bf(&server.url()).arg("status").output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\"total_assets\":2000.0}\n"
    );
}

#[test]
fn test_network_failure_is_fatal() {
    let output = bf("http://127.0.0.1:1")
        .args(["--timeout", "5", "history"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to fetch deposits"));
}

#[test]
fn test_get_sends_cli_user_agent() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/me/getbalance")
        .match_header("user-agent", Matcher::Regex(r"^bf/\d+\.\d+\.\d+$".to_string()))
        .with_body("[]")
        .create();

    let output = bf(&server.url()).arg("get").output().unwrap();

    mock.assert();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[]\n");
}

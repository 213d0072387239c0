#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use roomrelay_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
server:
  listen: "0.0.0.0:8080"
  max_frame_bytez: 123 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("invalid yaml"));
}

#[test]
fn ok_empty_config_uses_defaults() {
    let cfg = config::load_from_str("{}").expect("must parse");
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.max_frame_bytes, 4096);
}

#[test]
fn ok_partial_override() {
    let ok = r#"
server:
  listen: "127.0.0.1:9000"
  ping_interval_ms: 5000
  idle_timeout_ms: 15000
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen, "127.0.0.1:9000");
    assert_eq!(cfg.server.ping_interval_ms, 5000);
}

#[test]
fn reject_out_of_range_ping() {
    let bad = r#"
server:
  ping_interval_ms: 10
"#;
    config::load_from_str(bad).expect_err("must fail validation");
}

#[test]
fn reject_idle_not_greater_than_ping() {
    let bad = r#"
server:
  ping_interval_ms: 20000
  idle_timeout_ms: 20000
"#;
    config::load_from_str(bad).expect_err("must fail validation");
}

#[test]
fn reject_zero_max_frame_bytes() {
    let bad = r#"
server:
  max_frame_bytes: 0
"#;
    config::load_from_str(bad).expect_err("must fail validation");
}

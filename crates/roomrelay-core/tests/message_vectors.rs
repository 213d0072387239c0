//! Wire protocol vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use roomrelay_core::protocol::{decode, ClientMessage};

#[test]
fn parse_join() {
    let msg = decode(r#"{"type":"join","payload":{"roomId":4821}}"#).unwrap();
    match msg {
        ClientMessage::Join(p) => assert_eq!(p.room_id, 4821),
        other => panic!("expected join, got {other:?}"),
    }
}

#[test]
fn parse_join_with_client_whitespace() {
    // Exact formatting the browser client produces.
    let msg = decode(r#"{ "type":"join", "payload":{ "roomId":1234 } }"#).unwrap();
    assert!(matches!(msg, ClientMessage::Join(p) if p.room_id == 1234));
}

#[test]
fn parse_chat() {
    let msg = decode(r#"{"type":"chat","payload":{"message":"hi"}}"#).unwrap();
    match msg {
        ClientMessage::Chat(p) => assert_eq!(p.message, "hi"),
        other => panic!("expected chat, got {other:?}"),
    }
}

#[test]
fn negative_room_code_is_syntactically_valid() {
    let msg = decode(r#"{"type":"join","payload":{"roomId":-7}}"#).unwrap();
    assert!(matches!(msg, ClientMessage::Join(p) if p.room_id == -7));
}

#[test]
fn reject_unknown_type() {
    decode(r#"{"type":"leave","payload":{}}"#).expect_err("unknown type must fail");
}

#[test]
fn reject_missing_room_id() {
    decode(r#"{"type":"join","payload":{}}"#).expect_err("join without roomId must fail");
}

#[test]
fn reject_non_integer_room_id() {
    decode(r#"{"type":"join","payload":{"roomId":"4821"}}"#).expect_err("string roomId must fail");
}

#[test]
fn reject_extra_payload_field() {
    decode(r#"{"type":"chat","payload":{"message":"hi","from":"a"}}"#)
        .expect_err("unknown payload field must fail");
}

#[test]
fn reject_garbage() {
    decode("not json at all").expect_err("garbage must fail");
    decode("").expect_err("empty frame must fail");
}

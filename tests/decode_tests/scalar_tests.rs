//! Tests for scalar decoders
//!
//! These tests verify:
//! - Accepted reply kinds for each decoder
//! - Transport error / nil / server error precedence
//! - Range and sign checks on integers
//! - Boolean literal grammar

use ::bytes::Bytes;
#[allow(deprecated)]
use kvreply::decode::multi_bulk;
use kvreply::{
    bool, bytes, float64, int, int64, string, uint64, values, Reply, ReplyError, ReplyKind,
    ERR_NIL,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn transport_error() -> ReplyError {
    ReplyError::Network("connection reset".to_string())
}

fn err_is_decode<T: std::fmt::Debug>(result: Result<T, ReplyError>) -> bool {
    result.unwrap_err().is_decode()
}

// =============================================================================
// Int / Int64 Tests
// =============================================================================

#[test]
fn test_int64_from_integer() {
    for n in [0, 1, -1, i64::MAX, i64::MIN] {
        assert_eq!(int64(Ok(Reply::Integer(n))).unwrap(), n);
    }
}

#[test]
fn test_int64_from_bulk_string() {
    assert_eq!(int64(Ok(Reply::bulk("12345"))).unwrap(), 12345);
    assert_eq!(int64(Ok(Reply::bulk("-42"))).unwrap(), -42);
    assert_eq!(int64(Ok(Reply::bulk("+7"))).unwrap(), 7);
    assert_eq!(
        int64(Ok(Reply::bulk("-9223372036854775808"))).unwrap(),
        i64::MIN
    );
}

#[test]
fn test_int64_rejects_non_numeric_bulk() {
    let err = int64(Ok(Reply::bulk("12abc"))).unwrap_err();
    assert!(matches!(err, ReplyError::ParseInt(_)));

    let err = int64(Ok(Reply::bulk("9223372036854775808"))).unwrap_err();
    assert!(matches!(err, ReplyError::ParseInt(_)));
}

#[test]
fn test_int64_rejects_simple_string() {
    let err = int64(Ok(Reply::simple("OK"))).unwrap_err();
    match err {
        ReplyError::UnexpectedType { decoder, kind } => {
            assert_eq!(decoder, "Int64");
            assert_eq!(kind, ReplyKind::SimpleString);
        }
        other => panic!("Expected UnexpectedType, got {:?}", other),
    }
}

#[test]
fn test_int_within_native_width() {
    assert_eq!(int(Ok(Reply::Integer(42))).unwrap(), 42);
    assert_eq!(int(Ok(Reply::Integer(-42))).unwrap(), -42);
    assert_eq!(
        int(Ok(Reply::Integer(isize::MAX as i64))).unwrap(),
        isize::MAX
    );
    assert_eq!(
        int(Ok(Reply::Integer(isize::MIN as i64))).unwrap(),
        isize::MIN
    );
    assert_eq!(int(Ok(Reply::bulk("-100"))).unwrap(), -100);
}

#[cfg(target_pointer_width = "32")]
#[test]
fn test_int_out_of_range_integer() {
    let err = int(Ok(Reply::Integer(i64::from(i32::MAX) + 1))).unwrap_err();
    assert!(matches!(err, ReplyError::OutOfRange { decoder: "Int", .. }));

    let err = int(Ok(Reply::bulk("4294967296"))).unwrap_err();
    assert!(matches!(err, ReplyError::ParseInt(_)));
}

#[test]
fn test_int_bulk_overflow_is_range_error() {
    let err = int(Ok(Reply::bulk("99999999999999999999999"))).unwrap_err();
    match err {
        ReplyError::ParseInt(e) => assert_eq!(
            *e.kind(),
            std::num::IntErrorKind::PosOverflow
        ),
        other => panic!("Expected ParseInt, got {:?}", other),
    }
}

// =============================================================================
// Uint64 Tests
// =============================================================================

#[test]
fn test_uint64_from_integer() {
    assert_eq!(uint64(Ok(Reply::Integer(5))).unwrap(), 5);
    assert_eq!(uint64(Ok(Reply::Integer(i64::MAX))).unwrap(), i64::MAX as u64);
}

#[test]
fn test_uint64_negative_integer() {
    let err = uint64(Ok(Reply::Integer(-1))).unwrap_err();
    match err {
        ReplyError::NegativeValue { decoder, value } => {
            assert_eq!(decoder, "Uint64");
            assert_eq!(value, -1);
        }
        other => panic!("Expected NegativeValue, got {:?}", other),
    }
}

#[test]
fn test_uint64_from_bulk_string() {
    assert_eq!(
        uint64(Ok(Reply::bulk("18446744073709551615"))).unwrap(),
        u64::MAX
    );
    assert!(matches!(
        uint64(Ok(Reply::bulk("-1"))).unwrap_err(),
        ReplyError::ParseInt(_)
    ));
}

#[test]
fn test_uint64_rejects_plus_sign() {
    match uint64(Ok(Reply::bulk("+5"))).unwrap_err() {
        ReplyError::SignedUnsigned(literal) => assert_eq!(literal, "+5"),
        other => panic!("Expected SignedUnsigned, got {:?}", other),
    }
    assert!(err_is_decode(uint64(Ok(Reply::bulk("+5")))));
}

// =============================================================================
// Float64 Tests
// =============================================================================

#[test]
fn test_float64_from_bulk_string() {
    assert_eq!(float64(Ok(Reply::bulk("1.5"))).unwrap(), 1.5);
    assert_eq!(float64(Ok(Reply::bulk("-0.25"))).unwrap(), -0.25);
    assert_eq!(float64(Ok(Reply::bulk("3"))).unwrap(), 3.0);
    assert_eq!(float64(Ok(Reply::bulk("1e3"))).unwrap(), 1000.0);
    assert!(float64(Ok(Reply::bulk("inf"))).unwrap().is_infinite());
}

#[test]
fn test_float64_overflow_is_range_error() {
    for literal in ["1e400", "-1e999"] {
        match float64(Ok(Reply::bulk(literal))).unwrap_err() {
            ReplyError::FloatOutOfRange(got) => assert_eq!(got, literal),
            other => panic!("Expected FloatOutOfRange, got {:?}", other),
        }
    }
}

#[test]
fn test_float64_infinity_tokens() {
    for literal in ["inf", "+inf", "Infinity", "INF"] {
        assert_eq!(float64(Ok(Reply::bulk(literal))).unwrap(), f64::INFINITY, "{}", literal);
    }
    assert_eq!(float64(Ok(Reply::bulk("-inf"))).unwrap(), f64::NEG_INFINITY);
    assert_eq!(float64(Ok(Reply::bulk("1.7976931348623157e308"))).unwrap(), f64::MAX);
}

#[test]
fn test_float64_rejects_integer_reply() {
    let err = float64(Ok(Reply::Integer(3))).unwrap_err();
    assert!(matches!(
        err,
        ReplyError::UnexpectedType {
            decoder: "Float64",
            kind: ReplyKind::Integer
        }
    ));
}

#[test]
fn test_float64_rejects_garbage() {
    assert!(matches!(
        float64(Ok(Reply::bulk("one point five"))).unwrap_err(),
        ReplyError::ParseFloat(_)
    ));
}

// =============================================================================
// String / Bytes Tests
// =============================================================================

#[test]
fn test_string_from_bulk_and_simple() {
    assert_eq!(string(Ok(Reply::bulk("hello"))).unwrap(), "hello");
    assert_eq!(string(Ok(Reply::simple("OK"))).unwrap(), "OK");
    assert_eq!(string(Ok(Reply::bulk(""))).unwrap(), "");
}

#[test]
fn test_string_rejects_invalid_utf8() {
    let reply = Reply::bulk(vec![0xff, 0xfe, 0x00]);
    assert!(matches!(
        string(Ok(reply)).unwrap_err(),
        ReplyError::Utf8(_)
    ));
}

#[test]
fn test_string_rejects_integer() {
    let err = string(Ok(Reply::Integer(1))).unwrap_err();
    assert_eq!(err.to_string(), "unexpected type for String, got integer");
}

#[test]
fn test_bytes_binary_safe() {
    let payload: Vec<u8> = (0..=255).collect();
    let decoded = bytes(Ok(Reply::bulk(payload.clone()))).unwrap();
    assert_eq!(decoded, Bytes::from(payload));
}

#[test]
fn test_bytes_from_simple_string() {
    assert_eq!(bytes(Ok(Reply::simple("PONG"))).unwrap(), Bytes::from_static(b"PONG"));
}

#[test]
fn test_bytes_rejects_array() {
    let err = bytes(Ok(Reply::array(vec![]))).unwrap_err();
    assert!(matches!(
        err,
        ReplyError::UnexpectedType {
            decoder: "Bytes",
            kind: ReplyKind::Array
        }
    ));
}

// =============================================================================
// Bool Tests
// =============================================================================

#[test]
fn test_bool_from_integer() {
    assert!(!bool(Ok(Reply::Integer(0))).unwrap());
    assert!(bool(Ok(Reply::Integer(1))).unwrap());
    assert!(bool(Ok(Reply::Integer(-3))).unwrap());
}

#[test]
fn test_bool_literals() {
    for literal in ["1", "t", "T", "TRUE", "true", "True"] {
        assert!(bool(Ok(Reply::bulk(literal))).unwrap(), "{}", literal);
    }
    for literal in ["0", "f", "F", "FALSE", "false", "False"] {
        assert!(!bool(Ok(Reply::bulk(literal))).unwrap(), "{}", literal);
    }
}

#[test]
fn test_bool_rejects_unknown_literal() {
    for literal in ["yes", "tRuE", "2", ""] {
        match bool(Ok(Reply::bulk(literal))).unwrap_err() {
            ReplyError::ParseBool(got) => assert_eq!(got, literal),
            other => panic!("Expected ParseBool, got {:?}", other),
        }
    }
}

#[test]
fn test_bool_rejects_simple_string() {
    assert!(matches!(
        bool(Ok(Reply::simple("true"))).unwrap_err(),
        ReplyError::UnexpectedType { decoder: "Bool", .. }
    ));
}

// =============================================================================
// Values Tests
// =============================================================================

#[test]
fn test_values_returns_elements() {
    let items = vec![Reply::Integer(1), Reply::Nil, Reply::bulk("x")];
    assert_eq!(values(Ok(Reply::array(items.clone()))).unwrap(), items);
}

#[test]
#[allow(deprecated)]
fn test_multi_bulk_alias() {
    let items = vec![Reply::simple("a")];
    assert_eq!(multi_bulk(Ok(Reply::array(items.clone()))).unwrap(), items);
}

#[test]
fn test_values_rejects_scalar() {
    assert!(matches!(
        values(Ok(Reply::Integer(1))).unwrap_err(),
        ReplyError::UnexpectedType {
            decoder: "Values",
            kind: ReplyKind::Integer
        }
    ));
}

// =============================================================================
// Precedence Tests
// =============================================================================

#[test]
fn test_transport_error_passes_through() {
    match int64(Err(transport_error())).unwrap_err() {
        ReplyError::Network(msg) => assert_eq!(msg, "connection reset"),
        other => panic!("Expected Network, got {:?}", other),
    }

    let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
    let err = string(Err(ReplyError::from(io))).unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, ReplyError::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
}

#[test]
fn test_nil_yields_sentinel_for_every_scalar() {
    assert!(int(Ok(Reply::Nil)).unwrap_err().is_nil());
    assert!(int64(Ok(Reply::Nil)).unwrap_err().is_nil());
    assert!(uint64(Ok(Reply::Nil)).unwrap_err().is_nil());
    assert!(float64(Ok(Reply::Nil)).unwrap_err().is_nil());
    assert!(string(Ok(Reply::Nil)).unwrap_err().is_nil());
    assert!(bytes(Ok(Reply::Nil)).unwrap_err().is_nil());
    assert!(bool(Ok(Reply::Nil)).unwrap_err().is_nil());
    assert!(values(Ok(Reply::Nil)).unwrap_err().is_nil());
}

#[test]
fn test_nil_sentinel_constant() {
    assert!(ERR_NIL.is_nil());
    assert!(matches!(string(Ok(Reply::Nil)), Err(ReplyError::Nil)));
    assert_eq!(ERR_NIL.to_string(), ReplyError::Nil.to_string());
}

#[test]
fn test_server_error_surfaces_message() {
    let reply = Reply::error("WRONGTYPE Operation against a key holding the wrong kind of value");
    let err = int64(Ok(reply)).unwrap_err();
    assert!(err.is_server());
    assert!(!err.is_decode());
    assert_eq!(
        err.to_string(),
        "WRONGTYPE Operation against a key holding the wrong kind of value"
    );
}

#[test]
fn test_error_classes_are_disjoint() {
    let decode = int64(Ok(Reply::simple("x"))).unwrap_err();
    assert!(decode.is_decode());
    assert!(!decode.is_nil() && !decode.is_server() && !decode.is_transport());

    let transport = transport_error();
    assert!(transport.is_transport());
    assert!(!transport.is_decode());

    let framing = ReplyError::Framing("bad length prefix".to_string());
    assert!(framing.is_transport());
    assert!(!framing.is_server());
}

//! Scalar decoders
//!
//! One reply in, one value out.
//!
//! | Decoder   | Accepts                                      |
//! |-----------|----------------------------------------------|
//! | `int`     | integer (native width), bulk string          |
//! | `int64`   | integer, bulk string                         |
//! | `uint64`  | non-negative integer, bulk string            |
//! | `float64` | bulk string                                  |
//! | `string`  | bulk string, simple string                   |
//! | `bytes`   | bulk string, simple string                   |
//! | `bool`    | integer (nonzero is true), bulk string       |

use ::bytes::Bytes;

use super::{decode_scalar, FromReply};
use crate::error::{ReplyError, Result};
use crate::reply::Reply;

// =============================================================================
// Public Decoders
// =============================================================================

/// Decode a reply to a native-width integer
///
/// Integer replies that do not fit in `isize` fail with
/// `ReplyError::OutOfRange` rather than being truncated.
pub fn int(reply: Result<Reply>) -> Result<isize> {
    decode_scalar(&reply?)
}

/// Decode a reply to a 64 bit integer
pub fn int64(reply: Result<Reply>) -> Result<i64> {
    decode_scalar(&reply?)
}

/// Decode a reply to a 64 bit unsigned integer
///
/// Negative integer replies fail with `ReplyError::NegativeValue`; bulk
/// strings must be plain digits, so a leading `+` is rejected too.
pub fn uint64(reply: Result<Reply>) -> Result<u64> {
    decode_scalar(&reply?)
}

/// Decode a bulk string reply to a 64 bit float
///
/// Literals too large for `f64` fail with `ReplyError::FloatOutOfRange`;
/// only explicit `inf`/`infinity` tokens decode to infinity.
pub fn float64(reply: Result<Reply>) -> Result<f64> {
    decode_scalar(&reply?)
}

/// Decode a bulk or simple string reply to a `String`
pub fn string(reply: Result<Reply>) -> Result<String> {
    decode_scalar(&reply?)
}

/// Decode a bulk or simple string reply to a byte buffer
pub fn bytes(reply: Result<Reply>) -> Result<Bytes> {
    decode_scalar(&reply?)
}

/// Decode a reply to a boolean
pub fn bool(reply: Result<Reply>) -> Result<bool> {
    decode_scalar(&reply?)
}

/// Return the elements of an array reply as-is
pub fn values(reply: Result<Reply>) -> Result<Vec<Reply>> {
    match reply? {
        Reply::Array(items) => Ok(items),
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message)),
        other => Err(ReplyError::UnexpectedType {
            decoder: "Values",
            kind: other.kind(),
        }),
    }
}

/// Return the elements of an array reply as-is
#[deprecated(note = "use `values` instead")]
pub fn multi_bulk(reply: Result<Reply>) -> Result<Vec<Reply>> {
    values(reply)
}

// =============================================================================
// Conversion Rules
// =============================================================================

impl FromReply for isize {
    const NAME: &'static str = "Int";

    fn convert(reply: &Reply) -> Option<Result<Self>> {
        match reply {
            Reply::Integer(n) => Some(isize::try_from(*n).map_err(|_| ReplyError::OutOfRange {
                decoder: Self::NAME,
                value: *n,
            })),
            Reply::BulkString(data) => Some(parse_str(data)),
            _ => None,
        }
    }
}

impl FromReply for i64 {
    const NAME: &'static str = "Int64";

    fn convert(reply: &Reply) -> Option<Result<Self>> {
        match reply {
            Reply::Integer(n) => Some(Ok(*n)),
            Reply::BulkString(data) => Some(parse_str(data)),
            _ => None,
        }
    }
}

impl FromReply for u64 {
    const NAME: &'static str = "Uint64";

    fn convert(reply: &Reply) -> Option<Result<Self>> {
        match reply {
            Reply::Integer(n) => Some(u64::try_from(*n).map_err(|_| ReplyError::NegativeValue {
                decoder: Self::NAME,
                value: *n,
            })),
            Reply::BulkString(data) => Some(utf8(data).and_then(parse_unsigned)),
            _ => None,
        }
    }
}

impl FromReply for f64 {
    const NAME: &'static str = "Float64";

    fn convert(reply: &Reply) -> Option<Result<Self>> {
        match reply {
            Reply::BulkString(data) => Some(utf8(data).and_then(parse_float)),
            _ => None,
        }
    }
}

impl FromReply for String {
    const NAME: &'static str = "String";

    fn convert(reply: &Reply) -> Option<Result<Self>> {
        match reply {
            Reply::BulkString(data) => Some(utf8(data).map(str::to_owned)),
            Reply::SimpleString(text) => Some(Ok(text.clone())),
            _ => None,
        }
    }
}

impl FromReply for Bytes {
    const NAME: &'static str = "Bytes";

    fn convert(reply: &Reply) -> Option<Result<Self>> {
        match reply {
            Reply::BulkString(data) => Some(Ok(data.clone())),
            Reply::SimpleString(text) => Some(Ok(Bytes::from(text.clone()))),
            _ => None,
        }
    }
}

impl FromReply for bool {
    const NAME: &'static str = "Bool";

    fn convert(reply: &Reply) -> Option<Result<Self>> {
        match reply {
            Reply::Integer(n) => Some(Ok(*n != 0)),
            Reply::BulkString(data) => Some(utf8(data).and_then(parse_bool)),
            _ => None,
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn utf8(data: &Bytes) -> Result<&str> {
    Ok(std::str::from_utf8(data)?)
}

/// Parse bulk string content with `FromStr`, keeping the parse error
fn parse_str<T>(data: &Bytes) -> Result<T>
where
    T: std::str::FromStr,
    ReplyError: From<T::Err>,
{
    Ok(utf8(data)?.parse::<T>()?)
}

/// Unsigned integers carry no sign at all, not even `+`
fn parse_unsigned(literal: &str) -> Result<u64> {
    if literal.starts_with('+') {
        return Err(ReplyError::SignedUnsigned(literal.to_string()));
    }
    Ok(literal.parse::<u64>()?)
}

/// Parse a float, refusing finite literals that overflow to infinity
fn parse_float(literal: &str) -> Result<f64> {
    let value = literal.parse::<f64>()?;
    if value.is_infinite() && !is_infinity_token(literal) {
        return Err(ReplyError::FloatOutOfRange(literal.to_string()));
    }
    Ok(value)
}

fn is_infinity_token(literal: &str) -> bool {
    let unsigned = literal
        .strip_prefix(&['+', '-'][..])
        .unwrap_or(literal);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Boolean literal grammar shared with the server's CONFIG style replies
fn parse_bool(literal: &str) -> Result<bool> {
    match literal {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(ReplyError::ParseBool(other.to_string())),
    }
}

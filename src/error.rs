//! Error types for kvreply
//!
//! Provides a unified error type for all decoders.
//!
//! Errors fall into four groups, checked in this order by every decoder:
//! 1. transport errors handed in by the caller (returned untouched)
//! 2. the `Nil` sentinel (top-level nil reply)
//! 3. server errors carried inside the reply
//! 4. decoding errors raised by this crate

use thiserror::Error;

use crate::reply::ReplyKind;

/// Result type alias using ReplyError
pub type Result<T> = std::result::Result<T, ReplyError>;

/// The value-absent sentinel, for callers that prefer a named constant
/// over matching on [`ReplyError::Nil`].
///
/// `ReplyError` is not `PartialEq` (it wraps `std::io::Error`), so
/// `err == ERR_NIL` does not compile; test with [`ReplyError::is_nil`] or
/// `matches!(err, ReplyError::Nil)`.
pub const ERR_NIL: ReplyError = ReplyError::Nil;

/// Unified error type for reply decoding
#[derive(Debug, Error)]
pub enum ReplyError {
    // -------------------------------------------------------------------------
    // Transport Errors (produced upstream, passed through unchanged)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(String),

    /// Malformed wire framing seen by the transport. Errors the server
    /// reports inside a reply are [`ReplyError::Server`].
    #[error("Framing error: {0}")]
    Framing(String),

    // -------------------------------------------------------------------------
    // Absent Value
    // -------------------------------------------------------------------------
    #[error("nil returned")]
    Nil,

    // -------------------------------------------------------------------------
    // Server Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Server(String),

    // -------------------------------------------------------------------------
    // Type Errors
    // -------------------------------------------------------------------------
    #[error("unexpected type for {decoder}, got {kind}")]
    UnexpectedType {
        decoder: &'static str,
        kind: ReplyKind,
    },

    #[error("unexpected element type for {decoder}, got {kind}")]
    UnexpectedElementType {
        decoder: &'static str,
        kind: ReplyKind,
    },

    // -------------------------------------------------------------------------
    // Value Errors
    // -------------------------------------------------------------------------
    #[error("value {value} out of range for {decoder}")]
    OutOfRange { decoder: &'static str, value: i64 },

    #[error("unexpected negative value {value} for {decoder}")]
    NegativeValue { decoder: &'static str, value: i64 },

    #[error("invalid integer: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("invalid float: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("float literal {0:?} out of range")]
    FloatOutOfRange(String),

    #[error("unexpected sign in unsigned integer {0:?}")]
    SignedUnsigned(String),

    #[error("invalid boolean literal {0:?}")]
    ParseBool(String),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    // -------------------------------------------------------------------------
    // Structural Errors
    // -------------------------------------------------------------------------
    #[error("{decoder} expects even number of values, got {len}")]
    OddLength { decoder: &'static str, len: usize },

    #[error("{decoder} key[{index}] not a bulk string, got {kind}")]
    InvalidKey {
        decoder: &'static str,
        index: usize,
        kind: ReplyKind,
    },

    #[error("{decoder} value for {key:?} is nil")]
    NilValue { decoder: &'static str, key: String },

    #[error("{decoder} entry {entry} field[{field}] not {expected}, got {kind}")]
    FieldType {
        decoder: &'static str,
        entry: usize,
        field: usize,
        expected: &'static str,
        kind: ReplyKind,
    },

    #[error("{decoder} entry {entry} field[{field}] is not {expected}: {source}")]
    Field {
        decoder: &'static str,
        entry: usize,
        field: usize,
        expected: &'static str,
        #[source]
        source: Box<ReplyError>,
    },

    #[error("{decoder}: {detail}")]
    Malformed {
        decoder: &'static str,
        detail: String,
    },
}

impl ReplyError {
    /// True for the value-absent sentinel
    pub fn is_nil(&self) -> bool {
        matches!(self, ReplyError::Nil)
    }

    /// True for errors reported by the server inside the reply
    pub fn is_server(&self) -> bool {
        matches!(self, ReplyError::Server(_))
    }

    /// True for errors that originated below the decoding layer
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ReplyError::Io(_) | ReplyError::Network(_) | ReplyError::Framing(_)
        )
    }

    /// True for errors raised while interpreting a reply
    pub fn is_decode(&self) -> bool {
        !(self.is_nil() || self.is_server() || self.is_transport())
    }
}

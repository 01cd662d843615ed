//! Reply definitions
//!
//! The untyped reply tree handed to the decoders by the wire layer.

use std::fmt;

use bytes::Bytes;

/// A single reply as produced by protocol parsing
///
/// Replies are read-only input: decoders borrow them and never mutate
/// or retain them. Bulk payloads are `Bytes`, so cloning a tree to share
/// it between callers only bumps reference counts.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Integer reply
    Integer(i64),

    /// Bulk string (binary safe)
    BulkString(Bytes),

    /// Simple string status reply
    SimpleString(String),

    /// Ordered array of nested replies (elements may be `Nil`)
    Array(Vec<Reply>),

    /// Absence of a value
    Nil,

    /// Error reported by the server
    Error(String),
}

/// Kind of a reply, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Integer,
    BulkString,
    SimpleString,
    Array,
    Nil,
    Error,
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReplyKind::Integer => "integer",
            ReplyKind::BulkString => "bulk string",
            ReplyKind::SimpleString => "simple string",
            ReplyKind::Array => "array",
            ReplyKind::Nil => "nil",
            ReplyKind::Error => "error",
        };
        f.write_str(name)
    }
}

impl Reply {
    /// Create a bulk string reply
    pub fn bulk(data: impl Into<Bytes>) -> Self {
        Reply::BulkString(data.into())
    }

    /// Create a simple string reply
    pub fn simple(text: impl Into<String>) -> Self {
        Reply::SimpleString(text.into())
    }

    /// Create a server error reply
    pub fn error(message: impl Into<String>) -> Self {
        Reply::Error(message.into())
    }

    /// Create an array reply
    pub fn array(items: impl IntoIterator<Item = Reply>) -> Self {
        Reply::Array(items.into_iter().collect())
    }

    /// Get the reply kind
    pub fn kind(&self) -> ReplyKind {
        match self {
            Reply::Integer(_) => ReplyKind::Integer,
            Reply::BulkString(_) => ReplyKind::BulkString,
            Reply::SimpleString(_) => ReplyKind::SimpleString,
            Reply::Array(_) => ReplyKind::Array,
            Reply::Nil => ReplyKind::Nil,
            Reply::Error(_) => ReplyKind::Error,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Reply::Nil)
    }
}

impl From<i64> for Reply {
    fn from(n: i64) -> Self {
        Reply::Integer(n)
    }
}

impl From<&'static str> for Reply {
    fn from(s: &'static str) -> Self {
        Reply::BulkString(Bytes::from_static(s.as_bytes()))
    }
}

impl From<Vec<u8>> for Reply {
    fn from(data: Vec<u8>) -> Self {
        Reply::BulkString(Bytes::from(data))
    }
}

impl From<Vec<Reply>> for Reply {
    fn from(items: Vec<Reply>) -> Self {
        Reply::Array(items)
    }
}

//! Decode Module
//!
//! Converts untyped [`Reply`] trees into caller-chosen Rust types.
//!
//! ## Contract
//! Every public decoder takes the `(reply, transport error)` pair as a
//! single `Result<Reply>` and resolves it in this order:
//!
//! | Input                   | Result                                 |
//! |-------------------------|----------------------------------------|
//! | `Err(e)`                | `Err(e)`, reply never inspected        |
//! | accepted kind           | `Ok(value)`                            |
//! | `Reply::Nil`            | `Err(ReplyError::Nil)`                 |
//! | `Reply::Error(msg)`     | `Err(ReplyError::Server(msg))`         |
//! | any other kind          | `Err(ReplyError::UnexpectedType {..})` |
//!
//! ## Layers
//! - `scalar`: one reply to one value
//! - `array`:  array reply to `Vec<T>`, nil elements left at `T::default()`
//! - `map`:    alternating key/value array to `HashMap<String, T>`
//! - `record`: geo positions and slow-log entries

mod scalar;
mod array;
mod map;
mod record;

pub use scalar::{bool, bytes, float64, int, int64, string, uint64, values};
#[allow(deprecated)]
pub use scalar::multi_bulk;
pub use array::{
    bools, byte_slices, decode_array, float64s, int64s, ints, slice, strings, uint64s,
};
pub use map::{decode_map, float64_map, int64_map, int_map, map_with, string_map, uint64_map};
pub use record::{positions, slow_logs, GeoPosition, SlowLogEntry};

use crate::error::{ReplyError, Result};
use crate::reply::Reply;

/// A type that can be decoded from a single reply
///
/// Implementations describe which reply kinds they accept. The shared
/// nil / server error / mismatch handling lives in [`decode_scalar`] and
/// the array and map traversals, so every decoder reports failures the
/// same way.
pub trait FromReply: Sized + Default {
    /// Decoder name used in error messages
    const NAME: &'static str;

    /// Convert a reply of an accepted kind.
    ///
    /// Returns `None` when the reply kind is not accepted.
    fn convert(reply: &Reply) -> Option<Result<Self>>;
}

/// Decode a borrowed reply with the scalar contract for `T`
pub fn decode_scalar<T: FromReply>(reply: &Reply) -> Result<T> {
    match reply {
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message.clone())),
        other => T::convert(other).unwrap_or_else(|| {
            Err(ReplyError::UnexpectedType {
                decoder: T::NAME,
                kind: other.kind(),
            })
        }),
    }
}

/// Borrow the elements of an array reply, applying the scalar contract
/// to anything else
pub(crate) fn expect_array<'a>(reply: &'a Reply, decoder: &'static str) -> Result<&'a [Reply]> {
    match reply {
        Reply::Array(items) => Ok(items),
        Reply::Nil => Err(ReplyError::Nil),
        Reply::Error(message) => Err(ReplyError::Server(message.clone())),
        other => Err(ReplyError::UnexpectedType {
            decoder,
            kind: other.kind(),
        }),
    }
}

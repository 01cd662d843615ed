//! Array decoders
//!
//! A single traversal turns an array reply into `Vec<T>`; the plural
//! decoders only pick the element rule.
//!
//! Element handling:
//! - `Nil` elements are skipped, leaving `T::default()` in their slot
//! - `Error` elements abort with the server's message
//! - kinds the element rule refuses abort with `UnexpectedElementType`

use ::bytes::Bytes;

use super::{expect_array, FromReply};
use crate::error::{ReplyError, Result};
use crate::reply::Reply;

/// Decode an array reply element by element
///
/// `convert` sees every non-nil, non-error element and returns `None`
/// for kinds it does not accept. The first failure aborts the decode;
/// no partial result is returned.
pub fn decode_array<T, F>(reply: Result<Reply>, decoder: &'static str, convert: F) -> Result<Vec<T>>
where
    T: Default,
    F: FnMut(&Reply) -> Option<Result<T>>,
{
    decode_elements(&reply?, decoder, convert)
}

/// Decode an array reply using the element rule of `T`
pub fn slice<T: FromReply>(reply: Result<Reply>, decoder: &'static str) -> Result<Vec<T>> {
    decode_array(reply, decoder, T::convert)
}

/// Borrowing form of [`decode_array`], shared with the record decoders
pub(crate) fn decode_elements<T, F>(
    reply: &Reply,
    decoder: &'static str,
    mut convert: F,
) -> Result<Vec<T>>
where
    T: Default,
    F: FnMut(&Reply) -> Option<Result<T>>,
{
    let items = expect_array(reply, decoder)?;
    tracing::trace!(decoder, len = items.len(), "decoding array reply");

    let mut result: Vec<T> = std::iter::repeat_with(T::default)
        .take(items.len())
        .collect();

    for (slot, item) in result.iter_mut().zip(items) {
        match item {
            Reply::Nil => continue,
            Reply::Error(message) => return Err(ReplyError::Server(message.clone())),
            other => match convert(other) {
                Some(value) => *slot = value?,
                None => {
                    return Err(ReplyError::UnexpectedElementType {
                        decoder,
                        kind: other.kind(),
                    })
                }
            },
        }
    }

    Ok(result)
}

// =============================================================================
// Plural Decoders
// =============================================================================

/// Decode an array of bulk strings to floats; nil items become 0.0
pub fn float64s(reply: Result<Reply>) -> Result<Vec<f64>> {
    slice(reply, "Float64s")
}

/// Decode an array of strings; nil items become ""
pub fn strings(reply: Result<Reply>) -> Result<Vec<String>> {
    slice(reply, "Strings")
}

/// Decode an array of strings to byte buffers; nil items become empty
pub fn byte_slices(reply: Result<Reply>) -> Result<Vec<Bytes>> {
    slice(reply, "ByteSlices")
}

/// Decode an array of integers (or integer strings); nil items become 0
pub fn int64s(reply: Result<Reply>) -> Result<Vec<i64>> {
    slice(reply, "Int64s")
}

/// Decode an array of integers at native width; nil items become 0
///
/// Each element is range checked the same way as [`super::int`].
pub fn ints(reply: Result<Reply>) -> Result<Vec<isize>> {
    slice(reply, "Ints")
}

/// Decode an array of non-negative integers; nil items become 0
pub fn uint64s(reply: Result<Reply>) -> Result<Vec<u64>> {
    slice(reply, "Uint64s")
}

/// Decode an array of integers or boolean literals; nil items become false
pub fn bools(reply: Result<Reply>) -> Result<Vec<bool>> {
    slice(reply, "Bools")
}

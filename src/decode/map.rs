//! Map decoders
//!
//! Builds `HashMap<String, T>` from the flat key/value arrays returned by
//! HGETALL and CONFIG GET style commands.

use std::collections::HashMap;

use super::{decode_scalar, expect_array, FromReply};
use crate::config::{Config, NilPolicy};
use crate::error::{ReplyError, Result};
use crate::reply::Reply;

/// Decode an alternating key/value array reply
///
/// Keys must be bulk strings. Values go through `convert`, except for
/// `Nil` values, which are handled according to `config.nil_map_values`.
/// When a key repeats, the later value wins.
pub fn decode_map<T, F>(
    reply: Result<Reply>,
    decoder: &'static str,
    config: &Config,
    mut convert: F,
) -> Result<HashMap<String, T>>
where
    T: Default,
    F: FnMut(&Reply) -> Result<T>,
{
    let reply = reply?;
    let items = expect_array(&reply, decoder)?;

    if items.len() % 2 != 0 {
        return Err(ReplyError::OddLength {
            decoder,
            len: items.len(),
        });
    }

    let mut result = HashMap::with_capacity(items.len() / 2);
    for (pair_index, pair) in items.chunks_exact(2).enumerate() {
        let key = match &pair[0] {
            Reply::BulkString(data) => std::str::from_utf8(data)?.to_owned(),
            other => {
                return Err(ReplyError::InvalidKey {
                    decoder,
                    index: pair_index * 2,
                    kind: other.kind(),
                })
            }
        };

        let value = match &pair[1] {
            Reply::Nil => match config.nil_map_values {
                NilPolicy::ZeroFill => {
                    tracing::trace!(decoder, key = %key, "nil map value stored as default");
                    T::default()
                }
                NilPolicy::Reject => return Err(ReplyError::NilValue { decoder, key }),
            },
            other => convert(other)?,
        };

        result.insert(key, value);
    }

    Ok(result)
}

/// Decode a key/value array reply, converting values with the scalar rule of `T`
pub fn map_with<T: FromReply>(
    reply: Result<Reply>,
    decoder: &'static str,
    config: &Config,
) -> Result<HashMap<String, T>> {
    decode_map(reply, decoder, config, decode_scalar::<T>)
}

// =============================================================================
// Typed Map Decoders
// =============================================================================

/// Decode a key/value array reply to `HashMap<String, String>`
pub fn string_map(reply: Result<Reply>) -> Result<HashMap<String, String>> {
    map_with(reply, "StringMap", &Config::default())
}

/// Decode a key/value array reply to `HashMap<String, isize>`
pub fn int_map(reply: Result<Reply>) -> Result<HashMap<String, isize>> {
    map_with(reply, "IntMap", &Config::default())
}

/// Decode a key/value array reply to `HashMap<String, i64>`
pub fn int64_map(reply: Result<Reply>) -> Result<HashMap<String, i64>> {
    map_with(reply, "Int64Map", &Config::default())
}

/// Decode a key/value array reply to `HashMap<String, u64>`
pub fn uint64_map(reply: Result<Reply>) -> Result<HashMap<String, u64>> {
    map_with(reply, "Uint64Map", &Config::default())
}

/// Decode a key/value array reply to `HashMap<String, f64>`
pub fn float64_map(reply: Result<Reply>) -> Result<HashMap<String, f64>> {
    map_with(reply, "Float64Map", &Config::default())
}

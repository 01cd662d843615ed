//! Record decoders
//!
//! Structured results assembled from positional sub-arrays:
//! - GEOPOS: `[[lat, long] | nil, ...]`
//! - SLOWLOG GET: `[[id, unix_secs, micros, [args..], addr?, name?], ...]`

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::array::decode_elements;
use super::{decode_scalar, expect_array, FromReply};
use crate::error::{ReplyError, Result};
use crate::reply::Reply;

// =============================================================================
// Geo Positions
// =============================================================================

/// Position of a geo set member
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    const DECODER: &'static str = "Positions";

    fn from_pair(coords: &[Reply]) -> Result<Self> {
        if coords.len() != 2 {
            return Err(ReplyError::Malformed {
                decoder: Self::DECODER,
                detail: format!(
                    "unexpected number of values for a member position, got {}",
                    coords.len()
                ),
            });
        }

        Ok(Self {
            latitude: decode_scalar(&coords[0])?,
            longitude: decode_scalar(&coords[1])?,
        })
    }
}

/// Decode a GEOPOS reply
///
/// Members without a position come back as `None`, keeping the output
/// aligned with the requested members.
pub fn positions(reply: Result<Reply>) -> Result<Vec<Option<GeoPosition>>> {
    let reply = reply?;
    let items = expect_array(&reply, GeoPosition::DECODER)?;

    items
        .iter()
        .map(|item| match item {
            Reply::Nil => Ok(None),
            Reply::Array(coords) => GeoPosition::from_pair(coords).map(Some),
            Reply::Error(message) => Err(ReplyError::Server(message.clone())),
            other => Err(ReplyError::UnexpectedElementType {
                decoder: GeoPosition::DECODER,
                kind: other.kind(),
            }),
        })
        .collect()
}

// =============================================================================
// Slow Log
// =============================================================================

/// One SLOWLOG GET entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlowLogEntry {
    /// Unique, progressive identifier of the entry
    pub id: i64,

    /// When the logged command was processed
    pub timestamp: SystemTime,

    /// Time spent executing the command
    pub execution_time: Duration,

    /// Command name and arguments
    pub args: Vec<String>,

    /// Client address (servers 4.0+)
    pub client_addr: Option<String>,

    /// Client name set with CLIENT SETNAME (servers 4.0+)
    pub client_name: Option<String>,
}

impl SlowLogEntry {
    const DECODER: &'static str = "SlowLogs";

    /// Minimum fields: id, timestamp, duration, arguments
    const MIN_FIELDS: usize = 4;

    /// Fields once the client address and name are reported
    const CLIENT_FIELDS: usize = 6;

    fn from_reply(entry: usize, item: &Reply) -> Result<Self> {
        let fields = match item {
            Reply::Array(fields) => fields,
            Reply::Error(message) => return Err(ReplyError::Server(message.clone())),
            other => {
                return Err(malformed(format!(
                    "entry {} is not an array, got {}",
                    entry,
                    other.kind()
                )))
            }
        };

        if fields.len() < Self::MIN_FIELDS {
            return Err(malformed(format!(
                "entry {} has {} elements, expected at least {}",
                entry,
                fields.len(),
                Self::MIN_FIELDS
            )));
        }

        let id = integer_field(entry, fields, 0)?;

        let seconds = integer_field(entry, fields, 1)?;
        let timestamp = unix_time(seconds).ok_or_else(|| {
            malformed(format!("entry {} timestamp {} out of range", entry, seconds))
        })?;

        let micros = integer_field(entry, fields, 2)?;
        let execution_time = u64::try_from(micros)
            .map(Duration::from_micros)
            .map_err(|_| {
                malformed(format!("entry {} has negative execution time {}", entry, micros))
            })?;

        let args = decode_elements(&fields[3], "Strings", String::convert)
            .map_err(|e| field_error(entry, 3, "an array of strings", e))?;

        let (client_addr, client_name) = if fields.len() >= Self::CLIENT_FIELDS {
            (
                Some(string_field(entry, fields, 4)?),
                Some(string_field(entry, fields, 5)?),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            id,
            timestamp,
            execution_time,
            args,
            client_addr,
            client_name,
        })
    }
}

/// Decode a SLOWLOG GET reply
///
/// Any malformed entry fails the whole decode.
pub fn slow_logs(reply: Result<Reply>) -> Result<Vec<SlowLogEntry>> {
    let reply = reply?;
    let items = expect_array(&reply, SlowLogEntry::DECODER)?;

    items
        .iter()
        .enumerate()
        .map(|(entry, item)| SlowLogEntry::from_reply(entry, item))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| {
            tracing::debug!(error = %e, "rejected slow log reply");
            e
        })
}

// -----------------------------------------------------------------------------
// Field helpers
// -----------------------------------------------------------------------------

fn integer_field(entry: usize, fields: &[Reply], field: usize) -> Result<i64> {
    match &fields[field] {
        Reply::Integer(n) => Ok(*n),
        other => Err(ReplyError::FieldType {
            decoder: SlowLogEntry::DECODER,
            entry,
            field,
            expected: "an integer",
            kind: other.kind(),
        }),
    }
}

fn string_field(entry: usize, fields: &[Reply], field: usize) -> Result<String> {
    decode_scalar(&fields[field]).map_err(|e| field_error(entry, field, "a string", e))
}

fn field_error(entry: usize, field: usize, expected: &'static str, source: ReplyError) -> ReplyError {
    ReplyError::Field {
        decoder: SlowLogEntry::DECODER,
        entry,
        field,
        expected,
        source: Box::new(source),
    }
}

fn malformed(detail: String) -> ReplyError {
    ReplyError::Malformed {
        decoder: SlowLogEntry::DECODER,
        detail,
    }
}

/// Convert Unix seconds to a `SystemTime`, allowing pre-epoch values
fn unix_time(seconds: i64) -> Option<SystemTime> {
    let offset = Duration::from_secs(seconds.unsigned_abs());
    if seconds >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    }
}

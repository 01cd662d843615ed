//! # kvreply
//!
//! Typed decoding of key-value store replies:
//! - Scalars: integers (native, 64 bit, unsigned), floats, strings, bytes, booleans
//! - Arrays of any scalar, with nil elements defaulted in place
//! - Maps from alternating key/value arrays
//! - Records: geo positions and slow-log entries
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Transport (not part of this crate)              │
//! │                 yields Result<Reply, ReplyError>             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Scalar Decoders                           │
//! │        int · int64 · uint64 · float64 · string · bool        │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │  Array Decoder  │                │   Map Decoder   │
//!   │   (Vec<T>)      │                │ (HashMap<_, T>) │
//!   └────────┬────────┘                └─────────────────┘
//!            │
//!            ▼
//!   ┌─────────────────┐
//!   │ Record Decoders │
//!   │ GEOPOS, SLOWLOG │
//!   └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use kvreply::{strings, Reply};
//!
//! let reply = Reply::array(vec![Reply::bulk("a"), Reply::Nil, Reply::bulk("b")]);
//! assert_eq!(strings(Ok(reply)).unwrap(), vec!["a", "", "b"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod reply;
pub mod decode;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ReplyError, Result, ERR_NIL};
pub use config::{Config, NilPolicy};
pub use reply::{Reply, ReplyKind};

pub use decode::{
    decode_scalar, FromReply,
    int, int64, uint64, float64, string, bytes, bool, values,
    decode_array, slice, float64s, strings, byte_slices, int64s, ints, uint64s, bools,
    decode_map, map_with, string_map, int_map, int64_map, uint64_map, float64_map,
    positions, slow_logs, GeoPosition, SlowLogEntry,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvreply
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

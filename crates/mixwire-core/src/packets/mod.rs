//! Packet codec modules.
//!
//! Each packet kind follows a layered structure:
//! - `layout`: type tag, record width, field offsets (source of truth)
//! - `record`: typed, range-checked record and its wire conversions
//!
//! Kind-independent machinery is shared:
//! - `codec`: generic packet encode/decode/validate over record kinds
//! - `error`: explicit, actionable errors
//!
//! Codecs are pure and contain no I/O; transport and dispatch layers hand
//! buffers in and take records out.

pub mod codec;
pub mod error;
pub mod gain_modify;
pub mod lane_loudness;

use error::CodecError;

/// Narrow a raw numeric field to a wire byte, naming the field on failure.
pub(crate) fn field_u8(field: &'static str, value: i64) -> Result<u8, CodecError> {
    u8::try_from(value).map_err(|_| CodecError::OutOfRange { field, value })
}

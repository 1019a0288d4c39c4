use thiserror::Error;

/// Errors shared by every packet-kind codec.
///
/// Each variant corresponds to one precondition from the codec contract;
/// callers distinguish on them, so they are never collapsed into a single
/// "malformed" case.
///
/// # Examples
/// ```
/// use mixwire_core::CodecError;
///
/// let err = CodecError::WrongTag { expected: 0x40, actual: 0x41 };
/// assert!(err.to_string().contains("type tag mismatch"));
/// ```
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("value {value} out of range for {field}: expected 0..=255")]
    OutOfRange { field: &'static str, value: i64 },
    #[error("record needs exactly {needed} bytes, got {actual}")]
    RecordLength { needed: usize, actual: usize },
    #[error("empty packet buffer")]
    EmptyBuffer,
    #[error("empty record sequence")]
    NoRecords,
    #[error("type tag mismatch: expected {expected:#04x}, got {actual:#04x}")]
    WrongTag { expected: u8, actual: u8 },
    #[error("payload length {payload} is not a multiple of record width {width}")]
    Misaligned { payload: usize, width: usize },
}

//! Generic packet machinery shared by every record kind.
//!
//! A packet is one type-tag byte followed by zero or more fixed-width
//! records of the same kind. Everything kind-specific (tag, width, field
//! decoding) comes in through [`WireRecord`]; the tag/length arithmetic
//! lives here exactly once.

use super::error::CodecError;

/// A fixed-width record that can appear in a packet of its kind.
///
/// Implementors provide the wire constants and the per-record byte
/// conversions; the packet-level encode/decode/validate functions in this
/// module are derived from them.
pub trait WireRecord: Sized {
    /// Leading byte identifying packets of this kind. Process-wide unique;
    /// uniqueness is asserted when a registry is built.
    const TYPE_TAG: u8;
    /// Exact encoded width of one record, in bytes.
    const WIDTH: usize;
    /// Short protocol-level name, used in dispatch listings and CLI output.
    const KIND_NAME: &'static str;

    /// Decode one record from exactly [`Self::WIDTH`] bytes.
    fn from_wire(bytes: &[u8]) -> Result<Self, CodecError>;

    /// Append the encoded record to `out`. Writes exactly [`Self::WIDTH`]
    /// bytes and cannot fail for a validly constructed record.
    fn write_wire(&self, out: &mut Vec<u8>);
}

/// Validate packet framing for kind `R`, reporting the first failing check.
///
/// Checks in order: buffer non-empty, leading byte equals the kind's type
/// tag, payload length an exact multiple of the record width. This is the
/// decode precondition; [`is_valid_packet`] is the silent form of the same
/// routine.
pub fn validate_packet<R: WireRecord>(bytes: &[u8]) -> Result<(), CodecError> {
    let (&tag, payload) = bytes.split_first().ok_or(CodecError::EmptyBuffer)?;
    if tag != R::TYPE_TAG {
        return Err(CodecError::WrongTag {
            expected: R::TYPE_TAG,
            actual: tag,
        });
    }
    if payload.len() % R::WIDTH != 0 {
        return Err(CodecError::Misaligned {
            payload: payload.len(),
            width: R::WIDTH,
        });
    }
    Ok(())
}

/// Silent classifier: does this buffer frame a packet of kind `R`?
///
/// Swallows the failure reason; callers that need it use
/// [`validate_packet`] directly.
pub fn is_valid_packet<R: WireRecord>(bytes: &[u8]) -> bool {
    validate_packet::<R>(bytes).is_ok()
}

/// Encode a non-empty record sequence into one packet buffer.
///
/// Output is the type tag followed by each record's encoding in input
/// order; total length is `1 + R::WIDTH * records.len()`.
pub fn encode_packet<R: WireRecord>(records: &[R]) -> Result<Vec<u8>, CodecError> {
    if records.is_empty() {
        return Err(CodecError::NoRecords);
    }
    let mut out = Vec::with_capacity(1 + R::WIDTH * records.len());
    out.push(R::TYPE_TAG);
    for record in records {
        record.write_wire(&mut out);
    }
    Ok(out)
}

/// Decode one packet buffer into its record sequence, preserving byte
/// order as sequence order.
///
/// Failures are exactly those of [`validate_packet`]; a passing buffer
/// yields `payload_len / R::WIDTH` records with no partial trailing
/// record.
pub fn decode_packet<R: WireRecord>(bytes: &[u8]) -> Result<Vec<R>, CodecError> {
    validate_packet::<R>(bytes)?;
    bytes[1..].chunks(R::WIDTH).map(R::from_wire).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::lane_loudness::LaneLoudness;

    fn records() -> Vec<LaneLoudness> {
        vec![
            LaneLoudness::new(1, 200).unwrap(),
            LaneLoudness::new(2, 50).unwrap(),
        ]
    }

    #[test]
    fn encode_matches_wire_layout() {
        let packet = encode_packet(&records()).unwrap();
        assert_eq!(packet, vec![0x40, 1, 200, 2, 50]);
    }

    #[test]
    fn packet_round_trip_preserves_order() {
        let original = records();
        let packet = encode_packet(&original).unwrap();
        let decoded: Vec<LaneLoudness> = decode_packet(&packet).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn encode_empty_sequence_rejected() {
        let err = encode_packet::<LaneLoudness>(&[]).unwrap_err();
        assert_eq!(err, CodecError::NoRecords);
    }

    #[test]
    fn validate_accepts_well_formed_buffer() {
        assert!(validate_packet::<LaneLoudness>(&[0x40, 5, 10]).is_ok());
    }

    #[test]
    fn validate_rejects_wrong_tag() {
        let err = validate_packet::<LaneLoudness>(&[0x41, 5, 10]).unwrap_err();
        assert_eq!(
            err,
            CodecError::WrongTag {
                expected: 0x40,
                actual: 0x41
            }
        );
    }

    #[test]
    fn validate_rejects_misaligned_payload() {
        let err = validate_packet::<LaneLoudness>(&[0x40, 5]).unwrap_err();
        assert_eq!(
            err,
            CodecError::Misaligned {
                payload: 1,
                width: 2
            }
        );
    }

    #[test]
    fn validate_rejects_empty_buffer() {
        let err = validate_packet::<LaneLoudness>(&[]).unwrap_err();
        assert_eq!(err, CodecError::EmptyBuffer);
    }

    #[test]
    fn silent_classifier_returns_false_without_error() {
        assert!(!is_valid_packet::<LaneLoudness>(&[0x41, 5, 10]));
        assert!(!is_valid_packet::<LaneLoudness>(&[]));
        assert!(is_valid_packet::<LaneLoudness>(&[0x40, 5, 10]));
    }

    #[test]
    fn tag_only_buffer_decodes_to_no_records() {
        let decoded: Vec<LaneLoudness> = decode_packet(&[0x40]).unwrap();
        assert!(decoded.is_empty());
    }
}

use serde::{Deserialize, Serialize};

use super::layout;
use crate::packets::codec::WireRecord;
use crate::packets::error::CodecError;
use crate::packets::field_u8;

/// One lane's loudness reading: lane id and quantized level, each 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneLoudness {
    pub lane_id: u8,
    pub current_loudness: u8,
}

impl LaneLoudness {
    /// Build a record from raw numeric fields, rejecting anything outside
    /// 0..=255 with the offending value. No clamping.
    pub fn new(lane_id: i64, current_loudness: i64) -> Result<Self, CodecError> {
        Ok(Self {
            lane_id: field_u8("lane_id", lane_id)?,
            current_loudness: field_u8("current_loudness", current_loudness)?,
        })
    }
}

impl WireRecord for LaneLoudness {
    const TYPE_TAG: u8 = layout::TYPE_TAG;
    const WIDTH: usize = layout::RECORD_WIDTH;
    const KIND_NAME: &'static str = "lane_loudness";

    fn from_wire(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() != layout::RECORD_WIDTH {
            return Err(CodecError::RecordLength {
                needed: layout::RECORD_WIDTH,
                actual: bytes.len(),
            });
        }
        // Bytes are already in range; still routed through `new` so wire
        // decoding and direct construction share one validation path.
        Self::new(
            i64::from(bytes[layout::LANE_ID_OFFSET]),
            i64::from(bytes[layout::LOUDNESS_OFFSET]),
        )
    }

    fn write_wire(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&[self.lane_id, self.current_loudness]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trip() {
        let record = LaneLoudness::new(7, 128).unwrap();
        let mut wire = Vec::new();
        record.write_wire(&mut wire);
        assert_eq!(wire, vec![7, 128]);
        assert_eq!(LaneLoudness::from_wire(&wire).unwrap(), record);
    }

    #[test]
    fn construct_rejects_out_of_range() {
        let err = LaneLoudness::new(256, 0).unwrap_err();
        assert_eq!(
            err,
            CodecError::OutOfRange {
                field: "lane_id",
                value: 256
            }
        );
        assert!(err.to_string().contains("256"));

        let err = LaneLoudness::new(0, -1).unwrap_err();
        assert_eq!(
            err,
            CodecError::OutOfRange {
                field: "current_loudness",
                value: -1
            }
        );
    }

    #[test]
    fn construct_accepts_range_bounds() {
        assert!(LaneLoudness::new(0, 0).is_ok());
        assert!(LaneLoudness::new(255, 255).is_ok());
    }

    #[test]
    fn from_wire_requires_exact_width() {
        let err = LaneLoudness::from_wire(&[1]).unwrap_err();
        assert_eq!(err, CodecError::RecordLength { needed: 2, actual: 1 });

        let err = LaneLoudness::from_wire(&[1, 2, 3]).unwrap_err();
        assert_eq!(err, CodecError::RecordLength { needed: 2, actual: 3 });

        assert!(LaneLoudness::from_wire(&[1, 2]).is_ok());
    }
}

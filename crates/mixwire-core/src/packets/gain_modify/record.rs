use serde::{Deserialize, Serialize};

use super::layout;
use crate::packets::codec::WireRecord;
use crate::packets::error::CodecError;
use crate::packets::field_u8;

/// One fader change: lane id and the quantized gain to apply, each 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainModify {
    pub lane_id: u8,
    pub modified_gain: u8,
}

impl GainModify {
    /// Build a record from raw numeric fields, rejecting anything outside
    /// 0..=255 with the offending value.
    pub fn new(lane_id: i64, modified_gain: i64) -> Result<Self, CodecError> {
        Ok(Self {
            lane_id: field_u8("lane_id", lane_id)?,
            modified_gain: field_u8("modified_gain", modified_gain)?,
        })
    }
}

impl WireRecord for GainModify {
    const TYPE_TAG: u8 = layout::TYPE_TAG;
    const WIDTH: usize = layout::RECORD_WIDTH;
    const KIND_NAME: &'static str = "gain_modify";

    fn from_wire(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() != layout::RECORD_WIDTH {
            return Err(CodecError::RecordLength {
                needed: layout::RECORD_WIDTH,
                actual: bytes.len(),
            });
        }
        Self::new(
            i64::from(bytes[layout::LANE_ID_OFFSET]),
            i64::from(bytes[layout::GAIN_OFFSET]),
        )
    }

    fn write_wire(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&[self.lane_id, self.modified_gain]);
    }
}

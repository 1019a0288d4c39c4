//! Inbound packet dispatch.
//!
//! The registry is an explicitly constructed, read-only table of packet
//! kinds built once at startup; each entry pairs a silent classifier with
//! a decoder. Dispatch probes entries in registration order and decodes
//! with the first kind that claims the buffer. Buffers are independent,
//! stateless messages; the registry holds no per-connection state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::packets::codec::{WireRecord, decode_packet, is_valid_packet};
use crate::packets::error::CodecError;
use crate::packets::gain_modify::GainModify;
use crate::packets::lane_loudness::LaneLoudness;

/// A decoded inbound message, tagged by packet kind.
///
/// Record order within each variant is the wire order of the packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    LaneLoudness(Vec<LaneLoudness>),
    GainModify(Vec<GainModify>),
}

impl Message {
    /// Protocol-level name of the packet kind this message decodes.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Message::LaneLoudness(_) => LaneLoudness::KIND_NAME,
            Message::GainModify(_) => GainModify::KIND_NAME,
        }
    }
}

/// Errors reported by [`PacketRegistry::dispatch`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("empty packet buffer")]
    EmptyBuffer,
    #[error("unrecognized packet: tag {tag:#04x}, {len} bytes")]
    UnrecognizedPacket { tag: u8, len: usize },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// One registry row: a packet kind's tag, name, silent classifier, and
/// decoder.
pub struct KindEntry {
    tag: u8,
    name: &'static str,
    probe: fn(&[u8]) -> bool,
    decode: fn(&[u8]) -> Result<Message, CodecError>,
}

fn decode_lane_loudness(bytes: &[u8]) -> Result<Message, CodecError> {
    decode_packet::<LaneLoudness>(bytes).map(Message::LaneLoudness)
}

fn decode_gain_modify(bytes: &[u8]) -> Result<Message, CodecError> {
    decode_packet::<GainModify>(bytes).map(Message::GainModify)
}

impl KindEntry {
    /// Registry entry for lane-loudness telemetry packets.
    pub fn lane_loudness() -> Self {
        Self {
            tag: LaneLoudness::TYPE_TAG,
            name: LaneLoudness::KIND_NAME,
            probe: is_valid_packet::<LaneLoudness>,
            decode: decode_lane_loudness,
        }
    }

    /// Registry entry for gain-modify control packets.
    pub fn gain_modify() -> Self {
        Self {
            tag: GainModify::TYPE_TAG,
            name: GainModify::KIND_NAME,
            probe: is_valid_packet::<GainModify>,
            decode: decode_gain_modify,
        }
    }

    pub fn tag(&self) -> u8 {
        self.tag
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Read-only table mapping packet kinds to their classifier/decoder pair.
///
/// Built once before any traffic; dispatch itself takes `&self` only, so
/// the registry is safe to share across message-handling tasks.
pub struct PacketRegistry {
    kinds: Vec<KindEntry>,
}

impl PacketRegistry {
    /// Build a registry from an explicit entry list.
    ///
    /// Panics if two entries declare the same type tag: dispatch
    /// correctness depends on tag uniqueness, and a collision is a
    /// configuration bug, not a runtime condition.
    pub fn new(kinds: Vec<KindEntry>) -> Self {
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert!(
                    a.tag != b.tag,
                    "duplicate packet type tag {:#04x} ({} and {})",
                    a.tag,
                    a.name,
                    b.name
                );
            }
        }
        Self { kinds }
    }

    /// Registry covering every kind this crate implements.
    pub fn with_default_kinds() -> Self {
        Self::new(vec![KindEntry::lane_loudness(), KindEntry::gain_modify()])
    }

    /// Registered kinds in dispatch order.
    pub fn kinds(&self) -> impl Iterator<Item = &KindEntry> {
        self.kinds.iter()
    }

    /// Classify and decode one inbound buffer.
    ///
    /// Probes each kind's silent classifier in registration order; the
    /// first claimant decodes the buffer. A buffer no kind claims is
    /// reported as unrecognized, never silently dropped.
    pub fn dispatch(&self, bytes: &[u8]) -> Result<Message, DispatchError> {
        let Some(&tag) = bytes.first() else {
            return Err(DispatchError::EmptyBuffer);
        };
        for kind in &self.kinds {
            if (kind.probe)(bytes) {
                return (kind.decode)(bytes).map_err(DispatchError::from);
            }
        }
        Err(DispatchError::UnrecognizedPacket {
            tag,
            len: bytes.len(),
        })
    }
}

//! Gain-modify control packets.
//!
//! Sent by the console client to set a lane's fader gain: the `0x20` type
//! tag followed by two-byte records of lane id and quantized gain. Same
//! framing contract as lane-loudness, different tag and field meaning.

pub mod layout;
pub mod record;

pub use record::GainModify;

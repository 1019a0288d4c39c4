//! Mixwire core library: the mixer control-plane packet codec.
//!
//! This crate implements the binary contract between a mixing console
//! client and a mixer server. A packet is one type-tag byte followed by
//! concatenated fixed-width records of a single kind; record codecs
//! (layout/record) define each kind, generic machinery validates framing,
//! and the dispatcher routes an inbound buffer to the right decoder by its
//! leading tag. Codecs are byte-oriented and side-effect free; transport
//! and UI concerns live in collaborating crates.
//!
//! Invariants:
//! - Every record field is range-checked at construction; no clamping.
//! - Payload length is an exact multiple of the record width; a packet
//!   never carries a partial trailing record.
//! - Record order is preserved end-to-end within a packet.
//! - Malformed buffers surface a specific error; nothing is dropped
//!   silently.
//!
//! Version française (résumé):
//! Cette crate fournit le codec binaire du plan de contrôle de la console :
//! un octet d'étiquette puis des enregistrements de largeur fixe d'un même
//! type. Les champs sont validés à la construction, la longueur de la
//! charge est un multiple exact de la largeur d'enregistrement, l'ordre
//! des enregistrements est préservé et toute trame malformée produit une
//! erreur explicite.
//!
//! # Examples
//! ```
//! use mixwire_core::{LaneLoudness, Message, PacketRegistry, encode_packet};
//!
//! let records = vec![
//!     LaneLoudness::new(1, 200)?,
//!     LaneLoudness::new(2, 50)?,
//! ];
//! let packet = encode_packet(&records)?;
//! assert_eq!(packet, vec![0x40, 1, 200, 2, 50]);
//!
//! let registry = PacketRegistry::with_default_kinds();
//! match registry.dispatch(&packet)? {
//!     Message::LaneLoudness(decoded) => assert_eq!(decoded, records),
//!     other => panic!("unexpected kind: {}", other.kind_name()),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod dispatch;
mod packets;

pub use dispatch::{DispatchError, KindEntry, Message, PacketRegistry};
pub use packets::codec::{
    WireRecord, decode_packet, encode_packet, is_valid_packet, validate_packet,
};
pub use packets::error::CodecError;
pub use packets::gain_modify::GainModify;
pub use packets::lane_loudness::LaneLoudness;

//! Lane-loudness telemetry packets.
//!
//! The mixer server streams one loudness reading per lane; a packet is the
//! `0x40` type tag followed by any number of two-byte records, each a lane
//! id and its quantized loudness. Records are range-checked on
//! construction so an encoded packet can never carry an out-of-range
//! field.
//!
//! Wire offsets live in `layout`; the typed record and its byte
//! conversions in `record`.
//!
//! Version française (résumé):
//! Paquets de télémétrie d'intensité par voie : étiquette `0x40` puis des
//! enregistrements de deux octets (id de voie, intensité quantifiée). Les
//! champs sont validés à la construction, les positions sont dans
//! `layout`.

pub mod layout;
pub mod record;

pub use record::LaneLoudness;

#![no_std]

//! An encoder framing 32-bit words as printable ASCII for asynchronous
//! serial links.
//!
//! RECE-232 splits each longword into alternating five- and six-bit fields,
//! tags every field so a receiver can resynchronize after dropped or
//! corrupted characters, and couples consecutive words through a
//! checksum-derived spacer so repeated payloads never alias on the wire.
//! Every stream closes with a three-character checksum footer. Two
//! wire-incompatible checksum variants exist: a Fletcher-16 over CRC-8
//! residues ([`sans::Fletcher`]) and a CRC-16 in the style of CRC-16/DNP
//! ([`sans::Dnp`]); a receiver must know ahead of time which one produced
//! a stream.
//!
//! Most users should begin with the functions in the [`avec`] module.
//! Applications needing finer control over emission (such as those running
//! on embedded systems) can drive the encoder in the [`sans`] module
//! directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable writer-based encoder (default).

pub mod avec;
pub mod sans;

//! Core encoding engine, free of any I/O.
//!
//! This module is intended for applications that need fine control over
//! how encoded characters leave the process. See [`crate::avec`] for
//! implementations covering common encoding patterns.
//!
//! # Architecture
//!
//! An encoding session is an [`Encoder`] value holding exactly two pieces
//! of state: the six-bit spacer injected into the next word's character
//! group, and the checksum accumulator the spacer is derived from. The
//! checksum algorithm is chosen once, at construction, through the type
//! parameter; [`Fletcher`] and [`Dnp`] produce wire-incompatible streams
//! and must never be mixed.
//!
//! Emission is a push model: every operation writes its characters
//! through a caller-supplied [`ByteSink`], synchronously and one at a
//! time, with no internal buffering. A sink that blocks stalls the caller
//! for the duration of that call; a sink that fails aborts it. Encoding a
//! word always costs exactly eight sink calls, and closing the session
//! always costs exactly three, so a stream of `n` words occupies
//! [`size`]`(n)` characters on the wire.
//!
//! Dropping an encoder without calling [`Encoder::finish`] leaves the
//! stream unterminated. That is a valid but incomplete transmission, not
//! an error; a receiver will simply never see the footer.

pub mod check;
pub mod encoder;

mod word;

pub use check::{Checksum, Dnp, Fletcher};
pub use encoder::{ByteSink, Encoder, FnSink, HeaderRange, size};

//! Writer-based encoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::Write;
use std::vec::Vec;

use thiserror::Error;

use crate::sans::{ByteSink, Checksum, Encoder};

extern crate std;

/// Errors occurring while encoding to a writer.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied writer.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Sink writing characters to a [`std::io::Write`] implementation.
pub struct WriterSink<W>(pub W);

impl<W: Write> ByteSink for WriterSink<W> {
    type Error = std::io::Error;

    fn accept(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.0.write_all(&[byte])
    }
}

impl ByteSink for Vec<u8> {
    type Error = core::convert::Infallible;

    fn accept(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

/// Encode a word sequence to a writer.
///
/// This method is also re-exported as `rece232::avec::encode_writer`.
///
/// _Requires Cargo feature `std`._
pub fn encode<C: Checksum>(header: u8, words: &[u32], w: &mut impl Write) -> Result<(), Error> {
    let mut sink = WriterSink(w);

    let mut encoder = Encoder::<C>::init(header);
    for &word in words {
        encoder.encode_word(word, &mut sink)?;
    }
    encoder.finish(&mut sink)?;

    Ok(())
}

//! Slice-based encoder implementation.

use thiserror::Error;

use crate::sans::{ByteSink, Checksum, Encoder, size};

/// Errors occurring while encoding into a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the output slice.
    #[error("Unexpectedly reached the end of the output slice.")]
    EndOfSlice,
}

/// Sink writing characters to consecutive positions of a slice.
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    written: usize,
}

impl<'a> SliceSink<'a> {
    /// Create a sink over an output slice.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, written: 0 }
    }

    /// The number of characters written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl ByteSink for SliceSink<'_> {
    type Error = Error;

    fn accept(&mut self, byte: u8) -> Result<(), Error> {
        let slot = self.buf.get_mut(self.written).ok_or(Error::EndOfSlice)?;
        *slot = byte;
        self.written += 1;

        Ok(())
    }
}

/// Encode a word sequence into a slice, returning the encoded length.
///
/// The output slice must hold at least [`size`]`(words.len())` bytes.
///
/// This method is also re-exported as `rece232::avec::encode_slice`.
pub fn encode<C: Checksum>(header: u8, words: &[u32], out: &mut [u8]) -> Result<usize, Error> {
    let mut sink = SliceSink::new(out);

    let mut encoder = Encoder::<C>::init(header);
    for &word in words {
        encoder.encode_word(word, &mut sink)?;
    }
    encoder.finish(&mut sink)?;

    debug_assert_eq!(sink.written(), size(words.len()));
    Ok(sink.written())
}

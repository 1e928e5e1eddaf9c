//! The encoding session state machine.

use core::convert::Infallible;

use thiserror::Error;

use super::check::Checksum;
use super::word;

/// Receive encoded characters one at a time.
///
/// The encoder invokes the sink synchronously, once per produced
/// character, with no internal buffering. A sink failure aborts the
/// in-progress operation and propagates out unchanged; the encoder never
/// retries. After an aborted operation the session state is unspecified
/// and the encoder should be abandoned.
pub trait ByteSink {
    /// The error produced when a character cannot be accepted.
    type Error;

    /// Accept a single encoded character.
    fn accept(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// Sink forwarding each character to a closure. Infallible.
pub struct FnSink<F>(pub F);

impl<F: FnMut(u8)> ByteSink for FnSink<F> {
    type Error = Infallible;

    fn accept(&mut self, byte: u8) -> Result<(), Self::Error> {
        (self.0)(byte);
        Ok(())
    }
}

/// The number of characters a session of `words` words occupies on the
/// wire: eight per word, plus the three-character footer.
pub const fn size(words: usize) -> usize {
    8 * words + 3
}

/// A header wider than six bits was rejected.
#[derive(Debug, Error)]
#[error("Header value {0:#04x} does not fit in six bits.")]
pub struct HeaderRange(pub u8);

/// A single encoding session.
///
/// Sessions sequence `init`, any number of `encode_word` calls, and one
/// `finish`. The checksum algorithm `C` is fixed for the session;
/// independent sessions never share state and may run concurrently.
#[derive(Debug)]
pub struct Encoder<C: Checksum> {
    spacer: u8,
    checksum: C,
}

impl<C: Checksum> Encoder<C> {
    /// Open an encoding session.
    ///
    /// The low six bits of `header` seed the checksum and serve as the
    /// first word's spacer; excess bits are silently discarded. Nothing
    /// is emitted until the first word.
    pub fn init(header: u8) -> Self {
        let spacer = header & 0b11_1111;

        Self {
            spacer,
            checksum: C::seed(spacer),
        }
    }

    /// Open an encoding session, rejecting a header wider than six bits.
    ///
    /// [`Encoder::init`] masks instead, which is the wire-compatible
    /// default.
    pub fn init_strict(header: u8) -> Result<Self, HeaderRange> {
        if header > 0b11_1111 {
            Err(HeaderRange(header))
        } else {
            Ok(Self::init(header))
        }
    }

    /// Encode one word as eight characters through the sink.
    ///
    /// The word is split around the current spacer, emitted, and folded
    /// into the checksum; the spacer for the following word is derived
    /// from the updated accumulator. Word order is significant.
    pub fn encode_word<S: ByteSink>(&mut self, word: u32, sink: &mut S) -> Result<(), S::Error> {
        let fields = word::split(word, self.spacer);
        word::emit_group(&fields, sink)?;

        self.checksum.absorb(word, &fields);
        self.spacer = self.checksum.spacer();

        Ok(())
    }

    /// Close the session, emitting the checksum as the three-character
    /// footer.
    ///
    /// Consuming the encoder makes the footer terminal: no further words
    /// can be appended to a finished stream. A session finished before
    /// any word was encoded is valid and occupies three characters.
    pub fn finish<S: ByteSink>(self, sink: &mut S) -> Result<(), S::Error> {
        word::emit_footer(self.checksum.value(), sink)
    }
}

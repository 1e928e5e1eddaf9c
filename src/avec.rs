//! Convenience interfaces for common encoding patterns.
//!
//! The functions in this module encode a complete word sequence in one
//! call, publishing to a caller slice or to a writer. Both are thin
//! drivers over the [`crate::sans`] engine and agree byte-for-byte with
//! it.

pub mod slice;
#[cfg(feature = "std")]
pub mod writer;

pub use slice::encode as encode_slice;
#[cfg(feature = "std")]
pub use writer::encode as encode_writer;

use crate::sans::ByteSink;

/// Sink adapter replacing ASCII delete with a horizontal tab.
///
/// An all-ones sextet is tagged to 127 (ASCII DEL), which some terminals
/// and line disciplines refuse to carry. This adapter substitutes a tab
/// on the way to the inner sink; the receiving side must convert tabs
/// back before verifying the stream.
pub struct TabSink<S>(pub S);

impl<S: ByteSink> ByteSink for TabSink<S> {
    type Error = S::Error;

    fn accept(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.0.accept(if byte == 127 { b'\t' } else { byte })
    }
}

//! Splitting words into tagged character groups.

use tartan_bitfield::bitfield;

use super::encoder::ByteSink;

/// Tag marking a five-bit field on the wire.
pub(super) const QUINTET_TAG: u8 = 0x20;
/// Tag marking a six-bit field on the wire.
pub(super) const SEXTET_TAG: u8 = 0x40;

/// Split a word and its spacer into the eight fields of a character
/// group, in transmission order.
///
/// The eighth field is the local parity: the XOR of the other seven,
/// complemented over six bits. A receiver can check a single group
/// against it without the running checksum.
pub(super) fn split(word: u32, spacer: u8) -> [u8; 8] {
    bitfield! {
        struct Payload(u32) {
            [0..5] q0: u8,
            [5..11] s0: u8,
            [11..16] q1: u8,
            [16..21] q2: u8,
            [21..27] s1: u8,
            [27..32] q3: u8,
        }
    }

    let w = Payload(word);
    let mut fields = [w.q0(), w.s0(), w.q1(), spacer, w.q2(), w.s1(), w.q3(), 0];

    let parity = fields[..7].iter().fold(0, |acc, f| acc ^ f);
    fields[7] = parity ^ 0b11_1111;

    fields
}

/// Emit a character group as eight tagged characters.
pub(super) fn emit_group<S: ByteSink>(fields: &[u8; 8], sink: &mut S) -> Result<(), S::Error> {
    for (i, &field) in fields.iter().enumerate() {
        let tag = if i % 2 == 0 { QUINTET_TAG } else { SEXTET_TAG };
        sink.accept(field | tag)?;
    }

    Ok(())
}

/// Emit a sixteen-bit checksum as the three-character footer.
pub(super) fn emit_footer<S: ByteSink>(value: u16, sink: &mut S) -> Result<(), S::Error> {
    bitfield! {
        struct Footer(u16) {
            [0..5] low: u8,
            [5..11] mid: u8,
            [11..16] high: u8,
        }
    }

    let f = Footer(value);

    sink.accept(f.low() | QUINTET_TAG)?;
    sink.accept(f.mid() | SEXTET_TAG)?;
    sink.accept(f.high() | QUINTET_TAG)
}

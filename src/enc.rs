use crate::CROCK32_CHARS;

/// Encodes a byte slice to Crock32.
///
/// Bits are packed big-endian: each byte is shifted into an accumulator and a
/// symbol is emitted for every full 5 bits, top bits first. A final partial
/// group is left-padded with zero bits, so the output is always exactly
/// `ceil(len * 8 / 5)` symbols with no `=` padding. The empty slice encodes
/// to the empty string.
pub fn c32enc(src: &[u8]) -> String {
    let mut out = String::with_capacity((src.len() * 8).div_ceil(5));
    let mut bit_buf = 0u16;
    let mut num_bits = 0u32;

    for &byte in src {
        bit_buf = (bit_buf << 8) | u16::from(byte);
        num_bits += 8;
        while num_bits >= 5 {
            num_bits -= 5;
            out.push(CROCK32_CHARS[((bit_buf >> num_bits) & 0x1F) as usize] as char);
        }
    }

    if num_bits > 0 {
        out.push(CROCK32_CHARS[((bit_buf << (5 - num_bits)) & 0x1F) as usize] as char);
    }

    out
}

use crate::error::DecodeError;
use crate::CROCK32_CHARS;

const INVALID: u8 = u8::MAX;

const fn generate_decode_lut(alphabet: &[u8; 32]) -> [u8; 256] {
    let mut lut = [INVALID; 256];
    let mut i = 0u8;
    while i < 32 {
        let char_code = alphabet[i as usize];
        lut[char_code.to_ascii_lowercase() as usize] = i;
        lut[char_code.to_ascii_uppercase() as usize] = i;
        i += 1;
    }
    // Transcription aliases: glyphs excluded from the alphabet fold onto the
    // symbol they are commonly misread as.
    lut[b'O' as usize] = lut[b'0' as usize];
    lut[b'o' as usize] = lut[b'0' as usize];
    lut[b'I' as usize] = lut[b'1' as usize];
    lut[b'i' as usize] = lut[b'1' as usize];
    lut[b'L' as usize] = lut[b'1' as usize];
    lut[b'l' as usize] = lut[b'1' as usize];
    lut[b'U' as usize] = lut[b'V' as usize];
    lut[b'u' as usize] = lut[b'V' as usize];
    lut
}

const CROCK32_LUT: [u8; 256] = generate_decode_lut(CROCK32_CHARS);

/// Decodes a Crock32 string back to bytes.
///
/// Accepts either case and the transcription aliases `o/O -> 0`,
/// `i/I/l/L -> 1`, `u/U -> V`. The output is always `floor(len * 5 / 8)`
/// bytes. Fails on the first character outside the normalized alphabet, and
/// rejects inputs whose trailing padding bits are non-zero since no encoder
/// output ever contains them.
pub fn c32dec(src: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(src.len() * 5 / 8);
    let mut bit_buf = 0u16;
    let mut num_bits = 0u32;

    for (position, character) in src.chars().enumerate() {
        let value = if character.is_ascii() {
            CROCK32_LUT[character as usize]
        } else {
            INVALID
        };
        if value == INVALID {
            return Err(DecodeError::InvalidCharacter { position, character });
        }
        bit_buf = (bit_buf << 5) | u16::from(value);
        num_bits += 5;
        if num_bits >= 8 {
            num_bits -= 8;
            out.push((bit_buf >> num_bits) as u8);
        }
    }

    if num_bits > 0 && (bit_buf & ((1 << num_bits) - 1)) != 0 {
        return Err(DecodeError::TrailingBits);
    }

    Ok(out)
}

//! Byte-mode data encoding: version selection and bit-stream construction.

use crate::blocks::data_codewords;
use crate::types::{DataTooLong, Version};

/// Byte-mode mode indicator, 0b0100.
const MODE_BYTE: [u8; 4] = [0, 1, 0, 0];

/// Pad codewords alternated until the data capacity is filled.
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Largest input, in bytes, that `version` can hold at level M.
pub fn max_capacity_bytes(version: Version) -> usize {
    (8 * data_codewords(version) - 4 - version.char_count_bits()) / 8
}

/// Pick the smallest version 1-13 whose data capacity fits `length` input
/// bytes, counting the mode indicator and character count field.
pub fn select_version(length: usize) -> Result<Version, DataTooLong> {
    for version in Version::ALL {
        let header_bits = 4 + version.char_count_bits();
        if header_bits + 8 * length <= 8 * data_codewords(version) {
            return Ok(version);
        }
    }
    Err(DataTooLong { length, max_capacity: max_capacity_bytes(Version::MAX) })
}

/// Encode `data` for `version`, producing exactly `data_codewords(version)`
/// codewords: mode indicator, character count, raw bytes, terminator,
/// byte-alignment zeros, then alternating 0xEC/0x11 pad bytes.
pub fn encode_data(data: &[u8], version: Version) -> Vec<u8> {
    let capacity_bits = 8 * data_codewords(version);
    let mut bits: Vec<u8> = Vec::with_capacity(capacity_bits);

    bits.extend_from_slice(&MODE_BYTE);
    push_bits(&mut bits, data.len() as u32, version.char_count_bits());
    for &byte in data {
        push_bits(&mut bits, byte as u32, 8);
    }

    // Terminator of up to 4 zero bits, shorter if capacity is nearly full.
    let terminator = 4.min(capacity_bits - bits.len());
    bits.resize(bits.len() + terminator, 0);
    // Zero-pad to the next codeword boundary.
    while bits.len() % 8 != 0 {
        bits.push(0);
    }

    let mut codewords = bits_to_bytes(&bits);
    let mut pad = 0;
    while codewords.len() < data_codewords(version) {
        codewords.push(PAD_BYTES[pad % 2]);
        pad += 1;
    }

    codewords
}

fn push_bits(bits: &mut Vec<u8>, value: u32, count: usize) {
    for i in (0..count).rev() {
        bits.push(((value >> i) & 1) as u8);
    }
}

fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= bit << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}

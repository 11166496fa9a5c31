//! Format and version information: BCH-protected fields QR readers use to
//! learn the error-correction level, mask index, and symbol version.

use crate::matrix::Matrix;
use crate::types::{MaskPattern, Version};

// Precomputed 15-bit format values for level M, one per mask index, with
// BCH(15,5) remainder and the fixed 0x5412 XOR mask already applied.
include!(concat!(env!("OUT_DIR"), "/format_table.rs"));

/// 18-bit version information for versions 7 and up: the 6-bit version
/// number followed by a BCH(18,6) remainder over generator 0x1F25.
pub fn version_info_bits(version: Version) -> u32 {
    let value = version as u32;
    let mut rem = value;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * 0x1F25);
    }
    (value << 12) | rem
}

/// Write both redundant copies of the format info for `mask` into the
/// reserved strips. Level M is fixed for this encoder.
pub fn write_format_info(matrix: &mut Matrix, mask: MaskPattern) {
    let bits = FORMAT_INFO_M[mask.index()];
    let size = matrix.size();
    let bit = |i: usize| ((bits >> i) & 1) as u8;

    // First copy flanks the top-left finder, stepping over the timing
    // row/column at index 6.
    for i in 0..6 {
        matrix.set_function(i, 8, bit(i));
    }
    matrix.set_function(7, 8, bit(6));
    matrix.set_function(8, 8, bit(7));
    matrix.set_function(8, 7, bit(8));
    for i in 9..15 {
        matrix.set_function(8, 14 - i, bit(i));
    }

    // Second copy under the top-right finder and beside the bottom-left one.
    for i in 0..8 {
        matrix.set_function(8, size - 1 - i, bit(i));
    }
    for i in 8..15 {
        matrix.set_function(size - 15 + i, 8, bit(i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_table_matches_published_level_m_values() {
        let expected: [u16; 8] =
            [0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0];
        assert_eq!(FORMAT_INFO_M, expected);
    }

    #[test]
    fn format_values_bch_verify() {
        // Strip the XOR mask and re-derive the remainder from the 5 data bits.
        for &value in &FORMAT_INFO_M {
            let unmasked = value ^ 0x5412;
            let data = unmasked >> 10;
            let mut rem = data;
            for _ in 0..10 {
                rem = (rem << 1) ^ ((rem >> 9) * 0x537);
            }
            assert_eq!(unmasked & 0x3FF, rem);
            // Level M encodes as 00 in the two high bits.
            assert_eq!(data >> 3, 0b00);
        }
    }

    #[test]
    fn version_info_matches_published_values() {
        assert_eq!(version_info_bits(Version::V7), 0x07C94);
        assert_eq!(version_info_bits(Version::V8), 0x085BC);
        assert_eq!(version_info_bits(Version::V13), 0x0D847);
    }

    #[test]
    fn format_copies_land_in_reserved_cells_only() {
        let mut matrix = Matrix::with_function_patterns(Version::V2);
        let before_free = matrix.free_cells();
        write_format_info(&mut matrix, MaskPattern::Pattern3);
        assert_eq!(matrix.free_cells(), before_free);
    }

    #[test]
    fn both_format_copies_carry_the_same_bits() {
        for mask in MaskPattern::ALL {
            let mut matrix = Matrix::with_function_patterns(Version::V1);
            write_format_info(&mut matrix, mask);
            let size = matrix.size();

            let mut first = 0u16;
            for i in 0..6 {
                first |= (matrix.get(i, 8) as u16) << i;
            }
            first |= (matrix.get(7, 8) as u16) << 6;
            first |= (matrix.get(8, 8) as u16) << 7;
            first |= (matrix.get(8, 7) as u16) << 8;
            for i in 9..15 {
                first |= (matrix.get(8, 14 - i) as u16) << i;
            }

            let mut second = 0u16;
            for i in 0..8 {
                second |= (matrix.get(8, size - 1 - i) as u16) << i;
            }
            for i in 8..15 {
                second |= (matrix.get(size - 15 + i, 8) as u16) << i;
            }

            assert_eq!(first, second);
            assert_eq!(first, FORMAT_INFO_M[mask.index()]);
        }
    }
}

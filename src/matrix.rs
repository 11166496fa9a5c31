//! Module grid construction: function patterns, reservation tracking, and
//! zigzag data placement.

use crate::alignment::get_alignment_positions;
use crate::format::version_info_bits;
use crate::types::{MaskPattern, Version};

/// In-progress module grid. `modules` holds colors (0 white, 1 black) and
/// `reserved` marks function-pattern and format/version cells that data
/// placement and masking must never touch.
#[derive(Clone)]
pub struct Matrix {
    version: Version,
    size: usize,
    modules: Vec<u8>,
    reserved: Vec<bool>,
}

impl Matrix {
    /// Build the grid for `version` with every function pattern placed and
    /// the format-info area reserved. Data cells are still white/unset.
    pub fn with_function_patterns(version: Version) -> Matrix {
        let size = version.size();
        let mut matrix = Matrix {
            version,
            size,
            modules: vec![0; size * size],
            reserved: vec![false; size * size],
        };

        matrix.place_finder_pattern(0, 0);
        matrix.place_finder_pattern(0, size as isize - 7);
        matrix.place_finder_pattern(size as isize - 7, 0);
        matrix.place_alignment_patterns();
        matrix.place_timing_patterns();
        matrix.reserve_format_areas();
        // The fixed dark module next to the bottom-left finder.
        matrix.set_function(size - 8, 8, 1);
        if version >= Version::V7 {
            matrix.place_version_info();
        }

        matrix
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.modules[row * self.size + col]
    }

    pub fn is_reserved(&self, row: usize, col: usize) -> bool {
        self.reserved[row * self.size + col]
    }

    /// Set a function/format cell and mark it reserved.
    pub(crate) fn set_function(&mut self, row: usize, col: usize, value: u8) {
        self.modules[row * self.size + col] = value;
        self.reserved[row * self.size + col] = true;
    }

    fn set_data(&mut self, row: usize, col: usize, value: u8) {
        self.modules[row * self.size + col] = value;
    }

    /// Flip a non-reserved cell; mask application calls this.
    pub(crate) fn flip(&mut self, row: usize, col: usize) {
        self.modules[row * self.size + col] ^= 1;
    }

    /// 7x7 concentric squares at `(top, left)` plus the one-module white
    /// separator ring, clamped to the grid. Everything touched is reserved.
    fn place_finder_pattern(&mut self, top: isize, left: isize) {
        let size = self.size as isize;
        for dr in -1..8 {
            for dc in -1..8 {
                let row = top + dr;
                let col = left + dc;
                if row < 0 || col < 0 || row >= size || col >= size {
                    continue;
                }
                let in_core = (0..7).contains(&dr) && (0..7).contains(&dc);
                let dark = in_core
                    && (dr == 0
                        || dr == 6
                        || dc == 0
                        || dc == 6
                        || ((2..=4).contains(&dr) && (2..=4).contains(&dc)));
                self.set_function(row as usize, col as usize, dark as u8);
            }
        }
    }

    /// 5x5 alignment patterns at the version's center cross product,
    /// skipping any pattern that would overlap an already-reserved cell.
    fn place_alignment_patterns(&mut self) {
        let positions = get_alignment_positions(self.version);
        for &center_row in &positions {
            for &center_col in &positions {
                let overlaps = (0..5).any(|dr| {
                    (0..5).any(|dc| self.is_reserved(center_row - 2 + dr, center_col - 2 + dc))
                });
                if overlaps {
                    continue;
                }
                for dr in 0..5i32 {
                    for dc in 0..5i32 {
                        // Black ring at Chebyshev distance 2, black center.
                        let dist = (dr - 2).abs().max((dc - 2).abs());
                        let dark = (dist != 1) as u8;
                        self.set_function(
                            (center_row as i32 - 2 + dr) as usize,
                            (center_col as i32 - 2 + dc) as usize,
                            dark,
                        );
                    }
                }
            }
        }
    }

    /// Alternating modules along row 6 and column 6, black at even offsets,
    /// leaving the finder reservations alone.
    fn place_timing_patterns(&mut self) {
        for i in 0..self.size {
            let value = ((i + 1) % 2) as u8;
            if !self.is_reserved(6, i) {
                self.set_function(6, i, value);
            }
            if !self.is_reserved(i, 6) {
                self.set_function(i, 6, value);
            }
        }
    }

    /// Reserve the format-info strips around the three finder corners. The
    /// bits themselves are written once a mask has been chosen.
    fn reserve_format_areas(&mut self) {
        let size = self.size;
        for i in 0..=8 {
            if !self.is_reserved(8, i) {
                self.set_function(8, i, 0);
            }
            if !self.is_reserved(i, 8) {
                self.set_function(i, 8, 0);
            }
        }
        for col in size - 8..size {
            self.set_function(8, col, 0);
        }
        for row in size - 7..size {
            self.set_function(row, 8, 0);
        }
    }

    /// Two 3x6 version-info blocks near the top-right and bottom-left
    /// finders, versions 7 and up.
    fn place_version_info(&mut self) {
        let bits = version_info_bits(self.version);
        let size = self.size;
        for i in 0..18 {
            let bit = ((bits >> i) & 1) as u8;
            self.set_function(i / 3, size - 11 + i % 3, bit);
            self.set_function(size - 11 + i % 3, i / 3, bit);
        }
    }

    /// Thread the interleaved codewords MSB-first through the zigzag
    /// column-pair walk, right to left, alternating vertical direction and
    /// stepping over the timing column. Reserved cells are skipped without
    /// consuming a bit; if the bits run out, remaining cells stay white.
    pub fn place_data(&mut self, codewords: &[u8]) {
        let size = self.size;
        let mut bits = codewords
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1));

        let mut upward = true;
        let mut col = size as isize - 1;
        while col > 0 {
            if col == 6 {
                col -= 1;
            }
            for step in 0..size {
                let row = if upward { size - 1 - step } else { step };
                for dx in 0..2 {
                    let c = (col - dx) as usize;
                    if !self.is_reserved(row, c) {
                        let bit = bits.next().unwrap_or(0);
                        self.set_data(row, c, bit);
                    }
                }
            }
            upward = !upward;
            col -= 2;
        }
    }

    /// Count of cells available to data placement.
    pub fn free_cells(&self) -> usize {
        self.reserved.iter().filter(|&&r| !r).count()
    }

    /// Test-only grid with no reservations, for exercising the penalty
    /// rules on hand-built patterns.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[Vec<u8>]) -> Matrix {
        let size = rows.len();
        Matrix {
            version: Version::V1,
            size,
            modules: rows.iter().flatten().copied().collect(),
            reserved: vec![false; size * size],
        }
    }

    pub(crate) fn finish(self, mask: MaskPattern, penalty: u32) -> ModuleMatrix {
        ModuleMatrix {
            size: self.size,
            version: self.version,
            mask,
            penalty,
            modules: self.modules,
        }
    }
}

/// A fully resolved QR symbol: every cell is 0 (white) or 1 (black), exactly
/// one mask is applied, and the matching format info is written.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ModuleMatrix {
    size: usize,
    version: Version,
    mask: MaskPattern,
    penalty: u32,
    modules: Vec<u8>,
}

impl ModuleMatrix {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// The mask the penalty scorer settled on.
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Total penalty score of the chosen mask.
    pub fn penalty(&self) -> u32 {
        self.penalty
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.modules[row * self.size + col]
    }

    /// Row-major copy, one `Vec<u8>` per row of modules.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.modules.chunks(self.size).map(|row| row.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::total_codewords;

    // Left-over data modules that hold no codeword bits: 7 for versions 2-6,
    // none elsewhere in the 1-13 range.
    fn remainder_bits(version: Version) -> usize {
        if version >= Version::V2 && version <= Version::V6 { 7 } else { 0 }
    }

    #[test]
    fn free_cells_match_codeword_capacity() {
        for v in 1..=13u8 {
            let version = Version::from_u8(v).unwrap();
            let matrix = Matrix::with_function_patterns(version);
            assert_eq!(
                matrix.free_cells(),
                8 * total_codewords(version) + remainder_bits(version),
                "version {}",
                v
            );
        }
    }

    #[test]
    fn finder_cores_are_bit_exact() {
        let matrix = Matrix::with_function_patterns(Version::V3);
        let size = matrix.size();
        for (top, left) in [(0usize, 0usize), (0, size - 7), (size - 7, 0)] {
            for dr in 0..7 {
                for dc in 0..7 {
                    let expected = (dr == 0
                        || dr == 6
                        || dc == 0
                        || dc == 6
                        || ((2..=4).contains(&dr) && (2..=4).contains(&dc)))
                        as u8;
                    assert_eq!(matrix.get(top + dr, left + dc), expected);
                }
            }
        }
    }

    #[test]
    fn separator_rings_are_white() {
        let matrix = Matrix::with_function_patterns(Version::V1);
        // Column 7 flanks the top-left finder core.
        for row in 0..8 {
            assert_eq!(matrix.get(row, 7), 0);
            assert!(matrix.is_reserved(row, 7));
        }
        for col in 0..8 {
            assert_eq!(matrix.get(7, col), 0);
        }
    }

    #[test]
    fn timing_pattern_alternates_between_finders() {
        let matrix = Matrix::with_function_patterns(Version::V4);
        let size = matrix.size();
        for i in 8..size - 8 {
            let expected = ((i + 1) % 2) as u8;
            assert_eq!(matrix.get(6, i), expected, "row timing at {}", i);
            assert_eq!(matrix.get(i, 6), expected, "column timing at {}", i);
        }
    }

    #[test]
    fn dark_module_is_set_and_reserved() {
        for v in 1..=13u8 {
            let version = Version::from_u8(v).unwrap();
            let matrix = Matrix::with_function_patterns(version);
            let size = matrix.size();
            assert_eq!(matrix.get(size - 8, 8), 1);
            assert!(matrix.is_reserved(size - 8, 8));
        }
    }

    #[test]
    fn alignment_pattern_near_finder_is_skipped() {
        // Version 7 lists center 6; (6, 6) collides with the top-left
        // finder separator, so only the free crossings get patterns.
        let matrix = Matrix::with_function_patterns(Version::V7);
        // Center (22, 38) is free: ring at distance 2 black, distance 1
        // white, center black.
        assert_eq!(matrix.get(22, 38), 1);
        assert_eq!(matrix.get(21, 38), 0);
        assert_eq!(matrix.get(20, 38), 1);
        assert!(matrix.is_reserved(22, 38));
    }

    #[test]
    fn version_info_blocks_appear_from_version_7() {
        let six = Matrix::with_function_patterns(Version::V6);
        let size = six.size();
        assert!(!six.is_reserved(0, size - 11));

        let seven = Matrix::with_function_patterns(Version::V7);
        let size = seven.size();
        for i in 0..18 {
            assert!(seven.is_reserved(i / 3, size - 11 + i % 3));
            assert!(seven.is_reserved(size - 11 + i % 3, i / 3));
            // The two copies mirror each other.
            assert_eq!(
                seven.get(i / 3, size - 11 + i % 3),
                seven.get(size - 11 + i % 3, i / 3)
            );
        }
    }

    #[test]
    fn data_placement_fills_every_free_cell() {
        let version = Version::V2;
        let mut matrix = Matrix::with_function_patterns(version);
        let codewords = vec![0xFFu8; total_codewords(version)];
        matrix.place_data(&codewords);

        let size = matrix.size();
        let mut unfilled_dark = 0;
        for row in 0..size {
            for col in 0..size {
                if !matrix.is_reserved(row, col) && matrix.get(row, col) == 0 {
                    unfilled_dark += 1;
                }
            }
        }
        // All-ones codewords blacken every data cell except the 7
        // remainder bits, which stay white by the end-of-data rule.
        assert_eq!(unfilled_dark, 7);
    }

    #[test]
    fn data_placement_starts_at_the_bottom_right_corner() {
        let version = Version::V1;
        let mut matrix = Matrix::with_function_patterns(version);
        let mut codewords = vec![0u8; total_codewords(version)];
        codewords[0] = 0b1010_0000;
        matrix.place_data(&codewords);

        let size = matrix.size();
        // First four bits land right-to-left, bottom-to-top in the last
        // column pair: (20,20), (20,19), (19,20), (19,19).
        assert_eq!(matrix.get(size - 1, size - 1), 1);
        assert_eq!(matrix.get(size - 1, size - 2), 0);
        assert_eq!(matrix.get(size - 2, size - 1), 1);
        assert_eq!(matrix.get(size - 2, size - 2), 0);
    }
}

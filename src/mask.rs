//! The eight data mask patterns and the four-rule penalty scorer that
//! decides between them.

use crate::matrix::Matrix;
use crate::types::MaskPattern;

/// The ISO/IEC 18004 mask condition for `pattern` at `(row, col)`. Decoders
/// recompute these predicates, so they must match bit for bit.
pub fn mask_bit(pattern: MaskPattern, row: usize, col: usize) -> bool {
    match pattern {
        MaskPattern::Pattern0 => (row + col) % 2 == 0,
        MaskPattern::Pattern1 => row % 2 == 0,
        MaskPattern::Pattern2 => col % 3 == 0,
        MaskPattern::Pattern3 => (row + col) % 3 == 0,
        MaskPattern::Pattern4 => (row / 2 + col / 3) % 2 == 0,
        MaskPattern::Pattern5 => (row * col) % 2 + (row * col) % 3 == 0,
        MaskPattern::Pattern6 => ((row * col) % 2 + (row * col) % 3) % 2 == 0,
        MaskPattern::Pattern7 => ((row + col) % 2 + (row * col) % 3) % 2 == 0,
    }
}

/// Flip every non-reserved module where the mask condition holds. Function
/// patterns and format/version areas are never masked.
pub fn apply_mask(matrix: &mut Matrix, pattern: MaskPattern) {
    let size = matrix.size();
    for row in 0..size {
        for col in 0..size {
            if !matrix.is_reserved(row, col) && mask_bit(pattern, row, col) {
                matrix.flip(row, col);
            }
        }
    }
}

/// Total penalty for a masked matrix: the sum of the four independent rules.
/// Lower is better.
pub fn penalty_score(matrix: &Matrix) -> u32 {
    penalty_runs(matrix)
        + penalty_blocks(matrix)
        + penalty_finder_like(matrix)
        + penalty_balance(matrix)
}

/// Rule 1: runs of 5 or more same-colored modules in a row or column cost
/// `length - 2` points each.
pub(crate) fn penalty_runs(matrix: &Matrix) -> u32 {
    let size = matrix.size();
    let mut total = 0;

    for row in 0..size {
        total += line_run_penalty((0..size).map(|col| matrix.get(row, col)));
    }
    for col in 0..size {
        total += line_run_penalty((0..size).map(|row| matrix.get(row, col)));
    }

    total
}

fn line_run_penalty(line: impl Iterator<Item = u8>) -> u32 {
    let mut total = 0;
    let mut run_color = 2u8; // neither color
    let mut run_length = 0u32;

    for module in line {
        if module == run_color {
            run_length += 1;
        } else {
            if run_length >= 5 {
                total += run_length - 2;
            }
            run_color = module;
            run_length = 1;
        }
    }
    if run_length >= 5 {
        total += run_length - 2;
    }

    total
}

/// Rule 2: every 2x2 square of identical modules costs 3 points, counting
/// overlapping windows.
pub(crate) fn penalty_blocks(matrix: &Matrix) -> u32 {
    let size = matrix.size();
    let mut total = 0;
    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let color = matrix.get(row, col);
            if matrix.get(row, col + 1) == color
                && matrix.get(row + 1, col) == color
                && matrix.get(row + 1, col + 1) == color
            {
                total += 3;
            }
        }
    }
    total
}

// 1:1:3:1:1 finder-like run with a 4-module light tail.
const FINDER_SEQ: [u8; 11] = [1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 0];
const FINDER_SEQ_REV: [u8; 11] = [0, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1];

/// Rule 3: each horizontal or vertical 11-module window matching the
/// finder-like sequence (either orientation) costs 40 points.
pub(crate) fn penalty_finder_like(matrix: &Matrix) -> u32 {
    let size = matrix.size();
    if size < 11 {
        return 0;
    }

    let mut total = 0;
    for row in 0..size {
        for start in 0..=size - 11 {
            let matches = |seq: &[u8; 11]| {
                (0..11).all(|i| matrix.get(row, start + i) == seq[i])
            };
            if matches(&FINDER_SEQ) || matches(&FINDER_SEQ_REV) {
                total += 40;
            }
        }
    }
    for col in 0..size {
        for start in 0..=size - 11 {
            let matches = |seq: &[u8; 11]| {
                (0..11).all(|i| matrix.get(start + i, col) == seq[i])
            };
            if matches(&FINDER_SEQ) || matches(&FINDER_SEQ_REV) {
                total += 40;
            }
        }
    }

    total
}

/// Rule 4: deviation of the dark-module share from 50%, in 5% steps, costs
/// 2 points per step.
pub(crate) fn penalty_balance(matrix: &Matrix) -> u32 {
    let size = matrix.size();
    let dark: usize = (0..size)
        .map(|row| (0..size).filter(|&col| matrix.get(row, col) == 1).count())
        .sum();

    let percent = (dark * 100 / (size * size)) as i32;
    let low = percent / 5 * 5;
    let deviation = (low - 50).abs().min((low + 5 - 50).abs());
    deviation as u32 * 2
}

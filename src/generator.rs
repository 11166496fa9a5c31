//! The encoding pipeline: bitstream, error correction, matrix construction,
//! and the eight-mask trial loop.

use crate::blocks::interleave_codewords;
use crate::encoding::{encode_data, select_version};
use crate::format::write_format_info;
use crate::mask::{apply_mask, penalty_score};
use crate::matrix::{Matrix, ModuleMatrix};
use crate::types::{DataTooLong, MaskPattern};

/// Encode `text` as a byte-mode, level-M QR symbol, picking the smallest
/// fitting version (1-13) and the lowest-penalty mask.
pub fn generate(text: &str) -> Result<ModuleMatrix, DataTooLong> {
    generate_bytes(text.as_bytes())
}

/// Byte-slice entry point behind [`generate`]. Input is treated as an
/// opaque 8-bit stream; no character-set transformation is applied.
pub fn generate_bytes(data: &[u8]) -> Result<ModuleMatrix, DataTooLong> {
    let version = select_version(data.len())?;
    let codewords = interleave_codewords(&encode_data(data, version), version);

    let mut base = Matrix::with_function_patterns(version);
    base.place_data(&codewords);

    let mut best: Option<(Matrix, MaskPattern, u32)> = None;
    for pattern in MaskPattern::ALL {
        let mut candidate = base.clone();
        apply_mask(&mut candidate, pattern);
        write_format_info(&mut candidate, pattern);
        let penalty = penalty_score(&candidate);

        // Strict comparison: the first of any tied masks wins.
        let improves = match &best {
            None => true,
            Some((_, _, best_penalty)) => penalty < *best_penalty,
        };
        if improves {
            best = Some((candidate, pattern, penalty));
        }
    }

    let (matrix, pattern, penalty) = best.expect("all eight masks were scored");
    Ok(matrix.finish(pattern, penalty))
}

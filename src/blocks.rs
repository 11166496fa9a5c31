//! Per-version block structure for error-correction level M and the
//! codeword interleaver that produces the final transmission order.

use crate::ecc::generate_ecc;
use crate::types::Version;

/// How a version's data codewords are split into Reed-Solomon blocks.
/// Group 2 may be empty; every block carries `ecc_per_block` ECC codewords.
#[derive(Clone, Copy, Debug)]
pub struct BlockStructure {
    pub ecc_per_block: usize,
    pub group1_blocks: usize,
    pub group1_data: usize,
    pub group2_blocks: usize,
    pub group2_data: usize,
}

// (ecc_per_block, g1 blocks, g1 data/block, g2 blocks, g2 data/block),
// ISO/IEC 18004 table 9, level M rows for versions 1-13.
const BLOCKS_M: [(usize, usize, usize, usize, usize); 13] = [
    (10, 1, 16, 0, 0),
    (16, 1, 28, 0, 0),
    (26, 1, 44, 0, 0),
    (18, 2, 32, 0, 0),
    (24, 2, 43, 0, 0),
    (16, 4, 27, 0, 0),
    (18, 4, 31, 0, 0),
    (22, 2, 38, 2, 39),
    (22, 3, 36, 2, 37),
    (26, 4, 43, 1, 44),
    (30, 1, 50, 4, 51),
    (22, 6, 36, 2, 37),
    (22, 8, 37, 1, 38),
];

pub fn block_structure(version: Version) -> BlockStructure {
    let (ecc_per_block, group1_blocks, group1_data, group2_blocks, group2_data) =
        BLOCKS_M[version as usize - 1];
    BlockStructure { ecc_per_block, group1_blocks, group1_data, group2_blocks, group2_data }
}

/// Data codewords available at level M.
pub fn data_codewords(version: Version) -> usize {
    let b = block_structure(version);
    b.group1_blocks * b.group1_data + b.group2_blocks * b.group2_data
}

/// Data plus ECC codewords, which exactly fill the non-reserved modules.
pub fn total_codewords(version: Version) -> usize {
    let b = block_structure(version);
    data_codewords(version) + (b.group1_blocks + b.group2_blocks) * b.ecc_per_block
}

/// Split `data` into blocks, compute each block's ECC, and interleave both
/// parts round-robin: the i-th data byte of every block in original block
/// order, then the i-th ECC byte of every block.
pub fn interleave_codewords(data: &[u8], version: Version) -> Vec<u8> {
    let structure = block_structure(version);
    debug_assert_eq!(data.len(), data_codewords(version));

    let mut blocks: Vec<&[u8]> = Vec::new();
    let mut offset = 0;
    for _ in 0..structure.group1_blocks {
        blocks.push(&data[offset..offset + structure.group1_data]);
        offset += structure.group1_data;
    }
    for _ in 0..structure.group2_blocks {
        blocks.push(&data[offset..offset + structure.group2_data]);
        offset += structure.group2_data;
    }

    let ecc_blocks: Vec<Vec<u8>> = blocks
        .iter()
        .map(|block| generate_ecc(block, structure.ecc_per_block))
        .collect();

    let mut interleaved = Vec::with_capacity(total_codewords(version));

    let max_data_len = structure.group1_data.max(structure.group2_data);
    for i in 0..max_data_len {
        for block in &blocks {
            if i < block.len() {
                interleaved.push(block[i]);
            }
        }
    }

    // All blocks carry the same ECC length, so this is a straight round-robin.
    for i in 0..structure.ecc_per_block {
        for ecc in &ecc_blocks {
            interleaved.push(ecc[i]);
        }
    }

    interleaved
}

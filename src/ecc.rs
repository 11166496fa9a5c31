//! GF(256) arithmetic and the Reed-Solomon error-correction encoder.
//!
//! The exp/log tables are generated at build time over the QR primitive
//! polynomial 0x11D. QR readers reimplement the identical decoder, so
//! `generate_ecc` has to match ISO/IEC 18004 byte for byte.

include!(concat!(env!("OUT_DIR"), "/gf_tables.rs"));

fn gf_add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiply in GF(256). Total over all byte pairs; zero annihilates.
pub fn gf_multiply(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    // The exp table is doubled, so the summed logs index directly.
    GF_EXP[GF_LOG[a as usize] as usize + GF_LOG[b as usize] as usize]
}

fn gf_exp(exp: usize) -> u8 {
    GF_EXP[exp % 255]
}

/// Build the degree-`degree` Reed-Solomon generator polynomial, the product
/// of `(x - α^i)` for i in `0..degree`. Coefficients are returned highest
/// power first with a leading 1.
pub fn get_generator_polynomial(degree: usize) -> Vec<u8> {
    let mut poly = vec![1u8];

    for i in 0..degree {
        let mut next = vec![0u8; poly.len() + 1];
        for j in 0..poly.len() {
            next[j] = gf_add(next[j], poly[j]);
            next[j + 1] = gf_add(next[j + 1], gf_multiply(poly[j], gf_exp(i)));
        }
        poly = next;
    }

    poly
}

/// Compute `num_ecc_codewords` error-correction bytes for `data` via
/// polynomial long division: the data bytes are the high-order coefficients,
/// and the remainder after dividing by the generator polynomial is the ECC.
pub fn generate_ecc(data: &[u8], num_ecc_codewords: usize) -> Vec<u8> {
    let generator = get_generator_polynomial(num_ecc_codewords);

    let mut message = data.to_vec();
    message.resize(data.len() + num_ecc_codewords, 0);

    for i in 0..data.len() {
        let coeff = message[i];
        if coeff != 0 {
            for j in 0..generator.len() {
                message[i + j] = gf_add(message[i + j], gf_multiply(generator[j], coeff));
            }
        }
    }

    message[data.len()..].to_vec()
}

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

// GF(256) with the QR primitive polynomial x^8 + x^4 + x^3 + x^2 + 1.
const PRIMITIVE: u16 = 0x11D;

fn gf_tables() -> String {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];

    let mut x: u16 = 1;
    for i in 0..255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE;
        }
    }
    // Doubled table so log[a] + log[b] indexes without a wraparound modulo.
    for i in 255..512 {
        exp[i] = exp[i - 255];
    }

    let mut out = String::new();
    writeln!(out, "pub const GF_EXP: [u8; 512] = {:?};", exp).unwrap();
    writeln!(out, "pub const GF_LOG: [u8; 256] = {:?};", log).unwrap();
    out
}

// 15-bit format info for error-correction level M (EC bits 00) and masks
// 0..=7: BCH(15,5) with generator 0x537, then the fixed XOR mask 0x5412.
fn format_table() -> String {
    let mut table = [0u16; 8];
    for mask in 0..8u16 {
        let data = mask; // level M contributes 00 as the two high bits
        let mut rem = data;
        for _ in 0..10 {
            rem = (rem << 1) ^ ((rem >> 9) * 0x537);
        }
        table[mask as usize] = ((data << 10) | rem) ^ 0x5412;
    }

    let mut out = String::new();
    writeln!(out, "pub const FORMAT_INFO_M: [u16; 8] = {:?};", table).unwrap();
    out
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    fs::write(Path::new(&out_dir).join("gf_tables.rs"), gf_tables()).unwrap();
    fs::write(Path::new(&out_dir).join("format_table.rs"), format_table()).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}

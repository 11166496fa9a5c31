//! Byte-mode QR code encoder, ISO/IEC 18004, versions 1-13 at
//! error-correction level M.
//!
//! The pipeline runs data encoding, Reed-Solomon error correction, codeword
//! interleaving, matrix construction, and penalty-scored mask selection, and
//! hands back a fully resolved module matrix:
//!
//! ```
//! let matrix = qr_encoder::generate("HTTPS://EXAMPLE/J/ABC123").unwrap();
//! assert_eq!(matrix.size(), 25);
//! ```
//!
//! `generate` is a pure function: no I/O, no shared mutable state, and a
//! single failure mode (input longer than version 13 can hold).

pub mod alignment;
pub mod blocks;
pub mod ecc;
pub mod encoding;
pub mod format;
pub mod generator;
pub mod mask;
pub mod matrix;
pub mod render;
pub mod types;

pub use generator::{generate, generate_bytes};
pub use matrix::ModuleMatrix;
pub use render::{to_raster, to_svg};
pub use types::{DataTooLong, MaskPattern, Version};

//! Raster, SVG, and terminal output for generated symbols.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::generator::generate;
use crate::matrix::ModuleMatrix;
use crate::types::DataTooLong;

/// Quiet-zone width in modules on each side, per the standard.
pub const QUIET_ZONE: usize = 4;

/// Encode `text` and rasterize it to roughly `target_pixel_size` pixels on a
/// side. The module size is floored, so the result never exceeds the target.
pub fn to_raster(text: &str, target_pixel_size: u32) -> Result<RgbImage, DataTooLong> {
    let matrix = generate(text)?;
    Ok(rasterize(&matrix, target_pixel_size))
}

/// Draw a symbol as black squares on white, quiet zone included.
pub fn rasterize(matrix: &ModuleMatrix, target_pixel_size: u32) -> RgbImage {
    let modules_across = (matrix.size() + 2 * QUIET_ZONE) as u32;
    let module_size = (target_pixel_size / modules_across).max(1);
    let total = modules_across * module_size;

    ImageBuffer::from_fn(total, total, |x, y| {
        let col = (x / module_size) as isize - QUIET_ZONE as isize;
        let row = (y / module_size) as isize - QUIET_ZONE as isize;
        let dark = row >= 0
            && col >= 0
            && (row as usize) < matrix.size()
            && (col as usize) < matrix.size()
            && matrix.get(row as usize, col as usize) == 1;
        if dark {
            Rgb([0u8, 0u8, 0u8])
        } else {
            Rgb([255u8, 255u8, 255u8])
        }
    })
}

/// Render a symbol as a standalone SVG document.
pub fn to_svg(matrix: &ModuleMatrix) -> String {
    let scale = 10;
    let border = QUIET_ZONE * scale;
    let total = matrix.size() * scale + 2 * border;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total, total, total, total
    );
    svg.push_str(&format!(
        r#"<rect width="{}" height="{}" fill="white"/>"#,
        total, total
    ));

    for row in 0..matrix.size() {
        for col in 0..matrix.size() {
            if matrix.get(row, col) == 1 {
                svg.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="black"/>"#,
                    border + col * scale,
                    border + row * scale,
                    scale,
                    scale
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Terminal rendering, two characters per module.
pub fn to_ascii(matrix: &ModuleMatrix) -> String {
    let mut out = String::new();
    for row in 0..matrix.size() {
        for col in 0..matrix.size() {
            out.push_str(if matrix.get(row, col) == 1 { "##" } else { "  " });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_fits_the_target_and_keeps_the_quiet_zone() {
        let img = to_raster("RASTER TEST", 300).unwrap();
        assert!(img.width() <= 300);
        assert_eq!(img.width(), img.height());

        // The quiet zone corner stays white.
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn raster_paints_the_finder_corner_black() {
        let matrix = generate("RASTER TEST").unwrap();
        let img = rasterize(&matrix, 290);
        let module_size = 290 / (matrix.size() as u32 + 8);
        // First module of the top-left finder, just past the quiet zone.
        let px = 4 * module_size;
        assert_eq!(img.get_pixel(px, px).0, [0, 0, 0]);
    }

    #[test]
    fn tiny_targets_fall_back_to_one_pixel_modules() {
        let matrix = generate("x").unwrap();
        let img = rasterize(&matrix, 1);
        assert_eq!(img.width() as usize, matrix.size() + 8);
    }

    #[test]
    fn svg_document_is_well_formed() {
        let matrix = generate("SVG TEST").unwrap();
        let svg = to_svg(&matrix);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"fill="black""#));
    }

    #[test]
    fn ascii_output_has_one_line_per_row() {
        let matrix = generate("ASCII").unwrap();
        let art = to_ascii(&matrix);
        assert_eq!(art.lines().count(), matrix.size());
    }
}

use crate::types::Version;

/// Alignment-pattern center coordinates for versions 1-13. Centers are the
/// cross product of the listed values; patterns overlapping finder
/// reservations are skipped at placement time.
pub fn get_alignment_positions(version: Version) -> Vec<usize> {
    match version {
        Version::V1 => vec![],
        Version::V2 => vec![6, 18],
        Version::V3 => vec![6, 22],
        Version::V4 => vec![6, 26],
        Version::V5 => vec![6, 30],
        Version::V6 => vec![6, 34],
        Version::V7 => vec![6, 22, 38],
        Version::V8 => vec![6, 24, 42],
        Version::V9 => vec![6, 26, 46],
        Version::V10 => vec![6, 28, 50],
        Version::V11 => vec![6, 30, 54],
        Version::V12 => vec![6, 32, 58],
        Version::V13 => vec![6, 34, 62],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_stay_inside_the_grid() {
        for v in 1..=13u8 {
            let version = Version::from_u8(v).unwrap();
            let size = version.size();
            for &pos in &get_alignment_positions(version) {
                assert!(pos + 2 < size, "version {} center {}", v, pos);
                assert!(pos >= 2, "version {} center {}", v, pos);
            }
        }
    }

    #[test]
    fn last_center_sits_seven_modules_from_the_edge() {
        for v in 2..=13u8 {
            let version = Version::from_u8(v).unwrap();
            let positions = get_alignment_positions(version);
            assert_eq!(*positions.last().unwrap(), version.size() - 7, "version {}", v);
        }
    }
}

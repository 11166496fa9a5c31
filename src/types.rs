use std::fmt;

/// QR symbol versions supported by this encoder. Byte mode at error-correction
/// level M tops out at 331 bytes in version 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Version {
    V1 = 1, V2, V3, V4, V5, V6, V7, V8, V9, V10, V11, V12, V13,
}

impl Version {
    pub const MIN: Version = Version::V1;
    pub const MAX: Version = Version::V13;

    pub const ALL: [Version; 13] = [
        Version::V1, Version::V2, Version::V3, Version::V4, Version::V5,
        Version::V6, Version::V7, Version::V8, Version::V9, Version::V10,
        Version::V11, Version::V12, Version::V13,
    ];

    /// Side length of the module grid: `version * 4 + 17`.
    pub fn size(&self) -> usize {
        *self as usize * 4 + 17
    }

    pub fn from_u8(n: u8) -> Option<Version> {
        match n {
            1 => Some(Version::V1), 2 => Some(Version::V2), 3 => Some(Version::V3),
            4 => Some(Version::V4), 5 => Some(Version::V5), 6 => Some(Version::V6),
            7 => Some(Version::V7), 8 => Some(Version::V8), 9 => Some(Version::V9),
            10 => Some(Version::V10), 11 => Some(Version::V11), 12 => Some(Version::V12),
            13 => Some(Version::V13),
            _ => None,
        }
    }

    /// Width of the byte-mode character count field.
    pub fn char_count_bits(&self) -> usize {
        if *self <= Version::V9 { 8 } else { 16 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum MaskPattern {
    Pattern0, Pattern1, Pattern2, Pattern3,
    Pattern4, Pattern5, Pattern6, Pattern7,
}

impl MaskPattern {
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0, MaskPattern::Pattern1, MaskPattern::Pattern2,
        MaskPattern::Pattern3, MaskPattern::Pattern4, MaskPattern::Pattern5,
        MaskPattern::Pattern6, MaskPattern::Pattern7,
    ];

    /// The 3-bit mask index carried in the format info.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// The input does not fit the supported version range (1-13) at level M.
///
/// This is the only error the encoder produces; it is raised before any
/// encoding work begins, and retrying with the same input always fails
/// identically. Callers should surface it as "content too long to encode".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataTooLong {
    pub length: usize,
    pub max_capacity: usize,
}

impl fmt::Display for DataTooLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data length {} bytes exceeds the {}-byte capacity of version {:?} at level M",
            self.length,
            self.max_capacity,
            Version::MAX
        )
    }
}

impl std::error::Error for DataTooLong {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_sizes_follow_the_grid_formula() {
        assert_eq!(Version::V1.size(), 21);
        assert_eq!(Version::V2.size(), 25);
        assert_eq!(Version::V7.size(), 45);
        assert_eq!(Version::V13.size(), 69);
    }

    #[test]
    fn char_count_field_widens_at_version_10() {
        assert_eq!(Version::V9.char_count_bits(), 8);
        assert_eq!(Version::V10.char_count_bits(), 16);
    }

    #[test]
    fn from_u8_rejects_out_of_range_versions() {
        assert_eq!(Version::from_u8(0), None);
        assert_eq!(Version::from_u8(7), Some(Version::V7));
        assert_eq!(Version::from_u8(14), None);
    }
}

//! Light visibility ranges by vessel length.
//!
//! Follows the minimum ranges of COLREGS Annex I: a vessel seen from within
//! its bow/beam arc shows its masthead light, from behind it shows only the
//! sternlight. Ranges grow with the vessel's length class.

use crate::constants::*;

/// Index into the length-class tables.
fn length_class(length: f64) -> usize {
    if length < LENGTH_CLASS_SMALL {
        0
    } else if length < LENGTH_CLASS_MEDIUM {
        1
    } else if length < LENGTH_CLASS_LARGE {
        2
    } else {
        3
    }
}

/// Visibility range in nautical miles of a vessel of `length` metres, seen
/// at `bearing_angle` radians off its bow (unsigned, `0..=PI`). The masthead
/// arc ends `beam_limit` radians from the bow.
pub fn visibility_by_length_nm(bearing_angle: f64, length: f64, beam_limit: f64) -> f64 {
    let class = length_class(length);
    if bearing_angle.abs() <= beam_limit {
        MASTHEAD_RANGE_NM[class]
    } else {
        STERNLIGHT_RANGE_NM[class]
    }
}

/// Same as [`visibility_by_length_nm`], in metres.
pub fn visibility_by_length(bearing_angle: f64, length: f64, beam_limit: f64) -> f64 {
    visibility_by_length_nm(bearing_angle, length, beam_limit) * NM_IN_METERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masthead_range_grows_with_length() {
        let ahead = 0.0;
        assert_eq!(visibility_by_length_nm(ahead, 8.0, BEAM_SECTOR_LIMIT), 2.0);
        assert_eq!(visibility_by_length_nm(ahead, 15.0, BEAM_SECTOR_LIMIT), 3.0);
        assert_eq!(visibility_by_length_nm(ahead, 30.0, BEAM_SECTOR_LIMIT), 5.0);
        assert_eq!(visibility_by_length_nm(ahead, 120.0, BEAM_SECTOR_LIMIT), 6.0);
    }

    #[test]
    fn test_sternlight_beyond_beam_limit() {
        let astern = std::f64::consts::PI;
        assert_eq!(visibility_by_length_nm(astern, 30.0, BEAM_SECTOR_LIMIT), 2.0);
        assert_eq!(visibility_by_length_nm(astern, 120.0, BEAM_SECTOR_LIMIT), 3.0);
        // Exactly on the limit still counts as the masthead arc
        assert_eq!(visibility_by_length_nm(BEAM_SECTOR_LIMIT, 120.0, BEAM_SECTOR_LIMIT), 6.0);
    }

    #[test]
    fn test_narrower_beam_limit_moves_light_split() {
        let abaft = 105f64.to_radians();
        let narrow = 100f64.to_radians();
        assert_eq!(visibility_by_length_nm(abaft, 120.0, BEAM_SECTOR_LIMIT), 6.0);
        assert_eq!(visibility_by_length_nm(abaft, 120.0, narrow), 3.0);
    }

    #[test]
    fn test_metres_conversion() {
        let m = visibility_by_length(0.0, 100.0, BEAM_SECTOR_LIMIT);
        assert!((m - 6.0 * NM_IN_METERS).abs() < 1e-9);
    }
}

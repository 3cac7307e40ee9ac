//! Nakshatras: 27 equal segments of 13°20′ with Vimshottari lords.

use super::planet::Planet;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Lord sequence, repeated three times across the zodiac from Ashwini.
pub const NAKSHATRA_LORDS: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// 0-based nakshatra index (0 = Ashwini, 26 = Revati).
pub fn nakshatra_index(longitude: f64) -> usize {
    ((normalize_360(longitude) / NAKSHATRA_SPAN).floor() as usize).min(26)
}

/// Lord of the nakshatra containing `longitude`.
pub fn nakshatra_lord(longitude: f64) -> Planet {
    lord_of_nakshatra(nakshatra_index(longitude))
}

/// Lord of a nakshatra by index; indices wrap modulo 27.
pub fn lord_of_nakshatra(index: usize) -> Planet {
    NAKSHATRA_LORDS[(index % 27) % 9]
}

pub fn nakshatra_name(index: usize) -> &'static str {
    NAKSHATRA_NAMES[index % 27]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_segment() {
        assert_eq!(nakshatra_index(0.0), 0);
        assert_eq!(nakshatra_lord(0.0), Planet::Ketu);
        assert_eq!(nakshatra_lord(13.0), Planet::Ketu);
        assert_eq!(nakshatra_lord(13.5), Planet::Venus);
    }

    #[test]
    fn test_sequence_repeats_three_times() {
        for i in 0..27 {
            assert_eq!(lord_of_nakshatra(i), NAKSHATRA_LORDS[i % 9]);
        }
        // Magha (index 9) and Mula (index 18) restart with Ketu
        assert_eq!(lord_of_nakshatra(9), Planet::Ketu);
        assert_eq!(lord_of_nakshatra(18), Planet::Ketu);
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(nakshatra_index(359.99), 26);
        assert_eq!(nakshatra_lord(359.99), Planet::Mercury);
        assert_eq!(nakshatra_name(26), "Revati");
    }

    #[test]
    fn test_rohini_is_moon() {
        // Rohini spans 40°00′ to 53°20′
        assert_eq!(nakshatra_index(45.0), 3);
        assert_eq!(nakshatra_lord(45.0), Planet::Moon);
    }
}

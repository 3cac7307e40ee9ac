use serde::Serialize;

use crate::util::angular_separation;

/// Junction between a water sign and the fire sign that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GandantaZone {
    PiscesAries,
    CancerLeo,
    ScorpioSagittarius,
}

impl GandantaZone {
    pub const ALL: [GandantaZone; 3] = [Self::PiscesAries, Self::CancerLeo, Self::ScorpioSagittarius];

    /// Absolute longitude of the junction.
    pub fn junction(self) -> f64 {
        match self {
            Self::PiscesAries => 0.0,
            Self::CancerLeo => 120.0,
            Self::ScorpioSagittarius => 240.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PiscesAries => "Pisces-Aries",
            Self::CancerLeo => "Cancer-Leo",
            Self::ScorpioSagittarius => "Scorpio-Sagittarius",
        }
    }
}

/// Zone, distance and intensity for a longitude strictly inside `orb` of a
/// junction. Intensity is 1 at the junction and falls linearly to 0 at the orb.
pub fn gandanta_of(longitude: f64, orb: f64) -> Option<(GandantaZone, f64, f64)> {
    if orb <= 0.0 {
        return None;
    }
    GandantaZone::ALL.into_iter().find_map(|zone| {
        let distance = angular_separation(longitude, zone.junction());
        (distance < orb).then(|| (zone, distance, 1.0 - distance / orb))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORB: f64 = 10.0 / 3.0;

    #[test]
    fn test_exact_junction_full_intensity() {
        let (zone, distance, intensity) = gandanta_of(120.0, ORB).unwrap();
        assert_eq!(zone, GandantaZone::CancerLeo);
        assert!(distance.abs() < 1e-9);
        assert!((intensity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_both_sides_of_junction() {
        let (zone, _, before) = gandanta_of(358.0, ORB).unwrap();
        assert_eq!(zone, GandantaZone::PiscesAries);
        let (_, _, after) = gandanta_of(2.0, ORB).unwrap();
        assert!((before - after).abs() < 1e-9);
        assert!(before > 0.0 && before < 1.0);
    }

    #[test]
    fn test_outside_orb() {
        assert_eq!(gandanta_of(245.0, ORB), None);
        assert_eq!(gandanta_of(60.0, ORB), None);
        assert_eq!(gandanta_of(240.0, 0.0), None);
    }
}

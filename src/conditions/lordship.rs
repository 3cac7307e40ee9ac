use chrono::Weekday;
use serde::Serialize;

use crate::chart::Chart;
use crate::tables::{lord_of_nakshatra, nakshatra_index, Modality, Planet, Sign};
use crate::util::normalize_360;

/// Offset from Sun + Moon to the yoga point: 93°20′.
pub const YOGA_POINT_OFFSET: f64 = 93.0 + 20.0 / 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LordshipRole {
    Yogi,
    Avayogi,
    Badhaka,
    TithiShunya,
    Dagdha,
}

impl LordshipRole {
    /// Qualitative effect tag attached to the planet holding the role.
    pub fn effect(self) -> &'static str {
        match self {
            Self::Yogi => "auspicious",
            Self::Avayogi => "obstructive",
            Self::Badhaka => "obstructive",
            Self::TithiShunya => "void",
            Self::Dagdha => "burnt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Yogi => "Yogi",
            Self::Avayogi => "Avayogi",
            Self::Badhaka => "Badhaka",
            Self::TithiShunya => "Tithi-Shunya",
            Self::Dagdha => "Dagdha",
        }
    }
}

/// Nakshatra index of the yoga point.
pub fn yogi_nakshatra(chart: &Chart) -> usize {
    let sun = chart.placement(Planet::Sun).longitude;
    let moon = chart.placement(Planet::Moon).longitude;
    nakshatra_index(normalize_360(sun + moon + YOGA_POINT_OFFSET))
}

pub fn yogi_planet(chart: &Chart) -> Planet {
    lord_of_nakshatra(yogi_nakshatra(chart))
}

/// Lord of the 6th nakshatra counted from the yogi nakshatra.
pub fn avayogi_planet(chart: &Chart) -> Planet {
    lord_of_nakshatra(yogi_nakshatra(chart) + 5)
}

/// Lord of the 11th, 9th or 7th house for movable, fixed and dual
/// ascendants.
pub fn badhaka_planet(ascendant: Sign) -> Planet {
    let n = match ascendant.modality() {
        Modality::Movable => 10,
        Modality::Fixed => 8,
        Modality::Dual => 6,
    };
    ascendant.offset(n).lord()
}

/// Tithi index 0-29 from Sun-Moon elongation. 0-14 are the bright half
/// ending in Purnima (14), 15-29 the dark half ending in Amavasya (29).
pub fn tithi_index(chart: &Chart) -> usize {
    let sun = chart.placement(Planet::Sun).longitude;
    let moon = chart.placement(Planet::Moon).longitude;
    ((normalize_360(moon - sun) / 12.0).floor() as usize).min(29)
}

/// Void signs for a tithi index. Purnima and Amavasya have none.
pub fn tithi_shunya_signs(tithi: usize) -> &'static [Sign] {
    use Sign::*;
    match tithi % 15 + 1 {
        1 => &[Libra, Capricorn],
        2 => &[Sagittarius, Pisces],
        3 => &[Leo, Capricorn],
        4 => &[Taurus, Aquarius],
        5 => &[Gemini, Virgo],
        6 => &[Aries, Leo],
        7 => &[Cancer, Sagittarius],
        8 => &[Gemini, Virgo],
        9 => &[Leo, Scorpio],
        10 => &[Leo, Scorpio],
        11 => &[Sagittarius, Pisces],
        12 => &[Libra, Capricorn],
        13 => &[Taurus, Leo],
        14 => &[Gemini, Virgo, Sagittarius, Pisces],
        _ => &[],
    }
}

/// Lords of the void signs, deduplicated, in planet order.
pub fn tithi_shunya_planets(chart: &Chart) -> Vec<Planet> {
    let mut lords: Vec<Planet> = tithi_shunya_signs(tithi_index(chart))
        .iter()
        .map(|s| s.lord())
        .collect();
    lords.sort_unstable();
    lords.dedup();
    lords
}

/// Burnt sign for a weekday.
pub fn dagdha_sign(weekday: Weekday) -> Sign {
    match weekday {
        Weekday::Sun => Sign::Libra,
        Weekday::Mon => Sign::Capricorn,
        Weekday::Tue => Sign::Sagittarius,
        Weekday::Wed => Sign::Gemini,
        Weekday::Thu => Sign::Aquarius,
        Weekday::Fri => Sign::Leo,
        Weekday::Sat => Sign::Pisces,
    }
}

/// Dagdha lord; absent when the chart carries no weekday.
pub fn dagdha_planet(chart: &Chart) -> Option<Planet> {
    chart.weekday().map(|day| dagdha_sign(day).lord())
}

/// Every (planet, role) pair for the chart, ordered by planet then role.
pub fn lordship_roles(chart: &Chart) -> Vec<(Planet, LordshipRole)> {
    let mut roles = vec![
        (yogi_planet(chart), LordshipRole::Yogi),
        (avayogi_planet(chart), LordshipRole::Avayogi),
        (badhaka_planet(chart.ascendant()), LordshipRole::Badhaka),
    ];
    roles.extend(
        tithi_shunya_planets(chart)
            .into_iter()
            .map(|p| (p, LordshipRole::TithiShunya)),
    );
    if let Some(p) = dagdha_planet(chart) {
        roles.push((p, LordshipRole::Dagdha));
    }
    roles.sort_unstable();
    roles
}

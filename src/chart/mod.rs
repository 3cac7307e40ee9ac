//! Validated birth chart: ascendant, one placement per planet, house signs.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{InvalidChartError, LookupError};
use crate::tables::{Planet, Sign, ALL_PLANETS};

/// House number, 1-12, counted from the ascendant.
pub type House = u8;

pub const KENDRA_HOUSES: [House; 4] = [1, 4, 7, 10];
pub const TRIKONA_HOUSES: [House; 3] = [1, 5, 9];
pub const DUSTHANA_HOUSES: [House; 3] = [6, 8, 12];

pub fn is_kendra(house: House) -> bool {
    KENDRA_HOUSES.contains(&house)
}

pub fn is_trikona(house: House) -> bool {
    TRIKONA_HOUSES.contains(&house)
}

pub fn is_dusthana(house: House) -> bool {
    DUSTHANA_HOUSES.contains(&house)
}

/// House occupied by `sign` for the given ascendant sign.
pub fn house_of(sign: Sign, ascendant: Sign) -> House {
    ((sign.index() as i32 - ascendant.index() as i32).rem_euclid(12) + 1) as House
}

/// Position of `to` counted inclusively from `from` (same house = 1).
pub fn house_distance(from: House, to: House) -> House {
    ((to as i32 - from as i32).rem_euclid(12) + 1) as House
}

/// House `n` counted inclusively from `from`, wrapping past 12.
pub fn nth_house_from(from: House, n: House) -> House {
    ((from as i32 - 1 + n as i32 - 1).rem_euclid(12) + 1) as House
}

pub fn check_house(house: House) -> Result<House, LookupError> {
    if (1..=12).contains(&house) {
        Ok(house)
    } else {
        Err(LookupError::UnknownHouse(house))
    }
}

/// One planet's raw position as supplied by the ephemeris collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPlacement {
    pub planet: Planet,
    /// Sidereal longitude in degrees, [0, 360)
    pub longitude: f64,
    #[serde(default)]
    pub retrograde: bool,
}

impl RawPlacement {
    pub fn new(planet: Planet, longitude: f64) -> Self {
        Self {
            planet,
            longitude,
            retrograde: false,
        }
    }

    pub fn retrograde(mut self) -> Self {
        self.retrograde = true;
        self
    }
}

/// Serialized chart input.
///
/// Example JSON:
/// ```json
/// {
///   "ascendant_sign": 0,
///   "weekday": "Fri",
///   "planets": [
///     { "planet": "Sun", "longitude": 10.5 },
///     { "planet": "Venus", "longitude": 15.0, "retrograde": true }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartInput {
    pub ascendant_sign: u8,
    pub planets: Vec<RawPlacement>,
    /// Weekday of birth; only the Dagdha lordship role needs it.
    #[serde(default)]
    pub weekday: Option<Weekday>,
}

impl ChartInput {
    pub fn build(&self) -> Result<Chart, InvalidChartError> {
        let chart = build_chart(self.ascendant_sign, &self.planets)?;
        Ok(match self.weekday {
            Some(day) => chart.with_weekday(day),
            None => chart,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPlacement {
    pub planet: Planet,
    pub sign: Sign,
    pub longitude_in_sign: f64,
    pub longitude: f64,
    pub house: House,
    pub retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    ascendant: Sign,
    /// Indexed by `Planet::index()`
    placements: [PlanetPlacement; 9],
    /// `house_signs[h - 1]` is the sign on house `h`
    house_signs: [Sign; 12],
    weekday: Option<Weekday>,
}

/// Build a chart from the ascendant sign index and the nine raw longitudes.
///
/// # Errors
///
/// Fails when the ascendant is outside 0-11, a longitude is outside
/// [0, 360) or not finite, or a planet is duplicated or missing.
pub fn build_chart(ascendant_sign: u8, raw: &[RawPlacement]) -> Result<Chart, InvalidChartError> {
    let ascendant =
        Sign::from_index(ascendant_sign).map_err(|_| InvalidChartError::AscendantOutOfRange(ascendant_sign))?;

    let mut slots: [Option<PlanetPlacement>; 9] = [None; 9];
    for entry in raw {
        if !(0.0..360.0).contains(&entry.longitude) {
            return Err(InvalidChartError::LongitudeOutOfRange {
                planet: entry.planet,
                longitude: entry.longitude,
            });
        }
        let slot = &mut slots[entry.planet.index()];
        if slot.is_some() {
            return Err(InvalidChartError::DuplicatePlanet(entry.planet));
        }
        let sign = Sign::from_longitude(entry.longitude);
        *slot = Some(PlanetPlacement {
            planet: entry.planet,
            sign,
            longitude_in_sign: entry.longitude - sign.index() as f64 * 30.0,
            longitude: entry.longitude,
            house: house_of(sign, ascendant),
            retrograde: entry.retrograde,
        });
    }

    let mut placements = Vec::with_capacity(9);
    for planet in ALL_PLANETS {
        match slots[planet.index()] {
            Some(p) => placements.push(p),
            None => return Err(InvalidChartError::MissingPlanet(planet)),
        }
    }
    let placements: [PlanetPlacement; 9] = placements
        .try_into()
        .map_err(|_| InvalidChartError::MissingPlanet(Planet::Ketu))?;

    let house_signs = std::array::from_fn(|i| ascendant.offset(i as i32));

    Ok(Chart {
        ascendant,
        placements,
        house_signs,
        weekday: None,
    })
}

impl Chart {
    pub fn with_weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = Some(weekday);
        self
    }

    pub fn ascendant(&self) -> Sign {
        self.ascendant
    }

    pub fn weekday(&self) -> Option<Weekday> {
        self.weekday
    }

    pub fn placement(&self, planet: Planet) -> &PlanetPlacement {
        &self.placements[planet.index()]
    }

    /// All placements in planet order.
    pub fn placements(&self) -> &[PlanetPlacement; 9] {
        &self.placements
    }

    pub fn house_sign(&self, house: House) -> Result<Sign, LookupError> {
        check_house(house).map(|h| self.house_signs[h as usize - 1])
    }

    pub fn house_signs(&self) -> &[Sign; 12] {
        &self.house_signs
    }

    /// House holding a sign for this chart's ascendant.
    pub fn house_of_sign(&self, sign: Sign) -> House {
        house_of(sign, self.ascendant)
    }

    /// Lord of a house: the ruler of the sign on its cusp.
    pub fn house_lord(&self, house: House) -> Result<Planet, LookupError> {
        self.house_sign(house).map(Sign::lord)
    }

    /// Planets occupying a house, in planet order.
    pub fn occupants(&self, house: House) -> Vec<Planet> {
        self.placements
            .iter()
            .filter(|p| p.house == house)
            .map(|p| p.planet)
            .collect()
    }

    pub fn house_of_planet(&self, planet: Planet) -> House {
        self.placement(planet).house
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a chart from whole-sign positions: each planet at 15° of the
    /// given sign index.
    pub fn chart_from_signs(ascendant: u8, signs: [u8; 9]) -> Chart {
        let raw: Vec<RawPlacement> = ALL_PLANETS
            .iter()
            .zip(signs)
            .map(|(p, s)| RawPlacement::new(*p, s as f64 * 30.0 + 15.0))
            .collect();
        build_chart(ascendant, &raw).unwrap()
    }

    /// Same as [`chart_from_signs`] but with exact longitudes.
    pub fn chart_from_longitudes(ascendant: u8, longitudes: [f64; 9]) -> Chart {
        let raw: Vec<RawPlacement> = ALL_PLANETS
            .iter()
            .zip(longitudes)
            .map(|(p, l)| RawPlacement::new(*p, l))
            .collect();
        build_chart(ascendant, &raw).unwrap()
    }
}

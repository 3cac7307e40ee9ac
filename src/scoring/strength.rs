//! Raw strength measures consumed by score components.

use crate::chart::{Chart, House};
use crate::error::LookupError;
use crate::facts::ChartFacts;
use crate::placement::FunctionalStatus;
use crate::tables::Planet;

const HOUSE_BASE: f64 = 50.0;
const LORD_SCALE: f64 = 4.0;
const OCCUPANT_SHIFT: f64 = 10.0;
const ASPECT_SHIFT: f64 = 7.5;

const COMBUST_LOSS: f64 = 2.0;
const PLANET_ASPECT_SHIFT: f64 = 0.5;

fn status_sign(status: FunctionalStatus) -> f64 {
    match status {
        FunctionalStatus::Benefic => 1.0,
        FunctionalStatus::Malefic => -1.0,
        FunctionalStatus::Neutral => 0.0,
    }
}

/// Planet strength on the 0-10 scale after combustion and received
/// aspects. Combustion costs 2 points; each aspect from a functional benefic
/// adds 0.5 and each from a functional malefic removes 0.5.
pub fn effective_planet_strength(planet: Planet, facts: &ChartFacts) -> f64 {
    let mut strength = facts.analysis(planet).strength;
    if facts.is_combust(planet) {
        strength -= COMBUST_LOSS;
    }
    for aspect in facts.aspects_on(planet) {
        strength += PLANET_ASPECT_SHIFT * status_sign(facts.status(aspect.source));
    }
    strength.clamp(0.0, 10.0)
}

/// House strength as a 0-100 percentage.
///
/// Starts at 50, moves by up to 20 with the lord's effective strength, by 10
/// per functional benefic or malefic occupant and by 7.5 per aspecting
/// functional benefic or malefic.
pub fn house_strength(house: House, chart: &Chart, facts: &ChartFacts) -> Result<f64, LookupError> {
    let lord = chart.house_lord(house)?;
    let mut strength = HOUSE_BASE + (effective_planet_strength(lord, facts) - 5.0) * LORD_SCALE;

    for occupant in chart.occupants(house) {
        strength += OCCUPANT_SHIFT * status_sign(facts.status(occupant));
    }
    for aspect in crate::aspects::aspects_on_house(house, chart)? {
        strength += ASPECT_SHIFT * status_sign(facts.status(aspect.source));
    }
    Ok(strength.clamp(0.0, 100.0))
}

//! Whole-sign aspects and same-sign conjunctions.
//!
//! Houses are counted inclusively from the caster: the caster's own house is
//! the 1st, the house opposite is the 7th.

use serde::Serialize;

use crate::chart::{check_house, nth_house_from, Chart, House};
use crate::error::LookupError;
use crate::tables::{Planet, Sign, ALL_PLANETS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AspectKind {
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "4th")]
    Fourth,
    #[serde(rename = "5th")]
    Fifth,
    #[serde(rename = "7th")]
    Seventh,
    #[serde(rename = "8th")]
    Eighth,
    #[serde(rename = "9th")]
    Ninth,
    #[serde(rename = "10th")]
    Tenth,
}

impl AspectKind {
    /// Distance in houses from the caster, inclusive.
    pub fn distance(self) -> House {
        match self {
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Seventh => 7,
            Self::Eighth => 8,
            Self::Ninth => 9,
            Self::Tenth => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Third => "3rd",
            Self::Fourth => "4th",
            Self::Fifth => "5th",
            Self::Seventh => "7th",
            Self::Eighth => "8th",
            Self::Ninth => "9th",
            Self::Tenth => "10th",
        }
    }
}

/// Aspects a planet casts, in ascending house distance.
pub fn aspect_kinds(planet: Planet) -> &'static [AspectKind] {
    use AspectKind::*;
    match planet {
        Planet::Mars => &[Fourth, Seventh, Eighth],
        Planet::Jupiter => &[Fifth, Seventh, Ninth],
        Planet::Saturn => &[Third, Seventh, Tenth],
        _ => &[Seventh],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectTarget {
    House(House),
    Planet(Planet),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AspectRecord {
    pub source: Planet,
    pub target: AspectTarget,
    pub kind: AspectKind,
    /// True for the universal 7th aspect
    pub natural: bool,
}

/// Planets aspecting a house, in planet order.
pub fn aspects_on_house(house: House, chart: &Chart) -> Result<Vec<AspectRecord>, LookupError> {
    let house = check_house(house)?;
    Ok(aspects_landing_on(house, chart)
        .map(|(source, kind)| AspectRecord {
            source,
            target: AspectTarget::House(house),
            kind,
            natural: kind == AspectKind::Seventh,
        })
        .collect())
}

/// Planets aspecting another planet; a planet never aspects itself.
pub fn aspects_on_planet(planet: Planet, chart: &Chart) -> Vec<AspectRecord> {
    let house = chart.house_of_planet(planet);
    aspects_landing_on(house, chart)
        .filter(|(source, _)| *source != planet)
        .map(|(source, kind)| AspectRecord {
            source,
            target: AspectTarget::Planet(planet),
            kind,
            natural: kind == AspectKind::Seventh,
        })
        .collect()
}

/// Houses a planet aspects, one record per aspect kind.
pub fn aspects_cast_by(planet: Planet, chart: &Chart) -> Vec<AspectRecord> {
    let from = chart.house_of_planet(planet);
    aspect_kinds(planet)
        .iter()
        .map(|kind| AspectRecord {
            source: planet,
            target: AspectTarget::House(nth_house_from(from, kind.distance())),
            kind: *kind,
            natural: *kind == AspectKind::Seventh,
        })
        .collect()
}

/// Whether `source` aspects the house occupied by `target`.
pub fn is_aspected_by(target: Planet, source: Planet, chart: &Chart) -> bool {
    target != source
        && aspects_landing_on(chart.house_of_planet(target), chart).any(|(p, _)| p == source)
}

fn aspects_landing_on(house: House, chart: &Chart) -> impl Iterator<Item = (Planet, AspectKind)> + '_ {
    ALL_PLANETS.into_iter().flat_map(move |source| {
        let from = chart.house_of_planet(source);
        aspect_kinds(source)
            .iter()
            .filter(move |kind| nth_house_from(from, kind.distance()) == house)
            .map(move |kind| (source, *kind))
    })
}

/// Two planets sharing a sign. `a` precedes `b` in planet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConjunctionRecord {
    pub a: Planet,
    pub b: Planet,
    pub sign: Sign,
}

impl ConjunctionRecord {
    fn new(x: Planet, y: Planet, sign: Sign) -> Self {
        let (a, b) = if x < y { (x, y) } else { (y, x) };
        Self { a, b, sign }
    }

    pub fn involves(&self, planet: Planet) -> bool {
        self.a == planet || self.b == planet
    }

    /// The partner of `planet` in this pair.
    pub fn other(&self, planet: Planet) -> Option<Planet> {
        if self.a == planet {
            Some(self.b)
        } else if self.b == planet {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Every other planet in the same sign as `planet`.
pub fn conjunctions_of(planet: Planet, chart: &Chart) -> Vec<ConjunctionRecord> {
    let sign = chart.placement(planet).sign;
    ALL_PLANETS
        .into_iter()
        .filter(|other| *other != planet && chart.placement(*other).sign == sign)
        .map(|other| ConjunctionRecord::new(planet, other, sign))
        .collect()
}

/// Each unordered conjunct pair once, ordered by (a, b).
pub fn all_conjunctions(chart: &Chart) -> Vec<ConjunctionRecord> {
    let mut out = Vec::new();
    for (i, a) in ALL_PLANETS.iter().enumerate() {
        for b in &ALL_PLANETS[i + 1..] {
            let sign = chart.placement(*a).sign;
            if chart.placement(*b).sign == sign {
                out.push(ConjunctionRecord::new(*a, *b, sign));
            }
        }
    }
    out
}

/// Planets conjunct `planet`, in planet order.
pub fn conjoined_planets(planet: Planet, chart: &Chart) -> Vec<Planet> {
    conjunctions_of(planet, chart)
        .iter()
        .filter_map(|c| c.other(planet))
        .collect()
}

//! Declarative yoga catalogue.
//!
//! Every yoga is a [`YogaRule`]: a name, a category and a plain function
//! over the chart and its derived facts. One driver walks the catalogue in
//! declared order and collects every match, so the output order is fixed for
//! a given chart.

mod affliction;
mod benefic;
mod signature;

use log::{debug, trace};
use serde::Serialize;

use crate::chart::{Chart, House};
use crate::facts::{ChartFacts, EngineConfig};
use crate::placement::Dignity;
use crate::tables::Planet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YogaCategory {
    Benefic,
    Malefic,
    /// Domain signature yoga, tagged e.g. "kalatra" or "karma"
    Domain(&'static str),
}

impl YogaCategory {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Benefic => "benefic",
            Self::Malefic => "malefic",
            Self::Domain(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum YogaGrade {
    Moderate,
    Strong,
    VeryStrong,
}

impl YogaGrade {
    /// Exalted is VeryStrong, own sign or moolatrikona Strong, any other
    /// placement Moderate. A debilitated planet yields no grade.
    pub fn from_dignity(dignity: Dignity) -> Option<Self> {
        match dignity {
            Dignity::Exalted => Some(Self::VeryStrong),
            Dignity::Own | Dignity::Moolatrikona => Some(Self::Strong),
            Dignity::Debilitated => None,
            _ => Some(Self::Moderate),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryStrong => "Very strong",
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaRecord {
    pub name: &'static str,
    pub category: YogaCategory,
    pub grade: YogaGrade,
    pub planets: Vec<Planet>,
    pub houses: Vec<House>,
    pub description: String,
    pub effect: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remedy: Option<&'static str>,
}

/// What a rule reports when it fires; the driver adds name and category.
#[derive(Debug, Clone, PartialEq)]
pub struct YogaMatch {
    grade: YogaGrade,
    planets: Vec<Planet>,
    houses: Vec<House>,
    description: String,
    effect: &'static str,
    remedy: Option<&'static str>,
}

impl YogaMatch {
    fn new(grade: YogaGrade, effect: &'static str) -> Self {
        Self {
            grade,
            planets: Vec::new(),
            houses: Vec::new(),
            description: String::new(),
            effect,
            remedy: None,
        }
    }

    fn planets(mut self, planets: impl IntoIterator<Item = Planet>) -> Self {
        self.planets = planets.into_iter().collect();
        self
    }

    fn houses(mut self, houses: impl IntoIterator<Item = House>) -> Self {
        self.houses = houses.into_iter().collect();
        self
    }

    fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn remedy(mut self, remedy: &'static str) -> Self {
        self.remedy = Some(remedy);
        self
    }
}

pub type RuleFn = fn(&Chart, &ChartFacts) -> Option<YogaMatch>;

pub struct YogaRule {
    pub name: &'static str,
    pub category: YogaCategory,
    pub check: RuleFn,
}

impl YogaRule {
    pub fn evaluate(&self, chart: &Chart, facts: &ChartFacts) -> Option<YogaRecord> {
        (self.check)(chart, facts).map(|m| YogaRecord {
            name: self.name,
            category: self.category,
            grade: m.grade,
            planets: m.planets,
            houses: m.houses,
            description: m.description,
            effect: m.effect,
            remedy: m.remedy,
        })
    }
}

impl std::fmt::Debug for YogaRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YogaRule")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

/// Every rule in evaluation order: domain signatures, general benefic
/// yogas, then afflictions.
pub fn catalogue() -> impl Iterator<Item = &'static YogaRule> {
    signature::RULES
        .iter()
        .chain(benefic::RULES)
        .chain(affliction::RULES)
}

/// Evaluate the catalogue with default engine settings.
pub fn evaluate_yogas(chart: &Chart) -> Vec<YogaRecord> {
    let facts = ChartFacts::derive(chart, &EngineConfig::default());
    evaluate_yogas_with(chart, &facts)
}

pub fn evaluate_yogas_with(chart: &Chart, facts: &ChartFacts) -> Vec<YogaRecord> {
    catalogue()
        .filter_map(|rule| {
            let record = rule.evaluate(chart, facts);
            match &record {
                Some(r) => debug!("yoga {} matched ({:?})", r.name, r.grade),
                None => trace!("yoga {} not present", rule.name),
            }
            record
        })
        .collect()
}

/// Grade of a single planet's placement; `None` when debilitated.
fn planet_grade(facts: &ChartFacts, planet: Planet) -> Option<YogaGrade> {
    YogaGrade::from_dignity(facts.analysis(planet).dignity)
}

//! Per-chart derived facts shared by the yoga rules and the scorer.
//!
//! Functional status is computed exactly once here, so every consumer sees
//! the same benefic/malefic classification.

use serde::{Deserialize, Serialize};

use crate::aspects::{all_conjunctions, aspects_on_planet, AspectRecord, ConjunctionRecord};
use crate::chart::{Chart, House};
use crate::conditions::{detect_conditions, ConditionConfig, KujaSeverity, SpecialCondition};
use crate::placement::{analyze_placements, FunctionalStatus, PlanetAnalysis};
use crate::tables::{Planet, ALL_PLANETS};

/// Engine-wide settings shared by every domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EngineConfig {
    pub conditions: ConditionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFacts {
    pub analysis: Vec<PlanetAnalysis>,
    pub conditions: Vec<SpecialCondition>,
    pub conjunctions: Vec<ConjunctionRecord>,
    /// `aspects[planet.index()]`: aspects received by that planet
    pub aspects: Vec<Vec<AspectRecord>>,
}

impl ChartFacts {
    pub fn derive(chart: &Chart, config: &EngineConfig) -> Self {
        let analysis = analyze_placements(chart, config.conditions.node_policy);
        let conditions = detect_conditions(chart, &analysis, &config.conditions);
        let conjunctions = all_conjunctions(chart);
        let aspects = ALL_PLANETS
            .iter()
            .map(|p| aspects_on_planet(*p, chart))
            .collect();
        Self {
            analysis,
            conditions,
            conjunctions,
            aspects,
        }
    }

    pub fn analysis(&self, planet: Planet) -> &PlanetAnalysis {
        &self.analysis[planet.index()]
    }

    pub fn status(&self, planet: Planet) -> FunctionalStatus {
        self.analysis(planet).status
    }

    pub fn is_functional_benefic(&self, planet: Planet) -> bool {
        self.status(planet) == FunctionalStatus::Benefic
    }

    pub fn is_functional_malefic(&self, planet: Planet) -> bool {
        self.status(planet) == FunctionalStatus::Malefic
    }

    pub fn aspects_on(&self, planet: Planet) -> &[AspectRecord] {
        &self.aspects[planet.index()]
    }

    pub fn conjoined(&self, a: Planet, b: Planet) -> bool {
        self.conjunctions
            .iter()
            .any(|c| c.involves(a) && c.involves(b) && a != b)
    }

    /// Lord of `house` per the analysis lordship lists.
    pub fn lord_of(&self, house: House) -> Option<Planet> {
        self.analysis.iter().find(|a| a.lords(house)).map(|a| a.planet)
    }

    pub fn is_combust(&self, planet: Planet) -> bool {
        self.conditions
            .iter()
            .any(|c| matches!(c, SpecialCondition::Combustion { planet: p, .. } if *p == planet))
    }

    /// Tiers lost to conjoining malefics, 0 when unafflicted.
    pub fn affliction_tiers(&self, planet: Planet) -> u8 {
        self.conditions
            .iter()
            .find_map(|c| match c {
                SpecialCondition::MaleficAffliction {
                    planet: p,
                    downgrade_tiers,
                    ..
                } if *p == planet => Some(*downgrade_tiers),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// Kuja severity and whether a cancellation applies.
    pub fn kuja(&self) -> Option<(KujaSeverity, bool)> {
        self.conditions.iter().find_map(|c| match c {
            SpecialCondition::KujaDosha {
                severity,
                cancellation_present,
                ..
            } => Some((*severity, *cancellation_present)),
            _ => None,
        })
    }

    pub fn gandanta_intensity(&self, planet: Planet) -> Option<f64> {
        self.conditions.iter().find_map(|c| match c {
            SpecialCondition::Gandanta {
                planet: p, intensity, ..
            } if *p == planet => Some(*intensity),
            _ => None,
        })
    }
}

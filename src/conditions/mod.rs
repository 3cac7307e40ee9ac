//! Special conditions: combustion, malefic affliction, Kuja dosha, gandanta
//! and lordship roles.

pub mod affliction;
pub mod combustion;
pub mod gandanta;
pub mod kuja;
pub mod lordship;

use serde::{Deserialize, Serialize};

pub use affliction::{conjoining_malefics, downgrade_tiers};
pub use combustion::{combustion_of, is_combust, CombustionOrbs};
pub use gandanta::{gandanta_of, GandantaZone};
pub use kuja::{detect_kuja, KujaCancellation, KujaFinding, KujaReference, KujaSeverity};
pub use lordship::{lordship_roles, LordshipRole};

use crate::chart::{Chart, House};
use crate::placement::{PlanetAnalysis, StrengthTier};
use crate::tables::{NodePolicy, Planet, ALL_PLANETS};

/// Thresholds and orbs for condition detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ConditionConfig {
    pub combustion: CombustionOrbs,
    /// Degrees either side of a water/fire junction
    pub gandanta_orb: f64,
    /// Conjoining malefics needed for a one-tier downgrade
    pub affliction_one_tier: usize,
    /// Conjoining malefics needed for a two-tier downgrade
    pub affliction_two_tiers: usize,
    /// Houses from the ascendant, Moon and Venus that trigger Kuja dosha
    pub kuja_houses: Vec<House>,
    pub node_policy: NodePolicy,
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self {
            combustion: CombustionOrbs::default(),
            gandanta_orb: 10.0 / 3.0,
            affliction_one_tier: 2,
            affliction_two_tiers: 3,
            kuja_houses: vec![1, 2, 4, 7, 8, 12],
            node_policy: NodePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpecialCondition {
    Combustion {
        planet: Planet,
        distance_from_sun: f64,
        orb: f64,
    },
    MaleficAffliction {
        planet: Planet,
        conjoining_malefics: Vec<Planet>,
        downgrade_tiers: u8,
        /// Tier after the downgrade; the numeric strength is untouched
        effective_tier: StrengthTier,
    },
    KujaDosha {
        severity: KujaSeverity,
        triggered_from: Vec<KujaReference>,
        cancellation_present: bool,
        cancellations: Vec<KujaCancellation>,
    },
    Gandanta {
        planet: Planet,
        zone: GandantaZone,
        distance: f64,
        intensity: f64,
    },
    LordshipRole {
        planet: Planet,
        role: LordshipRole,
        effect: &'static str,
    },
}

impl SpecialCondition {
    /// Planet the condition attaches to; Kuja dosha belongs to Mars.
    pub fn planet(&self) -> Planet {
        match self {
            Self::Combustion { planet, .. }
            | Self::MaleficAffliction { planet, .. }
            | Self::Gandanta { planet, .. }
            | Self::LordshipRole { planet, .. } => *planet,
            Self::KujaDosha { .. } => Planet::Mars,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Combustion { .. } => "Combustion".to_string(),
            Self::MaleficAffliction { .. } => "Malefic affliction".to_string(),
            Self::KujaDosha { .. } => "Kuja dosha".to_string(),
            Self::Gandanta { .. } => "Gandanta".to_string(),
            Self::LordshipRole { role, .. } => format!("{} lord", role.label()),
        }
    }
}

/// Detect every special condition, grouped by family then planet order.
///
/// Never fails: conditions that need data the chart lacks (weekday) are
/// left out.
pub fn detect_conditions(
    chart: &Chart,
    placements: &[PlanetAnalysis],
    config: &ConditionConfig,
) -> Vec<SpecialCondition> {
    let mut out = Vec::new();

    for planet in ALL_PLANETS {
        if let Some((distance_from_sun, orb)) = combustion_of(planet, chart, &config.combustion) {
            out.push(SpecialCondition::Combustion {
                planet,
                distance_from_sun,
                orb,
            });
        }
    }

    for analysis in placements {
        let malefics = conjoining_malefics(analysis.planet, chart);
        let tiers = downgrade_tiers(
            malefics.len(),
            config.affliction_one_tier,
            config.affliction_two_tiers,
        );
        if tiers > 0 {
            out.push(SpecialCondition::MaleficAffliction {
                planet: analysis.planet,
                conjoining_malefics: malefics,
                downgrade_tiers: tiers,
                effective_tier: analysis.tier.downgrade(tiers),
            });
        }
    }

    if let Some(kuja) = detect_kuja(chart, &config.kuja_houses) {
        out.push(SpecialCondition::KujaDosha {
            severity: kuja.severity,
            triggered_from: kuja.triggered_from,
            cancellation_present: !kuja.cancellations.is_empty(),
            cancellations: kuja.cancellations,
        });
    }

    for placement in chart.placements() {
        if let Some((zone, distance, intensity)) = gandanta_of(placement.longitude, config.gandanta_orb) {
            out.push(SpecialCondition::Gandanta {
                planet: placement.planet,
                zone,
                distance,
                intensity,
            });
        }
    }

    out.extend(
        lordship_roles(chart)
            .into_iter()
            .map(|(planet, role)| SpecialCondition::LordshipRole {
                planet,
                role,
                effect: role.effect(),
            }),
    );

    log::debug!("detected {} special conditions", out.len());
    out
}

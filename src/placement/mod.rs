//! Per-planet placement analysis: dignity, lordship, functional status and
//! strength.

use serde::Serialize;

use crate::chart::{house_of, is_dusthana, is_kendra, is_trikona, Chart, House};
use crate::tables::{
    compound_relationship, debilitation_sign, exaltation_sign, moolatrikona, moolatrikona_sign,
    nakshatra_index, nakshatra_lord, natural_friendship_with, own_signs, temporal_friendship,
    Nature, NodePolicy, Planet, Relationship, Sign, ALL_SIGNS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dignity {
    Exalted,
    Own,
    Moolatrikona,
    GreatFriend,
    Friend,
    Neutral,
    Enemy,
    GreatEnemy,
    Debilitated,
}

impl Dignity {
    /// Exalted, own sign or moolatrikona.
    pub fn is_dignified(self) -> bool {
        matches!(self, Self::Exalted | Self::Own | Self::Moolatrikona)
    }

    /// Dignified or in a friendly sign.
    pub fn is_good(self) -> bool {
        self.is_dignified() || matches!(self, Self::GreatFriend | Self::Friend)
    }

    pub fn is_weak(self) -> bool {
        matches!(self, Self::Enemy | Self::GreatEnemy | Self::Debilitated)
    }

    /// Base strength on the 0-10 scale before house modifiers.
    pub fn base_strength(self) -> f64 {
        match self {
            Self::Exalted => 10.0,
            Self::Moolatrikona => 8.5,
            Self::Own => 8.0,
            Self::GreatFriend => 7.0,
            Self::Friend => 6.0,
            Self::Neutral => 5.0,
            Self::Enemy => 3.5,
            Self::GreatEnemy => 2.5,
            Self::Debilitated => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Exalted => "Exalted",
            Self::Own => "Own sign",
            Self::Moolatrikona => "Moolatrikona",
            Self::GreatFriend => "Great friend",
            Self::Friend => "Friend",
            Self::Neutral => "Neutral",
            Self::Enemy => "Enemy",
            Self::GreatEnemy => "Great enemy",
            Self::Debilitated => "Debilitated",
        }
    }
}

fn relationship_dignity(rel: Relationship) -> Dignity {
    match rel {
        Relationship::GreatFriend => Dignity::GreatFriend,
        Relationship::Friend => Dignity::Friend,
        Relationship::Neutral => Dignity::Neutral,
        Relationship::Enemy => Dignity::Enemy,
        Relationship::GreatEnemy => Dignity::GreatEnemy,
    }
}

/// Sign-level dignity.
///
/// Precedence: Exalted > Debilitated > Own > Moolatrikona > natural
/// friendship with the sign lord.
pub fn dignity_of(planet: Planet, sign: Sign) -> Dignity {
    dignity_of_with(planet, sign, NodePolicy::default())
}

pub fn dignity_of_with(planet: Planet, sign: Sign, policy: NodePolicy) -> Dignity {
    if let Some(d) = positional_dignity(planet, sign) {
        return d;
    }
    if moolatrikona_sign(planet) == Some(sign) {
        return Dignity::Moolatrikona;
    }
    relationship_dignity(natural_friendship_with(planet, sign.lord(), policy))
}

fn positional_dignity(planet: Planet, sign: Sign) -> Option<Dignity> {
    if exaltation_sign(planet) == sign {
        Some(Dignity::Exalted)
    } else if debilitation_sign(planet) == sign {
        Some(Dignity::Debilitated)
    } else if own_signs(planet).contains(&sign) {
        Some(Dignity::Own)
    } else {
        None
    }
}

/// Dignity inside a chart.
///
/// Precedence: Exalted > Debilitated > Moolatrikona > Own > compound
/// friendship. Moolatrikona is decided by its degree span and ranks above
/// own sign inside that span, unlike [`dignity_of`]. The friendship tier is
/// the compound of natural and temporal friendship, which can yield
/// GreatFriend/GreatEnemy.
pub fn dignity_in_chart(planet: Planet, chart: &Chart, policy: NodePolicy) -> Dignity {
    let placement = chart.placement(planet);
    let sign = placement.sign;

    if exaltation_sign(planet) == sign {
        return Dignity::Exalted;
    }
    if debilitation_sign(planet) == sign {
        return Dignity::Debilitated;
    }
    if let Some((mt_sign, start, end)) = moolatrikona(planet) {
        if mt_sign == sign && (start..end).contains(&placement.longitude_in_sign) {
            return Dignity::Moolatrikona;
        }
    }
    if own_signs(planet).contains(&sign) {
        return Dignity::Own;
    }

    let lord = sign.lord();
    let natural = natural_friendship_with(planet, lord, policy);
    let temporal = temporal_friendship(sign, chart.placement(lord).sign);
    relationship_dignity(compound_relationship(natural, temporal))
}

/// Houses ruled by a planet for the given ascendant, ascending.
pub fn house_lordships_of(planet: Planet, ascendant: Sign) -> Vec<House> {
    let mut houses: Vec<House> = ALL_SIGNS
        .iter()
        .filter(|s| s.lord() == planet && !planet.is_node())
        .map(|s| house_of(*s, ascendant))
        .collect();
    houses.sort_unstable();
    houses
}

/// Functional standing of a planet for a particular ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FunctionalStatus {
    Benefic,
    Malefic,
    Neutral,
}

/// Functional status from natural nature, dignity and house lordship.
///
/// Natural benefics lose benefic status when they rule a dusthana without
/// being dignified. Natural malefics ruling a kendra or trikona become
/// benefic with good dignity.
///
/// This is the sign-level reading: dignity comes from [`dignity_of`], so it
/// ignores where the sign lord sits. Inside a chart use [`status_in_chart`].
pub fn status_of(planet: Planet, sign: Sign, lordships: &[House]) -> FunctionalStatus {
    let dignity = dignity_of(planet, sign);
    status_from(planet, dignity, lordships)
}

/// Functional status with the same rules as [`status_of`], but with dignity
/// from [`dignity_in_chart`]. Chart analysis and everything downstream of it
/// use this.
pub fn status_in_chart(planet: Planet, chart: &Chart, policy: NodePolicy) -> FunctionalStatus {
    let dignity = dignity_in_chart(planet, chart, policy);
    status_from(planet, dignity, &house_lordships_of(planet, chart.ascendant()))
}

pub(crate) fn status_from(planet: Planet, dignity: Dignity, lordships: &[House]) -> FunctionalStatus {
    let lords_dusthana = lordships.iter().any(|h| is_dusthana(*h));
    let lords_good = lordships.iter().any(|h| is_kendra(*h) || is_trikona(*h));

    let naturally_benefic = match planet {
        Planet::Jupiter | Planet::Venus => true,
        Planet::Moon | Planet::Mercury => !dignity.is_weak(),
        _ => false,
    };

    if naturally_benefic {
        if lords_dusthana && !dignity.is_dignified() {
            if lords_good {
                FunctionalStatus::Neutral
            } else {
                FunctionalStatus::Malefic
            }
        } else {
            FunctionalStatus::Benefic
        }
    } else if planet.nature() == Nature::Benefic {
        // Moon or Mercury in a weak sign
        FunctionalStatus::Neutral
    } else if lords_good {
        if dignity.is_good() {
            FunctionalStatus::Benefic
        } else if dignity == Dignity::Neutral {
            FunctionalStatus::Neutral
        } else {
            FunctionalStatus::Malefic
        }
    } else {
        FunctionalStatus::Malefic
    }
}

/// Qualitative strength band derived from the 0-10 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 8.0 {
            Self::VeryStrong
        } else if rating >= 6.5 {
            Self::Strong
        } else if rating >= 4.5 {
            Self::Moderate
        } else if rating >= 2.5 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    /// Drop by `tiers`, saturating at VeryWeak.
    pub fn downgrade(self, tiers: u8) -> Self {
        const ORDER: [StrengthTier; 5] = [
            StrengthTier::VeryWeak,
            StrengthTier::Weak,
            StrengthTier::Moderate,
            StrengthTier::Strong,
            StrengthTier::VeryStrong,
        ];
        let idx = ORDER.iter().position(|t| *t == self).unwrap_or(0);
        ORDER[idx.saturating_sub(tiers as usize)]
    }
}

/// 0-10 strength rating from dignity, house and motion.
pub fn strength_rating(planet: Planet, dignity: Dignity, house: House, retrograde: bool) -> f64 {
    let mut rating = dignity.base_strength();
    if is_kendra(house) || is_trikona(house) {
        rating += 1.0;
    } else if is_dusthana(house) {
        rating -= 1.5;
    } else if matches!(house, 3 | 11) && planet.nature() == Nature::Malefic {
        rating += 0.5;
    }
    if retrograde && !planet.is_node() {
        rating += 0.5;
    }
    rating.clamp(0.0, 10.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetAnalysis {
    pub planet: Planet,
    pub sign: Sign,
    pub house: House,
    pub dignity: Dignity,
    pub lordships: Vec<House>,
    pub nature: Nature,
    pub status: FunctionalStatus,
    pub nakshatra: usize,
    pub nakshatra_lord: Planet,
    pub strength: f64,
    pub tier: StrengthTier,
}

impl PlanetAnalysis {
    pub fn lords(&self, house: House) -> bool {
        self.lordships.contains(&house)
    }
}

/// Analyze every placement in planet order.
pub fn analyze_placements(chart: &Chart, policy: NodePolicy) -> Vec<PlanetAnalysis> {
    chart
        .placements()
        .iter()
        .map(|p| {
            let dignity = dignity_in_chart(p.planet, chart, policy);
            let lordships = house_lordships_of(p.planet, chart.ascendant());
            let status = status_in_chart(p.planet, chart, policy);
            let strength = strength_rating(p.planet, dignity, p.house, p.retrograde);
            PlanetAnalysis {
                planet: p.planet,
                sign: p.sign,
                house: p.house,
                dignity,
                lordships,
                nature: p.planet.nature(),
                status,
                nakshatra: nakshatra_index(p.longitude),
                nakshatra_lord: nakshatra_lord(p.longitude),
                strength,
                tier: StrengthTier::from_rating(strength),
            }
        })
        .collect()
}

//! Exaltation, own-sign, moolatrikona and friendship tables.
//!
//! Classical values from BPHS. Rahu and Ketu have no classical friendship
//! row; they are routed through a [`NodePolicy`].

use serde::{Deserialize, Serialize};

use super::planet::Planet;
use super::sign::Sign;

/// Sign of exaltation. Nodes follow the common Taurus/Scorpio convention.
pub const fn exaltation_sign(planet: Planet) -> Sign {
    match planet {
        Planet::Sun => Sign::Aries,
        Planet::Moon => Sign::Taurus,
        Planet::Mars => Sign::Capricorn,
        Planet::Mercury => Sign::Virgo,
        Planet::Jupiter => Sign::Cancer,
        Planet::Venus => Sign::Pisces,
        Planet::Saturn => Sign::Libra,
        Planet::Rahu => Sign::Taurus,
        Planet::Ketu => Sign::Scorpio,
    }
}

/// Sign of debilitation, always opposite the exaltation sign.
pub fn debilitation_sign(planet: Planet) -> Sign {
    exaltation_sign(planet).offset(6)
}

/// Own signs. Empty for Rahu and Ketu.
pub const fn own_signs(planet: Planet) -> &'static [Sign] {
    match planet {
        Planet::Sun => &[Sign::Leo],
        Planet::Moon => &[Sign::Cancer],
        Planet::Mars => &[Sign::Aries, Sign::Scorpio],
        Planet::Mercury => &[Sign::Gemini, Sign::Virgo],
        Planet::Jupiter => &[Sign::Sagittarius, Sign::Pisces],
        Planet::Venus => &[Sign::Taurus, Sign::Libra],
        Planet::Saturn => &[Sign::Capricorn, Sign::Aquarius],
        Planet::Rahu | Planet::Ketu => &[],
    }
}

/// Moolatrikona sign with its degree span `[start, end)` inside the sign.
pub const fn moolatrikona(planet: Planet) -> Option<(Sign, f64, f64)> {
    match planet {
        Planet::Sun => Some((Sign::Leo, 0.0, 20.0)),
        Planet::Moon => Some((Sign::Taurus, 4.0, 20.0)),
        Planet::Mars => Some((Sign::Aries, 0.0, 12.0)),
        Planet::Mercury => Some((Sign::Virgo, 16.0, 20.0)),
        Planet::Jupiter => Some((Sign::Sagittarius, 0.0, 10.0)),
        Planet::Venus => Some((Sign::Libra, 0.0, 15.0)),
        Planet::Saturn => Some((Sign::Aquarius, 0.0, 20.0)),
        Planet::Rahu | Planet::Ketu => None,
    }
}

pub const fn moolatrikona_sign(planet: Planet) -> Option<Sign> {
    match moolatrikona(planet) {
        Some((sign, _, _)) => Some(sign),
        None => None,
    }
}

/// Five-fold relationship. Natural friendship only produces the middle
/// three; the outer two come from combining natural and temporal friendship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Relationship {
    GreatFriend,
    Friend,
    Neutral,
    Enemy,
    GreatEnemy,
}

/// How Rahu and Ketu take part in friendship lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodePolicy {
    /// Nodes relate to other planets the way Saturn does.
    #[default]
    SaturnLike,
    /// Every relationship involving a node is Neutral.
    AlwaysNeutral,
}

/// Natural (naisargika) friendship using the default node policy.
pub fn natural_friendship(planet: Planet, other: Planet) -> Relationship {
    natural_friendship_with(planet, other, NodePolicy::default())
}

pub fn natural_friendship_with(planet: Planet, other: Planet, policy: NodePolicy) -> Relationship {
    if planet.is_node() || other.is_node() {
        match policy {
            NodePolicy::AlwaysNeutral => return Relationship::Neutral,
            NodePolicy::SaturnLike => {
                let a = if planet.is_node() { Planet::Saturn } else { planet };
                let b = if other.is_node() { Planet::Saturn } else { other };
                if a == b {
                    return Relationship::Friend;
                }
                return classical_friendship(a, b);
            }
        }
    }
    classical_friendship(planet, other)
}

fn classical_friendship(planet: Planet, other: Planet) -> Relationship {
    use Planet::*;
    use Relationship::{Enemy, Friend, Neutral};

    match (planet, other) {
        (Sun, Moon | Mars | Jupiter) => Friend,
        (Sun, Venus | Saturn) => Enemy,

        (Moon, Sun | Mercury) => Friend,

        (Mars, Sun | Moon | Jupiter) => Friend,
        (Mars, Mercury) => Enemy,

        (Mercury, Sun | Venus) => Friend,
        (Mercury, Moon) => Enemy,

        (Jupiter, Sun | Moon | Mars) => Friend,
        (Jupiter, Mercury | Venus) => Enemy,

        (Venus, Mercury | Saturn) => Friend,
        (Venus, Sun | Moon) => Enemy,

        (Saturn, Mercury | Venus) => Friend,
        (Saturn, Sun | Moon | Mars) => Enemy,

        _ => Neutral,
    }
}

/// Temporal (tatkalika) friendship: a planet in the 2nd, 3rd, 4th, 10th,
/// 11th or 12th sign from another is its temporary friend.
pub fn temporal_friendship(from: Sign, to: Sign) -> Relationship {
    let distance = (to.index() as i32 - from.index() as i32).rem_euclid(12);
    match distance {
        1 | 2 | 3 | 9 | 10 | 11 => Relationship::Friend,
        _ => Relationship::Enemy,
    }
}

/// Compound (panchadha) relationship from natural and temporal friendship.
pub fn compound_relationship(natural: Relationship, temporal: Relationship) -> Relationship {
    use Relationship::*;

    let temporal_friend = matches!(temporal, Friend | GreatFriend);
    match (natural, temporal_friend) {
        (Friend | GreatFriend, true) => GreatFriend,
        (Friend | GreatFriend, false) => Neutral,
        (Neutral, true) => Friend,
        (Neutral, false) => Enemy,
        (Enemy | GreatEnemy, true) => Neutral,
        (Enemy | GreatEnemy, false) => GreatEnemy,
    }
}

//! The nine planets (grahas) and their natural benefic/malefic nature.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine planets in traditional order. Indices match `Planet::index()`.
pub const ALL_PLANETS: [Planet; 9] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
];

/// The seven classical planets, excluding the lunar nodes.
pub const CLASSICAL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

/// Natural malefics counted for conjunction affliction. The Sun is not one.
pub const AFFLICTING_MALEFICS: [Planet; 4] = [Planet::Mars, Planet::Saturn, Planet::Rahu, Planet::Ketu];

/// Natural (naisargika) benefic or malefic nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nature {
    Benefic,
    Malefic,
}

impl Planet {
    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    pub fn from_index(index: usize) -> Result<Self, LookupError> {
        ALL_PLANETS
            .get(index)
            .copied()
            .ok_or_else(|| LookupError::UnknownPlanet(format!("#{index}")))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Budha",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Natural nature. Moon and Mercury are counted benefic here; their
    /// conditional standing is resolved by the placement analyzer.
    pub const fn nature(self) -> Nature {
        match self {
            Self::Moon | Self::Mercury | Self::Jupiter | Self::Venus => Nature::Benefic,
            Self::Sun | Self::Mars | Self::Saturn | Self::Rahu | Self::Ketu => Nature::Malefic,
        }
    }

    pub const fn is_afflicting_malefic(self) -> bool {
        matches!(self, Self::Mars | Self::Saturn | Self::Rahu | Self::Ketu)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = LookupError;

    /// Accepts English or Sanskrit names, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_PLANETS
            .into_iter()
            .find(|p| {
                p.name().eq_ignore_ascii_case(needle) || p.sanskrit_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| LookupError::UnknownPlanet(needle.to_string()))
    }
}

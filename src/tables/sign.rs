//! The twelve signs (rashis), with element, modality and lordship.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::planet::Planet;
use crate::error::LookupError;
use crate::util::normalize_360;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All twelve signs, Aries first. Indices match `Sign::index()`.
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Movable (chara), fixed (sthira) or dual (dvisvabhava).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

impl Sign {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, LookupError> {
        ALL_SIGNS
            .get(index as usize)
            .copied()
            .ok_or(LookupError::UnknownSign(index))
    }

    /// Sign containing a longitude; the input is normalized first.
    pub fn from_longitude(longitude: f64) -> Self {
        let idx = (normalize_360(longitude) / 30.0).floor() as usize;
        ALL_SIGNS[idx.min(11)]
    }

    /// The n-th sign counted inclusively (1 = this sign, 7 = opposite).
    pub fn nth(self, n: u8) -> Self {
        self.offset(n as i32 - 1)
    }

    /// Shift by a signed number of signs, wrapping around the zodiac.
    pub fn offset(self, by: i32) -> Self {
        ALL_SIGNS[(self.index() as i32 + by).rem_euclid(12) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    /// Ruling planet of the sign.
    pub const fn lord(self) -> Planet {
        match self {
            Self::Aries | Self::Scorpio => Planet::Mars,
            Self::Taurus | Self::Libra => Planet::Venus,
            Self::Gemini | Self::Virgo => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Sagittarius | Self::Pisces => Planet::Jupiter,
            Self::Capricorn | Self::Aquarius => Planet::Saturn,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lord of a sign. Fixed 12-entry table.
pub const fn sign_lord(sign: Sign) -> Planet {
    sign.lord()
}

//! Static reference data: planets, signs, dignity and nakshatra tables.
//!
//! Everything here is immutable and exposed through pure accessors.

pub mod dignity;
pub mod nakshatra;
pub mod planet;
pub mod sign;

pub use dignity::{
    compound_relationship, debilitation_sign, exaltation_sign, moolatrikona, moolatrikona_sign,
    natural_friendship, natural_friendship_with, own_signs, temporal_friendship, NodePolicy,
    Relationship,
};
pub use nakshatra::{
    lord_of_nakshatra, nakshatra_index, nakshatra_lord, nakshatra_name, NAKSHATRA_LORDS,
    NAKSHATRA_SPAN,
};
pub use planet::{Nature, Planet, AFFLICTING_MALEFICS, ALL_PLANETS, CLASSICAL_PLANETS};
pub use sign::{sign_lord, Element, Modality, Sign, ALL_SIGNS};

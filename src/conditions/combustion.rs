use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::tables::Planet;
use crate::util::angular_separation;

/// Maximum distance from the Sun, in degrees, below which a planet is
/// combust. Mercury and Venus have tighter orbs when retrograde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CombustionOrbs {
    pub moon: f64,
    pub mars: f64,
    pub mercury: f64,
    pub mercury_retrograde: f64,
    pub jupiter: f64,
    pub venus: f64,
    pub venus_retrograde: f64,
    pub saturn: f64,
}

impl Default for CombustionOrbs {
    fn default() -> Self {
        Self {
            moon: 12.0,
            mars: 17.0,
            mercury: 14.0,
            mercury_retrograde: 12.0,
            jupiter: 11.0,
            venus: 10.0,
            venus_retrograde: 8.0,
            saturn: 15.0,
        }
    }
}

impl CombustionOrbs {
    /// Orb for a planet; `None` for the Sun and the nodes.
    pub fn orb_for(&self, planet: Planet, retrograde: bool) -> Option<f64> {
        match planet {
            Planet::Moon => Some(self.moon),
            Planet::Mars => Some(self.mars),
            Planet::Mercury if retrograde => Some(self.mercury_retrograde),
            Planet::Mercury => Some(self.mercury),
            Planet::Jupiter => Some(self.jupiter),
            Planet::Venus if retrograde => Some(self.venus_retrograde),
            Planet::Venus => Some(self.venus),
            Planet::Saturn => Some(self.saturn),
            Planet::Sun | Planet::Rahu | Planet::Ketu => None,
        }
    }
}

/// Distance from the Sun and the orb that applied, if `planet` is combust.
pub fn combustion_of(planet: Planet, chart: &Chart, orbs: &CombustionOrbs) -> Option<(f64, f64)> {
    let placement = chart.placement(planet);
    let orb = orbs.orb_for(planet, placement.retrograde)?;
    let distance = angular_separation(placement.longitude, chart.placement(Planet::Sun).longitude);
    (distance < orb).then_some((distance, orb))
}

pub fn is_combust(planet: Planet, chart: &Chart, orbs: &CombustionOrbs) -> bool {
    combustion_of(planet, chart, orbs).is_some()
}

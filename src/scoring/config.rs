use serde::{Deserialize, Serialize};

use crate::chart::House;
use crate::tables::Planet;

/// Scoring configuration for one life domain.
///
/// Each component maps a raw source onto a weight cap; the weights of a
/// domain normally sum to its ceiling.
///
/// Example YAML:
/// ```yaml
/// name: marriage
/// signature_tag: kalatra
/// score_ceiling: 10
/// components:
///   - label: 7th house
///     source: { house_strength: { houses: [7] } }
///     weight: 3.0
///   - label: Venus
///     source: { planet_strength: { planet: Venus } }
///     weight: 2.5
///   - label: Yogas
///     source: yoga_net
///     weight: 1.5
/// yoga:
///   net_range: 1.5
/// penalty:
///   kuja: { mild: 0.5, moderate: 1.0, severe: 1.5 }
///   key_planets: [Venus]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DomainConfig {
    pub name: String,

    /// Category tag of the signature yogas that count for this domain
    #[serde(default)]
    pub signature_tag: Option<String>,

    /// Upper bound of the final score (default: 10)
    #[serde(default = "default_ceiling")]
    pub score_ceiling: f64,

    pub components: Vec<ComponentConfig>,

    /// Required when any component uses `yoga_net`
    #[serde(default)]
    pub yoga: Option<YogaMapping>,

    #[serde(default)]
    pub penalty: PenaltyConfig,

    #[serde(default)]
    pub grade_bands: GradeBands,
}

fn default_ceiling() -> f64 {
    10.0
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ComponentConfig {
    pub label: String,
    pub source: ComponentSource,
    /// Maximum weighted contribution
    pub weight: f64,
}

/// Where a component's raw value comes from.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ComponentSource {
    /// Average house strength, 0-100
    HouseStrength { houses: Vec<House> },
    /// Effective planet strength, 0-10
    PlanetStrength { planet: Planet },
    /// Effective strength of a house's lord, 0-10
    HouseLordStrength { house: House },
    /// Net yoga score, within +/- `net_range`
    YogaNet,
}

impl ComponentSource {
    pub fn describe(&self) -> String {
        match self {
            Self::HouseStrength { houses } => {
                let list: Vec<String> = houses.iter().map(|h| h.to_string()).collect();
                format!("house strength [{}]", list.join(", "))
            }
            Self::PlanetStrength { planet } => format!("{planet} strength"),
            Self::HouseLordStrength { house } => format!("lord of house {house}"),
            Self::YogaNet => "yoga net".to_string(),
        }
    }
}

/// Grade weights for the yoga net score.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct YogaMapping {
    pub very_strong: f64,
    pub strong: f64,
    pub moderate: f64,
    /// The net is clamped to [-net_range, +net_range]
    pub net_range: f64,
}

impl Default for YogaMapping {
    fn default() -> Self {
        Self {
            very_strong: 1.0,
            strong: 0.75,
            moderate: 0.5,
            net_range: 1.5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct PenaltyConfig {
    /// Kuja dosha penalty; none when absent
    pub kuja: Option<KujaPenalty>,
    /// Significators whose afflictions are penalised
    pub key_planets: Vec<Planet>,
    /// Per combust key planet
    pub combust: f64,
    /// Per tier lost to malefic conjunction, per key planet
    pub afflicted_per_tier: f64,
    /// Per gandanta key planet, scaled by intensity
    pub gandanta: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KujaPenalty {
    pub mild: f64,
    pub moderate: f64,
    pub severe: f64,
    /// Multiplier applied when a cancellation is present (default: 0.25)
    #[serde(default = "default_cancelled_factor")]
    pub cancelled_factor: f64,
}

fn default_cancelled_factor() -> f64 {
    0.25
}

/// Lower percentage bounds of each grade.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct GradeBands {
    pub excellent: f64,
    pub very_good: f64,
    pub good: f64,
    pub average: f64,
}

impl Default for GradeBands {
    fn default() -> Self {
        Self {
            excellent: 85.0,
            very_good: 70.0,
            good: 55.0,
            average: 40.0,
        }
    }
}

fn component(label: &str, source: ComponentSource, weight: f64) -> ComponentConfig {
    ComponentConfig {
        label: label.to_string(),
        source,
        weight,
    }
}

impl DomainConfig {
    /// Built-in domain by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "marriage" => Some(Self::marriage()),
            "career" => Some(Self::career()),
            "wealth" => Some(Self::wealth()),
            "health" => Some(Self::health()),
            _ => None,
        }
    }

    pub fn presets() -> Vec<Self> {
        vec![Self::marriage(), Self::career(), Self::wealth(), Self::health()]
    }

    pub fn marriage() -> Self {
        Self {
            name: "marriage".to_string(),
            signature_tag: Some("kalatra".to_string()),
            score_ceiling: 10.0,
            components: vec![
                component("7th house", ComponentSource::HouseStrength { houses: vec![7] }, 3.0),
                component("Venus", ComponentSource::PlanetStrength { planet: Planet::Venus }, 2.5),
                component("7th lord", ComponentSource::HouseLordStrength { house: 7 }, 2.0),
                component("Jupiter", ComponentSource::PlanetStrength { planet: Planet::Jupiter }, 1.0),
                component("Yogas", ComponentSource::YogaNet, 1.5),
            ],
            yoga: Some(YogaMapping::default()),
            penalty: PenaltyConfig {
                kuja: Some(KujaPenalty {
                    mild: 0.5,
                    moderate: 1.0,
                    severe: 1.5,
                    cancelled_factor: 0.25,
                }),
                key_planets: vec![Planet::Venus],
                combust: 0.75,
                afflicted_per_tier: 0.5,
                gandanta: 0.5,
            },
            grade_bands: GradeBands::default(),
        }
    }

    pub fn career() -> Self {
        Self {
            name: "career".to_string(),
            signature_tag: Some("karma".to_string()),
            score_ceiling: 10.0,
            components: vec![
                component("10th house", ComponentSource::HouseStrength { houses: vec![10] }, 3.0),
                component("Sun", ComponentSource::PlanetStrength { planet: Planet::Sun }, 2.0),
                component("10th lord", ComponentSource::HouseLordStrength { house: 10 }, 2.0),
                component("Saturn", ComponentSource::PlanetStrength { planet: Planet::Saturn }, 1.5),
                component("Yogas", ComponentSource::YogaNet, 1.5),
            ],
            yoga: Some(YogaMapping::default()),
            penalty: PenaltyConfig {
                kuja: None,
                key_planets: vec![Planet::Sun, Planet::Saturn],
                combust: 0.5,
                afflicted_per_tier: 0.5,
                gandanta: 0.5,
            },
            grade_bands: GradeBands::default(),
        }
    }

    pub fn wealth() -> Self {
        Self {
            name: "wealth".to_string(),
            signature_tag: Some("dhana".to_string()),
            score_ceiling: 10.0,
            components: vec![
                component(
                    "2nd and 11th houses",
                    ComponentSource::HouseStrength { houses: vec![2, 11] },
                    3.0,
                ),
                component("Jupiter", ComponentSource::PlanetStrength { planet: Planet::Jupiter }, 2.0),
                component("2nd lord", ComponentSource::HouseLordStrength { house: 2 }, 1.5),
                component("11th lord", ComponentSource::HouseLordStrength { house: 11 }, 2.0),
                component("Yogas", ComponentSource::YogaNet, 1.5),
            ],
            yoga: Some(YogaMapping::default()),
            penalty: PenaltyConfig {
                kuja: None,
                key_planets: vec![Planet::Jupiter],
                combust: 0.75,
                afflicted_per_tier: 0.5,
                gandanta: 0.5,
            },
            grade_bands: GradeBands::default(),
        }
    }

    pub fn health() -> Self {
        Self {
            name: "health".to_string(),
            signature_tag: Some("arogya".to_string()),
            score_ceiling: 10.0,
            components: vec![
                component("Ascendant", ComponentSource::HouseStrength { houses: vec![1] }, 3.0),
                component("Ascendant lord", ComponentSource::HouseLordStrength { house: 1 }, 2.5),
                component("Sun", ComponentSource::PlanetStrength { planet: Planet::Sun }, 1.5),
                component("Moon", ComponentSource::PlanetStrength { planet: Planet::Moon }, 1.5),
                component("Yogas", ComponentSource::YogaNet, 1.5),
            ],
            yoga: Some(YogaMapping::default()),
            penalty: PenaltyConfig {
                kuja: None,
                key_planets: vec![Planet::Sun, Planet::Moon],
                combust: 0.5,
                afflicted_per_tier: 0.5,
                gandanta: 0.75,
            },
            grade_bands: GradeBands::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_weights_sum_to_ceiling() {
        for domain in DomainConfig::presets() {
            let total: f64 = domain.components.iter().map(|c| c.weight).sum();
            assert!(
                (total - domain.score_ceiling).abs() < 1e-9,
                "{} weights sum to {}",
                domain.name,
                total
            );
        }
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(DomainConfig::preset("career").map(|d| d.name), Some("career".to_string()));
        assert!(DomainConfig::preset("travel").is_none());
    }

    #[test]
    fn test_domain_config_serde_roundtrip() {
        let config = DomainConfig::marriage();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: DomainConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_minimal_domain_parse() {
        let yaml = r#"
name: siblings
components:
  - label: 3rd house
    source:
      house_strength:
        houses: [3]
    weight: 6
  - label: Mars
    source:
      planet_strength:
        planet: Mars
    weight: 4
"#;
        let config: DomainConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.score_ceiling, 10.0);
        assert!(config.yoga.is_none());
        assert!(config.penalty.kuja.is_none());
        assert_eq!(config.grade_bands, GradeBands::default());
        assert_eq!(
            config.components[1].source,
            ComponentSource::PlanetStrength { planet: Planet::Mars }
        );
    }

    #[test]
    fn test_yoga_net_unit_variant_parse() {
        let yaml = "label: Yogas\nsource: yoga_net\nweight: 2\n";
        let component: ComponentConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(component.source, ComponentSource::YogaNet);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "name: x\ncomponents: []\nbogus: 1\n";
        let result: Result<DomainConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_kuja_cancelled_factor_default() {
        let yaml = "mild: 1\nmoderate: 2\nsevere: 3\n";
        let kuja: KujaPenalty = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(kuja.cancelled_factor, 0.25);
    }
}

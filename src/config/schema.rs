use serde::{Deserialize, Serialize};

use crate::facts::EngineConfig;
use crate::scoring::DomainConfig;

/// Top-level configuration file.
///
/// Both sections are optional; an empty file is the built-in defaults.
///
/// Example YAML:
/// ```yaml
/// engine:
///   conditions:
///     gandanta_orb: 3.5
///     node_policy: always_neutral
/// domains:
///   - name: marriage
///     components:
///       - label: 7th house
///         source: { house_strength: { houses: [7] } }
///         weight: 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub engine: EngineConfig,
    /// Domains defined here shadow built-in presets of the same name
    pub domains: Vec<DomainConfig>,
}

impl Config {
    /// Configured domain by name, falling back to the built-in presets.
    pub fn domain(&self, name: &str) -> Option<DomainConfig> {
        self.domains
            .iter()
            .find(|d| d.name == name)
            .cloned()
            .or_else(|| DomainConfig::preset(name))
    }

    /// Every available domain: configured ones first, then presets not
    /// shadowed by them.
    pub fn all_domains(&self) -> Vec<DomainConfig> {
        let mut domains = self.domains.clone();
        for preset in DomainConfig::presets() {
            if !domains.iter().any(|d| d.name == preset.name) {
                domains.push(preset);
            }
        }
        domains
    }

    /// Config used by `init`: engine defaults plus every preset spelled out.
    pub fn starter() -> Self {
        Self {
            engine: EngineConfig::default(),
            domains: DomainConfig::presets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_configured_domain_shadows_preset() {
        let yaml = r#"
domains:
  - name: career
    score_ceiling: 20
    components:
      - label: 10th house
        source:
          house_strength:
            houses: [10]
        weight: 20
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let career = config.domain("career").unwrap();
        assert_eq!(career.score_ceiling, 20.0);
        assert_eq!(career.components.len(), 1);
        assert_eq!(config.domain("wealth"), DomainConfig::preset("wealth"));
        assert!(config.domain("travel").is_none());

        let names: Vec<String> = config.all_domains().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["career", "marriage", "wealth", "health"]);
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("queries: []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_starter_roundtrip() {
        let config = Config::starter();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}

use log::debug;
use serde::Serialize;

use super::config::{ComponentConfig, ComponentSource, DomainConfig, GradeBands, YogaMapping};
use super::strength::{effective_planet_strength, house_strength};
use crate::chart::{check_house, Chart};
use crate::conditions::KujaSeverity;
use crate::error::ScoreError;
use crate::facts::{ChartFacts, EngineConfig};
use crate::yoga::{evaluate_yogas_with, YogaCategory, YogaGrade, YogaRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub label: String,   // e.g. "7th house", "Venus"
    pub detail: String,  // e.g. "house strength [7]", "3 yogas, net +1.25"
    pub raw_value: f64,  // value from the source, before weighting
    pub raw_max: f64,    // upper bound of the source's scale
    pub weight_cap: f64, // weighted value when raw_value == raw_max
    pub weighted_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PenaltyTerm {
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ScoreGrade {
    BelowAverage,
    Average,
    Good,
    VeryGood,
    Excellent,
}

impl ScoreGrade {
    pub fn from_percentage(percentage: f64, bands: &GradeBands) -> Self {
        if percentage >= bands.excellent {
            Self::Excellent
        } else if percentage >= bands.very_good {
            Self::VeryGood
        } else if percentage >= bands.good {
            Self::Good
        } else if percentage >= bands.average {
            Self::Average
        } else {
            Self::BelowAverage
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
        }
    }
}

/// Final score with the full breakdown behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeScore {
    pub domain: String,
    pub components: Vec<ScoreComponent>,
    pub penalties: Vec<PenaltyTerm>,
    /// Sum of penalty terms, never negative
    pub penalty: f64,
    pub raw_total: f64,
    pub clamped_score: f64,
    pub ceiling: f64,
    pub percentage: f64,
    pub grade: ScoreGrade,
    /// Yogas found in the chart; the yoga net only counts the relevant ones
    pub yogas: Vec<YogaRecord>,
}

/// Score a chart with default engine settings.
pub fn score(chart: &Chart, domain: &DomainConfig) -> Result<CompositeScore, ScoreError> {
    score_with(chart, domain, &EngineConfig::default())
}

pub fn score_with(
    chart: &Chart,
    domain: &DomainConfig,
    engine: &EngineConfig,
) -> Result<CompositeScore, ScoreError> {
    let facts = ChartFacts::derive(chart, engine);
    score_with_facts(chart, &facts, domain)
}

/// Score against already derived facts.
///
/// # Errors
///
/// `IncompleteDomainConfig` names the first component whose source cannot
/// be computed, or the first number that is NaN or infinite.
pub fn score_with_facts(
    chart: &Chart,
    facts: &ChartFacts,
    domain: &DomainConfig,
) -> Result<CompositeScore, ScoreError> {
    check_finite(domain)?;

    let yogas = evaluate_yogas_with(chart, facts);
    let mut components = Vec::with_capacity(domain.components.len());
    for component in &domain.components {
        let scored = score_component(component, chart, facts, domain, &yogas)?;
        debug!(
            "{}: {} -> raw {:.2}/{} weighted {:.2}",
            domain.name, scored.label, scored.raw_value, scored.raw_max, scored.weighted_value
        );
        components.push(scored);
    }

    let penalties = penalty_terms(facts, domain);
    let penalty = penalties.iter().map(|p| p.amount).sum::<f64>().max(0.0);

    let raw_total = components.iter().map(|c| c.weighted_value).sum::<f64>() - penalty;
    let clamped_score = raw_total.clamp(0.0, domain.score_ceiling);
    let percentage = clamped_score / domain.score_ceiling * 100.0;
    let grade = ScoreGrade::from_percentage(percentage, &domain.grade_bands);

    debug!(
        "{}: raw {:.2} - penalty {:.2} -> {:.2}/{} ({:?})",
        domain.name,
        raw_total + penalty,
        penalty,
        clamped_score,
        domain.score_ceiling,
        grade
    );

    Ok(CompositeScore {
        domain: domain.name.clone(),
        components,
        penalties,
        penalty,
        raw_total,
        clamped_score,
        ceiling: domain.score_ceiling,
        percentage,
        grade,
        yogas,
    })
}

/// A NaN or infinite weight, ceiling or penalty would slip past the clamp.
fn check_finite(domain: &DomainConfig) -> Result<(), ScoreError> {
    let ceiling = domain.score_ceiling;
    if !(ceiling.is_finite() && ceiling > 0.0) {
        return Err(ScoreError::incomplete(
            "score_ceiling",
            format!("must be positive and finite, got {ceiling}"),
        ));
    }

    for component in &domain.components {
        if !component.weight.is_finite() {
            return Err(ScoreError::incomplete(
                &component.label,
                format!("weight must be finite, got {}", component.weight),
            ));
        }
    }

    let mut fields: Vec<(&str, f64)> = Vec::new();
    if let Some(ref yoga) = domain.yoga {
        fields.extend([
            ("yoga.very_strong", yoga.very_strong),
            ("yoga.strong", yoga.strong),
            ("yoga.moderate", yoga.moderate),
            ("yoga.net_range", yoga.net_range),
        ]);
    }
    let penalty = &domain.penalty;
    if let Some(ref kuja) = penalty.kuja {
        fields.extend([
            ("penalty.kuja.mild", kuja.mild),
            ("penalty.kuja.moderate", kuja.moderate),
            ("penalty.kuja.severe", kuja.severe),
            ("penalty.kuja.cancelled_factor", kuja.cancelled_factor),
        ]);
    }
    fields.extend([
        ("penalty.combust", penalty.combust),
        ("penalty.afflicted_per_tier", penalty.afflicted_per_tier),
        ("penalty.gandanta", penalty.gandanta),
    ]);

    match fields.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(ScoreError::incomplete(
            field,
            format!("must be finite, got {value}"),
        )),
        None => Ok(()),
    }
}

fn score_component(
    component: &ComponentConfig,
    chart: &Chart,
    facts: &ChartFacts,
    domain: &DomainConfig,
    yogas: &[YogaRecord],
) -> Result<ScoreComponent, ScoreError> {
    let incomplete = |reason: String| ScoreError::incomplete(&component.label, reason);

    let (raw_value, raw_max, detail) = match &component.source {
        ComponentSource::HouseStrength { houses } => {
            if houses.is_empty() {
                return Err(incomplete("lists no houses".to_string()));
            }
            let mut total = 0.0;
            for house in houses {
                total += house_strength(*house, chart, facts)
                    .map_err(|e| incomplete(e.to_string()))?;
            }
            (total / houses.len() as f64, 100.0, component.source.describe())
        }
        ComponentSource::PlanetStrength { planet } => (
            effective_planet_strength(*planet, facts),
            10.0,
            format!("{} ({})", component.source.describe(), facts.analysis(*planet).dignity.label()),
        ),
        ComponentSource::HouseLordStrength { house } => {
            let house = check_house(*house).map_err(|e| incomplete(e.to_string()))?;
            let lord = chart.house_lord(house).map_err(|e| incomplete(e.to_string()))?;
            (
                effective_planet_strength(lord, facts),
                10.0,
                format!("{} ({lord})", component.source.describe()),
            )
        }
        ComponentSource::YogaNet => {
            let mapping = domain
                .yoga
                .as_ref()
                .ok_or_else(|| incomplete("uses yoga_net but the domain has no yoga mapping".to_string()))?;
            if !(mapping.net_range > 0.0) {
                return Err(incomplete("yoga net_range must be positive".to_string()));
            }
            let (net, counted) = yoga_net(yogas, mapping, domain.signature_tag.as_deref());
            (
                net,
                mapping.net_range,
                format!("{counted} yogas, net {net:+.2}"),
            )
        }
    };

    Ok(ScoreComponent {
        label: component.label.clone(),
        detail,
        raw_value,
        raw_max,
        weight_cap: component.weight,
        weighted_value: raw_value / raw_max * component.weight,
    })
}

fn grade_weight(grade: YogaGrade, mapping: &YogaMapping) -> f64 {
    match grade {
        YogaGrade::VeryStrong => mapping.very_strong,
        YogaGrade::Strong => mapping.strong,
        YogaGrade::Moderate => mapping.moderate,
    }
}

/// Signature yogas of this domain and benefic yogas add, malefic yogas
/// subtract; the sum is clamped to the symmetric net range. Returns the net
/// and the number of yogas that counted.
pub fn yoga_net(yogas: &[YogaRecord], mapping: &YogaMapping, signature_tag: Option<&str>) -> (f64, usize) {
    let mut net = 0.0;
    let mut counted = 0;
    for yoga in yogas {
        let sign = match yoga.category {
            YogaCategory::Benefic => 1.0,
            YogaCategory::Malefic => -1.0,
            YogaCategory::Domain(tag) if Some(tag) == signature_tag => 1.0,
            YogaCategory::Domain(_) => continue,
        };
        net += sign * grade_weight(yoga.grade, mapping);
        counted += 1;
    }
    (net.clamp(-mapping.net_range, mapping.net_range), counted)
}

fn penalty_terms(facts: &ChartFacts, domain: &DomainConfig) -> Vec<PenaltyTerm> {
    let cfg = &domain.penalty;
    let mut terms = Vec::new();

    if let (Some(kuja), Some((severity, cancelled))) = (&cfg.kuja, facts.kuja()) {
        let base = match severity {
            KujaSeverity::Mild => kuja.mild,
            KujaSeverity::Moderate => kuja.moderate,
            KujaSeverity::Severe => kuja.severe,
        };
        let (amount, note) = if cancelled {
            (base * kuja.cancelled_factor, " (cancelled)")
        } else {
            (base, "")
        };
        terms.push(PenaltyTerm {
            label: format!("Kuja dosha, {severity:?}{note}"),
            amount,
        });
    }

    for planet in &cfg.key_planets {
        if cfg.combust > 0.0 && facts.is_combust(*planet) {
            terms.push(PenaltyTerm {
                label: format!("{planet} combust"),
                amount: cfg.combust,
            });
        }
        let tiers = facts.affliction_tiers(*planet);
        if cfg.afflicted_per_tier > 0.0 && tiers > 0 {
            terms.push(PenaltyTerm {
                label: format!("{planet} afflicted by malefics"),
                amount: cfg.afflicted_per_tier * f64::from(tiers),
            });
        }
        if let Some(intensity) = facts.gandanta_intensity(*planet) {
            if cfg.gandanta > 0.0 {
                terms.push(PenaltyTerm {
                    label: format!("{planet} in gandanta"),
                    amount: cfg.gandanta * intensity,
                });
            }
        }
    }

    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::fixtures::{chart_from_longitudes, chart_from_signs};
    use crate::scoring::{KujaPenalty, PenaltyConfig};
    use crate::tables::Planet;

    fn sample_chart() -> Chart {
        chart_from_signs(0, [4, 3, 9, 5, 3, 6, 6, 2, 8])
    }

    #[test]
    fn test_breakdown_matches_total() {
        let result = score(&sample_chart(), &DomainConfig::marriage()).unwrap();
        assert_eq!(result.components.len(), 5);
        let sum: f64 = result.components.iter().map(|c| c.weighted_value).sum();
        assert!((result.raw_total - (sum - result.penalty)).abs() < 1e-9);
        assert!((0.0..=result.ceiling).contains(&result.clamped_score));
        assert!((result.percentage - result.clamped_score / result.ceiling * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_value_formula() {
        let result = score(&sample_chart(), &DomainConfig::career()).unwrap();
        for c in &result.components {
            assert!((c.weighted_value - c.raw_value / c.raw_max * c.weight_cap).abs() < 1e-9);
        }
    }

    #[test]
    fn test_grade_bands() {
        let bands = GradeBands::default();
        assert_eq!(ScoreGrade::from_percentage(90.0, &bands), ScoreGrade::Excellent);
        assert_eq!(ScoreGrade::from_percentage(85.0, &bands), ScoreGrade::Excellent);
        assert_eq!(ScoreGrade::from_percentage(70.0, &bands), ScoreGrade::VeryGood);
        assert_eq!(ScoreGrade::from_percentage(60.0, &bands), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_percentage(40.0, &bands), ScoreGrade::Average);
        assert_eq!(ScoreGrade::from_percentage(39.9, &bands), ScoreGrade::BelowAverage);
        assert_eq!(ScoreGrade::VeryGood.label(), "Very Good");
    }

    #[test]
    fn test_clamps_above_ceiling() {
        let mut domain = DomainConfig::marriage();
        for c in &mut domain.components {
            c.weight *= 10.0;
        }
        let result = score(&sample_chart(), &domain).unwrap();
        assert!(result.raw_total > domain.score_ceiling);
        assert_eq!(result.clamped_score, domain.score_ceiling);
        assert_eq!(result.grade, ScoreGrade::Excellent);
    }

    #[test]
    fn test_clamps_below_zero() {
        let mut domain = DomainConfig::marriage();
        domain.penalty.kuja = Some(KujaPenalty {
            mild: 100.0,
            moderate: 100.0,
            severe: 100.0,
            cancelled_factor: 1.0,
        });
        // Mars in Aries (house 1): Kuja from the ascendant
        let chart = chart_from_signs(0, [4, 3, 0, 5, 3, 6, 6, 2, 8]);
        let result = score(&chart, &domain).unwrap();
        assert!(result.raw_total < 0.0);
        assert_eq!(result.clamped_score, 0.0);
        assert_eq!(result.grade, ScoreGrade::BelowAverage);
    }

    #[test]
    fn test_cancelled_kuja_scaled() {
        let mut domain = DomainConfig::marriage();
        domain.penalty = PenaltyConfig {
            kuja: Some(KujaPenalty {
                mild: 1.0,
                moderate: 2.0,
                severe: 4.0,
                cancelled_factor: 0.25,
            }),
            ..PenaltyConfig::default()
        };
        // Mars own sign in Aries, house 1: Mild from ascendant, cancelled
        let chart = chart_from_signs(0, [1, 2, 0, 1, 3, 10, 9, 4, 10]);
        let result = score(&chart, &domain).unwrap();
        assert_eq!(result.penalties.len(), 1);
        assert!(result.penalties[0].label.contains("cancelled"));
        assert!((result.penalty - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_key_planet_penalties() {
        let mut domain = DomainConfig::career();
        domain.penalty = PenaltyConfig {
            kuja: None,
            key_planets: vec![Planet::Mercury],
            combust: 1.0,
            afflicted_per_tier: 0.0,
            gandanta: 2.0,
        };
        // Mercury 2° from the Sun and 1° past the Cancer-Leo junction
        let chart = chart_from_longitudes(
            0,
            [123.0, 20.0, 200.0, 121.0, 260.0, 300.0, 330.0, 60.0, 240.5],
        );
        let result = score(&chart, &domain).unwrap();
        let labels: Vec<&str> = result.penalties.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Mercury combust", "Mercury in gandanta"]);
        let expected_gandanta = 2.0 * (1.0 - 1.0 / (10.0 / 3.0));
        assert!((result.penalty - (1.0 + expected_gandanta)).abs() < 1e-9);
    }

    #[test]
    fn test_yoga_net_without_mapping_fails() {
        let mut domain = DomainConfig::health();
        domain.yoga = None;
        let err = score(&sample_chart(), &domain).unwrap_err();
        assert_eq!(
            err,
            ScoreError::incomplete("Yogas", "uses yoga_net but the domain has no yoga mapping")
        );
    }

    #[test]
    fn test_empty_and_bad_houses_fail() {
        let mut domain = DomainConfig::career();
        domain.components[0].source = ComponentSource::HouseStrength { houses: vec![] };
        assert!(matches!(
            score(&sample_chart(), &domain),
            Err(ScoreError::IncompleteDomainConfig { component, .. }) if component == "10th house"
        ));

        domain.components[0].source = ComponentSource::HouseStrength { houses: vec![13] };
        assert!(score(&sample_chart(), &domain).is_err());

        let mut domain = DomainConfig::career();
        domain.components[2].source = ComponentSource::HouseLordStrength { house: 0 };
        assert!(score(&sample_chart(), &domain).is_err());
    }

    #[test]
    fn test_zero_ceiling_fails() {
        let mut domain = DomainConfig::wealth();
        domain.score_ceiling = 0.0;
        assert!(score(&sample_chart(), &domain).is_err());
    }

    #[test]
    fn test_non_finite_weight_fails() {
        let mut domain = DomainConfig::marriage();
        domain.components[0].weight = f64::NAN;
        let label = domain.components[0].label.clone();
        assert!(matches!(
            score(&sample_chart(), &domain),
            Err(ScoreError::IncompleteDomainConfig { component, .. }) if component == label
        ));

        // An infinite weight on a zero raw value gives NaN
        let mut domain = DomainConfig::marriage();
        domain.components[4].weight = f64::INFINITY;
        assert!(score(&sample_chart(), &domain).is_err());
    }

    #[test]
    fn test_non_finite_ceiling_fails() {
        for ceiling in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut domain = DomainConfig::wealth();
            domain.score_ceiling = ceiling;
            assert!(matches!(
                score(&sample_chart(), &domain),
                Err(ScoreError::IncompleteDomainConfig { component, .. }) if component == "score_ceiling"
            ));
        }
    }

    #[test]
    fn test_non_finite_penalty_and_yoga_values_fail() {
        let mut domain = DomainConfig::career();
        domain.penalty.combust = f64::NAN;
        assert_eq!(
            score(&sample_chart(), &domain).unwrap_err(),
            ScoreError::incomplete("penalty.combust", "must be finite, got NaN")
        );

        let mut domain = DomainConfig::marriage();
        if let Some(ref mut kuja) = domain.penalty.kuja {
            kuja.severe = f64::INFINITY;
        }
        assert!(score(&sample_chart(), &domain).is_err());

        let mut domain = DomainConfig::wealth();
        domain.yoga = Some(YogaMapping {
            net_range: f64::INFINITY,
            ..YogaMapping::default()
        });
        assert_eq!(
            score(&sample_chart(), &domain).unwrap_err(),
            ScoreError::incomplete("yoga.net_range", "must be finite, got inf")
        );
    }

    #[test]
    fn test_yoga_net_clamped_and_signed() {
        let mapping = YogaMapping::default();
        let record = |category, grade| YogaRecord {
            name: "test",
            category,
            grade,
            planets: vec![],
            houses: vec![],
            description: String::new(),
            effect: "",
            remedy: None,
        };
        let yogas = vec![
            record(YogaCategory::Benefic, YogaGrade::VeryStrong),
            record(YogaCategory::Domain("kalatra"), YogaGrade::Strong),
            record(YogaCategory::Domain("karma"), YogaGrade::Strong),
            record(YogaCategory::Malefic, YogaGrade::Moderate),
        ];
        let (net, counted) = yoga_net(&yogas, &mapping, Some("kalatra"));
        assert_eq!(counted, 3);
        assert!((net - 1.25).abs() < 1e-9);

        let many: Vec<_> = (0..5)
            .map(|_| record(YogaCategory::Malefic, YogaGrade::VeryStrong))
            .collect();
        assert_eq!(yoga_net(&many, &mapping, None).0, -1.5);
    }

    #[test]
    fn test_deterministic() {
        let chart = sample_chart();
        let domain = DomainConfig::wealth();
        assert_eq!(score(&chart, &domain), score(&chart, &domain));
    }
}

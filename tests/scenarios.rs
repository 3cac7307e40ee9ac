//! End-to-end scenarios through the public API

use pretty_assertions::assert_eq;

use jyotish_eval::aspects::{all_conjunctions, conjunctions_of, ConjunctionRecord};
use jyotish_eval::conditions::SpecialCondition;
use jyotish_eval::placement::{dignity_of, Dignity};
use jyotish_eval::scoring::ScoreGrade;
use jyotish_eval::yoga::{YogaCategory, YogaGrade};
use jyotish_eval::{
    build_chart, evaluate_yogas, score, ChartFacts, ChartInput, DomainConfig, EngineConfig,
    InvalidChartError, Planet, RawPlacement, Sign,
};

/// Planets in ALL_PLANETS order at the given longitudes
fn placements(longitudes: [f64; 9]) -> Vec<RawPlacement> {
    [
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
    ]
    .into_iter()
    .zip(longitudes)
    .map(|(p, l)| RawPlacement::new(p, l))
    .collect()
}

#[test]
fn venus_in_aries_is_a_friendship_tier() {
    let chart = build_chart(
        0,
        &placements([100.0, 40.0, 200.0, 130.0, 250.0, 15.0, 290.0, 70.0, 250.0]),
    )
    .unwrap();
    let venus = chart.placement(Planet::Venus);
    assert_eq!(venus.sign, Sign::Aries);
    assert_eq!(venus.house, 1);

    let dignity = dignity_of(Planet::Venus, Sign::Aries);
    assert_eq!(dignity, Dignity::Neutral);
    assert!(!dignity.is_dignified());
}

#[test]
fn jupiter_in_cancer_is_exalted_in_the_fourth() {
    let chart = build_chart(
        0,
        &placements([10.0, 40.0, 200.0, 20.0, 105.0, 50.0, 290.0, 70.0, 250.0]),
    )
    .unwrap();
    let jupiter = chart.placement(Planet::Jupiter);
    assert_eq!(jupiter.sign, Sign::Cancer);
    assert_eq!(jupiter.house, 4);
    assert_eq!(dignity_of(Planet::Jupiter, Sign::Cancer), Dignity::Exalted);
}

#[test]
fn saturn_in_seventh_triggers_shani_dosha() {
    // Cancer ascendant, Saturn in Capricorn
    let chart = build_chart(
        3,
        &placements([10.0, 40.0, 200.0, 20.0, 105.0, 50.0, 285.0, 70.0, 250.0]),
    )
    .unwrap();
    assert_eq!(chart.placement(Planet::Saturn).house, 7);

    let yogas = evaluate_yogas(&chart);
    let shani = yogas
        .iter()
        .find(|y| y.name == "Shani Dosha")
        .unwrap();
    assert_eq!(shani.grade, YogaGrade::Moderate);
    assert_eq!(shani.category, YogaCategory::Malefic);
    assert!(shani.remedy.is_some_and(|r| !r.is_empty()));
}

#[test]
fn leo_pair_is_one_conjunction_seen_from_both_sides() {
    // Sun and Venus in Leo, everyone else spread out
    let chart = build_chart(
        0,
        &placements([125.0, 40.0, 200.0, 70.0, 250.0, 140.0, 290.0, 10.0, 340.0]),
    )
    .unwrap();
    let expected = ConjunctionRecord {
        a: Planet::Sun,
        b: Planet::Venus,
        sign: Sign::Leo,
    };
    assert_eq!(all_conjunctions(&chart), vec![expected]);
    assert_eq!(conjunctions_of(Planet::Sun, &chart), vec![expected]);
    assert_eq!(conjunctions_of(Planet::Venus, &chart), vec![expected]);
}

#[test]
fn dagdha_needs_the_weekday() {
    let raw = placements([10.0, 40.0, 200.0, 20.0, 105.0, 50.0, 285.0, 70.0, 250.0]);
    let without = ChartInput {
        ascendant_sign: 0,
        planets: raw.clone(),
        weekday: None,
    }
    .build()
    .unwrap();
    let with = ChartInput {
        ascendant_sign: 0,
        planets: raw,
        weekday: Some(chrono::Weekday::Fri),
    }
    .build()
    .unwrap();

    let is_dagdha = |c: &SpecialCondition| c.label() == "Dagdha lord";
    let config = EngineConfig::default();
    let facts_without = ChartFacts::derive(&without, &config);
    let facts_with = ChartFacts::derive(&with, &config);
    assert!(!facts_without.conditions.iter().any(is_dagdha));
    // Friday burns Leo, ruled by the Sun
    let dagdha: Vec<Planet> = facts_with
        .conditions
        .iter()
        .filter(|c| is_dagdha(c))
        .map(|c| c.planet())
        .collect();
    assert_eq!(dagdha, vec![Planet::Sun]);
}

#[test]
fn invalid_input_yields_no_chart() {
    let mut raw = placements([10.0, 40.0, 200.0, 20.0, 105.0, 50.0, 285.0, 70.0, 250.0]);
    assert_eq!(
        build_chart(12, &raw).unwrap_err(),
        InvalidChartError::AscendantOutOfRange(12)
    );

    raw[2].longitude = 360.0;
    assert_eq!(
        build_chart(0, &raw).unwrap_err(),
        InvalidChartError::LongitudeOutOfRange {
            planet: Planet::Mars,
            longitude: 360.0
        }
    );

    raw.pop();
    raw[2].longitude = 200.0;
    assert_eq!(
        build_chart(0, &raw).unwrap_err(),
        InvalidChartError::MissingPlanet(Planet::Ketu)
    );
}

#[test]
fn every_preset_scores_with_a_consistent_breakdown() {
    let chart = build_chart(
        4,
        &placements([125.0, 40.0, 200.0, 70.0, 250.0, 140.0, 290.0, 10.0, 190.0]),
    )
    .unwrap();
    for domain in DomainConfig::presets() {
        let result = score(&chart, &domain).unwrap();
        assert_eq!(result.domain, domain.name);
        assert_eq!(result.components.len(), domain.components.len());
        let sum: f64 = result.components.iter().map(|c| c.weighted_value).sum();
        assert!((result.raw_total - (sum - result.penalty)).abs() < 1e-9);
        let expected = ScoreGrade::from_percentage(result.percentage, &domain.grade_bands);
        assert_eq!(result.grade, expected);
    }
}

//! Affliction yogas and doshas. Every match carries a remedy.

use super::{YogaCategory, YogaGrade, YogaMatch, YogaRule};
use crate::chart::{nth_house_from, Chart, House};
use crate::conditions::KujaSeverity;
use crate::facts::ChartFacts;
use crate::tables::{Planet, CLASSICAL_PLANETS};
use crate::util::normalize_360;

pub(super) const RULES: &[YogaRule] = &[
    YogaRule {
        name: "Kuja Dosha",
        category: YogaCategory::Malefic,
        check: kuja_dosha,
    },
    YogaRule {
        name: "Kala Sarpa",
        category: YogaCategory::Malefic,
        check: kala_sarpa,
    },
    YogaRule {
        name: "Papakartari",
        category: YogaCategory::Malefic,
        check: papakartari,
    },
    YogaRule {
        name: "Guru Chandala",
        category: YogaCategory::Malefic,
        check: guru_chandala,
    },
    YogaRule {
        name: "Grahana",
        category: YogaCategory::Malefic,
        check: grahana,
    },
    YogaRule {
        name: "Shani Dosha",
        category: YogaCategory::Malefic,
        check: shani_dosha,
    },
];

const NODES: [Planet; 2] = [Planet::Rahu, Planet::Ketu];

/// Uncancelled Kuja dosha, graded by how many reference points trigger it.
fn kuja_dosha(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    let (severity, cancelled) = facts.kuja()?;
    if cancelled {
        return None;
    }
    let grade = match severity {
        KujaSeverity::Severe => YogaGrade::VeryStrong,
        KujaSeverity::Moderate => YogaGrade::Strong,
        KujaSeverity::Mild => YogaGrade::Moderate,
    };
    let house = facts.analysis(Planet::Mars).house;
    Some(
        YogaMatch::new(grade, "Friction and delays in partnership")
            .planets([Planet::Mars])
            .houses([house])
            .describe(format!("Mars in house {house} ({severity:?} Kuja dosha)"))
            .remedy("Recite Hanuman Chalisa on Tuesdays; match with a similarly placed Mars"),
    )
}

/// All seven classical planets on one side of the Rahu-Ketu axis.
fn kala_sarpa(chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    let rahu = chart.placement(Planet::Rahu).longitude;
    let span = normalize_360(chart.placement(Planet::Ketu).longitude - rahu);
    if span == 0.0 {
        return None;
    }
    // A planet exactly on Rahu or Ketu sits on the axis, on neither side.
    let sides: Vec<bool> = CLASSICAL_PLANETS
        .iter()
        .map(|p| normalize_360(chart.placement(*p).longitude - rahu))
        .filter(|offset| *offset != 0.0 && *offset != span)
        .map(|offset| offset < span)
        .collect();
    let hemmed = sides.iter().all(|s| *s) || sides.iter().all(|s| !*s);
    if sides.is_empty() || !hemmed {
        return None;
    }
    Some(
        YogaMatch::new(YogaGrade::Strong, "Sudden reversals and recurring obstacles")
            .planets(NODES)
            .houses(NODES.map(|n| facts.analysis(n).house))
            .describe("All seven planets lie between Rahu and Ketu")
            .remedy("Worship at a Naga temple; recite the Maha Mrityunjaya mantra"),
    )
}

/// Ascendant or Moon hemmed by functional malefics in the 12th and 2nd.
fn papakartari(chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    let moon = facts.analysis(Planet::Moon).house;
    let mut planets = Vec::new();
    let mut houses: Vec<House> = Vec::new();

    for house in [1, moon] {
        if houses.contains(&house) {
            continue;
        }
        let malefics_in = |h: House| -> Vec<Planet> {
            chart
                .occupants(h)
                .into_iter()
                .filter(|p| facts.is_functional_malefic(*p))
                .collect()
        };
        let before = malefics_in(nth_house_from(house, 12));
        let after = malefics_in(nth_house_from(house, 2));
        if !before.is_empty() && !after.is_empty() {
            houses.push(house);
            planets.extend(before);
            planets.extend(after);
        }
    }

    if houses.is_empty() {
        return None;
    }
    let grade = if houses.contains(&1) {
        YogaGrade::Strong
    } else {
        YogaGrade::Moderate
    };
    planets.sort_unstable();
    planets.dedup();
    houses.sort_unstable();
    Some(
        YogaMatch::new(grade, "Constraint and pressure on the self")
            .describe(format!(
                "House {} hemmed between malefics",
                houses.iter().map(|h| h.to_string()).collect::<Vec<_>>().join(", ")
            ))
            .planets(planets)
            .houses(houses)
            .remedy("Strengthen the ascendant lord; offer charity on Saturdays"),
    )
}

/// Jupiter with Rahu or Ketu.
fn guru_chandala(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    let nodes: Vec<Planet> = NODES
        .into_iter()
        .filter(|n| facts.conjoined(Planet::Jupiter, *n))
        .collect();
    if nodes.is_empty() {
        return None;
    }
    let jupiter = facts.analysis(Planet::Jupiter);
    let grade = if jupiter.dignity.is_weak() {
        YogaGrade::Strong
    } else {
        YogaGrade::Moderate
    };
    let mut planets = vec![Planet::Jupiter];
    planets.extend(nodes);
    Some(
        YogaMatch::new(grade, "Misjudgement and conflict with teachers")
            .planets(planets)
            .houses([jupiter.house])
            .describe(format!("Jupiter joined by a node in house {}", jupiter.house))
            .remedy("Respect elders and teachers; recite Guru mantra on Thursdays"),
    )
}

/// Sun or Moon with a node; both luminaries afflicted is Strong.
fn grahana(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    let mut planets = Vec::new();
    let mut houses = Vec::new();
    let mut luminaries = 0;
    for luminary in [Planet::Sun, Planet::Moon] {
        let nodes: Vec<Planet> = NODES
            .into_iter()
            .filter(|n| facts.conjoined(luminary, *n))
            .collect();
        if !nodes.is_empty() {
            luminaries += 1;
            planets.push(luminary);
            planets.extend(nodes);
            houses.push(facts.analysis(luminary).house);
        }
    }
    if luminaries == 0 {
        return None;
    }
    let grade = if luminaries == 2 {
        YogaGrade::Strong
    } else {
        YogaGrade::Moderate
    };
    planets.sort_unstable();
    planets.dedup();
    houses.sort_unstable();
    houses.dedup();
    Some(
        YogaMatch::new(grade, "Eclipsed confidence or emotional unrest")
            .planets(planets)
            .houses(houses)
            .describe("A luminary is joined by Rahu or Ketu")
            .remedy("Offer water to the Sun at sunrise; observe fasts on eclipse days"),
    )
}

/// Saturn in the 7th house, in any sign.
fn shani_dosha(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    let saturn = facts.analysis(Planet::Saturn);
    if saturn.house != 7 {
        return None;
    }
    Some(
        YogaMatch::new(YogaGrade::Moderate, "Delay in marriage and a serious partner")
            .planets([Planet::Saturn])
            .houses([7])
            .describe(format!("Saturn in the 7th house in {}", saturn.sign))
            .remedy("Recite Shani mantra on Saturdays; donate black sesame"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::fixtures::{chart_from_longitudes, chart_from_signs};
    use crate::facts::EngineConfig;

    fn facts(chart: &Chart) -> ChartFacts {
        ChartFacts::derive(chart, &EngineConfig::default())
    }

    #[test]
    fn test_kuja_dosha_graded_and_cancelled() {
        // Mars in Libra (house 7); Moon and Venus in Aries: Severe, no cancellation
        let chart = chart_from_signs(0, [1, 0, 6, 1, 1, 0, 9, 3, 9]);
        let m = kuja_dosha(&chart, &facts(&chart)).unwrap();
        assert_eq!(m.grade, YogaGrade::VeryStrong);
        assert!(m.remedy.is_some());

        // Jupiter in Gemini aspects the 7th: cancelled
        let chart = chart_from_signs(0, [1, 0, 6, 1, 2, 0, 9, 3, 9]);
        assert!(kuja_dosha(&chart, &facts(&chart)).is_none());
    }

    #[test]
    fn test_kala_sarpa() {
        // Rahu 100, Ketu 280; every planet between 100 and 280
        let chart = chart_from_longitudes(
            0,
            [120.0, 150.0, 170.0, 200.0, 220.0, 240.0, 260.0, 100.0, 280.0],
        );
        let m = kala_sarpa(&chart, &facts(&chart)).unwrap();
        assert_eq!(m.planets, vec![Planet::Rahu, Planet::Ketu]);

        // Moon on the other side breaks it
        let chart = chart_from_longitudes(
            0,
            [120.0, 10.0, 170.0, 200.0, 220.0, 240.0, 260.0, 100.0, 280.0],
        );
        assert!(kala_sarpa(&chart, &facts(&chart)).is_none());
    }

    #[test]
    fn test_kala_sarpa_axis_points_are_symmetric() {
        // Sun exactly on Rahu, the rest between Rahu and Ketu
        let on_rahu = chart_from_longitudes(
            0,
            [100.0, 150.0, 170.0, 200.0, 220.0, 240.0, 260.0, 100.0, 280.0],
        );
        // Sun exactly on Ketu, same arrangement otherwise
        let on_ketu = chart_from_longitudes(
            0,
            [280.0, 150.0, 170.0, 200.0, 220.0, 240.0, 260.0, 100.0, 280.0],
        );
        assert!(kala_sarpa(&on_rahu, &facts(&on_rahu)).is_some());
        assert!(kala_sarpa(&on_ketu, &facts(&on_ketu)).is_some());

        // The same holds with the other planets on the far side
        let far_on_rahu = chart_from_longitudes(
            0,
            [100.0, 300.0, 320.0, 340.0, 10.0, 30.0, 50.0, 100.0, 280.0],
        );
        let far_on_ketu = chart_from_longitudes(
            0,
            [280.0, 300.0, 320.0, 340.0, 10.0, 30.0, 50.0, 100.0, 280.0],
        );
        assert!(kala_sarpa(&far_on_rahu, &facts(&far_on_rahu)).is_some());
        assert!(kala_sarpa(&far_on_ketu, &facts(&far_on_ketu)).is_some());
    }

    #[test]
    fn test_papakartari_on_ascendant() {
        // Aries ascendant: Rahu in Pisces (12), Ketu in Taurus (2)
        let chart = chart_from_signs(0, [4, 3, 5, 5, 8, 6, 8, 11, 1]);
        let m = papakartari(&chart, &facts(&chart)).unwrap();
        assert_eq!(m.grade, YogaGrade::Strong);
        assert!(m.houses.contains(&1));
        assert_eq!(m.planets, vec![Planet::Rahu, Planet::Ketu]);
    }

    #[test]
    fn test_guru_chandala() {
        // Jupiter and Rahu in Sagittarius
        let chart = chart_from_signs(0, [0, 1, 2, 3, 8, 5, 6, 8, 2]);
        let m = guru_chandala(&chart, &facts(&chart)).unwrap();
        assert_eq!(m.planets, vec![Planet::Jupiter, Planet::Rahu]);
        assert_eq!(m.grade, YogaGrade::Moderate);
    }

    #[test]
    fn test_grahana_both_luminaries() {
        // Sun with Rahu in Aries, Moon with Ketu in Libra
        let chart = chart_from_signs(0, [0, 6, 2, 3, 4, 5, 9, 0, 6]);
        let m = grahana(&chart, &facts(&chart)).unwrap();
        assert_eq!(m.grade, YogaGrade::Strong);
        assert_eq!(
            m.planets,
            vec![Planet::Sun, Planet::Moon, Planet::Rahu, Planet::Ketu]
        );
        assert_eq!(m.houses, vec![1, 7]);
    }

    #[test]
    fn test_shani_dosha_any_sign() {
        for asc in 0..12u8 {
            let saturn_sign = (asc + 6) % 12;
            let chart = chart_from_signs(asc, [0, 1, 2, 3, 4, 5, saturn_sign, 7, 1]);
            let m = shani_dosha(&chart, &facts(&chart)).unwrap();
            assert_eq!(m.grade, YogaGrade::Moderate);
            assert!(m.remedy.is_some_and(|r| !r.is_empty()));
        }
    }
}

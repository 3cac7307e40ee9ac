//! General benefic yogas.

use super::{planet_grade, YogaCategory, YogaGrade, YogaMatch, YogaRule};
use crate::chart::{house_distance, is_kendra, nth_house_from, Chart, House};
use crate::facts::ChartFacts;
use crate::tables::Planet;

pub(super) const RULES: &[YogaRule] = &[
    YogaRule {
        name: "Gajakesari",
        category: YogaCategory::Benefic,
        check: gajakesari,
    },
    YogaRule {
        name: "Ruchaka",
        category: YogaCategory::Benefic,
        check: ruchaka,
    },
    YogaRule {
        name: "Bhadra",
        category: YogaCategory::Benefic,
        check: bhadra,
    },
    YogaRule {
        name: "Hamsa",
        category: YogaCategory::Benefic,
        check: hamsa,
    },
    YogaRule {
        name: "Malavya",
        category: YogaCategory::Benefic,
        check: malavya,
    },
    YogaRule {
        name: "Sasa",
        category: YogaCategory::Benefic,
        check: sasa,
    },
    YogaRule {
        name: "Raja",
        category: YogaCategory::Benefic,
        check: raja,
    },
    YogaRule {
        name: "Budhaditya",
        category: YogaCategory::Benefic,
        check: budhaditya,
    },
    YogaRule {
        name: "Amala",
        category: YogaCategory::Benefic,
        check: amala,
    },
];

/// Jupiter in a kendra counted from the Moon.
fn gajakesari(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    let moon = facts.analysis(Planet::Moon).house;
    let jupiter = facts.analysis(Planet::Jupiter).house;
    if !is_kendra(house_distance(moon, jupiter)) {
        return None;
    }
    let mut grade = planet_grade(facts, Planet::Jupiter)?;
    if facts.is_combust(Planet::Jupiter) {
        grade = YogaGrade::Moderate;
    }
    let mut houses = vec![moon, jupiter];
    houses.sort_unstable();
    houses.dedup();
    Some(
        YogaMatch::new(grade, "Wisdom, reputation and lasting prosperity")
            .planets([Planet::Moon, Planet::Jupiter])
            .houses(houses)
            .describe(format!(
                "Jupiter in house {} is in a kendra from the Moon in house {}",
                jupiter, moon
            )),
    )
}

/// Pancha Mahapurusha: the planet dignified in a kendra from the ascendant.
fn mahapurusha(facts: &ChartFacts, planet: Planet, effect: &'static str) -> Option<YogaMatch> {
    let analysis = facts.analysis(planet);
    if !is_kendra(analysis.house) || !analysis.dignity.is_dignified() {
        return None;
    }
    let grade = planet_grade(facts, planet)?;
    Some(
        YogaMatch::new(grade, effect)
            .planets([planet])
            .houses([analysis.house])
            .describe(format!(
                "{} {} in kendra house {}",
                planet,
                analysis.dignity.label().to_lowercase(),
                analysis.house
            )),
    )
}

fn ruchaka(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    mahapurusha(facts, Planet::Mars, "Courage, drive and leadership")
}

fn bhadra(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    mahapurusha(facts, Planet::Mercury, "Intellect and eloquence")
}

fn hamsa(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    mahapurusha(facts, Planet::Jupiter, "Righteousness and good counsel")
}

fn malavya(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    mahapurusha(facts, Planet::Venus, "Comfort, refinement and harmonious relationships")
}

fn sasa(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    mahapurusha(facts, Planet::Saturn, "Discipline, endurance and authority")
}

const RAJA_KENDRAS: [House; 3] = [4, 7, 10];
const RAJA_TRIKONAS: [House; 2] = [5, 9];

/// A kendra lord conjoined with a trikona lord, or a single planet ruling
/// both (yogakaraka). The grade is that of the weakest participant.
fn raja(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    let mut planets = Vec::new();
    let mut houses = Vec::new();
    let mut grade: Option<YogaGrade> = None;
    let mut add = |ps: &[Planet], hs: &[House], g: YogaGrade| {
        planets.extend_from_slice(ps);
        houses.extend_from_slice(hs);
        grade = Some(grade.map_or(g, |cur: YogaGrade| cur.min(g)));
    };

    for a in &facts.analysis {
        let kendra = a.lordships.iter().find(|h| RAJA_KENDRAS.contains(*h));
        let trikona = a.lordships.iter().find(|h| RAJA_TRIKONAS.contains(*h));
        if let (Some(k), Some(t)) = (kendra, trikona) {
            if let Some(g) = planet_grade(facts, a.planet) {
                add(&[a.planet], &[*k, *t], g);
            }
        }
    }

    for k in RAJA_KENDRAS {
        for t in RAJA_TRIKONAS {
            let (Some(kl), Some(tl)) = (facts.lord_of(k), facts.lord_of(t)) else {
                continue;
            };
            if kl == tl || !facts.conjoined(kl, tl) {
                continue;
            }
            if let (Some(gk), Some(gt)) = (planet_grade(facts, kl), planet_grade(facts, tl)) {
                add(&[kl, tl], &[k, t], gk.min(gt));
            }
        }
    }

    let grade = grade?;
    planets.sort_unstable();
    planets.dedup();
    houses.sort_unstable();
    houses.dedup();
    let names: Vec<String> = planets.iter().map(|p| p.to_string()).collect();
    Some(
        YogaMatch::new(grade, "Status, power and advancement")
            .describe(format!("Kendra and trikona lordship joined by {}", names.join(", ")))
            .planets(planets)
            .houses(houses),
    )
}

/// Sun and Mercury together; a combust Mercury caps the grade at Moderate.
fn budhaditya(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    if !facts.conjoined(Planet::Sun, Planet::Mercury) {
        return None;
    }
    let mut grade = planet_grade(facts, Planet::Mercury)?;
    if facts.is_combust(Planet::Mercury) {
        grade = YogaGrade::Moderate;
    }
    let house = facts.analysis(Planet::Mercury).house;
    Some(
        YogaMatch::new(grade, "Sharp intelligence and communication skill")
            .planets([Planet::Sun, Planet::Mercury])
            .houses([house])
            .describe(format!("Sun and Mercury together in house {house}")),
    )
}

/// Only functional benefics in the 10th from the ascendant or the Moon.
fn amala(chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    let moon = facts.analysis(Planet::Moon).house;
    let mut tenths = vec![10, nth_house_from(moon, 10)];
    tenths.dedup();

    let mut planets = Vec::new();
    let mut houses = Vec::new();
    let mut grade: Option<YogaGrade> = None;
    for house in tenths {
        let occupants = chart.occupants(house);
        if occupants.is_empty() || !occupants.iter().all(|p| facts.is_functional_benefic(*p)) {
            continue;
        }
        let best = occupants.iter().filter_map(|p| planet_grade(facts, *p)).max();
        if let Some(g) = best {
            grade = Some(grade.map_or(g, |cur| cur.max(g)));
            planets.extend(occupants);
            houses.push(house);
        }
    }

    let grade = grade?;
    planets.sort_unstable();
    planets.dedup();
    houses.sort_unstable();
    Some(
        YogaMatch::new(grade, "Lasting good reputation and ethical conduct")
            .describe(format!(
                "Only benefics occupy the 10th (house {})",
                houses.iter().map(|h| h.to_string()).collect::<Vec<_>>().join(", ")
            ))
            .planets(planets)
            .houses(houses),
    )
}

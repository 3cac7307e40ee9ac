//! Domain signature yogas: a key significator or house lord well placed.

use super::{planet_grade, YogaCategory, YogaMatch, YogaRule};
use crate::chart::{is_kendra, is_trikona, Chart, House};
use crate::facts::ChartFacts;
use crate::tables::Planet;

pub(super) const RULES: &[YogaRule] = &[
    YogaRule {
        name: "Kalatra Karaka",
        category: YogaCategory::Domain("kalatra"),
        check: kalatra_karaka,
    },
    YogaRule {
        name: "Kalatra Lord",
        category: YogaCategory::Domain("kalatra"),
        check: kalatra_lord,
    },
    YogaRule {
        name: "Karma Surya",
        category: YogaCategory::Domain("karma"),
        check: karma_surya,
    },
    YogaRule {
        name: "Dhana Guru",
        category: YogaCategory::Domain("dhana"),
        check: dhana_guru,
    },
    YogaRule {
        name: "Lagna Bala",
        category: YogaCategory::Domain("arogya"),
        check: lagna_bala,
    },
];

fn significator_in(
    facts: &ChartFacts,
    planet: Planet,
    houses: &[House],
    effect: &'static str,
) -> Option<YogaMatch> {
    let analysis = facts.analysis(planet);
    if !houses.contains(&analysis.house) {
        return None;
    }
    let grade = planet_grade(facts, planet)?;
    Some(
        YogaMatch::new(grade, effect)
            .planets([planet])
            .houses([analysis.house])
            .describe(format!(
                "{} in house {} ({})",
                planet,
                analysis.house,
                analysis.dignity.label()
            )),
    )
}

fn lord_well_placed(
    chart: &Chart,
    facts: &ChartFacts,
    house: House,
    effect: &'static str,
) -> Option<YogaMatch> {
    let lord = chart.house_lord(house).ok()?;
    let analysis = facts.analysis(lord);
    if !(is_kendra(analysis.house) || is_trikona(analysis.house)) {
        return None;
    }
    let grade = planet_grade(facts, lord)?;
    let mut houses = vec![house, analysis.house];
    houses.sort_unstable();
    houses.dedup();
    Some(
        YogaMatch::new(grade, effect)
            .planets([lord])
            .houses(houses)
            .describe(format!(
                "Lord of house {} ({}) placed in house {}",
                house, lord, analysis.house
            )),
    )
}

fn kalatra_karaka(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    significator_in(facts, Planet::Venus, &[7], "Harmony and affection in partnership")
}

fn kalatra_lord(chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    lord_well_placed(chart, facts, 7, "Supportive and stable spouse")
}

fn karma_surya(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    significator_in(facts, Planet::Sun, &[10], "Authority and recognition in career")
}

fn dhana_guru(_chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    significator_in(facts, Planet::Jupiter, &[2, 11], "Steady accumulation of wealth")
}

fn lagna_bala(chart: &Chart, facts: &ChartFacts) -> Option<YogaMatch> {
    lord_well_placed(chart, facts, 1, "Robust constitution and vitality")
}

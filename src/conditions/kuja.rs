use serde::Serialize;

use crate::aspects::{conjoined_planets, is_aspected_by};
use crate::chart::{house_distance, Chart, House};
use crate::tables::{exaltation_sign, own_signs, Planet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum KujaSeverity {
    Mild,
    Moderate,
    Severe,
}

impl KujaSeverity {
    fn from_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(Self::Mild),
            2 => Some(Self::Moderate),
            _ => Some(Self::Severe),
        }
    }
}

/// Point from which Mars' house is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KujaReference {
    Ascendant,
    Moon,
    Venus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KujaCancellation {
    OwnSign,
    Exalted,
    JupiterConjunction,
    JupiterAspect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KujaFinding {
    pub severity: KujaSeverity,
    pub triggered_from: Vec<KujaReference>,
    pub cancellations: Vec<KujaCancellation>,
}

/// Mars' house counted from each reference point.
pub fn mars_houses(chart: &Chart) -> [(KujaReference, House); 3] {
    let mars = chart.house_of_planet(Planet::Mars);
    [
        (KujaReference::Ascendant, mars),
        (
            KujaReference::Moon,
            house_distance(chart.house_of_planet(Planet::Moon), mars),
        ),
        (
            KujaReference::Venus,
            house_distance(chart.house_of_planet(Planet::Venus), mars),
        ),
    ]
}

pub fn detect_kuja(chart: &Chart, dosha_houses: &[House]) -> Option<KujaFinding> {
    let triggered_from: Vec<KujaReference> = mars_houses(chart)
        .into_iter()
        .filter(|(_, h)| dosha_houses.contains(h))
        .map(|(r, _)| r)
        .collect();
    let severity = KujaSeverity::from_count(triggered_from.len())?;

    let sign = chart.placement(Planet::Mars).sign;
    let mut cancellations = Vec::new();
    if own_signs(Planet::Mars).contains(&sign) {
        cancellations.push(KujaCancellation::OwnSign);
    }
    if exaltation_sign(Planet::Mars) == sign {
        cancellations.push(KujaCancellation::Exalted);
    }
    if conjoined_planets(Planet::Mars, chart).contains(&Planet::Jupiter) {
        cancellations.push(KujaCancellation::JupiterConjunction);
    }
    if is_aspected_by(Planet::Mars, Planet::Jupiter, chart) {
        cancellations.push(KujaCancellation::JupiterAspect);
    }

    Some(KujaFinding {
        severity,
        triggered_from,
        cancellations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::fixtures::chart_from_signs;

    const DEFAULT_HOUSES: [House; 6] = [1, 2, 4, 7, 8, 12];

    #[test]
    fn test_no_dosha_when_mars_clear() {
        // Mars in Gemini: house 3; 11th from Moon in Leo; 3rd from Venus in Aries
        let chart = chart_from_signs(0, [0, 4, 2, 0, 5, 0, 9, 5, 11]);
        assert_eq!(detect_kuja(&chart, &DEFAULT_HOUSES), None);
    }

    #[test]
    fn test_severity_counts_references() {
        // Mars in Libra (house 7); Moon and Venus in Aries: 7th from both.
        // Jupiter in Taurus does not reach the 7th.
        let chart = chart_from_signs(0, [1, 0, 6, 1, 1, 0, 9, 3, 9]);
        let finding = detect_kuja(&chart, &DEFAULT_HOUSES).unwrap();
        assert_eq!(finding.severity, KujaSeverity::Severe);
        assert_eq!(
            finding.triggered_from,
            vec![KujaReference::Ascendant, KujaReference::Moon, KujaReference::Venus]
        );
        assert!(finding.cancellations.is_empty());
    }

    #[test]
    fn test_mild_from_ascendant_only() {
        // Mars in Aries (house 1, own sign); Moon in Gemini: 11th; Venus in Aquarius: 3rd
        let chart = chart_from_signs(0, [1, 2, 0, 1, 3, 10, 9, 4, 10]);
        let finding = detect_kuja(&chart, &DEFAULT_HOUSES).unwrap();
        assert_eq!(finding.severity, KujaSeverity::Mild);
        assert_eq!(finding.cancellations, vec![KujaCancellation::OwnSign]);
    }

    #[test]
    fn test_jupiter_aspect_cancels() {
        // Mars in house 7 (Libra), Jupiter in house 3 casts its 5th aspect on 7
        let chart = chart_from_signs(0, [1, 2, 6, 1, 2, 2, 9, 3, 9]);
        let finding = detect_kuja(&chart, &DEFAULT_HOUSES).unwrap();
        assert!(finding.cancellations.contains(&KujaCancellation::JupiterAspect));
        assert!(!finding.cancellations.contains(&KujaCancellation::JupiterConjunction));
    }

    #[test]
    fn test_exalted_mars_cancels() {
        // Cancer ascendant: Mars in Capricorn is house 7 and exalted.
        // Jupiter in Aries aspects Leo, Libra and Sagittarius only.
        let chart = chart_from_signs(3, [0, 0, 9, 0, 0, 0, 6, 1, 7]);
        let finding = detect_kuja(&chart, &DEFAULT_HOUSES).unwrap();
        assert_eq!(finding.severity, KujaSeverity::Mild);
        assert_eq!(finding.triggered_from, vec![KujaReference::Ascendant]);
        assert_eq!(finding.cancellations, vec![KujaCancellation::Exalted]);
    }

    #[test]
    fn test_jupiter_conjunction_cancels() {
        // Mars and Jupiter together in Libra, house 7 from Aries
        let chart = chart_from_signs(0, [1, 2, 6, 1, 6, 2, 9, 3, 9]);
        let finding = detect_kuja(&chart, &DEFAULT_HOUSES).unwrap();
        assert_eq!(
            finding.cancellations,
            vec![KujaCancellation::JupiterConjunction]
        );
    }
}

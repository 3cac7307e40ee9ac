use crate::aspects::conjoined_planets;
use crate::chart::Chart;
use crate::tables::Planet;

/// Natural malefics sharing a sign with `planet`. The Sun does not count.
pub fn conjoining_malefics(planet: Planet, chart: &Chart) -> Vec<Planet> {
    conjoined_planets(planet, chart)
        .into_iter()
        .filter(|p| p.is_afflicting_malefic())
        .collect()
}

/// Tiers to drop for a given malefic count.
pub fn downgrade_tiers(count: usize, one_tier_at: usize, two_tiers_at: usize) -> u8 {
    if count >= two_tiers_at {
        2
    } else if count >= one_tier_at {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::fixtures::chart_from_signs;

    #[test]
    fn test_counts_only_afflicting_malefics() {
        // Venus in Leo with Sun, Mars and Saturn
        let chart = chart_from_signs(0, [4, 0, 4, 1, 2, 4, 4, 3, 9]);
        assert_eq!(
            conjoining_malefics(Planet::Venus, &chart),
            vec![Planet::Mars, Planet::Saturn]
        );
    }

    #[test]
    fn test_downgrade_thresholds() {
        assert_eq!(downgrade_tiers(1, 2, 3), 0);
        assert_eq!(downgrade_tiers(2, 2, 3), 1);
        assert_eq!(downgrade_tiers(4, 2, 3), 2);
    }
}

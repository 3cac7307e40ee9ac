use super::config::{ComponentSource, DomainConfig};
use crate::chart::check_house;

/// Validate a domain configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_domain_config(config: &DomainConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let name = &config.name;

    if !(config.score_ceiling.is_finite() && config.score_ceiling > 0.0) {
        errors.push(format!(
            "{name}.score_ceiling: must be positive and finite, got {}",
            config.score_ceiling
        ));
    }

    if config.components.is_empty() {
        errors.push(format!("{name}.components: at least one component is required"));
    }

    for (i, component) in config.components.iter().enumerate() {
        if !is_non_negative(component.weight) {
            errors.push(format!(
                "{name}.components[{i}].weight: must be non-negative and finite, got {}",
                component.weight
            ));
        }
        match &component.source {
            ComponentSource::HouseStrength { houses } => {
                if houses.is_empty() {
                    errors.push(format!("{name}.components[{i}].source: lists no houses"));
                }
                for house in houses {
                    if let Err(e) = check_house(*house) {
                        errors.push(format!("{name}.components[{i}].source: {e}"));
                    }
                }
            }
            ComponentSource::HouseLordStrength { house } => {
                if let Err(e) = check_house(*house) {
                    errors.push(format!("{name}.components[{i}].source: {e}"));
                }
            }
            ComponentSource::YogaNet if config.yoga.is_none() => {
                errors.push(format!(
                    "{name}.components[{i}].source: yoga_net requires a yoga mapping"
                ));
            }
            _ => {}
        }
    }

    if let Some(ref yoga) = config.yoga {
        if !(yoga.net_range.is_finite() && yoga.net_range > 0.0) {
            errors.push(format!("{name}.yoga.net_range: must be positive and finite"));
        }
        for (field, value) in [
            ("very_strong", yoga.very_strong),
            ("strong", yoga.strong),
            ("moderate", yoga.moderate),
        ] {
            if !is_non_negative(value) {
                errors.push(format!("{name}.yoga.{field}: must be non-negative and finite"));
            }
        }
    }

    let penalty = &config.penalty;
    if let Some(ref kuja) = penalty.kuja {
        for (field, value) in [
            ("mild", kuja.mild),
            ("moderate", kuja.moderate),
            ("severe", kuja.severe),
            ("cancelled_factor", kuja.cancelled_factor),
        ] {
            if !is_non_negative(value) {
                errors.push(format!("{name}.penalty.kuja.{field}: must be non-negative and finite"));
            }
        }
    }
    for (field, value) in [
        ("combust", penalty.combust),
        ("afflicted_per_tier", penalty.afflicted_per_tier),
        ("gandanta", penalty.gandanta),
    ] {
        if !is_non_negative(value) {
            errors.push(format!("{name}.penalty.{field}: must be non-negative and finite"));
        }
    }

    let bands = &config.grade_bands;
    for (field, value) in [
        ("excellent", bands.excellent),
        ("very_good", bands.very_good),
        ("good", bands.good),
        ("average", bands.average),
    ] {
        if !value.is_finite() {
            errors.push(format!("{name}.grade_bands.{field}: must be finite"));
        }
    }
    if !(bands.excellent >= bands.very_good
        && bands.very_good >= bands.good
        && bands.good >= bands.average)
    {
        errors.push(format!(
            "{name}.grade_bands: must descend excellent >= very_good >= good >= average"
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// False for negatives, NaN and infinities.
fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

use std::io::IsTerminal;

use owo_colors::OwoColorize;

use crate::conditions::SpecialCondition;
use crate::placement::{FunctionalStatus, PlanetAnalysis};
use crate::scoring::{CompositeScore, DomainConfig, ScoreGrade};
use crate::tables::{nakshatra_name, Planet};
use crate::yoga::{YogaCategory, YogaRecord};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score against its ceiling, trimming a trailing ".0"
/// (e.g. "7.3/10", "10/10")
pub fn format_score(score: f64, ceiling: f64) -> String {
    let trim = |v: f64| {
        let s = format!("{:.1}", v);
        s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
    };
    format!("{}/{}", trim(score), trim(ceiling))
}

fn join_planets(planets: &[Planet]) -> String {
    planets.iter().map(|p| p.to_string()).collect::<Vec<_>>().join(", ")
}

fn colored_grade(grade: ScoreGrade, use_colors: bool) -> String {
    let label = grade.label();
    if !use_colors {
        return label.to_string();
    }
    match grade {
        ScoreGrade::Excellent | ScoreGrade::VeryGood => label.green().bold().to_string(),
        ScoreGrade::Good => label.green().to_string(),
        ScoreGrade::Average => label.yellow().to_string(),
        ScoreGrade::BelowAverage => label.red().to_string(),
    }
}

/// Multi-line report: headline, one line per component, itemized penalties
pub fn format_score_report(result: &CompositeScore, use_colors: bool) -> String {
    let mut lines = Vec::new();
    let score = format_score(result.clamped_score, result.ceiling);
    let grade = colored_grade(result.grade, use_colors);
    if use_colors {
        lines.push(format!(
            "{}: {} ({:.0}%, {})",
            result.domain.bold(),
            score.bold(),
            result.percentage,
            grade
        ));
    } else {
        lines.push(format!(
            "{}: {} ({:.0}%, {})",
            result.domain, score, result.percentage, grade
        ));
    }

    for c in &result.components {
        let line = format!(
            "  {:<22} {:>6.2} / {:<4}  raw {:.2}/{}  {}",
            c.label, c.weighted_value, c.weight_cap, c.raw_value, c.raw_max, c.detail
        );
        lines.push(if use_colors { line.dimmed().to_string() } else { line });
    }

    for p in &result.penalties {
        let line = format!("  {:<22} {:>6.2}", p.label, -p.amount);
        lines.push(if use_colors { line.red().to_string() } else { line });
    }

    if result.raw_total != result.clamped_score {
        lines.push(format!(
            "  (raw total {:.2} clamped to [0, {}])",
            result.raw_total, result.ceiling
        ));
    }

    lines.join("\n")
}

/// Format scores as one line per domain
pub fn format_score_table(results: &[CompositeScore], use_colors: bool) -> String {
    if results.is_empty() {
        return "No domains configured.".to_string();
    }

    results
        .iter()
        .map(|r| {
            let score = format!("{:>7}", format_score(r.clamped_score, r.ceiling));
            let grade = colored_grade(r.grade, use_colors);
            if use_colors {
                format!("{:<12} {}  {:>3.0}%  {}", r.domain, score.bold(), r.percentage, grade)
            } else {
                format!("{:<12} {}  {:>3.0}%  {}", r.domain, score, r.percentage, grade)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format scores as tab-separated values for scripting
/// Columns: domain, score, ceiling, percentage, grade (no headers, no colors)
pub fn format_tsv(results: &[CompositeScore]) -> String {
    results
        .iter()
        .map(|r| {
            format!(
                "{}\t{:.2}\t{}\t{:.1}\t{}",
                r.domain,
                r.clamped_score,
                r.ceiling,
                r.percentage,
                r.grade.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_yogas(yogas: &[YogaRecord], use_colors: bool) -> String {
    if yogas.is_empty() {
        return "No yogas found.".to_string();
    }

    yogas
        .iter()
        .map(|y| {
            let header = format!("{} [{}, {}]", y.name, y.category.tag(), y.grade.label());
            let header = match (use_colors, y.category) {
                (false, _) => header,
                (true, YogaCategory::Malefic) => header.red().bold().to_string(),
                (true, _) => header.green().bold().to_string(),
            };
            let mut block = format!("{}\n  {}\n  Effect: {}", header, y.description, y.effect);
            if !y.planets.is_empty() {
                block.push_str(&format!("\n  Planets: {}", join_planets(&y.planets)));
            }
            if let Some(remedy) = y.remedy {
                block.push_str(&format!("\n  Remedy: {}", remedy));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One-line summary of a condition's particulars
pub fn describe_condition(condition: &SpecialCondition) -> String {
    match condition {
        SpecialCondition::Combustion {
            planet,
            distance_from_sun,
            orb,
        } => format!("{planet} {distance_from_sun:.2}° from the Sun (orb {orb})"),
        SpecialCondition::MaleficAffliction {
            planet,
            conjoining_malefics,
            downgrade_tiers,
            effective_tier,
        } => format!(
            "{planet} with {}: down {downgrade_tiers} tier(s) to {effective_tier:?}",
            join_planets(conjoining_malefics)
        ),
        SpecialCondition::KujaDosha {
            severity,
            triggered_from,
            cancellation_present,
            cancellations,
        } => {
            let refs: Vec<String> = triggered_from.iter().map(|r| format!("{r:?}")).collect();
            let mut text = format!("{severity:?}, from {}", refs.join(", "));
            if *cancellation_present {
                let reasons: Vec<String> = cancellations.iter().map(|c| format!("{c:?}")).collect();
                text.push_str(&format!("; cancelled ({})", reasons.join(", ")));
            }
            text
        }
        SpecialCondition::Gandanta {
            planet,
            zone,
            distance,
            intensity,
        } => format!(
            "{planet} {distance:.2}° from the {} junction (intensity {intensity:.2})",
            zone.label()
        ),
        SpecialCondition::LordshipRole { planet, effect, .. } => format!("{planet} ({effect})"),
    }
}

pub fn format_conditions(conditions: &[SpecialCondition], use_colors: bool) -> String {
    if conditions.is_empty() {
        return "No special conditions.".to_string();
    }

    conditions
        .iter()
        .map(|c| {
            let label = format!("{:<20}", c.label());
            if use_colors {
                format!("{} {}", label.yellow(), describe_condition(c))
            } else {
                format!("{} {}", label, describe_condition(c))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Placement table: planet, sign, house, dignity, status, strength, nakshatra
pub fn format_placements(analysis: &[PlanetAnalysis], use_colors: bool) -> String {
    analysis
        .iter()
        .map(|a| {
            let status = format!("{:?}", a.status);
            let status = match (use_colors, a.status) {
                (false, _) => format!("{:<8}", status),
                (true, FunctionalStatus::Benefic) => format!("{:<8}", status).green().to_string(),
                (true, FunctionalStatus::Malefic) => format!("{:<8}", status).red().to_string(),
                (true, FunctionalStatus::Neutral) => format!("{:<8}", status),
            };
            format!(
                "{:<8} {:<12} {:>2}  {:<14} {} {:>4.1} {:<10} {}",
                a.planet.to_string(),
                a.sign.to_string(),
                a.house,
                a.dignity.label(),
                status,
                a.strength,
                format!("{:?}", a.tier),
                nakshatra_name(a.nakshatra)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Domain names with their component labels and weights
pub fn format_domains(domains: &[DomainConfig]) -> String {
    domains
        .iter()
        .map(|d| {
            let components: Vec<String> = d
                .components
                .iter()
                .map(|c| format!("{} {}", c.label, c.weight))
                .collect();
            format!("{:<12} ceiling {}  [{}]", d.name, d.score_ceiling, components.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::fixtures::chart_from_signs;
    use crate::facts::{ChartFacts, EngineConfig};
    use crate::scoring::score;
    use crate::yoga::evaluate_yogas;

    fn sample_score() -> CompositeScore {
        let chart = chart_from_signs(0, [4, 3, 9, 5, 3, 6, 6, 2, 8]);
        score(&chart, &DomainConfig::marriage()).unwrap()
    }

    #[test]
    fn test_format_score_trims() {
        assert_eq!(format_score(7.26, 10.0), "7.3/10");
        assert_eq!(format_score(10.0, 10.0), "10/10");
        assert_eq!(format_score(0.0, 20.0), "0/20");
    }

    #[test]
    fn test_format_score_report_lists_components() {
        let result = sample_score();
        let report = format_score_report(&result, false);
        let lines: Vec<&str> = report.lines().collect();
        assert!(lines[0].starts_with("marriage: "));
        assert!(lines[0].contains(result.grade.label()));
        for c in &result.components {
            assert!(report.contains(&c.label));
        }
        assert!(lines.len() >= 1 + result.components.len() + result.penalties.len());
    }

    #[test]
    fn test_format_score_table_and_tsv() {
        let result = sample_score();
        assert_eq!(format_score_table(&[], false), "No domains configured.");
        let table = format_score_table(std::slice::from_ref(&result), false);
        assert!(table.starts_with("marriage"));

        let tsv = format_tsv(std::slice::from_ref(&result));
        let cols: Vec<&str> = tsv.split('\t').collect();
        assert_eq!(cols.len(), 5);
        assert_eq!(cols[0], "marriage");
        assert_eq!(cols[4], result.grade.label());
    }

    #[test]
    fn test_format_yogas_includes_remedy() {
        // Saturn in Libra, 7th from Aries
        let chart = chart_from_signs(0, [0, 1, 2, 3, 4, 5, 6, 7, 1]);
        let output = format_yogas(&evaluate_yogas(&chart), false);
        assert!(output.contains("Shani Dosha [malefic, Moderate]"));
        assert!(output.contains("Remedy: "));
        assert_eq!(format_yogas(&[], false), "No yogas found.");
    }

    #[test]
    fn test_format_conditions() {
        // Mercury with the Sun in Aries
        let chart = chart_from_signs(0, [0, 3, 6, 0, 4, 5, 9, 7, 1]);
        let facts = ChartFacts::derive(&chart, &EngineConfig::default());
        let output = format_conditions(&facts.conditions, false);
        assert!(output.contains("Combustion"));
        assert!(output.contains("Mercury 0.00° from the Sun (orb 14)"));
        assert_eq!(format_conditions(&[], false), "No special conditions.");
    }

    #[test]
    fn test_format_placements_one_line_per_planet() {
        let chart = chart_from_signs(0, [0, 3, 6, 0, 4, 5, 9, 7, 1]);
        let facts = ChartFacts::derive(&chart, &EngineConfig::default());
        let output = format_placements(&facts.analysis, false);
        assert_eq!(output.lines().count(), 9);
        assert!(output.lines().next().is_some_and(|l| l.starts_with("Sun")));
    }

    #[test]
    fn test_format_domains() {
        let output = format_domains(&DomainConfig::presets());
        assert_eq!(output.lines().count(), 4);
        assert!(output.contains("7th house 3"));
    }
}

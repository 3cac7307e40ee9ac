//! Error types for chart construction, table lookups and scoring.

use thiserror::Error;

use crate::tables::Planet;

/// Malformed or incomplete chart input. No partial chart is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidChartError {
    #[error("ascendant sign {0} is outside 0-11")]
    AscendantOutOfRange(u8),

    #[error("longitude {longitude} for {planet} is outside [0, 360)")]
    LongitudeOutOfRange { planet: Planet, longitude: f64 },

    #[error("{0} appears more than once")]
    DuplicatePlanet(Planet),

    #[error("{0} is missing; all nine planets are required")]
    MissingPlanet(Planet),
}

/// A lookup table was queried with a key outside its closed domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown planet '{0}'")]
    UnknownPlanet(String),

    #[error("unknown house {0}; houses run 1-12")]
    UnknownHouse(u8),

    #[error("unknown sign index {0}; signs run 0-11")]
    UnknownSign(u8),
}

/// Scoring failures. A component is never silently dropped or defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("domain config incomplete: component '{component}' {reason}")]
    IncompleteDomainConfig { component: String, reason: String },
}

impl ScoreError {
    pub fn incomplete(component: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IncompleteDomainConfig {
            component: component.into(),
            reason: reason.into(),
        }
    }
}

/// Umbrella error for callers that drive the whole pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidChart(#[from] InvalidChartError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_chart_messages() {
        let err = InvalidChartError::LongitudeOutOfRange {
            planet: Planet::Mars,
            longitude: 361.0,
        };
        assert_eq!(err.to_string(), "longitude 361 for Mars is outside [0, 360)");
        assert_eq!(
            InvalidChartError::MissingPlanet(Planet::Ketu).to_string(),
            "Ketu is missing; all nine planets are required"
        );
    }

    #[test]
    fn test_incomplete_names_component() {
        let err = ScoreError::incomplete("Yoga net", "has no yoga mapping");
        assert!(err.to_string().contains("'Yoga net'"));
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: Error = LookupError::UnknownHouse(13).into();
        assert!(matches!(err, Error::Lookup(LookupError::UnknownHouse(13))));
    }
}

//! Deterministic evaluation of a sidereal birth chart: planetary dignity,
//! aspects, special conditions, yoga detection and weighted domain scores.
//!
//! Everything below the CLI is pure: the same chart and configuration always
//! produce the same output.

pub mod aspects;
pub mod chart;
pub mod conditions;
pub mod config;
pub mod error;
pub mod facts;
pub mod output;
pub mod placement;
pub mod scoring;
pub mod tables;
pub mod util;
pub mod yoga;

pub use chart::{build_chart, Chart, ChartInput, House, RawPlacement};
pub use error::{Error, InvalidChartError, LookupError, ScoreError};
pub use facts::{ChartFacts, EngineConfig};
pub use scoring::{score, score_with, CompositeScore, DomainConfig};
pub use tables::{Planet, Sign};
pub use yoga::{evaluate_yogas, evaluate_yogas_with, YogaRecord};

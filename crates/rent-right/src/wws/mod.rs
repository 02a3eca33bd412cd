//! Simplified WWS (woningwaarderingsstelsel) point scoring.
//!
//! Four additive categories turn raw property attributes into a point total, a
//! per-category breakdown, and the maximum legal rent derived from those points.
//! Everything here is pure: no I/O, no shared state, safe to call from any task.

mod input;
mod rent;
mod rules;

pub use input::{InputError, ScoringInput, MAX_SURFACE_AREA_M2, MAX_WOZ_VALUE};
pub use rent::{compute_max_legal_rent, RentAssessment, LIBERALIZATION_THRESHOLD};
pub use rules::{compute_breakdown, energy_label_points, ENERGY_LABEL_POINTS};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// One line of the breakdown: a category description and its contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    #[serde(rename = "item", alias = "label")]
    pub label: String,
    pub points: i64,
}

impl BreakdownEntry {
    pub fn new(label: impl Into<String>, points: i64) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// Outcome of scoring one listing. `total_points` always equals the breakdown sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    pub total_points: i64,
    pub max_legal_rent: f64,
    pub breakdown: Vec<BreakdownEntry>,
}

impl ScoringResult {
    /// Scores an already validated input.
    pub fn from_input(input: &ScoringInput) -> Self {
        let (total_points, breakdown) = compute_breakdown(input);
        let max_legal_rent = compute_max_legal_rent(total_points);

        Self {
            total_points,
            max_legal_rent,
            breakdown,
        }
    }

    /// Placeholder returned when the attributes could not be validated.
    pub fn invalid(error: &InputError) -> Self {
        Self {
            total_points: 0,
            max_legal_rent: 0.0,
            breakdown: vec![BreakdownEntry::new(
                format!("Error in input data: {error}"),
                0,
            )],
        }
    }

    pub fn assessment(&self, advertised_rent: f64) -> RentAssessment {
        RentAssessment::assess(self.total_points, self.max_legal_rent, advertised_rent)
    }
}

/// Validates and scores a raw attribute bag, keeping the validation error.
pub fn try_score(raw: &Map<String, Value>) -> Result<ScoringResult, InputError> {
    let input = ScoringInput::from_attributes(raw)?;
    let result = ScoringResult::from_input(&input);
    debug!(
        total_points = result.total_points,
        max_legal_rent = result.max_legal_rent,
        "scored listing attributes"
    );
    Ok(result)
}

/// Validates and scores a raw attribute bag.
///
/// Never fails: invalid attributes produce a zero-point result whose single
/// breakdown entry describes the problem. Use [`try_score`] to keep the error.
pub fn score_listing(raw: &Map<String, Value>) -> ScoringResult {
    try_score(raw).unwrap_or_else(|error| {
        warn!(%error, "rejected WWS input attributes");
        ScoringResult::invalid(&error)
    })
}

use serde::{Deserialize, Serialize};

const RENT_PER_POINT: f64 = 7.50;
const RENT_BASE: f64 = 50.00;

/// Point total from which a unit is likely outside the regulated segment.
pub const LIBERALIZATION_THRESHOLD: i64 = 136;

/// Maximum monthly rent for a point total, rounded to cents.
pub fn compute_max_legal_rent(points: i64) -> f64 {
    if points <= 0 {
        return 0.0;
    }
    round_cents(points as f64 * RENT_PER_POINT + RENT_BASE)
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// How an advertised rent compares with the computed ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentAssessment {
    Liberalized,
    Overpriced,
    FairPrice,
}

impl RentAssessment {
    pub fn assess(points: i64, max_legal_rent: f64, advertised_rent: f64) -> Self {
        if points >= LIBERALIZATION_THRESHOLD {
            RentAssessment::Liberalized
        } else if advertised_rent > max_legal_rent {
            RentAssessment::Overpriced
        } else {
            RentAssessment::FairPrice
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RentAssessment::Liberalized => "Likely liberalized",
            RentAssessment::Overpriced => "Overpriced",
            RentAssessment::FairPrice => "Fair Price",
        }
    }
}

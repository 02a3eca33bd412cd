use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::wws::{BreakdownEntry, RentAssessment, ScoringInput, ScoringResult};

/// Identifier wrapper for catalogue listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Feature shown on a listing card, e.g. a balcony or dishwasher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub name: String,
    pub icon: String,
}

/// Listing as exposed by the API, with its WWS assessment attached when available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub advertised_rent: f64,
    pub size: f64,
    pub rooms: i64,
    pub description: String,
    #[serde(default)]
    pub energy_label: Option<String>,
    #[serde(default)]
    pub woz_value: Option<f64>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub wws_points: Option<i64>,
    #[serde(default)]
    pub max_legal_rent: Option<f64>,
    #[serde(default)]
    pub wws_breakdown: Vec<BreakdownEntry>,
    #[serde(default)]
    pub rent_assessment: Option<RentAssessment>,
}

impl Listing {
    pub fn is_scored(&self) -> bool {
        self.wws_points.is_some()
    }

    pub(crate) fn apply_scoring(&mut self, input: &ScoringInput, result: ScoringResult) {
        self.energy_label = input.energy_label().map(str::to_string);
        self.woz_value = input.woz_value();
        self.rent_assessment = Some(result.assessment(self.advertised_rent));
        self.wws_points = Some(result.total_points);
        self.max_legal_rent = Some(result.max_legal_rent);
        self.wws_breakdown = result.breakdown;
    }
}

/// Raw listing record as it appears in the seed file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SeedListing {
    pub(crate) id: u32,
    pub(crate) title: String,
    pub(crate) location: String,
    #[serde(default)]
    pub(crate) images: Vec<String>,
    pub(crate) advertised_rent: f64,
    pub(crate) size: f64,
    pub(crate) rooms: i64,
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) amenities: Vec<Amenity>,
    #[serde(default)]
    pub(crate) wws_input_data: Map<String, Value>,
}

impl SeedListing {
    /// Listing without any WWS fields; scoring is applied separately.
    pub(crate) fn into_listing(self) -> (Listing, Map<String, Value>) {
        let listing = Listing {
            id: ListingId(self.id),
            title: self.title,
            location: self.location,
            images: self.images,
            advertised_rent: self.advertised_rent,
            size: self.size,
            rooms: self.rooms,
            description: self.description,
            energy_label: None,
            woz_value: None,
            amenities: self.amenities,
            wws_points: None,
            max_legal_rent: None,
            wws_breakdown: Vec::new(),
            rent_assessment: None,
        };
        (listing, self.wws_input_data)
    }
}

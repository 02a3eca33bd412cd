use std::collections::BTreeMap;

use axum::response::Response;
use serde_json::{json, Value};

use crate::listings::domain::{Listing, ListingId};
use crate::listings::repository::{ListingRepository, RepositoryError};
use crate::listings::seed::listings_from_records;

pub(super) fn seed_records() -> Vec<Value> {
    vec![
        json!({
            "id": 2,
            "title": "Bright Studio near Vondelpark",
            "location": "Amsterdam",
            "images": ["/img/studio.jpg"],
            "advertised_rent": 1150.0,
            "size": 38.0,
            "rooms": 1,
            "description": "Compact studio with a renovated kitchen.",
            "amenities": [{ "name": "Dishwasher", "icon": "fa-sink" }],
            "wws_input_data": {
                "surface_area": 38.0,
                "room_count": 1,
                "energy_label": "c",
                "woz_value": 250000
            }
        }),
        json!({
            "id": 1,
            "title": "Charming Canal View Apartment",
            "location": "Amsterdam",
            "images": ["/img/canal-1.jpg", "/img/canal-2.jpg"],
            "advertised_rent": 1650.0,
            "size": 75.0,
            "rooms": 3,
            "description": "Spacious apartment overlooking the canal.",
            "amenities": [{ "name": "Balcony", "icon": "fa-sun" }],
            "wws_input_data": {
                "surface_area": 75.0,
                "room_count": 3,
                "energy_label": "B",
                "woz_value": 300000
            }
        }),
        json!({
            "id": 3,
            "title": "Family Home in Utrecht",
            "location": "Utrecht",
            "advertised_rent": 1900.0,
            "size": 120.0,
            "rooms": 5,
            "description": "Terraced house with a garden.",
            "wws_input_data": { "energy_label": "A+" }
        }),
    ]
}

pub(super) fn seeded_listings() -> Vec<Listing> {
    listings_from_records(seed_records())
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: BTreeMap<ListingId, Listing>,
}

impl MemoryRepository {
    pub(super) fn seeded() -> Self {
        Self {
            records: seeded_listings()
                .into_iter()
                .map(|listing| (listing.id, listing))
                .collect(),
        }
    }
}

impl ListingRepository for MemoryRepository {
    fn all(&self) -> Result<Vec<Listing>, RepositoryError> {
        // Reverse order so handlers have to sort.
        Ok(self.records.values().rev().cloned().collect())
    }

    fn fetch(&self, id: ListingId) -> Result<Option<Listing>, RepositoryError> {
        Ok(self.records.get(&id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ListingRepository for UnavailableRepository {
    fn all(&self) -> Result<Vec<Listing>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalogue offline".to_string()))
    }

    fn fetch(&self, _id: ListingId) -> Result<Option<Listing>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalogue offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

use std::fs;
use std::path::PathBuf;

use serde_json::json;

use super::common::*;
use crate::listings::domain::ListingId;
use crate::listings::seed::{listings_from_records, load_listings, load_listings_or_empty};
use crate::listings::SeedError;
use crate::wws::RentAssessment;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rent-right-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("write scratch seed");
    path
}

#[test]
fn seeded_listing_carries_wws_assessment() {
    let listings = seeded_listings();
    let canal = listings
        .iter()
        .find(|listing| listing.id == ListingId(1))
        .expect("canal listing present");

    assert_eq!(canal.wws_points, Some(190));
    assert_eq!(canal.max_legal_rent, Some(1475.0));
    assert_eq!(canal.wws_breakdown.len(), 4);
    assert_eq!(canal.energy_label.as_deref(), Some("B"));
    assert_eq!(canal.woz_value, Some(300000.0));
    assert_eq!(canal.rent_assessment, Some(RentAssessment::Liberalized));
}

#[test]
fn lowercase_label_and_overpriced_rent_are_assessed() {
    let listings = seeded_listings();
    let studio = listings
        .iter()
        .find(|listing| listing.id == ListingId(2))
        .expect("studio present");

    // 38 + 10 + 75 + 5
    assert_eq!(studio.wws_points, Some(128));
    assert_eq!(studio.max_legal_rent, Some(1010.0));
    assert_eq!(studio.rent_assessment, Some(RentAssessment::Overpriced));
}

#[test]
fn listing_without_required_inputs_is_kept_unscored() {
    let listings = seeded_listings();
    let house = listings
        .iter()
        .find(|listing| listing.id == ListingId(3))
        .expect("house present");

    assert!(!house.is_scored());
    assert!(house.max_legal_rent.is_none());
    assert!(house.wws_breakdown.is_empty());
    assert!(house.rent_assessment.is_none());
    assert!(house.images.is_empty());
}

#[test]
fn malformed_records_are_skipped() {
    let mut records = seed_records();
    records.push(json!({ "id": 9, "title": "Missing everything" }));
    records.push(json!("not an object"));

    let listings = listings_from_records(records);

    assert_eq!(listings.len(), 3);
    assert!(listings.iter().all(|listing| listing.id != ListingId(9)));
}

#[test]
fn load_listings_reads_seed_file() {
    let contents = serde_json::to_string(&seed_records()).expect("serialize seed");
    let path = scratch_file("valid.json", &contents);

    let listings = load_listings(&path).expect("seed loads");
    fs::remove_file(&path).ok();

    assert_eq!(listings.len(), 3);
}

#[test]
fn load_listings_reports_missing_and_malformed_files() {
    let missing = std::env::temp_dir().join("rent-right-does-not-exist.json");
    assert!(matches!(
        load_listings(&missing),
        Err(SeedError::Io { .. })
    ));

    let path = scratch_file("broken.json", "{ not json");
    let result = load_listings(&path);
    let fallback = load_listings_or_empty(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(result, Err(SeedError::Json { .. })));
    assert!(fallback.is_empty());
}

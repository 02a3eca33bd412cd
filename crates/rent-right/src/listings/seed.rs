use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{error, info, warn};

use super::domain::{Listing, SeedListing};
use crate::wws::{ScoringInput, ScoringResult};

/// Failures that prevent the seed file from being read at all.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seed file {path} is not a JSON array of listings: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the seed file and scores every listing that carries usable WWS inputs.
pub fn load_listings(path: impl AsRef<Path>) -> Result<Vec<Listing>, SeedError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<Value> = serde_json::from_str(&raw).map_err(|source| SeedError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let attempted = records.len();
    let listings = listings_from_records(records);

    info!(
        path = %path.display(),
        loaded = listings.len(),
        "loaded seed listings"
    );
    if listings.len() != attempted {
        warn!(
            attempted,
            loaded = listings.len(),
            "some seed listings could not be processed"
        );
    }

    Ok(listings)
}

/// Startup variant of [`load_listings`]: an unreadable seed yields an empty catalogue.
pub fn load_listings_or_empty(path: impl AsRef<Path>) -> Vec<Listing> {
    match load_listings(path) {
        Ok(listings) => listings,
        Err(err) => {
            error!(%err, "serving an empty listing catalogue");
            Vec::new()
        }
    }
}

pub fn listings_from_records(records: Vec<Value>) -> Vec<Listing> {
    let mut listings = Vec::with_capacity(records.len());

    for record in records {
        let listing_id = record.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<SeedListing>(record) {
            Ok(seed) => listings.push(score_seed_listing(seed)),
            Err(err) => {
                error!(%listing_id, %err, "skipping malformed seed listing");
            }
        }
    }

    listings
}

fn score_seed_listing(seed: SeedListing) -> Listing {
    let (mut listing, attributes) = seed.into_listing();

    match ScoringInput::from_attributes(&attributes) {
        Ok(input) => {
            let result = ScoringResult::from_input(&input);
            listing.apply_scoring(&input, result);
        }
        Err(error) => {
            warn!(
                listing_id = %listing.id,
                %error,
                "skipping WWS calculation for listing"
            );
        }
    }

    listing
}

//! Listing catalogue: seed loading, repository seam, CSV export and HTTP routes.

pub mod domain;
pub mod export;
pub mod repository;
pub mod router;
pub mod seed;

#[cfg(test)]
mod tests;

pub use domain::{Amenity, Listing, ListingId};
pub use export::write_csv;
pub use repository::{ListingRepository, RepositoryError};
pub use router::listing_router;
pub use seed::{listings_from_records, load_listings, load_listings_or_empty, SeedError};

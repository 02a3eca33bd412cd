use super::domain::{Listing, ListingId};

/// Read access to the listing catalogue so routes can be exercised in isolation.
pub trait ListingRepository: Send + Sync {
    fn all(&self) -> Result<Vec<Listing>, RepositoryError>;
    fn fetch(&self, id: ListingId) -> Result<Option<Listing>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("listing catalogue unavailable: {0}")]
    Unavailable(String),
}

use metrics_exporter_prometheus::PrometheusHandle;
use rent_right::listings::{Listing, ListingId, ListingRepository, RepositoryError};
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalogue loaded once at startup and shared read-only across requests.
#[derive(Default, Clone)]
pub(crate) struct InMemoryListingRepository {
    records: Arc<BTreeMap<ListingId, Listing>>,
}

impl InMemoryListingRepository {
    pub(crate) fn from_listings(listings: Vec<Listing>) -> Self {
        let mut records = BTreeMap::new();
        for listing in listings {
            let id = listing.id;
            if records.insert(id, listing).is_some() {
                warn!(listing_id = %id, "duplicate listing id in seed; keeping the last record");
            }
        }
        Self {
            records: Arc::new(records),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

impl ListingRepository for InMemoryListingRepository {
    fn all(&self) -> Result<Vec<Listing>, RepositoryError> {
        Ok(self.records.values().cloned().collect())
    }

    fn fetch(&self, id: ListingId) -> Result<Option<Listing>, RepositoryError> {
        Ok(self.records.get(&id).cloned())
    }
}

use std::io::Write;

use serde::Serialize;

use super::domain::Listing;

#[derive(Debug, Serialize)]
struct ListingCsvRow<'a> {
    id: u32,
    title: &'a str,
    location: &'a str,
    advertised_rent: f64,
    wws_points: Option<i64>,
    max_legal_rent: Option<f64>,
    assessment: Option<&'static str>,
}

impl<'a> From<&'a Listing> for ListingCsvRow<'a> {
    fn from(listing: &'a Listing) -> Self {
        Self {
            id: listing.id.0,
            title: &listing.title,
            location: &listing.location,
            advertised_rent: listing.advertised_rent,
            wws_points: listing.wws_points,
            max_legal_rent: listing.max_legal_rent,
            assessment: listing
                .rent_assessment
                .as_ref()
                .map(|assessment| assessment.label()),
        }
    }
}

/// Writes one CSV row per listing; unscored listings leave the WWS columns empty.
pub fn write_csv<W: Write>(listings: &[Listing], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for listing in listings {
        csv_writer.serialize(ListingCsvRow::from(listing))?;
    }
    csv_writer.flush()?;
    Ok(())
}

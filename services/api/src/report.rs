use clap::Args;
use rent_right::config::AppConfig;
use rent_right::error::AppError;
use rent_right::listings::{load_listings, write_csv, Listing};
use rent_right::wws::{try_score, ScoringResult};
use serde_json::{json, Map, Value};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Living area in square metres
    #[arg(long)]
    pub(crate) surface_area: Option<f64>,
    /// Number of rooms
    #[arg(long)]
    pub(crate) rooms: Option<i64>,
    /// Energy label (A++ through G)
    #[arg(long)]
    pub(crate) energy_label: Option<String>,
    /// WOZ (assessed) value in euros
    #[arg(long)]
    pub(crate) woz_value: Option<f64>,
    /// Raw JSON attribute object, used instead of the individual flags
    #[arg(long, conflicts_with_all = ["surface_area", "rooms", "energy_label", "woz_value"])]
    pub(crate) attributes: Option<String>,
    /// Print the scoring result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListingsArgs {
    /// Seed file to read (defaults to APP_SEED_PATH)
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
    /// Write CSV to stdout instead of a readable summary
    #[arg(long)]
    pub(crate) csv: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let attributes = score_attributes(&args)?;
    let outcome = try_score(&attributes);
    let result = match &outcome {
        Ok(result) => result.clone(),
        Err(err) => ScoringResult::invalid(err),
    };

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &result).map_err(io::Error::from)?;
        writeln!(stdout)?;
    } else {
        render_score(&mut stdout, &result)?;
    }

    outcome
        .map(|_| ())
        .map_err(|err| AppError::Usage(format!("attributes could not be scored: {err}")))
}

pub(crate) fn run_listings(args: ListingsArgs) -> Result<(), AppError> {
    let seed_path = match args.seed {
        Some(path) => path,
        None => AppConfig::load()?.catalogue.seed_path,
    };
    let mut listings = load_listings(&seed_path)?;
    listings.sort_by_key(|listing| listing.id);

    let stdout = io::stdout().lock();
    if args.csv {
        write_csv(&listings, stdout).map_err(io::Error::from)?;
    } else {
        render_listings(stdout, &listings)?;
    }
    Ok(())
}

fn score_attributes(args: &ScoreArgs) -> Result<Map<String, Value>, AppError> {
    if let Some(raw) = &args.attributes {
        return serde_json::from_str(raw)
            .map_err(|err| AppError::Usage(format!("--attributes must be a JSON object: {err}")));
    }

    let mut attributes = Map::new();
    if let Some(area) = args.surface_area {
        attributes.insert("surfaceAreaM2".to_string(), json!(area));
    }
    if let Some(rooms) = args.rooms {
        attributes.insert("roomCount".to_string(), json!(rooms));
    }
    if let Some(label) = &args.energy_label {
        attributes.insert("energyLabel".to_string(), json!(label));
    }
    if let Some(value) = args.woz_value {
        attributes.insert("wozValue".to_string(), json!(value));
    }
    Ok(attributes)
}

fn render_score<W: Write>(mut out: W, result: &ScoringResult) -> io::Result<()> {
    writeln!(out, "WWS breakdown")?;
    for entry in &result.breakdown {
        writeln!(out, "- {}: {} pts", entry.label, entry.points)?;
    }
    writeln!(out, "\nTotal WWS points: {}", result.total_points)?;
    writeln!(out, "Maximum legal rent: €{:.2}", result.max_legal_rent)
}

fn render_listings<W: Write>(mut out: W, listings: &[Listing]) -> io::Result<()> {
    if listings.is_empty() {
        return writeln!(out, "No listings found");
    }

    for listing in listings {
        writeln!(
            out,
            "#{} {} ({}) - advertised €{:.2}",
            listing.id, listing.title, listing.location, listing.advertised_rent
        )?;
        match (listing.wws_points, listing.max_legal_rent, listing.rent_assessment) {
            (Some(points), Some(max_rent), Some(assessment)) => writeln!(
                out,
                "  {} pts, max legal rent €{:.2}: {}",
                points,
                max_rent,
                assessment.label()
            )?,
            _ => writeln!(out, "  WWS not calculated (missing surface area or rooms)")?,
        }
    }
    Ok(())
}

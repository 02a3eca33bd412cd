use super::input::ScoringInput;
use super::BreakdownEntry;

/// Points per recognised energy label. Labels outside the table (E and below,
/// empty strings, typos) score nothing.
pub const ENERGY_LABEL_POINTS: &[(&str, i64)] = &[
    ("A++", 40),
    ("A+", 35),
    ("A", 30),
    ("B", 20),
    ("C", 10),
    ("D", 5),
];

const POINTS_PER_SQUARE_METRE: f64 = 1.0;
// 0.0003 points per euro, kept as a ratio so round valuations floor exactly.
const WOZ_POINTS_PER_TEN_THOUSAND: f64 = 3.0;
const ROOM_PRESENCE_POINTS: i64 = 5;

/// Scoring categories in the order they appear in every breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WwsCategory {
    SurfaceArea,
    EnergyLabel,
    WozValue,
    RoomCount,
}

impl WwsCategory {
    pub(crate) const ORDERED: [WwsCategory; 4] = [
        WwsCategory::SurfaceArea,
        WwsCategory::EnergyLabel,
        WwsCategory::WozValue,
        WwsCategory::RoomCount,
    ];

    fn score(self, input: &ScoringInput) -> BreakdownEntry {
        match self {
            WwsCategory::SurfaceArea => surface_area(input),
            WwsCategory::EnergyLabel => energy_label(input),
            WwsCategory::WozValue => woz_value(input),
            WwsCategory::RoomCount => room_count(input),
        }
    }
}

/// Evaluates every category and returns the total with its breakdown.
///
/// Inputs from [`ScoringInput::from_attributes`] are range-checked, so the total is
/// exact for them. Hand-built inputs with absurd magnitudes saturate instead of
/// overflowing.
pub fn compute_breakdown(input: &ScoringInput) -> (i64, Vec<BreakdownEntry>) {
    let breakdown: Vec<BreakdownEntry> = WwsCategory::ORDERED
        .iter()
        .map(|category| category.score(input))
        .collect();
    let total = breakdown
        .iter()
        .fold(0i64, |total, entry| total.saturating_add(entry.points));

    (total, breakdown)
}

/// Case-insensitive lookup returning the canonical label and its points.
pub fn energy_label_points(label: &str) -> Option<(&'static str, i64)> {
    let candidate = label.trim();
    ENERGY_LABEL_POINTS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(candidate))
        .copied()
}

fn surface_area(input: &ScoringInput) -> BreakdownEntry {
    let area = input.surface_area_m2();
    BreakdownEntry::new(
        format!("Surface Area ({area} m²)"),
        floor_points(area * POINTS_PER_SQUARE_METRE),
    )
}

fn energy_label(input: &ScoringInput) -> BreakdownEntry {
    match input.energy_label().and_then(energy_label_points) {
        Some((label, points)) => BreakdownEntry::new(format!("Energy Label ({label})"), points),
        None => BreakdownEntry::new("Energy Label (Not specified or invalid)", 0),
    }
}

fn woz_value(input: &ScoringInput) -> BreakdownEntry {
    match input.woz_value() {
        Some(value) if value > 0.0 => BreakdownEntry::new(
            format!("WOZ Value (€{})", group_thousands(value)),
            floor_points(value * WOZ_POINTS_PER_TEN_THOUSAND / 10_000.0),
        ),
        _ => BreakdownEntry::new("WOZ Value (Not specified)", 0),
    }
}

fn room_count(input: &ScoringInput) -> BreakdownEntry {
    let rooms = input.room_count();
    let points = if rooms > 0 { ROOM_PRESENCE_POINTS } else { 0 };
    BreakdownEntry::new(format!("Number of Rooms ({rooms})"), points)
}

fn floor_points(raw: f64) -> i64 {
    raw.floor() as i64
}

fn group_thousands(value: f64) -> String {
    let digits = (value.round() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

/// Largest accepted surface area magnitude, in square metres.
pub const MAX_SURFACE_AREA_M2: f64 = 1.0e6;
/// Largest accepted WOZ valuation, in euros.
pub const MAX_WOZ_VALUE: f64 = 1.0e12;

/// Validated property attributes consumed by the scoring rules.
///
/// Fields are private so an input cannot change once it has been validated; the
/// optional attributes are attached with the `with_*` builders at construction time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringInput {
    #[serde(alias = "surface_area_m2", alias = "surface_area", alias = "size_m2")]
    surface_area_m2: f64,
    #[serde(
        alias = "room_count",
        alias = "rooms",
        deserialize_with = "deserialize_room_count"
    )]
    room_count: i64,
    #[serde(default, alias = "energy_label")]
    energy_label: Option<String>,
    #[serde(default, alias = "woz_value")]
    woz_value: Option<f64>,
}

impl ScoringInput {
    pub fn new(surface_area_m2: f64, room_count: i64) -> Self {
        Self {
            surface_area_m2,
            room_count,
            energy_label: None,
            woz_value: None,
        }
    }

    pub fn with_energy_label(mut self, label: impl Into<String>) -> Self {
        self.energy_label = Some(label.into());
        self
    }

    pub fn with_woz_value(mut self, value: f64) -> Self {
        self.woz_value = Some(value);
        self
    }

    /// Validates a loosely typed attribute bag (request body, seed row, database row).
    ///
    /// Surface area must be a JSON number and room count a whole JSON number (`3` or
    /// `3.0`). Optional attributes may be absent or `null`, but a present value of the
    /// wrong type is rejected. Unknown keys are ignored. Magnitudes beyond
    /// [`MAX_SURFACE_AREA_M2`] and [`MAX_WOZ_VALUE`] are rejected as well.
    pub fn from_attributes(raw: &Map<String, Value>) -> Result<Self, InputError> {
        let input: Self =
            serde_json::from_value(Value::Object(raw.clone())).map_err(InputError::Attributes)?;
        input.check_ranges()?;
        Ok(input)
    }

    fn check_ranges(&self) -> Result<(), InputError> {
        check_range("surfaceAreaM2", self.surface_area_m2, MAX_SURFACE_AREA_M2)?;
        if let Some(value) = self.woz_value {
            check_range("wozValue", value, MAX_WOZ_VALUE)?;
        }
        Ok(())
    }

    pub fn surface_area_m2(&self) -> f64 {
        self.surface_area_m2
    }

    pub fn room_count(&self) -> i64 {
        self.room_count
    }

    pub fn energy_label(&self) -> Option<&str> {
        self.energy_label.as_deref()
    }

    pub fn woz_value(&self) -> Option<f64> {
        self.woz_value
    }
}

fn check_range(field: &'static str, value: f64, limit: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    if value.abs() > limit {
        return Err(InputError::OutOfRange {
            field,
            value,
            limit,
        });
    }
    Ok(())
}

// Whole floats such as `3.0` count as integers; fractions and strings do not.
fn deserialize_room_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(rooms) = number.as_i64() {
        return Ok(rooms);
    }
    match number.as_f64() {
        Some(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(D::Error::custom(format!(
            "invalid room count {number}, expected a whole number"
        ))),
    }
}

/// Reasons an attribute bag could not be turned into a [`ScoringInput`].
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("{0}")]
    Attributes(#[source] serde_json::Error),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{field} {value} is outside the accepted range of -{limit} to {limit}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        limit: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attributes(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn accepts_camel_case_and_seed_keys() {
        let camel = ScoringInput::from_attributes(&attributes(json!({
            "surfaceAreaM2": 75,
            "roomCount": 3,
            "energyLabel": "B",
            "wozValue": 300000,
        })))
        .expect("camel case input validates");

        let seed = ScoringInput::from_attributes(&attributes(json!({
            "surface_area": 75.0,
            "room_count": 3,
            "energy_label": "B",
            "woz_value": 300000.0,
        })))
        .expect("seed keys validate");

        assert_eq!(camel, seed);
        assert_eq!(camel.surface_area_m2(), 75.0);
        assert_eq!(camel.room_count(), 3);
        assert_eq!(camel.energy_label(), Some("B"));
        assert_eq!(camel.woz_value(), Some(300000.0));
    }

    #[test]
    fn optional_fields_may_be_null_or_absent() {
        let input = ScoringInput::from_attributes(&attributes(json!({
            "surfaceAreaM2": 40.5,
            "roomCount": 1,
            "energyLabel": null,
        })))
        .expect("optional fields are optional");

        assert!(input.energy_label().is_none());
        assert!(input.woz_value().is_none());
    }

    #[test]
    fn rejects_missing_surface_area() {
        let err = ScoringInput::from_attributes(&attributes(json!({ "roomCount": 2 })))
            .expect_err("surface area is required");
        assert!(err.to_string().contains("surfaceAreaM2"));
    }

    #[test]
    fn rejects_wrong_types() {
        for payload in [
            json!({ "surfaceAreaM2": "75", "roomCount": 2 }),
            json!({ "surfaceAreaM2": 75, "roomCount": 2.5 }),
            json!({ "surfaceAreaM2": 75, "roomCount": "3" }),
            json!({ "surfaceAreaM2": 75, "roomCount": u64::MAX }),
            json!({ "surfaceAreaM2": null, "roomCount": 2 }),
            json!({ "surfaceAreaM2": 75, "roomCount": 2, "energyLabel": 7 }),
            json!({ "surfaceAreaM2": 75, "roomCount": 2, "wozValue": "high" }),
        ] {
            assert!(
                ScoringInput::from_attributes(&attributes(payload.clone())).is_err(),
                "expected rejection for {payload}"
            );
        }
    }

    #[test]
    fn whole_float_room_counts_are_integers() {
        let input = ScoringInput::from_attributes(&attributes(json!({
            "surfaceAreaM2": 75,
            "roomCount": 3.0,
        })))
        .expect("3.0 rooms validates");

        assert_eq!(input.room_count(), 3);
    }

    #[test]
    fn rejects_magnitudes_beyond_the_accepted_range() {
        let area = ScoringInput::from_attributes(&attributes(json!({
            "surfaceAreaM2": 1.0e19,
            "roomCount": 1,
        })))
        .expect_err("area is out of range");
        assert!(matches!(
            area,
            InputError::OutOfRange {
                field: "surfaceAreaM2",
                ..
            }
        ));

        let woz = ScoringInput::from_attributes(&attributes(json!({
            "surfaceAreaM2": 75,
            "roomCount": 3,
            "wozValue": 1.0e300,
        })))
        .expect_err("woz value is out of range");
        assert!(woz.to_string().starts_with("wozValue"));
    }

    #[test]
    fn accepts_values_at_the_limits() {
        let input = ScoringInput::from_attributes(&attributes(json!({
            "surfaceAreaM2": -MAX_SURFACE_AREA_M2,
            "roomCount": 1,
            "wozValue": MAX_WOZ_VALUE,
        })))
        .expect("limits are inclusive");

        assert_eq!(input.woz_value(), Some(MAX_WOZ_VALUE));
    }

    #[test]
    fn builders_attach_optional_attributes() {
        let input = ScoringInput::new(60.0, 2)
            .with_energy_label("a+")
            .with_woz_value(250_000.0);

        assert_eq!(input.energy_label(), Some("a+"));
        assert_eq!(input.woz_value(), Some(250_000.0));
    }
}

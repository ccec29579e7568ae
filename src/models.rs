use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A surveyed water point. Coordinates are decimal degrees; the measurement
/// fields are kept as the free-form text the field agents typed in and are
/// parsed leniently at evaluation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterPoint {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub owner: String,
    /// Land area in hectares.
    #[serde(default)]
    pub surface_area: String,
    /// L/min
    #[serde(default)]
    pub flow_rate: String,
    /// g/L
    #[serde(default)]
    pub water_salinity: String,
    /// %
    #[serde(default)]
    pub active_limestone: String,
    /// %
    #[serde(default)]
    pub organic_matter: String,
    /// dS/m
    #[serde(default)]
    pub soil_salinity: String,
    #[serde(default)]
    pub soil_ph: String,
}

/// Lenient numeric parsing for measurement fields: missing, empty or
/// unparsable text counts as 0. Garbage data degrades to the worst scoring
/// band instead of failing the evaluation.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

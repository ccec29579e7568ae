use std::path::Path;

use anyhow::Context;
use uuid::Uuid;

use crate::models::WaterPoint;

/// Load the registry file. A missing file counts as an empty registry so
/// that `import` can bootstrap one.
pub fn load_points(path: &Path) -> anyhow::Result<Vec<WaterPoint>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let points: Vec<WaterPoint> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(points)
}

pub fn save_points(path: &Path, points: &[WaterPoint]) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(points)?;
    std::fs::write(path, data)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Append rows from a survey CSV to the registry. Returns the number of
/// points added.
pub fn import_csv(csv_path: &Path, points: &mut Vec<WaterPoint>) -> anyhow::Result<usize> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        latitude: f64,
        longitude: f64,
        owner: String,
        #[serde(default)]
        surface_area: String,
        #[serde(default)]
        flow_rate: String,
        #[serde(default)]
        water_salinity: String,
        #[serde(default)]
        active_limestone: String,
        #[serde(default)]
        organic_matter: String,
        #[serde(default)]
        soil_salinity: String,
        #[serde(default)]
        soil_ph: String,
    }

    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut inserted = 0usize;

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        points.push(WaterPoint {
            id: Uuid::new_v4(),
            latitude: row.latitude,
            longitude: row.longitude,
            owner: row.owner,
            surface_area: row.surface_area,
            flow_rate: row.flow_rate,
            water_salinity: row.water_salinity,
            active_limestone: row.active_limestone,
            organic_matter: row.organic_matter,
            soil_salinity: row.soil_salinity,
            soil_ph: row.soil_ph,
        });
        inserted += 1;
    }

    Ok(inserted)
}

/// Realistic seed registry: three surveyed sites in Tunisia.
pub fn demo_points() -> Vec<WaterPoint> {
    vec![
        WaterPoint {
            id: Uuid::new_v4(),
            latitude: 36.8065,
            longitude: 10.1815,
            owner: "Administration Tunis".to_string(),
            surface_area: "5.2".to_string(),
            flow_rate: "120".to_string(),
            water_salinity: "1.2".to_string(),
            active_limestone: "15.5".to_string(),
            organic_matter: "3.2".to_string(),
            soil_salinity: "0.8".to_string(),
            soil_ph: "7.4".to_string(),
        },
        WaterPoint {
            id: Uuid::new_v4(),
            latitude: 35.0378,
            longitude: 9.4856,
            owner: "Coopérative Sidi Bouzid".to_string(),
            surface_area: "12.8".to_string(),
            flow_rate: "200".to_string(),
            water_salinity: "0.8".to_string(),
            active_limestone: "22.1".to_string(),
            organic_matter: "2.8".to_string(),
            soil_salinity: "0.5".to_string(),
            soil_ph: "7.1".to_string(),
        },
        WaterPoint {
            id: Uuid::new_v4(),
            latitude: 35.1677,
            longitude: 8.8368,
            owner: "Ferme Kasserine".to_string(),
            surface_area: "8.5".to_string(),
            flow_rate: "80".to_string(),
            water_salinity: "0.5".to_string(),
            active_limestone: "18.9".to_string(),
            organic_matter: "1.9".to_string(),
            soil_salinity: "0.7".to_string(),
            soil_ph: "7.8".to_string(),
        },
    ]
}

use std::fmt::Write;

use chrono::Utc;

use crate::geo;
use crate::models::WaterPoint;
use crate::quality;

/// Render the markdown site report for one water point. Mirrors the field
/// report layout: general info, water analysis, soil analysis, assessments,
/// generation date.
pub fn build_site_report(point: &WaterPoint) -> String {
    let water = quality::evaluate_water_quality(point);
    let soil = quality::evaluate_soil_fertility(point);
    let lat_dms = geo::decimal_to_dms(point.latitude, true);
    let lng_dms = geo::decimal_to_dms(point.longitude, false);

    let mut output = String::new();

    let _ = writeln!(output, "# Rapport Point d'Eau - Geo-Agri");
    let _ = writeln!(output);
    let _ = writeln!(output, "## Informations Générales");
    let _ = writeln!(output, "- Propriétaire: {}", point.owner);
    let _ = writeln!(output, "- Surface de terrain: {} hectares", point.surface_area);
    let _ = writeln!(output, "- Latitude: {:.6}° ({})", point.latitude, lat_dms);
    let _ = writeln!(output, "- Longitude: {:.6}° ({})", point.longitude, lng_dms);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Analyse de l'Eau");
    let _ = writeln!(output, "- Débit: {} L/min", point.flow_rate);
    let _ = writeln!(output, "- Salinité: {} g/L", point.water_salinity);
    let _ = writeln!(
        output,
        "- Qualité de l'eau: {} {}",
        water.level.label(),
        water.level.icon()
    );

    if !water.issues.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "### Problèmes détectés");
        for issue in &water.issues {
            let _ = writeln!(output, "- {issue}");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Analyse du Sol");
    let _ = writeln!(output, "- Calcaire actif: {}%", point.active_limestone);
    let _ = writeln!(output, "- Matière organique: {}%", point.organic_matter);
    let _ = writeln!(output, "- Salinité du sol: {} dS/m", point.soil_salinity);
    let _ = writeln!(output, "- pH du sol: {}", point.soil_ph);
    let _ = writeln!(
        output,
        "- Fertilité du sol: {} {}",
        soil.level.label(),
        soil.level.icon()
    );

    if !soil.recommendations.is_empty() {
        let _ = writeln!(output);
        let _ = writeln!(output, "### Recommandations");
        for recommendation in &soil.recommendations {
            let _ = writeln!(output, "- {recommendation}");
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "Rapport généré le: {}",
        Utc::now().date_naive()
    );

    output
}

use crate::models::{parse_or_zero, WaterPoint};

/// Bucketed water quality level, on the 6-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterQualityLevel {
    Excellent,
    Good,
    Poor,
}

impl WaterQualityLevel {
    pub fn label(self) -> &'static str {
        match self {
            WaterQualityLevel::Excellent => "Excellente",
            WaterQualityLevel::Good => "Bonne",
            WaterQualityLevel::Poor => "Médiocre",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            WaterQualityLevel::Excellent => "#4CAF50",
            WaterQualityLevel::Good => "#FF9800",
            WaterQualityLevel::Poor => "#F44336",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            WaterQualityLevel::Excellent => "✓",
            WaterQualityLevel::Good | WaterQualityLevel::Poor => "⚠️",
        }
    }
}

/// Bucketed soil fertility level, on the 12-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilFertilityLevel {
    VeryFertile,
    Fertile,
    ModeratelyFertile,
    PoorlyFertile,
}

impl SoilFertilityLevel {
    pub fn label(self) -> &'static str {
        match self {
            SoilFertilityLevel::VeryFertile => "Très fertile",
            SoilFertilityLevel::Fertile => "Fertile",
            SoilFertilityLevel::ModeratelyFertile => "Moyennement fertile",
            SoilFertilityLevel::PoorlyFertile => "Peu fertile",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            SoilFertilityLevel::VeryFertile => "#4CAF50",
            SoilFertilityLevel::Fertile => "#8BC34A",
            SoilFertilityLevel::ModeratelyFertile => "#FF9800",
            SoilFertilityLevel::PoorlyFertile => "#F44336",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SoilFertilityLevel::VeryFertile | SoilFertilityLevel::Fertile => "✓",
            SoilFertilityLevel::ModeratelyFertile | SoilFertilityLevel::PoorlyFertile => "⚠️",
        }
    }
}

#[derive(Debug, Clone)]
pub struct WaterQuality {
    pub level: WaterQualityLevel,
    pub score: u32,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SoilFertility {
    pub level: SoilFertilityLevel,
    pub score: u32,
    pub recommendations: Vec<String>,
}

/// Score the water analysis of a point: flow rate then salinity, each band
/// worth 0 to 3 points.
pub fn evaluate_water_quality(point: &WaterPoint) -> WaterQuality {
    let flow_rate = parse_or_zero(&point.flow_rate);
    let water_salinity = parse_or_zero(&point.water_salinity);

    let mut score = 0;
    let mut issues = Vec::new();

    // Débit (optimal: ≥20 L/min)
    if flow_rate >= 20.0 {
        score += 3;
    } else if flow_rate >= 10.0 {
        score += 2;
    } else if flow_rate >= 5.0 {
        score += 1;
        issues.push("Débit faible".to_string());
    } else {
        issues.push("Débit très faible".to_string());
    }

    // Salinité de l'eau (optimal: ≤1.0 g/L)
    if water_salinity <= 1.0 {
        score += 3;
    } else if water_salinity <= 2.0 {
        score += 2;
        issues.push("Salinité modérée".to_string());
    } else if water_salinity <= 3.0 {
        score += 1;
        issues.push("Salinité élevée".to_string());
    } else {
        issues.push("Salinité très élevée".to_string());
    }

    let level = if score >= 5 {
        WaterQualityLevel::Excellent
    } else if score >= 3 {
        WaterQualityLevel::Good
    } else {
        WaterQualityLevel::Poor
    };

    WaterQuality { level, score, issues }
}

/// Score the soil analysis of a point: limestone, organic matter, salinity
/// and pH in that order, each band worth 1 to 3 points.
pub fn evaluate_soil_fertility(point: &WaterPoint) -> SoilFertility {
    let active_limestone = parse_or_zero(&point.active_limestone);
    let organic_matter = parse_or_zero(&point.organic_matter);
    let soil_salinity = parse_or_zero(&point.soil_salinity);
    let soil_ph = parse_or_zero(&point.soil_ph);

    let mut score = 0;
    let mut recommendations = Vec::new();

    // Calcaire actif (optimal: 10-25%)
    if (10.0..=25.0).contains(&active_limestone) {
        score += 3;
    } else if (5.0..=30.0).contains(&active_limestone) {
        score += 2;
        if active_limestone < 10.0 {
            recommendations.push("Calcaire actif faible".to_string());
        }
        if active_limestone > 25.0 {
            recommendations.push("Calcaire actif élevé".to_string());
        }
    } else {
        score += 1;
        if active_limestone < 5.0 {
            recommendations.push("Carence en calcaire actif".to_string());
        }
        if active_limestone > 30.0 {
            recommendations.push("Excès de calcaire actif".to_string());
        }
    }

    // Matière organique (optimal: ≥3.0%)
    if organic_matter >= 3.0 {
        score += 3;
    } else if organic_matter >= 2.0 {
        score += 2;
        recommendations.push("Augmenter la matière organique".to_string());
    } else {
        score += 1;
        recommendations.push("Sol pauvre en matière organique".to_string());
    }

    // Salinité du sol (optimal: ≤2.0 dS/m)
    if soil_salinity <= 2.0 {
        score += 3;
    } else if soil_salinity <= 4.0 {
        score += 2;
        recommendations.push("Salinité modérée du sol".to_string());
    } else {
        score += 1;
        recommendations.push("Sol trop salin".to_string());
    }

    // pH du sol (optimal: 6.5-7.5)
    if (6.5..=7.5).contains(&soil_ph) {
        score += 3;
    } else if (6.0..=8.0).contains(&soil_ph) {
        score += 2;
        if soil_ph < 6.5 {
            recommendations.push("Sol légèrement acide".to_string());
        }
        if soil_ph > 7.5 {
            recommendations.push("Sol légèrement basique".to_string());
        }
    } else {
        score += 1;
        if soil_ph < 6.0 {
            recommendations.push("Sol trop acide".to_string());
        }
        if soil_ph > 8.0 {
            recommendations.push("Sol trop basique".to_string());
        }
    }

    let level = if score >= 10 {
        SoilFertilityLevel::VeryFertile
    } else if score >= 8 {
        SoilFertilityLevel::Fertile
    } else if score >= 6 {
        SoilFertilityLevel::ModeratelyFertile
    } else {
        SoilFertilityLevel::PoorlyFertile
    };

    SoilFertility {
        level,
        score,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_point() -> WaterPoint {
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
        }
    }

    #[test]
    fn strong_flow_with_moderate_salinity_is_excellent() {
        let quality = evaluate_water_quality(&sample_point());
        assert_eq!(quality.score, 5);
        assert_eq!(quality.level, WaterQualityLevel::Excellent);
        assert_eq!(quality.level.label(), "Excellente");
        assert_eq!(quality.level.color(), "#4CAF50");
        assert_eq!(quality.issues, vec!["Salinité modérée"]);
    }

    #[test]
    fn dry_brackish_point_is_poor_with_both_issues() {
        let mut point = sample_point();
        point.flow_rate = "0".to_string();
        point.water_salinity = "5".to_string();

        let quality = evaluate_water_quality(&point);
        assert_eq!(quality.score, 0);
        assert_eq!(quality.level, WaterQualityLevel::Poor);
        assert_eq!(
            quality.issues,
            vec!["Débit très faible", "Salinité très élevée"]
        );
    }

    #[test]
    fn middling_bands_land_on_good_then_poor() {
        let mut point = sample_point();
        point.flow_rate = "12".to_string();
        point.water_salinity = "1.5".to_string();

        let quality = evaluate_water_quality(&point);
        assert_eq!(quality.score, 4);
        assert_eq!(quality.level, WaterQualityLevel::Good);
        assert_eq!(quality.issues, vec!["Salinité modérée"]);

        point.flow_rate = "7".to_string();
        point.water_salinity = "2.5".to_string();
        let quality = evaluate_water_quality(&point);
        assert_eq!(quality.score, 2);
        assert_eq!(quality.level, WaterQualityLevel::Poor);
        assert_eq!(quality.issues, vec!["Débit faible", "Salinité élevée"]);
    }

    #[test]
    fn optimal_soil_scores_full_marks() {
        let fertility = evaluate_soil_fertility(&sample_point());
        assert_eq!(fertility.score, 12);
        assert_eq!(fertility.level, SoilFertilityLevel::VeryFertile);
        assert_eq!(fertility.level.label(), "Très fertile");
        assert!(fertility.recommendations.is_empty());
    }

    #[test]
    fn marginal_bands_collect_recommendations_in_order() {
        let mut point = sample_point();
        point.active_limestone = "7".to_string(); // faible
        point.organic_matter = "2.5".to_string(); // augmenter
        point.soil_salinity = "3.0".to_string(); // modérée
        point.soil_ph = "7.8".to_string(); // légèrement basique

        let fertility = evaluate_soil_fertility(&point);
        assert_eq!(fertility.score, 8);
        assert_eq!(fertility.level, SoilFertilityLevel::Fertile);
        assert_eq!(
            fertility.recommendations,
            vec![
                "Calcaire actif faible",
                "Augmenter la matière organique",
                "Salinité modérée du sol",
                "Sol légèrement basique"
            ]
        );
    }

    #[test]
    fn hostile_soil_bottoms_out() {
        let mut point = sample_point();
        point.active_limestone = "40".to_string();
        point.organic_matter = "0.5".to_string();
        point.soil_salinity = "6".to_string();
        point.soil_ph = "9".to_string();

        let fertility = evaluate_soil_fertility(&point);
        assert_eq!(fertility.score, 4);
        assert_eq!(fertility.level, SoilFertilityLevel::PoorlyFertile);
        assert_eq!(
            fertility.recommendations,
            vec![
                "Excès de calcaire actif",
                "Sol pauvre en matière organique",
                "Sol trop salin",
                "Sol trop basique"
            ]
        );
    }

    #[test]
    fn malformed_measurements_score_bottom_bands_without_panic() {
        let mut point = sample_point();
        point.active_limestone = "abc".to_string();
        point.organic_matter = "".to_string();
        point.soil_salinity = "1".to_string();
        point.soil_ph = "7".to_string();

        let fertility = evaluate_soil_fertility(&point);
        // limestone 0 → 1, organic 0 → 1, salinity 1 → 3, pH 7 → 3
        assert_eq!(fertility.score, 8);
        assert!(fertility
            .recommendations
            .contains(&"Carence en calcaire actif".to_string()));
        assert!(fertility
            .recommendations
            .contains(&"Sol pauvre en matière organique".to_string()));
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod geo;
mod models;
mod quality;
mod report;
mod store;

#[derive(Parser)]
#[command(name = "water-point-survey")]
#[command(about = "Water point registry with quality scoring for Geo-Agri field agents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a registry of demonstration sites
    Seed {
        #[arg(long, default_value = "points.json")]
        out: PathBuf,
    },
    /// Import survey rows from a CSV file into the registry
    Import {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "points.json")]
        points: PathBuf,
    },
    /// Evaluate water quality and soil fertility across the registry
    Evaluate {
        #[arg(long, default_value = "points.json")]
        points: PathBuf,
        #[arg(long)]
        owner: Option<String>,
    },
    /// Generate a markdown site report for one owner
    Report {
        #[arg(long, default_value = "points.json")]
        points: PathBuf,
        #[arg(long)]
        owner: String,
        #[arg(long, default_value = "rapport.md")]
        out: PathBuf,
    },
    /// Convert a decimal coordinate to degrees/minutes/seconds
    ToDms {
        value: String,
        #[arg(long)]
        longitude: bool,
    },
    /// Convert degrees/minutes/seconds back to a decimal coordinate
    ToDecimal {
        degrees: String,
        minutes: String,
        seconds: String,
        /// One of N, S, E, W
        hemisphere: String,
        #[arg(long)]
        longitude: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { out } => {
            let points = store::demo_points();
            store::save_points(&out, &points)?;
            println!("Wrote {} demo points to {}.", points.len(), out.display());
        }
        Commands::Import { csv, points } => {
            let mut registry = store::load_points(&points)?;
            let inserted = store::import_csv(&csv, &mut registry)?;
            store::save_points(&points, &registry)?;
            println!("Imported {inserted} points from {}.", csv.display());
        }
        Commands::Evaluate { points, owner } => {
            let registry = store::load_points(&points)?;
            let selected: Vec<_> = registry
                .iter()
                .filter(|p| owner.as_deref().map_or(true, |o| p.owner == o))
                .collect();

            if selected.is_empty() {
                println!("No matching water points in {}.", points.display());
                return Ok(());
            }

            for point in selected {
                let water = quality::evaluate_water_quality(point);
                let soil = quality::evaluate_soil_fertility(point);
                println!(
                    "- {} ({:.6}, {:.6})",
                    point.owner, point.latitude, point.longitude
                );
                println!(
                    "    eau: {} {} (score {}/6)",
                    water.level.label(),
                    water.level.icon(),
                    water.score
                );
                for issue in &water.issues {
                    println!("      · {issue}");
                }
                println!(
                    "    sol: {} {} (score {}/12)",
                    soil.level.label(),
                    soil.level.icon(),
                    soil.score
                );
                for recommendation in &soil.recommendations {
                    println!("      · {recommendation}");
                }
            }
        }
        Commands::Report { points, owner, out } => {
            let registry = store::load_points(&points)?;
            let point = registry
                .iter()
                .find(|p| p.owner == owner)
                .ok_or_else(|| anyhow::anyhow!("no water point owned by {owner}"))?;

            let report = report::build_site_report(point);
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
        Commands::ToDms { value, longitude } => {
            let parts = geo::decimal_text_to_dms(&value, !longitude);
            println!("{parts}");
        }
        Commands::ToDecimal {
            degrees,
            minutes,
            seconds,
            hemisphere,
            longitude,
        } => {
            let decimal = geo::dms_to_decimal(&degrees, &minutes, &seconds, &hemisphere, !longitude);
            println!("{decimal:.6}");
        }
    }

    Ok(())
}

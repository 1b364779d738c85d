use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use carscout_common::{CarRecord, Config};
use carscout_engine::ingest::load_csv;
use carscout_engine::Recommender;
use classifier_client::HfClassifier;

#[derive(Parser, Debug)]
#[command(
    name = "carscout",
    about = "Chat-style car recommendations over a CSV of listings"
)]
struct Args {
    /// Path to the car listings CSV.
    #[arg(long)]
    cars: PathBuf,

    /// Run a single query instead of the interactive loop.
    #[arg(long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = Config::from_env();
    config.log_redacted();

    let cars = load_csv(&args.cars)?;
    println!("Loaded {} cars:\n{}\n", cars.len(), dataset_summary(&cars));

    let classifier = Arc::new(HfClassifier::new(&config.hf_token, &config.hf_model));
    let recommender = Recommender::new(classifier);

    if let Some(query) = args.query {
        println!("{}", recommender.recommend_text(&query, &cars).await?);
        return Ok(());
    }

    println!("Describe the car you're looking for (empty line to quit).");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }
        // Errors are terminal for the turn, not the session.
        match recommender.recommend_text(query, &cars).await {
            Ok(reply) => println!("{reply}"),
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}

/// One-line-per-feature overview of the loaded table, shown once at
/// startup so the user knows what there is to ask for.
fn dataset_summary(cars: &[CarRecord]) -> String {
    if cars.is_empty() {
        return "- (no rows)".to_string();
    }

    let body_types = unique(cars.iter().map(|c| c.body_type.as_str()));
    let fuel_types = unique(cars.iter().map(|c| c.fuel_type.as_str()));
    let transmissions = unique(cars.iter().map(|c| c.transmission_type.as_str()));

    let (min_cost, max_cost) = min_max(cars.iter().map(|c| c.cost));
    let (min_mileage, max_mileage) = min_max(cars.iter().map(|c| c.mileage));
    let min_age = cars.iter().map(|c| c.age).min().unwrap_or(0);
    let max_age = cars.iter().map(|c| c.age).max().unwrap_or(0);

    format!(
        "- Body types: {}\n- Fuel types: {}\n- Transmission types: {}\n\
         - Price range: ${min_cost:.2} - ${max_cost:.2}\n\
         - Age range: {min_age} - {max_age} years\n\
         - Mileage range: {min_mileage:.0} - {max_mileage:.0} miles",
        body_types.join(", "),
        fuel_types.join(", "),
        transmissions.join(", "),
    )
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

//! CSV ingestion — header validation, then row deserialization.

use std::io::Read;
use std::path::Path;

use tracing::info;

use carscout_common::{CarRecord, CarScoutError};

/// Column names the input CSV must contain.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "make",
    "model",
    "age",
    "body_type",
    "fuel_type",
    "transmission_type",
    "mileage",
    "cost",
];

/// Load and validate a car table from a CSV file.
pub fn load_csv(path: &Path) -> Result<Vec<CarRecord>, CarScoutError> {
    let file = std::fs::File::open(path)
        .map_err(|e| CarScoutError::Validation(format!("cannot open {}: {e}", path.display())))?;
    let cars = read_csv(file)?;
    info!(rows = cars.len(), path = %path.display(), "Loaded car table");
    Ok(cars)
}

/// Load and validate a car table from any CSV source.
///
/// Missing columns are reported all at once, before any row is parsed.
/// Extra columns are tolerated and ignored; a malformed row names the
/// offending line.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<CarRecord>, CarScoutError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CarScoutError::Validation(format!("cannot read CSV header: {e}")))?
        .clone();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(CarScoutError::Validation(format!(
            "missing required columns: {}",
            missing.join(", ")
        )));
    }

    let mut cars = Vec::new();
    for (i, row) in csv_reader.deserialize::<CarRecord>().enumerate() {
        // +2: one for the header line, one for 1-based numbering
        let car =
            row.map_err(|e| CarScoutError::Validation(format!("bad row at line {}: {e}", i + 2)))?;
        cars.push(car);
    }

    Ok(cars)
}

//! Candidate ordering — newest first, lowest mileage as tie-break.

use carscout_common::CarRecord;

/// Maximum number of cars returned per query.
pub const MAX_RESULTS: usize = 3;

/// Sort ascending by age, then mileage, and keep the first `MAX_RESULTS`.
/// `sort_by` is stable, so rows equal on both keys keep their source order.
pub fn select_top(mut cars: Vec<CarRecord>) -> Vec<CarRecord> {
    cars.sort_by(|a, b| a.age.cmp(&b.age).then_with(|| a.mileage.total_cmp(&b.mileage)));
    cars.truncate(MAX_RESULTS);
    cars
}

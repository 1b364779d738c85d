//! The hand-authored category→predicate rule table. Active categories
//! combine with logical AND; filtering derives a new table and never
//! mutates the input.

use std::collections::BTreeSet;

use tracing::warn;

use carscout_common::{CarRecord, Category};

/// Whether `car` satisfies the predicate for one category.
///
/// Body and fuel comparisons lower-case the record side; the CSV is
/// user-supplied and makes no case guarantee.
pub fn matches_category(car: &CarRecord, category: Category) -> bool {
    let body = car.body_type.to_lowercase();
    let fuel = car.fuel_type.to_lowercase();
    match category {
        Category::FamilyCar => body == "suv" || body == "wagon",
        Category::LongDistance => fuel == "hybrid" || fuel == "diesel",
        Category::Durable => car.age <= 5 && car.mileage <= 80_000.0,
        Category::FuelEfficient => fuel == "hybrid",
        Category::Luxury => car.cost >= 40_000.0,
        Category::BudgetFriendly => car.cost <= 30_000.0,
        Category::Compact => body == "sedan" || body == "hatchback",
        // No predicate defined for sporty in the rule table; it passes
        // everything. See the warning in `filter_cars`.
        Category::Sporty => true,
    }
}

/// Keep the cars that satisfy every active category's predicate.
/// Surviving rows retain their source order; the input is untouched.
/// An empty requirement set is the identity filter.
pub fn filter_cars(cars: &[CarRecord], requirements: &BTreeSet<Category>) -> Vec<CarRecord> {
    if requirements.contains(&Category::Sporty) {
        // Known gap in the rule table: 'sporty' classifies but never
        // constrains. Surfaced loudly rather than silently preserved.
        warn!("'sporty' has no filter predicate and contributes no constraint");
    }
    cars.iter()
        .filter(|car| requirements.iter().all(|&c| matches_category(car, c)))
        .cloned()
        .collect()
}

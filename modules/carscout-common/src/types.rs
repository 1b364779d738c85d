use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One car listing from the uploaded table. All eight fields are present
/// and non-null for every record; enforced at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    pub make: String,
    pub model: String,
    /// Age in years.
    pub age: u32,
    /// Open set: "suv", "wagon", "sedan", "hatchback", ...
    pub body_type: String,
    /// Open set: "hybrid", "diesel", "petrol", ...
    pub fuel_type: String,
    pub transmission_type: String,
    /// Odometer reading in miles.
    pub mileage: f64,
    pub cost: f64,
}

/// The fixed set of car-buyer requirement categories the classifier scores
/// a query against. Closed enumeration; not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FamilyCar,
    LongDistance,
    Durable,
    FuelEfficient,
    Luxury,
    Sporty,
    BudgetFriendly,
    Compact,
}

impl Category {
    /// All categories, in the order submitted to the classifier.
    pub const ALL: [Category; 8] = [
        Category::FamilyCar,
        Category::LongDistance,
        Category::Durable,
        Category::FuelEfficient,
        Category::Luxury,
        Category::Sporty,
        Category::BudgetFriendly,
        Category::Compact,
    ];

    /// The lower-case label string sent to the classifier. Downstream
    /// filter keys match on exactly these literals.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FamilyCar => "family car",
            Category::LongDistance => "long distance",
            Category::Durable => "durable",
            Category::FuelEfficient => "fuel efficient",
            Category::Luxury => "luxury",
            Category::Sporty => "sporty",
            Category::BudgetFriendly => "budget friendly",
            Category::Compact => "compact",
        }
    }

    /// Parse a (lower-cased) classifier label back to a category.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one recommendation turn. Transient; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// No category cleared the confidence threshold; the caller surfaces
    /// a clarification prompt and no filtering happens.
    NoClearRequirements,
    /// Requirements were identified but no car satisfied all of them.
    NoMatches { requirements: BTreeSet<Category> },
    /// Up to three cars, best first.
    Matches {
        requirements: BTreeSet<Category>,
        cars: Vec<CarRecord>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn labels_are_distinct_and_lower_case() {
        let labels: std::collections::BTreeSet<&str> =
            Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), 8);
        for label in labels {
            assert_eq!(label, label.to_lowercase());
        }
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(Category::from_label("convertible"), None);
        // Matching is on the exact lower-case literal.
        assert_eq!(Category::from_label("Family Car"), None);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Category::FamilyCar.to_string(), "family car");
        assert_eq!(Category::BudgetFriendly.to_string(), "budget friendly");
    }
}

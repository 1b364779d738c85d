//! Chat-reply rendering. Pure string building; no I/O.

use std::collections::BTreeSet;

use carscout_common::{CarRecord, Category, Recommendation};

/// Clarification prompt when no category cleared the threshold.
pub const NO_CLEAR_REQUIREMENTS_MSG: &str = "I couldn't clearly identify your car preferences. \
     Could you please be more specific about what you're looking for in a car?";

/// Appended when the filtered table came back empty.
pub const NO_MATCHES_MSG: &str = "I couldn't find any cars matching all your requirements. \
     Try broadening your search criteria.";

/// Render one recommendation turn as a chat reply.
pub fn format_recommendation(recommendation: &Recommendation) -> String {
    match recommendation {
        Recommendation::NoClearRequirements => NO_CLEAR_REQUIREMENTS_MSG.to_string(),
        Recommendation::NoMatches { requirements } => {
            format!("{}\n\n{}", requirements_header(requirements), NO_MATCHES_MSG)
        }
        Recommendation::Matches { requirements, cars } => {
            let mut out = format!(
                "{}\n\nBased on these requirements, here are the best matches:\n\n",
                requirements_header(requirements)
            );
            for (i, car) in cars.iter().enumerate() {
                out.push_str(&format_car(i + 1, car));
            }
            out
        }
    }
}

/// The analysis header: one title-cased category per line.
pub fn requirements_header(requirements: &BTreeSet<Category>) -> String {
    let mut out = String::from("Based on your requirements, you're looking for:");
    for category in requirements {
        out.push_str("\n- ");
        out.push_str(&title_case(category.label()));
    }
    out
}

fn format_car(position: usize, car: &CarRecord) -> String {
    format!(
        "{position}. {} {}\n   \u{2022} {} years old\n   \u{2022} {}, {} fuel\n   \
         \u{2022} {} transmission\n   \u{2022} {} miles\n   \u{2022} {}\n\n",
        title_case(&car.make),
        title_case(&car.model),
        car.age,
        title_case(&car.body_type),
        title_case(&car.fuel_type),
        title_case(&car.transmission_type),
        format_mileage(car.mileage),
        format_cost(car.cost),
    )
}

/// Capitalize the first letter of each whitespace-separated word.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mileage with thousands separators and no decimals, e.g. `25,000`.
pub fn format_mileage(mileage: f64) -> String {
    group_thousands(mileage.round() as u64)
}

/// Cost as currency with two decimals, e.g. `$32,000.00`.
pub fn format_cost(cost: f64) -> String {
    let cents = (cost * 100.0).round() as u64;
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rav4() -> CarRecord {
        CarRecord {
            make: "toyota".to_string(),
            model: "rav4".to_string(),
            age: 2,
            body_type: "suv".to_string(),
            fuel_type: "hybrid".to_string(),
            transmission_type: "automatic".to_string(),
            mileage: 25_000.0,
            cost: 32_000.0,
        }
    }

    #[test]
    fn title_cases_each_word() {
        assert_eq!(title_case("family car"), "Family Car");
        assert_eq!(title_case("SUV"), "Suv");
        assert_eq!(title_case("budget friendly"), "Budget Friendly");
    }

    #[test]
    fn mileage_gets_thousands_separators() {
        assert_eq!(format_mileage(25_000.0), "25,000");
        assert_eq!(format_mileage(1_234_567.0), "1,234,567");
        assert_eq!(format_mileage(999.0), "999");
    }

    #[test]
    fn cost_is_currency_with_two_decimals() {
        assert_eq!(format_cost(32_000.0), "$32,000.00");
        assert_eq!(format_cost(9_999.5), "$9,999.50");
        assert_eq!(format_cost(500.0), "$500.00");
    }

    #[test]
    fn header_lists_title_cased_categories() {
        let requirements: BTreeSet<Category> =
            [Category::FamilyCar, Category::FuelEfficient].into_iter().collect();
        let header = requirements_header(&requirements);
        assert!(header.starts_with("Based on your requirements, you're looking for:"));
        assert!(header.contains("\n- Family Car"));
        assert!(header.contains("\n- Fuel Efficient"));
    }

    #[test]
    fn matches_render_numbered_car_blocks() {
        let requirements: BTreeSet<Category> = [Category::FamilyCar].into_iter().collect();
        let text = format_recommendation(&Recommendation::Matches {
            requirements,
            cars: vec![rav4()],
        });
        assert!(text.contains("here are the best matches:"));
        assert!(text.contains("1. Toyota Rav4"));
        assert!(text.contains("\u{2022} 2 years old"));
        assert!(text.contains("\u{2022} Suv, Hybrid fuel"));
        assert!(text.contains("\u{2022} Automatic transmission"));
        assert!(text.contains("\u{2022} 25,000 miles"));
        assert!(text.contains("\u{2022} $32,000.00"));
    }

    #[test]
    fn no_matches_keeps_the_analysis_header() {
        let requirements: BTreeSet<Category> =
            [Category::Luxury, Category::BudgetFriendly].into_iter().collect();
        let text = format_recommendation(&Recommendation::NoMatches { requirements });
        assert!(text.contains("- Luxury"));
        assert!(text.contains("- Budget Friendly"));
        assert!(text.ends_with(NO_MATCHES_MSG));
    }

    #[test]
    fn no_clear_requirements_is_just_the_prompt() {
        let text = format_recommendation(&Recommendation::NoClearRequirements);
        assert_eq!(text, NO_CLEAR_REQUIREMENTS_MSG);
    }
}

//! Requirement extraction — one zero-shot classifier call over the fixed
//! category label set, thresholded into the set of active categories.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use carscout_common::{CarScoutError, Category};
use classifier_client::ZeroShotClassifier;

/// A category is active iff its confidence score is strictly greater than
/// this. Fixed design constant, not runtime configurable; a score of
/// exactly 0.7 is not active.
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Classify `text` against the eight category labels and return the set
/// that cleared the threshold.
///
/// An empty set is a normal outcome (the caller surfaces a clarification
/// prompt and performs no filtering); a classifier failure is not, and
/// comes back as `CarScoutError::Classification` with the cause attached.
pub async fn extract_requirements(
    classifier: &dyn ZeroShotClassifier,
    text: &str,
) -> Result<BTreeSet<Category>, CarScoutError> {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();

    let scores = classifier
        .classify(text, &labels)
        .await
        .map_err(CarScoutError::Classification)?;

    let mut active = BTreeSet::new();
    for entry in scores {
        // The classifier makes no case guarantee; filter keys are
        // lower-case literals.
        let label = entry.label.to_lowercase();
        match Category::from_label(&label) {
            Some(category) => {
                debug!(label = label.as_str(), score = entry.score, "category scored");
                if entry.score > CONFIDENCE_THRESHOLD {
                    active.insert(category);
                }
            }
            None => warn!(label = label.as_str(), "classifier returned unknown label"),
        }
    }

    Ok(active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use classifier_client::testing::{CannedClassifier, ScriptedClassifier};
    use classifier_client::LabelScore;

    #[tokio::test]
    async fn score_above_threshold_is_active() {
        let classifier = ScriptedClassifier::new()
            .with_score("family car", 0.9)
            .with_score("compact", 0.71);
        let active = extract_requirements(&classifier, "roomy city car")
            .await
            .unwrap();
        let expected: BTreeSet<Category> =
            [Category::FamilyCar, Category::Compact].into_iter().collect();
        assert_eq!(active, expected);
    }

    #[tokio::test]
    async fn score_exactly_at_threshold_is_not_active() {
        let classifier = ScriptedClassifier::new()
            .with_score("luxury", 0.7)
            .with_score("durable", 0.700_000_1);
        let active = extract_requirements(&classifier, "something nice")
            .await
            .unwrap();
        let expected: BTreeSet<Category> = [Category::Durable].into_iter().collect();
        assert_eq!(active, expected);
    }

    #[tokio::test]
    async fn no_scores_above_threshold_yields_empty_set() {
        let classifier = ScriptedClassifier::new().with_score("sporty", 0.4);
        let active = extract_requirements(&classifier, "a car").await.unwrap();
        assert!(active.is_empty());
    }

    #[tokio::test]
    async fn classifier_failure_is_classification_error() {
        let classifier = ScriptedClassifier::failing();
        let err = extract_requirements(&classifier, "anything")
            .await
            .unwrap_err();
        assert!(matches!(err, CarScoutError::Classification(_)));
    }

    #[tokio::test]
    async fn labels_are_lower_cased_before_matching() {
        let classifier = CannedClassifier::new(vec![
            LabelScore::new("Family Car", 0.95),
            LabelScore::new("FUEL EFFICIENT", 0.8),
        ]);
        let active = extract_requirements(&classifier, "hybrid for the kids")
            .await
            .unwrap();
        let expected: BTreeSet<Category> = [Category::FamilyCar, Category::FuelEfficient]
            .into_iter()
            .collect();
        assert_eq!(active, expected);
    }

    #[tokio::test]
    async fn unknown_labels_are_ignored() {
        let classifier = CannedClassifier::new(vec![
            LabelScore::new("convertible", 0.99),
            LabelScore::new("luxury", 0.9),
        ]);
        let active = extract_requirements(&classifier, "fancy two-seater")
            .await
            .unwrap();
        let expected: BTreeSet<Category> = [Category::Luxury].into_iter().collect();
        assert_eq!(active, expected);
    }
}

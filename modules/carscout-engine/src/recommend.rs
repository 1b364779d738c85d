//! The per-turn recommendation pipeline: extract → filter → rank → format.
//! Data flows one way and nothing is retained across turns.

use std::sync::Arc;

use carscout_common::{CarRecord, CarScoutError, Recommendation};
use classifier_client::ZeroShotClassifier;

use crate::extractor::extract_requirements;
use crate::formatter::format_recommendation;
use crate::ranker::select_top;
use crate::rules::filter_cars;

/// One-query-at-a-time recommendation engine.
///
/// The classifier is injected once at construction (the model is expensive
/// to load and shared); the car table is passed per call and never mutated.
pub struct Recommender {
    classifier: Arc<dyn ZeroShotClassifier>,
}

impl Recommender {
    pub fn new(classifier: Arc<dyn ZeroShotClassifier>) -> Self {
        Self { classifier }
    }

    /// Run one turn: classify the query, then filter and rank the table.
    ///
    /// The table is only read once requirements have been identified; a
    /// threshold miss or classifier failure never touches it.
    pub async fn recommend(
        &self,
        query: &str,
        cars: &[CarRecord],
    ) -> Result<Recommendation, CarScoutError> {
        let requirements = extract_requirements(self.classifier.as_ref(), query).await?;

        if requirements.is_empty() {
            return Ok(Recommendation::NoClearRequirements);
        }

        let surviving = filter_cars(cars, &requirements);
        if surviving.is_empty() {
            return Ok(Recommendation::NoMatches { requirements });
        }

        Ok(Recommendation::Matches {
            requirements,
            cars: select_top(surviving),
        })
    }

    /// `recommend`, rendered as a chat reply.
    pub async fn recommend_text(
        &self,
        query: &str,
        cars: &[CarRecord],
    ) -> Result<String, CarScoutError> {
        Ok(format_recommendation(&self.recommend(query, cars).await?))
    }
}

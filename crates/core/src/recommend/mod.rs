//! Scent profile scoring and product recommendations
//!
//! Folds quiz answers into a normalized [`ScentProfile`], classifies its
//! dominant family, and ranks the catalog against it.

mod family;
mod profile;
mod ranker;
mod weights;

pub use family::family_from_profile;
pub use profile::{calculate_scent_profile, ProfileCalculator};
pub use ranker::{get_recommendations, MatchStrength, Recommendation, RecommendationRanker};
pub use weights::{CategoryWeights, DEFAULT_CATEGORY_WEIGHTS};

use serde::Serialize;

use crate::domain::profile::{ScentFamily, ScentProfile, ScentWeights};
use crate::domain::quiz::QuizAnswer;

/// Bonus added to featured products.
pub const FEATURED_BONUS: f64 = 0.1;

/// Bonus added to products that are in stock.
pub const IN_STOCK_BONUS: f64 = 0.05;

/// Upper bound of a compatibility score.
pub const MAX_SCORE: f64 = 1.0;

/// Recommendations returned when the caller does not ask for a count.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 6;

/// Weights used for a category missing from the weight table.
pub const FALLBACK_CATEGORY_WEIGHTS: ScentWeights = ScentWeights::new(0.5, 0.5, 0.5, 0.5);

/// Everything the results view needs after a completed quiz.
#[derive(Clone, Debug, Serialize)]
pub struct QuizOutcome<'a> {
    pub profile: ScentProfile,
    pub family: ScentFamily,
    pub recommendations: Vec<Recommendation<'a>>,
}

/// Scores answers against the storefront catalog.
pub fn evaluate_answers(answers: &[QuizAnswer], limit: usize) -> QuizOutcome<'static> {
    let profile = calculate_scent_profile(answers);
    QuizOutcome {
        profile,
        family: family_from_profile(&profile),
        recommendations: RecommendationRanker::storefront().rank(&profile, limit),
    }
}

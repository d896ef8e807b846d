use serde::Serialize;

use crate::catalog::{self, Catalog};
use crate::domain::product::{Availability, Product};
use crate::domain::profile::ScentProfile;

use super::family::family_from_profile;
use super::weights::CategoryWeights;
use super::{FEATURED_BONUS, IN_STOCK_BONUS, MAX_SCORE};

/// How well a product matches a profile, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    /// score >= 0.85
    Excellent,
    /// score 0.70 - 0.84
    Strong,
    /// score 0.50 - 0.69
    Good,
    Fair,
}

impl MatchStrength {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.85 {
            MatchStrength::Excellent
        } else if score >= 0.70 {
            MatchStrength::Strong
        } else if score >= 0.50 {
            MatchStrength::Good
        } else {
            MatchStrength::Fair
        }
    }

    pub fn display_percentage(&self, score: f64) -> String {
        format!("{:.0}% match", score * 100.0)
    }
}

/// A ranked product with its compatibility score.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub product: &'a Product,
    /// Compatibility score, at most 1.0
    pub score: f64,
    pub match_strength: MatchStrength,
    /// Human-readable reasons
    pub reasons: Vec<String>,
}

/// Ranks catalog products against a scent profile.
#[derive(Debug, Clone)]
pub struct RecommendationRanker<'a> {
    catalog: &'a Catalog,
    weights: CategoryWeights,
}

impl RecommendationRanker<'static> {
    /// Ranker over the storefront catalog with the default category weights.
    pub fn storefront() -> Self {
        Self::new(catalog::storefront())
    }
}

impl<'a> RecommendationRanker<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog, weights: CategoryWeights::default() }
    }

    pub fn with_weights(mut self, weights: CategoryWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Category dot product plus featured/in-stock bonuses, capped at 1.0.
    pub fn score(&self, profile: &ScentProfile, product: &Product) -> f64 {
        let mut score = profile.dot(&self.weights.weights_for(product.category));

        if product.featured {
            score += FEATURED_BONUS;
        }
        if product.is_in_stock() {
            score += IN_STOCK_BONUS;
        }

        score.min(MAX_SCORE)
    }

    /// Top `limit` products by descending score. Equal scores keep catalog
    /// order. A `limit` of zero is treated as one.
    pub fn rank(&self, profile: &ScentProfile, limit: usize) -> Vec<Recommendation<'a>> {
        let limit = limit.max(1);
        let mut ranked: Vec<Recommendation<'a>> = self
            .catalog
            .products()
            .iter()
            .map(|product| {
                let score = self.score(profile, product);
                Recommendation {
                    product,
                    score,
                    match_strength: MatchStrength::from_score(score),
                    reasons: self.reasons(profile, product),
                }
            })
            .collect();

        // `sort_by` is stable, which gives the catalog-order tie-break.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(limit);
        ranked
    }

    fn reasons(&self, profile: &ScentProfile, product: &Product) -> Vec<String> {
        let mut reasons = Vec::new();

        let affinity = profile.dot(&self.weights.weights_for(product.category));
        if affinity >= 0.5 {
            reasons.push(format!("Close to your {} profile", family_from_profile(profile)));
        }

        if product.featured {
            reasons.push("A house favourite".to_string());
        }

        match product.availability {
            Availability::InStock => reasons.push("In stock and ready to ship".to_string()),
            Availability::Limited => reasons.push("Limited batch, while stock lasts".to_string()),
            Availability::OutOfStock => {}
        }

        if reasons.is_empty() {
            reasons.push(format!("From our {} family", product.category));
        }

        reasons
    }
}

/// Top `limit` storefront products for `profile`.
pub fn get_recommendations(profile: &ScentProfile, limit: usize) -> Vec<&'static Product> {
    RecommendationRanker::storefront()
        .rank(profile, limit)
        .into_iter()
        .map(|recommendation| recommendation.product)
        .collect()
}

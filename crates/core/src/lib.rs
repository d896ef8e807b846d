pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod quiz;
pub mod recommend;
pub mod session;

pub use catalog::{storefront, Catalog};
pub use domain::product::{Availability, Category, Collection, Mood, Product, ProductId};
pub use domain::profile::{ScentFamily, ScentProfile, ScentWeights};
pub use domain::quiz::{QuizAnswer, QuizOption, QuizQuestion};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use quiz::{validate_answers, QuizProgress};
pub use recommend::{
    calculate_scent_profile, evaluate_answers, family_from_profile, get_recommendations,
    MatchStrength, QuizOutcome, Recommendation, RecommendationRanker,
};
pub use session::{QuizSession, SessionCodec, SessionError, SessionToken};

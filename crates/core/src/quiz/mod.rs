//! Scent quiz definitions
//!
//! The question list is the single source of truth for the answer weight
//! table: every option carries the weight vector it contributes to a
//! profile.

mod progress;

pub use progress::{validate_answers, QuizProgress};

use crate::domain::profile::ScentWeights;
use crate::domain::quiz::{QuizOption, QuizQuestion};

const fn option(id: &'static str, label: &'static str, weights: ScentWeights) -> QuizOption {
    QuizOption { id, label, weights }
}

const MOOD_OPTIONS: &[QuizOption] = &[
    option("bold-mysterious", "Bold & mysterious", ScentWeights::new(0.8, 0.4, 0.2, 0.3)),
    option("warm-romantic", "Warm & romantic", ScentWeights::new(0.3, 0.8, 0.5, 0.4)),
    option("fresh-uplifting", "Fresh & uplifting", ScentWeights::new(0.1, 0.2, 0.9, 0.2)),
    option("sweet-playful", "Sweet & playful", ScentWeights::new(0.2, 0.4, 0.3, 0.9)),
];

const OCCASION_OPTIONS: &[QuizOption] = &[
    option("evening-events", "Evening events", ScentWeights::new(0.7, 0.6, 0.2, 0.3)),
    option("everyday", "Everyday wear", ScentWeights::new(0.2, 0.4, 0.7, 0.4)),
    option("celebrations", "Special celebrations", ScentWeights::new(0.5, 0.7, 0.4, 0.6)),
    option("intimate-moments", "Intimate moments", ScentWeights::new(0.6, 0.7, 0.3, 0.7)),
];

const SEASON_OPTIONS: &[QuizOption] = &[
    option("autumn-winter", "Autumn & winter", ScentWeights::new(0.7, 0.7, 0.1, 0.6)),
    option("spring", "Spring", ScentWeights::new(0.1, 0.3, 0.9, 0.3)),
    option("summer", "Summer", ScentWeights::new(0.1, 0.3, 0.8, 0.2)),
    option("all-year", "All year round", ScentWeights::new(0.4, 0.5, 0.5, 0.4)),
];

const INTENSITY_OPTIONS: &[QuizOption] = &[
    option("subtle", "Subtle, close to the skin", ScentWeights::new(0.1, 0.3, 0.8, 0.3)),
    option("moderate", "Noticeable but soft", ScentWeights::new(0.3, 0.6, 0.5, 0.5)),
    option("strong", "Long-lasting sillage", ScentWeights::new(0.7, 0.6, 0.2, 0.5)),
    option("statement", "A statement in every room", ScentWeights::new(0.9, 0.5, 0.1, 0.4)),
];

const NOTES_OPTIONS: &[QuizOption] = &[
    option("smoky-woods", "Smoky woods & oud", ScentWeights::new(0.9, 0.4, 0.1, 0.2)),
    option("resins-spices", "Resins & spices", ScentWeights::new(0.4, 0.9, 0.2, 0.4)),
    option("flowers-citrus", "Flowers & citrus", ScentWeights::new(0.1, 0.2, 0.9, 0.2)),
    option("vanilla-sweets", "Vanilla & sweet accords", ScentWeights::new(0.1, 0.4, 0.2, 0.9)),
];

const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        id: "mood",
        prompt: "Which mood do you want your fragrance to carry?",
        options: MOOD_OPTIONS,
    },
    QuizQuestion {
        id: "occasion",
        prompt: "When will you wear it most?",
        options: OCCASION_OPTIONS,
    },
    QuizQuestion { id: "season", prompt: "Which season feels most like you?", options: SEASON_OPTIONS },
    QuizQuestion {
        id: "intensity",
        prompt: "How present should the scent be?",
        options: INTENSITY_OPTIONS,
    },
    QuizQuestion { id: "notes", prompt: "Which notes draw you in?", options: NOTES_OPTIONS },
];

/// The ordered quiz.
pub fn questions() -> &'static [QuizQuestion] {
    QUESTIONS
}

pub fn question(question_id: &str) -> Option<&'static QuizQuestion> {
    QUESTIONS.iter().find(|question| question.id == question_id)
}

/// Answer weight table lookup keyed by `(question, option)`.
pub fn answer_weights(question_id: &str, option_id: &str) -> Option<ScentWeights> {
    question(question_id).and_then(|question| question.option(option_id)).map(|option| option.weights)
}

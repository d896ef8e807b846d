use serde::{Deserialize, Serialize};

use super::profile::ScentWeights;

pub const DEFAULT_ANSWER_WEIGHT: f64 = 1.0;

fn default_answer_weight() -> f64 {
    DEFAULT_ANSWER_WEIGHT
}

/// One answered quiz question. Keys are camelCase on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub question_id: String,
    pub answer: String,
    #[serde(default = "default_answer_weight")]
    pub weight: f64,
}

impl QuizAnswer {
    pub fn new(question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            answer: answer.into(),
            weight: DEFAULT_ANSWER_WEIGHT,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct QuizOption {
    pub id: &'static str,
    pub label: &'static str,
    pub weights: ScentWeights,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

impl QuizQuestion {
    pub fn option(&self, option_id: &str) -> Option<&'static QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

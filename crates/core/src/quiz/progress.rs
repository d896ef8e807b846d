use std::collections::HashSet;

use crate::domain::quiz::{QuizAnswer, QuizQuestion};
use crate::errors::DomainError;

use super::{question, questions};

/// Linear walk through the quiz, one answer per question.
#[derive(Clone, Debug, Default)]
pub struct QuizProgress {
    answers: Vec<QuizAnswer>,
}

impl QuizProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// The question awaiting an answer, or `None` once the quiz is complete.
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        questions().get(self.answers.len())
    }

    pub fn answer(&mut self, option_id: &str) -> Result<Option<&'static QuizQuestion>, DomainError> {
        let current = self.current_question().ok_or(DomainError::QuizComplete)?;
        if current.option(option_id).is_none() {
            return Err(DomainError::UnknownOption {
                question: current.id.to_string(),
                option: option_id.to_string(),
            });
        }

        self.answers.push(QuizAnswer::new(current.id, option_id));
        Ok(self.current_question())
    }

    /// Drops the most recent answer and returns the question it belonged to.
    pub fn back(&mut self) -> Option<&'static QuizQuestion> {
        self.answers.pop()?;
        self.current_question()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= questions().len()
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.answers.len(), questions().len())
    }

    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    pub fn into_answers(self) -> Vec<QuizAnswer> {
        self.answers
    }
}

/// Strict validation for answers arriving from outside the process.
///
/// The profile calculator ignores unknown pairs; callers that accept answer
/// lists over the wire reject them up front instead.
pub fn validate_answers(answers: &[QuizAnswer]) -> Result<(), DomainError> {
    if answers.is_empty() {
        return Err(DomainError::EmptyAnswers);
    }

    let mut seen = HashSet::new();
    for answer in answers {
        let question = question(&answer.question_id)
            .ok_or_else(|| DomainError::UnknownQuestion(answer.question_id.clone()))?;
        if question.option(&answer.answer).is_none() {
            return Err(DomainError::UnknownOption {
                question: answer.question_id.clone(),
                option: answer.answer.clone(),
            });
        }
        if !answer.weight.is_finite() || answer.weight < 0.0 {
            return Err(DomainError::InvalidWeight { question: answer.question_id.clone() });
        }
        if !seen.insert(question.id) {
            return Err(DomainError::DuplicateAnswer(answer.question_id.clone()));
        }
    }

    Ok(())
}

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::profile::{ScentProfile, ScentWeights};
use crate::domain::quiz::QuizAnswer;
use crate::quiz;

type AnswerLookup = fn(&str, &str) -> Option<ScentWeights>;

/// Folds quiz answers into a normalized scent profile.
#[derive(Clone, Copy, Debug)]
pub struct ProfileCalculator {
    lookup: AnswerLookup,
}

impl Default for ProfileCalculator {
    fn default() -> Self {
        Self { lookup: quiz::answer_weights }
    }
}

impl ProfileCalculator {
    /// Calculator backed by a custom answer weight table.
    pub fn with_lookup(lookup: AnswerLookup) -> Self {
        Self { lookup }
    }

    /// Unknown `(question, option)` pairs and answers whose weight is negative
    /// or not finite contribute nothing. An empty or fully unmatched input
    /// yields the all-zero profile.
    pub fn calculate(&self, answers: &[QuizAnswer]) -> ScentProfile {
        // Fold in a canonical order so permutations of the same answers give
        // bit-identical sums.
        let mut ordered: Vec<&QuizAnswer> = answers.iter().collect();
        ordered.sort_by(|a, b| canonical_order(a, b));

        let mut profile = ScentWeights::ZERO;
        let mut unmatched = 0usize;
        for answer in ordered {
            if !answer.weight.is_finite() || answer.weight < 0.0 {
                unmatched += 1;
                continue;
            }
            match (self.lookup)(&answer.question_id, &answer.answer) {
                Some(weights) => profile += weights.scaled(answer.weight),
                None => unmatched += 1,
            }
        }

        if unmatched > 0 {
            debug!(
                event_name = "quiz.profile.unmatched_answers",
                unmatched,
                total = answers.len(),
                "ignored quiz answers without usable weights"
            );
        }

        let total = profile.total();
        if total > 0.0 {
            ScentWeights::new(
                profile.oud / total,
                profile.amber / total,
                profile.floral / total,
                profile.gourmand / total,
            )
        } else {
            profile
        }
    }
}

fn canonical_order(a: &QuizAnswer, b: &QuizAnswer) -> Ordering {
    a.question_id
        .cmp(&b.question_id)
        .then_with(|| a.answer.cmp(&b.answer))
        .then_with(|| a.weight.total_cmp(&b.weight))
}

/// Profile for `answers` using the storefront quiz weights.
pub fn calculate_scent_profile(answers: &[QuizAnswer]) -> ScentProfile {
    ProfileCalculator::default().calculate(answers)
}

#[cfg(test)]
mod tests {
    use super::{calculate_scent_profile, ProfileCalculator};
    use crate::domain::profile::ScentWeights;
    use crate::domain::quiz::QuizAnswer;

    const TOLERANCE: f64 = 1e-9;

    fn full_quiz() -> Vec<QuizAnswer> {
        vec![
            QuizAnswer::new("mood", "bold-mysterious"),
            QuizAnswer::new("occasion", "evening-events"),
            QuizAnswer::new("season", "autumn-winter"),
            QuizAnswer::new("intensity", "statement"),
            QuizAnswer::new("notes", "smoky-woods"),
        ]
    }

    #[test]
    fn single_bold_mysterious_answer_matches_reference_profile() {
        let profile = calculate_scent_profile(&[QuizAnswer::new("mood", "bold-mysterious")]);

        // 0.8 / 1.7, 0.4 / 1.7, 0.2 / 1.7, 0.3 / 1.7
        assert!((profile.oud - 0.4706).abs() < 1e-4);
        assert!((profile.amber - 0.2353).abs() < 1e-4);
        assert!((profile.floral - 0.1176).abs() < 1e-4);
        assert!((profile.gourmand - 0.1765).abs() < 1e-4);
    }

    #[test]
    fn matched_answers_normalize_to_one() {
        let profile = calculate_scent_profile(&full_quiz());
        assert!((profile.total() - 1.0).abs() < TOLERANCE);
        assert!(profile.oud > profile.floral);
    }

    #[test]
    fn empty_input_yields_zero_profile() {
        assert_eq!(calculate_scent_profile(&[]), ScentWeights::ZERO);
    }

    #[test]
    fn unmatched_answers_are_ignored() {
        let only_unknown = calculate_scent_profile(&[
            QuizAnswer::new("budget", "premium"),
            QuizAnswer::new("mood", "sleepy"),
        ]);
        assert_eq!(only_unknown, ScentWeights::ZERO);

        let mixed = calculate_scent_profile(&[
            QuizAnswer::new("mood", "bold-mysterious"),
            QuizAnswer::new("budget", "premium"),
        ]);
        assert_eq!(mixed, calculate_scent_profile(&[QuizAnswer::new("mood", "bold-mysterious")]));
    }

    #[test]
    fn permutations_give_identical_profiles() {
        let answers = full_quiz();
        let baseline = calculate_scent_profile(&answers);

        let mut reversed = answers.clone();
        reversed.reverse();
        assert_eq!(calculate_scent_profile(&reversed), baseline);

        let mut rotated = answers;
        rotated.rotate_left(2);
        assert_eq!(calculate_scent_profile(&rotated), baseline);
    }

    #[test]
    fn answer_weight_scales_contribution() {
        let profile = calculate_scent_profile(&[
            QuizAnswer::new("mood", "bold-mysterious").with_weight(3.0),
            QuizAnswer::new("notes", "flowers-citrus"),
        ]);
        let unweighted = calculate_scent_profile(&[
            QuizAnswer::new("mood", "bold-mysterious"),
            QuizAnswer::new("notes", "flowers-citrus"),
        ]);
        assert!(profile.oud > unweighted.oud);
        assert!((profile.total() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_weight_answers_leave_profile_degenerate() {
        let profile =
            calculate_scent_profile(&[QuizAnswer::new("mood", "bold-mysterious").with_weight(0.0)]);
        assert_eq!(profile, ScentWeights::ZERO);
    }

    #[test]
    fn negative_and_non_finite_weights_are_skipped() {
        let baseline = calculate_scent_profile(&[QuizAnswer::new("mood", "bold-mysterious")]);

        for weight in [-0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let profile = calculate_scent_profile(&[
                QuizAnswer::new("mood", "bold-mysterious"),
                QuizAnswer::new("notes", "flowers-citrus").with_weight(weight),
            ]);
            assert_eq!(profile, baseline);
            assert!(profile.floral >= 0.0);
        }
    }

    #[test]
    fn custom_lookup_replaces_quiz_table() {
        fn gourmand_only(_: &str, _: &str) -> Option<ScentWeights> {
            Some(ScentWeights::new(0.0, 0.0, 0.0, 2.0))
        }

        let profile = ProfileCalculator::with_lookup(gourmand_only)
            .calculate(&[QuizAnswer::new("anything", "at-all")]);
        assert_eq!(profile, ScentWeights::new(0.0, 0.0, 0.0, 1.0));
    }
}

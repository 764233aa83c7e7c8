//! Adoption preference quiz: definition, rule table, answer analysis and
//! completion scoring.

pub mod analyzer;
pub mod completion;
pub mod definition;
pub mod rules;

pub use analyzer::{Analysis, SpeciesScores, TraitPreference, TraitPreferences, TraitValue};
pub use completion::completion_score;
pub use definition::QuizDefinition;
pub use rules::{AnswerRule, STANDARD_RULES};

/// Raw answers as submitted: `section_id -> question_id -> value`, where a
/// value is a string (single choice) or a list of strings (multiple choice).
pub type Answers = serde_json::Map<String, serde_json::Value>;

/// A quiz definition paired with the rule table that scores it.
///
/// Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Quiz {
    pub definition: QuizDefinition,
    pub rules: &'static [AnswerRule],
}

impl Quiz {
    pub fn standard() -> Self {
        Self::with_rules(QuizDefinition::standard(), STANDARD_RULES)
    }

    pub fn with_rules(definition: QuizDefinition, rules: &'static [AnswerRule]) -> Self {
        Self { definition, rules }
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

//! Answer rule table.
//!
//! Each rule keys on a `(section, question, answer)` triple and carries a
//! [`RuleEffect`]. The analyzer iterates the table in order; adding behaviour
//! means appending a rule, never adding a branch.

use serde_json::Value;

use crate::species::Species;

/// How a species contribution is scaled when a rule fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scaling {
    /// Multiplied by the question's configured weight.
    QuestionWeight,
    /// Added as-is.
    Unweighted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesDelta {
    pub species: Species,
    pub points: f64,
    pub scaling: Scaling,
}

impl SpeciesDelta {
    pub fn resolve(&self, weight: f64) -> f64 {
        match self.scaling {
            Scaling::QuestionWeight => self.points * weight,
            Scaling::Unweighted => self.points,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleEffect {
    pub species: &'static [SpeciesDelta],
    pub traits: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerRule {
    pub section: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub effect: RuleEffect,
}

impl AnswerRule {
    /// Whether a submitted answer value selects this rule's option.
    ///
    /// Single-choice answers match by equality; multiple-choice answers match
    /// when the list contains the option.
    pub fn matches(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => s == self.answer,
            Value::Array(items) => items.iter().any(|v| v.as_str() == Some(self.answer)),
            _ => false,
        }
    }
}

const fn weighted(species: Species, points: f64) -> SpeciesDelta {
    SpeciesDelta {
        species,
        points,
        scaling: Scaling::QuestionWeight,
    }
}

const fn unweighted(species: Species, points: f64) -> SpeciesDelta {
    SpeciesDelta {
        species,
        points,
        scaling: Scaling::Unweighted,
    }
}

/// The rule set used in production.
pub static STANDARD_RULES: &[AnswerRule] = &[
    AnswerRule {
        section: "living_situation",
        question: "living_space",
        answer: "house_large",
        effect: RuleEffect {
            species: &[weighted(Species::Dog, 2.0)],
            traits: &["High Energy", "Easily Trained"],
        },
    },
    AnswerRule {
        section: "living_situation",
        question: "living_space",
        answer: "apartment_small",
        effect: RuleEffect {
            species: &[weighted(Species::Cat, 2.0)],
            traits: &["Apartment Friendly", "Calm"],
        },
    },
    AnswerRule {
        section: "lifestyle",
        question: "activity_level",
        answer: "very_active",
        effect: RuleEffect {
            species: &[weighted(Species::Dog, 2.0)],
            traits: &["High Energy"],
        },
    },
    AnswerRule {
        section: "lifestyle",
        question: "activity_level",
        answer: "moderate",
        effect: RuleEffect {
            species: &[],
            traits: &["Easily Trained"],
        },
    },
    AnswerRule {
        section: "lifestyle",
        question: "activity_level",
        answer: "sedentary",
        effect: RuleEffect {
            species: &[unweighted(Species::Cat, 1.5)],
            traits: &["Calm"],
        },
    },
];

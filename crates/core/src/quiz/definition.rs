//! The adoption preference quiz: sections, questions and options.
//!
//! The definition is static configuration served verbatim to clients. Only
//! questions that feed species scoring carry an explicit weight.

use serde::Serialize;

/// Weight applied to scoring questions that do not declare one.
pub const DEFAULT_QUESTION_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    #[serde(rename = "question")]
    pub prompt: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub options: Vec<QuizOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Question {
    pub fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizDefinition {
    pub version: &'static str,
    pub estimated_time: &'static str,
    pub sections: Vec<Section>,
}

impl QuizDefinition {
    pub fn total_sections(&self) -> usize {
        self.sections.len()
    }

    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    pub fn question(&self, section_id: &str, question_id: &str) -> Option<&Question> {
        self.sections
            .iter()
            .find(|s| s.id == section_id)?
            .questions
            .iter()
            .find(|q| q.id == question_id)
    }

    /// Scoring weight of a question, [`DEFAULT_QUESTION_WEIGHT`] when unset
    /// or when the question is unknown.
    pub fn weight(&self, section_id: &str, question_id: &str) -> f64 {
        self.question(section_id, question_id)
            .and_then(|q| q.weight)
            .unwrap_or(DEFAULT_QUESTION_WEIGHT)
    }

    /// The quiz shipped with the marketplace.
    pub fn standard() -> Self {
        use QuestionType::{MultipleChoice, SingleChoice};

        Self {
            version: "1.0",
            estimated_time: "5-10 minutes",
            sections: vec![
                Section {
                    id: "living_situation",
                    title: "Your Living Situation",
                    questions: vec![
                        question(
                            "living_space",
                            "What best describes your home?",
                            SingleChoice,
                            &[
                                ("house_large", "House with a large yard"),
                                ("house_small", "House with a small yard"),
                                ("apartment_large", "Large apartment"),
                                ("apartment_small", "Small apartment or studio"),
                            ],
                            Some(2.0),
                        ),
                        question(
                            "household",
                            "Who else lives with you?",
                            MultipleChoice,
                            &[
                                ("children", "Children"),
                                ("dogs", "Other dogs"),
                                ("cats", "Other cats"),
                                ("alone", "I live alone"),
                            ],
                            None,
                        ),
                        question(
                            "time_at_home",
                            "How much of the day is someone at home?",
                            SingleChoice,
                            &[
                                ("most_of_day", "Most of the day"),
                                ("half_day", "About half the day"),
                                ("rarely", "Rarely"),
                            ],
                            None,
                        ),
                    ],
                },
                Section {
                    id: "lifestyle",
                    title: "Your Lifestyle",
                    questions: vec![
                        question(
                            "activity_level",
                            "How active is your typical week?",
                            SingleChoice,
                            &[
                                ("very_active", "Very active, daily runs or hikes"),
                                ("moderate", "Moderate, regular walks"),
                                ("sedentary", "Mostly relaxed at home"),
                            ],
                            Some(1.5),
                        ),
                        question(
                            "travel_frequency",
                            "How often do you travel?",
                            SingleChoice,
                            &[
                                ("often", "Several times a month"),
                                ("sometimes", "A few times a year"),
                                ("rarely", "Rarely"),
                            ],
                            None,
                        ),
                    ],
                },
                Section {
                    id: "experience",
                    title: "Pet Experience",
                    questions: vec![
                        question(
                            "pet_experience",
                            "Have you owned a pet before?",
                            SingleChoice,
                            &[
                                ("first_time", "This would be my first pet"),
                                ("some", "I have had a pet before"),
                                ("experienced", "I have cared for many pets"),
                            ],
                            None,
                        ),
                        question(
                            "training_commitment",
                            "How much time can you spend on training?",
                            SingleChoice,
                            &[
                                ("high", "Daily sessions"),
                                ("medium", "A few times a week"),
                                ("low", "As little as possible"),
                            ],
                            None,
                        ),
                    ],
                },
                Section {
                    id: "preferences",
                    title: "Your Preferences",
                    questions: vec![
                        question(
                            "size_preference",
                            "What size of pet would you prefer?",
                            SingleChoice,
                            &[
                                ("small", "Small"),
                                ("medium", "Medium"),
                                ("large", "Large"),
                                ("no_preference", "No preference"),
                            ],
                            None,
                        ),
                        question(
                            "grooming_tolerance",
                            "How much grooming are you comfortable with?",
                            SingleChoice,
                            &[
                                ("high", "Frequent grooming is fine"),
                                ("medium", "Occasional brushing"),
                                ("low", "Minimal grooming"),
                            ],
                            None,
                        ),
                        question(
                            "desired_traits",
                            "Which qualities matter most to you?",
                            MultipleChoice,
                            &[
                                ("affectionate", "Affectionate"),
                                ("playful", "Playful"),
                                ("independent", "Independent"),
                                ("quiet", "Quiet"),
                            ],
                            None,
                        ),
                    ],
                },
            ],
        }
    }
}

fn question(
    id: &'static str,
    prompt: &'static str,
    kind: QuestionType,
    options: &[(&'static str, &'static str)],
    weight: Option<f64>,
) -> Question {
    Question {
        id,
        prompt,
        kind,
        options: options
            .iter()
            .map(|&(id, label)| QuizOption { id, label })
            .collect(),
        weight,
    }
}

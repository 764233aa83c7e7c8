//! Quiz submission and result models.

use pawmatch_core::quiz::{Analysis, Answers, SpeciesScores, TraitPreferences};
use pawmatch_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `quiz_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuizSubmission {
    pub id: DbId,
    pub user_id: DbId,
    pub answers: Json<Answers>,
    pub quiz_date: Timestamp,
}

/// A row from the `quiz_results` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuizResult {
    pub id: DbId,
    pub quiz_id: DbId,
    pub recommended_species: Option<String>,
    pub recommended_breed: Option<String>,
    pub trait_preferences: Json<TraitPreferences>,
    pub species_scores: Json<SpeciesScores>,
    pub confidence_score: f64,
    pub created_at: Timestamp,
}

/// A submission joined with its result, as listed in a user's history.
#[derive(Debug, Clone, FromRow)]
pub struct QuizHistoryRow {
    pub quiz_id: DbId,
    pub quiz_date: Timestamp,
    pub recommended_species: Option<String>,
    pub recommended_breed: Option<String>,
    pub trait_preferences: Json<TraitPreferences>,
    pub confidence_score: f64,
}

/// Values persisted for a freshly analyzed submission.
#[derive(Debug, Clone)]
pub struct NewQuizResult {
    pub recommended_species: Option<String>,
    pub recommended_breed: Option<String>,
    pub trait_preferences: TraitPreferences,
    pub species_scores: SpeciesScores,
    pub confidence_score: f64,
}

impl NewQuizResult {
    pub fn from_analysis(analysis: &Analysis, confidence_score: f64) -> Self {
        Self {
            recommended_species: Some(analysis.recommended_species.as_str().to_string()),
            recommended_breed: analysis.recommended_breed.clone(),
            trait_preferences: analysis.trait_preferences.clone(),
            species_scores: analysis.species_scores,
            confidence_score: confidence_score.clamp(0.0, 100.0),
        }
    }
}

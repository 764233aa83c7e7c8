//! Handlers for the adoption preference quiz.
//!
//! `start_quiz` is public; every other endpoint requires [`AuthUser`] and
//! only ever exposes the caller's own submissions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawmatch_core::error::CoreError;
use pawmatch_core::quiz::{completion_score, Answers, QuizDefinition, SpeciesScores, TraitPreferences};
use pawmatch_core::species::Species;
use pawmatch_core::types::{DbId, Timestamp};
use pawmatch_db::models::pet::MatchingPet;
use pawmatch_db::models::quiz::NewQuizResult;
use pawmatch_db::repositories::{PetRepo, QuizRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of `POST /api/quiz/submit`.
#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub answers: Answers,
}

#[derive(Debug, Serialize)]
pub struct QuizStartResponse {
    pub questions: QuizDefinition,
    pub total_sections: usize,
    pub total_questions: usize,
    pub estimated_time: &'static str,
}

/// Recommendation block shared by submit, history and result responses.
#[derive(Debug, Serialize)]
pub struct Recommendations {
    pub species: Option<String>,
    pub breed: Option<String>,
    pub traits: TraitPreferences,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species_scores: Option<SpeciesScores>,
}

#[derive(Debug, Serialize)]
pub struct QuizSubmitResponse {
    pub quiz_id: DbId,
    pub result_id: DbId,
    pub recommendations: Recommendations,
    pub confidence_score: f64,
    pub matching_pets: Vec<MatchingPet>,
}

#[derive(Debug, Serialize)]
pub struct QuizHistoryEntry {
    pub quiz_id: DbId,
    pub date_taken: Timestamp,
    pub recommendations: Recommendations,
    pub confidence_score: f64,
}

#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub quiz_id: DbId,
    pub result_id: DbId,
    pub date_taken: Timestamp,
    pub answers: Answers,
    pub recommendations: Recommendations,
    pub confidence_score: f64,
    pub matching_pets: Vec<MatchingPet>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/quiz/start
///
/// Serve the quiz definition. No authentication required.
pub async fn start_quiz(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let definition = &state.quiz.definition;

    Ok(Json(DataResponse::new(QuizStartResponse {
        total_sections: definition.total_sections(),
        total_questions: definition.total_questions(),
        estimated_time: definition.estimated_time,
        questions: definition.clone(),
    })))
}

/// POST /api/quiz/submit
///
/// Analyze the answers, persist the submission with its result, and return
/// the recommendation together with matching pets.
pub async fn submit_quiz(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<SubmitQuizRequest>,
) -> AppResult<impl IntoResponse> {
    let analysis = state.quiz.analyze(&input.answers);
    let confidence_score = completion_score(&input.answers);
    let new_result = NewQuizResult::from_analysis(&analysis, confidence_score);

    let (submission, result) =
        QuizRepo::create_with_result(&state.pool, auth.user_id, &input.answers, &new_result)
            .await?;

    let desired_traits = analysis.trait_preferences.names();
    let matching_pets =
        PetRepo::find_matches(&state.pool, analysis.recommended_species, &desired_traits).await?;

    tracing::info!(
        quiz_id = submission.id,
        user_id = auth.user_id,
        species = %analysis.recommended_species,
        confidence_score = result.confidence_score,
        matches = matching_pets.len(),
        "Quiz submitted",
    );

    let response = QuizSubmitResponse {
        quiz_id: submission.id,
        result_id: result.id,
        recommendations: Recommendations {
            species: result.recommended_species,
            breed: result.recommended_breed,
            traits: result.trait_preferences.0,
            species_scores: Some(result.species_scores.0),
        },
        confidence_score: result.confidence_score,
        matching_pets,
    };

    Ok((StatusCode::CREATED, Json(DataResponse::new(response))))
}

/// GET /api/quiz/history
///
/// The caller's quiz attempts, newest first.
pub async fn quiz_history(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = QuizRepo::history(&state.pool, auth.user_id).await?;

    let entries: Vec<QuizHistoryEntry> = rows
        .into_iter()
        .map(|row| QuizHistoryEntry {
            quiz_id: row.quiz_id,
            date_taken: row.quiz_date,
            recommendations: Recommendations {
                species: row.recommended_species,
                breed: row.recommended_breed,
                traits: row.trait_preferences.0,
                species_scores: None,
            },
            confidence_score: row.confidence_score,
        })
        .collect();

    Ok(Json(DataResponse::new(entries)))
}

/// GET /api/quiz/result/{quiz_id}
///
/// A stored result with freshly computed matches. Requesting another user's
/// quiz is a 400.
pub async fn quiz_result(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(quiz_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = QuizRepo::find_submission(&state.pool, quiz_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Quiz",
            id: quiz_id,
        }))?;

    if submission.user_id != auth.user_id {
        return Err(AppError::BadRequest(
            "Quiz does not belong to the current user".into(),
        ));
    }

    let result = QuizRepo::find_result_by_quiz(&state.pool, quiz_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "QuizResult",
            id: quiz_id,
        }))?;

    let desired_traits = result.trait_preferences.0.names();
    let matching_pets = match result.recommended_species.as_deref().map(Species::parse) {
        Some(Ok(species)) => PetRepo::find_matches(&state.pool, species, &desired_traits).await?,
        _ => Vec::new(),
    };

    let response = QuizResultResponse {
        quiz_id: submission.id,
        result_id: result.id,
        date_taken: submission.quiz_date,
        answers: submission.answers.0,
        recommendations: Recommendations {
            species: result.recommended_species,
            breed: result.recommended_breed,
            traits: result.trait_preferences.0,
            species_scores: Some(result.species_scores.0),
        },
        confidence_score: result.confidence_score,
        matching_pets,
    };

    Ok(Json(DataResponse::new(response)))
}

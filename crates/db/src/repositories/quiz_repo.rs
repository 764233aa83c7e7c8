//! Repository for the `quiz_submissions` and `quiz_results` tables.

use pawmatch_core::quiz::Answers;
use pawmatch_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::quiz::{NewQuizResult, QuizHistoryRow, QuizResult, QuizSubmission};

/// Column list for `quiz_submissions` queries.
const SUBMISSION_COLUMNS: &str = "id, user_id, answers, quiz_date";

/// Column list for `quiz_results` queries.
const RESULT_COLUMNS: &str = "\
    id, quiz_id, recommended_species, recommended_breed, trait_preferences, \
    species_scores, confidence_score, created_at";

/// Persists quiz attempts and their analyzed results.
pub struct QuizRepo;

impl QuizRepo {
    /// Insert a submission and its result in one transaction.
    ///
    /// Either both rows exist afterwards or neither does.
    pub async fn create_with_result(
        pool: &PgPool,
        user_id: DbId,
        answers: &Answers,
        result: &NewQuizResult,
    ) -> Result<(QuizSubmission, QuizResult), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let submission_query = format!(
            "INSERT INTO quiz_submissions (user_id, answers) \
             VALUES ($1, $2) \
             RETURNING {SUBMISSION_COLUMNS}"
        );
        let submission = sqlx::query_as::<_, QuizSubmission>(&submission_query)
            .bind(user_id)
            .bind(Json(answers))
            .fetch_one(&mut *tx)
            .await?;

        let result_query = format!(
            "INSERT INTO quiz_results \
                 (quiz_id, recommended_species, recommended_breed, trait_preferences, \
                  species_scores, confidence_score) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {RESULT_COLUMNS}"
        );
        let stored = sqlx::query_as::<_, QuizResult>(&result_query)
            .bind(submission.id)
            .bind(&result.recommended_species)
            .bind(&result.recommended_breed)
            .bind(Json(&result.trait_preferences))
            .bind(Json(&result.species_scores))
            .bind(result.confidence_score)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((submission, stored))
    }

    /// Find a submission by its quiz ID.
    pub async fn find_submission(
        pool: &PgPool,
        quiz_id: DbId,
    ) -> Result<Option<QuizSubmission>, sqlx::Error> {
        let query = format!("SELECT {SUBMISSION_COLUMNS} FROM quiz_submissions WHERE id = $1");
        sqlx::query_as::<_, QuizSubmission>(&query)
            .bind(quiz_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the result recorded for a submission.
    pub async fn find_result_by_quiz(
        pool: &PgPool,
        quiz_id: DbId,
    ) -> Result<Option<QuizResult>, sqlx::Error> {
        let query = format!("SELECT {RESULT_COLUMNS} FROM quiz_results WHERE quiz_id = $1");
        sqlx::query_as::<_, QuizResult>(&query)
            .bind(quiz_id)
            .fetch_optional(pool)
            .await
    }

    /// A user's quiz attempts with their results, newest first.
    pub async fn history(pool: &PgPool, user_id: DbId) -> Result<Vec<QuizHistoryRow>, sqlx::Error> {
        sqlx::query_as::<_, QuizHistoryRow>(
            "SELECT s.id AS quiz_id, s.quiz_date, r.recommended_species, r.recommended_breed, \
                    r.trait_preferences, r.confidence_score \
             FROM quiz_submissions s \
             JOIN quiz_results r ON r.quiz_id = s.id \
             WHERE s.user_id = $1 \
             ORDER BY s.quiz_date DESC, s.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}

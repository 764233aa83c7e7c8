//! Integration tests for quiz persistence.
//!
//! A submission and its result are written together or not at all.

use pawmatch_core::quiz::{Answers, SpeciesScores, TraitPreferences};
use pawmatch_db::models::quiz::NewQuizResult;
use pawmatch_db::repositories::QuizRepo;
use sqlx::PgPool;

fn answers() -> Answers {
    let value = serde_json::json!({"lifestyle": {"activity_level": "very_active"}});
    match value {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

fn new_result(confidence_score: f64) -> NewQuizResult {
    NewQuizResult {
        recommended_species: Some("dog".to_string()),
        recommended_breed: None,
        trait_preferences: TraitPreferences::new(),
        species_scores: SpeciesScores::default(),
        confidence_score,
    }
}

async fn submission_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM quiz_submissions")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn submission_and_result_are_stored_together(pool: PgPool) {
    let (submission, result) = QuizRepo::create_with_result(&pool, 7, &answers(), &new_result(25.0))
        .await
        .unwrap();

    assert_eq!(submission.user_id, 7);
    assert_eq!(result.quiz_id, submission.id);
    assert_eq!(result.confidence_score, 25.0);

    let found = QuizRepo::find_result_by_quiz(&pool, submission.id)
        .await
        .unwrap()
        .expect("result should exist");
    assert_eq!(found.id, result.id);
    assert_eq!(submission_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn failed_result_insert_leaves_no_submission(pool: PgPool) {
    // ck_quiz_results_confidence rejects scores above 100.
    let err = QuizRepo::create_with_result(&pool, 7, &answers(), &new_result(150.0))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("ck_quiz_results_confidence"));

    assert_eq!(submission_count(&pool).await, 0);
    assert!(QuizRepo::history(&pool, 7).await.unwrap().is_empty());
}

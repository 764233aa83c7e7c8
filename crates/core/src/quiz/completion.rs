//! Quiz completion scoring.
//!
//! Reported to clients as `confidence_score`, but it is only the share of
//! submitted questions that carry a non-empty answer.

use serde_json::Value;

use super::{round2, Answers};

/// Percentage (0-100, two decimals) of submitted questions that were answered.
///
/// Only top-level entries whose value is an object count as sections; any
/// other top-level value is skipped. Returns `0.0` when no questions were
/// submitted.
pub fn completion_score(answers: &Answers) -> f64 {
    let mut total = 0usize;
    let mut answered = 0usize;

    for section in answers.values().filter_map(Value::as_object) {
        for value in section.values() {
            total += 1;
            if is_answered(value) {
                answered += 1;
            }
        }
    }

    if total == 0 {
        return 0.0;
    }
    round2(100.0 * answered as f64 / total as f64)
}

fn is_answered(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn answers(value: Value) -> Answers {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn no_answers_scores_zero() {
        assert_eq!(completion_score(&Answers::new()), 0.0);
    }

    #[test]
    fn all_empty_answers_score_zero() {
        let input = answers(json!({
            "living_situation": {"living_space": "", "household": []},
            "lifestyle": {"activity_level": null},
        }));
        assert_eq!(completion_score(&input), 0.0);
    }

    #[test]
    fn fully_answered_scores_one_hundred() {
        let input = answers(json!({
            "living_situation": {"living_space": "house_large"},
            "lifestyle": {"activity_level": "very_active"},
        }));
        assert_eq!(completion_score(&input), 100.0);
    }

    #[test]
    fn partial_answers_round_to_two_decimals() {
        let input = answers(json!({
            "living_situation": {"living_space": "house_large", "household": ["dogs"]},
            "lifestyle": {"activity_level": ""},
        }));
        assert_eq!(completion_score(&input), 66.67);
    }

    #[test]
    fn non_object_top_level_entries_are_skipped() {
        let input = answers(json!({
            "living_situation": {"living_space": "house_large"},
            "comment": "hello",
            "flag": true,
        }));
        assert_eq!(completion_score(&input), 100.0);
    }

    #[test]
    fn falsy_scalars_count_as_unanswered() {
        let input = answers(json!({
            "misc": {"a": false, "b": 0, "c": true, "d": 3},
        }));
        assert_eq!(completion_score(&input), 50.0);
    }
}

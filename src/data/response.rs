use serde::Deserialize;

use crate::models::QuestionRecord;

use super::LoadError;

const RESPONSE_OK: u32 = 0;
const RESPONSE_NO_RESULTS: u32 = 1;

#[derive(Debug, Deserialize)]
struct BatchResponse {
    #[serde(default)]
    response_code: Option<u32>,
    results: Vec<QuestionRecord>,
}

/// Parses a `{ "results": [...] }` body into a batch.
///
/// Any length of `results` is accepted, including zero. A missing `results`
/// field, malformed JSON, an upstream error code, or a record without
/// incorrect choices is a load failure.
pub fn parse_batch(body: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    let response: BatchResponse = serde_json::from_str(body)?;

    match response.response_code {
        None | Some(RESPONSE_OK) | Some(RESPONSE_NO_RESULTS) => {}
        Some(code) => return Err(LoadError::Api { code }),
    }

    if let Some(index) = response
        .results
        .iter()
        .position(|record| record.incorrect_choices.is_empty())
    {
        return Err(LoadError::Malformed {
            index,
            reason: "no incorrect answers",
        });
    }

    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "response_code": 0,
        "results": [
            {
                "type": "multiple",
                "difficulty": "easy",
                "category": "Geography",
                "question": "What is the capital of France?",
                "correct_answer": "Paris",
                "incorrect_answers": ["Berlin", "Rome", "Madrid"]
            },
            {
                "type": "multiple",
                "difficulty": "medium",
                "category": "Science: Computers",
                "question": "What does &quot;CPU&quot; stand for?",
                "correct_answer": "Central Processing Unit",
                "incorrect_answers": ["Central Process Unit", "Computer Personal Unit", "Central Processor Unit"]
            }
        ]
    }"#;

    #[test]
    fn parses_records_and_optional_metadata() {
        let batch = parse_batch(SAMPLE).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].prompt, "What is the capital of France?");
        assert_eq!(batch[0].correct_choice, "Paris");
        assert_eq!(batch[0].incorrect_choices, vec!["Berlin", "Rome", "Madrid"]);
        assert_eq!(batch[0].category.as_deref(), Some("Geography"));
        assert_eq!(batch[0].difficulty.as_deref(), Some("easy"));
        assert_eq!(batch[1].kind.as_deref(), Some("multiple"));
        // Escaping is left for display time.
        assert_eq!(batch[1].prompt, "What does &quot;CPU&quot; stand for?");
    }

    #[test]
    fn empty_results_are_accepted() {
        assert!(parse_batch(r#"{"results": []}"#).unwrap().is_empty());
        assert!(
            parse_batch(r#"{"response_code": 1, "results": []}"#)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn bare_records_without_metadata_parse() {
        let batch = parse_batch(
            r#"{"results": [{"question": "Q", "correct_answer": "A", "incorrect_answers": ["B"]}]}"#,
        )
        .unwrap();

        assert_eq!(batch, vec![QuestionRecord::new("Q", "A", ["B"])]);
    }

    #[test]
    fn missing_results_is_a_parse_failure() {
        let err = parse_batch(r#"{"response_code": 0}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_failure() {
        let err = parse_batch("<html>Service Unavailable</html>").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn upstream_error_codes_fail_the_load() {
        let err = parse_batch(r#"{"response_code": 5, "results": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Api { code: 5 }));
    }

    #[test]
    fn records_without_incorrect_choices_are_rejected() {
        let err = parse_batch(
            r#"{"results": [
                {"question": "Q1", "correct_answer": "A", "incorrect_answers": ["B"]},
                {"question": "Q2", "correct_answer": "A", "incorrect_answers": []}
            ]}"#,
        )
        .unwrap_err();

        assert!(matches!(err, LoadError::Malformed { index: 1, .. }));
    }
}

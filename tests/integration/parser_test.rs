//! Feedback Parser Integration Tests
//!
//! Exercises the parser through the public API with payloads shaped
//! like real grading service responses.

use rubricxpert_desktop::{FeedbackParser, ParsedFeedback};
use serde_json::{json, Value};

fn parser() -> FeedbackParser {
    FeedbackParser::new(4.0)
}

#[test]
fn test_analyze_success_scenario() {
    // Server response for essay.pdf + rubric.pdf:
    // {success: true, feedback: {results: [{criterion, score, feedback}]}}
    let feedback = json!({
        "results": [
            {"criterion": "Content", "score": 3, "feedback": "Good"}
        ]
    });

    let parsed = parser().parse(&feedback);
    assert_eq!(parsed.overall_score, 75);
    assert_eq!(parsed.criteria.len(), 1);
    assert_eq!(parsed.criteria[0].name, "Content");
    assert_eq!(parsed.criteria[0].score, 75.0);
    assert_eq!(parsed.criteria[0].feedback, "Good");
}

#[test]
fn test_structured_mean_over_valid_entries_only() {
    let feedback = json!({
        "results": [
            {"final_summary": {"criterion": "Content", "overall_score": 4, "summary_feedback": "a"}},
            {"final_summary": {"criterion": "Organization", "overall_score": 2, "summary_feedback": "b"}},
            {"final_summary": {"criterion": "Citations", "overall_score": null, "summary_feedback": "c"}}
        ]
    });

    let parsed = parser().parse(&feedback);
    // mean(4, 2) * 25 = 75; the null-scored entry stays in the list at 0
    assert_eq!(parsed.overall_score, 75);
    assert_eq!(parsed.criteria.len(), 3);
    assert_eq!(parsed.criteria[2].score, 0.0);
}

#[test]
fn test_tagged_section_response() {
    let text = "\
**Thesis:** 88/100
Feedback: Clear and specific.

**Evidence:** 70/100
Feedback: Add more sources.

OVERALL SCORE: $77$

GENERAL FEEDBACK: abc";

    let parsed = parser().parse(&Value::String(text.to_string()));
    assert_eq!(parsed.overall_score, 77);
    assert_eq!(parsed.general_feedback, "abc");
    assert_eq!(parsed.criteria.len(), 2);
    assert_eq!(parsed.criteria[0].feedback, "Clear and specific.");
}

#[test]
fn test_markdown_block_response() {
    let text = "\
**Overall Analysis**: 68/100
Feedback: Decent first draft.

**Structure**: 74/100
Feedback: Paragraph order works.

**Voice**: 55/100
Feedback: Inconsistent register.";

    let parsed = parser().parse(&Value::String(text.to_string()));
    // 3 blocks: the first is overall, the other 2 are criteria
    assert_eq!(parsed.overall_score, 68);
    assert_eq!(parsed.general_feedback, "Decent first draft.");
    assert_eq!(parsed.criteria.len(), 2);
    // Scores are already 0-100 in this shape and are not rescaled
    assert_eq!(parsed.criteria[0].score, 74.0);
    assert_eq!(parsed.criteria[1].score, 55.0);
}

#[test]
fn test_malformed_inputs_never_fail() {
    let inputs = vec![
        Value::Null,
        Value::Bool(true),
        json!(42),
        json!([1, 2, 3]),
        json!({"results": "not an array"}),
        Value::String(String::new()),
        Value::String("   \n  ".to_string()),
        Value::String("no recognizable structure here".to_string()),
    ];

    let p = parser();
    for input in inputs {
        let parsed = p.parse(&input);
        assert_eq!(parsed.overall_score, 0, "input: {}", input);
        assert!(parsed.criteria.is_empty(), "input: {}", input);
        assert!(!parsed.general_feedback.is_empty(), "input: {}", input);
    }
}

#[test]
fn test_parsing_is_pure() {
    let p = parser();
    let inputs = vec![
        json!({"results": [{"criterion": "A", "score": 2, "feedback": "x"}]}),
        Value::String("**Overall**: 40/100\nFeedback: hm".to_string()),
    ];
    for input in inputs {
        let first: ParsedFeedback = p.parse(&input);
        let second = p.parse(&input);
        assert_eq!(first, second);
    }
}

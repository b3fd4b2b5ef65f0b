//! Feedback Parser
//!
//! Normalizes the grading service's feedback payloads into
//! `ParsedFeedback`. The service has returned three incompatible
//! shapes over time: a structured JSON object with a `results` array,
//! plain text with `**Name**: score/100` markdown blocks, and plain
//! text with `**Name:** score/100` sections plus `OVERALL SCORE:` /
//! `GENERAL FEEDBACK:` markers. A single entry point detects the shape
//! and dispatches to the matching strategy.
//!
//! Parsing is total: any payload, including null or garbage, yields a
//! well-formed result. Unparseable input degrades to a zero/empty
//! value with a human-readable message instead of an error.

use regex::Regex;
use serde_json::Value;

use crate::models::feedback::{Criterion, ParsedFeedback, RawFeedback};

/// Message used when no feedback payload is present at all
const NO_FEEDBACK_MESSAGE: &str = "No feedback data available.";

/// Message used when a payload exists but cannot be interpreted
const PARSE_FAILURE_MESSAGE: &str =
    "There was an error parsing the feedback. Please try again.";

/// Criteria scoring at or above this are listed as strengths in the
/// synthesized general feedback; the rest as areas for improvement
const STRENGTH_THRESHOLD: f64 = 75.0;

/// Literal markers of the tagged-section text format
const OVERALL_MARKER: &str = "OVERALL SCORE:";
const GENERAL_MARKER: &str = "GENERAL FEEDBACK:";

/// Parser for the grading service's feedback payloads
pub struct FeedbackParser {
    score_scale_max: f64,
    /// `**Name:** 85/100` (colon inside the bold span)
    tagged_block: Regex,
    /// `**Name**: 85/100` (colon outside the bold span)
    markdown_block: Regex,
    /// `OVERALL SCORE: $85$`
    overall_token: Regex,
    /// Bare `$85$` token, accepted when the labelled form is absent
    dollar_token: Regex,
}

impl FeedbackParser {
    /// Create a parser for the given structured-score scale.
    ///
    /// `score_scale_max` is the upper bound of per-entry scores in
    /// structured responses (historically 4); entry scores are mapped
    /// to 0-100 by multiplying with `100 / score_scale_max`. The text
    /// formats already carry 0-100 scores and are not rescaled.
    pub fn new(score_scale_max: f64) -> Self {
        let scale = if score_scale_max.is_finite() && score_scale_max > 0.0 {
            score_scale_max
        } else {
            4.0
        };
        Self {
            score_scale_max: scale,
            tagged_block: Regex::new(
                r"\*\*(?P<name>[^*\n]+?):\*\*\s*(?P<score>\d+(?:\.\d+)?)\s*/\s*100",
            )
            .unwrap(),
            markdown_block: Regex::new(
                r"\*\*(?P<name>[^*\n]+?)\*\*\s*:\s*(?P<score>\d+(?:\.\d+)?)\s*/\s*100",
            )
            .unwrap(),
            overall_token: Regex::new(r"OVERALL SCORE:\s*\$(?P<score>\d+)\$").unwrap(),
            dollar_token: Regex::new(r"\$(?P<score>\d+)\$").unwrap(),
        }
    }

    /// Normalize a raw feedback payload. Never fails.
    pub fn parse(&self, feedback: &RawFeedback) -> ParsedFeedback {
        if let Some(results) = feedback.get("results").and_then(Value::as_array) {
            return self.parse_structured(results);
        }
        if let Some(text) = feedback.as_str() {
            return self.parse_text(text);
        }
        tracing::warn!("unrecognized feedback payload shape");
        ParsedFeedback::fallback(NO_FEEDBACK_MESSAGE)
    }

    /// Structured-JSON shape: object with a `results` array of
    /// per-criterion entries scored on the configured scale.
    fn parse_structured(&self, results: &[Value]) -> ParsedFeedback {
        let scale_factor = 100.0 / self.score_scale_max;
        let mut criteria = Vec::with_capacity(results.len());
        let mut valid_scores = Vec::new();

        for entry in results {
            // Newer responses nest everything under final_summary;
            // older ones carry the fields at the top level.
            let summary = entry.get("final_summary").unwrap_or(entry);

            let name = summary
                .get("criterion")
                .and_then(Value::as_str)
                .or_else(|| entry.get("criterion").and_then(Value::as_str))
                .unwrap_or("Unnamed Criterion")
                .to_string();

            let feedback = summary
                .get("summary_feedback")
                .and_then(Value::as_str)
                .or_else(|| entry.get("feedback").and_then(Value::as_str))
                .unwrap_or("")
                .to_string();

            let raw_score = summary
                .get("overall_score")
                .and_then(Value::as_f64)
                .or_else(|| entry.get("score").and_then(Value::as_f64));

            // Invalid entries stay in the list at 0 but are excluded
            // from the overall average.
            let score = match raw_score {
                Some(s) if s.is_finite() && (0.0..=self.score_scale_max).contains(&s) => {
                    valid_scores.push(s);
                    s * scale_factor
                }
                Some(s) => {
                    tracing::warn!(
                        criterion = %name,
                        score = s,
                        scale_max = self.score_scale_max,
                        "criterion score outside the configured scale, treating as unscored"
                    );
                    0.0
                }
                None => 0.0,
            };

            criteria.push(Criterion {
                name,
                score,
                feedback,
            });
        }

        let overall_score = if valid_scores.is_empty() {
            0
        } else {
            let mean = valid_scores.iter().sum::<f64>() / valid_scores.len() as f64;
            (mean * scale_factor).round().clamp(0.0, 100.0) as u32
        };

        ParsedFeedback {
            overall_score,
            general_feedback: synthesize_general_feedback(&criteria),
            criteria,
        }
    }

    /// Text shapes: dispatch on the presence of the section markers.
    fn parse_text(&self, text: &str) -> ParsedFeedback {
        if text.trim().is_empty() {
            return ParsedFeedback::fallback(NO_FEEDBACK_MESSAGE);
        }
        if text.contains(OVERALL_MARKER) || text.contains(GENERAL_MARKER) {
            return self.parse_tagged(text);
        }
        if self.markdown_block.is_match(text) || self.tagged_block.is_match(text) {
            return self.parse_markdown(text);
        }
        tracing::warn!("feedback text matched no known format");
        ParsedFeedback::fallback(PARSE_FAILURE_MESSAGE)
    }

    /// Tagged-section shape: `**Name:** score/100` sections terminated
    /// by the next `**` or a top-level marker, an `OVERALL SCORE: $n$`
    /// token, and a trailing `GENERAL FEEDBACK:` section.
    fn parse_tagged(&self, text: &str) -> ParsedFeedback {
        let mut criteria = Vec::new();

        for cap in self.tagged_block.captures_iter(text) {
            let whole = cap.get(0).expect("match has a group 0");
            let body_start = whole.end();
            let rest = &text[body_start..];

            let end = [
                rest.find("**"),
                rest.find(OVERALL_MARKER),
                rest.find(GENERAL_MARKER),
            ]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(rest.len());

            criteria.push(Criterion {
                name: cap["name"].trim().to_string(),
                score: cap["score"].parse().unwrap_or(0.0),
                feedback: strip_feedback_label(&rest[..end]),
            });
        }

        let overall_score = self
            .overall_token
            .captures(text)
            .or_else(|| self.dollar_token.captures(text))
            .and_then(|cap| cap["score"].parse::<u32>().ok())
            .map(|n| n.min(100))
            .unwrap_or(0);

        let general_feedback = text
            .find(GENERAL_MARKER)
            .map(|idx| text[idx + GENERAL_MARKER.len()..].trim().to_string())
            .unwrap_or_default();

        ParsedFeedback {
            overall_score,
            criteria,
            general_feedback,
        }
    }

    /// Markdown-block shape: repeated `**Name**: score/100` blocks.
    /// The first block is the overall analysis; the rest are criteria,
    /// with their 0-100 scores used as given.
    fn parse_markdown(&self, text: &str) -> ParsedFeedback {
        // Some deployments emitted the bold-name colon inside the
        // span; accept whichever form actually matches.
        let block = if self.markdown_block.is_match(text) {
            &self.markdown_block
        } else {
            &self.tagged_block
        };

        let matches: Vec<regex::Captures> = block.captures_iter(text).collect();
        if matches.is_empty() {
            return ParsedFeedback::fallback(PARSE_FAILURE_MESSAGE);
        }

        let mut blocks = Vec::with_capacity(matches.len());
        for (i, cap) in matches.iter().enumerate() {
            let body_start = cap.get(0).expect("match has a group 0").end();
            let body_end = matches
                .get(i + 1)
                .map(|next| next.get(0).expect("match has a group 0").start())
                .unwrap_or(text.len());

            blocks.push((
                cap["name"].trim().to_string(),
                cap["score"].parse::<f64>().unwrap_or(0.0),
                strip_feedback_label(&text[body_start..body_end]),
            ));
        }

        let (_, overall, general_feedback) = blocks.remove(0);
        let criteria = blocks
            .into_iter()
            .map(|(name, score, feedback)| Criterion {
                name,
                score,
                feedback,
            })
            .collect();

        ParsedFeedback {
            overall_score: overall.round().clamp(0.0, 100.0) as u32,
            criteria,
            general_feedback,
        }
    }
}

/// Strip the leading `Feedback:` label from a section body
fn strip_feedback_label(body: &str) -> String {
    let trimmed = body.trim();
    trimmed
        .strip_prefix("Feedback:")
        .map(str::trim)
        .unwrap_or(trimmed)
        .to_string()
}

/// Build the general-feedback summary for structured responses:
/// strengths, areas for improvement, then a per-criterion dump.
fn synthesize_general_feedback(criteria: &[Criterion]) -> String {
    let mut general = String::from("Overall Assessment:\n\n");
    if criteria.is_empty() {
        return general;
    }

    let strengths: Vec<&str> = criteria
        .iter()
        .filter(|c| c.score >= STRENGTH_THRESHOLD)
        .map(|c| c.name.as_str())
        .collect();
    let weaknesses: Vec<&str> = criteria
        .iter()
        .filter(|c| c.score < STRENGTH_THRESHOLD)
        .map(|c| c.name.as_str())
        .collect();

    if !strengths.is_empty() {
        general.push_str(&format!("Strengths include {}. ", strengths.join(", ")));
    }
    if !weaknesses.is_empty() {
        general.push_str(&format!(
            "Areas for improvement include {}.",
            weaknesses.join(", ")
        ));
    }
    general.push_str("\n\nDetailed Feedback:\n");
    for c in criteria {
        general.push_str(&format!("- {}: {}\n", c.name, c.feedback));
    }
    general
}

/// Pull a plain-text essay out of a raw feedback payload when the
/// service happened to include one. Best effort only; used to give the
/// chat endpoint extra context.
pub fn extract_essay_text(feedback: &RawFeedback) -> Option<String> {
    for key in ["essay_text", "essay"] {
        if let Some(text) = feedback.get(key).and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

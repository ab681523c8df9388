//! Rule-based question answering for medication recommendations.
//!
//! Questions are matched against an ordered table of keyword rules (see
//! [`rules::RULES`]). The first matching rule renders a canned response,
//! parameterized with the current medication and alternative. There is no
//! inference: the same question and context always produce the same answer.

pub mod context;
mod handlers;
pub mod rules;
pub mod tables;

pub use context::QuestionContext;
pub use handlers::{FALLBACK_RESPONSE, SAFETY_RESPONSE, SEARCH_FIRST_RESPONSE, WHY_CHEAPER_RESPONSE};
pub use rules::{Intent, Query, Rule, RULES};

use tracing::debug;

/// Questions a user interface can offer as one-tap prompts.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What's the difference between this and the alternative?",
    "How much can I save with the cheaper option?",
    "Will this work without insurance?",
    "What does this medication treat?",
    "Are supplements helpful?",
    "Why was no alternative found?",
    "Can I drink alcohol with this?",
    "Can I mix this with other medications?",
    "Is it safe to take with supplements?",
];

/// Classify a question without rendering a response.
pub fn classify(
    question: &str,
    medication: Option<&QuestionContext>,
    alternative: Option<&QuestionContext>,
) -> Intent {
    let query = Query::new(question, medication, alternative);
    rules::first_match(&query)
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Fallback)
}

/// Answer a free-text question about the current medication and alternative.
pub fn answer_question(
    question: &str,
    medication: Option<&QuestionContext>,
    alternative: Option<&QuestionContext>,
) -> String {
    let query = Query::new(question, medication, alternative);
    match rules::first_match(&query) {
        Some(rule) => {
            debug!(
                intent = rule.intent.as_str(),
                has_medication = medication.is_some(),
                has_alternative = alternative.is_some(),
                "matched question rule"
            );
            rule.respond(&query)
        }
        None => {
            debug!("no question rule matched");
            FALLBACK_RESPONSE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_matches_answer() {
        let med = QuestionContext::new("Zoloft", "SSRI", 120.0);
        for question in SUGGESTED_QUESTIONS {
            let intent = classify(question, Some(&med), None);
            let answer = answer_question(question, Some(&med), None);
            if intent == Intent::Fallback {
                assert_eq!(answer, FALLBACK_RESPONSE);
            } else {
                assert_ne!(answer, FALLBACK_RESPONSE, "question {:?}", question);
            }
        }
    }

    #[test]
    fn test_empty_question_falls_back() {
        assert_eq!(answer_question("", None, None), FALLBACK_RESPONSE);
        assert_eq!(classify("   ", None, None), Intent::Fallback);
    }
}

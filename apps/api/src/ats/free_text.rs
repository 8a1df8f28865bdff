//! Free-text rubric for CVs pasted or uploaded as plain text.
//!
//! Starts from 50 and applies one bonus or one penalty per check. Matching is
//! plain substring containment on the lowercased text.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::ats::rubric::free_text::*;
use crate::ats::{AtsCheckResult, AtsError, IssueKind, Scorecard, ScoringStrategy};

lazy_static! {
    static ref PHONE_RE: Regex = Regex::new(PHONE_PATTERN).expect("phone pattern is valid");
}

/// Rejects input too short to be a CV. Kept separate so callers can validate
/// before doing any other work.
pub fn validate_input(text: &str) -> Result<(), AtsError> {
    let actual = text.chars().count();
    if actual < MIN_INPUT_CHARS {
        return Err(AtsError::TextTooShort {
            min: MIN_INPUT_CHARS,
            actual,
        });
    }
    Ok(())
}

/// Scores raw CV text. Input under 100 characters is a validation error, not a low score.
pub fn score_free_text(text: &str) -> Result<AtsCheckResult, AtsError> {
    validate_input(text)?;

    let lower = text.to_lowercase();
    let mut card = Scorecard::new(BASE_SCORE);

    if lower.contains("experience") || lower.contains("employment") {
        card.strength("Work experience section found");
        card.adjust(10);
    } else {
        card.issue(
            IssueKind::Error,
            "Work Experience",
            "No work experience section detected",
            "Add a section titled \"Work Experience\" or \"Employment History\"",
        );
        card.adjust(-15);
    }

    if lower.contains("education") || lower.contains("qualification") {
        card.strength("Education section found");
        card.adjust(10);
    } else {
        card.issue(
            IssueKind::Warning,
            "Education",
            "No education section detected",
            "Add a section titled \"Education\" or \"Qualifications\"",
        );
        card.adjust(-10);
    }

    if lower.contains("skill") {
        card.strength("Skills section found");
        card.adjust(10);
    } else {
        card.improvement("Add a dedicated \"Skills\" section listing your key abilities");
        card.adjust(-8);
    }

    if lower.contains('@') && lower.contains('.') {
        card.strength("Email address found");
        card.adjust(5);
    } else {
        card.issue(
            IssueKind::Error,
            "Contact Information",
            "No email address detected",
            "Include a professional email address near the top of your CV",
        );
        card.adjust(-10);
    }

    if PHONE_RE.is_match(&lower) {
        card.strength("Phone number found");
        card.adjust(5);
    } else {
        card.improvement("Add a phone number, e.g. +232 76 123456");
        card.adjust(-5);
    }

    let verbs_found = ACTION_VERBS
        .iter()
        .filter(|verb| lower.contains(*verb))
        .count();
    if verbs_found >= MIN_ACTION_VERBS {
        card.strength(format!("Uses {verbs_found} strong action verbs"));
        card.adjust(10);
    } else {
        card.improvement("Describe achievements with action verbs such as managed, developed or coordinated");
        card.adjust(-5);
    }

    let length = text.chars().count();
    if length > LONG_TEXT_CHARS {
        card.strength("Comprehensive level of detail");
        card.adjust(5);
    } else if length < SHORT_TEXT_CHARS {
        card.issue(
            IssueKind::Warning,
            "Content Length",
            "CV is very short",
            "Expand your CV with more detail on your experience and achievements",
        );
        card.adjust(-10);
    }

    let result = card.finish(ScoringStrategy::FreeText, VERSION);
    debug!(
        score = result.score,
        passed = result.passed,
        length,
        verbs_found,
        "free-text ATS check complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::PASS_THRESHOLD;

    fn padded(text: &str, len: usize) -> String {
        let mut out = text.to_string();
        while out.chars().count() < len {
            out.push_str(" lorem");
        }
        out
    }

    #[test]
    fn test_rejects_99_characters() {
        let text = "a".repeat(99);
        assert_eq!(
            validate_input(&text),
            Err(AtsError::TextTooShort { min: 100, actual: 99 })
        );
        assert!(score_free_text(&text).is_err());
    }

    #[test]
    fn test_accepts_exactly_100_characters() {
        let text = "a".repeat(100);
        assert!(validate_input(&text).is_ok());
        assert!(score_free_text(&text).is_ok());
    }

    #[test]
    fn test_length_guard_counts_characters_not_bytes() {
        // 60 two-byte characters: 120 bytes but only 60 chars
        let text = "é".repeat(60);
        assert!(matches!(
            validate_input(&text),
            Err(AtsError::TextTooShort { actual: 60, .. })
        ));
    }

    #[test]
    fn test_every_positive_branch_clamps_to_hundred() {
        let cv = "Aminata Kamara, aminata@example.com, +232 76 123456\n\
                  I have 5 years of experience in finance.\n\
                  Education: BSc Computer Science\n\
                  Skills: Python, SQL\n\
                  Managed payroll, developed reports, coordinated audits.";
        let text = padded(cv, 2001);
        let result = score_free_text(&text).unwrap();
        // 50 + 10 + 10 + 10 + 5 + 5 + 10 + 5 = 105
        assert_eq!(result.score, 100);
        assert!(result.passed);
        assert_eq!(result.strengths.len(), 7);
        assert!(result.issues.is_empty());
        assert!(result.improvements.is_empty());
    }

    #[test]
    fn test_bare_text_collects_every_penalty() {
        let text = "z".repeat(120);
        let result = score_free_text(&text).unwrap();
        // 50 - 15 - 10 - 8 - 10 - 5 - 5 - 10 = -13
        assert_eq!(result.score, 0);
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 4);
        assert_eq!(result.improvements.len(), 3);
    }

    #[test]
    fn test_medium_length_is_neutral() {
        let text = padded("employment qualification skills", 1000);
        let result = score_free_text(&text).unwrap();
        // 50 + 10 + 10 + 10 - 10 - 5 - 5 = 60
        assert_eq!(result.score, 60);
        assert!(!result.issues.iter().any(|i| i.category == "Content Length"));
    }

    #[test]
    fn test_phone_patterns() {
        assert!(PHONE_RE.is_match("call +23276123456"));
        assert!(PHONE_RE.is_match("tel 23276123456"));
        assert!(PHONE_RE.is_match("555-123-4567"));
        assert!(PHONE_RE.is_match("555 123 4567"));
        assert!(!PHONE_RE.is_match("call me maybe 12345"));
    }

    #[test]
    fn test_two_action_verbs_is_not_enough() {
        let text = padded("I managed and developed things", 150);
        let result = score_free_text(&text).unwrap();
        assert!(result
            .improvements
            .iter()
            .any(|i| i.contains("action verbs")));
    }

    #[test]
    fn test_bounds_and_threshold() {
        let inputs = [
            "q".repeat(100),
            padded("experience education skills a@b.c 232761234567 led managed executed", 2100),
            padded("employment", 600),
        ];
        for text in &inputs {
            let result = score_free_text(text).unwrap();
            assert!(result.score <= 100);
            assert_eq!(result.passed, result.score as i32 >= PASS_THRESHOLD);
            assert_eq!(result, score_free_text(text).unwrap());
            assert_eq!(result.strategy, ScoringStrategy::FreeText);
        }
    }
}

//! Versioned term tables for the two ATS rubrics.
//!
//! The tables overlap but are not shared: each list belongs to one rubric and
//! feeds different deltas and thresholds.

/// Tables for the structured (form wizard) rubric.
pub mod structured {
    pub const VERSION: &str = "structured/v1";

    pub const BASE_SCORE: i32 = 100;

    pub const ACTION_VERBS: &[&str] = &[
        "led",
        "managed",
        "developed",
        "created",
        "implemented",
        "improved",
        "increased",
        "reduced",
        "achieved",
    ];

    /// Matched against the whole serialized CV.
    pub const KEYWORDS: &[&str] = &[
        "team",
        "project",
        "management",
        "customer",
        "communication",
        "leadership",
        "problem solving",
    ];

    pub const MIN_KEYWORDS: usize = 3;
    pub const MIN_NAME_CHARS: usize = 3;
    pub const MIN_PHONE_CHARS: usize = 10;
    pub const MIN_SUMMARY_CHARS: usize = 50;
    pub const STRONG_SUMMARY_CHARS: usize = 150;
    pub const MIN_DESCRIPTION_CHARS: usize = 50;
    pub const MIN_SKILLS: usize = 5;
    pub const STRONG_SKILLS: usize = 10;
}

/// Tables for the free-text (pasted or uploaded CV) rubric.
pub mod free_text {
    pub const VERSION: &str = "free_text/v1";

    pub const BASE_SCORE: i32 = 50;

    /// Callers must not score anything shorter; the scorer enforces it too.
    pub const MIN_INPUT_CHARS: usize = 100;
    pub const SHORT_TEXT_CHARS: usize = 500;
    pub const LONG_TEXT_CHARS: usize = 2000;

    pub const ACTION_VERBS: &[&str] = &[
        "led",
        "managed",
        "developed",
        "created",
        "implemented",
        "improved",
        "increased",
        "reduced",
        "achieved",
        "coordinated",
        "executed",
    ];

    pub const MIN_ACTION_VERBS: usize = 3;

    /// Sierra Leone `+232` prefix, a bare `232` national number, or a generic 3-3-4 layout.
    pub const PHONE_PATTERN: &str = r"\+232|232\d{8}|\d{3}[-\s]?\d{3}[-\s]?\d{4}";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_verbs_extend_structured_verbs() {
        for verb in structured::ACTION_VERBS {
            assert!(free_text::ACTION_VERBS.contains(verb), "missing {verb}");
        }
        assert!(free_text::ACTION_VERBS.contains(&"coordinated"));
        assert!(free_text::ACTION_VERBS.contains(&"executed"));
        assert!(!structured::ACTION_VERBS.contains(&"coordinated"));
    }

    #[test]
    fn test_keyword_table_is_lowercase() {
        for kw in structured::KEYWORDS {
            assert_eq!(*kw, kw.to_lowercase());
        }
        assert_eq!(structured::KEYWORDS.len(), 7);
    }
}

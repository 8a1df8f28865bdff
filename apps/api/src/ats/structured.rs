//! Structured-CV rubric: fixed-order deductions from a base of 100.
//!
//! Checks never short-circuit each other. A weak experience entry can be hit
//! by both the short-description and the missing-action-verb checks.

use tracing::debug;

use crate::ats::rubric::structured::*;
use crate::ats::{AtsCheckResult, IssueKind, Scorecard, ScoringStrategy};
use crate::models::cv::{filled, CvData};

/// Scores a structured CV. Pure and deterministic; never fails.
pub fn score_cv(cv: &CvData) -> AtsCheckResult {
    let mut card = Scorecard::new(BASE_SCORE);
    let info = &cv.personal_info;

    // 1. Full name
    if info.full_name.chars().count() >= MIN_NAME_CHARS {
        card.strength("Full name is clearly stated");
    } else {
        card.issue(
            IssueKind::Error,
            "Personal Information",
            "Full name is missing or too short",
            "Add your full name exactly as it appears on official documents",
        );
        card.adjust(-10);
    }

    // 2. Email
    if !info.email.contains('@') {
        card.issue(
            IssueKind::Error,
            "Personal Information",
            "A valid email address is missing",
            "Add a professional email address so employers can contact you",
        );
        card.adjust(-10);
    }

    // 3. Phone
    let phone_ok = filled(&info.phone)
        .map(|p| p.chars().count() >= MIN_PHONE_CHARS)
        .unwrap_or(false);
    if !phone_ok {
        card.issue(
            IssueKind::Warning,
            "Personal Information",
            "Phone number is missing or incomplete",
            "Include a full phone number with country code, e.g. +232 76 123456",
        );
        card.adjust(-5);
    }

    // 4. Summary
    let summary_len = info.summary.as_deref().map(|s| s.chars().count()).unwrap_or(0);
    if summary_len < MIN_SUMMARY_CHARS {
        card.issue(
            IssueKind::Warning,
            "Professional Summary",
            "Professional summary is missing or too short",
            "Write a summary that highlights your key skills and career goals",
        );
        card.improvement("Expand your professional summary to 50-150 words");
        card.adjust(-8);
    } else if summary_len > STRONG_SUMMARY_CHARS {
        card.strength("Strong professional summary");
    }

    // 5. Education
    if cv.education.is_empty() {
        card.issue(
            IssueKind::Warning,
            "Education",
            "No education history provided",
            "Add your highest qualification, including institution and field of study",
        );
        card.improvement("Add at least one education entry");
        card.adjust(-10);
    } else {
        card.strength(count_phrase(cv.education.len(), "education entry", "education entries"));
        for (idx, entry) in cv.education.iter().enumerate() {
            if !entry.is_complete() {
                card.issue(
                    IssueKind::Warning,
                    "Education",
                    format!("Education entry {} is incomplete", idx + 1),
                    "Fill in the institution, degree and field of study",
                );
                card.adjust(-3);
            }
        }
    }

    // 6. Experience
    if cv.experience.is_empty() {
        card.issue(
            IssueKind::Warning,
            "Work Experience",
            "No work experience provided",
            "Add internships, volunteer work or part-time jobs if you have no formal employment",
        );
        card.improvement("Add your work experience, including volunteer roles");
        card.adjust(-15);
    } else {
        card.strength(count_phrase(
            cv.experience.len(),
            "work experience entry",
            "work experience entries",
        ));
        for entry in &cv.experience {
            let role = entry.role_label();

            if entry.description.chars().count() < MIN_DESCRIPTION_CHARS {
                card.issue(
                    IssueKind::Warning,
                    "Work Experience",
                    format!("Description for {role} is missing or too brief"),
                    "Describe your responsibilities and achievements in at least two sentences",
                );
                card.improvement(format!("Add more detail to your role as {role}"));
                card.adjust(-5);
            }

            let description = entry.description.to_lowercase();
            if !ACTION_VERBS.iter().any(|verb| description.contains(verb)) {
                card.improvement(format!(
                    "Start bullet points for {role} with action verbs such as led, managed or developed"
                ));
                card.adjust(-2);
            }
        }
    }

    // 7. Skills
    let skill_count = cv.skills.len();
    if skill_count < MIN_SKILLS {
        card.issue(
            IssueKind::Warning,
            "Skills",
            format!("Only {skill_count} skills listed"),
            "List at least 5 relevant skills, mixing technical and soft skills",
        );
        card.improvement("Add more skills that match the jobs you are applying for");
        card.adjust(-10);
    } else if skill_count >= STRONG_SKILLS {
        card.strength("Strong skills section");
    } else {
        card.strength(format!("{skill_count} skills listed"));
    }

    // 8. Keyword coverage over the whole CV
    let blob = serde_json::to_string(cv).unwrap_or_default().to_lowercase();
    let found = KEYWORDS.iter().filter(|kw| blob.contains(*kw)).count();
    if found < MIN_KEYWORDS {
        card.issue(
            IssueKind::Warning,
            "Keywords",
            format!("Only {found} of {} common ATS keywords found", KEYWORDS.len()),
            "Mention teamwork, projects, communication or leadership where they apply",
        );
        card.improvement("Use industry keywords such as teamwork, leadership and problem solving");
        card.adjust(-7);
    } else {
        card.strength(format!("Contains {found} common ATS keywords"));
    }

    // 9. Location
    if filled(&info.location).is_none() {
        card.issue(
            IssueKind::Warning,
            "Personal Information",
            "Location is missing",
            "Add your city, e.g. Freetown, so employers can match you to local roles",
        );
        card.adjust(-5);
    }

    // 10. Languages
    if cv.languages.is_empty() {
        card.improvement("List the languages you speak, e.g. English and Krio");
        card.adjust(-3);
    } else {
        card.strength(count_phrase(cv.languages.len(), "language", "languages"));
    }

    let result = card.finish(ScoringStrategy::Structured, VERSION);
    debug!(
        score = result.score,
        passed = result.passed,
        issues = result.issues.len(),
        "structured ATS check complete"
    );
    result
}

fn count_phrase(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

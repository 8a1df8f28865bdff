//! Job Matcher — ranks job postings by how many of their requirements appear in a CV.
//!
//! Default: `KeywordJobMatcher` (substring containment, no tokenization).
//! `AppState` holds an `Arc<dyn JobMatcher>` so another backend can be swapped in
//! without touching the handlers.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::cv::CvData;
use crate::models::job::Job;

/// Points awarded per requirement found in the CV.
pub const POINTS_PER_REQUIREMENT: u32 = 20;
/// No match is ever reported as perfect.
pub const MAX_MATCH_SCORE: u32 = 95;

/// A job paired with its query-relative score. The job itself is left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    #[serde(flatten)]
    pub job: Job,
    pub match_score: u32, // 0 – 95
}

pub trait JobMatcher: Send + Sync {
    fn rank(&self, cv: &CvData, jobs: &[Job]) -> Vec<JobMatch>;
}

pub struct KeywordJobMatcher;

impl JobMatcher for KeywordJobMatcher {
    fn rank(&self, cv: &CvData, jobs: &[Job]) -> Vec<JobMatch> {
        match_jobs(cv, jobs)
    }
}

/// Scores every job against the CV and returns them best first.
///
/// Algorithm:
/// 1. blob = lowercase(summary + skills + experience descriptions), space-joined
/// 2. +20 for each requirement whose lowercase form is a substring of the blob
/// 3. clamp to 95
/// 4. stable sort descending, so equal scores keep input order
pub fn match_jobs(cv: &CvData, jobs: &[Job]) -> Vec<JobMatch> {
    let blob = cv_text_blob(cv);

    let mut matches: Vec<JobMatch> = jobs
        .iter()
        .map(|job| JobMatch {
            match_score: score_requirements(&blob, &job.requirements),
            job: job.clone(),
        })
        .collect();

    // `sort_by_key` is stable
    matches.sort_by_key(|m| Reverse(m.match_score));

    debug!(
        jobs = matches.len(),
        top_score = matches.first().map(|m| m.match_score).unwrap_or(0),
        "job matching complete"
    );
    matches
}

fn cv_text_blob(cv: &CvData) -> String {
    let summary = cv.personal_info.summary.as_deref().unwrap_or_default();
    let skills = cv.skills.join(" ");
    let descriptions = cv
        .experience
        .iter()
        .map(|e| e.description.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{summary} {skills} {descriptions}").to_lowercase()
}

fn score_requirements(blob: &str, requirements: &[String]) -> u32 {
    let hits = requirements
        .iter()
        .filter(|req| blob.contains(&req.to_lowercase()))
        .count() as u32;
    hits.saturating_mul(POINTS_PER_REQUIREMENT)
        .min(MAX_MATCH_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{Experience, PersonalInfo};

    fn make_job(id: &str, requirements: &[&str]) -> Job {
        Job {
            id: id.to_string(),
            title: format!("Job {id}"),
            company: "Acme SL".to_string(),
            location: "Freetown".to_string(),
            requirements: requirements.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    fn developer_cv() -> CvData {
        CvData {
            personal_info: PersonalInfo {
                summary: Some("Web developer focused on customer dashboards".to_string()),
                ..Default::default()
            },
            skills: vec!["react".to_string(), "CSS".to_string()],
            experience: vec![Experience {
                description: "I built things with node.js daily".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_requirements_match_after_lowercasing() {
        let jobs = vec![make_job("1", &["React", "Node.js"])];
        let ranked = match_jobs(&developer_cv(), &jobs);
        assert_eq!(ranked[0].match_score, 40);
    }

    #[test]
    fn test_no_overlap_scores_zero_and_sorts_last() {
        let jobs = vec![
            make_job("acct", &["Accounting", "SAP", "Audit", "Tax", "Compliance"]),
            make_job("web", &["React"]),
        ];
        let ranked = match_jobs(&developer_cv(), &jobs);
        assert_eq!(ranked[0].job.id, "web");
        assert_eq!(ranked[0].match_score, 20);
        assert_eq!(ranked[1].job.id, "acct");
        assert_eq!(ranked[1].match_score, 0);
    }

    #[test]
    fn test_score_is_capped_at_95() {
        let jobs = vec![make_job(
            "1",
            &["react", "css", "node.js", "customer", "dashboards", "developer"],
        )];
        let ranked = match_jobs(&developer_cv(), &jobs);
        assert_eq!(ranked[0].match_score, MAX_MATCH_SCORE);
    }

    #[test]
    fn test_substring_match_is_not_word_bounded() {
        let mut cv = CvData::default();
        cv.skills = vec!["Telecommunication systems".to_string()];
        let ranked = match_jobs(&cv, &[make_job("1", &["Communication"])]);
        assert_eq!(ranked[0].match_score, 20);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let jobs = vec![
            make_job("a", &["react"]),
            make_job("b", &["golang"]),
            make_job("c", &["css"]),
            make_job("d", &["kotlin"]),
        ];
        let ranked = match_jobs(&developer_cv(), &jobs);
        let ids: Vec<&str> = ranked.iter().map(|m| m.job.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_idempotent_and_input_untouched() {
        let jobs = vec![make_job("a", &["react"]), make_job("b", &["node.js", "css"])];
        let before = jobs.clone();
        let first = match_jobs(&developer_cv(), &jobs);
        let second = match_jobs(&developer_cv(), &jobs);
        assert_eq!(first, second);
        assert_eq!(jobs, before);
        assert!(first.windows(2).all(|w| w[0].match_score >= w[1].match_score));
    }

    #[test]
    fn test_empty_cv_and_empty_requirements() {
        let ranked = match_jobs(&CvData::default(), &[make_job("1", &[]), make_job("2", &["x"])]);
        assert!(ranked.iter().all(|m| m.match_score == 0));
    }

    #[test]
    fn test_keyword_matcher_delegates() {
        let jobs = vec![make_job("1", &["React"])];
        let ranked = KeywordJobMatcher.rank(&developer_cv(), &jobs);
        assert_eq!(ranked, match_jobs(&developer_cv(), &jobs));
    }

    #[test]
    fn test_job_match_serializes_flat() {
        let m = JobMatch {
            job: make_job("1", &["React"]),
            match_score: 40,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["matchScore"], 40);
        assert_eq!(json["id"], "1");
        assert_eq!(json["title"], "Job 1");
    }
}

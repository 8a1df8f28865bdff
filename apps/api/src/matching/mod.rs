//! CV-to-job matching.

pub mod job_matcher;

pub use job_matcher::{match_jobs, JobMatch, JobMatcher, KeywordJobMatcher};

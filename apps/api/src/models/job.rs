use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting on the board.
///
/// Carries no match score: scores are query-relative and travel alongside the
/// job in `matching::JobMatch`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub posted_date: NaiveDate,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        let coordinates = match (row.latitude, row.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        };
        Job {
            id: row.id.to_string(),
            title: row.title,
            company: row.company,
            location: row.location,
            job_type: row.job_type,
            salary: row.salary,
            description: row.description,
            requirements: row.requirements,
            posted_date: row.posted_date.format("%Y-%m-%d").to_string(),
            coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_accepts_front_end_shape() {
        // Legacy payloads still carry a matchScore; it is ignored on input.
        let json = r#"{
            "id": "job-1",
            "title": "Accountant",
            "company": "Sierra Rutile",
            "location": "Freetown",
            "type": "Full-time",
            "salary": "Le 8,000,000",
            "description": "Keep the books",
            "requirements": ["Accounting", "Excel"],
            "matchScore": 80,
            "postedDate": "2024-03-01",
            "coordinates": { "lat": 8.48, "lng": -13.23 }
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_type, "Full-time");
        assert_eq!(job.requirements.len(), 2);
        assert_eq!(job.coordinates.unwrap().lng, -13.23);

        let out = serde_json::to_value(&job).unwrap();
        assert_eq!(out["type"], "Full-time");
        assert!(out.get("matchScore").is_none());
    }

    #[test]
    fn test_row_conversion_formats_date_and_coordinates() {
        let row = JobRow {
            id: Uuid::new_v4(),
            title: "Nurse".to_string(),
            company: "Connaught Hospital".to_string(),
            location: "Freetown".to_string(),
            job_type: "Full-time".to_string(),
            salary: String::new(),
            description: "Ward duties".to_string(),
            requirements: vec!["Nursing".to_string()],
            posted_date: NaiveDate::from_ymd_opt(2024, 5, 7).unwrap(),
            latitude: Some(8.49),
            longitude: None,
            created_at: Utc::now(),
        };
        let id = row.id.to_string();
        let job = Job::from(row);
        assert_eq!(job.id, id);
        assert_eq!(job.posted_date, "2024-05-07");
        assert!(job.coordinates.is_none());
    }
}

use serde::{Deserialize, Serialize};

/// A CV as composed by the front-end form wizard.
///
/// Handed to the scorers and the matcher as a read-only snapshot. Every field
/// defaults so partially-filled drafts deserialize; missing data is scored as a
/// failed check rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvData {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub languages: Vec<LanguageSkill>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub age: Option<String>,
    pub summary: Option<String>,
    pub profile_photo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSkill {
    pub language: String,
    pub proficiency: String,
}

impl Education {
    /// An entry is complete once institution, degree and field of study are all filled.
    pub fn is_complete(&self) -> bool {
        !self.institution.is_empty() && !self.degree.is_empty() && !self.field_of_study.is_empty()
    }
}

impl Experience {
    /// Human label for advice messages, e.g. "Accountant at Rokel Bank".
    pub fn role_label(&self) -> String {
        match (self.position.is_empty(), self.company.is_empty()) {
            (false, false) => format!("{} at {}", self.position, self.company),
            (false, true) => self.position.clone(),
            (true, false) => format!("your role at {}", self.company),
            (true, true) => "one of your roles".to_string(),
        }
    }
}

/// Returns the value only when it is present and non-empty.
pub fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

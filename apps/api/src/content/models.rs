use std::fmt;

use serde::{Deserialize, Serialize};

/// Version of the stored/exported document shape. Bump on breaking changes
/// to `ContentRecord`; load and import validate against it.
pub const SCHEMA_VERSION: u32 = 1;

pub(crate) fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Supported display languages. Korean is the canonical language; English
/// and Japanese records are derived from it by translation and may lag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ko,
    En,
    Ja,
}

impl Language {
    pub const CANONICAL: Language = Language::Ko;

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// English name of the language, used in prompts.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::Ko => "Korean",
            Language::En => "English",
            Language::Ja => "Japanese",
        }
    }

    /// The languages derived from the canonical record by auto-translation.
    pub fn derived() -> [Language; 2] {
        [Language::En, Language::Ja]
    }

    pub fn all() -> [Language; 3] {
        [Language::Ko, Language::En, Language::Ja]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete content tree for one language. Stored as a single JSON
/// document per language; saves always replace the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub profile: Profile,
    pub projects: Vec<ProjectRecord>,
    pub career_history: Vec<CareerRecord>,
    pub skills: Vec<SkillCategory>,
    pub certifications: Vec<CertificationRecord>,
    pub lectures: Vec<LectureRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub english_name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    Consulting,
    #[serde(rename = "In-House")]
    InHouse,
    Project,
}

/// One client project. Ids are client-generated and time-based, never
/// content-addressed; uniqueness is advisory (see extraction::dedup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub client: String,
    pub role: String,
    /// Free-form, typically "YYYY.MM" or "YYYY.MM - YYYY.MM".
    pub period: String,
    pub description: String,
    pub tasks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    pub tags: Vec<String>,
    pub category: ProjectCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecord {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    /// Free-text label, e.g. "정규직" (full-time).
    #[serde(rename = "type")]
    pub employment_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub name: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureRecord {
    pub id: String,
    pub title: String,
    pub organizer: String,
    pub period: String,
    pub role: String,
    pub description: String,
    pub details: Vec<String>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::defaults::default_record;

    #[test]
    fn test_language_round_trips_lowercase() {
        let ja: Language = serde_json::from_str("\"ja\"").unwrap();
        assert_eq!(ja, Language::Ja);
        assert_eq!(serde_json::to_string(&Language::Ko).unwrap(), "\"ko\"");
    }

    #[test]
    fn test_category_serializes_with_hyphen() {
        assert_eq!(
            serde_json::to_string(&ProjectCategory::InHouse).unwrap(),
            "\"In-House\""
        );
        let parsed: ProjectCategory = serde_json::from_str("\"In-House\"").unwrap();
        assert_eq!(parsed, ProjectCategory::InHouse);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        for language in Language::all() {
            let record = default_record(language);
            let json = serde_json::to_string(&record).unwrap();
            let parsed: ContentRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, record);
        }
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let record = default_record(Language::Ko);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"careerHistory\""));
        assert!(json.contains("\"englishName\""));
        assert!(json.contains("\"schemaVersion\""));
        assert!(!json.contains("\"career_history\""));
    }

    #[test]
    fn test_schema_version_defaults_when_missing() {
        let json = r#"{
            "profile": {
                "name": "홍길동",
                "englishName": "Gildong Hong",
                "email": "gildong@example.com",
                "phone": "010-1234-5678",
                "summary": "요약",
                "links": []
            },
            "projects": [],
            "careerHistory": [],
            "skills": [],
            "certifications": [],
            "lectures": []
        }"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn test_career_type_field_name() {
        let career = CareerRecord {
            id: "c1".to_string(),
            company: "회사".to_string(),
            role: "팀장".to_string(),
            period: "2020.01 - 2023.04".to_string(),
            employment_type: "정규직".to_string(),
            description: None,
            details: vec![],
        };
        let json = serde_json::to_string(&career).unwrap();
        assert!(json.contains("\"type\":\"정규직\""));
        assert!(!json.contains("description"));
    }
}

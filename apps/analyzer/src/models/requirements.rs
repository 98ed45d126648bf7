use serde::{Deserialize, Serialize};

/// What the target job asks for. Resolved by the caller from a role catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRequirements {
    pub required_skills: Vec<String>,
    pub require_gpa: bool,
    pub description: String,
}

impl JobRequirements {
    pub fn with_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required_skills: skills.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let req: JobRequirements = serde_json::from_str(r#"{"required_skills": ["Rust"]}"#)
            .unwrap();
        assert_eq!(req.required_skills, vec!["Rust"]);
        assert!(!req.require_gpa);
        assert!(req.description.is_empty());
    }

    #[test]
    fn test_catalog_entry_deserializes() {
        let json = r#"{
            "description": "Builds backend services",
            "required_skills": ["Python", "SQL", "Docker"],
            "require_gpa": true
        }"#;
        let req: JobRequirements = serde_json::from_str(json).unwrap();
        assert_eq!(req.required_skills.len(), 3);
        assert!(req.require_gpa);
    }

    #[test]
    fn test_with_skills() {
        let req = JobRequirements::with_skills(["Go", "Kafka"]);
        assert_eq!(req.required_skills, vec!["Go", "Kafka"]);
    }
}

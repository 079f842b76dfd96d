use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::portfolio::{ExperienceRow, PortfolioRow, ProjectRow, SkillsRow};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutInfo {
    pub title: String,
    pub content: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub score: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub period: String,
}

/// Public portfolio representation. Built from `PortfolioRow` — the
/// database-assigned row id is dropped here and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: Uuid,
    pub personal: PersonalInfo,
    pub about: AboutInfo,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PortfolioRow> for Portfolio {
    fn from(row: PortfolioRow) -> Self {
        Self {
            id: row.portfolio_id,
            personal: row.personal.0,
            about: row.about.0,
            education: row.education.0,
            certifications: row.certifications.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skills {
    pub id: Uuid,
    pub technical: Vec<String>,
    pub transferable: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<SkillsRow> for Skills {
    fn from(row: SkillsRow) -> Self {
        Self {
            id: row.skills_id,
            technical: row.technical,
            transferable: row.transferable,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub position: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ExperienceRow> for Experience {
    fn from(row: ExperienceRow) -> Self {
        Self {
            id: row.experience_id,
            position: row.position,
            company: row.company,
            period: row.period,
            responsibilities: row.responsibilities,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.project_id,
            title: row.title,
            description: row.description,
            technologies: row.technologies,
            category: row.category,
            image: row.image,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;

    fn sample_portfolio_row() -> PortfolioRow {
        PortfolioRow {
            id: Uuid::new_v4(),
            portfolio_id: Uuid::new_v4(),
            singleton: true,
            personal: Json(PersonalInfo {
                name: "Srishti Goel".into(),
                tagline: "AI Generalist Digital Marketer".into(),
                description: "desc".into(),
                location: "Ghaziabad".into(),
                email: "srishti.186.goel@gmail.com".into(),
                phone: "+91 82794 37049".into(),
                portfolio: "Srishti Goel My Portfolio".into(),
            }),
            about: Json(AboutInfo {
                title: "About Me".into(),
                content: "content".into(),
                image: "https://example.com/a.jpg".into(),
            }),
            education: Json(vec![Education {
                degree: "B.Sc.".into(),
                institution: "AAFT".into(),
                period: "2024 – 2027".into(),
                score: None,
            }]),
            certifications: Json(vec![]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_portfolio_public_id_is_the_logical_id() {
        let row = sample_portfolio_row();
        let public_id = row.portfolio_id;
        let portfolio = Portfolio::from(row);
        assert_eq!(portfolio.id, public_id);
    }

    #[test]
    fn test_portfolio_serialization_never_exposes_row_id() {
        let row = sample_portfolio_row();
        let row_id = row.id;
        let value = serde_json::to_value(Portfolio::from(row)).unwrap();
        assert_eq!(value["personal"]["name"], "Srishti Goel");
        // The only `id` in the payload is the public one.
        assert_ne!(value["id"], serde_json::json!(row_id));
        assert!(value.get("portfolio_id").is_none());
        assert!(value.get("singleton").is_none());
    }

    #[test]
    fn test_skills_conversion_keeps_list_order() {
        let row = SkillsRow {
            id: Uuid::new_v4(),
            skills_id: Uuid::new_v4(),
            singleton: true,
            technical: vec!["Figma".into(), "SEMrush".into()],
            transferable: vec!["Storytelling".into()],
            updated_at: Utc::now(),
        };
        let skills = Skills::from(row);
        assert_eq!(skills.technical, vec!["Figma", "SEMrush"]);
        let value = serde_json::to_value(&skills).unwrap();
        assert!(value.get("skills_id").is_none());
        assert!(value.get("singleton").is_none());
    }

    #[test]
    fn test_experience_conversion_strips_row_id() {
        let row = ExperienceRow {
            id: Uuid::new_v4(),
            experience_id: Uuid::new_v4(),
            position: "Digital Marketing Intern".into(),
            company: "The Study Anchor".into(),
            period: "April 2025 - Present".into(),
            responsibilities: vec!["a".into(), "b".into()],
            created_at: Utc::now(),
        };
        let public_id = row.experience_id;
        let value = serde_json::to_value(Experience::from(row)).unwrap();
        assert_eq!(value["id"], serde_json::json!(public_id));
        assert!(value.get("experience_id").is_none());
    }
}

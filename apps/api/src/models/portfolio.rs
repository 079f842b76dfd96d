//! Store-native row types. These carry the database-assigned `id`, which is
//! why they never serialize directly into a response; the public
//! representations in `crate::portfolio::models` are produced from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::portfolio::models::{AboutInfo, Certification, Education, PersonalInfo};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub singleton: bool,
    pub personal: Json<PersonalInfo>,
    pub about: Json<AboutInfo>,
    pub education: Json<Vec<Education>>,
    pub certifications: Json<Vec<Certification>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillsRow {
    pub id: Uuid,
    pub skills_id: Uuid,
    pub singleton: bool,
    pub technical: Vec<String>,
    pub transferable: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExperienceRow {
    pub id: Uuid,
    pub experience_id: Uuid,
    pub position: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::models::{
    AboutInfo, Certification, Education, Experience, PersonalInfo, Portfolio, Project, Skills,
};
use crate::portfolio::repo::{self, PortfolioUpsert};
use crate::portfolio::seed::seed_if_absent;
use crate::state::AppState;
use crate::validation::validate_email;

#[derive(Debug, Deserialize)]
pub struct PortfolioUpsertRequest {
    pub personal: PersonalInfo,
    pub about: AboutInfo,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsUpsertRequest {
    pub technical: Vec<String>,
    pub transferable: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExperienceCreateRequest {
    pub position: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectCreateRequest {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub image: String,
}

/// Portfolio fields at the top level, with the other three collections
/// merged in under their own keys.
#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    #[serde(flatten)]
    pub portfolio: Portfolio,
    pub skills: Option<Skills>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedResponse<T> {
    pub message: String,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// GET /api/portfolio
/// Combined read. The only endpoint with a side effect on read: an empty
/// store is seeded with the default portfolio before responding.
pub async fn get_portfolio(
    State(state): State<AppState>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let row = match repo::get_portfolio(&state.db).await? {
        Some(row) => row,
        None => {
            seed_if_absent(&state.db).await?;
            repo::get_portfolio(&state.db)
                .await?
                .ok_or_else(|| anyhow::anyhow!("portfolio missing after seeding"))?
        }
    };

    let skills = repo::get_skills(&state.db).await?.map(Skills::from);
    let experience = repo::list_experience(&state.db)
        .await?
        .into_iter()
        .map(Experience::from)
        .collect();
    let projects = repo::list_projects(&state.db)
        .await?
        .into_iter()
        .map(Project::from)
        .collect();

    Ok(Json(PortfolioResponse {
        portfolio: Portfolio::from(row),
        skills,
        experience,
        projects,
    }))
}

/// PUT /api/portfolio
pub async fn update_portfolio(
    State(state): State<AppState>,
    Json(req): Json<PortfolioUpsertRequest>,
) -> Result<Json<UpdatedResponse<Portfolio>>, AppError> {
    validate_email("personal.email", &req.personal.email)?;

    let row = repo::upsert_portfolio(
        &state.db,
        PortfolioUpsert {
            portfolio_id: Uuid::new_v4(),
            personal: &req.personal,
            about: &req.about,
            education: &req.education,
            certifications: &req.certifications,
            now: Utc::now(),
        },
    )
    .await?;

    Ok(Json(UpdatedResponse {
        message: "Portfolio updated successfully".to_string(),
        data: Portfolio::from(row),
    }))
}

/// GET /api/skills
pub async fn get_skills(State(state): State<AppState>) -> Result<Json<Skills>, AppError> {
    let row = repo::get_skills(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Skills not found".to_string()))?;
    Ok(Json(Skills::from(row)))
}

/// PUT /api/skills
pub async fn update_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillsUpsertRequest>,
) -> Result<Json<UpdatedResponse<Skills>>, AppError> {
    let row = repo::upsert_skills(
        &state.db,
        Uuid::new_v4(),
        &req.technical,
        &req.transferable,
        Utc::now(),
    )
    .await?;

    Ok(Json(UpdatedResponse {
        message: "Skills updated successfully".to_string(),
        data: Skills::from(row),
    }))
}

/// GET /api/experience
pub async fn list_experience(
    State(state): State<AppState>,
) -> Result<Json<Vec<Experience>>, AppError> {
    let rows = repo::list_experience(&state.db).await?;
    Ok(Json(rows.into_iter().map(Experience::from).collect()))
}

/// POST /api/experience
pub async fn create_experience(
    State(state): State<AppState>,
    Json(req): Json<ExperienceCreateRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let row = repo::insert_experience(
        &state.db,
        Uuid::new_v4(),
        &req.position,
        &req.company,
        &req.period,
        &req.responsibilities,
        Utc::now(),
    )
    .await?;

    Ok(Json(CreatedResponse {
        message: "Experience created successfully".to_string(),
        id: row.experience_id,
    }))
}

/// DELETE /api/experience/:id
pub async fn delete_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !repo::delete_experience(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Experience {id} not found")));
    }
    Ok(Json(DeletedResponse {
        message: "Experience deleted successfully".to_string(),
    }))
}

/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let rows = repo::list_projects(&state.db).await?;
    Ok(Json(rows.into_iter().map(Project::from).collect()))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<ProjectCreateRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let row = repo::insert_project(
        &state.db,
        Uuid::new_v4(),
        &req.title,
        &req.description,
        &req.technologies,
        &req.category,
        &req.image,
        Utc::now(),
    )
    .await?;

    Ok(Json(CreatedResponse {
        message: "Project created successfully".to_string(),
        id: row.project_id,
    }))
}

/// DELETE /api/projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !repo::delete_project(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Project {id} not found")));
    }
    Ok(Json(DeletedResponse {
        message: "Project deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json as SqlJson;

    use crate::models::portfolio::{PortfolioRow, SkillsRow};

    fn portfolio_row() -> PortfolioRow {
        PortfolioRow {
            id: Uuid::new_v4(),
            portfolio_id: Uuid::new_v4(),
            singleton: true,
            personal: SqlJson(PersonalInfo {
                name: "Srishti Goel".into(),
                tagline: "AI Generalist Digital Marketer".into(),
                description: "desc".into(),
                location: "Ghaziabad".into(),
                email: "srishti.186.goel@gmail.com".into(),
                phone: "+91".into(),
                portfolio: "My Portfolio".into(),
            }),
            about: SqlJson(AboutInfo {
                title: "About Me".into(),
                content: "content".into(),
                image: "img".into(),
            }),
            education: SqlJson(vec![]),
            certifications: SqlJson(vec![]),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_portfolio_response_merges_collections_at_top_level() {
        let response = PortfolioResponse {
            portfolio: Portfolio::from(portfolio_row()),
            skills: Some(Skills::from(SkillsRow {
                id: Uuid::new_v4(),
                skills_id: Uuid::new_v4(),
                singleton: true,
                technical: vec!["X".into()],
                transferable: vec!["Y".into()],
                updated_at: Utc::now(),
            })),
            experience: vec![],
            projects: vec![],
        };

        let value = serde_json::to_value(&response).unwrap();
        // Portfolio fields are flattened to the top level...
        assert_eq!(value["personal"]["name"], "Srishti Goel");
        assert!(value.get("portfolio").is_none());
        // ...with the other collections merged in under their own keys.
        assert_eq!(value["skills"]["technical"][0], "X");
        assert!(value["experience"].as_array().unwrap().is_empty());
        assert!(value["projects"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_portfolio_upsert_request_requires_all_sections() {
        let body = serde_json::json!({
            "personal": {
                "name": "A", "tagline": "B", "description": "C",
                "location": "D", "email": "a@b.co", "phone": "E", "portfolio": "F"
            },
            "about": { "title": "T", "content": "C", "image": "I" },
            "education": []
        });
        // certifications missing
        assert!(serde_json::from_value::<PortfolioUpsertRequest>(body).is_err());
    }

    #[test]
    fn test_experience_request_requires_responsibilities() {
        let body = serde_json::json!({
            "position": "P", "company": "C", "period": "2024"
        });
        assert!(serde_json::from_value::<ExperienceCreateRequest>(body).is_err());
    }

    #[test]
    fn test_skills_request_requires_both_lists() {
        let body = serde_json::json!({ "technical": ["X"] });
        assert!(serde_json::from_value::<SkillsUpsertRequest>(body).is_err());
    }
}

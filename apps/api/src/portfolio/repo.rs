//! Data access for the portfolio, skills, experience and projects tables.
//! Every function is a single round trip; store errors propagate unmodified.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::portfolio::{ExperienceRow, PortfolioRow, ProjectRow, SkillsRow};
use crate::portfolio::models::{AboutInfo, Certification, Education, PersonalInfo};

/// Fields written by a portfolio upsert.
pub struct PortfolioUpsert<'a> {
    pub portfolio_id: Uuid,
    pub personal: &'a PersonalInfo,
    pub about: &'a AboutInfo,
    pub education: &'a [Education],
    pub certifications: &'a [Certification],
    pub now: DateTime<Utc>,
}

pub async fn get_portfolio(pool: &PgPool) -> Result<Option<PortfolioRow>, sqlx::Error> {
    sqlx::query_as::<_, PortfolioRow>("SELECT * FROM portfolio LIMIT 1")
        .fetch_optional(pool)
        .await
}

/// Atomic insert-or-merge keyed on the singleton sentinel. A concurrent pair
/// of upserts resolves inside Postgres; `portfolio_id` and `created_at`
/// survive the merge, `updated_at` is refreshed.
pub async fn upsert_portfolio(
    pool: &PgPool,
    params: PortfolioUpsert<'_>,
) -> Result<PortfolioRow, sqlx::Error> {
    sqlx::query_as::<_, PortfolioRow>(
        r#"
        INSERT INTO portfolio
            (portfolio_id, personal, about, education, certifications, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        ON CONFLICT (singleton) DO UPDATE SET
            personal = EXCLUDED.personal,
            about = EXCLUDED.about,
            education = EXCLUDED.education,
            certifications = EXCLUDED.certifications,
            updated_at = EXCLUDED.updated_at
        RETURNING *
        "#,
    )
    .bind(params.portfolio_id)
    .bind(Json(params.personal))
    .bind(Json(params.about))
    .bind(Json(params.education))
    .bind(Json(params.certifications))
    .bind(params.now)
    .fetch_one(pool)
    .await
}

pub async fn get_skills(pool: &PgPool) -> Result<Option<SkillsRow>, sqlx::Error> {
    sqlx::query_as::<_, SkillsRow>("SELECT * FROM skills LIMIT 1")
        .fetch_optional(pool)
        .await
}

pub async fn upsert_skills(
    pool: &PgPool,
    skills_id: Uuid,
    technical: &[String],
    transferable: &[String],
    now: DateTime<Utc>,
) -> Result<SkillsRow, sqlx::Error> {
    sqlx::query_as::<_, SkillsRow>(
        r#"
        INSERT INTO skills (skills_id, technical, transferable, updated_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (singleton) DO UPDATE SET
            technical = EXCLUDED.technical,
            transferable = EXCLUDED.transferable,
            updated_at = EXCLUDED.updated_at
        RETURNING *
        "#,
    )
    .bind(skills_id)
    .bind(technical)
    .bind(transferable)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn list_experience(pool: &PgPool) -> Result<Vec<ExperienceRow>, sqlx::Error> {
    sqlx::query_as::<_, ExperienceRow>("SELECT * FROM experience ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn insert_experience(
    pool: &PgPool,
    experience_id: Uuid,
    position: &str,
    company: &str,
    period: &str,
    responsibilities: &[String],
    created_at: DateTime<Utc>,
) -> Result<ExperienceRow, sqlx::Error> {
    sqlx::query_as::<_, ExperienceRow>(
        r#"
        INSERT INTO experience
            (experience_id, position, company, period, responsibilities, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(experience_id)
    .bind(position)
    .bind(company)
    .bind(period)
    .bind(responsibilities)
    .bind(created_at)
    .fetch_one(pool)
    .await
}

/// Deletes by public id; reports whether a record was removed.
pub async fn delete_experience(pool: &PgPool, experience_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM experience WHERE experience_id = $1")
        .bind(experience_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_projects(pool: &PgPool) -> Result<Vec<ProjectRow>, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn insert_project(
    pool: &PgPool,
    project_id: Uuid,
    title: &str,
    description: &str,
    technologies: &[String],
    category: &str,
    image: &str,
    created_at: DateTime<Utc>,
) -> Result<ProjectRow, sqlx::Error> {
    sqlx::query_as::<_, ProjectRow>(
        r#"
        INSERT INTO projects
            (project_id, title, description, technologies, category, image, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(project_id)
    .bind(title)
    .bind(description)
    .bind(technologies)
    .bind(category)
    .bind(image)
    .bind(created_at)
    .fetch_one(pool)
    .await
}

pub async fn delete_project(pool: &PgPool, project_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE project_id = $1")
        .bind(project_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

//! One-shot database seed. The whole procedure runs in a single transaction
//! gated on the portfolio insert itself, so concurrent or repeated calls
//! cannot duplicate the experience and project records.

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::portfolio::models::{AboutInfo, Certification, Education, PersonalInfo};

struct ExperienceSeed {
    position: &'static str,
    company: &'static str,
    period: &'static str,
    responsibilities: &'static [&'static str],
}

struct ProjectSeed {
    title: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    category: &'static str,
    image: &'static str,
}

fn seed_personal() -> PersonalInfo {
    PersonalInfo {
        name: "Srishti Goel".into(),
        tagline: "AI Generalist Digital Marketer".into(),
        description:
            "Strategically works to give AI-based solutions to all marketing needs of a brand"
                .into(),
        location: "Ghaziabad, Uttar Pradesh, India".into(),
        email: "srishti.186.goel@gmail.com".into(),
        phone: "+91 82794 37049".into(),
        portfolio: "Srishti Goel My Portfolio".into(),
    }
}

fn seed_about() -> AboutInfo {
    AboutInfo {
        title: "About Me".into(),
        content: "Strategic and creative digital marketer with a proven track record of driving \
                  measurable growth across content, engagement, and branding. At The Study Anchor, \
                  spearheaded content creation and digital campaigns that doubled video views and \
                  boosted YouTube subscribers by 250+ in just 3 months, using a combination of \
                  data-driven planning, event-led promotion, and platform analytics. Played a key \
                  role in increasing admissions by executing high-impact webinars, student-centric \
                  events, and optimized ad creatives. Known for blending visual storytelling and \
                  performance marketing to elevate digital presence and conversions."
            .into(),
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=988&q=80".into(),
    }
}

fn seed_education() -> Vec<Education> {
    vec![
        Education {
            degree: "Bachelor of Science in Digital Marketing".into(),
            institution: "Asian Academy of Film and Television, Noida".into(),
            period: "2024 – 2027 (Pursuing)".into(),
            score: None,
        },
        Education {
            degree: "Senior Secondary".into(),
            institution: "Parevartan School, Ghaziabad".into(),
            period: "Completed in 2024".into(),
            score: Some("97.7%".into()),
        },
    ]
}

fn seed_certifications() -> Vec<Certification> {
    vec![
        Certification {
            name: "Creative Skills Academy for Marketers".into(),
            issuer: "General Assembly (GA) | Adobe Certified Professional".into(),
            period: "Feb 2025 – May 2025".into(),
        },
        Certification {
            name: "Digital Marketing and E-Com Professional Certificate".into(),
            issuer: "Google | Issued by Coursera".into(),
            period: "July 2025".into(),
        },
    ]
}

const SEED_TECHNICAL: &[&str] = &[
    "Adobe Creative Cloud (Photoshop, Illustrator, Premiere Pro)",
    "Canva, CorelDRAW, Figma",
    "WordPress, Elementor, SEMrush",
    "Meta Business Suite, LinkedIn Ads Manager, Hootsuite",
    "Google Analytics, Google Search Console",
    "Microsoft Excel (Pivot Tables, Dashboarding), PowerPoint",
    "Basic HTML, CSS",
    "Generative AI Tools for Marketing",
];

const SEED_TRANSFERABLE: &[&str] = &[
    "Tech Adaptability & Quick Learning of New Tools",
    "Strategic Content Planning & Execution",
    "Cross-Functional Team Collaboration",
    "Campaign Project Management",
    "Digital Brand Storytelling",
    "Performance Analytics & ROI Optimization",
    "Adaptability in Fast-Paced Environments",
    "Creative Problem-Solving",
    "Effective Communication & Knowledge Sharing",
];

const SEED_EXPERIENCE: &[ExperienceSeed] = &[
    ExperienceSeed {
        position: "Digital Marketing Intern",
        company: "The Study Anchor",
        period: "April 2025 - Present",
        responsibilities: &[
            "Developed and executed content calendars aligned with campaign goals",
            "Planned and optimized digital marketing strategies across platforms",
            "Designed creative assets for social media and event promotion",
            "Organized webinars and virtual engagement events",
            "Analyzed digital performance metrics to boost ROI and user interaction",
        ],
    },
    ExperienceSeed {
        position: "Social Media Manager & Recruiter",
        company: "Looffers",
        period: "Nov 2024 – Mar 2025",
        responsibilities: &[
            "Created platform-specific content and managed publishing schedules",
            "Recruited and trained interns across content and marketing roles",
            "Monitored performance metrics and curated weekly insights",
        ],
    },
    ExperienceSeed {
        position: "Team Leader, Digital Marketing",
        company: "Sanklap Marketing",
        period: "Nov 2024 – Jan 2025",
        responsibilities: &[
            "Led a cross-functional team of marketers and designers",
            "Developed brand-specific content strategies and performance reports",
            "Oversaw hiring and resource allocation for campaign execution",
        ],
    },
    ExperienceSeed {
        position: "Graphic Designer",
        company: "Dream Hill Coffee",
        period: "May 2024 – Aug 2024",
        responsibilities: &[
            "Designed branded visuals for online and offline channels",
            "Collaborated on thematic content and digital promotions",
        ],
    },
];

const SEED_PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        title: "AI-Powered Content Strategy",
        description: "Comprehensive content strategy leveraging AI tools to optimize engagement \
                      and conversion rates across multiple platforms.",
        technologies: &["AI Tools", "Content Strategy", "Analytics"],
        category: "Strategy",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
    },
    ProjectSeed {
        title: "Multi-Platform Campaign Management",
        description: "Integrated marketing campaign across social media platforms with \
                      performance tracking and optimization.",
        technologies: &["Social Media", "Campaign Management", "ROI Analysis"],
        category: "Campaign",
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
    },
    ProjectSeed {
        title: "Brand Visual Identity Design",
        description: "Complete visual identity package including logos, social media templates, \
                      and marketing collaterals.",
        technologies: &["Adobe Creative Suite", "Brand Design", "Visual Identity"],
        category: "Design",
        image: "https://images.unsplash.com/photo-1558655146-d09347e92766?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
    },
    ProjectSeed {
        title: "Performance Analytics Dashboard",
        description: "Custom analytics dashboard for tracking marketing performance and \
                      generating actionable insights.",
        technologies: &["Google Analytics", "Data Visualization", "Performance Tracking"],
        category: "Analytics",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=500&q=80",
    },
];

/// Seeds the default portfolio, skills, experience and project records.
/// Returns `false` without writing anything if a portfolio already exists —
/// the gate is the portfolio insert itself, not a prior read.
pub async fn seed_if_absent(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let inserted = sqlx::query(
        r#"
        INSERT INTO portfolio (portfolio_id, personal, about, education, certifications)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (singleton) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(Json(seed_personal()))
    .bind(Json(seed_about()))
    .bind(Json(seed_education()))
    .bind(Json(seed_certifications()))
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if inserted == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    // Skills written through PUT /api/skills before the first portfolio read
    // are kept as-is.
    sqlx::query(
        r#"
        INSERT INTO skills (skills_id, technical, transferable)
        VALUES ($1, $2, $3)
        ON CONFLICT (singleton) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(to_owned_vec(SEED_TECHNICAL))
    .bind(to_owned_vec(SEED_TRANSFERABLE))
    .execute(&mut *tx)
    .await?;

    for exp in SEED_EXPERIENCE {
        sqlx::query(
            r#"
            INSERT INTO experience
                (experience_id, position, company, period, responsibilities, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(exp.position)
        .bind(exp.company)
        .bind(exp.period)
        .bind(to_owned_vec(exp.responsibilities))
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
    }

    for proj in SEED_PROJECTS {
        sqlx::query(
            r#"
            INSERT INTO projects
                (project_id, title, description, technologies, category, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(proj.title)
        .bind(proj.description)
        .bind(to_owned_vec(proj.technologies))
        .bind(proj.category)
        .bind(proj.image)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(
        "Seeded default portfolio with {} experience and {} project records",
        SEED_EXPERIENCE.len(),
        SEED_PROJECTS.len()
    );
    Ok(true)
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

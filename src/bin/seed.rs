//! Inserts the demo taxonomy and optionally promotes a profile to admin.
//!
//! Safe to run repeatedly: entries that already exist, matched by name under the same
//! parent, are left untouched.

use std::env;

use digibridge::{
    model::user::Role,
    server::{
        config::Config,
        data::{
            catalog::{
                category::{ExamCategoryRepository, SkillCategoryRepository},
                domain::DomainRepository,
                exam::ExamRepository,
                skill::SkillRepository,
                subject::SubjectRepository,
                university::UniversityRepository,
            },
            user::UserProfileRepository,
        },
        error::Error,
        startup,
    },
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

static ACADEMIC: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Université de Tunis El Manar",
        &[
            ("Computer Science", &["Algorithms", "Databases", "Operating Systems"]),
            ("Mathematics", &["Linear Algebra", "Probability"]),
        ],
    ),
    (
        "Université de Carthage",
        &[
            ("Engineering", &["Signal Processing", "Thermodynamics"]),
            ("Economics", &["Microeconomics", "Accounting"]),
        ],
    ),
    (
        "Université de Sfax",
        &[("Medicine", &["Anatomy", "Physiology"])],
    ),
];

static SKILLS: &[(&str, &[&str])] = &[
    ("Programming", &["Python", "JavaScript", "Rust"]),
    ("Design", &["UI Design", "Graphic Design"]),
    ("Languages", &["English", "French", "German"]),
];

static EXAMS: &[(&str, &[&str])] = &[
    ("Language Certificates", &["TOEFL", "IELTS", "DELF"]),
    ("National Exams", &["Baccalauréat"]),
    ("Admission Tests", &["GRE", "GMAT"]),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!("Seeding failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    seed_academic(&db).await?;
    seed_skills(&db).await?;
    seed_exams(&db).await?;

    if let Ok(google_id) = env::var("SEED_ADMIN_GOOGLE_ID") {
        promote_admin(&db, &google_id).await?;
    }

    tracing::info!("Seeding complete");

    Ok(())
}

async fn seed_academic(db: &DatabaseConnection) -> Result<(), Error> {
    let university_repo = UniversityRepository::new(db);
    let domain_repo = DomainRepository::new(db);
    let subject_repo = SubjectRepository::new(db);

    let existing = university_repo.list().await?;

    for (university_name, domains) in ACADEMIC {
        let university = match existing.iter().find(|u| u.name == *university_name) {
            Some(university) => university.clone(),
            None => {
                tracing::info!("Adding university {}", university_name);
                university_repo.create(university_name).await?
            }
        };

        let existing_domains = domain_repo.list_by_university(university.id).await?;

        for (domain_name, subjects) in *domains {
            let domain = match existing_domains.iter().find(|d| d.name == *domain_name) {
                Some(domain) => domain.clone(),
                None => domain_repo.create(university.id, domain_name).await?,
            };

            let existing_subjects = subject_repo.list_by_domain(domain.id).await?;

            for subject_name in *subjects {
                if !existing_subjects.iter().any(|s| s.name == *subject_name) {
                    subject_repo.create(domain.id, subject_name).await?;
                }
            }
        }
    }

    Ok(())
}

async fn seed_skills(db: &DatabaseConnection) -> Result<(), Error> {
    let category_repo = SkillCategoryRepository::new(db);
    let skill_repo = SkillRepository::new(db);

    let existing = category_repo.list().await?;

    for (category_name, skills) in SKILLS {
        let category = match existing.iter().find(|c| c.name == *category_name) {
            Some(category) => category.clone(),
            None => {
                tracing::info!("Adding skill category {}", category_name);
                category_repo.create(category_name).await?
            }
        };

        let existing_skills = skill_repo.list_by_category(category.id).await?;

        for skill_name in *skills {
            if !existing_skills.iter().any(|s| s.name == *skill_name) {
                skill_repo.create(category.id, skill_name).await?;
            }
        }
    }

    Ok(())
}

async fn seed_exams(db: &DatabaseConnection) -> Result<(), Error> {
    let category_repo = ExamCategoryRepository::new(db);
    let exam_repo = ExamRepository::new(db);

    let existing = category_repo.list().await?;

    for (category_name, exams) in EXAMS {
        let category = match existing.iter().find(|c| c.name == *category_name) {
            Some(category) => category.clone(),
            None => {
                tracing::info!("Adding exam category {}", category_name);
                category_repo.create(category_name).await?
            }
        };

        let existing_exams = exam_repo.list_by_category(category.id).await?;

        for exam_name in *exams {
            if !existing_exams.iter().any(|e| e.name == *exam_name) {
                exam_repo.create(category.id, exam_name).await?;
            }
        }
    }

    Ok(())
}

async fn promote_admin(db: &DatabaseConnection, google_id: &str) -> Result<(), Error> {
    let user_repo = UserProfileRepository::new(db);

    let Some(user) = user_repo.find_by_google_id(google_id).await? else {
        tracing::warn!(
            "No profile with Google ID {}; sign in once before promoting the account",
            google_id
        );
        return Ok(());
    };

    user_repo.set_role(user.id, Role::Admin).await?;

    tracing::info!(user_id = %user.id, email = %user.email, "Promoted user to admin");

    Ok(())
}

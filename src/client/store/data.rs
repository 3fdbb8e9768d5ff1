//! Approved resources and universities for the browse pages.
//!
//! Loaded once and then only on [`DataStore::refresh`]. When the API cannot be reached the
//! store serves built-in sample content so pages never render empty.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{
    client::api::{ApiClient, ClientError},
    model::{
        catalog::UniversityDto,
        resource::{ResourceCategory, ResourceDto, ResourceFilter},
    },
};

pub struct DataStore {
    api: ApiClient,
    resources: Vec<ResourceDto>,
    universities: Vec<UniversityDto>,
    using_fallback: bool,
    loaded: bool,
}

impl DataStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            resources: Vec::new(),
            universities: Vec::new(),
            using_fallback: false,
            loaded: false,
        }
    }

    /// Fetches resources and universities unless they were already loaded.
    pub async fn load(&mut self) {
        if self.loaded {
            return;
        }

        self.refresh().await;
    }

    /// Refetches resources and universities, falling back to sample data on failure.
    pub async fn refresh(&mut self) {
        match self.fetch().await {
            Ok((resources, universities)) => {
                self.resources = resources;
                self.universities = universities;
                self.using_fallback = false;
            }
            Err(e) => {
                tracing::error!("Failed to load resources, showing sample content: {}", e);

                self.resources = fallback_resources();
                self.universities = fallback_universities();
                self.using_fallback = true;
            }
        }

        self.loaded = true;
    }

    async fn fetch(&self) -> Result<(Vec<ResourceDto>, Vec<UniversityDto>), ClientError> {
        futures::future::try_join(
            self.api.resources(&ResourceFilter::default()),
            self.api.universities(),
        )
        .await
    }

    pub fn resources(&self) -> &[ResourceDto] {
        &self.resources
    }

    pub fn universities(&self) -> &[UniversityDto] {
        &self.universities
    }

    pub fn using_fallback(&self) -> bool {
        self.using_fallback
    }

    /// Resources whose title or description contains `term`, ignoring case
    pub fn search(&self, term: &str) -> Vec<&ResourceDto> {
        self.filter(&ResourceFilter {
            search: Some(term.to_string()),
            ..Default::default()
        })
    }

    pub fn filter_by_university(&self, university_id: i32) -> Vec<&ResourceDto> {
        self.filter(&ResourceFilter {
            university_id: Some(university_id),
            ..Default::default()
        })
    }

    pub fn filter_by_domain(&self, domain_id: i32) -> Vec<&ResourceDto> {
        self.filter(&ResourceFilter {
            domain_id: Some(domain_id),
            ..Default::default()
        })
    }

    pub fn filter_by_subject(&self, subject_id: i32) -> Vec<&ResourceDto> {
        self.filter(&ResourceFilter {
            subject_id: Some(subject_id),
            ..Default::default()
        })
    }

    pub fn filter_by_skill(&self, skill_id: i32) -> Vec<&ResourceDto> {
        self.filter(&ResourceFilter {
            skill_id: Some(skill_id),
            ..Default::default()
        })
    }

    pub fn filter_by_exam(&self, exam_id: i32) -> Vec<&ResourceDto> {
        self.filter(&ResourceFilter {
            exam_id: Some(exam_id),
            ..Default::default()
        })
    }

    pub fn filter(&self, filter: &ResourceFilter) -> Vec<&ResourceDto> {
        self.resources.iter().filter(|r| filter.matches(r)).collect()
    }
}

fn sample_timestamp() -> NaiveDateTime {
    DateTime::<Utc>::UNIX_EPOCH.naive_utc()
}

fn fallback_universities() -> Vec<UniversityDto> {
    vec![
        UniversityDto {
            id: 1,
            name: "Université de Tunis El Manar".to_string(),
        },
        UniversityDto {
            id: 2,
            name: "Université de Carthage".to_string(),
        },
    ]
}

fn fallback_resources() -> Vec<ResourceDto> {
    let resource = |id: i32, title: &str, description: &str, category: ResourceCategory| ResourceDto {
        id,
        title: title.to_string(),
        description: description.to_string(),
        url: format!("https://example.com/resources/{}", id),
        category,
        is_approved: true,
        submitted_by: None,
        created_at: sample_timestamp(),
        updated_at: sample_timestamp(),
    };

    vec![
        resource(
            1,
            "Introduction to Algorithms",
            "Lecture notes covering sorting, graphs and dynamic programming",
            ResourceCategory::Subject {
                subject_id: 1,
                subject_name: "Algorithms".to_string(),
                domain_id: 1,
                domain_name: "Computer Science".to_string(),
                university_id: 1,
                university_name: "Université de Tunis El Manar".to_string(),
            },
        ),
        resource(
            2,
            "Linear Algebra Exercises",
            "Solved exercises on matrices, determinants and eigenvalues",
            ResourceCategory::Subject {
                subject_id: 2,
                subject_name: "Linear Algebra".to_string(),
                domain_id: 2,
                domain_name: "Mathematics".to_string(),
                university_id: 2,
                university_name: "Université de Carthage".to_string(),
            },
        ),
        resource(
            3,
            "Python for Beginners",
            "A hands-on course introducing Python syntax and data structures",
            ResourceCategory::Skill {
                skill_id: 1,
                skill_name: "Python".to_string(),
                category_id: 1,
                category_name: "Programming".to_string(),
            },
        ),
        resource(
            4,
            "TOEFL Practice Test",
            "Full-length reading, listening, speaking and writing practice",
            ResourceCategory::Exam {
                exam_id: 1,
                exam_name: "TOEFL".to_string(),
                category_id: 1,
                category_name: "Language Certificates".to_string(),
            },
        ),
    ]
}

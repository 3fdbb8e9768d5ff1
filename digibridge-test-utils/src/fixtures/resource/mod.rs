//! Resource and resource request fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    model::{ResourceModel, ResourceRequestModel},
    TestContext, TestError,
};

impl TestContext {
    pub fn resource<'a>(&'a mut self) -> ResourceFixtures<'a> {
        ResourceFixtures { setup: self }
    }
}

pub struct ResourceFixtures<'a> {
    setup: &'a mut TestContext,
}

/// Which taxonomy entry a fixture resource is attached to.
#[derive(Clone, Copy, Debug)]
pub enum FixtureCategory {
    Subject(i32),
    Skill(i32),
    Exam(i32),
}

impl<'a> ResourceFixtures<'a> {
    /// Insert a resource titled `title` under `category`.
    pub async fn insert_resource(
        &mut self,
        title: &str,
        category: FixtureCategory,
        is_approved: bool,
        submitted_by: Option<i32>,
    ) -> Result<ResourceModel, TestError> {
        let now = Utc::now().naive_utc();
        let (subject_id, skill_id, exam_id) = match category {
            FixtureCategory::Subject(id) => (Some(id), None, None),
            FixtureCategory::Skill(id) => (None, Some(id), None),
            FixtureCategory::Exam(id) => (None, None, Some(id)),
        };

        Ok(entity::resource::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(format!("{} lecture notes and exercises", title)),
            url: ActiveValue::Set("https://example.com/notes.pdf".to_string()),
            subject_id: ActiveValue::Set(subject_id),
            skill_id: ActiveValue::Set(skill_id),
            exam_id: ActiveValue::Set(exam_id),
            is_approved: ActiveValue::Set(is_approved),
            submitted_by: ActiveValue::Set(submitted_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }

    /// Insert a pending request from `user_id` for material on `subject_id`.
    pub async fn insert_request(
        &mut self,
        user_id: i32,
        subject_id: i32,
        status: &str,
    ) -> Result<ResourceRequestModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::resource_request::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            subject_id: ActiveValue::Set(subject_id),
            title: ActiveValue::Set("Past exam papers".to_string()),
            description: ActiveValue::Set(
                "Looking for past exam papers with worked solutions".to_string(),
            ),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?)
    }
}

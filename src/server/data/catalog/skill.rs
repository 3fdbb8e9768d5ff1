use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::{SkillCategoryModel, SkillModel};

pub struct SkillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SkillRepository<'a, C> {
    /// Creates a new instance of [`SkillRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, category_id: i32, name: &str) -> Result<SkillModel, DbErr> {
        let now = Utc::now().naive_utc();

        entity::skill::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category_id: ActiveValue::Set(category_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, skill_id: i32) -> Result<Option<SkillModel>, DbErr> {
        entity::prelude::Skill::find_by_id(skill_id)
            .one(self.db)
            .await
    }

    /// Lists every skill with its category, ordered by name
    pub async fn list(&self) -> Result<Vec<(SkillModel, Option<SkillCategoryModel>)>, DbErr> {
        entity::prelude::Skill::find()
            .find_also_related(entity::skill_category::Entity)
            .order_by_asc(entity::skill::Column::Name)
            .all(self.db)
            .await
    }

    /// Lists the skills of a category ordered by name
    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<SkillModel>, DbErr> {
        entity::prelude::Skill::find()
            .filter(entity::skill::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::skill::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets skills with their categories by skill ID
    pub async fn find_by_ids(
        &self,
        skill_ids: &[i32],
    ) -> Result<Vec<(SkillModel, Option<SkillCategoryModel>)>, DbErr> {
        entity::prelude::Skill::find()
            .filter(entity::skill::Column::Id.is_in(skill_ids.iter().copied()))
            .find_also_related(entity::skill_category::Entity)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        skill_id: i32,
        category_id: i32,
        name: &str,
    ) -> Result<Option<SkillModel>, DbErr> {
        let Some(skill) = self.get(skill_id).await? else {
            return Ok(None);
        };

        let mut skill_am = skill.into_active_model();
        skill_am.name = ActiveValue::Set(name.to_string());
        skill_am.category_id = ActiveValue::Set(category_id);
        skill_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(skill_am.update(self.db).await?))
    }

    pub async fn delete_many(&self, skill_ids: &[i32]) -> Result<DeleteResult, DbErr> {
        entity::prelude::Skill::delete_many()
            .filter(entity::skill::Column::Id.is_in(skill_ids.iter().copied()))
            .exec(self.db)
            .await
    }
}

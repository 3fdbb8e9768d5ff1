use sea_orm::entity::prelude::*;

/// A link to an educational asset.
///
/// Exactly one of `subject_id`, `skill_id` or `exam_id` is set. The schema does not
/// enforce this, the resource service does.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resource")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub url: String,
    pub subject_id: Option<i32>,
    pub skill_id: Option<i32>,
    pub exam_id: Option<i32>,
    pub is_approved: bool,
    pub submitted_by: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subject::Entity",
        from = "Column::SubjectId",
        to = "super::subject::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::skill::Entity",
        from = "Column::SkillId",
        to = "super::skill::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Skill,
    #[sea_orm(
        belongs_to = "super::exam::Entity",
        from = "Column::ExamId",
        to = "super::exam::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Exam,
    #[sea_orm(
        belongs_to = "super::user_profile::Entity",
        from = "Column::SubmittedBy",
        to = "super::user_profile::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    UserProfile,
    #[sea_orm(has_many = "super::resource_submission::Entity")]
    ResourceSubmission,
}

impl Related<super::subject::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl Related<super::exam::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfile.def()
    }
}

impl Related<super::resource_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceSubmission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

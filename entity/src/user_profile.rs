use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub google_id: String,
    pub email: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    /// Either `user` or `admin`
    pub role: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::resource::Entity")]
    Resource,
    #[sea_orm(has_many = "super::resource_request::Entity")]
    ResourceRequest,
    #[sea_orm(has_many = "super::resource_submission::Entity")]
    ResourceSubmission,
}

impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resource.def()
    }
}

impl Related<super::resource_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceRequest.def()
    }
}

impl Related<super::resource_submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceSubmission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

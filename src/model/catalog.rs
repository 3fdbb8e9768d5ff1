//! Taxonomy DTOs: the University → Domain → Subject hierarchy and the two-level skill and
//! exam taxonomies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UniversityDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DomainDto {
    pub id: i32,
    pub name: String,
    pub university_id: i32,
    pub university_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubjectDto {
    pub id: i32,
    pub name: String,
    pub domain_id: i32,
    pub domain_name: String,
    pub university_id: i32,
    pub university_name: String,
}

/// A skill category or an exam category
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SkillDto {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub category_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExamDto {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
    pub category_name: String,
}

/// Payload for creating or renaming an entity that only carries a name
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NamedEntityDto {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct DomainPayload {
    pub name: String,
    pub university_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SubjectPayload {
    pub name: String,
    pub domain_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SkillPayload {
    pub name: String,
    pub category_id: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ExamPayload {
    pub name: String,
    pub category_id: i32,
}

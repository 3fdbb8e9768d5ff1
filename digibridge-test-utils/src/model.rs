//! Database model type aliases for test utilities.
//!
//! These aliases match the ones used by the main crate so fixtures read the same way.

pub type UniversityModel = entity::university::Model;
pub type DomainModel = entity::domain::Model;
pub type SubjectModel = entity::subject::Model;
pub type SkillCategoryModel = entity::skill_category::Model;
pub type SkillModel = entity::skill::Model;
pub type ExamCategoryModel = entity::exam_category::Model;
pub type ExamModel = entity::exam::Model;
pub type UserProfileModel = entity::user_profile::Model;
pub type ResourceModel = entity::resource::Model;
pub type ResourceRequestModel = entity::resource_request::Model;

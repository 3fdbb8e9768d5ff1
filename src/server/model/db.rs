//! Database model type aliases.
//!
//! Short names for the SeaORM entity models so signatures across repositories and services
//! don't need to spell out the `entity` crate paths.

/// A university, the root of the academic hierarchy.
pub type UniversityModel = entity::university::Model;

/// An academic field within a university, e.g. Engineering.
pub type DomainModel = entity::domain::Model;

/// A course within a domain.
pub type SubjectModel = entity::subject::Model;

pub type SkillCategoryModel = entity::skill_category::Model;
pub type SkillModel = entity::skill::Model;
pub type ExamCategoryModel = entity::exam_category::Model;
pub type ExamModel = entity::exam::Model;

/// A signed-in user's profile.
///
/// # Fields (from `entity::user_profile::Model`)
/// - `id` - Primary key
/// - `google_id` - Google account subject, unique
/// - `email` - Email from the last sign-in
/// - `full_name` - Display name from the last sign-in
/// - `avatar_url` - Profile picture URL (nullable)
/// - `role` - `user` or `admin`
/// - `created_at` - When the profile was created
/// - `updated_at` - When the profile was last refreshed or modified
pub type UserProfileModel = entity::user_profile::Model;

/// A link to an educational asset filed under exactly one subject, skill or exam.
///
/// # Fields (from `entity::resource::Model`)
/// - `id` - Primary key
/// - `title` - Title
/// - `description` - Free text description
/// - `url` - Absolute http(s) URL of the asset
/// - `subject_id` / `skill_id` / `exam_id` - Category, exactly one set
/// - `is_approved` - Whether the resource is publicly visible
/// - `submitted_by` - Submitting user (nullable, cleared when the user is deleted)
/// - `created_at` - When the resource was created
/// - `updated_at` - When the resource was last modified
pub type ResourceModel = entity::resource::Model;

pub type ResourceSubmissionModel = entity::resource_submission::Model;

/// A user's request for material on a subject.
pub type ResourceRequestModel = entity::resource_request::Model;

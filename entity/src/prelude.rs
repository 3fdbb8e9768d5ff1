pub use super::domain::Entity as Domain;
pub use super::exam::Entity as Exam;
pub use super::exam_category::Entity as ExamCategory;
pub use super::resource::Entity as Resource;
pub use super::resource_request::Entity as ResourceRequest;
pub use super::resource_submission::Entity as ResourceSubmission;
pub use super::skill::Entity as Skill;
pub use super::skill_category::Entity as SkillCategory;
pub use super::subject::Entity as Subject;
pub use super::university::Entity as University;
pub use super::user_profile::Entity as UserProfile;

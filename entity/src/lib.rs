//! SeaORM entities for the DigiBridge schema.
//!
//! Each module mirrors one table created by the `migration` crate.

pub mod prelude;

pub mod domain;
pub mod exam;
pub mod exam_category;
pub mod resource;
pub mod resource_request;
pub mod resource_submission;
pub mod skill;
pub mod skill_category;
pub mod subject;
pub mod university;
pub mod user_profile;

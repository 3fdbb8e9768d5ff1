//! Taxonomy repositories.

pub mod category;
pub mod domain;
pub mod exam;
pub mod skill;
pub mod subject;
pub mod university;

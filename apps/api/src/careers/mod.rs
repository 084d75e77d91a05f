// Career matching: ranked roles with matching and missing skills.

pub mod catalog;
pub mod handlers;

pub mod admin;
pub mod campaign;
pub mod category;
pub mod dashboard;

pub mod admin;
pub mod projects;
pub mod wall;

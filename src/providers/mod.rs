pub mod file;
pub mod github;

pub mod achievement;
pub mod blog;
pub mod contact;
pub mod profile;
pub mod project;

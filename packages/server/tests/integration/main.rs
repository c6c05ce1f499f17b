mod common;

mod profile;
mod project;

pub mod merge;
pub mod models;
pub mod prompts;
pub mod resume_parser;
pub mod scoring;

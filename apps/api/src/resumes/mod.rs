pub mod handlers;
pub mod pipeline;
pub mod repository;

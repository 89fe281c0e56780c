pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod presentation;
pub mod templates_structs;

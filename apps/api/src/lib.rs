pub mod analytics;
pub mod applications;
pub mod config;
pub mod documents;
pub mod errors;
pub mod extract;
pub mod jobs;
pub mod models;
pub mod routes;
pub mod settings;
pub mod state;
pub mod store;

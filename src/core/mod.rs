pub mod actor_client;
pub mod config;
pub mod error;
pub mod format;
pub mod jobs;
pub mod params;

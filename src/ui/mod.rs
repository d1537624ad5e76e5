//! Terminal output for the one-shot search commands

pub mod job_display;
pub mod progress;
pub mod theme;

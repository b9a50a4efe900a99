pub mod config;
pub mod logging;

pub mod batch;
pub mod content;
pub mod error;
pub mod filename;

//! Configuration loading and management for the attendance engine.
//!
//! This module loads the engine configuration (work policy and server
//! settings) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Listening on {}", config.server().bind_address());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{
    DEFAULT_MINUTES_PER_WORKING_DAY, EngineConfig, MAX_MINUTES_PER_WORKING_DAY, ServerConfig,
    WorkPolicy,
};

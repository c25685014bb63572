//! Configuration management for the Jenkins inventory toolkit.
//!
//! This crate provides types and loaders for managing Jenkins connection
//! configuration from `.env` files and environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, DotenvStatus, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};


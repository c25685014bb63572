//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Load `.env` from the working directory and enforce the `.env.example` contract.
//! - Provide a builder-pattern `ConfigLoader` that merges environment and explicit values.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Talking to Jenkins (see the client crate).
//! - Logging setup; a missing `.env` is reported through `DotenvStatus` for the caller to log.
//!
//! Invariants / Assumptions:
//! - Explicit `with_*` values take precedence over environment variables when applied later.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before any file is read.

mod builder;
mod dotenv;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use dotenv::DotenvStatus;
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;

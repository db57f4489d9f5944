//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → loader.rs (optional TOML file)
//!     → args.rs (environment variables and flags, via clap)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so both services start with no config at all
//! - The listener port default depends on the service role
//! - Validation separates syntactic (serde) from semantic checks

pub mod args;
pub mod loader;
pub mod schema;
pub mod validation;

pub use args::{ServiceArgs, UpstreamArgs};
pub use loader::{load_config, parse_config, ConfigError, ConfigOverrides};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig, ServiceRole, TimeoutConfig,
    UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! caller overrides (already parsed from JSON/TOML/any source)
//!     → validation.rs (header name syntax checks)
//!     → loader.rs (apply defaults, derive collect/inject lists)
//!     → PropagationConfig (validated, immutable)
//!     → read by collectors and injectors downstream
//! ```
//!
//! # Design Decisions
//! - Config is immutable once built; every `load` call produces a fresh value
//! - All override fields have defaults to allow empty overrides
//! - Validation runs before any derived field is computed
//! - Shape errors (not a list) and content errors (bad names) are distinct

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load;
pub use schema::PropagationConfig;
pub use schema::PropagationOverrides;
pub use schema::REQUEST_ID_HEADER;
pub use validation::ConfigError;

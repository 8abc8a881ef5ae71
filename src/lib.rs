//! Request-tracing header propagation configuration.
//!
//! Describes which HTTP headers a tracing system collects from inbound
//! requests and injects into outbound ones, with a correlation-id header
//! enabled by default. Callers hand in an overrides structure already
//! parsed from whatever source they use; this crate validates it and
//! derives the effective configuration.

pub mod config;

pub use config::loader::load;
pub use config::schema::PropagationConfig;
pub use config::schema::PropagationOverrides;
pub use config::schema::REQUEST_ID_HEADER;
pub use config::validation::{is_valid_header_name, validate_header_list, ConfigError};

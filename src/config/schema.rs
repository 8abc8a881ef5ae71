//! Configuration schema definitions.
//!
//! This module defines the override and result records for header
//! propagation. All types derive Serde traits so callers can deserialize
//! overrides from whatever source they already parse, and snapshot the
//! effective configuration if they need to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the correlation-id header generated and propagated by default.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Caller-supplied overrides for the propagation configuration.
///
/// Every field has a default, so `PropagationOverrides::default()` (or an
/// empty mapping in a serialized source) is a valid input. Unrecognized
/// keys in the source document are ignored during deserialization.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PropagationOverrides {
    /// Auto-generate and inject the correlation-id header.
    pub set_and_propagate_request_id: bool,

    /// Echo injected headers on responses as well.
    pub propagate_in_responses: bool,

    /// Header names to collect from inbound requests.
    ///
    /// Kept as a raw value so that shape mistakes (a bare string, a number)
    /// surface as a validation error at the load call, not as a
    /// deserialization failure far from it.
    pub headers_to_propagate: Value,
}

impl Default for PropagationOverrides {
    fn default() -> Self {
        Self {
            set_and_propagate_request_id: true,
            propagate_in_responses: false,
            headers_to_propagate: Value::Array(Vec::new()),
        }
    }
}

/// Validated header propagation configuration.
///
/// Built by `loader::load`; immutable once returned. Each call produces an
/// independent value, never an alias of the caller's input, so configs can
/// be handed around without coordination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PropagationConfig {
    /// Whether the correlation-id header is generated and injected.
    pub set_and_propagate_request_id: bool,

    /// Whether injected headers are echoed on responses. Carried for the
    /// response-side collaborator; not interpreted here.
    pub propagate_in_responses: bool,

    /// Name of the correlation-id header (always [`REQUEST_ID_HEADER`]).
    pub generate_and_propagate_header: String,

    /// Header names to read from inbound requests, in caller order,
    /// duplicates preserved.
    pub headers_to_collect: Vec<String>,

    /// Header names to set on outbound traffic: `headers_to_collect`,
    /// prefixed with the correlation-id header when enabled.
    pub headers_to_inject: Vec<String>,
}

//! Configuration loading and normalization.

use serde_json::Value;

use crate::config::schema::{PropagationConfig, PropagationOverrides, REQUEST_ID_HEADER};
use crate::config::validation::{validate_header_list, ConfigError};

/// Build a validated [`PropagationConfig`] from caller overrides.
///
/// Absent fields take their documented defaults; pass
/// `PropagationOverrides::default()` when nothing is overridden. The header
/// list is validated before any derived field is computed, and a validation
/// failure is returned unchanged: no partial configuration ever exists.
pub fn load(overrides: PropagationOverrides) -> Result<PropagationConfig, ConfigError> {
    let PropagationOverrides {
        set_and_propagate_request_id,
        propagate_in_responses,
        headers_to_propagate,
    } = overrides;

    validate_header_list(&headers_to_propagate)?;

    // Post-validation every entry is a string; own the entries so the
    // result never aliases the caller's input.
    let headers_to_collect: Vec<String> = headers_to_propagate
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let mut headers_to_inject = Vec::with_capacity(headers_to_collect.len() + 1);
    if set_and_propagate_request_id {
        headers_to_inject.push(REQUEST_ID_HEADER.to_owned());
    }
    headers_to_inject.extend(headers_to_collect.iter().cloned());

    tracing::debug!(
        collect = headers_to_collect.len(),
        inject = headers_to_inject.len(),
        "propagation config loaded"
    );

    Ok(PropagationConfig {
        set_and_propagate_request_id,
        propagate_in_responses,
        generate_and_propagate_header: REQUEST_ID_HEADER.to_owned(),
        headers_to_collect,
        headers_to_inject,
    })
}

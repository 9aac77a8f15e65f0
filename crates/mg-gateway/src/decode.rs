//! Reply text → [`AnalysisResponse`].
//!
//! Parse, validate against the registered JSON Schema, then decode. Any
//! failure rejects the whole reply.

use std::sync::LazyLock;

use mg_core::AnalysisResponse;
use mg_schema::{SchemaError, SchemaRegistry, names};

use crate::error::GatewayError;

static REGISTRY: LazyLock<SchemaRegistry> = LazyLock::new(SchemaRegistry::new);

/// Decode the model's reply text into a report.
///
/// # Errors
///
/// [`GatewayError::EmptyReply`] for blank text, [`GatewayError::Parse`] for
/// invalid JSON, [`GatewayError::Shape`] when the JSON does not match the
/// report contract.
pub fn decode_report(text: &str) -> Result<AnalysisResponse, GatewayError> {
    let body = strip_code_fence(text.trim());
    if body.is_empty() {
        return Err(GatewayError::EmptyReply { reason: None });
    }

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| GatewayError::Parse(e.to_string()))?;

    REGISTRY
        .validate(names::ANALYSIS_RESPONSE, &value)
        .map_err(|e| match e {
            SchemaError::ValidationFailed { errors } => GatewayError::Shape { errors },
            other => GatewayError::Shape {
                errors: vec![other.to_string()],
            },
        })?;

    serde_json::from_value(value).map_err(|e| GatewayError::Shape {
        errors: vec![e.to_string()],
    })
}

/// Drop a surrounding Markdown code fence (```` ```json ... ``` ````).
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.find('\n').map_or("", |newline| &rest[newline + 1..]);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

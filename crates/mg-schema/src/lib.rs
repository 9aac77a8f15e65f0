//! # mg-schema
//!
//! JSON Schema generation, validation, and registry for MindGuard.
//!
//! The request/response types are defined in `mg-core` with
//! `#[derive(JsonSchema)]`. This crate turns them into a named registry so
//! the gateway can validate a raw model reply before decoding it, and the
//! CLI can publish the contract (`mindguard schema`).

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;

/// Registered schema names.
pub mod names {
    pub const ASSESSMENT_REQUEST: &str = "assessment_request";
    pub const ANALYSIS_RESPONSE: &str = "analysis_response";
    pub const CATEGORY: &str = "category";
}

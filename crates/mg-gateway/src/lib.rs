//! # mg-gateway
//!
//! The analysis request gateway: turns an [`AssessmentRequest`] into an
//! [`AnalysisResponse`] by asking an external model.
//!
//! [`AnalysisGateway`] is the seam the UI depends on. [`GeminiClient`] is
//! the production implementation; tests substitute stubs.
//!
//! A call either yields a fully decoded report or a [`GatewayError`]. The
//! error is one of two kinds:
//! - external-call failures (`Http`, `Timeout`, `Api`, `RateLimited`)
//! - reply-shape failures (`EmptyReply`, `Parse`, `Shape`)

mod decode;
mod error;
mod gemini;
mod http;
mod prompt;
mod schema;

pub use decode::decode_report;
pub use error::GatewayError;
pub use gemini::GeminiClient;
pub use prompt::build_prompt;
pub use schema::response_schema;

use async_trait::async_trait;
use mg_core::{AnalysisResponse, AssessmentRequest};

/// Anything that can analyze an assessment.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Analyze one request. Exactly one upstream call per invocation.
    async fn analyze(&self, request: &AssessmentRequest)
    -> Result<AnalysisResponse, GatewayError>;
}

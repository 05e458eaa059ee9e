//! Validation span helpers.
//!
//! Raw values never go into spans or events; they may be secrets.

use tracing::Span;

use crate::error::Result;
use crate::result::EnvResult;

/// Start a span for one validation pass.
///
/// The `env.outcome` field is declared empty and filled by
/// [`record_outcome`].
pub fn start_validate_span(fields: usize) -> Span {
    tracing::debug_span!(
        "env.validate",
        "env.fields" = fields,
        "env.outcome" = tracing::field::Empty,
    )
}

/// Record how the pass ended on `span`.
pub fn record_outcome(span: &Span, outcome: &Result<EnvResult>) {
    match outcome {
        Ok(result) => {
            span.record("env.outcome", "ok");
            span.in_scope(|| tracing::debug!(validated = result.len(), "environment valid"));
        }
        Err(e) => {
            span.record("env.outcome", "failed");
            span.in_scope(|| {
                tracing::debug!(key = e.key(), reason = e.kind(), "environment invalid");
            });
        }
    }
}

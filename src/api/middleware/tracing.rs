//! HTTP request/response tracing middleware.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span, field};

/// Opens one `request` span per HTTP request.
///
/// The span carries `method` and `uri`, plus an empty `code` field that the
/// redirect handler fills with the matched short code.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            code = field::Empty,
        )
    }
}

/// Creates a tracing middleware for HTTP requests.
///
/// Responses are logged at `INFO` with status and latency in milliseconds:
///
/// ```text
/// INFO request{method=GET uri=/gh/dotfiles code=gh}: finished processing request latency=0 ms status=307
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_span_fields() {
        let subscriber = tracing_subscriber::fmt().with_max_level(Level::INFO).finish();

        tracing::subscriber::with_default(subscriber, || {
            let request = Request::get("/gh/dotfiles").body(()).unwrap();
            let span = RequestSpan.make_span(&request);

            assert!(!span.is_disabled());
            assert!(span.field("method").is_some());
            assert!(span.field("uri").is_some());
            assert!(span.field("code").is_some());
        });
    }
}

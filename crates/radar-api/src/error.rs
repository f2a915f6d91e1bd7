use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use radar_core::{ExError, ExErrorKind, RadarError};
use radar_core_types::RequestContext;

/// Client-facing error for the radar endpoint
///
/// Validation failures and an empty selection are both the caller's
/// problem and map to 422.
#[derive(Debug)]
pub struct ApiError(ExError);

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

fn correlate(err: ExError, ctx: &RequestContext) -> ExError {
    let err = err.with_request_id(ctx.request_id.clone());
    match &ctx.trace_id {
        Some(trace_id) => err.with_trace_id(trace_id.clone()),
        None => err,
    }
}

impl ApiError {
    pub fn from_radar(err: RadarError, ctx: &RequestContext) -> Self {
        Self(correlate(ExError::from(err), ctx))
    }

    pub fn rejected(rejection: JsonRejection, ctx: &RequestContext) -> Self {
        let err = ExError::new(ExErrorKind::InvalidInput)
            .with_op("radar")
            .with_message(rejection.body_text());
        Self(correlate(err, ctx))
    }

    pub fn inner(&self) -> &ExError {
        &self.0
    }

    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ExErrorKind::InvalidInput
            | ExErrorKind::UnknownProtocol
            | ExErrorKind::NegativeCount
            | ExErrorKind::NoValidTargets => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            code: self.0.code(),
            message: self.0.message().to_string(),
            field: self.0.field().map(str::to_string),
            request_id: self.0.request_id().map(|id| id.to_string()),
            trace_id: self.0.trace_id().map(|id| id.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_core_types::TraceId;

    #[test]
    fn test_status_mapping() {
        let ctx = RequestContext::new();
        let cases = [
            (
                RadarError::NoValidTargets { candidates: 0 },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                RadarError::UnknownProtocol {
                    token: "x".to_string(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                RadarError::NegativeCount {
                    field: "allies".to_string(),
                    value: -1,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                RadarError::InvalidInput {
                    reason: "protocols must not be empty".to_string(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from_radar(err, &ctx).status(), expected);
        }
    }

    #[test]
    fn test_request_id_carried() {
        let ctx = RequestContext::new();
        let err = ApiError::from_radar(RadarError::NoValidTargets { candidates: 2 }, &ctx);
        assert_eq!(err.inner().request_id(), Some(&ctx.request_id));
        assert!(err.inner().trace_id().is_none());
    }

    #[test]
    fn test_trace_id_carried_when_present() {
        let trace_id = TraceId::from_string("trace-9".to_string());
        let ctx = RequestContext::new().with_trace_id(trace_id.clone());
        let err = ApiError::from_radar(RadarError::NoValidTargets { candidates: 2 }, &ctx);
        assert_eq!(err.inner().trace_id(), Some(&trace_id));
    }
}

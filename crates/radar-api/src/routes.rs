//! HTTP routes

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use tower_http::trace::TraceLayer;

use radar_core::{log_op_end, log_op_error, log_op_start, Position, RadarSystem};
use radar_core_types::schema::{HEADER_REQUEST_ID, HEADER_TRACE_ID};
use radar_core_types::{RequestContext, RequestId, TraceId};

use crate::dto::RadarRequest;
use crate::error::ApiError;

/// Create all HTTP routes.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/radar", post(radar))
        .layer(middleware::from_fn(request_context))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "OK"
}

/// Attach a `RequestContext` to the request and echo its id on the response
///
/// Inbound `x-request-id` is reused when present; `x-trace-id` is carried
/// through unchanged.
async fn request_context(mut req: Request, next: Next) -> Response {
    let mut ctx = match header_str(&req, HEADER_REQUEST_ID) {
        Some(id) => RequestContext::with_request_id(RequestId::from_string(id)),
        None => RequestContext::new(),
    };
    if let Some(trace_id) = header_str(&req, HEADER_TRACE_ID) {
        ctx = ctx.with_trace_id(TraceId::from_string(trace_id));
    }
    let request_id = ctx.request_id.clone();
    req.extensions_mut().insert(ctx);

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(HEADER_REQUEST_ID), value);
    }
    response
}

fn header_str(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

async fn radar(
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<RadarRequest>, JsonRejection>,
) -> Result<Json<Position>, ApiError> {
    const OP: &str = "radar_request";
    let started = Instant::now();
    log_op_start!(OP, request_id = %ctx.request_id);

    let result = select_target(&ctx, payload);
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(position) => {
            log_op_end!(
                OP,
                duration_ms = duration_ms,
                request_id = %ctx.request_id,
                x = position.x,
                y = position.y
            );
        }
        Err(err) => {
            log_op_error!(
                OP,
                err.inner().clone(),
                duration_ms = duration_ms,
                request_id = %ctx.request_id
            );
        }
    }
    result.map(Json)
}

fn select_target(
    ctx: &RequestContext,
    payload: Result<Json<RadarRequest>, JsonRejection>,
) -> Result<Position, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::rejected(rejection, ctx))?;
    let validated = request
        .validate()
        .map_err(|err| ApiError::from_radar(err, ctx))?;

    RadarSystem::new(&validated.protocols)
        .find_next_target(&validated.scan)
        .map_err(|err| ApiError::from_radar(err, ctx))
}

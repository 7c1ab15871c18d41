//! HTTP request handlers for the leave desk service.
//!
//! Every handler follows the same shape: extract the asserted identity and
//! parse the payload, then run the operation inside a single store
//! read/update so the whole load(+save) cycle is mutually exclusive with
//! other operations.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::{self, AssertedIdentity, Scope};
use crate::error::HrError;
use crate::models::{Role, RequestCategory, SettingsUpdate};
use crate::report::{export_csv, export_rows, summary, ReportFilter};
use crate::workflow::{
    self, create_correction, create_leave, parse_action, parse_category, NewCorrection,
    NewLeaveRequest,
};

use super::request::{ApprovalRequest, ListParams, LoginRequest, ReportParams};
use super::response::{
    ApiError, ApiErrorResponse, ItemResponse, ItemsResponse, MetaResponse, ReportResponse,
    SettingsResponse, UserResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/meta", get(meta_handler))
        .route("/api/login", post(login_handler))
        .route(
            "/api/leave_requests",
            get(list_leave_handler).post(create_leave_handler),
        )
        .route(
            "/api/attendance_corrections",
            get(list_corrections_handler).post(create_correction_handler),
        )
        .route("/api/approvals", post(approval_handler))
        .route("/api/reports", get(report_handler))
        .route("/api/reports/export", get(export_handler))
        .route("/api/settings", post(settings_handler))
        .fallback(fallback_handler)
        .with_state(state)
}

/// Reads the trusted identity headers. The values are claims, not
/// credentials; resolution happens against the dataset.
fn asserted_identity(headers: &HeaderMap) -> AssertedIdentity {
    let claim = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    AssertedIdentity::new(claim("x-user-id"), claim("x-user-role"))
}

/// Unwraps a JSON body, mapping axum's rejection to a 400 error body.
fn unpack_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection.body_text(), "bad JSON payload");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ApiError::new(format!("Invalid JSON payload: {}", rejection.body_text()))),
            )
                .into_response())
        }
    }
}

/// Logs and converts a domain error. Internal failures keep their detail
/// server-side only.
fn error_response(correlation_id: Uuid, err: HrError) -> Response {
    match &err {
        HrError::Internal { message } => {
            error!(correlation_id = %correlation_id, error = %message, "request failed");
        }
        other => {
            info!(correlation_id = %correlation_id, reason = %other, "request refused");
        }
    }
    ApiErrorResponse::from(err).into_response()
}

fn ok_json<T: Serialize>(body: T) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// Handler for `GET /api/meta`. No authentication.
async fn meta_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().read(|data| Ok(MetaResponse::new(data))) {
        Ok(meta) => ok_json(meta),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `POST /api/login`. The id must belong to a known user.
async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let body = match unpack_json(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };

    let found = state.store().read(|data| Ok(data.user(&body.user_id).cloned()));
    match found {
        Ok(Some(user)) => {
            info!(correlation_id = %correlation_id, user_id = %user.id, "login");
            ok_json(UserResponse { ok: true, user })
        }
        Ok(None) => {
            info!(correlation_id = %correlation_id, user_id = %body.user_id, "login for unknown user");
            ApiErrorResponse::new(StatusCode::UNAUTHORIZED, "User not found").into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

async fn list_handler(
    state: AppState,
    headers: HeaderMap,
    params: ListParams,
    category: RequestCategory,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let identity = asserted_identity(&headers);
    let scope = Scope::from_param(params.scope.as_deref());

    let result = state.store().read(|data| {
        let actor = auth::resolve(data, &identity)?;
        Ok(workflow::list(data, actor, category, scope))
    });
    match result {
        Ok(items) => ok_json(ItemsResponse::new(items)),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `GET /api/leave_requests`.
async fn list_leave_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Response {
    list_handler(state, headers, params, RequestCategory::Leave).await
}

/// Handler for `GET /api/attendance_corrections`.
async fn list_corrections_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListParams>,
) -> Response {
    list_handler(state, headers, params, RequestCategory::Correction).await
}

/// Handler for `POST /api/leave_requests`.
async fn create_leave_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match unpack_json(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let identity = asserted_identity(&headers);

    let result = state.store().update(|data| {
        let actor = auth::resolve(data, &identity)?.clone();
        create_leave(data, &actor, &input, Utc::now())
    });
    match result {
        Ok(item) => {
            info!(correlation_id = %correlation_id, id = %item.id, days = item.days, "leave request created");
            ok_json(ItemResponse::new(item))
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `POST /api/attendance_corrections`.
async fn create_correction_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewCorrection>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match unpack_json(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let identity = asserted_identity(&headers);

    let result = state.store().update(|data| {
        let actor = auth::resolve(data, &identity)?.clone();
        create_correction(data, &actor, &input, Utc::now())
    });
    match result {
        Ok(item) => {
            info!(correlation_id = %correlation_id, id = %item.id, "attendance correction created");
            ok_json(ItemResponse::new(item))
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `POST /api/approvals`.
async fn approval_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ApprovalRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let body = match unpack_json(correlation_id, payload) {
        Ok(body) => body,
        Err(response) => return response,
    };
    let identity = asserted_identity(&headers);

    // Category and action are validated before any store access.
    let (category, action) = match parse_category(&body.category)
        .and_then(|category| Ok((category, parse_action(&body.action)?)))
    {
        Ok(parsed) => parsed,
        Err(err) => return error_response(correlation_id, err),
    };

    let result = state.store().update(|data| {
        let actor = auth::resolve(data, &identity)?.clone();
        workflow::decide(data, &actor, category, &body.id, action, &body.comment)
    });
    match result {
        Ok(record) => {
            info!(correlation_id = %correlation_id, id = %body.id, action = %body.action, "request decided");
            ok_json(ItemResponse::new(record))
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `GET /api/reports`. Manager/admin only.
async fn report_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ReportParams>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let identity = asserted_identity(&headers);

    let filter = match ReportFilter::from_params(
        params.start,
        params.end,
        params.department,
        params.employee,
    ) {
        Ok(filter) => filter,
        Err(err) => return error_response(correlation_id, err),
    };

    let result = state.store().read(|data| {
        let actor = auth::resolve(data, &identity)?;
        auth::require_role(actor, &[Role::Manager, Role::Admin])?;
        Ok(summary(data, &filter))
    });
    match result {
        Ok(report) => ok_json(ReportResponse { ok: true, report }),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `GET /api/reports/export`. Manager/admin only; responds
/// with a CSV attachment.
async fn export_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ReportParams>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let identity = asserted_identity(&headers);

    let filter = match ReportFilter::from_params(
        params.start,
        params.end,
        params.department,
        params.employee,
    ) {
        Ok(filter) => filter,
        Err(err) => return error_response(correlation_id, err),
    };

    let result = state.store().read(|data| {
        let actor = auth::resolve(data, &identity)?;
        auth::require_role(actor, &[Role::Manager, Role::Admin])?;
        export_csv(&export_rows(data, &filter))
    });
    match result {
        Ok(csv) => {
            info!(correlation_id = %correlation_id, bytes = csv.len(), "report exported");
            // Leading BOM so spreadsheet tools detect UTF-8.
            let body = format!("\u{feff}{csv}");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"reports.csv\"",
                    ),
                ],
                body,
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for `POST /api/settings`. Admin only.
async fn settings_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SettingsUpdate>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let update = match unpack_json(correlation_id, payload) {
        Ok(update) => update,
        Err(response) => return response,
    };
    let identity = asserted_identity(&headers);

    let result = state.store().update(|data| {
        let actor = auth::resolve(data, &identity)?.clone();
        auth::require_role(&actor, &[Role::Admin])?;
        data.apply_settings(update);
        Ok(data.settings())
    });
    match result {
        Ok(settings) => {
            info!(correlation_id = %correlation_id, "settings updated");
            ok_json(SettingsResponse { ok: true, settings })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Fallback for unknown paths.
async fn fallback_handler() -> Response {
    ApiErrorResponse::new(StatusCode::NOT_FOUND, "Not found").into_response()
}

use crate::auth::auth::AuthUser;
use crate::error::AppError;
use crate::model::leave_request::LeaveRequest;
use crate::model::leave_type::LeaveType;
use crate::workflow::balance::{check_availability, day_count};
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::MySqlPool;
use tracing::info;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = "Sick")]
    pub leave_type: LeaveType,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-09", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "family visit")]
    pub remarks: Option<String>,
}

/* =========================
Submit leave request
========================= */
#[utoipa::path(
    post,
    path = "/api/v1/leave",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request stored at level 1, Pending", body = LeaveRequest),
        (status = 400, description = "Malformed payload or reversed date range"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 409, description = "Insufficient balance", body = Object, example = json!({
            "code": "insufficient_balance",
            "message": "only 3 day(s) left for Sick",
            "remaining": 3
        }))
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn submit_leave(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateLeave>,
) -> Result<HttpResponse, AppError> {
    auth.require_employee()?;

    let days = day_count(payload.start_date, payload.end_date)?;

    // A user with no ledger row for this type has nothing to spend.
    let remaining: Option<i32> =
        sqlx::query_scalar("SELECT balance FROM leave_balances WHERE user_id = ? AND leave_type = ?")
            .bind(auth.user_id)
            .bind(payload.leave_type.as_str())
            .fetch_optional(pool.get_ref())
            .await?;

    let availability = check_availability(remaining.unwrap_or(0), days);
    if !availability.sufficient {
        return Err(AppError::InsufficientBalance {
            leave_type: payload.leave_type.as_str().to_string(),
            remaining: availability.remaining,
        });
    }

    let result = sqlx::query(
        r#"
        INSERT INTO leave_requests
            (user_id, leave_type, start_date, end_date, status, level, remarks)
        VALUES (?, ?, ?, ?, 'Pending', 1, ?)
        "#,
    )
    .bind(auth.user_id)
    .bind(payload.leave_type.as_str())
    .bind(payload.start_date)
    .bind(payload.end_date)
    .bind(&payload.remarks)
    .execute(pool.get_ref())
    .await?;

    let request_id = result.last_insert_id();
    info!(user_id = auth.user_id, request_id, days, "leave request submitted");

    let request = LeaveRequest {
        id: request_id,
        user_id: auth.user_id,
        leave_type: payload.leave_type.as_str().to_string(),
        start_date: payload.start_date,
        end_date: payload.end_date,
        status: "Pending".to_string(),
        level: 1,
        remarks: payload.remarks.clone(),
    };

    Ok(HttpResponse::Created().json(request))
}

/* =========================
Request history (own)
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave",
    responses(
        (status = 200, description = "All leave requests of the calling employee", body = [LeaveRequest]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn leave_history(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse, AppError> {
    auth.require_employee()?;

    let requests: Vec<LeaveRequest> = sqlx::query_as(
        r#"
        SELECT id, user_id, leave_type, start_date, end_date, status, level, remarks
        FROM leave_requests
        WHERE user_id = ?
        ORDER BY id DESC
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(requests))
}

use crate::auth::auth::AuthUser;
use crate::error::AppError;
use crate::model::leave_request::LeaveRequest;
use crate::workflow::balance::day_count;
use crate::workflow::state_machine::{Decision, ManagerLevel, decide};
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::MySqlPool;
use tracing::info;
use utoipa::ToSchema;

/// The acting manager's level, looked up by user id. A Manager-role user
/// without a profile row cannot act.
async fn manager_level(pool: &MySqlPool, user_id: u64) -> Result<ManagerLevel, AppError> {
    let level: Option<u8> = sqlx::query_scalar("SELECT level FROM managers WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    let level = level.ok_or_else(|| AppError::NotFound("manager profile".to_string()))?;
    ManagerLevel::new(level)
}

/* =========================
Pending queue (manager inbox)
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave/pending",
    responses(
        (status = 200, description = "Pending requests at the manager's level", body = [LeaveRequest]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "No manager profile for this user")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Approval"
)]
pub async fn pending_requests(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse, AppError> {
    auth.require_manager()?;

    let level = manager_level(pool.get_ref(), auth.user_id).await?;

    // The inbox is purely structural: Pending at exactly this level.
    let requests: Vec<LeaveRequest> = sqlx::query_as(
        r#"
        SELECT id, user_id, leave_type, start_date, end_date, status, level, remarks
        FROM leave_requests
        WHERE status = 'Pending' AND level = ?
        ORDER BY id
        "#,
    )
    .bind(level.get())
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(requests))
}

/* =========================
Approve / Reject
========================= */
#[utoipa::path(
    put,
    path = "/api/v1/leave/{id}/approve",
    params(
        ("id" = u64, Path, description = "ID of the leave request to approve")
    ),
    responses(
        (status = 200, description = "Request advanced", body = LeaveRequest),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Request or manager profile not found"),
        (status = 409, description = "Level mismatch or already processed", body = Object, example = json!({
            "code": "invalid_transition",
            "message": "leave request already processed"
        }))
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Approval"
)]
pub async fn approve_request(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    decide_request(auth, pool.get_ref(), path.into_inner(), Decision::Approve).await
}

#[utoipa::path(
    put,
    path = "/api/v1/leave/{id}/reject",
    params(
        ("id" = u64, Path, description = "ID of the leave request to reject")
    ),
    responses(
        (status = 200, description = "Request rejected", body = LeaveRequest),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Request or manager profile not found"),
        (status = 409, description = "Level mismatch or already processed")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Approval"
)]
pub async fn reject_request(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    decide_request(auth, pool.get_ref(), path.into_inner(), Decision::Reject).await
}

/// Run one manager decision end to end: state machine first, then a single
/// transaction committing the guarded level/status update, the conditional
/// balance deduction and the audit row. The guard on the UPDATE ensures
/// at most one transition commits per request state.
async fn decide_request(
    auth: AuthUser,
    pool: &MySqlPool,
    request_id: u64,
    decision: Decision,
) -> Result<HttpResponse, AppError> {
    auth.require_manager()?;

    let level = manager_level(pool, auth.user_id).await?;

    let mut tx = pool.begin().await?;

    let request: Option<LeaveRequest> = sqlx::query_as(
        r#"
        SELECT id, user_id, leave_type, start_date, end_date, status, level, remarks
        FROM leave_requests
        WHERE id = ?
        FOR UPDATE
        "#,
    )
    .bind(request_id)
    .fetch_optional(&mut *tx)
    .await?;

    let request = request.ok_or_else(|| AppError::NotFound("leave request".to_string()))?;

    let transition = decide(decision, level, request.level, request.parsed_status()?)?;

    let result = sqlx::query(
        r#"
        UPDATE leave_requests
        SET level = ?, status = ?
        WHERE id = ? AND level = ? AND status = 'Pending'
        "#,
    )
    .bind(transition.level)
    .bind(transition.status.as_str())
    .bind(request_id)
    .bind(request.level)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::InvalidTransition(
            "leave request already processed".to_string(),
        ));
    }

    if transition.deduct_balance {
        let days = day_count(request.start_date, request.end_date)?;
        // Missing ledger row: nothing to deduct, not an error.
        sqlx::query(
            r#"
            UPDATE leave_balances
            SET balance = GREATEST(balance - ?, 0)
            WHERE user_id = ? AND leave_type = ?
            "#,
        )
        .bind(days)
        .bind(request.user_id)
        .bind(&request.leave_type)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query("INSERT INTO approval_records (manager_id, request_id, decision) VALUES (?, ?, ?)")
        .bind(auth.user_id)
        .bind(request_id)
        .bind(decision.label())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!(
        manager_id = auth.user_id,
        request_id,
        level = transition.level,
        status = transition.status.as_str(),
        deducted = transition.deduct_balance,
        "leave request decided"
    );

    let updated = LeaveRequest {
        level: transition.level,
        status: transition.status.as_str().to_string(),
        ..request
    };

    Ok(HttpResponse::Ok().json(updated))
}

/* =========================
Handled requests (audit projection)
========================= */
#[derive(Serialize, sqlx::FromRow, ToSchema)]
pub struct HandledRequest {
    #[schema(example = 1)]
    pub request_id: u64,
    #[schema(example = "jdoe")]
    pub username: String,
    #[schema(example = "Sick")]
    pub leave_type: String,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-09", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Approved")]
    pub decision: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/leave/handled",
    responses(
        (status = 200, description = "Requests this manager has already decided", body = [HandledRequest]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Approval"
)]
pub async fn handled_requests(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse, AppError> {
    auth.require_manager()?;

    let handled: Vec<HandledRequest> = sqlx::query_as(
        r#"
        SELECT ar.request_id, u.username, lr.leave_type, lr.start_date, lr.end_date, ar.decision
        FROM approval_records ar
        JOIN leave_requests lr ON lr.id = ar.request_id
        JOIN users u ON u.id = lr.user_id
        WHERE ar.manager_id = ?
        ORDER BY ar.id DESC
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(handled))
}

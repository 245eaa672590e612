use crate::auth::auth::AuthUser;
use crate::error::AppError;
use crate::model::leave_type::LeaveType;
use crate::workflow::balance::DEFAULT_BALANCE;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;

#[derive(Serialize, sqlx::FromRow, ToSchema)]
pub struct BalanceEntry {
    #[schema(example = "Sick")]
    pub leave_type: String,
    #[schema(example = 10)]
    pub balance: i32,
}

/* =========================
Leave balances (own)
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/leave/balances",
    responses(
        (status = 200, description = "Remaining days per leave type", body = [BalanceEntry]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn leave_balances(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> Result<HttpResponse, AppError> {
    auth.require_employee()?;

    let balances: Vec<BalanceEntry> = sqlx::query_as(
        r#"
        SELECT leave_type, balance
        FROM leave_balances
        WHERE user_id = ?
        ORDER BY leave_type
        "#,
    )
    .bind(auth.user_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(balances))
}

/// Seed the default ledger for a freshly registered user: one row per leave
/// type at [`DEFAULT_BALANCE`] days. Called by the (external) registration
/// layer; existing rows are left untouched.
pub async fn seed_default_balances(pool: &MySqlPool, user_id: u64) -> Result<(), AppError> {
    for leave_type in LeaveType::ALL {
        sqlx::query(
            "INSERT IGNORE INTO leave_balances (user_id, leave_type, balance) VALUES (?, ?, ?)",
        )
        .bind(user_id)
        .bind(leave_type.as_str())
        .bind(DEFAULT_BALANCE)
        .execute(pool)
        .await?;
    }
    Ok(())
}

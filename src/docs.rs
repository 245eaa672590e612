use crate::api::approval::HandledRequest;
use crate::api::balance::BalanceEntry;
use crate::api::leave_request::CreateLeave;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::model::leave_type::LeaveType;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Approval Workflow API",
        version = "1.0.0",
        description = r#"
## Leave Approval Workflow Service

Employees submit leave requests against per-type day balances; managers
approve or reject them through a sequential three-level chain. The final
(level 3) approval deducts the requested days from the balance.

### Key Features
- **Submission** — validated against the balance ledger, stored Pending at level 1
- **Sequential approval** — each manager acts only on requests at their own level
- **Audit log** — every manager decision is recorded append-only
- **Balances & history** — employees see remaining days and past requests

### Security
All endpoints require **JWT Bearer authentication** issued by the external
identity provider. Role separation: Employee, Manager, Admin.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::leave_request::submit_leave,
        crate::api::leave_request::leave_history,
        crate::api::balance::leave_balances,
        crate::api::approval::pending_requests,
        crate::api::approval::approve_request,
        crate::api::approval::reject_request,
        crate::api::approval::handled_requests,
    ),
    components(
        schemas(
            CreateLeave,
            LeaveRequest,
            LeaveStatus,
            LeaveType,
            BalanceEntry,
            HandledRequest
        )
    ),
    tags(
        (name = "Leave", description = "Leave submission, history and balances"),
        (name = "Approval", description = "Manager approval workflow"),
    )
)]
pub struct ApiDoc;

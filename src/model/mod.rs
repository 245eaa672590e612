pub mod approval_record;
pub mod leave_balance;
pub mod leave_request;
pub mod leave_type;
pub mod manager;
pub mod role;
pub mod user;

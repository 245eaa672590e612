pub mod approval;
pub mod balance;
pub mod leave_request;

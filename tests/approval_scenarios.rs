//! Lifecycle scenarios over the workflow core.
//!
//! The harness drives an in-memory (request, ledger) pair through the same
//! submit/decide sequence the HTTP handlers run against MySQL: availability
//! check at submission, state machine per decision, deduction only when the
//! transition says so.

use chrono::NaiveDate;
use leaveflow::error::AppError;
use leaveflow::model::leave_request::LeaveStatus;
use leaveflow::workflow::balance::{apply_deduction, check_availability, day_count};
use leaveflow::workflow::state_machine::{Decision, ManagerLevel, decide};

#[derive(Debug)]
struct Harness {
    level: u8,
    status: LeaveStatus,
    balance: i32,
    days: i64,
}

impl Harness {
    fn submit(balance: i32, start: &str, end: &str) -> Result<Self, AppError> {
        let start: NaiveDate = start.parse().unwrap();
        let end: NaiveDate = end.parse().unwrap();
        let days = day_count(start, end)?;

        let availability = check_availability(balance, days);
        if !availability.sufficient {
            return Err(AppError::InsufficientBalance {
                leave_type: "Sick".to_string(),
                remaining: availability.remaining,
            });
        }

        Ok(Harness {
            level: 1,
            status: LeaveStatus::Pending,
            balance,
            days,
        })
    }

    fn act(&mut self, decision: Decision, manager: u8) -> Result<(), AppError> {
        let transition = decide(decision, ManagerLevel::new(manager)?, self.level, self.status)?;
        self.level = transition.level;
        self.status = transition.status;
        if transition.deduct_balance {
            self.balance = apply_deduction(self.balance, self.days);
        }
        Ok(())
    }
}

#[test]
fn three_level_approval_deducts_exactly_once() {
    // Sick balance 10, 5-day request.
    let mut h = Harness::submit(10, "2026-01-05", "2026-01-09").unwrap();
    assert_eq!((h.level, h.status), (1, LeaveStatus::Pending));

    h.act(Decision::Approve, 1).unwrap();
    assert_eq!((h.level, h.status, h.balance), (2, LeaveStatus::Pending, 10));

    h.act(Decision::Approve, 2).unwrap();
    assert_eq!((h.level, h.status, h.balance), (3, LeaveStatus::Pending, 10));

    h.act(Decision::Approve, 3).unwrap();
    assert_eq!((h.level, h.status, h.balance), (4, LeaveStatus::Approved, 5));
}

#[test]
fn submission_refused_when_balance_too_small() {
    let err = Harness::submit(3, "2026-01-05", "2026-01-09").unwrap_err();
    match err {
        AppError::InsufficientBalance { remaining, .. } => assert_eq!(remaining, 3),
        other => panic!("expected InsufficientBalance, got {other:?}"),
    }
}

#[test]
fn submission_refused_on_zero_balance() {
    let err = Harness::submit(0, "2026-01-05", "2026-01-05").unwrap_err();
    assert!(matches!(err, AppError::InsufficientBalance { .. }));
}

#[test]
fn exact_fit_request_is_accepted_and_drains_the_balance() {
    let mut h = Harness::submit(5, "2026-01-05", "2026-01-09").unwrap();
    h.act(Decision::Approve, 1).unwrap();
    h.act(Decision::Approve, 2).unwrap();
    h.act(Decision::Approve, 3).unwrap();
    assert_eq!(h.balance, 0);
}

#[test]
fn final_level_rejection_does_not_deduct() {
    let mut h = Harness::submit(10, "2026-01-05", "2026-01-09").unwrap();
    h.act(Decision::Approve, 1).unwrap();
    h.act(Decision::Approve, 2).unwrap();
    h.act(Decision::Reject, 3).unwrap();

    assert_eq!((h.level, h.status), (4, LeaveStatus::Rejected));
    assert_eq!(h.balance, 10);
}

#[test]
fn early_rejection_is_terminal() {
    let mut h = Harness::submit(10, "2026-01-05", "2026-01-09").unwrap();
    h.act(Decision::Reject, 1).unwrap();
    assert_eq!((h.level, h.status), (2, LeaveStatus::Rejected));

    // No manager can act on a rejected request, even at the matching level.
    let err = h.act(Decision::Approve, 2).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
    assert_eq!(h.balance, 10);
}

#[test]
fn managers_cannot_act_out_of_order() {
    let mut h = Harness::submit(10, "2026-01-05", "2026-01-09").unwrap();

    let err = h.act(Decision::Approve, 2).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
    let err = h.act(Decision::Reject, 3).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));

    // The failed attempts changed nothing.
    assert_eq!((h.level, h.status), (1, LeaveStatus::Pending));
}

#[test]
fn replaying_a_decision_fails_instead_of_readvancing() {
    let mut h = Harness::submit(10, "2026-01-05", "2026-01-09").unwrap();
    h.act(Decision::Approve, 1).unwrap();

    let err = h.act(Decision::Approve, 1).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
    assert_eq!(h.level, 2);
}

#[test]
fn level_never_decreases_across_a_full_lifecycle() {
    let mut h = Harness::submit(10, "2026-01-05", "2026-01-09").unwrap();
    let mut last = h.level;

    for (decision, manager) in [
        (Decision::Approve, 1),
        (Decision::Approve, 2),
        (Decision::Reject, 3),
    ] {
        h.act(decision, manager).unwrap();
        assert!(h.level >= last);
        last = h.level;
    }
}

#[test]
fn single_day_request_costs_one_day() {
    let mut h = Harness::submit(1, "2026-01-05", "2026-01-05").unwrap();
    assert_eq!(h.days, 1);
    h.act(Decision::Approve, 1).unwrap();
    h.act(Decision::Approve, 2).unwrap();
    h.act(Decision::Approve, 3).unwrap();
    assert_eq!(h.balance, 0);
}

#[test]
fn reversed_date_range_is_refused_before_the_ledger_is_consulted() {
    let err = Harness::submit(10, "2026-01-09", "2026-01-05").unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

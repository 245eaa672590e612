//! The approval state machine.
//!
//! A leave request walks a sequential 3-stage manager chain. Each stage
//! either advances the request (Approve keeps it Pending until the final
//! stage) or terminates the balance path (Reject). Level 4 is terminal.
//!
//! The function here is pure: handlers load the request, call [`decide`],
//! and persist the returned transition inside a transaction.

use crate::error::AppError;
use crate::model::leave_request::LeaveStatus;

/// Terminal level a request reaches after the last decision.
pub const FINAL_LEVEL: u8 = 4;

/// A manager's action on a pending request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Label written to the approval audit log.
    pub fn label(self) -> &'static str {
        match self {
            Decision::Approve => "Approved",
            Decision::Reject => "Rejected",
        }
    }
}

/// Approval stage a manager is assigned to. Only 1..=3 are representable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord)]
pub struct ManagerLevel(u8);

impl ManagerLevel {
    pub fn new(level: u8) -> Result<Self, AppError> {
        if (1..=3).contains(&level) {
            Ok(ManagerLevel(level))
        } else {
            Err(AppError::InvalidTransition(format!(
                "invalid manager level {level}"
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Outcome of a decision: the request's next level/status and whether the
/// balance ledger must be deducted. Deduction fires exactly on the final
/// approval and never on a rejection.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Transition {
    pub level: u8,
    pub status: LeaveStatus,
    pub deduct_balance: bool,
}

/// Decide the next state of a request.
///
/// Preconditions, enforced uniformly on both paths:
/// - the request must still be Pending ("already processed" otherwise);
/// - the acting manager's level must equal the request's current level.
///
/// Level advances 1→2, 2→3, 3→4. The status stays Pending on intermediate
/// approvals, becomes Approved on the level-3 approval (with balance
/// deduction), and becomes Rejected on any rejection.
pub fn decide(
    decision: Decision,
    manager: ManagerLevel,
    request_level: u8,
    request_status: LeaveStatus,
) -> Result<Transition, AppError> {
    if request_status != LeaveStatus::Pending {
        return Err(AppError::InvalidTransition(
            "leave request already processed".to_string(),
        ));
    }

    if request_level != manager.get() {
        return Err(AppError::InvalidTransition(format!(
            "leave request is at level {request_level}, manager acts at level {}",
            manager.get()
        )));
    }

    let level = request_level + 1;
    let final_step = level == FINAL_LEVEL;

    let status = match decision {
        Decision::Approve if final_step => LeaveStatus::Approved,
        Decision::Approve => LeaveStatus::Pending,
        Decision::Reject => LeaveStatus::Rejected,
    };

    Ok(Transition {
        level,
        status,
        deduct_balance: final_step && decision == Decision::Approve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lvl(n: u8) -> ManagerLevel {
        ManagerLevel::new(n).unwrap()
    }

    #[test]
    fn approve_advances_through_all_levels() {
        let t1 = decide(Decision::Approve, lvl(1), 1, LeaveStatus::Pending).unwrap();
        assert_eq!(t1.level, 2);
        assert_eq!(t1.status, LeaveStatus::Pending);
        assert!(!t1.deduct_balance);

        let t2 = decide(Decision::Approve, lvl(2), 2, LeaveStatus::Pending).unwrap();
        assert_eq!(t2.level, 3);
        assert_eq!(t2.status, LeaveStatus::Pending);
        assert!(!t2.deduct_balance);

        let t3 = decide(Decision::Approve, lvl(3), 3, LeaveStatus::Pending).unwrap();
        assert_eq!(t3.level, 4);
        assert_eq!(t3.status, LeaveStatus::Approved);
        assert!(t3.deduct_balance);
    }

    #[test]
    fn reject_terminates_without_deduction_at_every_level() {
        for n in 1..=3u8 {
            let t = decide(Decision::Reject, lvl(n), n, LeaveStatus::Pending).unwrap();
            assert_eq!(t.level, n + 1);
            assert_eq!(t.status, LeaveStatus::Rejected);
            assert!(!t.deduct_balance, "rejection at level {n} must not deduct");
        }
    }

    #[test]
    fn level_mismatch_is_rejected_on_both_paths() {
        for decision in [Decision::Approve, Decision::Reject] {
            let err = decide(decision, lvl(2), 1, LeaveStatus::Pending).unwrap_err();
            assert!(matches!(err, AppError::InvalidTransition(_)));

            let err = decide(decision, lvl(1), 3, LeaveStatus::Pending).unwrap_err();
            assert!(matches!(err, AppError::InvalidTransition(_)));
        }
    }

    #[test]
    fn terminal_request_cannot_be_decided_again() {
        for status in [LeaveStatus::Approved, LeaveStatus::Rejected] {
            let err = decide(Decision::Approve, lvl(3), 3, status).unwrap_err();
            assert!(matches!(err, AppError::InvalidTransition(_)));
        }
    }

    #[test]
    fn repeating_a_decision_fails_instead_of_readvancing() {
        // First decision commits level 1 -> 2; replaying the same call now
        // sees level 2 against manager level 1.
        let t = decide(Decision::Approve, lvl(1), 1, LeaveStatus::Pending).unwrap();
        let err = decide(Decision::Approve, lvl(1), t.level, t.status).unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
    }

    #[test]
    fn manager_level_bounds() {
        assert!(ManagerLevel::new(0).is_err());
        assert!(ManagerLevel::new(4).is_err());
        for n in 1..=3 {
            assert_eq!(ManagerLevel::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn decision_labels_match_audit_vocabulary() {
        assert_eq!(Decision::Approve.label(), "Approved");
        assert_eq!(Decision::Reject.label(), "Rejected");
    }
}

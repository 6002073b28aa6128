//! Startup bootstrap state machine (Functional Core).
//!
//! The driver performs one store call per step and feeds its result back
//! through [`advance`] until a terminal step is reached:
//!
//! ```text
//! Check --usable--> Ready
//! Check --pending--> Wait
//! Check --not found--> Create --ok | already exists--> Wait --ok--> Ready
//! any other failure --> Failed
//! ```

use std::fmt;

use crate::storage::StoreError;

use super::TableMeta;

/// A bootstrap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    /// Describe the table.
    Check,
    /// Create the table.
    Create,
    /// Wait for the table to become active.
    Wait,
    /// The table is usable. Terminal.
    Ready,
    /// Bootstrap cannot reach `Ready`. Terminal.
    Failed,
}

impl BootstrapStep {
    /// Returns true for `Ready` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BootstrapStep::Ready | BootstrapStep::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BootstrapStep::Check => "check",
            BootstrapStep::Create => "create",
            BootstrapStep::Wait => "wait",
            BootstrapStep::Ready => "ready",
            BootstrapStep::Failed => "failed",
        }
    }
}

impl fmt::Display for BootstrapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the store call made for the current step.
#[derive(Debug, Clone, Copy)]
pub enum StepOutcome<'a> {
    /// `describe_table` succeeded.
    Described(&'a TableMeta),
    /// `create_table` or `wait_until_active` succeeded.
    Completed,
    /// The store call failed.
    Failed(&'a StoreError),
}

/// Pure function: compute the next step from the current step and the
/// outcome of its store call.
///
/// Terminal steps never move. An outcome that does not belong to the step
/// (for example `Described` while waiting) leads to `Failed`.
pub fn advance(step: BootstrapStep, outcome: StepOutcome<'_>) -> BootstrapStep {
    use BootstrapStep::*;

    match (step, outcome) {
        (Ready, _) | (Failed, _) => step,

        (Check, StepOutcome::Described(meta)) if meta.status.is_usable() => Ready,
        (Check, StepOutcome::Described(_)) => Wait,
        (Check, StepOutcome::Failed(StoreError::TableNotFound { .. })) => Create,

        (Create, StepOutcome::Completed) => Wait,
        // Another process created the table between our check and create.
        (Create, StepOutcome::Failed(StoreError::TableAlreadyExists { .. })) => Wait,

        (Wait, StepOutcome::Completed) => Ready,

        _ => Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableStatus;

    fn meta(status: TableStatus) -> TableMeta {
        TableMeta {
            table_name: "Notes".to_string(),
            status,
            item_count: Some(0),
        }
    }

    fn not_found() -> StoreError {
        StoreError::TableNotFound {
            table_name: "Notes".to_string(),
        }
    }

    fn already_exists() -> StoreError {
        StoreError::TableAlreadyExists {
            table_name: "Notes".to_string(),
        }
    }

    #[test]
    fn test_check_active_table_is_ready() {
        let m = meta(TableStatus::Active);
        assert_eq!(
            advance(BootstrapStep::Check, StepOutcome::Described(&m)),
            BootstrapStep::Ready
        );
    }

    #[test]
    fn test_check_creating_table_waits() {
        let m = meta(TableStatus::Creating);
        assert_eq!(
            advance(BootstrapStep::Check, StepOutcome::Described(&m)),
            BootstrapStep::Wait
        );
    }

    #[test]
    fn test_check_missing_table_creates() {
        let err = not_found();
        assert_eq!(
            advance(BootstrapStep::Check, StepOutcome::Failed(&err)),
            BootstrapStep::Create
        );
    }

    #[test]
    fn test_check_other_error_fails() {
        let err = StoreError::ConnectionFailed("refused".to_string());
        assert_eq!(
            advance(BootstrapStep::Check, StepOutcome::Failed(&err)),
            BootstrapStep::Failed
        );
    }

    #[test]
    fn test_create_success_waits() {
        assert_eq!(
            advance(BootstrapStep::Create, StepOutcome::Completed),
            BootstrapStep::Wait
        );
    }

    #[test]
    fn test_create_race_waits() {
        let err = already_exists();
        assert_eq!(
            advance(BootstrapStep::Create, StepOutcome::Failed(&err)),
            BootstrapStep::Wait
        );
    }

    #[test]
    fn test_create_other_error_fails() {
        let err = StoreError::QueryFailed("limit exceeded".to_string());
        assert_eq!(
            advance(BootstrapStep::Create, StepOutcome::Failed(&err)),
            BootstrapStep::Failed
        );
    }

    #[test]
    fn test_wait_success_is_ready() {
        assert_eq!(
            advance(BootstrapStep::Wait, StepOutcome::Completed),
            BootstrapStep::Ready
        );
    }

    #[test]
    fn test_wait_timeout_fails() {
        let err = StoreError::ActivationTimeout {
            table_name: "Notes".to_string(),
            attempts: 3,
        };
        assert_eq!(
            advance(BootstrapStep::Wait, StepOutcome::Failed(&err)),
            BootstrapStep::Failed
        );
    }

    #[test]
    fn test_wait_not_found_fails() {
        // Only `Check` treats a missing table as recoverable.
        let err = not_found();
        assert_eq!(
            advance(BootstrapStep::Wait, StepOutcome::Failed(&err)),
            BootstrapStep::Failed
        );
    }

    #[test]
    fn test_terminal_steps_do_not_move() {
        let err = not_found();
        assert_eq!(
            advance(BootstrapStep::Ready, StepOutcome::Failed(&err)),
            BootstrapStep::Ready
        );
        assert_eq!(
            advance(BootstrapStep::Failed, StepOutcome::Completed),
            BootstrapStep::Failed
        );
    }

    #[test]
    fn test_mismatched_outcome_fails() {
        let m = meta(TableStatus::Active);
        assert_eq!(
            advance(BootstrapStep::Wait, StepOutcome::Described(&m)),
            BootstrapStep::Failed
        );
        assert_eq!(
            advance(BootstrapStep::Check, StepOutcome::Completed),
            BootstrapStep::Failed
        );
    }

    #[test]
    fn test_is_terminal() {
        assert!(BootstrapStep::Ready.is_terminal());
        assert!(BootstrapStep::Failed.is_terminal());
        assert!(!BootstrapStep::Check.is_terminal());
        assert!(!BootstrapStep::Create.is_terminal());
        assert!(!BootstrapStep::Wait.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(BootstrapStep::Create.to_string(), "create");
    }
}

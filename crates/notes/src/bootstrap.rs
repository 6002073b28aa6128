//! Table bootstrap driver (Imperative Shell).
//!
//! Runs the pure state machine from `notes_core::table::bootstrap`, making
//! one `TableAdmin` call per step.

use notes_core::storage::{StoreError, TableAdmin};
use notes_core::table::bootstrap::{advance, BootstrapStep, StepOutcome};
use notes_core::table::{TableMeta, TableSchema};
use thiserror::Error;

/// Outcome of a successful bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub table_name: String,
    /// Whether this run created the table.
    pub created: bool,
}

/// Bootstrap stopped before the table became usable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("table bootstrap failed at step '{step}': {source}")]
pub struct BootstrapError {
    /// Step whose store call failed.
    pub step: BootstrapStep,
    #[source]
    pub source: StoreError,
}

/// Ensures the table described by `schema` exists and is active.
///
/// Running it against an existing active table only describes it. A failing
/// step returns immediately, so the loop only ever ends in `Ready`.
pub async fn ensure_table(
    admin: &dyn TableAdmin,
    schema: &TableSchema,
) -> Result<BootstrapReport, BootstrapError> {
    let table_name = schema.table_name.as_str();
    let mut step = BootstrapStep::Check;
    let mut created = false;

    tracing::info!(table_name, schema = %schema.describe(), "Bootstrapping table");

    while !step.is_terminal() {
        tracing::debug!(table_name, %step, "Bootstrap step");

        let outcome: Result<Option<TableMeta>, StoreError> = match step {
            BootstrapStep::Check => admin.describe_table(table_name).await.map(Some),
            BootstrapStep::Create => admin.create_table(schema).await.map(|()| None),
            BootstrapStep::Wait => admin.wait_until_active(table_name).await.map(|()| None),
            BootstrapStep::Ready | BootstrapStep::Failed => break,
        };

        let next = match &outcome {
            Ok(Some(meta)) => advance(step, StepOutcome::Described(meta)),
            Ok(None) => advance(step, StepOutcome::Completed),
            Err(err) => advance(step, StepOutcome::Failed(err)),
        };

        match (next, outcome) {
            (BootstrapStep::Failed, Err(source)) => {
                return Err(BootstrapError { step, source });
            }
            (BootstrapStep::Failed, Ok(_)) => {
                return Err(BootstrapError {
                    step,
                    source: StoreError::InvalidData(format!(
                        "unexpected result while in step '{}'",
                        step
                    )),
                });
            }
            (_, Err(err)) => {
                tracing::info!(table_name, %step, error = %err, "Recovered from bootstrap error");
            }
            (_, Ok(_)) => {
                if step == BootstrapStep::Create {
                    created = true;
                    tracing::info!(table_name, "Created table");
                }
            }
        }

        step = next;
    }

    Ok(BootstrapReport {
        table_name: table_name.to_string(),
        created,
    })
}

//! Polling a table until it becomes usable.

use std::time::Duration;

use notes_core::storage::{Result, StoreError, TableAdmin};

/// Describes `table_name` up to `max_attempts` times, sleeping `interval`
/// between attempts, until the table is usable.
///
/// `TableNotFound` counts as not yet active. Any other error stops polling.
pub async fn poll_until_active(
    admin: &dyn TableAdmin,
    table_name: &str,
    max_attempts: u32,
    interval: Duration,
) -> Result<()> {
    for attempt in 1..=max_attempts {
        match admin.describe_table(table_name).await {
            Ok(meta) if meta.status.is_usable() => return Ok(()),
            Ok(meta) => {
                tracing::debug!(table_name, status = ?meta.status, attempt, "Table not active yet");
            }
            // Describe can lag behind a fresh CreateTable.
            Err(StoreError::TableNotFound { .. }) => {
                tracing::debug!(table_name, attempt, "Table not visible yet");
            }
            Err(err) => return Err(err),
        }

        if attempt < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }

    Err(StoreError::ActivationTimeout {
        table_name: table_name.to_string(),
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use notes_core::table::{TableMeta, TableSchema, TableStatus};
    use tokio::time::Instant;

    use super::*;

    /// Answers `describe_table` from a script; the last answer repeats.
    struct DescribeScript {
        answers: Mutex<VecDeque<Result<TableMeta>>>,
        calls: Mutex<u32>,
    }

    impl DescribeScript {
        fn new(answers: Vec<Result<TableMeta>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl TableAdmin for DescribeScript {
        async fn describe_table(&self, _table_name: &str) -> Result<TableMeta> {
            *self.calls.lock().unwrap() += 1;
            let mut answers = self.answers.lock().unwrap();
            if answers.len() > 1 {
                answers.pop_front().unwrap()
            } else {
                answers.front().cloned().unwrap()
            }
        }

        async fn create_table(&self, _schema: &TableSchema) -> Result<()> {
            Ok(())
        }

        async fn wait_until_active(&self, _table_name: &str) -> Result<()> {
            Ok(())
        }
    }

    fn meta(status: TableStatus) -> Result<TableMeta> {
        Ok(TableMeta {
            table_name: "Notes".to_string(),
            status,
            item_count: None,
        })
    }

    fn not_found() -> Result<TableMeta> {
        Err(StoreError::TableNotFound {
            table_name: "Notes".to_string(),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_then_creating_then_active() {
        let admin = DescribeScript::new(vec![
            not_found(),
            meta(TableStatus::Creating),
            meta(TableStatus::Active),
        ]);
        let started = Instant::now();

        poll_until_active(&admin, "Notes", 60, Duration::from_secs(2))
            .await
            .unwrap();

        assert_eq!(admin.calls(), 3);
        assert_eq!(started.elapsed(), Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_active_times_out() {
        let admin = DescribeScript::new(vec![meta(TableStatus::Creating)]);
        let started = Instant::now();

        let result = poll_until_active(&admin, "Notes", 5, Duration::from_secs(2)).await;

        assert_eq!(
            result,
            Err(StoreError::ActivationTimeout {
                table_name: "Notes".to_string(),
                attempts: 5
            })
        );
        assert_eq!(admin.calls(), 5);
        // No sleep after the last attempt.
        assert_eq!(started.elapsed(), Duration::from_secs(8));
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_visible_times_out() {
        let admin = DescribeScript::new(vec![not_found()]);

        let result = poll_until_active(&admin, "Notes", 3, Duration::from_secs(1)).await;

        assert!(matches!(
            result,
            Err(StoreError::ActivationTimeout { attempts: 3, .. })
        ));
        assert_eq!(admin.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_connection_failure_stops_immediately() {
        let admin = DescribeScript::new(vec![
            meta(TableStatus::Creating),
            Err(StoreError::ConnectionFailed("refused".to_string())),
            meta(TableStatus::Active),
        ]);

        let result = poll_until_active(&admin, "Notes", 60, Duration::from_secs(2)).await;

        assert_eq!(
            result,
            Err(StoreError::ConnectionFailed("refused".to_string()))
        );
        assert_eq!(admin.calls(), 2);
    }

    #[tokio::test]
    async fn test_updating_counts_as_active() {
        let admin = DescribeScript::new(vec![meta(TableStatus::Updating)]);

        poll_until_active(&admin, "Notes", 1, Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(admin.calls(), 1);
    }
}

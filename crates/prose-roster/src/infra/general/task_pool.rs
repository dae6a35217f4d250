// prose-core-client/prose-roster
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::error;

use crate::domain::roster::models::RosterError;

/// Runs network-bound roster work on background tasks, with at most `max_concurrent_tasks`
/// running at once.
pub struct TaskPool {
    permits: Arc<Semaphore>,
}

impl TaskPool {
    pub fn new(max_concurrent_tasks: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(max_concurrent_tasks.max(1))),
        }
    }

    /// Spawns `task` and waits for its output. A task that panicked or was cancelled is
    /// reported as `RosterError::LocalInterruption`.
    pub async fn run<F, T>(&self, task: F) -> Result<T, RosterError>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let permits = self.permits.clone();

        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await;
            task.await
        });

        handle.await.map_err(|err| {
            error!("Background roster task did not complete. {}", err);
            RosterError::LocalInterruption
        })
    }
}

//! View scope
//!
//! Ties in-flight fetches to the lifetime of the view that started them.
//! Once a scope is disposed, pending operations resolve to
//! `Error::Cancelled` and their results are never applied.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::error::{Error, Result};

/// Cancellation handle shared by a view and its fetches
#[derive(Clone)]
pub struct ViewScope {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl ViewScope {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx: Arc::new(tx), rx }
    }

    /// Mark the view as gone. Idempotent.
    pub fn dispose(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_disposed(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the scope is disposed
    pub async fn disposed(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|disposed| *disposed).await.is_err() {
            // Sender is owned by the scope itself, so this cannot close early
            std::future::pending::<()>().await;
        }
    }

    /// Run `fut` unless the scope is disposed first
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_disposed() {
            return Err(Error::Cancelled);
        }

        tokio::select! {
            result = fut => {
                if self.is_disposed() {
                    Err(Error::Cancelled)
                } else {
                    result
                }
            }
            _ = self.disposed() => Err(Error::Cancelled),
        }
    }

    /// Sleep for `duration`, returning early with `Cancelled` on dispose
    pub async fn sleep(&self, duration: Duration) -> Result<()> {
        self.run(async {
            tokio::time::sleep(duration).await;
            Ok(())
        })
        .await
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_completes_when_live() {
        let scope = ViewScope::new();
        let value = scope.run(async { Ok(42) }).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_run_after_dispose_is_cancelled() {
        let scope = ViewScope::new();
        scope.dispose();
        let result = scope.run(async { Ok(1) }).await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_dispose_interrupts_pending_future() {
        let scope = ViewScope::new();
        let handle = {
            let scope = scope.clone();
            tokio::spawn(async move { scope.sleep(Duration::from_secs(60)).await })
        };

        tokio::task::yield_now().await;
        scope.dispose();

        let result = handle.await.unwrap();
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let scope = ViewScope::new();
        scope.dispose();
        scope.dispose();
        assert!(scope.is_disposed());
    }
}

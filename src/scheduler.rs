//! Trailing-edge debounce scheduling for autosave.
//!
//! The editor must not hit storage on every keystroke; it writes only
//! after a quiet period following the last edit. [`Debouncer`] gives
//! that policy cancel-and-reschedule semantics: every poke cancels the
//! pending deadline and starts a new one.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

pub struct Debouncer {
    tx: mpsc::UnboundedSender<()>,
    handle: JoinHandle<()>,
}

impl Debouncer {
    /// Spawn the debounce worker. `action` runs once per quiet period
    /// of length `delay` after the last [`poke`](Self::poke). Must be
    /// called from within a tokio runtime.
    pub fn new<F>(delay: Duration, mut action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            while rx.recv().await.is_some() {
                loop {
                    match tokio::time::timeout(delay, rx.recv()).await {
                        // Poked again before the deadline: reschedule
                        Ok(Some(())) => continue,
                        // Sender dropped mid-wait: abandon the pending run
                        Ok(None) => return,
                        Err(_) => {
                            debug!("quiet period elapsed, running debounced action");
                            action();
                            break;
                        }
                    }
                }
            }
        });
        Self { tx, handle }
    }

    /// Schedule the action, cancelling any pending deadline.
    pub fn poke(&self) {
        let _ = self.tx.send(());
    }

    /// Stop the worker and wait for it to exit. A deadline still
    /// pending at shutdown is abandoned, not fired.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_burst_of_pokes_fires_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let debouncer = Debouncer::new(Duration::from_millis(30), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        for _ in 0..5 {
            debouncer.poke();
            sleep(Duration::from_millis(5)).await;
        }
        sleep(Duration::from_millis(100)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        debouncer.shutdown().await;
    }

    #[tokio::test]
    async fn test_poke_after_fire_fires_again() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let debouncer = Debouncer::new(Duration::from_millis(20), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        debouncer.poke();
        sleep(Duration::from_millis(80)).await;
        debouncer.poke();
        sleep(Duration::from_millis(80)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 2);
        debouncer.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_abandons_pending_run() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let debouncer = Debouncer::new(Duration::from_millis(200), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        debouncer.poke();
        debouncer.shutdown().await;
        sleep(Duration::from_millis(50)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_poke_never_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let debouncer = Debouncer::new(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        sleep(Duration::from_millis(50)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        debouncer.shutdown().await;
    }
}

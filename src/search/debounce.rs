//! Debouncer - coalesces bursts of input into one delivery
//!
//! Each push restarts a timer task. Only when the quiet period elapses with no
//! newer push is the latest value sent to the receiver. The pending timer is
//! aborted when the debouncer is dropped, so it never outlives its widget.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delay between the last keystroke and the lookup
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver that gets settled values
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            delay,
            tx,
            pending: None,
        };
        (debouncer, rx)
    }

    /// Record a new value, superseding any value still waiting
    pub fn push(&mut self, value: T) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the widget is shutting down
            let _ = tx.send(value);
        }));
    }

    /// Drop the waiting value, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a value is still waiting for its quiet period
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Instant};

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let (mut debouncer, mut rx) = Debouncer::new(DEFAULT_DEBOUNCE);

        debouncer.push("u");
        sleep(Duration::from_millis(100)).await;
        debouncer.push("un");
        sleep(Duration::from_millis(100)).await;
        debouncer.push("uni");
        let last_push = Instant::now();

        assert_eq!(rx.recv().await, Some("uni"));
        assert!(last_push.elapsed() >= DEFAULT_DEBOUNCE);

        // Nothing else was delivered for the superseded values
        sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_deliver_separately() {
        let (mut debouncer, mut rx) = Debouncer::new(DEFAULT_DEBOUNCE);

        debouncer.push("peru");
        sleep(Duration::from_millis(400)).await;
        debouncer.push("chile");

        assert_eq!(rx.recv().await, Some("peru"));
        assert_eq!(rx.recv().await, Some("chile"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending_value() {
        let (mut debouncer, mut rx) = Debouncer::new(DEFAULT_DEBOUNCE);

        debouncer.push("spain");
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_timer() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(50));
        debouncer.push("france");
        drop(debouncer);

        // All senders are gone once the aborted task is cleaned up
        assert_eq!(rx.recv().await, None);
    }
}

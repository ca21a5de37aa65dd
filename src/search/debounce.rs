use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Delays committing the search box text until typing pauses
///
/// At most one timer is live at a time: every keystroke aborts the pending
/// one and starts over, so a burst of keystrokes inside one quantum commits
/// exactly once, with the last text.
pub struct Debouncer {
    quantum: Duration,
    tx: UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Returns the debouncer and the channel committed terms arrive on
    pub fn new(quantum: Duration) -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                quantum,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Record the current text of the search box, restarting the timer
    pub fn keystroke(&mut self, text: impl Into<String>) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let text = text.into();
        let tx = self.tx.clone();
        let quantum = self.quantum;
        self.pending = Some(tokio::spawn(async move {
            sleep(quantum).await;
            let _ = tx.send(text);
        }));
    }

    /// Drop any pending commit (e.g. the search box was cleared by code)
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Cancellable timers owned by a form.
//!
//! Each timer is a tokio task that sleeps and then posts a [`FormEvent`] back
//! to the form's channel. Rescheduling or cancelling aborts the previous task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::form::controller::FormEvent;

/// A single-shot timer slot.
#[derive(Debug)]
pub struct Timer {
    label: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl Timer {
    /// Creates an idle timer. `label` only appears in logs.
    #[must_use]
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            handle: None,
        }
    }

    /// Posts `event` to `tx` after `delay`, replacing any pending run.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(
        &mut self,
        delay: Duration,
        tx: mpsc::UnboundedSender<FormEvent>,
        event: FormEvent,
    ) {
        self.cancel();
        debug!("Scheduling {} in {:?}", self.label, delay);
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the form is dropped; nothing to do then.
            let _ = tx.send(event);
        }));
    }

    /// Aborts the pending run. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                debug!("Cancelled {}", self.label);
                true
            }
            _ => false,
        }
    }

    /// True while a run is scheduled and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

//! Deferred work for the form, with a handle that can be cancelled when the
//! page goes away.

use crate::error::FormError;
use leptos::prelude::{TimeoutHandle, set_timeout_with_handle};
use std::time::Duration;

/// A handle to scheduled work that has not run yet
pub trait Cancel {
    fn cancel(self);
}

impl Cancel for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Something that can run a task once after a delay
pub trait Scheduler {
    type Handle: Cancel;

    fn schedule(
        &self,
        delay: Duration,
        task: impl FnOnce() + 'static,
    ) -> Result<Self::Handle, FormError>;
}

/// Schedules through the browser's `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(
        &self,
        delay: Duration,
        task: impl FnOnce() + 'static,
    ) -> Result<TimeoutHandle, FormError> {
        set_timeout_with_handle(task, delay).map_err(|e| FormError::Schedule(format!("{e:?}")))
    }
}

/// Holds the handle of the task currently waiting to run, so teardown can
/// cancel it.
#[derive(Debug)]
pub struct PendingTask<H: Cancel> {
    handle: Option<H>,
}

impl<H: Cancel> Default for PendingTask<H> {
    fn default() -> Self {
        PendingTask { handle: None }
    }
}

impl<H: Cancel> PendingTask<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks a newly scheduled task. Any task still tracked is cancelled.
    pub fn arm(&mut self, handle: H) {
        self.cancel();
        self.handle = Some(handle);
    }

    /// The task ran; forget its handle without cancelling.
    pub fn finish(&mut self) {
        self.handle = None;
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

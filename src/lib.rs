use leptos::logging::{log, warn};
use leptos::prelude::*;

mod config;
mod error;
mod form;
mod frontend;
mod submit;
mod timer;
mod utils;

use config::FormConfig;
use error::FormError;
use form::LookupForm;
use submit::{finish_submission, start_submission};
use timer::{BrowserScheduler, Cancel, PendingTask, Scheduler};

/// Hold logical items of our website
///
/// `H` is the handle type of the scheduler driving the placeholder delay;
/// the page itself always runs on browser timeouts.
pub struct Website<H: Cancel = TimeoutHandle> {
    // Form state, written by the inputs and the submit event
    pub(crate) form: RwSignal<LookupForm>,
    // Placeholder delay standing in for the lookup request
    pub(crate) pending: StoredValue<PendingTask<H>, LocalStorage>,
    pub(crate) config: FormConfig,
}

impl<H: Cancel> Clone for Website<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: Cancel> Copy for Website<H> {}

impl Default for Website {
    fn default() -> Self {
        Website::new(FormConfig::default())
    }
}

impl Website {
    pub fn app() -> impl IntoView {
        let website = Website::default();

        view! { <frontend::LandingPage site=website /> }
    }

    /// Handles a submit event on the lookup form.
    pub fn submit(self) {
        self.submit_with(&BrowserScheduler);
    }
}

impl<H: Cancel + 'static> Website<H> {
    pub(crate) fn new(config: FormConfig) -> Self {
        Website {
            form: RwSignal::new(LookupForm::new()),
            pending: StoredValue::new_local(PendingTask::new()),
            config,
        }
    }

    /// Submits the form, running the placeholder delay on `scheduler`.
    pub(crate) fn submit_with<S: Scheduler<Handle = H>>(self, scheduler: &S) {
        let Website {
            form,
            pending,
            config,
        } = self;
        let started = form.try_update(|f| {
            start_submission(f, scheduler, config.submit_delay, move || {
                pending.try_update_value(PendingTask::finish);
                form.try_update(finish_submission);
            })
        });
        match started {
            Some(Ok((handle, _))) => pending.update_value(|p| p.arm(handle)),
            // shown by the error banner
            Some(Err(FormError::InvalidCrn)) => {}
            Some(Err(e)) => warn!("submit ignored: {e}"),
            None => warn!("submit after the form was disposed"),
        }
    }

    /// Drops any pending submission so it cannot touch a removed view.
    pub(crate) fn teardown(self) {
        self.pending.try_update_value(|p| {
            if p.is_pending() {
                log!("cancelling pending submission");
                p.cancel();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timer::manual::{ManualHandle, ManualScheduler};

    fn filled(professor: &str, crn: &str) -> Website<ManualHandle> {
        let site = Website::new(FormConfig::default());
        site.form.update(|f| {
            f.set_professor(professor.to_string());
            f.set_crn(crn.to_string());
        });
        site
    }

    #[test]
    fn test_invalid_submit_shows_banner() {
        let scheduler = ManualScheduler::default();
        let site = filled("Smith", "12345");

        site.submit_with(&scheduler);
        assert_eq!(
            site.form.with(LookupForm::error_message).as_deref(),
            Some("CRN must be exactly 6 digits")
        );
        assert!(!site.form.with(LookupForm::is_submitting));
        assert!(!site.pending.with_value(PendingTask::is_pending));
        assert_eq!(scheduler.waiting(), 0);

        // nothing pending, so teardown is a no-op
        site.teardown();
        assert!(scheduler.cancelled().is_empty());
    }

    #[test]
    fn test_valid_submit_runs_delay_then_resets() {
        let scheduler = ManualScheduler::default();
        let site = filled("Smith", "123456");

        site.submit_with(&scheduler);
        assert!(site.form.with(LookupForm::is_submitting));
        assert_eq!(site.form.with(LookupForm::error_message), None);
        assert!(site.pending.with_value(PendingTask::is_pending));
        assert_eq!(scheduler.delays(), vec![site.config.submit_delay]);

        // button is disabled, and a second submit changes nothing
        site.submit_with(&scheduler);
        assert_eq!(scheduler.waiting(), 1);

        scheduler.run_all();
        assert!(!site.form.with(LookupForm::is_submitting));
        assert!(!site.pending.with_value(PendingTask::is_pending));
        assert_eq!(site.form.with(LookupForm::error_message), None);

        // the timer already ran, nothing to cancel
        site.teardown();
        assert!(scheduler.cancelled().is_empty());
    }

    #[test]
    fn test_teardown_cancels_waiting_delay() {
        let scheduler = ManualScheduler::default();
        let site = filled("Smith", "123456");

        site.submit_with(&scheduler);
        site.teardown();
        assert_eq!(scheduler.cancelled(), vec![0]);
        assert_eq!(scheduler.waiting(), 0);
        assert!(!site.pending.with_value(PendingTask::is_pending));

        scheduler.run_all();
        // the reset never ran
        assert!(site.form.with(LookupForm::is_submitting));
    }
}

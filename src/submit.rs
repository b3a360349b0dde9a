use crate::error::FormError;
use crate::form::{LookupForm, Submission};
use crate::timer::Scheduler;
use leptos::logging::{error, log};
use std::time::Duration;

/// Submits the form and arms the placeholder delay.
///
/// `on_done` is scheduled to run after `delay` and is expected to call
/// [`finish_submission`]. If the delay cannot be scheduled the form is put
/// straight back to idle so the button does not stay disabled.
///
/// # Returns
/// The handle of the scheduled delay and the values being submitted
pub fn start_submission<S: Scheduler>(
    form: &mut LookupForm,
    scheduler: &S,
    delay: Duration,
    on_done: impl FnOnce() + 'static,
) -> Result<(S::Handle, Submission), FormError> {
    let submission = form.submit()?;
    match scheduler.schedule(delay, on_done) {
        Ok(handle) => Ok((handle, submission)),
        Err(e) => {
            error!("{e}");
            form.complete();
            Err(e)
        }
    }
}

/// Ends the placeholder submission and reports the values that would have
/// been sent to the lookup service.
pub fn finish_submission(form: &mut LookupForm) -> Option<Submission> {
    let submission = form.complete()?;
    log!("Professor: {}", submission.professor);
    log!("CRN: {}", submission.crn);
    Some(submission)
}

use crate::config::{SUBMIT_LABEL, SUBMITTING_LABEL};
use crate::error::FormError;
use crate::utils::is_valid_crn;

/// Values captured when a submission starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub professor: String,
    pub crn: String,
}

/// State of the course lookup form.
///
/// Plain fields, mutated only through the methods below. The page keeps one
/// of these in a signal and renders from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupForm {
    professor: String,
    crn: String,
    submitting: Option<Submission>,
    error: Option<FormError>,
}

impl LookupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn professor(&self) -> &str {
        &self.professor
    }

    pub fn crn(&self) -> &str {
        &self.crn
    }

    pub fn set_professor(&mut self, value: String) {
        self.professor = value;
    }

    /// Validation waits until submit.
    pub fn set_crn(&mut self, value: String) {
        self.crn = value;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Starts a submission.
    ///
    /// Clears the previous error, then checks the CRN. An invalid CRN is
    /// stored as the form error and the form stays idle. A valid one flips
    /// the form into the submitting state and returns the captured values.
    /// A submit that arrives mid-flight is refused and leaves the form alone.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        self.error = None;

        if !is_valid_crn(&self.crn) {
            self.error = Some(FormError::InvalidCrn);
            return Err(FormError::InvalidCrn);
        }

        let submission = Submission {
            professor: self.professor.clone(),
            crn: self.crn.clone(),
        };
        self.submitting = Some(submission.clone());
        Ok(submission)
    }

    /// Ends the in-flight submission, if any, and hands back what was sent.
    pub fn complete(&mut self) -> Option<Submission> {
        self.submitting.take()
    }

    // render model

    /// Text for the error banner; `None` hides the banner
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn button_class(&self) -> &'static str {
        if self.is_submitting() {
            "submit-button submitting"
        } else {
            "submit-button"
        }
    }
}

use std::time::Duration;

// Stand-in for the lookup request that does not exist yet.
pub const SUBMIT_DELAY_MS: u64 = 500;

pub const APP_TITLE: &str = "Course Compass";
pub const APP_SUBTITLE: &str = "Enter a professor and/or CRN.";

pub const PROFESSOR_ID: &str = "professor";
pub const PROFESSOR_LABEL: &str = "Professor Name";
pub const PROFESSOR_PLACEHOLDER: &str = "Enter professor's name";

pub const CRN_ID: &str = "crn";
pub const CRN_LABEL: &str = "CRN (Course Reference Number)";
pub const CRN_PLACEHOLDER: &str = "Enter CRN";

pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Processing...";
pub const ERROR_ICON: &str = "⚠️";

/// Tunables for the landing page form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    /// How long the placeholder submission stays in flight
    pub submit_delay: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            submit_delay: Duration::from_millis(SUBMIT_DELAY_MS),
        }
    }
}

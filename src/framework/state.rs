//! Form states and the snapshot a front end renders.

use std::fmt;

use super::SubmitError;
use crate::view::{Panel, StatusLine};

/// Lifecycle of one form. Every state except `Validating` and `Loading` accepts a
/// new submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Loading,
    Success,
    Error,
}

impl FormState {
    pub fn is_in_flight(self) -> bool {
        matches!(self, FormState::Validating | FormState::Loading)
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormState::Idle => "idle",
            FormState::Validating => "validating",
            FormState::Loading => "loading",
            FormState::Success => "success",
            FormState::Error => "error",
        };
        f.write_str(name)
    }
}

/// Everything visible about a form after a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub form: &'static str,
    pub state: FormState,
    pub status: StatusLine,
    pub panel: Panel,
    /// The front end should clear the form's editable inputs.
    pub reset_inputs: bool,
    pub error: Option<SubmitError>,
}

impl FormSnapshot {
    pub fn idle(form: &'static str) -> Self {
        Self {
            form,
            state: FormState::Idle,
            status: StatusLine::default(),
            panel: Panel::Empty,
            reset_inputs: false,
            error: None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(SubmitError::message)
    }
}

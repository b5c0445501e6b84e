// SPDX-License-Identifier: MPL-2.0
//! Pure state machine of a detector panel.
//!
//! One panel owns one file selection and one display phase. The phase is a
//! single enum, so a verdict and an error can never be shown at the same
//! time, and leaving `Loading` (the only phase that disables submit) happens
//! in exactly one place: the [`Message::Completed`] handler. That handler is
//! reached on every outcome of a request, which is what guarantees the
//! spinner is hidden and submit is re-enabled on success, server error, and
//! transport failure alike.

use crate::detection::{
    validate_submission, DetectionReport, Modality, SelectedFile, SubmitError,
};
use crate::i18n::fluent::I18n;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Display phase of a panel. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    /// Nothing submitted yet, or ready for the next attempt.
    #[default]
    Idle,
    /// A request is in flight; submit is disabled.
    Loading,
    /// The server returned a verdict.
    Result(DetectionReport),
    /// Validation, server, or transport failure.
    Failed(SubmitError),
}

/// Messages handled by a panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// The browse button was pressed.
    BrowsePressed,
    /// The file dialog closed; `None` means it was cancelled.
    FileChosen(Option<SelectedFile>),
    /// A file was dropped onto the window and routed to this panel.
    FileDropped(SelectedFile),
    /// A drag with a file for this panel entered the window.
    DragEntered,
    /// The drag left the window without dropping.
    DragLeft,
    /// The submit button was pressed.
    SubmitPressed,
    /// The detection request finished, one way or another.
    Completed(Result<DetectionReport, SubmitError>),
    /// Periodic tick to animate the spinner.
    SpinnerTick,
}

/// Side effects requested from the application shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Open the file dialog for this panel's modality.
    OpenFileDialog,
    /// Issue the detection request for the validated selection.
    Submit(SelectedFile),
}

/// State of one detector panel.
#[derive(Debug)]
pub struct State {
    modality: Modality,
    selection: Option<SelectedFile>,
    phase: Phase,
    drop_hover: bool,
    spinner_rotation: f32,
}

impl State {
    /// Creates an idle panel for the given modality.
    #[must_use]
    pub fn new(modality: Modality) -> Self {
        Self {
            modality,
            selection: None,
            phase: Phase::Idle,
            drop_hover: false,
            spinner_rotation: 0.0,
        }
    }

    /// Handles a message and returns the effect the shell should perform.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::BrowsePressed => Effect::OpenFileDialog,
            Message::FileChosen(Some(file)) | Message::FileDropped(file) => {
                self.selection = Some(file);
                self.drop_hover = false;
                Effect::None
            }
            Message::FileChosen(None) => {
                // Dialog cancelled; the previous selection stays.
                Effect::None
            }
            Message::DragEntered => {
                self.drop_hover = true;
                Effect::None
            }
            Message::DragLeft => {
                self.drop_hover = false;
                Effect::None
            }
            Message::SubmitPressed => self.submit(),
            Message::Completed(result) => {
                // Sole exit from Loading; runs on every outcome.
                if self.phase == Phase::Loading {
                    self.phase = match result {
                        Ok(report) => Phase::Result(report),
                        Err(error) => Phase::Failed(error),
                    };
                }
                Effect::None
            }
            Message::SpinnerTick => {
                if self.phase == Phase::Loading {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                Effect::None
            }
        }
    }

    /// Validates the current selection and, if it passes, enters `Loading`
    /// and asks the shell to issue the request.
    ///
    /// Validation failures replace the phase without entering `Loading`; no
    /// request is issued for them.
    fn submit(&mut self) -> Effect {
        if self.phase == Phase::Loading {
            // The button is disabled while loading; ignore stray presses.
            return Effect::None;
        }

        if let Err(error) = validate_submission(self.modality, self.selection.as_ref()) {
            self.phase = Phase::Failed(error);
            return Effect::None;
        }

        // Validation passed, so a selection is present.
        let Some(file) = self.selection.clone() else {
            self.phase = Phase::Failed(SubmitError::NoFileSelected);
            return Effect::None;
        };

        self.phase = Phase::Loading;
        self.spinner_rotation = 0.0;
        Effect::Submit(file)
    }

    #[must_use]
    pub fn modality(&self) -> Modality {
        self.modality
    }

    #[must_use]
    pub fn selection(&self) -> Option<&SelectedFile> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether the submit action is currently enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    #[must_use]
    pub fn drop_hover(&self) -> bool {
        self.drop_hover
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Resolved error text for the error region, if an error is shown.
    #[must_use]
    pub fn error_message(&self, i18n: &I18n) -> Option<String> {
        let Phase::Failed(error) = &self.phase else {
            return None;
        };

        let key = error.i18n_key(self.modality);
        Some(match error.detail() {
            Some(detail) => i18n.tr_with_args(&key, &[("detail", detail)]),
            None => i18n.tr(&key),
        })
    }

    /// Resolved verdict headline, if a result is shown.
    #[must_use]
    pub fn verdict_message(&self, i18n: &I18n) -> Option<String> {
        let Phase::Result(report) = &self.phase else {
            return None;
        };
        Some(i18n.tr(&report.verdict().i18n_key(self.modality)))
    }
}

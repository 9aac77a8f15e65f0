//! The top-level session state machine.
//!
//! ```text
//! welcome ──select_category──▶ questionnaire ──complete──▶ pending ──success──▶ dashboard
//!                                   ▲                          │
//!                                   └────────── failure ───────┘
//! restart(): any screen ──▶ welcome
//! ```
//!
//! Every transition except [`Session::restart`] is checked against the
//! current screen; a rejected transition returns
//! [`CoreError::InvalidTransition`] and leaves the session untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assessment::{AssessmentRequest, FormAnswers};
use crate::category::Category;
use crate::errors::CoreError;
use crate::response::AnalysisResponse;
use crate::wizard::{Questionnaire, WizardStep};

/// Shown after any failed analysis, whatever the cause.
pub const ANALYSIS_FAILED_NOTICE: &str =
    "Something went wrong with the AI analysis. Please try again.";

/// Which component is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Welcome,
    Questionnaire,
    Pending,
    Dashboard,
}

impl Screen {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Questionnaire => "questionnaire",
            Self::Pending => "pending",
            Self::Dashboard => "dashboard",
        }
    }

    /// Screens reachable by a checked transition. `restart` is not listed;
    /// it reaches `Welcome` from anywhere.
    #[must_use]
    pub const fn allowed_next_screens(self) -> &'static [Self] {
        match self {
            Self::Welcome => &[Self::Questionnaire],
            Self::Questionnaire => &[Self::Pending],
            Self::Pending => &[Self::Dashboard, Self::Questionnaire],
            Self::Dashboard => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_screens().contains(&next)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`Session::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Blocked,
    Moved,
    /// The last question was answered; the session is now `pending` and the
    /// caller should hand this request to the gateway.
    Submitted(AssessmentRequest),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    screen: Screen,
    category: Option<Category>,
    report: Option<AnalysisResponse>,
    wizard: Option<Questionnaire>,
    notice: Option<String>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    #[must_use]
    pub const fn report(&self) -> Option<&AnalysisResponse> {
        self.report.as_ref()
    }

    #[must_use]
    pub const fn wizard(&self) -> Option<&Questionnaire> {
        self.wizard.as_ref()
    }

    /// The wizard, but only while it is on screen and editable.
    pub fn wizard_mut(&mut self) -> Option<&mut Questionnaire> {
        if self.screen == Screen::Questionnaire {
            self.wizard.as_mut()
        } else {
            None
        }
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn ensure(&self, next: Screen, action: &'static str) -> Result<(), CoreError> {
        if self.screen.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: self.screen,
                action,
            })
        }
    }

    /// Pick a category and start a blank questionnaire.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] unless on the welcome screen.
    pub fn select_category(&mut self, category: Category) -> Result<(), CoreError> {
        self.ensure(Screen::Questionnaire, "select a category")?;
        self.category = Some(category);
        self.wizard = Some(Questionnaire::new());
        self.notice = None;
        self.screen = Screen::Questionnaire;
        Ok(())
    }

    /// Build the request from `answers` and move to `pending`.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] unless on the questionnaire screen,
    /// [`CoreError::MissingCategory`] if no category was chosen.
    pub fn complete_questionnaire(
        &mut self,
        answers: FormAnswers,
    ) -> Result<AssessmentRequest, CoreError> {
        self.ensure(Screen::Pending, "submit the questionnaire")?;
        let category = self.category.ok_or(CoreError::MissingCategory)?;
        let request = AssessmentRequest::new(category, answers);
        self.notice = None;
        self.screen = Screen::Pending;
        Ok(request)
    }

    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] unless pending.
    pub fn on_analysis_success(&mut self, response: AnalysisResponse) -> Result<(), CoreError> {
        self.ensure(Screen::Dashboard, "show a report")?;
        self.report = Some(response);
        self.screen = Screen::Dashboard;
        Ok(())
    }

    /// Return to the questionnaire with `notice` shown. Answers and the
    /// wizard position are kept so the user can resubmit.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] unless pending.
    pub fn on_analysis_failure(&mut self, notice: impl Into<String>) -> Result<(), CoreError> {
        self.ensure(Screen::Questionnaire, "report a failed analysis")?;
        self.notice = Some(notice.into());
        self.screen = Screen::Questionnaire;
        Ok(())
    }

    /// Back to a blank welcome screen. Always succeeds.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Advance the wizard; answering the last question submits.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] unless on the questionnaire screen.
    pub fn advance(&mut self) -> Result<Advance, CoreError> {
        let screen = self.screen;
        let Some(wizard) = self.wizard_mut() else {
            return Err(CoreError::InvalidTransition {
                from: screen,
                action: "advance the questionnaire",
            });
        };
        match wizard.advance() {
            WizardStep::Blocked => Ok(Advance::Blocked),
            WizardStep::Moved => Ok(Advance::Moved),
            WizardStep::Completed(answers) => {
                self.complete_questionnaire(answers).map(Advance::Submitted)
            }
        }
    }

    /// Step the wizard back. `Ok(false)` at the first question.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] unless on the questionnaire screen.
    pub fn retreat(&mut self) -> Result<bool, CoreError> {
        let screen = self.screen;
        self.wizard_mut()
            .map(Questionnaire::retreat)
            .ok_or(CoreError::InvalidTransition {
                from: screen,
                action: "go back in the questionnaire",
            })
    }
}

//! The questionnaire wizard: one question at a time over [`QUESTIONS`].
//!
//! The wizard only knows positions and answers. It never talks to the
//! gateway; completing the last question hands the answers back to the
//! session, which owns the transition to `pending`.

use crate::assessment::{FormAnswers, StressRating};
use crate::question::{Answer, Phase, QUESTIONS, Question, QuestionKind};

/// Outcome of [`Questionnaire::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    /// The current answer is empty; nothing changed.
    Blocked,
    /// Moved to the next question.
    Moved,
    /// The last question was answered. Carries a copy of every answer; the
    /// wizard keeps its own so a failed submission can be retried.
    Completed(FormAnswers),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Questionnaire {
    index: usize,
    answers: FormAnswers,
}

impl Questionnaire {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn total() -> usize {
        QUESTIONS.len()
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn question(&self) -> &'static Question {
        &QUESTIONS[self.index]
    }

    /// Derived purely from the index.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.question().phase()
    }

    #[must_use]
    pub const fn answers(&self) -> &FormAnswers {
        &self.answers
    }

    #[must_use]
    pub fn current_answer(&self) -> Answer<'_> {
        self.question().key.answer(&self.answers)
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.index + 1 == Self::total()
    }

    /// Whether [`advance`](Self::advance) would do anything.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        matches!(self.question().kind, QuestionKind::NumericRange { .. })
            || !self.current_answer().is_empty()
    }

    /// `(index + 1, total)`, for "3 of 11" labels.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.index + 1, Self::total())
    }

    /// `(index + 1) / total`, in `(0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / Self::total() as f64
    }

    pub fn advance(&mut self) -> WizardStep {
        if !self.can_advance() {
            return WizardStep::Blocked;
        }
        if self.is_last() {
            return WizardStep::Completed(self.answers.clone());
        }
        self.index += 1;
        WizardStep::Moved
    }

    /// Step back one question. Returns `false` at the first question.
    pub fn retreat(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    fn free_text_mut(&mut self) -> Option<&mut String> {
        match self.question().kind {
            QuestionKind::FreeText { .. } => self.question().key.text_mut(&mut self.answers),
            _ => None,
        }
    }

    /// Replace the current free-text answer. Ignored for other kinds.
    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        self.free_text_mut().map(|text| *text = value.into()).is_some()
    }

    pub fn push_char(&mut self, c: char) -> bool {
        self.free_text_mut().map(|text| text.push(c)).is_some()
    }

    pub fn pop_char(&mut self) -> bool {
        self.free_text_mut().and_then(String::pop).is_some()
    }

    /// Index of the currently chosen option, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<usize> {
        let Answer::Text(current) = self.current_answer() else {
            return None;
        };
        self.question().options().iter().position(|option| *option == current)
    }

    /// Choose option `choice` of the current single-choice question.
    pub fn select_option(&mut self, choice: usize) -> bool {
        let question = self.question();
        let Some(option) = question.options().get(choice) else {
            return false;
        };
        question
            .key
            .text_mut(&mut self.answers)
            .map(|text| *text = (*option).to_string())
            .is_some()
    }

    /// Move the selection by `delta`, wrapping. With nothing chosen yet,
    /// a forward step picks the first option and a backward step the last.
    pub fn cycle_option(&mut self, delta: isize) -> bool {
        let count = self.question().options().len();
        if count == 0 {
            return false;
        }
        let next = match self.selected_option() {
            Some(current) => {
                let modulus = isize::try_from(count).unwrap_or(isize::MAX);
                (current + delta.rem_euclid(modulus).unsigned_abs()) % count
            }
            None if delta < 0 => count - 1,
            None => 0,
        };
        self.select_option(next)
    }

    pub fn set_rating(&mut self, rating: StressRating) -> bool {
        let key = self.question().key;
        key.rating_mut(&mut self.answers)
            .map(|slot| *slot = rating)
            .is_some()
    }

    pub fn adjust_rating(&mut self, delta: i16) -> bool {
        let key = self.question().key;
        key.rating_mut(&mut self.answers)
            .map(|slot| *slot = slot.offset(delta))
            .is_some()
    }
}

use log::debug;
use serde_json::Value;
use std::collections::HashSet;

use self::definition::*;
use self::phase::*;
use self::session::Session;
use self::settings::*;
use self::view::ViewState;

pub mod definition;
mod error;
pub mod phase;
pub mod session;
pub mod settings;
pub mod shuffle;
pub mod view;

pub use self::error::QuizError;


#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was selected and skipping is disabled. The question stays open.
    SelectionRequired,
    Answered(AnswerResult),
}

/// Quiz engine. Owns the canonical question set and the live session.
#[derive(Debug)]
pub struct Quiz {
    questions: Vec<Question>,
    settings: Settings,
    session: Session,
}

impl Quiz {
    pub fn new(questions: Vec<Question>, settings: Settings) -> Result<Quiz, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }
        let session = Session::new(&questions);
        Ok(Quiz {
            questions,
            settings,
            session,
        })
    }

    /// Sanitizes raw records and starts the first session.
    pub fn initialize(records: &Value, settings: Settings) -> Result<Quiz, QuizError> {
        let definition = QuizDefinition::from_value(records)?;
        Quiz::new(definition.into_questions(), settings)
    }

    pub fn phase(&self) -> PhaseKind {
        self.session.phase().kind()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn invalid_transition(&self, operation: &'static str) -> QuizError {
        QuizError::InvalidTransition {
            operation,
            phase: self.phase(),
        }
    }

    pub fn toggle_option(&mut self, index: usize) -> Result<bool, QuizError> {
        self.session
            .toggle_option(index)
            .ok_or_else(|| self.invalid_transition("select an option"))
    }

    pub fn submit<I, S>(&mut self, selected: I) -> Result<SubmitOutcome, QuizError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.phase() != PhaseKind::Answering {
            return Err(self.invalid_transition("submit an answer"));
        }

        let selected: HashSet<String> = selected.into_iter().map(Into::into).collect();
        if selected.is_empty() {
            if !self.settings.allow_skip {
                return Ok(SubmitOutcome::SelectionRequired);
            }
            self.session.record_skip();
            return Ok(self.reveal(selected, AnswerResult::Skipped));
        }

        let result = AnswerResult::evaluate(
            &self.session.current().question,
            &selected,
            &self.settings.fallback_explanation,
        );
        self.session.record_answer(result.is_correct());
        Ok(self.reveal(selected, result))
    }

    /// Submits whatever the user toggled on for the current question.
    pub fn submit_selection(&mut self) -> Result<SubmitOutcome, QuizError> {
        let selected = match self.session.phase() {
            Phase::Answering(state) => state.selections().clone(),
            _ => return Err(self.invalid_transition("submit an answer")),
        };
        self.submit(selected)
    }

    fn reveal(&mut self, selections: HashSet<String>, result: AnswerResult) -> SubmitOutcome {
        debug!(
            "Question {} answered: {:?}",
            self.session.current_index() + 1,
            result
        );
        self.session.set_phase(Phase::Revealed(RevealedState {
            selections,
            result: result.clone(),
        }));
        SubmitOutcome::Answered(result)
    }

    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.phase() != PhaseKind::Revealed {
            return Err(self.invalid_transition("advance"));
        }
        if self.session.has_next_question() {
            self.session.next_question();
        } else {
            self.session.set_phase(Phase::Summary);
        }
        Ok(())
    }

    pub fn enter_review(&mut self) -> Result<(), QuizError> {
        if self.phase() != PhaseKind::Summary {
            return Err(self.invalid_transition("open the review"));
        }
        self.session.set_phase(Phase::Review);
        Ok(())
    }

    pub fn exit_review(&mut self) -> Result<(), QuizError> {
        if self.phase() != PhaseKind::Review {
            return Err(self.invalid_transition("close the review"));
        }
        self.session.set_phase(Phase::Summary);
        Ok(())
    }

    /// Starts over with freshly shuffled questions and options. Allowed from any phase.
    pub fn restart(&mut self) {
        debug!("Restarting quiz with {} questions", self.questions.len());
        self.session = Session::new(&self.questions);
    }

    pub fn summary_stats(&self) -> Result<SummaryStats, QuizError> {
        match self.phase() {
            PhaseKind::Summary | PhaseKind::Review => Ok(view::summary_stats(&self.session)),
            _ => Err(self.invalid_transition("show the summary")),
        }
    }

    pub fn review(&self) -> Result<Vec<ReviewEntry>, QuizError> {
        match self.phase() {
            PhaseKind::Summary | PhaseKind::Review => Ok(project(self.session.order())),
            _ => Err(self.invalid_transition("show the review")),
        }
    }

    pub fn view_state(&self) -> ViewState {
        view::build(&self.session)
    }
}

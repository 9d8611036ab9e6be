use anyhow::Result;
use log::debug;

pub mod quiz;

use crate::commands::Command;
use crate::game::quiz::phase::PhaseKind;
use crate::game::quiz::{Quiz, SubmitOutcome};
use crate::output::{Message, QuizOutput};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Relays user commands into the quiz and keeps the output in sync with it.
pub struct Game<O: QuizOutput> {
    quiz: Quiz,
    output: O,
}

impl<O: QuizOutput> Game<O> {
    pub fn new(quiz: Quiz, output: O) -> Self {
        Game { quiz, output }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn begin(&mut self) -> Result<()> {
        self.render()?;
        let total = self.quiz.session().order().len();
        self.output.say(&Message::QuizRules(total))
    }

    fn render(&mut self) -> Result<()> {
        let view = self.quiz.view_state();
        self.output.render(&view)
    }

    pub fn handle(&mut self, command: Command) -> Result<Flow> {
        debug!("Handling {:?} during {:?}", command, self.quiz.phase());
        match (command, self.quiz.phase()) {
            (Command::Quit, _) => return Ok(Flow::Quit),
            (Command::Select(index), PhaseKind::Answering) => {
                if self.quiz.toggle_option(index)? {
                    self.render()?;
                }
            }
            (Command::Primary, PhaseKind::Answering) => match self.quiz.submit_selection()? {
                SubmitOutcome::SelectionRequired => {
                    self.output.say(&Message::SelectionRequired)?;
                }
                SubmitOutcome::Answered(_) => self.render()?,
            },
            (Command::Primary, PhaseKind::Revealed) => {
                self.quiz.advance()?;
                self.render()?;
            }
            (Command::Primary, PhaseKind::Summary) | (Command::Restart, _) => {
                self.quiz.restart();
                self.render()?;
            }
            (Command::Primary, PhaseKind::Review) | (Command::ToggleReview, PhaseKind::Review) => {
                self.quiz.exit_review()?;
                self.render()?;
            }
            (Command::ToggleReview, PhaseKind::Summary) => {
                self.quiz.enter_review()?;
                self.render()?;
            }
            _ => (),
        }
        Ok(Flow::Continue)
    }
}

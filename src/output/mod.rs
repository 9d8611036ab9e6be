use anyhow::Result;

use crate::game::quiz::view::ViewState;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    QuizRules(usize),
    SelectionRequired,
}

/// Surface the quiz is drawn on.
pub trait QuizOutput {
    fn render(&mut self, view: &ViewState) -> Result<()>;

    fn say(&mut self, message: &Message) -> Result<()>;
}

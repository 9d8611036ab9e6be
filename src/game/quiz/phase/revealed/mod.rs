use std::collections::HashSet;

use crate::game::quiz::definition::Question;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionMarker {
    Unmarked,
    CorrectAnswer,
    WrongSelection,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnswerResult {
    Skipped,
    Correct,
    Incorrect {
        explanation: String,
        /// One marker per option, in displayed order.
        markers: Vec<OptionMarker>,
    },
}

impl AnswerResult {
    pub fn evaluate(
        question: &Question,
        selected: &HashSet<String>,
        fallback_explanation: &str,
    ) -> Self {
        if question.is_selection_correct(selected) {
            return AnswerResult::Correct;
        }
        AnswerResult::Incorrect {
            explanation: question
                .explanation
                .clone()
                .unwrap_or_else(|| fallback_explanation.to_owned()),
            markers: mark_options(question, selected),
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerResult::Correct)
    }
}

pub fn mark_options(question: &Question, selected: &HashSet<String>) -> Vec<OptionMarker> {
    question
        .options
        .iter()
        .map(|option| {
            if question.is_correct_answer(option) {
                OptionMarker::CorrectAnswer
            } else if selected.contains(option) {
                OptionMarker::WrongSelection
            } else {
                OptionMarker::Unmarked
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct RevealedState {
    pub selections: HashSet<String>,
    pub result: AnswerResult,
}

use log::debug;

use crate::game::quiz::definition::Question;
use crate::game::quiz::phase::{AnsweringState, Phase};
use crate::game::quiz::shuffle::shuffle;

#[derive(Clone, Debug)]
pub struct SessionQuestion {
    pub question: Question,
    pub is_multiple: bool,
}

impl SessionQuestion {
    fn new(question: &Question) -> Self {
        SessionQuestion {
            question: Question {
                options: shuffle(&question.options),
                ..question.clone()
            },
            is_multiple: question.is_multiple(),
        }
    }
}

/// One playthrough of the canonical question set.
#[derive(Debug)]
pub struct Session {
    order: Vec<SessionQuestion>,
    current_index: usize,
    correct_count: usize,
    answered_count: usize,
    skipped_count: usize,
    phase: Phase,
}

impl Session {
    pub fn new(questions: &[Question]) -> Self {
        let order = shuffle(questions).iter().map(SessionQuestion::new).collect();
        Session {
            order,
            current_index: 0,
            correct_count: 0,
            answered_count: 0,
            skipped_count: 0,
            phase: Phase::Answering(AnsweringState::new()),
        }
    }

    pub fn order(&self) -> &[SessionQuestion] {
        &self.order
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &SessionQuestion {
        &self.order[self.current_index]
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn answered_count(&self) -> usize {
        self.answered_count
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_count
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// `None` outside of the answering phase.
    pub fn toggle_option(&mut self, index: usize) -> Option<bool> {
        match &mut self.phase {
            Phase::Answering(state) => Some(state.toggle(&self.order[self.current_index], index)),
            _ => None,
        }
    }

    pub fn set_phase(&mut self, phase: Phase) {
        debug!("Entering quiz phase: {:?}", phase.kind());
        self.phase = phase;
    }

    pub fn record_answer(&mut self, is_correct: bool) {
        self.answered_count += 1;
        if is_correct {
            self.correct_count += 1;
        }
    }

    pub fn record_skip(&mut self) {
        self.answered_count += 1;
        self.skipped_count += 1;
    }

    pub fn has_next_question(&self) -> bool {
        self.current_index + 1 < self.order.len()
    }

    pub fn next_question(&mut self) {
        self.current_index += 1;
        self.set_phase(Phase::Answering(AnsweringState::new()));
    }
}

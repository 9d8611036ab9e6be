use std::collections::HashSet;

use crate::game::quiz::session::SessionQuestion;


/// Options picked for the active question, before submission.
#[derive(Clone, Debug, Default)]
pub struct AnsweringState {
    selections: HashSet<String>,
}

impl AnsweringState {
    pub fn new() -> Self {
        AnsweringState {
            selections: HashSet::new(),
        }
    }

    pub fn selections(&self) -> &HashSet<String> {
        &self.selections
    }

    pub fn is_selected(&self, option: &str) -> bool {
        self.selections.contains(option)
    }

    /// Radio semantics for single-choice questions, checkbox semantics otherwise.
    /// Returns false when `index` does not point at an option.
    pub fn toggle(&mut self, question: &SessionQuestion, index: usize) -> bool {
        let option = match question.question.options.get(index) {
            Some(option) => option,
            None => return false,
        };

        if question.is_multiple {
            if !self.selections.remove(option) {
                self.selections.insert(option.clone());
            }
        } else {
            self.selections.clear();
            self.selections.insert(option.clone());
        }
        true
    }
}

use crate::game::quiz::definition::question::is_image;
use crate::game::quiz::session::SessionQuestion;


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReviewOption {
    pub text: String,
    pub is_correct: bool,
    pub is_image: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReviewEntry {
    pub title: Option<String>,
    pub text: String,
    pub options: Vec<ReviewOption>,
    pub explanation: Option<String>,
}

impl ReviewEntry {
    pub fn new(session_question: &SessionQuestion) -> Self {
        let question = &session_question.question;
        let options = question
            .options
            .iter()
            .map(|option| ReviewOption {
                text: option.clone(),
                is_correct: question.is_correct_answer(option),
                is_image: is_image(option),
            })
            .collect();
        ReviewEntry {
            title: question.title.clone(),
            text: question.text.clone(),
            options,
            explanation: question.explanation.clone(),
        }
    }
}

/// Every question of the session in play order, with its answers revealed.
pub fn project(order: &[SessionQuestion]) -> Vec<ReviewEntry> {
    order.iter().map(ReviewEntry::new).collect()
}

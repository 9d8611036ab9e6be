use super::*;

const FALLBACK: &str = "fallback explanation";

fn question(correct_answers: &[&str], explanation: Option<&str>) -> Question {
    Question {
        text: "example question".to_owned(),
        options: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
        correct_answers: correct_answers.iter().map(|a| a.to_string()).collect(),
        explanation: explanation.map(str::to_owned),
        image_url: None,
        title: None,
    }
}

fn selection(options: &[&str]) -> HashSet<String> {
    options.iter().map(|o| o.to_string()).collect()
}

#[test]
fn correct_selection() {
    let result = AnswerResult::evaluate(&question(&["B"], None), &selection(&["B"]), FALLBACK);
    assert_eq!(result, AnswerResult::Correct);
    assert!(result.is_correct());
}

#[test]
fn incorrect_selection_uses_fallback_explanation() {
    let result = AnswerResult::evaluate(&question(&["B"], None), &selection(&["A"]), FALLBACK);
    assert_eq!(
        result,
        AnswerResult::Incorrect {
            explanation: FALLBACK.to_owned(),
            markers: vec![
                OptionMarker::WrongSelection,
                OptionMarker::CorrectAnswer,
                OptionMarker::Unmarked,
            ],
        }
    );
}

#[test]
fn incorrect_selection_uses_question_explanation() {
    let question = question(&["B"], Some("B is right"));
    let result = AnswerResult::evaluate(&question, &selection(&["C"]), FALLBACK);
    match result {
        AnswerResult::Incorrect { explanation, .. } => assert_eq!(explanation, "B is right"),
        _ => panic!("Expected an incorrect result"),
    }
}

#[test]
fn multiple_choice_needs_every_correct_answer() {
    let question = question(&["A", "C"], None);
    let partial = AnswerResult::evaluate(&question, &selection(&["A"]), FALLBACK);
    assert!(!partial.is_correct());
    let complete = AnswerResult::evaluate(&question, &selection(&["C", "A"]), FALLBACK);
    assert!(complete.is_correct());
}

#[test]
fn extra_selection_is_incorrect() {
    let question = question(&["A", "C"], None);
    let result = AnswerResult::evaluate(&question, &selection(&["A", "B", "C"]), FALLBACK);
    assert!(!result.is_correct());
}

#[test]
fn verdict_ignores_selection_order() {
    let question = question(&["A", "B"], None);
    let orders = [["A", "B"], ["B", "A"]];
    for order in orders.iter() {
        let selected: HashSet<String> = order.iter().map(|o| o.to_string()).collect();
        assert!(AnswerResult::evaluate(&question, &selected, FALLBACK).is_correct());
    }
}

use crate::game::quiz::definition::question::is_image;
use crate::game::quiz::phase::*;
use crate::game::quiz::session::Session;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionView {
    pub index: usize,
    pub text: String,
    pub is_image: bool,
    pub is_selected: bool,
    pub marker: OptionMarker,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuestionView {
    /// 1-based position in the session.
    pub position: usize,
    pub total: usize,
    pub title: Option<String>,
    pub text: String,
    pub image_url: Option<String>,
    pub is_multiple: bool,
    pub options: Vec<OptionView>,
}

/// Read-only snapshot of everything needed to draw the current phase.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ViewState {
    Answering(QuestionView),
    Revealed(QuestionView, AnswerResult),
    Summary(SummaryStats),
    Review(SummaryStats, Vec<ReviewEntry>),
}

impl ViewState {
    pub fn kind(&self) -> PhaseKind {
        match self {
            ViewState::Answering(_) => PhaseKind::Answering,
            ViewState::Revealed(_, _) => PhaseKind::Revealed,
            ViewState::Summary(_) => PhaseKind::Summary,
            ViewState::Review(_, _) => PhaseKind::Review,
        }
    }

    pub fn question(&self) -> Option<&QuestionView> {
        match self {
            ViewState::Answering(question) | ViewState::Revealed(question, _) => Some(question),
            _ => None,
        }
    }
}

fn question_view<F>(session: &Session, is_selected: F, markers: Option<&[OptionMarker]>) -> QuestionView
where
    F: Fn(&str) -> bool,
{
    let current = session.current();
    let question = &current.question;
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| OptionView {
            index,
            text: option.clone(),
            is_image: is_image(option),
            is_selected: is_selected(option),
            marker: markers
                .and_then(|m| m.get(index).copied())
                .unwrap_or(OptionMarker::Unmarked),
        })
        .collect();

    QuestionView {
        position: session.current_index() + 1,
        total: session.order().len(),
        title: question.title.clone(),
        text: question.text.clone(),
        image_url: question.image_url.clone(),
        is_multiple: current.is_multiple,
        options,
    }
}

pub fn summary_stats(session: &Session) -> SummaryStats {
    SummaryStats::new(
        session.correct_count(),
        session.order().len(),
        session.skipped_count(),
    )
}

pub fn build(session: &Session) -> ViewState {
    match session.phase() {
        Phase::Answering(state) => {
            ViewState::Answering(question_view(session, |o| state.is_selected(o), None))
        }
        Phase::Revealed(state) => {
            let markers = match &state.result {
                AnswerResult::Incorrect { markers, .. } => Some(markers.as_slice()),
                _ => None,
            };
            let question = question_view(session, |o| state.selections.contains(o), markers);
            ViewState::Revealed(question, state.result.clone())
        }
        Phase::Summary => ViewState::Summary(summary_stats(session)),
        Phase::Review => ViewState::Review(summary_stats(session), project(session.order())),
    }
}

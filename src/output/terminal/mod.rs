use anyhow::{Context, Result};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{stdout, Stdout, Write};

use crate::commands::option_key;
use crate::game::quiz::phase::{AnswerResult, OptionMarker, ReviewEntry, SummaryStats};
use crate::game::quiz::view::{OptionView, QuestionView, ViewState};
use crate::output::{Message, QuizOutput};


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    pub text: String,
    pub color: Option<Color>,
}

impl Line {
    fn plain<S: Into<String>>(text: S) -> Self {
        Line {
            text: text.into(),
            color: None,
        }
    }

    fn colored<S: Into<String>>(text: S, color: Color) -> Self {
        Line {
            text: text.into(),
            color: Some(color),
        }
    }

    fn blank() -> Self {
        Line::plain("")
    }
}

pub fn interpret_message(message: &Message) -> String {
    match message {
        Message::QuizRules(total) => format!(
            "{} questions ahead. Press 1-9 or 0 to pick an option, Space or Enter to submit and continue, q to quit.",
            total
        ),
        Message::SelectionRequired => "Please choose an answer.".into(),
    }
}

fn describe_option(option: &OptionView, is_multiple: bool) -> Line {
    let key = option_key(option.index).unwrap_or(' ');
    let check = match (is_multiple, option.is_selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "(*)",
        (false, false) => "( )",
    };
    let text = if option.is_image {
        format!("{} {} [image] {}", key, check, option.text)
    } else {
        format!("{} {} {}", key, check, option.text)
    };
    match option.marker {
        OptionMarker::CorrectAnswer => Line::colored(text, Color::Green),
        OptionMarker::WrongSelection => Line::colored(text, Color::Red),
        OptionMarker::Unmarked => Line::plain(text),
    }
}

fn describe_question(question: &QuestionView, lines: &mut Vec<Line>) {
    if let Some(title) = &question.title {
        lines.push(Line::colored(title.as_str(), Color::Cyan));
    }
    lines.push(Line::plain(question.text.as_str()));
    if let Some(image_url) = &question.image_url {
        lines.push(Line::colored(format!("[image] {}", image_url), Color::DarkGrey));
    }
    if question.is_multiple {
        lines.push(Line::colored("Select all that apply.", Color::DarkGrey));
    }
    lines.push(Line::blank());
    for option in &question.options {
        lines.push(describe_option(option, question.is_multiple));
    }
    lines.push(Line::blank());
}

fn describe_result(result: &AnswerResult, lines: &mut Vec<Line>) {
    match result {
        AnswerResult::Correct => lines.push(Line::colored("Correct!", Color::Green)),
        AnswerResult::Skipped => lines.push(Line::colored("Skipped.", Color::Yellow)),
        AnswerResult::Incorrect { explanation, .. } => {
            lines.push(Line::colored("Wrong!", Color::Red));
            lines.push(Line::plain(explanation.as_str()));
        }
    }
}

fn describe_summary(stats: &SummaryStats, lines: &mut Vec<Line>) {
    lines.push(Line::colored("Quiz complete!", Color::Cyan));
    lines.push(Line::plain(format!(
        "You answered {} of {} questions correctly ({}%).",
        stats.correct_count, stats.total, stats.percent
    )));
    if stats.skipped_count > 0 {
        lines.push(Line::plain(format!("Skipped: {}", stats.skipped_count)));
    }
}

fn describe_review(entries: &[ReviewEntry], lines: &mut Vec<Line>) {
    for (index, entry) in entries.iter().enumerate() {
        lines.push(Line::blank());
        lines.push(Line::plain(format!("{}. {}", index + 1, entry.text)));
        for option in &entry.options {
            let label = if option.is_image {
                format!("[image] {}", option.text)
            } else {
                option.text.clone()
            };
            if option.is_correct {
                lines.push(Line::colored(format!("   + {}", label), Color::Green));
            } else {
                lines.push(Line::plain(format!("   - {}", label)));
            }
        }
        if let Some(explanation) = &entry.explanation {
            lines.push(Line::colored(format!("   {}", explanation), Color::DarkGrey));
        }
    }
}

/// Lines drawn for a view, top to bottom.
pub fn describe(view: &ViewState) -> Vec<Line> {
    let mut lines = Vec::new();
    match view {
        ViewState::Answering(question) => {
            describe_question(question, &mut lines);
            lines.push(Line::plain(format!("{} / {}", question.position, question.total)));
            lines.push(Line::colored("Space/Enter: Submit", Color::DarkGrey));
        }
        ViewState::Revealed(question, result) => {
            describe_question(question, &mut lines);
            describe_result(result, &mut lines);
            lines.push(Line::plain(format!("{} / {}", question.position, question.total)));
            lines.push(Line::colored("Space/Enter: Continue", Color::DarkGrey));
        }
        ViewState::Summary(stats) => {
            describe_summary(stats, &mut lines);
            lines.push(Line::blank());
            lines.push(Line::colored(
                "Enter: play again | r: review answers | q: quit",
                Color::DarkGrey,
            ));
        }
        ViewState::Review(stats, entries) => {
            describe_summary(stats, &mut lines);
            describe_review(entries, &mut lines);
            lines.push(Line::blank());
            lines.push(Line::colored(
                "r: back to summary | n: play again | q: quit",
                Color::DarkGrey,
            ));
        }
    }
    lines
}

/// Full-screen terminal surface. Raw mode lasts as long as the value lives.
pub struct TerminalOutput {
    stdout: Stdout,
}

impl TerminalOutput {
    pub fn new() -> Result<Self> {
        let mut stdout = stdout();
        terminal::enable_raw_mode().context("Could not enable raw terminal mode")?;
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(TerminalOutput { stdout })
    }

    fn write_line(&mut self, line: &Line) -> Result<()> {
        match line.color {
            Some(color) => queue!(
                self.stdout,
                SetForegroundColor(color),
                Print(&line.text),
                ResetColor,
                Print("\r\n")
            )?,
            None => queue!(self.stdout, Print(&line.text), Print("\r\n"))?,
        }
        Ok(())
    }
}

impl QuizOutput for TerminalOutput {
    fn render(&mut self, view: &ViewState) -> Result<()> {
        queue!(self.stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        for line in describe(view) {
            self.write_line(&line)?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn say(&mut self, message: &Message) -> Result<()> {
        let line = match message {
            Message::SelectionRequired => Line::colored(interpret_message(message), Color::Yellow),
            _ => Line::plain(interpret_message(message)),
        };
        self.write_line(&line)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalOutput {
    fn drop(&mut self) {
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
    }
}

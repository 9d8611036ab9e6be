use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Key under which two questions are considered duplicates of each other.
pub fn normalize_key(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").to_lowercase()
}

fn string_field(record: &Value, field: &str) -> Option<String> {
    let value = record.get(field)?.as_str()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

fn string_entries(record: &Value, field: &str) -> Vec<String> {
    match record.get(field) {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

fn match_option(options: &[String], candidate: &str) -> Option<String> {
    if let Some(option) = options.iter().find(|o| o.as_str() == candidate) {
        return Some(option.clone());
    }
    let candidate = candidate.to_lowercase();
    options
        .iter()
        .find(|o| o.to_lowercase() == candidate)
        .cloned()
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    pub correct_answers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Question {
    /// Validates and cleans one untrusted record. Returns `None` when the
    /// record has no usable question text, options or correct answers.
    pub fn from_record(record: &Value) -> Option<Question> {
        let text = string_field(record, "question")?;

        let options = string_entries(record, "options");
        if options.is_empty() {
            return None;
        }

        let correct_answers: Vec<String> = string_entries(record, "correct_answers")
            .iter()
            .filter_map(|candidate| match_option(&options, candidate))
            .unique()
            .collect();
        if correct_answers.is_empty() {
            return None;
        }

        Some(Question {
            text,
            options,
            correct_answers,
            explanation: string_field(record, "explanation"),
            image_url: string_field(record, "image_url"),
            title: string_field(record, "title"),
        })
    }

    pub fn key(&self) -> String {
        normalize_key(&self.text)
    }

    pub fn is_multiple(&self) -> bool {
        self.correct_answers.len() > 1
    }

    pub fn is_correct_answer(&self, option: &str) -> bool {
        self.correct_answers.iter().any(|a| a == option)
    }

    /// No partial credit: the selection must be exactly the set of correct answers.
    pub fn is_selection_correct(&self, selected: &HashSet<String>) -> bool {
        selected.len() == self.correct_answers.len()
            && selected.iter().all(|s| self.is_correct_answer(s))
    }
}

pub fn is_image(option: &str) -> bool {
    option.ends_with(".png")
        || option.ends_with(".jpg")
        || option.ends_with(".jpeg")
        || option.starts_with("http")
}

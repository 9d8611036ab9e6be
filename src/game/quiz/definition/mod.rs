use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info};
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs::File;
use std::path::Path;

use crate::game::quiz::QuizError;

pub mod question;

pub use question::Question;


const EMBEDDED_QUESTIONS: &str = include_str!("../../../../data/questions.json");
const CSV_LIST_SEPARATOR: char = '|';

/// Drops malformed records and duplicate questions, keeping the first
/// occurrence of each question in input order.
pub fn sanitize(records: &[Value]) -> Vec<Question> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let question = Question::from_record(record);
            if question.is_none() {
                debug!("Dropping malformed question record #{}", index + 1);
            }
            question
        })
        .unique_by(|question| question.key())
        .collect()
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    question: String,
    options: String,
    correct_answers: String,
    #[serde(default)]
    explanation: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl From<CsvRecord> for Value {
    fn from(record: CsvRecord) -> Self {
        let split = |list: &str| -> Vec<String> {
            list.split(CSV_LIST_SEPARATOR).map(str::to_owned).collect()
        };
        json!({
            "question": record.question,
            "options": split(&record.options),
            "correct_answers": split(&record.correct_answers),
            "explanation": record.explanation,
            "image_url": record.image_url,
            "title": record.title,
        })
    }
}

#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn embedded() -> Result<QuizDefinition, QuizError> {
        let value: Value = serde_json::from_str(EMBEDDED_QUESTIONS)
            .map_err(|_| QuizError::FatalInput("Invalid embedded JSON.".to_owned()))?;
        QuizDefinition::from_value(&value)
    }

    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let is_csv = source
            .extension()
            .map_or(false, |extension| extension.eq_ignore_ascii_case("csv"));

        let definition = if is_csv {
            let file = File::open(source)
                .with_context(|| format!("Could not open {}", source.display()))?;
            QuizDefinition::from_csv_reader(file)
                .with_context(|| format!("Could not load questions from {}", source.display()))?
        } else {
            let content = std::fs::read_to_string(source)
                .with_context(|| format!("Could not read {}", source.display()))?;
            QuizDefinition::from_json_str(&content)
                .with_context(|| format!("Could not load questions from {}", source.display()))?
        };

        info!(
            "Loaded {} questions from {}",
            definition.questions.len(),
            source.display()
        );
        Ok(definition)
    }

    pub fn from_json_str(content: &str) -> Result<QuizDefinition, QuizError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| QuizError::FatalInput(format!("Invalid JSON: {}", e)))?;
        QuizDefinition::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<QuizDefinition, QuizError> {
        let records = value.as_array().ok_or_else(|| {
            QuizError::FatalInput("Invalid JSON: expected an array of questions.".to_owned())
        })?;
        let questions = sanitize(records);
        debug!(
            "Sanitized {} records into {} questions",
            records.len(),
            questions.len()
        );
        Ok(QuizDefinition { questions })
    }

    /// Rows that cannot be read as a question record are dropped like any other
    /// malformed record.
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<QuizDefinition> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let mut records = Vec::new();
        for (index, record) in csv_reader.deserialize::<CsvRecord>().enumerate() {
            match record {
                Ok(record) => records.push(record.into()),
                Err(e) => debug!("Dropping unreadable CSV row #{}: {}", index + 1, e),
            }
        }
        Ok(QuizDefinition {
            questions: sanitize(&records),
        })
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

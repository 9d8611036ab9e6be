use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::game::quiz::view::ViewState;
use crate::output::{Message, QuizOutput};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    View(ViewState),
    Text(Message),
}

#[derive(Clone, Default)]
pub struct MockOutput {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flush(&mut self) -> Vec<Entry> {
        std::mem::take(&mut *self.entries.write())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries.read().iter().any(|entry| match entry {
            Entry::Text(m) => m == message,
            _ => false,
        })
    }

    pub fn last_view(&self) -> Option<ViewState> {
        self.entries
            .read()
            .iter()
            .rev()
            .find_map(|entry| match entry {
                Entry::View(view) => Some(view.clone()),
                _ => None,
            })
    }

    pub fn render_count(&self) -> usize {
        self.entries
            .read()
            .iter()
            .filter(|entry| matches!(entry, Entry::View(_)))
            .count()
    }
}

impl QuizOutput for MockOutput {
    fn render(&mut self, view: &ViewState) -> Result<()> {
        self.entries.write().push(Entry::View(view.clone()));
        Ok(())
    }

    fn say(&mut self, message: &Message) -> Result<()> {
        self.entries.write().push(Entry::Text(message.clone()));
        Ok(())
    }
}

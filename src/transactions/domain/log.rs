use tracing::debug;
use crate::transactions::domain::model::TransactionEntry;

// TransactionLog is a LIFO stack of lending actions; the top is the end of the vector.
#[derive(Debug, Default)]
pub struct TransactionLog {
    entries: Vec<TransactionEntry>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: TransactionEntry) {
        debug!(book_id = entry.book_id, action = %entry.action, "transaction recorded");
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<TransactionEntry> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&TransactionEntry> {
        self.entries.last()
    }

    // Most recent first.
    pub fn view_all(&self) -> impl Iterator<Item = &TransactionEntry> + '_ {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::library::TransactionAction;
use crate::utils::date::serializer;

// TransactionEntry records one successful issue or return. The book id is not checked against
// the catalog when the entry is pushed, so the book may be gone by the time it is undone.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub transaction_id: String,
    pub book_id: i64,
    pub action: TransactionAction,
    #[serde(with = "serializer")]
    pub recorded_at: NaiveDateTime,
}

impl TransactionEntry {
    pub fn new(book_id: i64, action: TransactionAction) -> Self {
        Self {
            transaction_id: Uuid::new_v4().to_string(),
            book_id,
            action,
            recorded_at: Utc::now().naive_utc(),
        }
    }

    pub fn issue(book_id: i64) -> Self {
        Self::new(book_id, TransactionAction::Issue)
    }

    pub fn returned(book_id: i64) -> Self {
        Self::new(book_id, TransactionAction::Return)
    }
}

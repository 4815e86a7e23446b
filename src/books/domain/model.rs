use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookRecord abstracts one physical book in the catalog. The id is assigned by the caller
// and is expected, though not required, to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub(crate) book_status: BookStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookRecord {
    pub fn new(book_id: i64, title: &str, author: &str) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self) -> BookStatus {
        self.book_status
    }

    pub fn is_available(&self) -> bool {
        self.book_status == BookStatus::Available
    }

    // Only the lending service moves a record between states.
    pub(crate) fn set_status(&mut self, status: BookStatus) {
        self.book_status = status;
        self.updated_at = Utc::now().naive_utc();
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookRecord;
    use crate::core::library::BookStatus;

    #[test]
    fn test_should_build_books() {
        let book = BookRecord::new(1, "Dune", "Herbert");
        assert_eq!(1, book.book_id);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert_eq!(BookStatus::Available, book.status());
        assert!(book.is_available());
        assert_eq!(book.created_at, book.updated_at);
    }

    #[test]
    fn test_should_set_status() {
        let mut book = BookRecord::new(1, "Dune", "Herbert");
        book.set_status(BookStatus::Issued);
        assert_eq!(BookStatus::Issued, book.status());
        assert!(!book.is_available());
        assert!(book.updated_at >= book.created_at);
    }

    #[test]
    fn test_should_serialize_book() {
        let book = BookRecord::new(4, "Emma", "Austen");
        let json = serde_json::to_value(&book).expect("should serialize");
        assert_eq!(4, json["book_id"]);
        assert_eq!("Issued", serde_json::to_value(BookStatus::Issued).expect("should serialize"));
        assert_eq!("Available", json["book_status"]);
    }
}

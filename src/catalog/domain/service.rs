use tracing::{debug, info, warn};
use crate::books::domain::model::BookRecord;
use crate::core::library::{LibraryError, LibraryResult};

// Catalog keeps book records in insertion order. Every lookup is a linear scan and the first
// record with a matching id wins, so later duplicates stay hidden until the earlier one is removed.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<BookRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
        }
    }

    pub fn insert(&mut self, book_id: i64, title: &str, author: &str) {
        self.books.push(BookRecord::new(book_id, title, author));
        info!(book_id, title, "book added to catalog");
    }

    pub fn delete(&mut self, book_id: i64) -> LibraryResult<String> {
        match self.position(book_id) {
            Some(ndx) => {
                let removed = self.books.remove(ndx);
                info!(book_id, title = removed.title.as_str(), "book removed from catalog");
                Ok(removed.title)
            }
            None => {
                warn!(book_id, "cannot remove missing book");
                Err(LibraryError::not_found(format!("book {} not found", book_id).as_str()))
            }
        }
    }

    pub fn search(&self, book_id: i64) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.book_id == book_id)
    }

    pub fn search_mut(&mut self, book_id: i64) -> Option<&mut BookRecord> {
        let found = self.books.iter_mut().find(|b| b.book_id == book_id);
        debug!(book_id, found = found.is_some(), "catalog lookup");
        found
    }

    pub fn enumerate(&self) -> impl Iterator<Item = &BookRecord> + '_ {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, book_id: i64) -> Option<usize> {
        self.books.iter().position(|b| b.book_id == book_id)
    }
}

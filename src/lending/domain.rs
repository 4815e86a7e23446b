use serde::Serialize;
use crate::catalog::domain::service::Catalog;
use crate::core::library::BookStatus;
use crate::transactions::domain::log::TransactionLog;

pub mod service;

// Invalid transitions are reported through these outcomes rather than as errors.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum IssueOutcome {
    Issued,
    AlreadyIssued,
    NotFound,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum ReturnOutcome {
    Returned,
    AlreadyAvailable,
    NotFound,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum UndoOutcome {
    Undone(BookStatus),
    NothingToUndo,
    // The popped entry pointed at a deleted book and has been dropped.
    ReferencedBookMissing,
}

pub trait LendingService {
    fn issue(&mut self, book_id: i64) -> IssueOutcome;
    fn return_book(&mut self, book_id: i64) -> ReturnOutcome;
    fn undo(&mut self) -> UndoOutcome;
    fn catalog(&self) -> &Catalog;
    fn catalog_mut(&mut self) -> &mut Catalog;
    fn transactions(&self) -> &TransactionLog;
}

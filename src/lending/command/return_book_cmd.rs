use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::{LendingService, ReturnOutcome};

pub struct ReturnBookCommand<'a> {
    lending_service: &'a mut dyn LendingService,
}

impl<'a> ReturnBookCommand<'a> {
    pub fn new(lending_service: &'a mut dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    book_id: i64,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book_id: i64,
    pub outcome: ReturnOutcome,
    pub title: Option<String>,
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand<'_> {
    fn execute(&mut self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let outcome = self.lending_service.return_book(req.book_id);
        let title = self.lending_service.catalog().search(req.book_id).map(|b| b.title.to_string());
        Ok(ReturnBookCommandResponse { book_id: req.book_id, outcome, title })
    }
}

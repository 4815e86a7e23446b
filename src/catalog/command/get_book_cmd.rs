use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookRecord;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryError;
use crate::lending::domain::LendingService;

pub struct GetBookCommand<'a> {
    lending_service: &'a dyn LendingService,
}

impl<'a> GetBookCommand<'a> {
    pub fn new(lending_service: &'a dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: i64,
}

impl GetBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookRecord,
}

impl GetBookCommandResponse {
    pub fn new(book: BookRecord) -> Self {
        Self {
            book,
        }
    }
}

impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand<'_> {
    fn execute(&mut self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.lending_service.catalog().search(req.book_id)
            .cloned()
            .map(GetBookCommandResponse::new)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", req.book_id).as_str()).into())
    }
}

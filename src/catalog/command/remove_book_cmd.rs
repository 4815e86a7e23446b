use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;

pub struct RemoveBookCommand<'a> {
    lending_service: &'a mut dyn LendingService,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(lending_service: &'a mut dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: i64,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub title: String,
}

impl RemoveBookCommandResponse {
    pub fn new(title: String) -> Self {
        Self {
            title,
        }
    }
}

impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'_> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.lending_service.catalog_mut().delete(req.book_id)
            .map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}

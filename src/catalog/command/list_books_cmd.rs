use serde::Serialize;
use crate::books::domain::model::BookRecord;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;

pub struct ListBooksCommand<'a> {
    lending_service: &'a dyn LendingService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(lending_service: &'a dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookRecord>,
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'_> {
    fn execute(&mut self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = self.lending_service.catalog().enumerate().cloned().collect();
        Ok(ListBooksCommandResponse { books })
    }
}

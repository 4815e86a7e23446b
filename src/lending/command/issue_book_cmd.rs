use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::lending::domain::{IssueOutcome, LendingService};

pub struct IssueBookCommand<'a> {
    lending_service: &'a mut dyn LendingService,
}

impl<'a> IssueBookCommand<'a> {
    pub fn new(lending_service: &'a mut dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueBookCommandRequest {
    book_id: i64,
}

impl IssueBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueBookCommandResponse {
    pub book_id: i64,
    pub outcome: IssueOutcome,
    pub title: Option<String>,
}

impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand<'_> {
    fn execute(&mut self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        let outcome = self.lending_service.issue(req.book_id);
        let title = self.lending_service.catalog().search(req.book_id).map(|b| b.title.to_string());
        Ok(IssueBookCommandResponse { book_id: req.book_id, outcome, title })
    }
}

use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};
use crate::lending::domain::LendingService;

pub struct AddBookCommand<'a> {
    lending_service: &'a mut dyn LendingService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(lending_service: &'a mut dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub book_id: i64,
    pub title: String,
    pub author: String,
}

impl AddBookCommandRequest {
    pub fn new(book_id: i64, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn validate(&self) -> LibraryResult<()> {
        if self.title.trim().is_empty() {
            return Err(LibraryError::validation("book title must not be empty", Some("400".to_string())));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book_id: i64,
    pub title: String,
}

impl AddBookCommandResponse {
    pub fn new(book_id: i64, title: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'_> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        req.validate()?;
        self.lending_service.catalog_mut().insert(req.book_id, req.title.as_str(), req.author.as_str());
        Ok(AddBookCommandResponse::new(req.book_id, req.title.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::lending::domain::LendingService;
    use crate::lending::domain::service::LendingServiceImpl;

    #[test]
    fn test_should_run_add_book() {
        let mut svc = LendingServiceImpl::new(&Configuration::new("test"));
        let res = AddBookCommand::new(&mut svc)
            .execute(AddBookCommandRequest::new(1, "Dune", "Herbert"))
            .expect("should add book");
        assert_eq!(1, res.book_id);
        assert_eq!("Dune", res.title.as_str());
        assert!(svc.catalog().search(1).is_some());
    }

    #[test]
    fn test_should_reject_blank_title() {
        let mut svc = LendingServiceImpl::new(&Configuration::new("test"));
        let res = AddBookCommand::new(&mut svc).execute(AddBookCommandRequest::new(1, "  ", "Herbert"));
        assert!(matches!(res, Err(CommandError::Validation { .. })));
        assert!(svc.catalog().is_empty());
    }
}

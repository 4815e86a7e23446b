use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::{LendingService, UndoOutcome};

pub struct UndoTransactionCommand<'a> {
    lending_service: &'a mut dyn LendingService,
}

impl<'a> UndoTransactionCommand<'a> {
    pub fn new(lending_service: &'a mut dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct UndoTransactionCommandRequest {}

#[derive(Debug, Serialize)]
pub struct UndoTransactionCommandResponse {
    pub outcome: UndoOutcome,
    pub book_id: Option<i64>,
    pub title: Option<String>,
}

impl Command<UndoTransactionCommandRequest, UndoTransactionCommandResponse> for UndoTransactionCommand<'_> {
    fn execute(&mut self, _req: UndoTransactionCommandRequest) -> Result<UndoTransactionCommandResponse, CommandError> {
        // the entry is gone after undo, so remember which book it pointed at
        let book_id = self.lending_service.transactions().peek().map(|t| t.book_id);
        let outcome = self.lending_service.undo();
        let title = book_id
            .and_then(|id| self.lending_service.catalog().search(id))
            .map(|b| b.title.to_string());
        Ok(UndoTransactionCommandResponse { outcome, book_id, title })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::BookStatus;
    use crate::lending::command::undo_transaction_cmd::{UndoTransactionCommand, UndoTransactionCommandRequest};
    use crate::lending::domain::{LendingService, UndoOutcome};
    use crate::lending::domain::service::LendingServiceImpl;

    #[test]
    fn test_should_run_undo() {
        let mut svc = LendingServiceImpl::new(&Configuration::new("test"));
        svc.catalog_mut().insert(1, "Dune", "Herbert");
        svc.issue(1);

        let mut cmd = UndoTransactionCommand::new(&mut svc);
        let res = cmd.execute(UndoTransactionCommandRequest::default()).expect("should undo");
        assert_eq!(UndoOutcome::Undone(BookStatus::Available), res.outcome);
        assert_eq!(Some(1), res.book_id);
        assert_eq!(Some("Dune".to_string()), res.title);

        let res = cmd.execute(UndoTransactionCommandRequest::default()).expect("should report empty");
        assert_eq!(UndoOutcome::NothingToUndo, res.outcome);
        assert_eq!(None, res.book_id);
    }

    #[test]
    fn test_should_surface_missing_book() {
        let mut svc = LendingServiceImpl::new(&Configuration::new("test"));
        svc.catalog_mut().insert(2, "Foo", "Bar");
        svc.issue(2);
        svc.catalog_mut().delete(2).expect("should remove book");

        let res = UndoTransactionCommand::new(&mut svc).execute(UndoTransactionCommandRequest::default())
            .expect("should report missing book");
        assert_eq!(UndoOutcome::ReferencedBookMissing, res.outcome);
        assert_eq!(Some(2), res.book_id);
        assert_eq!(None, res.title);
    }
}

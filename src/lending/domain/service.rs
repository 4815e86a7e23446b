use tracing::{info, warn};
use crate::catalog::domain::service::Catalog;
use crate::core::domain::Configuration;
use crate::core::library::BookStatus;
use crate::lending::domain::{IssueOutcome, LendingService, ReturnOutcome, UndoOutcome};
use crate::transactions::domain::log::TransactionLog;
use crate::transactions::domain::model::TransactionEntry;

pub struct LendingServiceImpl {
    branch_id: String,
    catalog: Catalog,
    transactions: TransactionLog,
}

impl LendingServiceImpl {
    pub fn new(config: &Configuration) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            catalog: Catalog::new(),
            transactions: TransactionLog::new(),
        }
    }
}

impl LendingService for LendingServiceImpl {
    fn issue(&mut self, book_id: i64) -> IssueOutcome {
        let Some(book) = self.catalog.search_mut(book_id) else {
            return IssueOutcome::NotFound;
        };
        if book.status() == BookStatus::Issued {
            return IssueOutcome::AlreadyIssued;
        }
        book.set_status(BookStatus::Issued);
        self.transactions.push(TransactionEntry::issue(book_id));
        info!(branch = self.branch_id.as_str(), book_id, title = book.title.as_str(), "book issued");
        IssueOutcome::Issued
    }

    fn return_book(&mut self, book_id: i64) -> ReturnOutcome {
        let Some(book) = self.catalog.search_mut(book_id) else {
            return ReturnOutcome::NotFound;
        };
        if book.status() == BookStatus::Available {
            return ReturnOutcome::AlreadyAvailable;
        }
        book.set_status(BookStatus::Available);
        self.transactions.push(TransactionEntry::returned(book_id));
        info!(branch = self.branch_id.as_str(), book_id, title = book.title.as_str(), "book returned");
        ReturnOutcome::Returned
    }

    fn undo(&mut self) -> UndoOutcome {
        let Some(last) = self.transactions.pop() else {
            return UndoOutcome::NothingToUndo;
        };
        match self.catalog.search_mut(last.book_id) {
            Some(book) => {
                let status = last.action.reverted_status();
                book.set_status(status);
                info!(branch = self.branch_id.as_str(), book_id = last.book_id, action = %last.action,
                    status = %status, "transaction undone");
                UndoOutcome::Undone(status)
            }
            None => {
                warn!(branch = self.branch_id.as_str(), book_id = last.book_id, action = %last.action,
                    transaction_id = last.transaction_id.as_str(), "undo discarded, book no longer in catalog");
                UndoOutcome::ReferencedBookMissing
            }
        }
    }

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    fn transactions(&self) -> &TransactionLog {
        &self.transactions
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::{BookStatus, TransactionAction};
    use crate::lending::domain::{IssueOutcome, LendingService, ReturnOutcome, UndoOutcome};
    use crate::lending::domain::service::LendingServiceImpl;

    fn build_service() -> LendingServiceImpl {
        LendingServiceImpl::new(&Configuration::new("test"))
    }

    fn status_of(svc: &LendingServiceImpl, book_id: i64) -> BookStatus {
        svc.catalog().search(book_id).expect("should return book").status()
    }

    #[test]
    fn test_should_issue_book() {
        let mut svc = build_service();
        svc.catalog_mut().insert(1, "Dune", "Herbert");

        assert_eq!(IssueOutcome::Issued, svc.issue(1));
        assert_eq!(BookStatus::Issued, status_of(&svc, 1));
        assert_eq!(1, svc.transactions().len());
        let top = svc.transactions().peek().expect("should have entry");
        assert_eq!(1, top.book_id);
        assert_eq!(TransactionAction::Issue, top.action);
    }

    #[test]
    fn test_should_not_issue_twice() {
        let mut svc = build_service();
        svc.catalog_mut().insert(1, "Dune", "Herbert");

        assert_eq!(IssueOutcome::Issued, svc.issue(1));
        assert_eq!(IssueOutcome::AlreadyIssued, svc.issue(1));
        assert_eq!(1, svc.transactions().len());
    }

    #[test]
    fn test_should_report_missing_book() {
        let mut svc = build_service();
        assert_eq!(IssueOutcome::NotFound, svc.issue(9));
        assert_eq!(ReturnOutcome::NotFound, svc.return_book(9));
        assert!(svc.transactions().is_empty());
    }

    #[test]
    fn test_should_return_book() {
        let mut svc = build_service();
        svc.catalog_mut().insert(1, "Dune", "Herbert");

        assert_eq!(ReturnOutcome::AlreadyAvailable, svc.return_book(1));
        assert!(svc.transactions().is_empty());

        svc.issue(1);
        assert_eq!(ReturnOutcome::Returned, svc.return_book(1));
        assert_eq!(BookStatus::Available, status_of(&svc, 1));
        let top = svc.transactions().peek().expect("should have entry");
        assert_eq!(TransactionAction::Return, top.action);
        assert_eq!(2, svc.transactions().len());
    }

    #[test]
    fn test_should_undo_issue() {
        let mut svc = build_service();
        svc.catalog_mut().insert(1, "Dune", "Herbert");
        let before = svc.transactions().len();

        svc.issue(1);
        assert_eq!(UndoOutcome::Undone(BookStatus::Available), svc.undo());
        assert_eq!(BookStatus::Available, status_of(&svc, 1));
        assert_eq!(before, svc.transactions().len());
    }

    #[test]
    fn test_should_undo_return() {
        let mut svc = build_service();
        svc.catalog_mut().insert(1, "Dune", "Herbert");
        svc.issue(1);
        svc.return_book(1);

        assert_eq!(UndoOutcome::Undone(BookStatus::Issued), svc.undo());
        assert_eq!(BookStatus::Issued, status_of(&svc, 1));
    }

    #[test]
    fn test_should_report_nothing_to_undo() {
        let mut svc = build_service();
        svc.catalog_mut().insert(1, "Dune", "Herbert");

        assert_eq!(UndoOutcome::NothingToUndo, svc.undo());
        assert_eq!(BookStatus::Available, status_of(&svc, 1));
        assert!(svc.transactions().is_empty());
    }

    #[test]
    fn test_should_undo_only_latest_issue() {
        let mut svc = build_service();
        svc.catalog_mut().insert(1, "Dune", "Herbert");
        svc.issue(1);
        svc.return_book(1);
        svc.issue(1);

        assert_eq!(UndoOutcome::Undone(BookStatus::Available), svc.undo());
        assert_eq!(BookStatus::Available, status_of(&svc, 1));
        assert_eq!(2, svc.transactions().len());
    }

    #[test]
    fn test_should_discard_undo_for_deleted_book() {
        let mut svc = build_service();
        svc.catalog_mut().insert(2, "Foo", "Bar");
        svc.issue(2);
        svc.catalog_mut().delete(2).expect("should remove book");

        assert_eq!(UndoOutcome::ReferencedBookMissing, svc.undo());
        assert_eq!(UndoOutcome::NothingToUndo, svc.undo());
    }

    #[test]
    fn test_should_reach_reinserted_book_on_undo() {
        let mut svc = build_service();
        svc.catalog_mut().insert(3, "Old", "a");
        svc.issue(3);
        svc.catalog_mut().delete(3).expect("should remove book");
        svc.catalog_mut().insert(3, "New", "b");

        // entries are keyed by id only, so the replacement record is the one reverted
        assert_eq!(UndoOutcome::Undone(BookStatus::Available), svc.undo());
        assert_eq!("New", svc.catalog().search(3).expect("should return book").title.as_str());
    }
}

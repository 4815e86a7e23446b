use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;
use crate::transactions::domain::model::TransactionEntry;

pub struct ListTransactionsCommand<'a> {
    lending_service: &'a dyn LendingService,
}

impl<'a> ListTransactionsCommand<'a> {
    pub fn new(lending_service: &'a dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListTransactionsCommandRequest {}

// Most recent transaction first.
#[derive(Debug, Serialize)]
pub struct ListTransactionsCommandResponse {
    pub transactions: Vec<TransactionEntry>,
}

impl Command<ListTransactionsCommandRequest, ListTransactionsCommandResponse> for ListTransactionsCommand<'_> {
    fn execute(&mut self, _req: ListTransactionsCommandRequest) -> Result<ListTransactionsCommandResponse, CommandError> {
        let transactions = self.lending_service.transactions().view_all().cloned().collect();
        Ok(ListTransactionsCommandResponse { transactions })
    }
}

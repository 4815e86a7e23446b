pub mod issue_book_cmd;
pub mod list_transactions_cmd;
pub mod return_book_cmd;
pub mod undo_transaction_cmd;

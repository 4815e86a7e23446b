use std::io::{BufRead, Write};
use serde::Serialize;
use serde_json::json;
use tracing::debug;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::core::command::{Command, CommandError};
use crate::core::domain::OutputFormat;
use crate::core::library::LibraryResult;
use crate::lending::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::lending::command::list_transactions_cmd::{ListTransactionsCommand, ListTransactionsCommandRequest};
use crate::lending::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::lending::command::undo_transaction_cmd::{UndoTransactionCommand, UndoTransactionCommandRequest};
use crate::lending::domain::{IssueOutcome, LendingService, ReturnOutcome, UndoOutcome};

const MENU: &str = "
 LIBRARY MANAGEMENT SYSTEM
1. Search Book
2. Insert Book
3. Delete Book
4. Issue Book
5. Return Book
6. Undo Last Transaction
7. View Transactions
8. Display All Books
9. Exit";

const NO_BOOK: &str = "No Book found!";

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

// ConsoleController drives one interactive session: it reads menu choices from `input`,
// runs the matching command and renders the response to `out`. In JSON mode the menu and
// prompts are suppressed and every response is written as one JSON line.
pub struct ConsoleController<S: LendingService, R: BufRead, W: Write> {
    lending_service: S,
    format: OutputFormat,
    input: R,
    out: W,
}

impl<S: LendingService, R: BufRead, W: Write> ConsoleController<S, R, W> {
    pub fn new(lending_service: S, format: OutputFormat, input: R, out: W) -> Self {
        Self {
            lending_service,
            format,
            input,
            out,
        }
    }

    pub fn into_lending_service(self) -> S {
        self.lending_service
    }

    pub fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.print_text(MENU)?;
            let Some(choice) = self.prompt("\nEnter your choice: ")? else {
                break;
            };
            debug!(choice = choice.as_str(), "menu choice");
            let flow = match choice.as_str() {
                "1" => self.search_book()?,
                "2" => self.add_book()?,
                "3" => self.remove_book()?,
                "4" => self.issue_book()?,
                "5" => self.return_book()?,
                "6" => self.undo_transaction()?,
                "7" => self.view_transactions()?,
                "8" => self.display_books()?,
                "9" => Flow::Exit,
                _ => {
                    self.print_error_text("Invalid choice! Please enter again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        self.print_text("\nExiting Library System. Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    fn search_book(&mut self) -> LibraryResult<Flow> {
        let Some(book_id) = self.read_book_id("Enter Book ID to search: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(book_id) = book_id else { return Ok(Flow::Continue) };
        let res = GetBookCommand::new(&self.lending_service).execute(GetBookCommandRequest::new(book_id));
        self.render(res, |r| format!("\nGot a Book:\nID: {}\nTitle: {}\nAuthor: {}\nStatus: {}",
                                     r.book.book_id, r.book.title, r.book.author, r.book.status()))?;
        Ok(Flow::Continue)
    }

    fn add_book(&mut self) -> LibraryResult<Flow> {
        let Some(book_id) = self.read_book_id("Enter Book ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(book_id) = book_id else { return Ok(Flow::Continue) };
        let Some(title) = self.prompt("Enter Book Title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(author) = self.prompt("Enter Author Name: ")? else {
            return Ok(Flow::Exit);
        };
        let res = AddBookCommand::new(&mut self.lending_service)
            .execute(AddBookCommandRequest::new(book_id, title.as_str(), author.as_str()));
        self.render(res, |r| format!("\nBook '{}' is successfully added", r.title))?;
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> LibraryResult<Flow> {
        let Some(book_id) = self.read_book_id("Enter Book ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(book_id) = book_id else { return Ok(Flow::Continue) };
        let res = RemoveBookCommand::new(&mut self.lending_service).execute(RemoveBookCommandRequest::new(book_id));
        self.render(res, |r| format!("Book '{}' is successfully deleted!", r.title))?;
        Ok(Flow::Continue)
    }

    fn issue_book(&mut self) -> LibraryResult<Flow> {
        let Some(book_id) = self.read_book_id("Enter Book ID to issue: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(book_id) = book_id else { return Ok(Flow::Continue) };
        let res = IssueBookCommand::new(&mut self.lending_service).execute(IssueBookCommandRequest::new(book_id));
        self.render(res, |r| match r.outcome {
            IssueOutcome::Issued => format!("Book '{}' issued successfully!", r.title.as_deref().unwrap_or_default()),
            IssueOutcome::AlreadyIssued => "Book already issued!".to_string(),
            IssueOutcome::NotFound => NO_BOOK.to_string(),
        })?;
        Ok(Flow::Continue)
    }

    fn return_book(&mut self) -> LibraryResult<Flow> {
        let Some(book_id) = self.read_book_id("Enter Book ID to return: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(book_id) = book_id else { return Ok(Flow::Continue) };
        let res = ReturnBookCommand::new(&mut self.lending_service).execute(ReturnBookCommandRequest::new(book_id));
        self.render(res, |r| match r.outcome {
            ReturnOutcome::Returned => format!("Book '{}' is successfully returned!", r.title.as_deref().unwrap_or_default()),
            ReturnOutcome::AlreadyAvailable => "Book is already available!".to_string(),
            ReturnOutcome::NotFound => NO_BOOK.to_string(),
        })?;
        Ok(Flow::Continue)
    }

    fn undo_transaction(&mut self) -> LibraryResult<Flow> {
        let res = UndoTransactionCommand::new(&mut self.lending_service)
            .execute(UndoTransactionCommandRequest::default());
        self.render(res, |r| match r.outcome {
            UndoOutcome::Undone(status) => format!("Undo Successful: Book '{}' marked as {} again.",
                                                   r.title.as_deref().unwrap_or_default(), status),
            UndoOutcome::NothingToUndo => "\nNo transaction to undo!".to_string(),
            UndoOutcome::ReferencedBookMissing => format!(
                "Undo discarded: Book ID {} is no longer in the library.", r.book_id.unwrap_or_default()),
        })?;
        Ok(Flow::Continue)
    }

    fn view_transactions(&mut self) -> LibraryResult<Flow> {
        let res = ListTransactionsCommand::new(&self.lending_service)
            .execute(ListTransactionsCommandRequest::default());
        self.render(res, |r| {
            if r.transactions.is_empty() {
                return "\nNo transactions are found yet!".to_string();
            }
            let mut text = "\nLatest Transactions:".to_string();
            for t in &r.transactions {
                text.push_str(format!("\n{} Book ID: {}", t.action, t.book_id).as_str());
            }
            text
        })?;
        Ok(Flow::Continue)
    }

    fn display_books(&mut self) -> LibraryResult<Flow> {
        let res = ListBooksCommand::new(&self.lending_service).execute(ListBooksCommandRequest::default());
        self.render(res, |r| {
            if r.books.is_empty() {
                return "\nLibrary is Empty!".to_string();
            }
            let mut text = "\nCurrent Library Stock:\n------------------------------------".to_string();
            for b in &r.books {
                text.push_str(format!("\nID: {} | Title: {} | Author: {} | Status: {}",
                                      b.book_id, b.title, b.author, b.status()).as_str());
            }
            text
        })?;
        Ok(Flow::Continue)
    }

    // Outer None means input is exhausted; inner Err means the id was not a number and has
    // already been reported.
    fn read_book_id(&mut self, text: &str) -> LibraryResult<Option<Result<i64, ()>>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };
        match raw.parse::<i64>() {
            Ok(book_id) => Ok(Some(Ok(book_id))),
            Err(_) => {
                let message = format!("Invalid book id '{}'! Please enter a number.", raw);
                self.render_error(&CommandError::Validation { message, reason_code: Some("400".to_string()) })?;
                Ok(Some(Err(())))
            }
        }
    }

    fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        if self.format == OutputFormat::Text {
            write!(self.out, "{}", text)?;
            self.out.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn render<T, F>(&mut self, res: Result<T, CommandError>, text: F) -> LibraryResult<()>
    where
        T: Serialize,
        F: FnOnce(&T) -> String,
    {
        match res {
            Ok(response) => match self.format {
                OutputFormat::Text => self.print_text(text(&response).as_str()),
                OutputFormat::Json => {
                    let line = serde_json::to_string(&response)?;
                    writeln!(self.out, "{}", line)?;
                    Ok(())
                }
            },
            Err(err) => self.render_error(&err),
        }
    }

    fn render_error(&mut self, err: &CommandError) -> LibraryResult<()> {
        match self.format {
            OutputFormat::Text => match err {
                CommandError::NotFound { .. } => self.print_text(NO_BOOK),
                _ => self.print_text(err.message()),
            },
            OutputFormat::Json => {
                writeln!(self.out, "{}", json!({ "error": err.message() }))?;
                Ok(())
            }
        }
    }

    fn print_error_text(&mut self, text: &str) -> LibraryResult<()> {
        self.render_error(&CommandError::Validation { message: text.to_string(), reason_code: None })
    }

    fn print_text(&mut self, text: &str) -> LibraryResult<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }
}

//! Interactive numbered menu.
//!
//! The loop reads one option per line, prompts for the fields it needs and
//! prints the result. It works on any reader/writer pair so scripts and
//! tests can drive it without a terminal.

use biblio_core::{Book, Error, Library, Loan, Result, ReturnOutcome, User};
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "\
--- LIBRARY SYSTEM ---
1. Register book
2. Register user
3. List available books
4. List users
5. Check out book
6. Return book
7. Show loan history
8. Export loan history
9. Show overdue loans
0. Exit";

enum MenuAction {
    RegisterBook,
    RegisterUser,
    ListAvailable,
    ListUsers,
    Checkout,
    Return,
    History,
    Export,
    Overdue,
    Exit,
}

impl MenuAction {
    fn parse(input: &str) -> Option<Self> {
        let action = match input.trim() {
            "1" => MenuAction::RegisterBook,
            "2" => MenuAction::RegisterUser,
            "3" => MenuAction::ListAvailable,
            "4" => MenuAction::ListUsers,
            "5" => MenuAction::Checkout,
            "6" => MenuAction::Return,
            "7" => MenuAction::History,
            "8" => MenuAction::Export,
            "9" => MenuAction::Overdue,
            "0" => MenuAction::Exit,
            _ => return None,
        };
        Some(action)
    }
}

/// Drives a `Library` from line-oriented input
pub struct Menu<R, W> {
    library: Library,
    input: R,
    output: W,
    fixed_today: Option<NaiveDate>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(library: Library, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
            fixed_today: None,
        }
    }

    /// Use a fixed date instead of the local calendar date
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.fixed_today = today;
        self
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Run until the user picks exit or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", MENU)?;

            let Some(choice) = self.prompt("Option: ")? else {
                tracing::debug!("Input closed, leaving menu");
                writeln!(self.output)?;
                break;
            };

            let Some(action) = MenuAction::parse(&choice) else {
                writeln!(self.output, "Invalid option.")?;
                continue;
            };

            match self.dispatch(action) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_domain() => writeln!(self.output, "Error: {}", e)?,
                Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns `Ok(false)` when the loop should stop
    fn dispatch(&mut self, action: MenuAction) -> Result<bool> {
        match action {
            MenuAction::RegisterBook => {
                let title = self.field("Title: ")?;
                let author = self.field("Author: ")?;
                let code = self.field("Code: ")?;
                self.library.register_book(&title, &author, &code)?;
                writeln!(self.output, "Book registered.")?;
            }
            MenuAction::RegisterUser => {
                let name = self.field("User name: ")?;
                let id = self.field("User ID: ")?;
                self.library.register_user(&name, &id)?;
                writeln!(self.output, "User registered.")?;
            }
            MenuAction::ListAvailable => {
                let mut any = false;
                for book in self.library.catalog().list_available() {
                    writeln!(self.output, "{}", format_book(book))?;
                    any = true;
                }
                if !any {
                    writeln!(self.output, "No books available.")?;
                }
            }
            MenuAction::ListUsers => {
                if self.library.directory().is_empty() {
                    writeln!(self.output, "No users registered.")?;
                }
                for user in self.library.directory().list_all() {
                    writeln!(self.output, "{}", format_user(user))?;
                }
            }
            MenuAction::Checkout => {
                let user_id = self.field("User ID: ")?;
                let code = self.field("Book code: ")?;
                let today = self.today();
                let receipt = self.library.checkout(&user_id, &code, today)?;
                writeln!(self.output, "Loan registered. Due date: {}", receipt.due)?;
            }
            MenuAction::Return => {
                let user_id = self.field("User ID: ")?;
                let code = self.field("Book code: ")?;
                let today = self.today();
                match self.library.return_book(&user_id, &code, today)? {
                    ReturnOutcome::OnTime => {
                        writeln!(self.output, "Book returned on time. No fine.")?
                    }
                    ReturnOutcome::Late { days, fine } => writeln!(
                        self.output,
                        "Book returned {} day(s) late. Fine: ${}",
                        days, fine
                    )?,
                }
            }
            MenuAction::History => {
                if self.library.ledger().is_empty() {
                    writeln!(self.output, "No open loans.")?;
                }
                for loan in self.library.history() {
                    writeln!(self.output, "{}", format_loan(loan))?;
                }
            }
            MenuAction::Export => {
                let path = PathBuf::from(self.field("Export path: ")?);
                // A bad path is reported like any other refused operation
                match biblio_core::export_history_to(&path, self.library.history()) {
                    Ok(count) => {
                        writeln!(self.output, "Exported {} loan(s) to {}", count, path.display())?
                    }
                    Err(e) => {
                        tracing::warn!("Export to {:?} failed: {}", path, e);
                        writeln!(self.output, "Error: {}", e)?
                    }
                }
            }
            MenuAction::Overdue => {
                let overdue = self.library.overdue(self.today());
                if overdue.is_empty() {
                    writeln!(self.output, "No overdue loans.")?;
                }
                for entry in overdue {
                    writeln!(
                        self.output,
                        "{} | Late: {} day(s) | Fine so far: ${}",
                        format_loan(entry.loan),
                        entry.days_late,
                        entry.fine
                    )?;
                }
            }
            MenuAction::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// Print a prompt and read one line; `None` at end of input
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// A required field; end of input aborts the current option
    fn field(&mut self, label: &str) -> Result<String> {
        self.prompt(label)?.ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input ended mid-entry",
            ))
        })
    }
}

fn format_book(book: &Book) -> String {
    format!(
        "Code: {} | Title: {} | Author: {} | Available: {}",
        book.code,
        book.title,
        book.author,
        if book.available { "Yes" } else { "No" }
    )
}

fn format_user(user: &User) -> String {
    format!(
        "User: {} | ID: {} | Borrowed books: {}",
        user.name,
        user.id,
        user.borrowed_count()
    )
}

fn format_loan(loan: &Loan) -> String {
    format!(
        "User: {} | Book: {} | Start: {} | Due: {}",
        loan.user_id, loan.book_code, loan.start, loan.due
    )
}

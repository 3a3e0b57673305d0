//! Interactive menu shell
//!
//! stdin/stdout <-> application::CatalogService
//!
//! 6 actions: add, remove, list, search, status, exit

use std::fmt::Display;
use std::io::{BufRead, Write};

use console::Style;

use crate::application::error::AppError;
use crate::application::service::{CatalogService, Committed, Listing, LoadReport};
use crate::domain::model::book::Book;
use crate::domain::model::catalog::SearchQuery;
use crate::domain::repository::CatalogRepository;

// =============================================================================
// Styles
// =============================================================================

/// 出力の装飾。色の有無は呼び出し側が決める（テストや非TTYでは無効）。
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    colors: bool,
}

impl Styles {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// stdoutがTTYかどうか等、consoleの判定に従う。
    pub fn detect() -> Self {
        Self::new(console::colors_enabled())
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint<D: Display>(&self, style: Style, text: D) -> String {
        style.force_styling(self.colors).apply_to(text).to_string()
    }

    fn title<D: Display>(&self, text: D) -> String {
        self.paint(Style::new().bold(), text)
    }

    fn header<D: Display>(&self, text: D) -> String {
        self.paint(Style::new().cyan(), text)
    }

    fn success<D: Display>(&self, text: D) -> String {
        self.paint(Style::new().green(), text)
    }

    fn notice<D: Display>(&self, text: D) -> String {
        self.paint(Style::new().yellow(), text)
    }

    fn error<D: Display>(&self, text: D) -> String {
        self.paint(Style::new().red(), text)
    }
}

// =============================================================================
// Menu
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    List,
    Search,
    UpdateStatus,
    Exit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Add,
        Action::Remove,
        Action::List,
        Action::Search,
        Action::UpdateStatus,
        Action::Exit,
    ];

    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Action::Add),
            "2" => Some(Action::Remove),
            "3" => Some(Action::List),
            "4" => Some(Action::Search),
            "5" => Some(Action::UpdateStatus),
            "6" => Some(Action::Exit),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Action::Add => "Add a book",
            Action::Remove => "Remove a book",
            Action::List => "List all books",
            Action::Search => "Search books",
            Action::UpdateStatus => "Change book status",
            Action::Exit => "Exit",
        }
    }
}

// =============================================================================
// Public entry point
// =============================================================================

/// 対話ループを実行する。Exitが選ばれるか入力が尽きるまで続く。
pub fn run<R, I, O>(
    service: &mut CatalogService<R>,
    report: &LoadReport,
    input: I,
    output: O,
    styles: Styles,
) -> anyhow::Result<()>
where
    R: CatalogRepository,
    I: BufRead,
    O: Write,
{
    let mut shell = Shell {
        service,
        input,
        output,
        styles,
    };
    shell.greet(report)?;
    while shell.step()? {}
    Ok(())
}

// =============================================================================
// Shell
// =============================================================================

struct Shell<'a, R: CatalogRepository, I, O> {
    service: &'a mut CatalogService<R>,
    input: I,
    output: O,
    styles: Styles,
}

impl<R: CatalogRepository, I: BufRead, O: Write> Shell<'_, R, I, O> {
    fn greet(&mut self, report: &LoadReport) -> std::io::Result<()> {
        match &report.warning {
            Some(warning) => {
                let line = self.styles.error(format!("Warning: {warning}"));
                writeln!(self.output, "{line}")
            }
            None => {
                let line = self.styles.header(format!("Books loaded: {}", report.loaded));
                writeln!(self.output, "{line}")
            }
        }
    }

    /// 1回分のメニュー操作。続行するならtrue。
    fn step(&mut self) -> std::io::Result<bool> {
        self.print_menu()?;
        let Some(choice) = self.prompt("Choose an action (1-6): ")? else {
            return Ok(false);
        };
        match Action::from_choice(&choice) {
            Some(Action::Exit) => {
                let line = self.styles.success("Goodbye.");
                writeln!(self.output, "{line}")?;
                Ok(false)
            }
            Some(action) => self.dispatch(action),
            None => {
                let line = self.styles.error("Invalid choice. Please choose 1 to 6.");
                writeln!(self.output, "{line}")?;
                Ok(true)
            }
        }
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(30))?;
        writeln!(self.output, "{}", self.styles.title("MENU:"))?;
        for (n, action) in Action::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", n + 1, self.styles.header(action.label()))?;
        }
        Ok(())
    }

    fn dispatch(&mut self, action: Action) -> std::io::Result<bool> {
        match action {
            Action::Add => self.add(),
            Action::Remove => self.remove(),
            Action::List => self.list().map(|()| true),
            Action::Search => self.search(),
            Action::UpdateStatus => self.update_status(),
            Action::Exit => Ok(false),
        }
    }

    fn add(&mut self) -> std::io::Result<bool> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(false);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(false);
        };
        let Some(year) = self.prompt("Publication year: ")? else {
            return Ok(false);
        };
        let result = self.service.add(&title, &author, &year);
        self.report_mutation(result, "Book added:")?;
        Ok(true)
    }

    fn remove(&mut self) -> std::io::Result<bool> {
        let Some(id) = self.prompt("ID of the book to remove: ")? else {
            return Ok(false);
        };
        let result = self.service.remove(&id);
        self.report_mutation(result, "Book removed:")?;
        Ok(true)
    }

    fn update_status(&mut self) -> std::io::Result<bool> {
        let Some(id) = self.prompt("ID of the book: ")? else {
            return Ok(false);
        };
        let Some(status) = self.prompt("New status: ")? else {
            return Ok(false);
        };
        let result = self.service.update_status(&id, &status);
        self.report_mutation(result, "Status changed:")?;
        Ok(true)
    }

    fn list(&mut self) -> std::io::Result<()> {
        match self.service.list_all() {
            Listing::Empty => {
                let line = self.styles.notice("No books in the catalog.");
                writeln!(self.output, "{line}")
            }
            Listing::Books(books) => self.print_books("All books:", &books),
        }
    }

    fn search(&mut self) -> std::io::Result<bool> {
        const HINT: &str = "(leave empty to skip): ";
        let mut fields = Vec::with_capacity(4);
        for label in ["Title", "Author", "Publication year", "Status"] {
            let Some(value) = self.prompt(&format!("{label} {HINT}"))? else {
                return Ok(false);
            };
            fields.push(value);
        }

        match SearchQuery::from_input(&fields[0], &fields[1], &fields[2], &fields[3]) {
            Ok(query) => {
                let books = self.service.search(&query);
                if books.is_empty() {
                    let line = self.styles.notice("No books match the given filters.");
                    writeln!(self.output, "{line}")?;
                } else {
                    self.print_books("Found books:", &books)?;
                }
            }
            Err(e) => self.print_error(&e)?,
        }
        Ok(true)
    }

    // --- output helpers ---

    fn report_mutation(
        &mut self,
        result: Result<Committed<Book>, AppError>,
        label: &str,
    ) -> std::io::Result<()> {
        match result {
            Ok(committed) => {
                writeln!(
                    self.output,
                    "{} {}",
                    self.styles.success(label),
                    committed.record
                )?;
                if let Some(warning) = committed.persist_warning {
                    let line = self.styles.error(format!("Warning: {warning}"));
                    writeln!(self.output, "{line}")?;
                }
                Ok(())
            }
            Err(e) => self.print_error(&e),
        }
    }

    fn print_books(&mut self, header: &str, books: &[Book]) -> std::io::Result<()> {
        writeln!(self.output, "{}", self.styles.header(header))?;
        for book in books {
            writeln!(self.output, "{book}")?;
        }
        Ok(())
    }

    fn print_error(&mut self, error: &AppError) -> std::io::Result<()> {
        let line = self.styles.error(format!("Error: {error}"));
        writeln!(self.output, "{line}")
    }

    /// 入力が尽きたらNone。末尾の改行は除く。
    fn prompt(&mut self, label: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

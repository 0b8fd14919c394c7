//! Interactive menu shell
//!
//! A read-dispatch loop over the numbered main menu. The ledger file is
//! loaded when the shell starts and saved when the user picks Exit. Input the
//! shell cannot use is reported and the command is abandoned; the menu is
//! then shown again.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::{Datelike, Local};

use crate::display::{
    format_budget_status, format_expense_rows, format_load_outcome, format_monthly_total,
    format_total, NO_EXPENSES,
};
use crate::error::{TrackerError, TrackerResult};
use crate::export::export_expenses_csv_file;
use crate::models::{ExpenseChanges, ExpenseId, Money, Month, MonthParseError};
use crate::services::{BudgetService, ExpenseService, SummaryService};
use crate::storage::Storage;

use super::menu::{render_menu, MenuChoice};

const INVALID_AMOUNT: &str = "Invalid input for amount. Please enter a number.";
const INVALID_ID_OR_AMOUNT: &str = "Invalid input for ID or amount. Please enter a number.";
const INVALID_ID: &str = "Invalid input for ID. Please enter a number.";
const INVALID_MONTH: &str = "Invalid input for month. Please enter a number.";
const INVALID_MONTH_OR_BUDGET: &str = "Invalid input for month or budget. Please enter numbers.";
const MONTH_OUT_OF_RANGE: &str = "Invalid month. Please enter a value between 1 and 12.";

/// How a shell session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose Exit and the ledger was saved
    Exited,
    /// Input ran out before Exit; nothing was saved
    EndOfInput,
}

/// The interactive shell over a storage context
pub struct Shell<'a, R, W> {
    storage: &'a mut Storage,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell reading commands from `input` and writing to `output`
    pub fn new(storage: &'a mut Storage, input: R, output: W) -> Self {
        Self {
            storage,
            input,
            output,
        }
    }

    /// Load the ledger, then serve menu commands until Exit or end of input
    ///
    /// Failing to save on Exit is returned as an error.
    pub fn run(&mut self) -> TrackerResult<SessionEnd> {
        let outcome = self.storage.load();
        let data_file = self.storage.paths().data_file().to_path_buf();
        writeln!(self.output, "{}", format_load_outcome(&data_file, &outcome))?;

        loop {
            write!(self.output, "{}", render_menu())?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                return Ok(SessionEnd::EndOfInput);
            };

            // Anything that is not a menu number just redraws the menu
            let Ok(choice) = line.parse::<MenuChoice>() else {
                continue;
            };

            if choice == MenuChoice::Exit {
                self.storage.save()?;
                writeln!(self.output, "Data saved to {}", data_file.display())?;
                writeln!(self.output, "Exiting the program. Goodbye!")?;
                return Ok(SessionEnd::Exited);
            }

            if let Err(e) = self.dispatch(choice) {
                writeln!(self.output, "Error: {}", e)?;
            }
            if let Some(e) = self.storage.take_audit_failure() {
                writeln!(self.output, "Warning: change not recorded in history. {}", e)?;
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> TrackerResult<()> {
        match choice {
            MenuChoice::AddExpense => self.add_expense(),
            MenuChoice::UpdateExpense => self.update_expense(),
            MenuChoice::DeleteExpense => self.delete_expense(),
            MenuChoice::ViewExpenses => self.view_expenses(),
            MenuChoice::ViewSummary => self.view_summary(),
            MenuChoice::ViewMonthlySummary => self.view_monthly_summary(),
            MenuChoice::SetBudget => self.set_budget(),
            MenuChoice::CheckBudget => self.check_budget(),
            MenuChoice::ExportCsv => self.export_csv(),
            MenuChoice::SaveJson => self.save_json(),
            MenuChoice::LoadJson => self.load_json(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_expense(&mut self) -> TrackerResult<()> {
        let description = self.ask("Enter description: ")?;
        let Ok(amount) = Money::parse(&self.ask("Enter amount: ")?) else {
            return self.say(INVALID_AMOUNT);
        };
        let category = self.ask("Enter category: ")?;

        let expense = ExpenseService::new(self.storage).add(description, amount, category);
        self.say(&format!("Expense added successfully! (ID: {})", expense.id))
    }

    fn update_expense(&mut self) -> TrackerResult<()> {
        let Ok(id) = self.ask("Enter expense ID: ")?.parse::<ExpenseId>() else {
            return self.say(INVALID_ID_OR_AMOUNT);
        };
        let description = self.ask("Enter new description (leave blank to keep current): ")?;
        let amount = self.ask("Enter new amount (leave blank to keep current): ")?;
        let amount = if amount.trim().is_empty() {
            None
        } else {
            match Money::parse(&amount) {
                Ok(amount) => Some(amount),
                Err(_) => return self.say(INVALID_ID_OR_AMOUNT),
            }
        };
        let category = self.ask("Enter new category (leave blank to keep current): ")?;

        let changes = ExpenseChanges {
            description: non_blank(description),
            amount,
            category: non_blank(category),
        };

        match ExpenseService::new(self.storage).update(id, changes) {
            Ok(_) => self.say("Expense updated successfully!"),
            Err(e) if e.is_not_found() => self.say("Expense not found."),
            Err(e) => Err(e),
        }
    }

    fn delete_expense(&mut self) -> TrackerResult<()> {
        let Ok(id) = self.ask("Enter expense ID: ")?.parse::<ExpenseId>() else {
            return self.say(INVALID_ID);
        };

        ExpenseService::new(self.storage).delete(id);
        self.say("Expense deleted successfully!")
    }

    fn view_expenses(&mut self) -> TrackerResult<()> {
        let summary = SummaryService::new(self.storage);
        let mut any = false;
        for row in format_expense_rows(summary.list()) {
            writeln!(self.output, "{}", row)?;
            any = true;
        }
        if !any {
            writeln!(self.output, "{}", NO_EXPENSES)?;
        }
        Ok(())
    }

    fn view_summary(&mut self) -> TrackerResult<()> {
        let total = SummaryService::new(self.storage).total();
        self.say(&format_total(total))
    }

    fn view_monthly_summary(&mut self) -> TrackerResult<()> {
        let Some(month) = self.ask_month(INVALID_MONTH)? else {
            return Ok(());
        };

        let total = SummaryService::new(self.storage).monthly_total(month, current_year());
        self.say(&format_monthly_total(month, total))
    }

    fn set_budget(&mut self) -> TrackerResult<()> {
        let Some(month) = self.ask_month(INVALID_MONTH_OR_BUDGET)? else {
            return Ok(());
        };
        let Ok(amount) = Money::parse(&self.ask("Enter budget: ")?) else {
            return self.say(INVALID_MONTH_OR_BUDGET);
        };

        BudgetService::new(self.storage).set_budget(month, amount);
        self.say(&format!("Budget for month {} set to {}", month, amount))
    }

    fn check_budget(&mut self) -> TrackerResult<()> {
        let Some(month) = self.ask_month(INVALID_MONTH)? else {
            return Ok(());
        };

        let status = SummaryService::new(self.storage).check_budget(month, current_year());
        self.say(&format_budget_status(month, &status))
    }

    fn export_csv(&mut self) -> TrackerResult<()> {
        let filename = self.ask("Enter filename: ")?;
        let path = PathBuf::from(filename.trim());

        let rows = export_expenses_csv_file(self.storage, &path)?;
        self.say(&format!(
            "Expenses exported to {} ({} rows)",
            path.display(),
            rows
        ))
    }

    fn save_json(&mut self) -> TrackerResult<()> {
        self.storage.save()?;
        let path = self.storage.paths().data_file().display().to_string();
        self.say(&format!("Data saved to {}", path))
    }

    fn load_json(&mut self) -> TrackerResult<()> {
        let default = self.storage.paths().data_file().display().to_string();
        let entered = self.ask(&format!(
            "Enter filename (leave blank for {}): ",
            default
        ))?;
        let path = self.storage.paths().resolve_or_default(&entered);

        let outcome = self.storage.load_from(&path);
        self.say(&format_load_outcome(&path, &outcome))
    }

    /// Ask for a month, reporting bad input; `None` abandons the command
    fn ask_month(&mut self, not_a_number: &str) -> TrackerResult<Option<Month>> {
        match self.ask("Enter month (1-12): ")?.parse::<Month>() {
            Ok(month) => Ok(Some(month)),
            Err(MonthParseError::OutOfRange(_)) => {
                self.say(MONTH_OUT_OF_RANGE)?;
                Ok(None)
            }
            Err(MonthParseError::NotANumber(_)) => {
                self.say(not_a_number)?;
                Ok(None)
            }
        }
    }

    /// Prompt for a follow-up line; end of input reads as a blank line
    fn ask(&mut self, prompt: &str) -> TrackerResult<String> {
        Ok(self.prompt(prompt)?.unwrap_or_default())
    }

    /// Prompt and read one line without its line ending; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| TrackerError::Io(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn say(&mut self, message: &str) -> TrackerResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

/// Blank replies mean "keep the current value"
fn non_blank(reply: String) -> Option<String> {
    if reply.trim().is_empty() {
        None
    } else {
        Some(reply)
    }
}

fn current_year() -> i32 {
    Local::now().year()
}

//! Main menu choices

use std::fmt;
use std::str::FromStr;

/// One entry of the numbered main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    UpdateExpense,
    DeleteExpense,
    ViewExpenses,
    ViewSummary,
    ViewMonthlySummary,
    SetBudget,
    CheckBudget,
    ExportCsv,
    SaveJson,
    LoadJson,
    Exit,
}

impl MenuChoice {
    /// Every choice in menu order
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::AddExpense,
        MenuChoice::UpdateExpense,
        MenuChoice::DeleteExpense,
        MenuChoice::ViewExpenses,
        MenuChoice::ViewSummary,
        MenuChoice::ViewMonthlySummary,
        MenuChoice::SetBudget,
        MenuChoice::CheckBudget,
        MenuChoice::ExportCsv,
        MenuChoice::SaveJson,
        MenuChoice::LoadJson,
        MenuChoice::Exit,
    ];

    /// The number the user types to pick this choice
    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map_or(0, |i| i + 1)
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::UpdateExpense => "Update Expense",
            MenuChoice::DeleteExpense => "Delete Expense",
            MenuChoice::ViewExpenses => "View Expenses",
            MenuChoice::ViewSummary => "View Summary",
            MenuChoice::ViewMonthlySummary => "View Monthly Summary",
            MenuChoice::SetBudget => "Set Budget",
            MenuChoice::CheckBudget => "Check Budget",
            MenuChoice::ExportCsv => "Export to CSV",
            MenuChoice::SaveJson => "Save to JSON",
            MenuChoice::LoadJson => "Load from JSON",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Input that does not name a menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

/// The full menu as printed before every prompt
pub fn render_menu() -> String {
    let mut output = String::from("\nExpense Tracker\n");
    for choice in MenuChoice::ALL {
        output.push_str(&choice.to_string());
        output.push('\n');
    }
    output
}

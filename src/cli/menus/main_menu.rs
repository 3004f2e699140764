pub const MENU_TITLE: &str = "$$$ Personal Finance Tracker $$$";

/// Actions offered by the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SetBudget,
    SetIncome,
    SetExpense,
    ViewReport,
    DeleteExpense,
    Save,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::SetBudget,
        MenuChoice::SetIncome,
        MenuChoice::SetExpense,
        MenuChoice::ViewReport,
        MenuChoice::DeleteExpense,
        MenuChoice::Save,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::SetBudget => "Set Budget Period and Savings Goal",
            MenuChoice::SetIncome => "Add / Update Income",
            MenuChoice::SetExpense => "Add / Update Expense",
            MenuChoice::ViewReport => "View Financial Report",
            MenuChoice::DeleteExpense => "Delete Expense",
            MenuChoice::Save => "Save Data to File",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(MenuChoice::label).collect()
    }

    /// Maps a 1-based menu number to its action.
    pub fn parse(raw: &str) -> Option<Self> {
        let index: usize = raw.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|position| Self::ALL.get(position))
            .copied()
    }
}

use crate::cli::console::Console;

const RULE_WIDTH: usize = 50;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddExpense,
    ViewAll,
    ViewByCategory,
    MonthlySummary,
    SearchByDate,
    SetBudget,
    DeleteExpense,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 8] = [
        MenuAction::AddExpense,
        MenuAction::ViewAll,
        MenuAction::ViewByCategory,
        MenuAction::MonthlySummary,
        MenuAction::SearchByDate,
        MenuAction::SetBudget,
        MenuAction::DeleteExpense,
        MenuAction::Exit,
    ];

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|candidate| *candidate == self)
            .map_or(0, |position| position + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddExpense => "Add Expense",
            MenuAction::ViewAll => "View All Expenses",
            MenuAction::ViewByCategory => "View by Category",
            MenuAction::MonthlySummary => "Monthly Summary",
            MenuAction::SearchByDate => "Search by Date Range",
            MenuAction::SetBudget => "Set Budget Limit",
            MenuAction::DeleteExpense => "Delete Expense",
            MenuAction::Exit => "Exit",
        }
    }

    /// Maps the typed menu number to an action. Only the bare digits `1`..`8`
    /// match; `01` or `+1` do not.
    pub fn from_choice(raw: &str) -> Option<Self> {
        let choice = raw.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.number().to_string() == choice)
    }
}

/// Main menu of the interactive loop.
pub struct MainMenu;

impl MainMenu {
    pub const TITLE: &'static str = "PERSONAL EXPENSE TRACKER";
    pub const PROMPT: &'static str = "Enter your choice (1-8)";

    pub fn render<C: Console + ?Sized>(console: &mut C) {
        console.section(Self::TITLE);
        for action in MenuAction::ALL {
            console.line(format!("{}. {}", action.number(), action.label()));
        }
        console.line("=".repeat(RULE_WIDTH));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::console::ScriptedConsole;

    #[test]
    fn choices_map_to_actions() {
        assert_eq!(MenuAction::from_choice("1"), Some(MenuAction::AddExpense));
        assert_eq!(MenuAction::from_choice(" 8 "), Some(MenuAction::Exit));
        assert_eq!(MenuAction::from_choice("0"), None);
        assert_eq!(MenuAction::from_choice("9"), None);
        assert_eq!(MenuAction::from_choice("exit"), None);
        assert_eq!(MenuAction::from_choice("01"), None);
        assert_eq!(MenuAction::from_choice("+1"), None);
        assert_eq!(MenuAction::from_choice(""), None);
    }

    #[test]
    fn render_lists_every_action_in_order() {
        let mut console = ScriptedConsole::default();
        MainMenu::render(&mut console);
        let transcript = console.transcript();
        assert_eq!(transcript[0], "=== PERSONAL EXPENSE TRACKER ===");
        assert_eq!(transcript[1], "1. Add Expense");
        assert_eq!(transcript[8], "8. Exit");
    }
}

use crate::cli::commands::{budget, render_category_choices, report};
use crate::cli::console::Console;
use crate::cli::prompts;
use crate::cli::shell_context::{CliError, LoopControl, ShellContext};
use crate::domain::ExpenseDraft;

pub fn add_expense<C: Console>(ctx: &mut ShellContext<C>) -> Result<LoopControl, CliError> {
    ctx.console.section("ADD NEW EXPENSE");

    let amount_prompt = format!("Enter amount ({})", ctx.config.currency_symbol);
    let amount = prompts::prompt_amount(&mut ctx.console, &amount_prompt)?;

    render_category_choices(&mut ctx.console);
    let category = prompts::prompt_category(&mut ctx.console, "Select category (1-7)")?;
    let description = prompts::prompt_text(&mut ctx.console, "Enter description")?;
    let today = ctx.clock.today();
    let date = prompts::prompt_entry_date(
        &mut ctx.console,
        "Enter date (DD-MM-YYYY) [Enter for today]",
        today,
    )?;

    let draft = ExpenseDraft::new(amount, category, description, date)?;
    let (expense, alert) = ctx.store.add_expense(draft)?;
    ctx.console.success("Data saved successfully!");
    ctx.console
        .success(format!("Expense added successfully! (ID: {})", expense.id));

    if let Some(alert) = alert {
        budget::report_alert(&mut ctx.console, &ctx.config.currency_symbol, &alert);
    }
    Ok(LoopControl::Continue)
}

/// Lists all expenses, then removes one by id after confirmation.
///
/// The id is asked for once: a non-numeric answer aborts, `0` cancels.
pub fn delete_expense<C: Console>(ctx: &mut ShellContext<C>) -> Result<LoopControl, CliError> {
    if ctx.store.expenses().is_empty() {
        ctx.console.info("No expenses to delete!");
        return Ok(LoopControl::Continue);
    }

    report::view_all(ctx)?;

    let raw = prompts::read_required(&mut ctx.console, "Enter expense ID to delete (0 to cancel)")?;
    let id: u32 = match raw.trim().parse() {
        Ok(id) => id,
        Err(_) => {
            ctx.console.error("Invalid ID!");
            return Ok(LoopControl::Continue);
        }
    };
    if id == 0 {
        ctx.console.info("Deletion cancelled.");
        return Ok(LoopControl::Continue);
    }

    let description = match ctx.store.expense(id) {
        Some(expense) => expense.description.clone(),
        None => {
            ctx.console.warning("Expense ID not found!");
            return Ok(LoopControl::Continue);
        }
    };

    let confirm_prompt = format!("Delete expense '{description}'? (y/n)");
    if !prompts::prompt_confirm(&mut ctx.console, &confirm_prompt)? {
        ctx.console.info("Deletion cancelled.");
        return Ok(LoopControl::Continue);
    }

    ctx.store.delete_expense(id)?;
    ctx.console.success("Data saved successfully!");
    ctx.console.success("Expense deleted successfully!");
    Ok(LoopControl::Continue)
}

use crate::cli::console::Console;
use crate::cli::formatters::money;
use crate::cli::prompts;
use crate::cli::shell_context::{CliError, LoopControl, ShellContext};
use crate::core::services::BudgetAlert;
use crate::domain::Category;

pub fn set_budget<C: Console>(ctx: &mut ShellContext<C>) -> Result<LoopControl, CliError> {
    ctx.console.section("SET BUDGET LIMIT");

    let symbol = ctx.config.currency_symbol.as_str();
    ctx.console.line("Categories:");
    for category in Category::ALL {
        let current = ctx
            .store
            .ledger()
            .budget_limit(category)
            .map_or_else(|| "Not set".to_string(), |limit| money(symbol, limit));
        ctx.console.line(format!(
            "  {}. {:<15} (Current: {})",
            category.index(),
            category,
            current
        ));
    }

    let category = prompts::prompt_category(&mut ctx.console, "Select category (1-7)")?;
    let limit_prompt = format!("Enter budget limit for {category} ({symbol})");
    let limit = prompts::prompt_limit(&mut ctx.console, &limit_prompt)?;

    ctx.store.set_budget(category, limit)?;
    ctx.console.success("Data saved successfully!");
    ctx.console
        .success(format!("Budget set for {category}: {}", money(symbol, limit)));
    Ok(LoopControl::Continue)
}

/// Prints the warning that follows an expense pushing a category near or over its limit.
pub fn report_alert<C: Console + ?Sized>(console: &mut C, symbol: &str, alert: &BudgetAlert) {
    match alert {
        BudgetAlert::Exceeded {
            category,
            overspend,
            ..
        } => console.warning(format!(
            "WARNING: {category} budget exceeded by {}!",
            money(symbol, *overspend)
        )),
        BudgetAlert::NearLimit {
            category,
            remaining,
            ..
        } => console.warning(format!(
            "ALERT: {category} budget 80% used. {} remaining.",
            money(symbol, *remaining)
        )),
    }
}

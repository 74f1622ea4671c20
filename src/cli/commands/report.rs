//! Read-only views: nothing here touches the store's state.

use crate::cli::console::Console;
use crate::cli::formatters::{
    bar_row, expense_header, expense_row, money, rule, share_row, thin_rule, total_row,
    SUMMARY_WIDTH, TABLE_WIDTH,
};
use crate::cli::prompts;
use crate::cli::shell_context::{CliError, LoopControl, ShellContext};
use crate::core::services::{ExpenseListing, SummaryService};
use crate::domain::parse_date;

const EMPTY_MESSAGE: &str = "No expenses recorded yet!";

pub fn view_all<C: Console>(ctx: &mut ShellContext<C>) -> Result<LoopControl, CliError> {
    let ledger = ctx.store.ledger();
    if ledger.is_empty() {
        ctx.console.info(EMPTY_MESSAGE);
        return Ok(LoopControl::Continue);
    }

    ctx.console.section("ALL EXPENSES");
    let listing = SummaryService::list_all(ledger);
    render_listing(&mut ctx.console, &ctx.config.currency_symbol, &listing);
    ctx.console.line(rule(TABLE_WIDTH));
    Ok(LoopControl::Continue)
}

pub fn view_by_category<C: Console>(ctx: &mut ShellContext<C>) -> Result<LoopControl, CliError> {
    let ledger = ctx.store.ledger();
    if ledger.is_empty() {
        ctx.console.info(EMPTY_MESSAGE);
        return Ok(LoopControl::Continue);
    }

    ctx.console.section("EXPENSES BY CATEGORY");
    let symbol = ctx.config.currency_symbol.as_str();
    let breakdown = SummaryService::by_category(ledger);
    for share in &breakdown.shares {
        ctx.console.line(share_row(symbol, share));
    }
    ctx.console.line(thin_rule(SUMMARY_WIDTH));
    ctx.console.line(format!(
        "{:<15} {}{:>10.2}",
        "TOTAL:", symbol, breakdown.total
    ));
    ctx.console.line(rule(SUMMARY_WIDTH));
    Ok(LoopControl::Continue)
}

pub fn monthly_summary<C: Console>(ctx: &mut ShellContext<C>) -> Result<LoopControl, CliError> {
    if ctx.store.ledger().is_empty() {
        ctx.console.info(EMPTY_MESSAGE);
        return Ok(LoopControl::Continue);
    }

    let raw = prompts::prompt_text(
        &mut ctx.console,
        "Enter month (MM-YYYY) [Enter for current month]",
    )?;
    let month = if raw.is_empty() {
        ctx.clock.month_token()
    } else {
        raw
    };

    ctx.console.section(format!("MONTHLY SUMMARY - {month}"));
    let Some(summary) = SummaryService::monthly(ctx.store.ledger(), &month) else {
        ctx.console.info(format!("No expenses found for {month}"));
        return Ok(LoopControl::Continue);
    };

    let symbol = ctx.config.currency_symbol.as_str();
    ctx.console.line(format!("Total Expenses: {}", summary.count));
    ctx.console
        .line(format!("Total Amount: {}", money(symbol, summary.total)));
    ctx.console.line(format!(
        "Average per expense: {}",
        money(symbol, summary.average)
    ));
    ctx.console.line("Category Breakdown:");
    for share in &summary.shares {
        ctx.console.line(bar_row(symbol, share));
    }
    ctx.console.line(rule(SUMMARY_WIDTH));
    Ok(LoopControl::Continue)
}

/// Inclusive date-range search. A malformed bound aborts the search without
/// asking again.
pub fn search_by_date<C: Console>(ctx: &mut ShellContext<C>) -> Result<LoopControl, CliError> {
    ctx.console.section("SEARCH EXPENSES");

    let start_raw = prompts::prompt_text(&mut ctx.console, "Enter start date (DD-MM-YYYY)")?;
    let end_raw = prompts::prompt_text(&mut ctx.console, "Enter end date (DD-MM-YYYY)")?;
    let (start, end) = match (parse_date(&start_raw), parse_date(&end_raw)) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(err), _) | (_, Err(err)) => {
            ctx.console.error(format!("Invalid date format! {err}"));
            return Ok(LoopControl::Continue);
        }
    };

    let listing = SummaryService::search_range(ctx.store.ledger(), start, end);
    if listing.is_empty() {
        ctx.console.info("No expenses found in this date range");
        return Ok(LoopControl::Continue);
    }

    ctx.console.info(format!("Found {} expenses", listing.len()));
    render_listing(&mut ctx.console, &ctx.config.currency_symbol, &listing);
    Ok(LoopControl::Continue)
}

fn render_listing<C: Console + ?Sized>(
    console: &mut C,
    symbol: &str,
    listing: &ExpenseListing<'_>,
) {
    console.line(thin_rule(TABLE_WIDTH));
    console.line(expense_header());
    console.line(thin_rule(TABLE_WIDTH));
    for expense in &listing.expenses {
        console.line(expense_row(symbol, expense));
    }
    console.line(thin_rule(TABLE_WIDTH));
    console.line(total_row(symbol, listing.total));
}

//! Validated prompts.
//!
//! Each prompt is a small loop: read a line, validate it, then either accept it
//! or report the problem and ask again.

use chrono::NaiveDate;

use crate::cli::console::Console;
use crate::cli::shell_context::CliError;
use crate::domain::{parse_date, Category};

/// Reads one line, mapping end of input to [`CliError::EndOfInput`].
pub fn read_required<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<String, CliError> {
    console.read_line(prompt)?.ok_or(CliError::EndOfInput)
}

/// Repeats `prompt` until `parse` accepts the trimmed input.
pub fn prompt_until<C, T, F>(console: &mut C, prompt: &str, mut parse: F) -> Result<T, CliError>
where
    C: Console + ?Sized,
    F: FnMut(&str) -> Result<T, String>,
{
    loop {
        let raw = read_required(console, prompt)?;
        match parse(raw.trim()) {
            Ok(value) => return Ok(value),
            Err(message) => console.warning(message),
        }
    }
}

/// A strictly positive amount.
pub fn prompt_amount<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<f64, CliError> {
    prompt_until(console, prompt, |raw| match parse_number(raw)? {
        value if value > 0.0 => Ok(value),
        _ => Err("Amount must be positive!".into()),
    })
}

/// A budget limit; zero is allowed.
pub fn prompt_limit<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<f64, CliError> {
    prompt_until(console, prompt, |raw| match parse_number(raw)? {
        value if value >= 0.0 => Ok(value),
        _ => Err("Budget must be zero or more!".into()),
    })
}

/// A category chosen by its 1-based menu position.
pub fn prompt_category<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<Category, CliError> {
    let max = Category::ALL.len();
    prompt_until(console, prompt, |raw| {
        let index: usize = raw
            .parse()
            .map_err(|_| String::from("Please enter a number!"))?;
        Category::from_index(index).ok_or_else(|| format!("Please select 1-{max}!"))
    })
}

/// An entry date; blank input means `today`.
pub fn prompt_entry_date<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    today: NaiveDate,
) -> Result<NaiveDate, CliError> {
    prompt_until(console, prompt, |raw| {
        if raw.is_empty() {
            return Ok(today);
        }
        parse_date(raw).map_err(|_| format!("Invalid date `{raw}`, please use DD-MM-YYYY!"))
    })
}

/// Free text, trimmed.
pub fn prompt_text<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<String, CliError> {
    Ok(read_required(console, prompt)?.trim().to_string())
}

/// `true` only for `y` / `Y`.
pub fn prompt_confirm<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<bool, CliError> {
    let answer = read_required(console, prompt)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn parse_number(raw: &str) -> Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err("Please enter a valid number!".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::console::ScriptedConsole;

    #[test]
    fn amount_prompt_repeats_until_positive() {
        let mut console = ScriptedConsole::new(["abc", "-3", "0", "nan", "12.50"]);
        let amount = prompt_amount(&mut console, "Amount").unwrap();
        assert_eq!(amount, 12.5);
        assert_eq!(console.prompts().len(), 5);
        assert_eq!(
            console.transcript(),
            [
                "[!] Please enter a valid number!",
                "[!] Amount must be positive!",
                "[!] Amount must be positive!",
                "[!] Please enter a valid number!",
            ]
        );
    }

    #[test]
    fn limit_prompt_accepts_zero() {
        let mut console = ScriptedConsole::new(["-1", "0"]);
        assert_eq!(prompt_limit(&mut console, "Limit").unwrap(), 0.0);
        assert_eq!(console.transcript(), ["[!] Budget must be zero or more!"]);
    }

    #[test]
    fn category_prompt_validates_range() {
        let mut console = ScriptedConsole::new(["food", "0", "8", "3"]);
        let category = prompt_category(&mut console, "Category").unwrap();
        assert_eq!(category, Category::Entertainment);
        assert_eq!(
            console.transcript(),
            [
                "[!] Please enter a number!",
                "[!] Please select 1-7!",
                "[!] Please select 1-7!",
            ]
        );
    }

    #[test]
    fn entry_date_defaults_to_today_and_rejects_bad_dates() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();

        let mut console = ScriptedConsole::new([""]);
        assert_eq!(prompt_entry_date(&mut console, "Date", today).unwrap(), today);

        let mut console = ScriptedConsole::new(["30-02-2024", "2024-06-01", "01-06-2024"]);
        let date = prompt_entry_date(&mut console, "Date", today).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(console.transcript().len(), 2);
    }

    #[test]
    fn entry_date_rejects_two_digit_years() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        let mut console = ScriptedConsole::new(["01-06-24", "01-06-2024"]);
        let date = prompt_entry_date(&mut console, "Date", today).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(
            console.transcript(),
            ["[!] Invalid date `01-06-24`, please use DD-MM-YYYY!"]
        );
    }

    #[test]
    fn confirm_is_case_insensitive() {
        let mut console = ScriptedConsole::new(["Y", "y ", "yes", "n"]);
        assert!(prompt_confirm(&mut console, "?").unwrap());
        assert!(prompt_confirm(&mut console, "?").unwrap());
        assert!(!prompt_confirm(&mut console, "?").unwrap());
        assert!(!prompt_confirm(&mut console, "?").unwrap());
    }

    #[test]
    fn exhausted_input_ends_the_prompt() {
        let mut console = ScriptedConsole::new(["oops"]);
        assert!(matches!(
            prompt_amount(&mut console, "Amount"),
            Err(CliError::EndOfInput)
        ));
    }
}

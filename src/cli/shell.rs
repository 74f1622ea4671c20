use crate::cli::console::{Console, TerminalConsole};
use crate::cli::menus::{MainMenu, MenuAction};
use crate::cli::shell_context::{CliError, LoopControl, ShellContext};
use crate::config::TrackerConfig;
use crate::core::SystemClock;

/// Runs the interactive tracker on the process's terminal.
pub fn run_cli(config: TrackerConfig) -> Result<(), CliError> {
    tracing::info!(path = %config.data_file.display(), "starting expense tracker");
    let mut context =
        ShellContext::with_json_storage(config, TerminalConsole::new(), Box::new(SystemClock));
    run_session(&mut context)
}

/// Drives the menu loop until Exit or end of input.
///
/// Store failures are reported and the loop continues; only console I/O
/// failures end the session with an error.
pub fn run_session<C: Console>(context: &mut ShellContext<C>) -> Result<(), CliError> {
    context.console.info("Welcome to Personal Expense Tracker!");
    context.report_load();

    loop {
        MainMenu::render(&mut context.console);
        let Some(choice) = context.console.read_line(MainMenu::PROMPT)? else {
            context.farewell();
            break;
        };
        let Some(action) = MenuAction::from_choice(&choice) else {
            context.console.warning("Invalid choice! Please select 1-8");
            continue;
        };

        match context.dispatch(action) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(CliError::EndOfInput) => {
                context.farewell();
                break;
            }
            Err(CliError::Io(err)) => return Err(CliError::Io(err)),
            Err(err) => {
                tracing::warn!(error = %err, ?action, "menu action failed");
                context.report_error(&err);
            }
        }
    }
    Ok(())
}

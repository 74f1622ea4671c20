pub mod commands;
pub mod console;
pub mod formatters;
pub mod menus;
pub mod output;
pub mod prompts;
mod shell;
pub mod shell_context;

pub use console::{Console, ScriptedConsole, TerminalConsole};
pub use shell::{run_cli, run_session};
pub use shell_context::{CliError, LoopControl, ShellContext};

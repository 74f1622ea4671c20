//! The input/output boundary of the interactive loop.
//!
//! Every prompt and message goes through [`Console`], so whole sessions can run
//! against [`ScriptedConsole`] without a terminal.

use std::{
    collections::VecDeque,
    fmt,
    io::{self, BufRead, IsTerminal, Write},
};

use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::output::{plain_text, styled_text, MessageKind};

pub trait Console {
    /// Shows `prompt` and reads one line. `Ok(None)` signals end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn emit(&mut self, kind: MessageKind, message: &str);

    fn line(&mut self, message: impl fmt::Display) {
        self.emit(MessageKind::Plain, &message.to_string());
    }

    fn info(&mut self, message: impl fmt::Display) {
        self.emit(MessageKind::Info, &message.to_string());
    }

    fn success(&mut self, message: impl fmt::Display) {
        self.emit(MessageKind::Success, &message.to_string());
    }

    fn warning(&mut self, message: impl fmt::Display) {
        self.emit(MessageKind::Warning, &message.to_string());
    }

    fn error(&mut self, message: impl fmt::Display) {
        self.emit(MessageKind::Error, &message.to_string());
    }

    fn section(&mut self, title: impl fmt::Display) {
        self.emit(MessageKind::Section, &title.to_string());
    }
}

/// Console bound to the process's stdin/stdout.
///
/// Uses `dialoguer` prompts on a terminal and plain line reads otherwise, so
/// piped input drives the same menu.
pub struct TerminalConsole {
    theme: ColorfulTheme,
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
        }
    }

    fn read_piped(prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}: ")?;
        stdout.flush()?;

        let mut buffer = String::new();
        if io::stdin().lock().read_line(&mut buffer)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if !self.interactive {
            return Self::read_piped(prompt);
        }
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(Some)
            .map_err(prompt_error)
    }

    fn emit(&mut self, kind: MessageKind, message: &str) {
        let text = if self.interactive {
            styled_text(kind, message)
        } else {
            plain_text(kind, message)
        };
        match kind {
            MessageKind::Section => println!("\n{text}"),
            _ => println!("{text}"),
        }
    }
}

/// Unwraps the I/O failure behind a prompt error so its kind (for example
/// `Interrupted`) survives.
fn prompt_error(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(err) => err,
    }
}

/// Console fed from a queue of prepared lines; output is captured as plain text.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Rendered messages, one entry per emitted message.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// The transcript joined with newlines.
    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }

    fn emit(&mut self, kind: MessageKind, message: &str) {
        self.transcript.push(plain_text(kind, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_console_replays_inputs_then_ends() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(console.read_line("A").unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line("B").unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line("C").unwrap(), None);
        assert_eq!(console.prompts(), ["A", "B", "C"]);
    }

    #[test]
    fn prompt_errors_keep_their_io_kind() {
        let err = dialoguer::Error::from(io::Error::from(io::ErrorKind::Interrupted));
        assert_eq!(prompt_error(err).kind(), io::ErrorKind::Interrupted);
    }

    #[test]
    fn scripted_console_captures_plain_output() {
        let mut console = ScriptedConsole::default();
        console.warning("careful");
        console.section("TITLE");
        console.line(format_args!("{:<4}|", "ab"));
        assert_eq!(console.transcript(), ["[!] careful", "=== TITLE ===", "ab  |"]);
        assert!(console.output().contains("careful"));
    }
}

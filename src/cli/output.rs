use colored::Colorize;

/// Message categories used by the console helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Table rows and other preformatted text.
    Plain,
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "[✓]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Plain | MessageKind::Info | MessageKind::Section => "",
    }
}

/// Renders a message without colour, as written to transcripts and pipes.
pub fn plain_text(kind: MessageKind, message: &str) -> String {
    match kind {
        MessageKind::Section => format!("=== {} ===", message.trim()),
        _ => {
            let icon = icon(kind);
            if icon.is_empty() {
                message.to_string()
            } else {
                format!("{icon} {message}")
            }
        }
    }
}

/// Renders a message with terminal colours.
pub fn styled_text(kind: MessageKind, message: &str) -> String {
    let formatted = plain_text(kind, message);
    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info | MessageKind::Plain => formatted,
    }
}

//! Prompting capability used by the session and the writer
//!
//! The terminal implementation lives in `tui`; tests drive the same flow with a
//! scripted prompter.

use crate::writer::OverwriteChoice;
use std::io;
use std::path::Path;

/// Source of user answers
pub trait Prompter {
    /// Read one line of input
    ///
    /// `None` or a blank line means "use the default".
    fn input(&mut self, message: &str, default: &str) -> io::Result<Option<String>>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        let answer = self.input(&format!("{} ({})", message, hint), "")?;
        Ok(parse_yes_no(answer.as_deref(), default))
    }

    /// Ask what to do with a file that already exists
    fn choose_overwrite(&mut self, path: &Path) -> io::Result<OverwriteChoice> {
        let message = format!(
            "File exists: {}\nOverwrite this file? (y=Yes / n=No / a=All / s=Skip all)",
            path.display()
        );
        let answer = self.input(&message, "n")?;
        Ok(OverwriteChoice::parse(answer.as_deref().unwrap_or("")))
    }

    /// Show a short message, e.g. why an answer was rejected
    fn notice(&mut self, _message: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Interpret a yes/no answer; blank keeps the default and anything else is "no"
pub fn parse_yes_no(answer: Option<&str>, default: bool) -> bool {
    match answer.map(|a| a.trim().to_lowercase()) {
        None => default,
        Some(a) if a.is_empty() => default,
        Some(a) => a == "y" || a == "yes",
    }
}

/// Prompt until a non-blank answer is given
pub fn prompt_required<P: Prompter + ?Sized>(prompter: &mut P, message: &str) -> io::Result<String> {
    loop {
        if let Some(answer) = prompter.input(message, "")? {
            let trimmed = answer.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
        prompter.notice("Please provide a value.")?;
    }
}

/// Prompt once; blank answers are returned as an empty string
pub fn prompt_optional<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
    default: &str,
) -> io::Result<String> {
    Ok(prompter
        .input(message, default)?
        .map(|answer| answer.trim().to_string())
        .unwrap_or_default())
}

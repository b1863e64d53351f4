//! Terminal implementation of the prompt and notice collaborators.
//!
//! # Invariants
//! - Ctrl-C, Ctrl-D and blank answers all mean "absent".
//! - Integer prompts never return a value that was not typed as a whole number.

use crate::shell::ShellIo;
use booklog_core::Prompter;
use log::warn;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const INPUT_PROMPT: &str = "> ";
const MENU_PROMPT: &str = ">> ";

/// Line-editing terminal front-end backed by rustyline.
pub struct TerminalPrompter {
    editor: DefaultEditor,
}

impl TerminalPrompter {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Some(line)
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(err) => {
                warn!("event=read_line module=cli status=error error={err}");
                None
            }
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask_text(&mut self, title: &str, message: &str) -> Option<String> {
        println!("[{title}] {message}");
        self.read_line(INPUT_PROMPT)
    }

    fn ask_integer(&mut self, title: &str, message: &str) -> Option<i64> {
        let answer = self.ask_text(title, message)?;
        match parse_integer_answer(&answer) {
            Ok(value) => value,
            Err(message) => {
                println!("{message}");
                None
            }
        }
    }
}

impl ShellIo for TerminalPrompter {
    fn show_menu(&mut self, menu: &str) {
        println!("{menu}");
    }

    fn read_menu_choice(&mut self) -> Option<String> {
        self.read_line(MENU_PROMPT)
    }

    fn show_notice(&mut self, title: &str, text: &str) {
        println!("\n== {title} ==\n{}\n", text.trim_end());
    }

    fn show_error(&mut self, text: &str) {
        eprintln!("Error: {text}");
    }
}

/// Blank means absent; anything else must be a whole number.
pub(crate) fn parse_integer_answer(answer: &str) -> Result<Option<i64>, String> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| format!("`{trimmed}` is not a whole number."))
}

//! Menu loop wiring catalog actions to the terminal.
//!
//! # Invariants
//! - A failed action is reported and the loop keeps running.
//! - End of input at the menu behaves like `Exit`.

use booklog_core::{run_action, ActionResult, CatalogAction, CatalogService, Prompter};
use log::{error, info};

/// Everything the menu loop needs from its front-end.
pub trait ShellIo: Prompter {
    /// Renders the action menu before each selection.
    fn show_menu(&mut self, menu: &str);
    /// Next menu selection, or `None` when input has ended.
    fn read_menu_choice(&mut self) -> Option<String>;
    fn show_notice(&mut self, title: &str, text: &str);
    fn show_error(&mut self, text: &str);
}

pub fn menu_text() -> String {
    let mut text = String::from("Library Management System\n");
    for (index, action) in CatalogAction::ALL.iter().enumerate() {
        text.push_str(&format!("  {}. {}\n", index + 1, action.label()));
    }
    text
}

/// Runs the menu until the user exits or input ends.
pub fn run<I: ShellIo>(service: &CatalogService, io: &mut I) {
    loop {
        io.show_menu(&menu_text());
        let Some(choice) = io.read_menu_choice() else {
            break;
        };

        let Some(action) = CatalogAction::from_menu_input(&choice) else {
            let choice = choice.trim();
            if !choice.is_empty() {
                io.show_error(&format!("unknown menu choice `{choice}`"));
            }
            continue;
        };

        match run_action(service, action, io) {
            Ok(ActionResult::Show(text)) => io.show_notice(action.label(), &text),
            Ok(ActionResult::Silent) => {}
            Ok(ActionResult::Exit) => break,
            Err(err) => {
                error!(
                    "event=shell_action module=cli status=error action={:?} error={}",
                    action, err
                );
                io.show_error(&err.to_string());
            }
        }
    }

    info!("event=shell_exit module=cli status=ok");
}

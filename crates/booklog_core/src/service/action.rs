//! Menu actions exposed to shells.
//!
//! # Responsibility
//! - Name the seven invocable actions and their menu labels.
//! - Run one action end to end: collect input, then apply it.
//!
//! # Invariants
//! - Cancelled input yields `ActionResult::Silent`; no notice is shown.
//! - `Exit` never touches storage.

use crate::input::{collect_add, collect_remove, collect_search, collect_update, Prompter};
use crate::service::catalog_service::{CatalogResult, CatalogService, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    Add,
    List,
    Remove,
    Search,
    Update,
    Report,
    Exit,
}

/// What the shell should do after an action ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Display this text in a notice.
    Show(String),
    /// Input was cancelled; show nothing.
    Silent,
    /// Leave the interface loop.
    Exit,
}

impl CatalogAction {
    /// Menu order.
    pub const ALL: [CatalogAction; 7] = [
        Self::Add,
        Self::List,
        Self::Remove,
        Self::Search,
        Self::Update,
        Self::Report,
        Self::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Book",
            Self::List => "Display Books",
            Self::Remove => "Remove Book",
            Self::Search => "Search Books",
            Self::Update => "Update Book",
            Self::Report => "Generate Report",
            Self::Exit => "Exit",
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::List => "list",
            Self::Remove => "remove",
            Self::Search => "search",
            Self::Update => "update",
            Self::Report => "report",
            Self::Exit => "exit",
        }
    }

    /// Parses a 1-based menu number, a keyword (`add`, `list`, ...) or a
    /// full label, ignoring case and surrounding whitespace.
    pub fn from_menu_input(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| Self::ALL.get(index).copied());
        }

        Self::ALL.into_iter().find(|action| {
            action.keyword().eq_ignore_ascii_case(input) || action.label().eq_ignore_ascii_case(input)
        })
    }
}

/// Runs `action`, asking `prompter` for whatever input it needs.
pub fn run_action(
    service: &CatalogService,
    action: CatalogAction,
    prompter: &mut dyn Prompter,
) -> CatalogResult<ActionResult> {
    let outcome = match action {
        CatalogAction::Add => service.add(collect_add(prompter))?,
        CatalogAction::List => Outcome::Done(service.list()?),
        CatalogAction::Remove => service.remove(collect_remove(prompter))?,
        CatalogAction::Search => service.search(collect_search(prompter))?,
        CatalogAction::Update => service.update(collect_update(prompter))?,
        CatalogAction::Report => Outcome::Done(service.report()?),
        CatalogAction::Exit => return Ok(ActionResult::Exit),
    };

    Ok(match outcome {
        Outcome::Done(text) => ActionResult::Show(text),
        Outcome::Cancelled => ActionResult::Silent,
    })
}

//! Parses terminal input lines into catalog commands.

use catalog_core::{Command, ViewState};
use shared::{
    domain::{Item, ItemId, PageSize},
    error::DomainError,
};
use thiserror::Error;

pub const USAGE: &str = "commands: search <text> | clear | sort | next | prev | size <10|20|50> | \
select <id> | add <id> | remove <id> | retry | cart | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Command(Command),
    ShowCart,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not an item id")]
    InvalidId(String),
    #[error("already on the first page")]
    PreviousDisabled,
    #[error("item {0} is neither on this page nor in the cart")]
    UnknownItem(ItemId),
    #[error(transparent)]
    PageSize(#[from] DomainError),
}

pub fn parse_line(line: &str, view: &ViewState) -> Result<CliAction, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, rest) = match line.trim_start().split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim(), ""),
    };

    let action = match verb {
        "search" => CliAction::Command(Command::SetSearchTerm(rest.to_string())),
        "clear" => CliAction::Command(Command::SetSearchTerm(String::new())),
        "sort" => CliAction::Command(Command::ToggleSortOrder),
        "next" => CliAction::Command(Command::NextPage),
        "prev" => {
            if view.previous_disabled {
                return Err(InputError::PreviousDisabled);
            }
            CliAction::Command(Command::PreviousPage)
        }
        "size" => {
            let size: PageSize = required(rest, "size")?.parse()?;
            CliAction::Command(Command::SetPageSize(size))
        }
        "select" => CliAction::Command(Command::ToggleSelection(parse_id(required(
            rest, "select",
        )?)?)),
        "add" => {
            let id = parse_id(required(rest, "add")?)?;
            CliAction::Command(Command::AddToCart(lookup(view, id)?))
        }
        "remove" => {
            let id = parse_id(required(rest, "remove")?)?;
            CliAction::Command(Command::RemoveFromCart(lookup(view, id)?))
        }
        "retry" => CliAction::Command(Command::Retry),
        "cart" => CliAction::ShowCart,
        "help" | "" => CliAction::Help,
        "quit" | "exit" => CliAction::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    Ok(action)
}

fn required<'a>(rest: &'a str, verb: &'static str) -> Result<&'a str, InputError> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(InputError::MissingArgument(verb));
    }
    Ok(rest)
}

fn parse_id(raw: &str) -> Result<ItemId, InputError> {
    raw.parse::<i64>()
        .map(ItemId)
        .map_err(|_| InputError::InvalidId(raw.to_string()))
}

/// Visible items win over cart snapshots so re-adding uses the fresh record.
fn lookup(view: &ViewState, id: ItemId) -> Result<Item, InputError> {
    view.visible_items
        .iter()
        .find(|item| item.id == id)
        .or_else(|| view.cart.latest_snapshot(id))
        .cloned()
        .ok_or(InputError::UnknownItem(id))
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;

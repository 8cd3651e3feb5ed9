//! Interactive command parsing.

use std::path::PathBuf;
use std::str::FromStr;

use datatable_lib::PaginationSummary;
use datatable_lib::events::TableEvent;
use thiserror::Error;

/// Error parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{value}' is not {expected}")]
    InvalidArgument {
        value: String,
        expected: &'static str,
    },
}

/// Pagination button targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Prev,
    Next,
    Last,
    /// 1-based page number as typed by the user.
    Number(usize),
}

impl PageTarget {
    /// Resolves the target to a page index using the current footer figures.
    pub fn resolve(self, summary: &PaginationSummary) -> usize {
        match self {
            PageTarget::First => summary.first_page_index,
            PageTarget::Prev => summary.prev_page_index,
            PageTarget::Next => summary.next_page_index,
            PageTarget::Last => summary.last_page_index,
            PageTarget::Number(n) => n.saturating_sub(1),
        }
    }
}

impl FromStr for PageTarget {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" | "⏮" => Ok(PageTarget::First),
            "prev" | "◀" => Ok(PageTarget::Prev),
            "next" | "▶" => Ok(PageTarget::Next),
            "last" | "⏭" => Ok(PageTarget::Last),
            other => other
                .parse()
                .map(PageTarget::Number)
                .map_err(|_| CommandError::InvalidArgument {
                    value: other.to_string(),
                    expected: "first, prev, next, last or a page number",
                }),
        }
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Sort(String),
    Page(PageTarget),
    Size(usize),
    Search(String),
    Reload(PathBuf),
    Show,
    Help,
    Quit,
}

impl Command {
    /// Converts the command into a table event.
    ///
    /// Returns `None` for commands handled by the host itself.
    pub fn into_event(self, summary: &PaginationSummary) -> Option<TableEvent> {
        match self {
            Command::Sort(key) => Some(TableEvent::SortRequested(key)),
            Command::Page(target) => Some(TableEvent::PageRequested(target.resolve(summary))),
            Command::Size(size) => Some(TableEvent::PageSizeChanged(size)),
            Command::Search(query) => Some(TableEvent::SearchChanged(query)),
            Command::Reload(_) | Command::Show | Command::Help | Command::Quit => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "sort" => required(rest, "sort", "a column key").map(|key| Command::Sort(key.to_string())),
            "page" => required(rest, "page", "a page target")?.parse().map(Command::Page),
            "size" => {
                let value = required(rest, "size", "a page size")?;
                value
                    .parse()
                    .map(Command::Size)
                    .map_err(|_| CommandError::InvalidArgument {
                        value: value.to_string(),
                        expected: "a page size",
                    })
            }
            // Search keeps inner whitespace; a bare `search` clears it
            "search" | "/" => Ok(Command::Search(rest.to_string())),
            "reload" => required(rest, "reload", "a dataset path").map(|p| Command::Reload(PathBuf::from(p))),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn required<'a>(rest: &'a str, command: &'static str, expected: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

/// Help text for the interactive loop.
pub const HELP: &str = "\
commands:
  sort <key>                         sort the current page by a column
  page first|prev|next|last|<n>      go to a page
  size <n>                           change the page size
  search <query>                     filter the current page (bare 'search' clears)
  reload <path>                      load a new dataset
  show                               redraw the table
  help                               show this help
  quit                               exit";

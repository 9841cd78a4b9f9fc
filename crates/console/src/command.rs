//! Command parsing for the console frontend

use todo_core::todo::FilterStatus;

pub const USAGE: &str = "\
commands:
  add <title>           create a todo
  rm <id>               delete a todo
  toggle <id>           flip a todo's completed flag
  edit <id> <title>     rename a todo
  clear                 delete all completed todos
  toggle-all            complete everything (or un-complete, if all done)
  filter <all|active|completed>
  dismiss               hide the current error message
  list                  show the current list
  help                  this text
  quit                  exit";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Remove(i64),
    Toggle(i64),
    Edit(i64, String),
    Clear,
    ToggleAll,
    Filter(FilterStatus),
    Dismiss,
    List,
    Help,
    Quit,
}

/// Parse one input line.
///
/// Returns `None` for blank lines; malformed input yields a message
/// suitable for direct display.
pub fn parse(line: &str) -> Option<Result<Command, String>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb {
        // empty titles flow through so validation lives in one place
        "add" => Ok(Command::Add(rest.to_string())),
        "rm" | "del" => parse_id(rest).map(Command::Remove),
        "toggle" | "done" => parse_id(rest).map(Command::Toggle),
        "edit" => match rest.split_once(char::is_whitespace) {
            Some((id, title)) if !title.trim().is_empty() => {
                parse_id(id).map(|id| Command::Edit(id, title.trim().to_string()))
            }
            _ => Err("usage: edit <id> <title>".to_string()),
        },
        "clear" => Ok(Command::Clear),
        "toggle-all" => Ok(Command::ToggleAll),
        "filter" => rest.parse::<FilterStatus>().map(Command::Filter),
        "dismiss" => Ok(Command::Dismiss),
        "list" | "ls" => Ok(Command::List),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command: {} (try 'help')", other)),
    };

    Some(command)
}

fn parse_id(s: &str) -> Result<i64, String> {
    s.parse::<i64>()
        .map_err(|_| format!("expected a todo id, got {:?}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(line: &str) -> Command {
        parse(line).expect("not blank").expect("parses")
    }

    #[test]
    fn test_blank_lines_ignored() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
    }

    #[test]
    fn test_add_keeps_rest_verbatim() {
        assert_eq!(ok("add Buy milk"), Command::Add("Buy milk".to_string()));
        // empty title parses; the coordinator rejects it
        assert_eq!(ok("add"), Command::Add(String::new()));
    }

    #[test]
    fn test_ids() {
        assert_eq!(ok("rm 42"), Command::Remove(42));
        assert_eq!(ok("del 42"), Command::Remove(42));
        assert_eq!(ok("toggle 7"), Command::Toggle(7));
        assert!(parse("rm forty-two").unwrap().is_err());
    }

    #[test]
    fn test_edit() {
        assert_eq!(
            ok("edit 3 Buy bread"),
            Command::Edit(3, "Buy bread".to_string())
        );
        assert!(parse("edit 3").unwrap().is_err());
        assert!(parse("edit 3   ").unwrap().is_err());
    }

    #[test]
    fn test_filter() {
        assert_eq!(ok("filter active"), Command::Filter(FilterStatus::Active));
        assert_eq!(ok("filter all"), Command::Filter(FilterStatus::All));
        assert!(parse("filter done").unwrap().is_err());
    }

    #[test]
    fn test_bare_verbs() {
        assert_eq!(ok("clear"), Command::Clear);
        assert_eq!(ok("toggle-all"), Command::ToggleAll);
        assert_eq!(ok("dismiss"), Command::Dismiss);
        assert_eq!(ok("ls"), Command::List);
        assert_eq!(ok("q"), Command::Quit);
    }

    #[test]
    fn test_unknown_verb() {
        let err = parse("frobnicate").unwrap().unwrap_err();
        assert!(err.contains("unknown command"));
    }
}

//! The interactive session.
//!
//! Each input line becomes one or more [`Event`]s for the API; after every
//! event the whole screen is redrawn from the returned snapshot. Lines that
//! start with `:` are commands, anything else is a query:
//!
//! ```text
//! ana          type "ana" into the box, then press Enter
//! :type ana    type "ana" without pressing Enter
//! :clear       empty the box
//! :enter       press Enter
//! :view 2      open the details of result 2   (also :v 2)
//! :close       close the details               (also :c)
//! :help        show this list
//! :quit        leave                           (also :q, or end of input)
//! ::text       a query that starts with ':'
//! ```

use super::render::Screen;
use dirsearch::api::{CmdMessage, DirectoryApi, Event};
use dirsearch::error::Result;
use dirsearch::index::DisplayIndex;
use std::io::{BufRead, Write};

const PROMPT: &str = "search> ";

const HELP_LINES: &[&str] = &[
    "<text>        search for <text>",
    ":type <text>  change the query without submitting",
    ":clear        clear the query",
    ":enter        submit the current query",
    ":view <N>     show details for result N (:v)",
    ":close        close the details (:c)",
    ":help         show this help",
    ":quit         exit (:q)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Events(Vec<Event>),
    Help,
    Quit,
    Invalid(String),
}

/// Parses one input line (without its line terminator).
pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(literal) = line.strip_prefix("::") {
        return query(format!(":{}", literal));
    }

    let Some(command) = line.strip_prefix(':') else {
        return query(line.to_string());
    };

    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg),
        None => (command, ""),
    };

    match name {
        "type" | "t" => ReplCommand::Events(vec![Event::TextChanged(arg.to_string())]),
        "clear" => ReplCommand::Events(vec![Event::TextChanged(String::new())]),
        "enter" | "e" => ReplCommand::Events(vec![Event::Commit]),
        "view" | "v" => match arg.parse::<DisplayIndex>() {
            Ok(index) => ReplCommand::Events(vec![Event::ViewDetails(index)]),
            Err(e) => ReplCommand::Invalid(e.to_string()),
        },
        "close" | "c" => ReplCommand::Events(vec![Event::Close]),
        "help" | "h" | "?" => ReplCommand::Help,
        "quit" | "q" | "exit" => ReplCommand::Quit,
        other => ReplCommand::Invalid(format!(
            "Unknown command ':{}' (try :help)",
            other
        )),
    }
}

fn query(text: String) -> ReplCommand {
    ReplCommand::Events(vec![Event::TextChanged(text), Event::Commit])
}

/// Runs the session until `:quit` or end of input.
pub fn run_repl<R: BufRead, W: Write>(
    api: &mut DirectoryApi,
    mut input: R,
    out: &mut W,
    screen: &Screen,
) -> Result<()> {
    let policy = api.policy();
    writeln!(
        out,
        "Searching {} people ({} mode). Type :help for commands.",
        api.store().len(),
        policy
    )?;
    write!(out, "{}", screen.frame(&api.snapshot(), policy, true))?;

    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_line(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Help => {
                let lines: Vec<String> = HELP_LINES.iter().map(|l| l.to_string()).collect();
                write!(out, "{}", screen.text_list(&lines, ""))?;
            }
            ReplCommand::Invalid(reason) => {
                write!(out, "{}", screen.messages(&[CmdMessage::error(reason)]))?;
            }
            ReplCommand::Events(events) => {
                let mut last = None;
                for event in events {
                    match api.dispatch(event) {
                        Ok(result) => last = Some(result),
                        Err(e) => {
                            last = Some(api.snapshot().with_message(CmdMessage::error(e.to_string())));
                            break;
                        }
                    }
                }
                if let Some(result) = last {
                    write!(out, "{}", screen.frame(&result, policy, true))?;
                }
            }
        }
    }

    log::debug!("interactive session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirsearch::controller::Policy;
    use dirsearch::model::PersonRecord;
    use dirsearch::store::RecordStore;

    fn people() -> RecordStore {
        RecordStore::new(vec![
            PersonRecord::new("Ana", "Lee", "1 Elm St", "555-0100"),
            PersonRecord::new("Bo", "Ng", "2 Oak Ave", "555-0101"),
            PersonRecord::new("Anab", "Roy", "3 Pine Rd", "555-0102"),
        ])
    }

    fn session(policy: Policy, input: &str) -> String {
        let mut api = DirectoryApi::new(people(), policy);
        let mut out = Vec::new();
        run_repl(&mut api, input.as_bytes(), &mut out, &Screen::plain()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_line_is_type_then_enter() {
        assert_eq!(
            parse_line("an\n"),
            ReplCommand::Events(vec![Event::TextChanged("an".into()), Event::Commit])
        );
    }

    #[test]
    fn test_query_keeps_inner_spaces() {
        assert_eq!(
            parse_line("  ana lee \r\n"),
            ReplCommand::Events(vec![
                Event::TextChanged("  ana lee ".into()),
                Event::Commit
            ])
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            parse_line(":type bo"),
            ReplCommand::Events(vec![Event::TextChanged("bo".into())])
        );
        assert_eq!(
            parse_line(":clear"),
            ReplCommand::Events(vec![Event::TextChanged(String::new())])
        );
        assert_eq!(parse_line(":enter"), ReplCommand::Events(vec![Event::Commit]));
        assert_eq!(
            parse_line(":v 2"),
            ReplCommand::Events(vec![Event::ViewDetails(DisplayIndex(2))])
        );
        assert_eq!(parse_line(":c"), ReplCommand::Events(vec![Event::Close]));
        assert_eq!(parse_line(":help"), ReplCommand::Help);
        assert_eq!(parse_line(":q"), ReplCommand::Quit);
    }

    #[test]
    fn test_double_colon_is_literal() {
        assert_eq!(
            parse_line("::x"),
            ReplCommand::Events(vec![Event::TextChanged(":x".into()), Event::Commit])
        );
    }

    #[test]
    fn test_invalid_commands() {
        assert!(matches!(parse_line(":view"), ReplCommand::Invalid(_)));
        assert!(matches!(parse_line(":view 0"), ReplCommand::Invalid(_)));
        assert!(matches!(parse_line(":bogus"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_live_session_starts_empty() {
        let out = session(Policy::Live, ":q\n");
        assert!(out.contains("Searching 3 people (live mode)"));
        assert!(out.contains("Start typing to search."));
    }

    #[test]
    fn test_submit_session_starts_full() {
        let out = session(Policy::Submit, ":q\n");
        assert!(out.contains("3 people\n"));
        assert!(out.contains("Bo Ng"));
    }

    #[test]
    fn test_search_then_view_then_close() {
        let out = session(Policy::Live, "an\n:view 2\n:close\n");
        assert!(out.contains("1. Ana Lee"));
        assert!(out.contains("2. Anab Roy"));
        assert!(out.contains("Name: Anab Roy"));
        assert!(out.contains("Profile Image: Not available"));

        let after_close = out.rsplit("search> ").nth(1).unwrap();
        assert!(!after_close.contains("Name:"));
    }

    #[test]
    fn test_out_of_range_view_reports_error() {
        let out = session(Policy::Live, "bo\n:view 5\n");
        assert!(out.contains("No result at index 5 (1 shown)"));
    }

    #[test]
    fn test_submit_type_without_enter_keeps_results() {
        let out = session(Policy::Submit, ":type zz\n:enter\n");
        let frames: Vec<&str> = out.split("search> ").collect();
        assert!(frames[1].contains("3 people"));
        assert!(frames[2].contains("No results found!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = session(Policy::Live, "");
        assert!(out.ends_with("search> \n"));
    }

    #[test]
    fn test_help() {
        let out = session(Policy::Live, ":help\n");
        assert!(out.contains(":view <N>"));
    }
}

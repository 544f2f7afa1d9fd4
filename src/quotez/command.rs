//! Parser for the interactive shell's command lines.
//!
//! A line is an action optionally followed by `?` and `&`-separated
//! `key=value` parameters:
//!
//! ```text
//! list
//! list?page=2
//! delete?id=3
//! 삭제?id=3
//! ```
//!
//! Actions have an English name and a Korean alias.

use crate::error::{QuotezError, Result};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    List { page: Option<usize> },
    Show { id: u64 },
    Modify { id: u64 },
    Delete { id: u64 },
    Build,
    Sample { count: usize },
    Exit,
}

impl FromStr for Command {
    type Err = QuotezError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (action, query) = match line.split_once('?') {
            Some((action, query)) => (action.trim(), query),
            None => (line, ""),
        };
        let params = parse_params(query)?;

        match action {
            "add" | "등록" => Ok(Command::Add),
            "list" | "목록" => Ok(Command::List {
                page: optional_number(&params, "page")?,
            }),
            "show" | "조회" => Ok(Command::Show {
                id: required_number(&params, "id")?,
            }),
            "modify" | "수정" => Ok(Command::Modify {
                id: required_number(&params, "id")?,
            }),
            "delete" | "삭제" => Ok(Command::Delete {
                id: required_number(&params, "id")?,
            }),
            "build" | "빌드" => Ok(Command::Build),
            "sample" | "샘플" => Ok(Command::Sample {
                count: required_number(&params, "count")?,
            }),
            "exit" | "종료" => Ok(Command::Exit),
            "" => Err(QuotezError::Command("empty command".into())),
            other => Err(QuotezError::Command(format!("unknown action '{}'", other))),
        }
    }
}

fn parse_params(query: &str) -> Result<HashMap<&str, &str>> {
    let mut params = HashMap::new();
    for pair in query.split('&').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| QuotezError::Command(format!("expected key=value, got '{}'", pair)))?;
        params.insert(key.trim(), value.trim());
    }
    Ok(params)
}

fn optional_number<T: FromStr>(params: &HashMap<&str, &str>, key: &str) -> Result<Option<T>> {
    params
        .get(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| {
                QuotezError::Command(format!("'{}' must be a number, got '{}'", key, raw))
            })
        })
        .transpose()
}

fn required_number<T: FromStr>(params: &HashMap<&str, &str>, key: &str) -> Result<T> {
    optional_number(params, key)?
        .ok_or_else(|| QuotezError::Command(format!("missing parameter '{}'", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command> {
        line.parse()
    }

    #[test]
    fn parses_bare_actions() {
        assert_eq!(parse("add").unwrap(), Command::Add);
        assert_eq!(parse("build").unwrap(), Command::Build);
        assert_eq!(parse("exit").unwrap(), Command::Exit);
        assert_eq!(parse("list").unwrap(), Command::List { page: None });
    }

    #[test]
    fn parses_korean_aliases() {
        assert_eq!(parse("등록").unwrap(), Command::Add);
        assert_eq!(parse("삭제?id=1").unwrap(), Command::Delete { id: 1 });
        assert_eq!(parse("수정?id=2").unwrap(), Command::Modify { id: 2 });
        assert_eq!(parse("종료").unwrap(), Command::Exit);
    }

    #[test]
    fn parses_parameters() {
        assert_eq!(parse("list?page=2").unwrap(), Command::List { page: Some(2) });
        assert_eq!(parse("show?id=12").unwrap(), Command::Show { id: 12 });
        assert_eq!(
            parse("sample?count=10").unwrap(),
            Command::Sample { count: 10 }
        );
    }

    #[test]
    fn tolerates_whitespace_and_extra_params() {
        assert_eq!(
            parse("  delete ? id = 4 & note=x ").unwrap(),
            Command::Delete { id: 4 }
        );
    }

    #[test]
    fn missing_required_param_is_an_error() {
        assert!(matches!(parse("delete"), Err(QuotezError::Command(_))));
        assert!(matches!(parse("modify?"), Err(QuotezError::Command(_))));
    }

    #[test]
    fn non_numeric_param_is_an_error() {
        assert!(matches!(parse("delete?id=abc"), Err(QuotezError::Command(_))));
        assert!(matches!(parse("list?page=-1"), Err(QuotezError::Command(_))));
    }

    #[test]
    fn pair_without_equals_is_an_error() {
        assert!(matches!(parse("delete?id"), Err(QuotezError::Command(_))));
    }

    #[test]
    fn unknown_and_empty_actions_are_errors() {
        assert!(matches!(parse("launch"), Err(QuotezError::Command(_))));
        assert!(matches!(parse("   "), Err(QuotezError::Command(_))));
    }
}

//! Run a parsed subcommand against the text helpers

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::Command;
use crate::error::{Error, Result};
use crate::output::{Outcome, Value};
use crate::text::{
    centered, clean_whitespace, cmp_fold, commas, elide_middle, longest_common_path,
    longest_common_prefix, string_for_slice, title_case,
};

/// Run a command, reading from stdin when it needs input and none was given
pub fn execute(command: &Command) -> Result<Outcome> {
    execute_with(command, io::stdin())
}

/// Run a command with `stdin` as the fallback input source
pub fn execute_with<R: Read>(command: &Command, stdin: R) -> Result<Outcome> {
    let name = command.name();
    debug!(command = name, "executing");

    let outcome = match command {
        Command::Center { text, width, pad } => {
            let pad = single_char(pad)?;
            let padded = centered(text, pad, *width);
            Outcome::new(name, Value::Text(text.clone()), Value::Text(padded.into_owned()))
        }
        Command::Clean { text, input } => {
            let source = read_text(text.as_deref(), input.as_deref(), stdin)?;
            let cleaned = clean_whitespace(&source);
            Outcome::new(name, Value::Text(source), Value::Text(cleaned))
        }
        Command::Elide { text, width } => {
            let elided = elide_middle(text, *width);
            debug!(
                width,
                before = text.chars().count(),
                after = elided.chars().count(),
                "elided"
            );
            Outcome::new(name, Value::Text(text.clone()), Value::Text(elided.into_owned()))
        }
        Command::Prefix { items, path } => {
            let prefix = if *path {
                longest_common_path(items).to_string_lossy().into_owned()
            } else {
                longest_common_prefix(items)
            };
            debug!(items = items.len(), path, "found common prefix");
            Outcome::new(name, Value::List(items.clone()), Value::Text(prefix))
        }
        Command::Commas { number } => {
            let grouped = group_number(number)?;
            Outcome::new(name, Value::Text(number.clone()), Value::Text(grouped))
        }
        Command::Sort { items, input } => {
            let items = if items.is_empty() {
                let source = read_text(None, input.as_deref(), stdin)?;
                source
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string)
                    .collect()
            } else {
                items.clone()
            };

            let mut sorted = items.clone();
            sorted.sort_by(|a, b| cmp_fold(a, b));
            debug!(items = sorted.len(), "sorted");
            Outcome::new(name, Value::List(items), Value::List(sorted))
        }
        Command::Title { text, input } => {
            let source = read_text(text.as_deref(), input.as_deref(), stdin)?;
            let source = source.trim_end_matches(['\n', '\r']).to_string();
            let titled = title_case(&source);
            Outcome::new(name, Value::Text(source), Value::Text(titled))
        }
        Command::Join { items, sep } => {
            let joined = string_for_slice(items, sep);
            Outcome::new(name, Value::List(items.clone()), Value::Text(joined))
        }
    };

    Ok(outcome)
}

/// Pick the text argument, else the input file, else `stdin`
fn read_text<R: Read>(
    text: Option<&str>,
    input: Option<&Path>,
    mut stdin: R,
) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = input {
        debug!(path = %path.display(), "reading input file");
        return std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
            path: PathBuf::from(path),
            source,
        });
    }

    debug!("reading standard input");
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer).map_err(Error::Stdin)?;
    Ok(buffer)
}

fn single_char(pad: &str) -> Result<char> {
    let mut chars = pad.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidPad(pad.to_string())),
    }
}

/// Parse as signed first so negatives work, then unsigned for the top of u128
fn group_number(number: &str) -> Result<String> {
    let trimmed = number.trim();
    match trimmed.parse::<i128>() {
        Ok(value) => Ok(commas(value)),
        Err(source) => trimmed
            .parse::<u128>()
            .map(commas)
            .map_err(|_| Error::InvalidNumber {
                input: number.to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: Command) -> Outcome {
        execute_with(&command, io::empty()).unwrap()
    }

    fn output_text(outcome: &Outcome) -> &str {
        match &outcome.output {
            Value::Text(text) => text,
            Value::List(_) => panic!("Expected Text output"),
        }
    }

    #[test]
    fn test_center() {
        let outcome = run(Command::Center {
            text: "The Title".to_string(),
            width: 15,
            pad: " ".to_string(),
        });
        assert_eq!(output_text(&outcome), "   The Title   ");
    }

    #[test]
    fn test_center_rejects_long_pad() {
        let command = Command::Center {
            text: "x".to_string(),
            width: 5,
            pad: "ab".to_string(),
        };
        let err = execute_with(&command, io::empty()).unwrap_err();
        assert!(matches!(err, Error::InvalidPad(ref p) if p == "ab"));
    }

    #[test]
    fn test_elide() {
        let outcome = run(Command::Elide {
            text: "This is now far too long".to_string(),
            width: 19,
        });
        assert_eq!(output_text(&outcome), "This is no…too long");
    }

    #[test]
    fn test_clean_from_stdin() {
        let command = Command::Clean {
            text: None,
            input: None,
        };
        let outcome = execute_with(&command, "  a\t b \n".as_bytes()).unwrap();
        assert_eq!(output_text(&outcome), "a b");
    }

    #[test]
    fn test_title_strips_trailing_newline() {
        let command = Command::Title {
            text: None,
            input: None,
        };
        let outcome = execute_with(&command, "THIS AND THAT\n".as_bytes()).unwrap();
        assert_eq!(output_text(&outcome), "This And That");
    }

    #[test]
    fn test_prefix_modes() {
        let items = vec!["/srv/app/a".to_string(), "/srv/apple".to_string()];
        let chars = run(Command::Prefix {
            items: items.clone(),
            path: false,
        });
        assert_eq!(output_text(&chars), "/srv/app");

        let path = run(Command::Prefix { items, path: true });
        assert_eq!(output_text(&path), "/srv");
    }

    #[test]
    fn test_commas() {
        let grouped = |n: &str| {
            let outcome = run(Command::Commas {
                number: n.to_string(),
            });
            output_text(&outcome).to_string()
        };
        assert_eq!(grouped("-17392"), "-17,392");
        assert_eq!(grouped("0"), "0");
        assert_eq!(grouped("9879132421"), "9,879,132,421");
        assert_eq!(
            grouped("340282366920938463463374607431768211455"),
            "340,282,366,920,938,463,463,374,607,431,768,211,455"
        );
    }

    #[test]
    fn test_commas_rejects_garbage() {
        let command = Command::Commas {
            number: "12a".to_string(),
        };
        let err = execute_with(&command, io::empty()).unwrap_err();
        assert!(err.to_string().contains("'12a' is not an integer"));
    }

    #[test]
    fn test_sort_from_stdin() {
        let command = Command::Sort {
            items: vec![],
            input: None,
        };
        let outcome = execute_with(&command, "banana\nApple\n\ncherry\r\n".as_bytes()).unwrap();
        assert_eq!(
            outcome.output,
            Value::List(vec![
                "Apple".to_string(),
                "banana".to_string(),
                "cherry".to_string()
            ])
        );
    }

    #[test]
    fn test_join() {
        let outcome = run(Command::Join {
            items: vec!["a".to_string(), "b".to_string(), "c ".to_string()],
            sep: "-".to_string(),
        });
        assert_eq!(output_text(&outcome), "a-b-c");
    }

    #[test]
    fn test_missing_input_file() {
        let command = Command::Clean {
            text: None,
            input: Some(PathBuf::from("/definitely/not/here.txt")),
        };
        let err = execute_with(&command, io::empty()).unwrap_err();
        assert!(matches!(err, Error::ReadInput { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}

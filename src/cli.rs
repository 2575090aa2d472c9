use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "utext")]
#[command(author, version, about = "Unicode-aware text helpers for the shell")]
#[command(
    long_about = "Center, elide, clean up and title-case text, find common prefixes, \
    sort case-insensitively and group digits. Lengths are counted in characters, \
    not bytes."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Show a table for commands that work on several items
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Center text between runs of a padding character
    Center {
        text: String,

        /// Total width in characters
        #[arg(short, long, default_value_t = 80)]
        width: usize,

        /// Padding character
        #[arg(short, long, default_value = " ")]
        pad: String,
    },

    /// Collapse runs of whitespace to single spaces
    Clean {
        text: Option<String>,

        /// Read the text from a file instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Shorten text to a width by replacing its middle with an ellipsis
    Elide {
        text: String,

        /// Maximum width in characters
        #[arg(short, long)]
        width: usize,
    },

    /// Print the longest prefix shared by all items
    Prefix {
        #[arg(required = true)]
        items: Vec<String>,

        /// Compare whole path components instead of characters
        #[arg(long)]
        path: bool,
    },

    /// Group the digits of an integer with commas
    Commas {
        #[arg(allow_negative_numbers = true)]
        number: String,
    },

    /// Sort items case-insensitively (one per line when read from input)
    Sort {
        items: Vec<String>,

        /// Read the items from a file instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Lowercase text and capitalize the first letter of every word
    Title {
        text: Option<String>,

        /// Read the text from a file instead of stdin
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Join items with a separator
    Join {
        #[arg(required = true)]
        items: Vec<String>,

        /// Separator placed between items
        #[arg(short, long, default_value = " ")]
        sep: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Command {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Center { .. } => "center",
            Command::Clean { .. } => "clean",
            Command::Elide { .. } => "elide",
            Command::Prefix { .. } => "prefix",
            Command::Commas { .. } => "commas",
            Command::Sort { .. } => "sort",
            Command::Title { .. } => "title",
            Command::Join { .. } => "join",
        }
    }
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Clean { text, input } | Command::Title { text, input } => {
                if text.is_some() && input.is_some() {
                    return Err(format!(
                        "{}: give either TEXT or --input, not both",
                        self.command.name()
                    ));
                }
            }
            Command::Sort { items, input } => {
                if !items.is_empty() && input.is_some() {
                    return Err("sort: give either ITEMS or --input, not both".to_string());
                }
            }
            _ => {}
        }

        if self.verbose && self.format == OutputFormat::Json {
            return Err("--verbose cannot be used with --format json".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("utext").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_elide() {
        let args = parse(&["elide", "some text", "-w", "5"]);
        assert!(args.validate().is_ok());
        match args.command {
            Command::Elide { text, width } => {
                assert_eq!(text, "some text");
                assert_eq!(width, 5);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_number() {
        let args = parse(&["commas", "-17392"]);
        assert!(matches!(args.command, Command::Commas { ref number } if number == "-17392"));
    }

    #[test]
    fn test_center_defaults() {
        let args = parse(&["center", "x"]);
        match args.command {
            Command::Center { width, pad, .. } => {
                assert_eq!(width, 80);
                assert_eq!(pad, " ");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_text_and_input() {
        let args = parse(&["clean", "text", "--input", "file.txt"]);
        assert!(args.validate().unwrap_err().contains("not both"));
    }

    #[test]
    fn test_validate_rejects_verbose_json() {
        let args = parse(&["--format", "json", "-v", "sort", "b", "a"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_prefix_requires_items() {
        let result = Args::try_parse_from(["utext", "prefix"]);
        assert!(result.is_err());
    }
}

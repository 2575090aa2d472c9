//! Small Unicode-aware text helpers, plus the `utext` command-line front end.
//!
//! The helpers in [`text`] are pure functions re-exported here:
//!
//! ```
//! assert_eq!(utext::elide_middle("This is now far too long", 14), "This is…o long");
//! assert_eq!(utext::longest_common_prefix(&["fan", "fate", "fame"]), "fa");
//! assert_eq!(utext::commas(-17392), "-17,392");
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod text;

pub use error::{Error, Result};
pub use text::{
    ELLIPSIS, Integer, centered, clean_whitespace, cmp_fold, commas, elide_middle, less_fold,
    longest_common_path, longest_common_prefix, string_for_slice, title_case,
};

/// Package version, for diagnostics
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

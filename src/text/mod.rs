//! Pure text helpers. Every length in this module is counted in `char`s.

mod case;
mod elide;
mod join;
mod layout;
mod number;
mod prefix;

pub use case::{cmp_fold, less_fold, title_case};
pub use elide::{ELLIPSIS, elide_middle};
pub use join::string_for_slice;
pub use layout::{centered, clean_whitespace};
pub use number::{Integer, commas};
pub use prefix::{longest_common_path, longest_common_prefix};

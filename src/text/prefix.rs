//! Longest common prefixes of strings and paths

use std::path::{Path, PathBuf};

/// Return the longest prefix shared by every string in `items`
///
/// An empty collection gives `""` and a single item is returned whole.
/// Strings are compared `char` by `char` with no case folding, and the scan
/// stops at the first position where any other item is too short or differs
/// from the first item.
pub fn longest_common_prefix<S: AsRef<str>>(items: &[S]) -> String {
    let Some((first, rest)) = items.split_first() else {
        return String::new();
    };
    let first = first.as_ref();

    let mut others: Vec<_> = rest.iter().map(|s| s.as_ref().chars()).collect();
    let mut end = first.len();

    for (offset, c) in first.char_indices() {
        if !others.iter_mut().all(|chars| chars.next() == Some(c)) {
            end = offset;
            break;
        }
    }

    first[..end].to_string()
}

/// Return the longest leading run of whole path components shared by `paths`
///
/// Unlike [`longest_common_prefix`], `/srv/app` and `/srv/apple` share
/// `/srv` rather than `/srv/app`. An empty collection, or one with no shared
/// component, gives an empty path; a single path is returned as given.
pub fn longest_common_path<P: AsRef<Path>>(paths: &[P]) -> PathBuf {
    let Some((first, rest)) = paths.split_first() else {
        return PathBuf::new();
    };
    if rest.is_empty() {
        return first.as_ref().to_path_buf();
    }

    let mut others: Vec<_> = rest.iter().map(|p| p.as_ref().components()).collect();
    let mut common = PathBuf::new();

    for component in first.as_ref().components() {
        if !others
            .iter_mut()
            .all(|components| components.next() == Some(component))
        {
            break;
        }
        common.push(component);
    }

    common
}

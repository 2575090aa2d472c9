use std::borrow::Cow;

/// Marker inserted in place of the removed middle span
pub const ELLIPSIS: char = '…';

/// Shorten `s` to at most `width` characters by cutting out its middle
///
/// If `s` already fits it is returned borrowed and untouched. Otherwise the
/// middle is removed (slightly more from the right than the left) and a
/// single `…` takes its place, so `"This is now far too long"` at width 14
/// becomes `"This is…o long"`.
///
/// Widths are counted in `char`s, never bytes. There is no minimum width: for
/// very small widths the cut points are clamped to the ends of the string, so
/// with a width of 1 or less the result can be one char over the width
/// (`width == 0` gives just the ellipsis, `"abcd"` at width 1 gives `"a…"`).
pub fn elide_middle(s: &str, width: usize) -> Cow<'_, str> {
    let chars: Vec<char> = s.chars().collect();
    let size = chars.len();
    if size <= width {
        return Cow::Borrowed(s);
    }

    let diff = size - width;
    let left = diff / 2;
    // One extra on the right makes room for the ellipsis itself
    let right = diff - left + 1;
    let mid = size / 2;

    let head_end = mid.saturating_sub(left);
    let tail_start = (mid + right).min(size);

    let mut result = String::with_capacity(s.len());
    result.extend(&chars[..head_end]);
    result.push(ELLIPSIS);
    result.extend(&chars[tail_start..]);
    Cow::Owned(result)
}

use std::borrow::Cow;

/// Center `s` between runs of `pad` so the result is `width` chars wide
///
/// Strings already `width` chars or wider come back unchanged. When the
/// padding can't be split evenly the extra char goes on the right.
pub fn centered(s: &str, pad: char, width: usize) -> Cow<'_, str> {
    let size = s.chars().count();
    if size >= width {
        return Cow::Borrowed(s);
    }

    let remainder = width - size;
    let left = remainder / 2;
    let right = remainder - left;

    let mut result = String::with_capacity(s.len() + remainder * pad.len_utf8());
    result.extend(std::iter::repeat_n(pad, left));
    result.push_str(s);
    result.extend(std::iter::repeat_n(pad, right));
    Cow::Owned(result)
}

/// Collapse every run of whitespace to a single space and trim both ends
pub fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

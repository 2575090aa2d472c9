use std::fmt::Display;

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types that [`commas`] can group
pub trait Integer: Display + Copy + sealed::Sealed {}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl Integer for $t {}
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Format an integer with a comma between every group of three digits
///
/// `-17392` becomes `"-17,392"`; values of three digits or fewer are left
/// alone.
pub fn commas<T: Integer>(value: T) -> String {
    let rendered = value.to_string();
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", rendered.as_str()),
    };

    let mut result = String::with_capacity(rendered.len() + digits.len() / 3);
    result.push_str(sign);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

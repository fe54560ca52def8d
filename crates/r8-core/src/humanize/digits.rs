//! Unicode digit normalization.
//!
//! Text typed on Persian or Arabic keyboards carries digits from the
//! Extended Arabic-Indic (U+06F0..U+06F9) or Arabic-Indic (U+0660..U+0669)
//! blocks. Parsers downstream only understand ASCII digits.

const EXTENDED_ARABIC_INDIC_ZERO: u32 = 0x06F0;
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// Replace Persian and Arabic-Indic digits with their ASCII counterparts.
///
/// Every other character is kept as-is.
///
/// ```
/// use r8_core::humanize::normalize_digits;
///
/// assert_eq!(normalize_digits("۰۹۱۲-۳۴۵"), "0912-345");
/// assert_eq!(normalize_digits("tel: ٠٢١"), "tel: 021");
/// ```
pub fn normalize_digits(text: &str) -> String {
    text.chars().map(to_ascii_digit).collect()
}

fn to_ascii_digit(c: char) -> char {
    let code = c as u32;
    let offset = match code {
        0x06F0..=0x06F9 => code - EXTENDED_ARABIC_INDIC_ZERO,
        0x0660..=0x0669 => code - ARABIC_INDIC_ZERO,
        _ => return c,
    };
    // offset is 0..=9 here
    char::from_digit(offset, 10).unwrap_or(c)
}

/// Extension trait for normalizing digits in place of a free function call.
pub trait UnicodeDigitsExt {
    #[must_use]
    fn to_ascii_digits(&self) -> String;
}

impl UnicodeDigitsExt for str {
    #[inline]
    fn to_ascii_digits(&self) -> String {
        normalize_digits(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persian_digits() {
        assert_eq!(normalize_digits("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
    }

    #[test]
    fn test_arabic_indic_digits() {
        assert_eq!(normalize_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(normalize_digits("قیمت: 12 تومان"), "قیمت: 12 تومان");
        assert_eq!(normalize_digits(""), "");
    }

    #[test]
    fn test_extension_trait() {
        assert_eq!("۵۵۵".to_ascii_digits(), "555");
    }
}

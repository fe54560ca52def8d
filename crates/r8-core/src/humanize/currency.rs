//! Currency humanization.
//!
//! Two renderings of an amount entered as text:
//!
//! - [`group_thousands`]: `"1234567.5"` becomes `"1,234,568"`
//! - [`currency_words`]: `"1500000"` becomes `"1 میلیون و 500 هزار"`

use crate::errors::{R8Error, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Words used by [`currency_words`], smallest scale first.
///
/// Defaults are Persian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyUnits {
    pub zero: String,
    pub thousand: String,
    pub million: String,
    pub billion: String,
    pub thousand_billion: String,
    /// Joins the non-zero groups
    pub separator: String,
}

impl Default for CurrencyUnits {
    fn default() -> Self {
        Self {
            zero: "صفر".to_string(),
            thousand: "هزار".to_string(),
            million: "میلیون".to_string(),
            billion: "میلیارد".to_string(),
            thousand_billion: "هزار میلیارد".to_string(),
            separator: " و ".to_string(),
        }
    }
}

impl CurrencyUnits {
    /// Scale word per three-digit group; index 0 is the units group.
    fn scales(&self) -> [&str; 5] {
        [
            "",
            self.thousand.as_str(),
            self.million.as_str(),
            self.billion.as_str(),
            self.thousand_billion.as_str(),
        ]
    }
}

/// Render a decimal amount as a whole number with `,` between every three
/// digits.
///
/// The amount is rounded half away from zero. Returns `None` for empty
/// input and the text unchanged when it is not a decimal number. Zero
/// renders as an empty string.
///
/// ```
/// use r8_core::humanize::group_thousands;
///
/// assert_eq!(group_thousands("1234567").as_deref(), Some("1,234,567"));
/// assert_eq!(group_thousands("-999.5").as_deref(), Some("-1,000"));
/// assert_eq!(group_thousands("n/a").as_deref(), Some("n/a"));
/// assert_eq!(group_thousands(""), None);
/// ```
pub fn group_thousands(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let Some(amount) = parse_amount(text) else {
        return Some(text.to_string());
    };

    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return Some(String::new());
    }

    let grouped = insert_separators(&rounded.abs().to_string());
    Some(if rounded.is_sign_negative() {
        format!("-{}", grouped)
    } else {
        grouped
    })
}

/// Spell an amount as three-digit groups followed by their scale word.
///
/// `,` and `/` are stripped before parsing. Text that is not an unsigned
/// integer is returned unchanged. Zero groups are skipped.
///
/// # Errors
///
/// `UnitsExhausted` when the amount has more three-digit groups than
/// `units` has scale words (amounts of 10^15 and above).
pub fn currency_words(text: &str, units: &CurrencyUnits) -> Result<String> {
    let cleaned: String = text.chars().filter(|c| *c != ',' && *c != '/').collect();
    let Ok(price) = cleaned.trim().parse::<u64>() else {
        return Ok(text.to_string());
    };

    if price == 0 {
        return Ok(units.zero.clone());
    }

    let mut groups = Vec::new();
    let mut rest = price;
    while rest > 0 {
        groups.push(rest % 1000);
        rest /= 1000;
    }

    let scales = units.scales();
    if groups.len() > scales.len() {
        return Err(R8Error::UnitsExhausted {
            value: price,
            groups: groups.len(),
            available: scales.len(),
        });
    }

    let places: Vec<String> = groups
        .iter()
        .zip(scales)
        .rev()
        .filter(|(group, _)| **group != 0)
        .map(|(group, scale)| {
            if scale.is_empty() {
                group.to_string()
            } else {
                format!("{} {}", group, scale)
            }
        })
        .collect();

    Ok(places.join(&units.separator))
}

/// Parse `[+-]digits[,digits...][.digits]`. Amounts outside the 96-bit
/// decimal range are rejected.
fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.contains('_') {
        return None;
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned).ok()
}

fn insert_separators(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

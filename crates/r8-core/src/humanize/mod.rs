//! Humanization helpers for numbers shown to people
//!
//! - [`phones`]: group phone numbers into consecutive runs with compact labels
//! - [`currency`]: thousands grouping and Persian currency words
//! - [`digits`]: Persian / Arabic-Indic digit normalization
//! - [`numbers`]: small numeric conversions

pub mod currency;
pub mod digits;
pub mod numbers;
pub mod phones;

pub use currency::{currency_words, group_thousands, CurrencyUnits};
pub use digits::{normalize_digits, UnicodeDigitsExt};
pub use numbers::round_up;
pub use phones::{group_phone_numbers, HumanizePhones, PhoneGroup, PhoneGroups};

//! Phone number grouping.
//!
//! A switchboard usually owns blocks of consecutive numbers. Listing them
//! one by one is noisy, so numbers are sorted by their digit value, split
//! into maximal runs of consecutive values and each run gets a compact
//! label such as `0912000001-3`.
//!
//! ## Labels
//!
//! - A run of one number is labelled with the number itself.
//! - A longer run is labelled from its last two members: their shared
//!   character prefix, then the run's first member from the first differing
//!   column, a `-`, and the last member from that same column.
//!
//! Only the last pair decides the label. For `0919, 0920, 0921` the last
//! pair differs at column 3, so the label is `092` + `9` + `-` + `1`,
//! i.e. `0929-1`. Existing consumers match on these labels, so the rule is
//! kept as it is.

use crate::errors::{R8Error, Result};
use crate::humanize::digits::UnicodeDigitsExt;
use crate::{log_op_end, log_op_error, log_op_start};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One maximal run of consecutive numbers.
///
/// `numbers` keep their original formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneGroup {
    label: String,
    numbers: Vec<String>,
}

impl PhoneGroup {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    /// Members in the run; never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }
}

/// All runs of one grouping call, in ascending numeric order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneGroups(Vec<PhoneGroup>);

impl PhoneGroups {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhoneGroup> {
        self.0.iter()
    }

    /// First group carrying `label`.
    pub fn get(&self, label: &str) -> Option<&PhoneGroup> {
        self.0.iter().find(|g| g.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|g| g.label.as_str())
    }

    /// Label -> members view.
    ///
    /// Duplicate inputs produce repeated labels (`["555", "555"]` yields two
    /// runs labelled `555`); the first run keeps the key and later ones are
    /// only reachable through [`PhoneGroups::iter`].
    pub fn to_label_map(&self) -> IndexMap<String, Vec<String>> {
        let mut map = IndexMap::with_capacity(self.0.len());
        for group in &self.0 {
            map.entry(group.label.clone())
                .or_insert_with(|| group.numbers.clone());
        }
        map
    }

    pub fn into_vec(self) -> Vec<PhoneGroup> {
        self.0
    }
}

impl<'a> IntoIterator for &'a PhoneGroups {
    type Item = &'a PhoneGroup;
    type IntoIter = std::slice::Iter<'a, PhoneGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Convenience for calling the grouping on a list directly.
pub trait HumanizePhones {
    /// See [`group_phone_numbers`].
    ///
    /// # Errors
    ///
    /// Same as [`group_phone_numbers`].
    fn humanize_phones(&self) -> Result<PhoneGroups>;
}

impl<S: AsRef<str>> HumanizePhones for [S] {
    fn humanize_phones(&self) -> Result<PhoneGroups> {
        group_phone_numbers(self)
    }
}

/// Group phone numbers into maximal runs of consecutive values.
///
/// Non-digit characters are ignored when computing a number's value;
/// Persian and Arabic-Indic digits count as digits. Numbers with equal
/// values keep their input order and are never merged.
///
/// ```
/// use r8_core::humanize::group_phone_numbers;
///
/// let groups = group_phone_numbers(&["0912000003", "0912000001", "0912000002"]).unwrap();
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups.iter().next().unwrap().label(), "0912000001-3");
/// ```
///
/// # Errors
///
/// - `EmptyPhoneList` when `numbers` is empty
/// - `NoDigits` when an element has no digit characters
/// - `NumberOverflow` when an element's digits exceed `u64::MAX`
pub fn group_phone_numbers<S: AsRef<str>>(numbers: &[S]) -> Result<PhoneGroups> {
    log_op_start!("group_phone_numbers", input_len = numbers.len() as u64);
    let start = Instant::now();

    let groups = group_phone_numbers_impl(numbers).map_err(|e| {
        log_op_error!(
            "group_phone_numbers",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "group_phone_numbers",
        duration_ms = start.elapsed().as_millis() as u64,
        group_count = groups.len() as u64
    );

    Ok(groups)
}

fn group_phone_numbers_impl<S: AsRef<str>>(numbers: &[S]) -> Result<PhoneGroups> {
    if numbers.is_empty() {
        return Err(R8Error::EmptyPhoneList);
    }

    let mut parsed = numbers
        .iter()
        .map(|n| ParsedNumber::parse(n.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    // Stable: equal values keep input order.
    parsed.sort_by_key(|n| n.value);

    let groups = consecutive_runs(parsed)
        .iter()
        .map(|run| PhoneGroup {
            label: run_label(run),
            numbers: run.iter().map(|n| n.raw.to_string()).collect(),
        })
        .collect();

    Ok(PhoneGroups(groups))
}

/// Integer value of a number's digits, ignoring every other character.
///
/// # Errors
///
/// `NoDigits` or `NumberOverflow`, see [`group_phone_numbers`].
pub fn digit_value(number: &str) -> Result<u64> {
    let digits: String = number
        .to_ascii_digits()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return Err(R8Error::NoDigits {
            value: number.to_string(),
        });
    }

    // Only ASCII digits remain, so the parse can fail on range alone.
    digits.parse::<u64>().map_err(|_| R8Error::NumberOverflow {
        value: number.to_string(),
    })
}

#[derive(Debug, Clone, Copy)]
struct ParsedNumber<'a> {
    raw: &'a str,
    value: u64,
}

impl<'a> ParsedNumber<'a> {
    fn parse(raw: &'a str) -> Result<Self> {
        Ok(Self {
            raw,
            value: digit_value(raw)?,
        })
    }

    fn precedes(&self, next: &ParsedNumber<'_>) -> bool {
        self.value.checked_add(1) == Some(next.value)
    }
}

/// Split an ascending list into maximal runs; every number lands in exactly
/// one run.
fn consecutive_runs<'a>(sorted: Vec<ParsedNumber<'a>>) -> Vec<Vec<ParsedNumber<'a>>> {
    sorted
        .into_iter()
        .fold(Vec::new(), |mut runs: Vec<Vec<ParsedNumber<'a>>>, number| {
            match runs.last_mut() {
                Some(run) if run.last().is_some_and(|prev| prev.precedes(&number)) => {
                    run.push(number)
                }
                _ => runs.push(vec![number]),
            }
            runs
        })
}

fn run_label(run: &[ParsedNumber<'_>]) -> String {
    match run {
        [] => String::new(),
        [only] => only.raw.to_string(),
        [first, last] => pair_label(first.raw, first.raw, last.raw),
        [first, .., previous, last] => pair_label(first.raw, previous.raw, last.raw),
    }
}

/// Label for `current` against the member right before it.
///
/// Characters are compared column by column. A column missing from either
/// string counts as a mismatch, and a tail past the end of `first` is
/// empty.
fn pair_label(first: &str, previous: &str, current: &str) -> String {
    let previous: Vec<char> = previous.chars().collect();
    let current: Vec<char> = current.chars().collect();

    let mut label = String::with_capacity(current.len() * 2 + 1);
    for (column, ch) in current.iter().enumerate() {
        if previous.get(column) == Some(ch) {
            label.push(*ch);
            continue;
        }

        label.extend(first.chars().skip(column));
        label.push('-');
        label.extend(&current[column..]);
        return label;
    }

    label
}

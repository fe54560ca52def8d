//! Field-level change detection.
//!
//! Values are `serde_json::Value`, so equality is structural: nested
//! objects compare by content and key order does not matter.

use crate::errors::R8Error;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Insertion-ordered field name -> value bag.
pub type FieldValues = IndexMap<String, Value>;

/// Old and new values of the fields that changed.
///
/// Both maps always hold the same keys in the same order. A side that was
/// absent is recorded as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChangeSet")]
pub struct ChangeSet {
    old_values: FieldValues,
    new_values: FieldValues,
}

#[derive(Deserialize)]
struct RawChangeSet {
    old_values: FieldValues,
    new_values: FieldValues,
}

impl TryFrom<RawChangeSet> for ChangeSet {
    type Error = R8Error;

    /// Key sets must match; `new_values` is reordered to follow `old_values`.
    fn try_from(raw: RawChangeSet) -> Result<Self, Self::Error> {
        let RawChangeSet {
            old_values,
            mut new_values,
        } = raw;

        if old_values.len() != new_values.len() {
            return Err(mismatched_fields(&old_values, &new_values));
        }

        let mut ordered = FieldValues::with_capacity(new_values.len());
        for name in old_values.keys() {
            let Some(value) = new_values.shift_remove(name) else {
                return Err(mismatched_fields(&old_values, &new_values));
            };
            ordered.insert(name.clone(), value);
        }

        Ok(Self {
            old_values,
            new_values: ordered,
        })
    }
}

fn mismatched_fields(old_values: &FieldValues, new_values: &FieldValues) -> R8Error {
    let old: Vec<&str> = old_values.keys().map(String::as_str).collect();
    let new: Vec<&str> = new_values.keys().map(String::as_str).collect();
    R8Error::Serialization {
        message: format!(
            "change set fields differ: old_values {:?}, new_values {:?}",
            old, new
        ),
    }
}

/// One changed field, borrowed from a [`ChangeSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldChange<'a> {
    pub name: &'a str,
    pub old: &'a Value,
    pub new: &'a Value,
}

impl ChangeSet {
    pub fn old_values(&self) -> &FieldValues {
        &self.old_values
    }

    pub fn new_values(&self) -> &FieldValues {
        &self.new_values
    }

    pub fn is_empty(&self) -> bool {
        self.old_values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.old_values.len()
    }

    pub fn get(&self, field: &str) -> Option<FieldChange<'_>> {
        let (name, old) = self.old_values.get_key_value(field)?;
        let new = self.new_values.get(field)?;
        Some(FieldChange { name, old, new })
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldChange<'_>> {
        self.old_values.iter().filter_map(|(name, old)| {
            let new = self.new_values.get(name)?;
            Some(FieldChange { name, old, new })
        })
    }

    pub fn into_parts(self) -> (FieldValues, FieldValues) {
        (self.old_values, self.new_values)
    }

    fn record(&mut self, name: &str, old: Option<&Value>, new: Option<&Value>) {
        self.old_values
            .insert(name.to_string(), old.cloned().unwrap_or(Value::Null));
        self.new_values
            .insert(name.to_string(), new.cloned().unwrap_or(Value::Null));
    }
}

fn is_absent(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Diff two value bags over a whitelist of field names.
///
/// A field is reported when it is not excluded, at least one side holds a
/// non-null value, and the two sides are not equal. Output order follows
/// `field_names`.
///
/// ```
/// use r8_core::audit::{diff_fields, FieldValues};
/// use serde_json::json;
/// use std::collections::BTreeSet;
///
/// let current: FieldValues = [("Name".into(), json!("Bob")), ("Age".into(), json!(30))].into();
/// let original: FieldValues = [("Name".into(), json!("Bob")), ("Age".into(), json!(29))].into();
///
/// let changes = diff_fields(["Name", "Age"], &current, &original, &BTreeSet::new());
/// assert_eq!(changes.old_values()["Age"], json!(29));
/// assert_eq!(changes.new_values()["Age"], json!(30));
/// assert!(changes.get("Name").is_none());
/// ```
pub fn diff_fields<I, S>(
    field_names: I,
    current: &FieldValues,
    original: &FieldValues,
    excluded: &BTreeSet<String>,
) -> ChangeSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    field_names
        .into_iter()
        .filter(|name| !excluded.contains(name.as_ref()))
        .fold(ChangeSet::default(), |mut changes, name| {
            let name = name.as_ref();
            let new = current.get(name);
            let old = original.get(name);

            if !(is_absent(new) && is_absent(old)) && new != old {
                changes.record(name, old, new);
            }
            changes
        })
}

/// Tracking state of a record, as reported by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryState {
    Detached,
    Unchanged,
    Deleted,
    Modified,
    Added,
}

impl EntryState {
    /// Only inserts and updates carry field changes worth auditing.
    pub fn is_diffable(self) -> bool {
        matches!(self, EntryState::Modified | EntryState::Added)
    }
}

/// Snapshot of one tracked record: its id, state and both value bags.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySnapshot {
    row_id: String,
    state: EntryState,
    field_names: Vec<String>,
    current: FieldValues,
    original: FieldValues,
}

impl EntrySnapshot {
    pub fn new(row_id: impl Into<String>, state: EntryState) -> Self {
        Self {
            row_id: row_id.into(),
            state,
            field_names: Vec::new(),
            current: FieldValues::new(),
            original: FieldValues::new(),
        }
    }

    /// Build from two value bags. Field order is the current bag's keys
    /// followed by keys only present in the original bag.
    pub fn from_values(
        row_id: impl Into<String>,
        state: EntryState,
        current: FieldValues,
        original: FieldValues,
    ) -> Self {
        let mut field_names: Vec<String> = current.keys().cloned().collect();
        field_names.extend(
            original
                .keys()
                .filter(|k| !current.contains_key(k.as_str()))
                .cloned(),
        );

        Self {
            row_id: row_id.into(),
            state,
            field_names,
            current,
            original,
        }
    }

    /// Add one field; `None` means the side has no value.
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        current: Option<Value>,
        original: Option<Value>,
    ) -> Self {
        let name = name.into();
        if let Some(value) = current {
            self.current.insert(name.clone(), value);
        }
        if let Some(value) = original {
            self.original.insert(name.clone(), value);
        }
        if !self.field_names.contains(&name) {
            self.field_names.push(name);
        }
        self
    }

    pub fn row_id(&self) -> &str {
        &self.row_id
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    pub fn current_values(&self) -> &FieldValues {
        &self.current
    }

    pub fn original_values(&self) -> &FieldValues {
        &self.original
    }
}

/// Changes of a tracked entry; empty unless the entry is modified or added.
pub fn find_changes(entry: &EntrySnapshot, excluded: &BTreeSet<String>) -> ChangeSet {
    if !entry.state.is_diffable() {
        return ChangeSet::default();
    }
    diff_fields(&entry.field_names, &entry.current, &entry.original, excluded)
}

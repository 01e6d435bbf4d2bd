//! Field values exposed by records to generic list views.
//!
//! Records never expose their fields by name at runtime. Instead every
//! collection supplies typed accessors that return a borrowed [`FieldValue`]
//! for a record, or `None` when the record has no value for that field.

use chrono::NaiveDate;

/// A borrowed view of a single record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Free text or an enum rendered through its stable key.
    Text(&'a str),
    /// Any numeric field (amounts, percentages, counts).
    Number(f64),
    /// Calendar date.
    Date(NaiveDate),
    /// Tag-like list of strings.
    List(&'a [String]),
}

/// Type tag of a [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    List,
}

impl FieldValue<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Date(_) => FieldKind::Date,
            Self::List(_) => FieldKind::List,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDate> for FieldValue<'_> {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<'a> From<&'a [String]> for FieldValue<'a> {
    fn from(value: &'a [String]) -> Self {
        Self::List(value)
    }
}

/// A record with a stable identifier used as selection handle.
pub trait Identified {
    fn id(&self) -> &str;
}

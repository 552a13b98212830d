//! Predicate-as-data filter types.
//!
//! A [`Filter`] is a conjunction of field conditions built through a small
//! builder DSL rather than arbitrary executable code, keeping the store
//! translation layer simple and the filters themselves serializable and
//! testable without a running store. Translation to the store's native
//! query form lives in `eventide-database`.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// List membership.
    In,
    /// Case-insensitive substring match.
    Contains,
    /// Prefix match.
    StartsWith,
    /// Field presence check.
    Exists,
}

/// A dynamic filter value covering the store's scalar types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Boolean(bool),
    /// A UTC timestamp.
    DateTime(DateTime<Utc>),
    /// A document identifier.
    ObjectId(ObjectId),
    /// A list of string values (for the `In` operator).
    StringList(Vec<String>),
    /// Null / no value.
    Null,
}

/// A single filter condition on a named field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterField {
    /// The field name to filter on, dot notation for embedded documents.
    pub field: String,
    /// The comparison operator.
    pub op: FilterOp,
    /// The value to compare against.
    pub value: FilterValue,
}

impl FilterField {
    /// Create a new filter field.
    pub fn new(field: impl Into<String>, op: FilterOp, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }
}

/// A conjunction of filter conditions.
///
/// The empty filter matches every document. Conditions are combined with
/// logical AND; the repository additionally conjoins the soft-delete guard
/// on every read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filter {
    /// The conditions, all of which must hold.
    pub conditions: Vec<FilterField>,
}

impl Filter {
    /// Create an empty filter matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this filter has no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Add an arbitrary condition.
    pub fn with(mut self, field: impl Into<String>, op: FilterOp, value: FilterValue) -> Self {
        self.conditions.push(FilterField::new(field, op, value));
        self
    }

    /// Add an equality condition.
    pub fn eq(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.with(field, FilterOp::Eq, value.into())
    }

    /// Add an inequality condition.
    pub fn ne(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.with(field, FilterOp::Ne, value.into())
    }

    /// Add a greater-than condition.
    pub fn gt(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.with(field, FilterOp::Gt, value.into())
    }

    /// Add a greater-than-or-equal condition.
    pub fn gte(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.with(field, FilterOp::Gte, value.into())
    }

    /// Add a less-than condition.
    pub fn lt(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.with(field, FilterOp::Lt, value.into())
    }

    /// Add a less-than-or-equal condition.
    pub fn lte(self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.with(field, FilterOp::Lte, value.into())
    }

    /// Add a list-membership condition.
    pub fn is_in(self, field: impl Into<String>, values: Vec<String>) -> Self {
        self.with(field, FilterOp::In, FilterValue::StringList(values))
    }

    /// Add a case-insensitive substring condition.
    pub fn contains(self, field: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.with(
            field,
            FilterOp::Contains,
            FilterValue::String(pattern.into()),
        )
    }

    /// Add a prefix condition.
    pub fn starts_with(self, field: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.with(
            field,
            FilterOp::StartsWith,
            FilterValue::String(prefix.into()),
        )
    }

    /// Add a field-presence condition.
    pub fn exists(self, field: impl Into<String>, present: bool) -> Self {
        self.with(field, FilterOp::Exists, FilterValue::Boolean(present))
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<ObjectId> for FilterValue {
    fn from(value: ObjectId) -> Self {
        Self::ObjectId(value)
    }
}

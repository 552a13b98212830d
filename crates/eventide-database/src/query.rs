//! Translation of repository filters and sorts into store queries.
//!
//! Caller-facing field names may use a different casing convention than
//! the stored documents (camelCase at the API boundary, snake_case in the
//! store). The convention is an explicit value passed at repository
//! construction, never a global, so the translation is unit-testable
//! without a running store.

use bson::{Bson, Document, doc};

use eventide_core::error::AppError;
use eventide_core::result::AppResult;
use eventide_core::types::filter::{Filter, FilterOp, FilterValue};
use eventide_core::types::sorting::{SortDirection, SortField};

/// Stored field every read is implicitly scoped by.
const SOFT_DELETE_FIELD: &str = "is_deleted";
/// Stored field used when the caller supplies no usable sort.
const DEFAULT_SORT_FIELD: &str = "created_at";

/// How caller-supplied field names map onto stored field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldNaming {
    /// Stored documents use snake_case; camelCase caller names are
    /// converted segment by segment (dot notation preserved).
    #[default]
    SnakeCase,
    /// Caller names are used verbatim.
    Preserve,
}

impl FieldNaming {
    /// Normalize a caller-supplied field name to the store's convention.
    ///
    /// Dot-separated path segments are normalized independently, so nested
    /// addressing works: `performerDetails.durationMinutes` becomes
    /// `performer_details.duration_minutes`.
    pub fn normalize(&self, field: &str) -> String {
        match self {
            Self::Preserve => field.to_string(),
            Self::SnakeCase => field
                .split('.')
                .map(camel_to_snake)
                .collect::<Vec<_>>()
                .join("."),
        }
    }
}

fn camel_to_snake(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    for (i, c) in segment.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Build the store filter for a repository read: the caller's conditions
/// conjoined with the soft-delete guard.
pub(crate) fn scoped_filter(filter: &Filter, naming: FieldNaming) -> AppResult<Document> {
    let guard = doc! { SOFT_DELETE_FIELD: false };
    if filter.is_empty() {
        return Ok(guard);
    }
    let mut clauses = vec![guard];
    for condition in &filter.conditions {
        clauses.push(condition_to_document(
            &naming.normalize(&condition.field),
            condition.op,
            &condition.value,
        )?);
    }
    Ok(doc! { "$and": clauses })
}

/// The bare soft-delete guard, scoping reads that take no caller filter.
pub(crate) fn soft_delete_guard() -> Document {
    doc! { SOFT_DELETE_FIELD: false }
}

fn condition_to_document(field: &str, op: FilterOp, value: &FilterValue) -> AppResult<Document> {
    let condition = match op {
        FilterOp::Eq => doc! { field: value_to_bson(value) },
        FilterOp::Ne => doc! { field: { "$ne": value_to_bson(value) } },
        FilterOp::Gt => doc! { field: { "$gt": value_to_bson(value) } },
        FilterOp::Gte => doc! { field: { "$gte": value_to_bson(value) } },
        FilterOp::Lt => doc! { field: { "$lt": value_to_bson(value) } },
        FilterOp::Lte => doc! { field: { "$lte": value_to_bson(value) } },
        FilterOp::In => doc! { field: { "$in": value_to_bson(value) } },
        FilterOp::Contains => {
            let pattern = text_pattern(field, op, value)?;
            doc! { field: { "$regex": escape_regex(&pattern), "$options": "i" } }
        }
        FilterOp::StartsWith => {
            let pattern = text_pattern(field, op, value)?;
            doc! { field: { "$regex": format!("^{}", escape_regex(&pattern)) } }
        }
        FilterOp::Exists => match value {
            FilterValue::Boolean(present) => doc! { field: { "$exists": *present } },
            _ => {
                return Err(AppError::query(format!(
                    "Exists condition on '{field}' requires a boolean value"
                )));
            }
        },
    };
    Ok(condition)
}

fn text_pattern(field: &str, op: FilterOp, value: &FilterValue) -> AppResult<String> {
    match value {
        FilterValue::String(s) => Ok(s.clone()),
        _ => Err(AppError::query(format!(
            "{op:?} condition on '{field}' requires a string value"
        ))),
    }
}

fn value_to_bson(value: &FilterValue) -> Bson {
    match value {
        FilterValue::String(s) => Bson::String(s.clone()),
        FilterValue::Integer(i) => Bson::Int64(*i),
        FilterValue::Float(f) => Bson::Double(*f),
        FilterValue::Boolean(b) => Bson::Boolean(*b),
        FilterValue::DateTime(dt) => Bson::DateTime(bson::DateTime::from_chrono(*dt)),
        FilterValue::ObjectId(oid) => Bson::ObjectId(*oid),
        FilterValue::StringList(list) => {
            Bson::Array(list.iter().cloned().map(Bson::String).collect())
        }
        FilterValue::Null => Bson::Null,
    }
}

/// Escape regex metacharacters so substring/prefix filters match literally.
fn escape_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if "\\.^$|?*+()[]{}".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Build the sort definition for a paginated read.
///
/// A blank or whitespace sort field falls back to `created_at` in the
/// requested direction. Every sort gets an `_id` tiebreak so pages are
/// stable when the sort key is not unique.
pub(crate) fn resolve_sort(sort: Option<&SortField>, naming: FieldNaming) -> Document {
    let (field, direction) = match sort {
        Some(s) if !s.is_blank() => (naming.normalize(s.field.trim()), s.direction),
        Some(s) => (DEFAULT_SORT_FIELD.to_string(), s.direction),
        None => (DEFAULT_SORT_FIELD.to_string(), SortDirection::Desc),
    };
    let order = match direction {
        SortDirection::Asc => 1,
        SortDirection::Desc => -1,
    };
    let mut sort_doc = doc! { field.as_str(): order };
    if field != "_id" {
        sort_doc.insert("_id", order);
    }
    sort_doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(FieldNaming::SnakeCase.normalize("startDate"), "start_date");
        assert_eq!(FieldNaming::SnakeCase.normalize("title"), "title");
        assert_eq!(FieldNaming::SnakeCase.normalize("created_at"), "created_at");
    }

    #[test]
    fn test_normalize_dotted_path() {
        assert_eq!(
            FieldNaming::SnakeCase.normalize("performerDetails.durationMinutes"),
            "performer_details.duration_minutes"
        );
        assert_eq!(
            FieldNaming::SnakeCase.normalize("location.latitude"),
            "location.latitude"
        );
    }

    #[test]
    fn test_preserve_naming() {
        assert_eq!(FieldNaming::Preserve.normalize("startDate"), "startDate");
    }

    #[test]
    fn test_empty_filter_is_bare_guard() {
        let translated = scoped_filter(&Filter::new(), FieldNaming::SnakeCase).unwrap();
        assert_eq!(translated, doc! { "is_deleted": false });
    }

    #[test]
    fn test_conditions_conjoined_with_guard() {
        let filter = Filter::new().eq("status", "announced").gte("capacity", 100);
        let translated = scoped_filter(&filter, FieldNaming::SnakeCase).unwrap();
        assert_eq!(
            translated,
            doc! { "$and": [
                { "is_deleted": false },
                { "status": "announced" },
                { "capacity": { "$gte": 100_i64 } },
            ]}
        );
    }

    #[test]
    fn test_filter_field_names_are_normalized() {
        let filter = Filter::new().eq("categoryId", "abc");
        let translated = scoped_filter(&filter, FieldNaming::SnakeCase).unwrap();
        assert_eq!(
            translated,
            doc! { "$and": [
                { "is_deleted": false },
                { "category_id": "abc" },
            ]}
        );
    }

    #[test]
    fn test_contains_is_escaped_case_insensitive_regex() {
        let filter = Filter::new().contains("title", "jazz (live)");
        let translated = scoped_filter(&filter, FieldNaming::SnakeCase).unwrap();
        assert_eq!(
            translated,
            doc! { "$and": [
                { "is_deleted": false },
                { "title": { "$regex": "jazz \\(live\\)", "$options": "i" } },
            ]}
        );
    }

    #[test]
    fn test_starts_with_is_anchored() {
        let filter = Filter::new().starts_with("name", "The");
        let translated = scoped_filter(&filter, FieldNaming::SnakeCase).unwrap();
        assert_eq!(
            translated,
            doc! { "$and": [
                { "is_deleted": false },
                { "name": { "$regex": "^The" } },
            ]}
        );
    }

    #[test]
    fn test_in_condition() {
        let filter = Filter::new().is_in("status", vec!["active".into(), "used".into()]);
        let translated = scoped_filter(&filter, FieldNaming::SnakeCase).unwrap();
        assert_eq!(
            translated,
            doc! { "$and": [
                { "is_deleted": false },
                { "status": { "$in": ["active", "used"] } },
            ]}
        );
    }

    #[test]
    fn test_exists_requires_boolean() {
        let filter = Filter::new().with(
            "parent_id",
            FilterOp::Exists,
            eventide_core::types::filter::FilterValue::String("yes".into()),
        );
        assert!(scoped_filter(&filter, FieldNaming::SnakeCase).is_err());
    }

    #[test]
    fn test_escape_regex() {
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("plain"), "plain");
    }

    #[test]
    fn test_default_sort_is_created_at_desc() {
        let sort = resolve_sort(None, FieldNaming::SnakeCase);
        assert_eq!(sort, doc! { "created_at": -1, "_id": -1 });
    }

    #[test]
    fn test_blank_sort_field_falls_back_in_requested_direction() {
        let sort = resolve_sort(Some(&SortField::asc("   ")), FieldNaming::SnakeCase);
        assert_eq!(sort, doc! { "created_at": 1, "_id": 1 });
    }

    #[test]
    fn test_sort_field_is_normalized_and_tiebroken() {
        let sort = resolve_sort(Some(&SortField::desc("startDate")), FieldNaming::SnakeCase);
        assert_eq!(sort, doc! { "start_date": -1, "_id": -1 });
    }

    #[test]
    fn test_id_sort_gets_no_duplicate_tiebreak() {
        let sort = resolve_sort(Some(&SortField::asc("_id")), FieldNaming::SnakeCase);
        assert_eq!(sort, doc! { "_id": 1 });
    }
}

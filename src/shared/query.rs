//! Helpers shared by the listing filters.
//!
//! Query strings arrive as optional text. These functions turn them into
//! typed criteria where "absent" and "present but meaningless" both collapse
//! to `None`, so an omitted filter never becomes a comparison.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Postgres, QueryBuilder};

/// Keep a text criterion only when it carries a value.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Three-state boolean: `"true"`, `"false"`, anything else is no constraint.
pub fn parse_bool_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// Parse a date bound given as RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC).
///
/// Empty input is treated as absent. Returns the raw text on failure.
pub fn parse_date_bound(value: Option<&str>) -> Result<Option<DateTime<Utc>>, String> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Some(dt.and_utc()))
        .ok_or_else(|| raw.to_string())
}

/// Case-insensitive substring match used by the in-memory search.
///
/// Folds with Unicode lowercase; Postgres `ILIKE` folds by the database
/// collation, so non-ASCII terms may match differently between backends.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Build an `ILIKE` pattern that matches `term` literally anywhere.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Appends `WHERE`/`AND` as predicates are added to a query.
pub struct WhereClause<'b, 'args> {
    builder: &'b mut QueryBuilder<'args, Postgres>,
    started: bool,
}

impl<'b, 'args> WhereClause<'b, 'args> {
    pub fn new(builder: &'b mut QueryBuilder<'args, Postgres>) -> Self {
        Self {
            builder,
            started: false,
        }
    }

    /// Start the next predicate and hand back the builder to write it.
    pub fn and(&mut self) -> &mut QueryBuilder<'args, Postgres> {
        if self.started {
            self.builder.push(" AND ");
        } else {
            self.builder.push(" WHERE ");
            self.started = true;
        }
        self.builder
    }
}

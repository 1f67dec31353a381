//! Sorting types for paged searches.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Placement of NULL values in an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullsOrder {
    /// NULLs sort before every value.
    First,
    /// NULLs sort after every value.
    Last,
}

impl NullsOrder {
    /// The placement PostgreSQL applies when none is given: NULL is treated
    /// as larger than every value.
    pub fn default_for(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Self::Last,
            SortDirection::Desc => Self::First,
        }
    }

    /// Return the SQL clause for this placement.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// A sort specification consisting of a field name, direction and optional
/// NULL placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Field name to sort by.
    pub field: String,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
    /// Explicit NULL placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nulls: Option<NullsOrder>,
}

impl SortField {
    /// Create a new sort field.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
            nulls: None,
        }
    }

    /// Create an ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Create a descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Place NULLs first.
    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullsOrder::First);
        self
    }

    /// Place NULLs last.
    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullsOrder::Last);
        self
    }

    /// The NULL placement in effect, explicit or implied by the direction.
    pub fn effective_nulls(&self) -> NullsOrder {
        self.nulls
            .unwrap_or_else(|| NullsOrder::default_for(self.direction))
    }

    /// Parse a comma-separated list such as `age:desc,username:asc:nulls_last`.
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, AppError> {
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse::<SortField>)
            .collect()
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':').map(str::trim);
        let field = match parts.next() {
            Some(field) if !field.is_empty() => field,
            _ => return Err(AppError::invalid_argument("Empty sort field")),
        };

        let mut sort = SortField::asc(field);
        for part in parts {
            match part.to_lowercase().as_str() {
                "asc" => sort.direction = SortDirection::Asc,
                "desc" => sort.direction = SortDirection::Desc,
                "nulls_first" => sort.nulls = Some(NullsOrder::First),
                "nulls_last" => sort.nulls = Some(NullsOrder::Last),
                other => {
                    return Err(AppError::invalid_argument(format!(
                        "Invalid sort modifier '{other}' for field '{field}'. \
                         Expected one of: asc, desc, nulls_first, nulls_last"
                    )));
                }
            }
        }
        Ok(sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_nulls_follows_direction() {
        assert_eq!(SortField::asc("age").effective_nulls(), NullsOrder::Last);
        assert_eq!(SortField::desc("age").effective_nulls(), NullsOrder::First);
        assert_eq!(
            SortField::desc("age").nulls_last().effective_nulls(),
            NullsOrder::Last
        );
    }

    #[test]
    fn test_parse_list() {
        let sorts = SortField::parse_list("age:desc, username:asc:nulls_last").expect("parse");
        assert_eq!(
            sorts,
            vec![
                SortField::desc("age"),
                SortField::asc("username").nulls_last()
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_modifier() {
        let err = "age:sideways".parse::<SortField>().unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::InvalidArgument);
    }
}

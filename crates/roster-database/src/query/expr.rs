//! Columns, values and predicate expressions.

use std::fmt;

/// The two tables a query may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// The `member` table, always the query root.
    Member,
    /// The `team` table, reachable through `member.team_id`.
    Team,
}

/// A column that predicates and orderings can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// `member.id`
    MemberId,
    /// `member.username`
    MemberUsername,
    /// `member.age`
    MemberAge,
    /// `member.team_id`
    MemberTeamId,
    /// `team.id`
    TeamId,
    /// `team.name`
    TeamName,
}

impl Column {
    /// The table this column belongs to.
    pub fn table(&self) -> Table {
        match self {
            Self::MemberId | Self::MemberUsername | Self::MemberAge | Self::MemberTeamId => {
                Table::Member
            }
            Self::TeamId | Self::TeamName => Table::Team,
        }
    }

    /// Qualified SQL name using the `m` / `t` aliases.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::MemberId => "m.id",
            Self::MemberUsername => "m.username",
            Self::MemberAge => "m.age",
            Self::MemberTeamId => "m.team_id",
            Self::TeamId => "t.id",
            Self::TeamName => "t.name",
        }
    }

    /// Resolve a public sort field name.
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "memberId" | "id" => Some(Self::MemberId),
            "username" => Some(Self::MemberUsername),
            "age" => Some(Self::MemberAge),
            "teamName" => Some(Self::TeamName),
            _ => None,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A literal compared against a column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    /// Integer literal.
    Int(i64),
    /// Text literal.
    Text(String),
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A boolean condition evaluated per candidate row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every row.
    All,
    /// `column = value`
    Eq(Column, Value),
    /// `column >= value`
    Ge(Column, Value),
    /// `column <= value`
    Le(Column, Value),
    /// Conjunction of two or more predicates.
    And(Vec<Predicate>),
}

impl Predicate {
    /// `column = value`
    pub fn eq(column: Column, value: impl Into<Value>) -> Self {
        Self::Eq(column, value.into())
    }

    /// `column >= value`
    pub fn ge(column: Column, value: impl Into<Value>) -> Self {
        Self::Ge(column, value.into())
    }

    /// `column <= value`
    pub fn le(column: Column, value: impl Into<Value>) -> Self {
        Self::Le(column, value.into())
    }

    /// Logical AND. `All` is the identity and nested conjunctions are
    /// flattened, so folding any number of predicates yields at most one
    /// level of `And`.
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::All, p) | (p, Predicate::All) => p,
            (Predicate::And(mut left), Predicate::And(right)) => {
                left.extend(right);
                Predicate::And(left)
            }
            (Predicate::And(mut left), p) => {
                left.push(p);
                Predicate::And(left)
            }
            (p, Predicate::And(mut right)) => {
                right.insert(0, p);
                Predicate::And(right)
            }
            (left, right) => Predicate::And(vec![left, right]),
        }
    }

    /// Whether this predicate matches every row.
    pub fn is_all(&self) -> bool {
        matches!(self, Predicate::All)
    }

    /// Whether any leaf references a column of `table`.
    pub fn references(&self, table: Table) -> bool {
        match self {
            Predicate::All => false,
            Predicate::Eq(col, _) | Predicate::Ge(col, _) | Predicate::Le(col, _) => {
                col.table() == table
            }
            Predicate::And(parts) => parts.iter().any(|p| p.references(table)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_with_all_is_identity() {
        let p = Predicate::eq(Column::MemberAge, 10);
        assert_eq!(Predicate::All.and(p.clone()), p);
        assert_eq!(p.clone().and(Predicate::All), p);
        assert_eq!(Predicate::All.and(Predicate::All), Predicate::All);
    }

    #[test]
    fn test_and_flattens() {
        let a = Predicate::eq(Column::MemberUsername, "member1");
        let b = Predicate::ge(Column::MemberAge, 10);
        let c = Predicate::le(Column::MemberAge, 20);

        let combined = a.clone().and(b.clone()).and(c.clone());
        assert_eq!(combined, Predicate::And(vec![a, b, c]));
    }

    #[test]
    fn test_references_team() {
        let p = Predicate::ge(Column::MemberAge, 10).and(Predicate::eq(Column::TeamName, "teamA"));
        assert!(p.references(Table::Team));
        assert!(!Predicate::ge(Column::MemberAge, 1).references(Table::Team));
        assert!(!Predicate::All.references(Table::Member));
    }

    #[test]
    fn test_from_field() {
        assert_eq!(Column::from_field("teamName"), Some(Column::TeamName));
        assert_eq!(Column::from_field("memberId"), Some(Column::MemberId));
        assert_eq!(Column::from_field("password"), None);
    }
}

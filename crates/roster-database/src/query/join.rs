//! How `member` is joined to `team`.

/// How rows without a matching team are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Members without a team are dropped.
    Inner,
    /// Members without a team are kept with NULL team columns.
    LeftOuter,
}

/// Which team columns travel with the joined row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinMode {
    /// Only the team columns a filter or projection names.
    Plain,
    /// Every team column, so a full `Team` can be materialized from the row.
    Fetch,
}

/// `member m JOIN team t ON t.id = m.team_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinSpec {
    /// Outer or inner.
    pub kind: JoinKind,
    /// Plain or fetch.
    pub mode: JoinMode,
}

impl JoinSpec {
    /// Plain inner join.
    pub fn inner() -> Self {
        Self {
            kind: JoinKind::Inner,
            mode: JoinMode::Plain,
        }
    }

    /// Plain left outer join.
    pub fn left_outer() -> Self {
        Self {
            kind: JoinKind::LeftOuter,
            mode: JoinMode::Plain,
        }
    }

    /// Switch to fetch mode.
    pub fn fetch(mut self) -> Self {
        self.mode = JoinMode::Fetch;
        self
    }

    /// Whether every team column is loaded.
    pub fn is_fetch(&self) -> bool {
        self.mode == JoinMode::Fetch
    }

    /// The SQL join keyword.
    pub fn keyword(&self) -> &'static str {
        match self.kind {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::LeftOuter => "LEFT OUTER JOIN",
        }
    }
}

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Book;

/// Column a list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Title,
    Author,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Id, SortKey::Title, SortKey::Author];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::Author => "author",
        }
    }

    /// Compare two books on this column.
    ///
    /// Ids compare numerically; text columns compare case-insensitively.
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "title" => Ok(SortKey::Title),
            "author" => Ok(SortKey::Author),
            other => Err(format!("unknown sort key '{}' (expected id, title or author)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column and direction; `key == None` keeps working-set order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// State after the user picks `key`: same column toggles, a new column starts ascending
    pub fn select(self, key: SortKey) -> Self {
        if self.key == Some(key) {
            Self {
                key: self.key,
                direction: self.direction.toggled(),
            }
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }

    pub fn is_ascending_on(&self, key: SortKey) -> bool {
        self.key == Some(key) && self.direction == SortDirection::Ascending
    }

    /// Header arrow for a column: ▲ when it is the active ascending key, ▼ otherwise
    pub fn indicator(&self, key: SortKey) -> &'static str {
        if self.is_ascending_on(key) {
            "▲"
        } else {
            "▼"
        }
    }
}

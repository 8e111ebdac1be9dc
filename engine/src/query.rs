//! Filter/sort pipeline over the merged view.

use crate::{Error, UserRecord};
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort keys for directory listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
    /// Compares the company name.
    Company,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "email" => Ok(SortKey::Email),
            "company" => Ok(SortKey::Company),
            other => Err(Error::UnknownSortKey(other.to_string())),
        }
    }
}

/// A directory listing query.
///
/// Filters with a case-insensitive substring match against name or email,
/// then stable-sorts by the chosen key. Without a sort key the filtered
/// records keep their merged-view order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryQuery {
    search: Option<String>,
    sort: Option<SortKey>,
}

impl DirectoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Set the sort key.
    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    /// Run the pipeline: filter, then stable sort.
    pub fn apply<'a>(&self, records: Vec<&'a UserRecord>) -> Vec<&'a UserRecord> {
        let mut results = match &self.search {
            Some(term) => {
                let term = term.to_lowercase();
                records
                    .into_iter()
                    .filter(|u| Self::matches(u, &term))
                    .collect()
            }
            None => records,
        };

        if let Some(key) = self.sort {
            results.sort_by(|a, b| Self::compare(key, a, b));
        }

        results
    }

    fn matches(user: &UserRecord, term: &str) -> bool {
        user.name.to_lowercase().contains(term) || user.email.to_lowercase().contains(term)
    }

    fn compare(key: SortKey, a: &UserRecord, b: &UserRecord) -> Ordering {
        match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Email => a.email.cmp(&b.email),
            SortKey::Company => a.company.name.cmp(&b.company.name),
        }
    }
}

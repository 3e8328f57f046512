use crate::common::Int;
use crate::error::{Error, Result};
use crate::roll::InitiativeOutcome;
use std::cmp::Reverse;
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct InitiativeEntry {
    pub name: String,
    pub total: Int,
    pub isolated_d20: Int,
    pub modifier_sum: Int,
}

impl InitiativeEntry {
    pub fn new(name: impl Into<String>, outcome: InitiativeOutcome) -> Self {
        Self {
            name: name.into(),
            total: outcome.total,
            isolated_d20: outcome.isolated_d20,
            modifier_sum: outcome.modifier_sum,
        }
    }

    pub fn is_natural_20(&self) -> bool {
        self.isolated_d20 == 20
    }

    /// Natural 20s first, then the higher modifier, then the higher total.
    pub fn rank_key(&self) -> (bool, Reverse<Int>, Reverse<Int>) {
        (
            !self.is_natural_20(),
            Reverse(self.modifier_sum),
            Reverse(self.total),
        )
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Turn order for the current round.
///
/// Entries are kept sorted by [`InitiativeEntry::rank_key`]. The sort is
/// stable, so entries with equal keys stay in the order they were added.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Roster {
    entries: Vec<InitiativeEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every entry, starting a new round.
    pub fn reset(&mut self) {
        self.entries.clear();
        info!("initiative reset");
    }

    /// Adds an entry and returns the new order. A name that is already
    /// present gets a second, independent entry.
    pub fn add(&mut self, name: impl Into<String>, outcome: InitiativeOutcome) -> &[InitiativeEntry] {
        let entry = InitiativeEntry::new(name, outcome);
        info!(name = %entry.name, total = entry.total, "added to initiative");
        self.entries.push(entry);
        self.entries.sort_by_key(InitiativeEntry::rank_key);
        &self.entries
    }

    /// Removes the first entry whose name matches, ignoring case.
    pub fn remove(&mut self, name: &str) -> Result<InitiativeEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.name_matches(name))
            .ok_or_else(|| Error::not_found(name))?;
        let entry = self.entries.remove(index);
        info!(name = %entry.name, "removed from initiative");
        Ok(entry)
    }

    pub fn list(&self) -> &[InitiativeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line per entry in turn order, e.g. `1. Bob (20)`.
impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}. {} ({})", i + 1, entry.name, entry.total)?;
        }
        Ok(())
    }
}

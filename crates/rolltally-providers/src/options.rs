use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Speakers excluded by default: the keeper and the dice bot / system line
pub const DEFAULT_IGNORED_PARTICIPANTS: [&str; 2] = ["KP", "system"];

/// What the extractor should leave out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Exact, case-sensitive participant names whose entries are skipped
    pub ignored_participants: BTreeSet<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::with_ignored(DEFAULT_IGNORED_PARTICIPANTS)
    }
}

impl ExtractOptions {
    /// Options ignoring exactly `names` (the defaults are not included)
    pub fn with_ignored<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored_participants: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Add names on top of the current set
    pub fn ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_participants
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_ignored(&self, participant: &str) -> bool {
        self.ignored_participants.contains(participant)
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Running totals for one participant
///
/// Invariants kept by the aggregator:
/// - `total_critical <= total_success <= total_rolls`
/// - `total_fumble <= total_rolls`
/// - `total_critical == critical_skills.values().sum()`
/// - `total_fumble == fumble_skills.values().sum()`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub total_rolls: u32,
    /// Successes including criticals
    pub total_success: u32,
    pub total_critical: u32,
    pub total_fumble: u32,
    /// Only skills with at least one critical
    pub critical_skills: BTreeMap<String, u32>,
    /// Only skills with at least one fumble
    pub fumble_skills: BTreeMap<String, u32>,
}

impl ParticipantStats {
    /// Fumbles over all rolls, as a percentage
    pub fn fumble_rate(&self) -> f64 {
        percentage(self.total_fumble, self.total_rolls)
    }

    /// Criticals over successes, as a percentage
    pub fn critical_rate(&self) -> f64 {
        percentage(self.total_critical, self.total_success)
    }

    /// Successes over all rolls, as a percentage
    pub fn success_rate(&self) -> f64 {
        percentage(self.total_success, self.total_rolls)
    }
}

fn percentage(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

/// Participant name to statistics, one run of the engine
///
/// Iteration is by name. Callers that care about presentation order use
/// [`AggregationResult::ranked`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregationResult {
    participants: BTreeMap<String, ParticipantStats>,
}

impl AggregationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn get(&self, participant: &str) -> Option<&ParticipantStats> {
        self.participants.get(participant)
    }

    pub fn contains(&self, participant: &str) -> bool {
        self.participants.contains_key(participant)
    }

    /// Stats for `participant`, created empty on first use
    pub fn entry(&mut self, participant: &str) -> &mut ParticipantStats {
        self.participants
            .entry(participant.to_string())
            .or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.participants.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParticipantStats)> {
        self.participants.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All participants sorted by `total_rolls` descending. Ties keep name order.
    pub fn ranked(&self) -> Vec<(&str, &ParticipantStats)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_rolls.cmp(&a.1.total_rolls));
        ranked
    }
}

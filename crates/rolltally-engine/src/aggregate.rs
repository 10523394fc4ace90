use rolltally_types::{AggregationResult, OutcomeKind, RollEvent};

/// Incremental fold of roll events into an [`AggregationResult`]
///
/// Every event counts as a roll. On top of that:
/// - critical success: +success, +critical, +critical_skills[skill]
/// - fumble: +fumble, +fumble_skills[skill]
/// - success: +success
/// - failure and unclassified labels: nothing else
#[derive(Debug, Default)]
pub struct Aggregator {
    result: AggregationResult,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: &RollEvent) {
        let stats = self.result.entry(&event.participant);
        stats.total_rolls += 1;

        match event.outcome() {
            Some(OutcomeKind::CriticalSuccess) => {
                stats.total_critical += 1;
                stats.total_success += 1;
                *stats
                    .critical_skills
                    .entry(event.skill.clone())
                    .or_insert(0) += 1;
            }
            Some(OutcomeKind::Fumble) => {
                stats.total_fumble += 1;
                *stats.fumble_skills.entry(event.skill.clone()).or_insert(0) += 1;
            }
            Some(OutcomeKind::Success) => {
                stats.total_success += 1;
            }
            // Bare "スペシャル" lands here too: a roll with no success credit
            Some(OutcomeKind::Failure) | None => {}
        }
    }

    pub fn finish(self) -> AggregationResult {
        self.result
    }
}

impl Extend<RollEvent> for Aggregator {
    fn extend<I: IntoIterator<Item = RollEvent>>(&mut self, iter: I) {
        for event in iter {
            self.push(&event);
        }
    }
}

/// Fold a stream of events into per-participant statistics
pub fn aggregate<I>(events: I) -> AggregationResult
where
    I: IntoIterator<Item = RollEvent>,
{
    let mut aggregator = Aggregator::new();
    aggregator.extend(events);
    let result = aggregator.finish();
    tracing::debug!(participants = result.len(), "aggregated roll events");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolltally_types::RollLabel;

    fn event(participant: &str, skill: &str, label: RollLabel) -> RollEvent {
        RollEvent::new(participant, skill, label)
    }

    #[test]
    fn test_critical_counts_as_success() {
        let result = aggregate(vec![event("Alice", "目星", RollLabel::Critical)]);

        let alice = result.get("Alice").unwrap();
        assert_eq!(alice.total_rolls, 1);
        assert_eq!(alice.total_critical, 1);
        assert_eq!(alice.total_success, 1);
        assert_eq!(alice.critical_skills.get("目星"), Some(&1));
        assert!(alice.fumble_skills.is_empty());
    }

    #[test]
    fn test_critical_special_is_critical() {
        let result = aggregate(vec![event("Alice", "目星", RollLabel::CriticalSpecial)]);
        assert_eq!(result.get("Alice").unwrap().total_critical, 1);
    }

    #[test]
    fn test_fumble() {
        let result = aggregate(vec![event("Bob", "聞き耳", RollLabel::Fumble)]);

        let bob = result.get("Bob").unwrap();
        assert_eq!(bob.total_rolls, 1);
        assert_eq!(bob.total_fumble, 1);
        assert_eq!(bob.total_success, 0);
        assert_eq!(bob.fumble_skills.get("聞き耳"), Some(&1));
        assert!(bob.critical_skills.is_empty());
    }

    #[test]
    fn test_success_and_failure() {
        let result = aggregate(vec![
            event("Alice", "目星", RollLabel::Success),
            event("Alice", "目星", RollLabel::Failure),
        ]);

        let alice = result.get("Alice").unwrap();
        assert_eq!(alice.total_rolls, 2);
        assert_eq!(alice.total_success, 1);
        assert_eq!(alice.total_critical, 0);
        assert_eq!(alice.total_fumble, 0);
    }

    #[test]
    fn test_bare_special_counts_only_as_roll() {
        let result = aggregate(vec![event("Alice", "回避", RollLabel::Special)]);

        let alice = result.get("Alice").unwrap();
        assert_eq!(alice.total_rolls, 1);
        assert_eq!(alice.total_success, 0);
        assert_eq!(alice.total_critical, 0);
        assert!(alice.critical_skills.is_empty());
    }

    #[test]
    fn test_skill_counts_accumulate() {
        let result = aggregate(vec![
            event("Alice", "目星", RollLabel::Critical),
            event("Alice", "目星", RollLabel::CriticalSpecial),
            event("Alice", "図書館", RollLabel::Critical),
            event("Alice", "目星", RollLabel::Fumble),
        ]);

        let alice = result.get("Alice").unwrap();
        assert_eq!(alice.critical_skills.get("目星"), Some(&2));
        assert_eq!(alice.critical_skills.get("図書館"), Some(&1));
        assert_eq!(alice.fumble_skills.get("目星"), Some(&1));
        assert_eq!(alice.total_critical, 3);
        assert_eq!(alice.total_rolls, 4);
    }

    #[test]
    fn test_participants_are_independent() {
        let result = aggregate(vec![
            event("Alice", "目星", RollLabel::Success),
            event("Bob", "目星", RollLabel::Fumble),
        ]);

        assert_eq!(result.len(), 2);
        assert_eq!(result.get("Alice").unwrap().total_fumble, 0);
        assert_eq!(result.get("Bob").unwrap().total_success, 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn test_order_does_not_change_totals() {
        let events = vec![
            event("Alice", "目星", RollLabel::Critical),
            event("Alice", "聞き耳", RollLabel::Fumble),
            event("Alice", "目星", RollLabel::Success),
            event("Bob", "回避", RollLabel::Failure),
        ];
        let mut reversed = events.clone();
        reversed.reverse();

        assert_eq!(aggregate(events), aggregate(reversed));
    }
}

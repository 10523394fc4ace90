//! Custom assertions for rolltally-specific validation.
//!
//! Provides high-level assertions that make tests more readable:
//! - Counter invariants of every participant
//! - Expected totals for one participant

use anyhow::{Context, Result};
use rolltally_types::{AggregationResult, ParticipantStats};

/// Assert the ordering and sum invariants hold for every participant.
pub fn assert_invariants(result: &AggregationResult) -> Result<()> {
    for (name, stats) in result.iter() {
        check_stats(stats).with_context(|| format!("participant {}", name))?;
    }
    Ok(())
}

fn check_stats(stats: &ParticipantStats) -> Result<()> {
    if stats.total_critical > stats.total_success {
        anyhow::bail!(
            "total_critical {} exceeds total_success {}",
            stats.total_critical,
            stats.total_success
        );
    }
    if stats.total_success > stats.total_rolls {
        anyhow::bail!(
            "total_success {} exceeds total_rolls {}",
            stats.total_success,
            stats.total_rolls
        );
    }
    if stats.total_fumble > stats.total_rolls {
        anyhow::bail!(
            "total_fumble {} exceeds total_rolls {}",
            stats.total_fumble,
            stats.total_rolls
        );
    }

    let critical_sum: u32 = stats.critical_skills.values().sum();
    if critical_sum != stats.total_critical {
        anyhow::bail!(
            "critical_skills sum {} != total_critical {}",
            critical_sum,
            stats.total_critical
        );
    }
    let fumble_sum: u32 = stats.fumble_skills.values().sum();
    if fumble_sum != stats.total_fumble {
        anyhow::bail!(
            "fumble_skills sum {} != total_fumble {}",
            fumble_sum,
            stats.total_fumble
        );
    }
    if stats.critical_skills.values().any(|&c| c == 0)
        || stats.fumble_skills.values().any(|&c| c == 0)
    {
        anyhow::bail!("skill maps must not hold zero counts");
    }

    Ok(())
}

/// Assert a participant's four totals: (rolls, success, critical, fumble).
pub fn assert_totals(
    result: &AggregationResult,
    participant: &str,
    expected: (u32, u32, u32, u32),
) -> Result<()> {
    let stats = result
        .get(participant)
        .with_context(|| format!("Expected participant {} in result", participant))?;

    let actual = (
        stats.total_rolls,
        stats.total_success,
        stats.total_critical,
        stats.total_fumble,
    );
    if actual != expected {
        anyhow::bail!(
            "{}: expected (rolls, success, critical, fumble) = {:?}, got {:?}",
            participant,
            expected,
            actual
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_invariants() {
        let mut result = AggregationResult::new();
        let alice = result.entry("Alice");
        alice.total_rolls = 2;
        alice.total_success = 1;
        alice.total_critical = 1;
        alice.critical_skills.insert("目星".to_string(), 1);

        assert!(assert_invariants(&result).is_ok());

        result.entry("Alice").total_critical = 2;
        assert!(assert_invariants(&result).is_err());
    }

    #[test]
    fn test_assert_totals() {
        let mut result = AggregationResult::new();
        result.entry("Bob").total_rolls = 3;

        assert!(assert_totals(&result, "Bob", (3, 0, 0, 0)).is_ok());
        assert!(assert_totals(&result, "Bob", (2, 0, 0, 0)).is_err());
        assert!(assert_totals(&result, "Carol", (0, 0, 0, 0)).is_err());
    }
}

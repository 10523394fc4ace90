use rolltally_types::{AggregationResult, ParticipantStats};

/// Participants currently on display
///
/// Starts as every participant of a result, in ranked order. Removing a
/// participant only hides it from this set; the [`AggregationResult`] it was
/// built from is never touched, so a hidden participant can be shown again
/// by building a fresh set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySet {
    names: Vec<String>,
}

impl DisplaySet {
    pub fn from_result(result: &AggregationResult) -> Self {
        Self {
            names: result
                .ranked()
                .into_iter()
                .map(|(name, _)| name.to_string())
                .collect(),
        }
    }

    /// Hide one participant. Returns false if it was not displayed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Hide several participants, ignoring names that are not displayed
    pub fn hide<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.remove(name.as_ref());
        }
    }

    /// Keep only `name`, if displayed
    pub fn retain_only(&mut self, name: &str) {
        self.names.retain(|n| n == name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Displayed participants re-sorted by `total_rolls` descending.
    /// Ties keep display order. Names absent from `result` are left out.
    pub fn ranked<'r>(&self, result: &'r AggregationResult) -> Vec<(&'r str, &'r ParticipantStats)> {
        let mut ranked: Vec<_> = result
            .iter()
            .filter(|(name, _)| self.contains(name))
            .collect();
        ranked.sort_by_key(|(name, _)| self.position(name));
        ranked.sort_by(|a, b| b.1.total_rolls.cmp(&a.1.total_rolls));
        ranked
    }

    fn position(&self, name: &str) -> usize {
        self.names
            .iter()
            .position(|n| n == name)
            .unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AggregationResult {
        let mut result = AggregationResult::new();
        result.entry("Alice").total_rolls = 3;
        result.entry("Bob").total_rolls = 7;
        result.entry("Carol").total_rolls = 5;
        result
    }

    fn names<'a>(ranked: &[(&'a str, &ParticipantStats)]) -> Vec<&'a str> {
        ranked.iter().map(|(n, _)| *n).collect()
    }

    #[test]
    fn test_starts_with_everyone_ranked() {
        let result = sample();
        let display = DisplaySet::from_result(&result);

        assert_eq!(display.names().collect::<Vec<_>>(), vec!["Bob", "Carol", "Alice"]);
        assert_eq!(names(&display.ranked(&result)), vec!["Bob", "Carol", "Alice"]);
    }

    #[test]
    fn test_remove_does_not_touch_result() {
        let result = sample();
        let mut display = DisplaySet::from_result(&result);

        assert!(display.remove("Carol"));
        assert!(!display.remove("Carol"));
        assert!(!display.remove("Dave"));

        assert_eq!(names(&display.ranked(&result)), vec!["Bob", "Alice"]);
        assert!(result.contains("Carol"));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_hide_and_retain_only() {
        let result = sample();

        let mut display = DisplaySet::from_result(&result);
        display.hide(["Alice", "Bob", "Nobody"]);
        assert_eq!(display.names().collect::<Vec<_>>(), vec!["Carol"]);

        let mut display = DisplaySet::from_result(&result);
        display.retain_only("Alice");
        assert_eq!(display.len(), 1);

        display.retain_only("Bob");
        assert!(display.is_empty());
        assert!(display.ranked(&result).is_empty());
    }

    #[test]
    fn test_ranked_ignores_names_missing_from_result() {
        let result = sample();
        let display = DisplaySet::from_result(&result);

        let mut other = AggregationResult::new();
        other.entry("Alice").total_rolls = 1;
        assert_eq!(names(&display.ranked(&other)), vec!["Alice"]);
    }
}

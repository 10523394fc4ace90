use crate::grammar::match_roll;
use crate::options::ExtractOptions;
use crate::traits::{LogEntry, TranscriptTree};
use rolltally_types::{RollEvent, normalize_whitespace};
use serde::Serialize;
use std::fmt;

/// Why an entry produced no event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than two inline fragments (chat line, system notice, ...)
    TooFewFragments,
    IgnoredParticipant,
    /// Message does not contain a roll announcement
    NoRoll,
    /// Participant or skill is empty after trimming
    EmptyField,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFragments => write!(f, "too_few_fragments"),
            SkipReason::IgnoredParticipant => write!(f, "ignored_participant"),
            SkipReason::NoRoll => write!(f, "no_roll"),
            SkipReason::EmptyField => write!(f, "empty_field"),
        }
    }
}

/// Counts of entries seen while extracting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipTally {
    pub entries: usize,
    pub events: usize,
    pub too_few_fragments: usize,
    pub ignored_participant: usize,
    pub no_roll: usize,
    pub empty_field: usize,
}

impl SkipTally {
    fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::TooFewFragments => self.too_few_fragments += 1,
            SkipReason::IgnoredParticipant => self.ignored_participant += 1,
            SkipReason::NoRoll => self.no_roll += 1,
            SkipReason::EmptyField => self.empty_field += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.entries - self.events
    }
}

/// Lazy stream of roll events over a transcript tree
///
/// Single pass: entries are read as the iterator is driven and cannot be
/// replayed. Non-roll entries are skipped silently.
pub struct RollEvents<'a> {
    entries: Box<dyn Iterator<Item = LogEntry> + 'a>,
    options: &'a ExtractOptions,
    tally: SkipTally,
}

impl<'a> RollEvents<'a> {
    pub fn new<T>(tree: &'a T, options: &'a ExtractOptions) -> Self
    where
        T: TranscriptTree + ?Sized,
    {
        Self {
            entries: tree.entries(),
            options,
            tally: SkipTally::default(),
        }
    }

    /// Counts so far. Complete once the iterator is exhausted.
    pub fn tally(&self) -> SkipTally {
        self.tally
    }
}

impl Iterator for RollEvents<'_> {
    type Item = RollEvent;

    fn next(&mut self) -> Option<RollEvent> {
        for entry in self.entries.by_ref() {
            self.tally.entries += 1;
            match read_entry(&entry, self.options) {
                Ok(event) => {
                    self.tally.events += 1;
                    tracing::trace!(
                        participant = %event.participant,
                        skill = %event.skill,
                        label = %event.label,
                        "roll"
                    );
                    return Some(event);
                }
                Err(reason) => {
                    tracing::trace!(entry = self.tally.entries, %reason, "skip");
                    self.tally.record(reason);
                }
            }
        }
        None
    }
}

/// Extract roll events from `tree`, lazily
pub fn extract_events<'a, T>(tree: &'a T, options: &'a ExtractOptions) -> RollEvents<'a>
where
    T: TranscriptTree + ?Sized,
{
    RollEvents::new(tree, options)
}

fn read_entry(entry: &LogEntry, options: &ExtractOptions) -> Result<RollEvent, SkipReason> {
    let (speaker, message) = entry
        .speaker_and_message()
        .ok_or(SkipReason::TooFewFragments)?;

    let participant = normalize_whitespace(speaker);
    if options.is_ignored(&participant) {
        return Err(SkipReason::IgnoredParticipant);
    }

    let roll = match_roll(message.trim()).ok_or(SkipReason::NoRoll)?;
    if participant.is_empty() || roll.skill.is_empty() {
        return Err(SkipReason::EmptyField);
    }

    Ok(RollEvent::new(participant, roll.skill, roll.label))
}

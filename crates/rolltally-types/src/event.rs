use serde::{Deserialize, Serialize};
use std::fmt;

// NOTE: Label vs Outcome
//
// The transcript announces one of six raw labels. Aggregation only knows four
// outcome kinds. `RollLabel` keeps what was written; `OutcomeKind` is what the
// aggregator counts. A bare `Special` has no outcome kind: it is counted as a
// roll and nothing else.

/// Raw result label as it appears at the end of a roll announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollLabel {
    /// 決定的成功/スペシャル
    CriticalSpecial,
    /// 決定的成功
    Critical,
    /// スペシャル
    Special,
    /// 成功
    Success,
    /// 失敗
    Failure,
    /// 致命的失敗
    Fumble,
}

impl RollLabel {
    /// Parse the transcript's wording. Both ASCII and full-width slashes are
    /// accepted in the combined label.
    pub fn from_text(text: &str) -> Option<Self> {
        match text.trim() {
            "決定的成功/スペシャル" | "決定的成功／スペシャル" => Some(RollLabel::CriticalSpecial),
            "決定的成功" => Some(RollLabel::Critical),
            "スペシャル" => Some(RollLabel::Special),
            "成功" => Some(RollLabel::Success),
            "失敗" => Some(RollLabel::Failure),
            "致命的失敗" => Some(RollLabel::Fumble),
            _ => None,
        }
    }

    pub fn as_text(&self) -> &'static str {
        match self {
            RollLabel::CriticalSpecial => "決定的成功/スペシャル",
            RollLabel::Critical => "決定的成功",
            RollLabel::Special => "スペシャル",
            RollLabel::Success => "成功",
            RollLabel::Failure => "失敗",
            RollLabel::Fumble => "致命的失敗",
        }
    }

    /// Outcome used for aggregation. `None` for a bare `Special`.
    pub fn outcome(&self) -> Option<OutcomeKind> {
        match self {
            RollLabel::CriticalSpecial | RollLabel::Critical => Some(OutcomeKind::CriticalSuccess),
            RollLabel::Success => Some(OutcomeKind::Success),
            RollLabel::Failure => Some(OutcomeKind::Failure),
            RollLabel::Fumble => Some(OutcomeKind::Fumble),
            RollLabel::Special => None,
        }
    }
}

impl fmt::Display for RollLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    CriticalSuccess,
    Success,
    Failure,
    Fumble,
}

/// One parsed skill check
///
/// `participant` is whitespace-collapsed and trimmed, `skill` is trimmed.
/// Neither is ever empty: the extractor drops such entries before building
/// an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollEvent {
    pub participant: String,
    pub skill: String,
    pub label: RollLabel,
}

impl RollEvent {
    pub fn new(participant: impl Into<String>, skill: impl Into<String>, label: RollLabel) -> Self {
        Self {
            participant: participant.into(),
            skill: skill.into(),
            label,
        }
    }

    pub fn outcome(&self) -> Option<OutcomeKind> {
        self.label.outcome()
    }
}

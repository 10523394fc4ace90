use regex::Regex;
use rolltally_types::RollLabel;
use std::sync::LazyLock;

// NOTE: Roll announcement grammar
//
// Token sequence, unanchored, on a single line:
//
//   "CCB<="  any*?  "【" SKILL "】"  any*?  "＞" ws* DIGITS ws* "＞" ws* LABEL
//
//   SKILL  = [^】]+
//   DIGITS = [0-9]+
//   LABEL  = 決定的成功/スペシャル | 決定的成功 | スペシャル | 致命的失敗 | 成功 | 失敗
//
// LABEL alternatives are tried in that order, so the longer combined label
// wins over its prefix. Anything may precede or follow the match.

/// Example: "CCB<=65 【目星】 (1D100<=65) ＞ 4 ＞ 決定的成功/スペシャル"
static ROLL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"CCB<=.*?【([^】]+)】.*?＞\s*[0-9]+\s*＞\s*(決定的成功[/／]スペシャル|決定的成功|スペシャル|致命的失敗|成功|失敗)",
    )
    .unwrap()
});

/// Skill and label captured from one roll announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollMatch<'a> {
    /// Trimmed, possibly empty if the brackets held only whitespace
    pub skill: &'a str,
    pub label: RollLabel,
}

/// Find the first roll announcement in `content`
pub fn match_roll(content: &str) -> Option<RollMatch<'_>> {
    let caps = ROLL_REGEX.captures(content)?;
    let skill = caps.get(1)?.as_str().trim();
    let label = RollLabel::from_text(caps.get(2)?.as_str())?;
    Some(RollMatch { skill, label })
}

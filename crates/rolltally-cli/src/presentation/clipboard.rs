use super::number::format_percent;
use rolltally_types::ParticipantStats;
use std::collections::BTreeMap;

const RULE: &str = "--------------------";
const NONE: &str = "（なし）";
/// Skill lines are indented with an ideographic space
const INDENT: &str = "\u{3000}";

/// Clipboard text for a single participant
pub fn format_participant(name: &str, stats: &ParticipantStats) -> String {
    format!(
        "{name}\n\
         {RULE}\n\
         判定合計: {rolls}回 (成功率: {rate}%)\n\
         クリティカル合計: {critical}回\n\
         ファンブル合計: {fumble}回\n\
         \n\
         クリティカルした技能:\n\
         {INDENT}{critical_list}\n\
         \n\
         ファンブルした技能:\n\
         {INDENT}{fumble_list}",
        name = name,
        rolls = stats.total_rolls,
        rate = format_percent(stats.success_rate()),
        critical = stats.total_critical,
        fumble = stats.total_fumble,
        critical_list = format_skills(&stats.critical_skills),
        fumble_list = format_skills(&stats.fumble_skills),
    )
}

/// Clipboard text for every displayed participant, in the given order.
/// None when there is nothing to copy.
pub fn format_all_participants(ranked: &[(&str, &ParticipantStats)]) -> Option<String> {
    if ranked.is_empty() {
        return None;
    }

    let blocks: Vec<String> = ranked
        .iter()
        .map(|(name, stats)| format_block(name, stats))
        .collect();
    Some(blocks.join("\n\n\n"))
}

fn format_block(name: &str, stats: &ParticipantStats) -> String {
    format!(
        "◆ {name}\n\
         {RULE}\n\
         判定合計: {rolls}回 (成功率: {rate}%)\n\
         クリティカル: {critical}回 / ファンブル: {fumble}回\n\
         \n\
         クリティカルした技能:\n\
         {INDENT}{critical_list}\n\
         \n\
         ファンブルした技能:\n\
         {INDENT}{fumble_list}",
        name = name,
        rolls = stats.total_rolls,
        rate = format_percent(stats.success_rate()),
        critical = stats.total_critical,
        fumble = stats.total_fumble,
        critical_list = format_skills(&stats.critical_skills),
        fumble_list = format_skills(&stats.fumble_skills),
    )
}

/// `skill: N回` per line, name order, continuation lines indented
fn format_skills(skills: &BTreeMap<String, u32>) -> String {
    if skills.is_empty() {
        return NONE.to_string();
    }
    skills
        .iter()
        .map(|(skill, count)| format!("{}: {}回", skill, count))
        .collect::<Vec<_>>()
        .join(&format!("\n{}", INDENT))
}

use super::number::format_percent;
use owo_colors::OwoColorize;
use rolltally_types::ParticipantStats;
use std::collections::BTreeMap;

/// Options for report output
#[derive(Debug, Clone)]
pub struct ReportOpts {
    pub enable_color: bool,
}

impl Default for ReportOpts {
    fn default() -> Self {
        Self { enable_color: true }
    }
}

/// Render every participant in the given order, blank line between blocks
pub fn format_report(ranked: &[(&str, &ParticipantStats)], opts: &ReportOpts) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, (name, stats)) in ranked.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(format_participant_block(name, stats, opts));
    }
    lines
}

fn format_participant_block(name: &str, stats: &ParticipantStats, opts: &ReportOpts) -> Vec<String> {
    let critical = format!("{} 回", stats.total_critical);
    let fumble = format!("{} 回", stats.total_fumble);
    let (name, critical, fumble) = if opts.enable_color {
        (
            name.bold().to_string(),
            critical.green().to_string(),
            fumble.red().to_string(),
        )
    } else {
        (name.to_string(), critical, fumble)
    };

    let mut lines = vec![
        name,
        format!("  判定合計: {} 回", stats.total_rolls),
        format!("  クリティカル合計: {}", critical),
        format!("  ファンブル合計: {}", fumble),
        format!("  ファンブル確率: {} %", format_percent(stats.fumble_rate())),
        format!(
            "  クリティカル確率（成功内）: {} %",
            format_percent(stats.critical_rate())
        ),
        format!("  平均成功確率: {} %", format_percent(stats.success_rate())),
        "  クリティカルした技能".to_string(),
    ];
    lines.extend(format_skill_list(&stats.critical_skills));
    lines.push("  ファンブルした技能".to_string());
    lines.extend(format_skill_list(&stats.fumble_skills));
    lines
}

fn format_skill_list(skills: &BTreeMap<String, u32>) -> Vec<String> {
    if skills.is_empty() {
        return vec!["    - なし".to_string()];
    }
    skills
        .iter()
        .map(|(skill, count)| format!("    - {}: {} 回", skill, count))
        .collect()
}

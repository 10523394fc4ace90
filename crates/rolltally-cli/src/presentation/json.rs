use rolltally_sdk::SkipTally;
use rolltally_types::ParticipantStats;
use serde::Serialize;
use std::collections::BTreeMap;

/// One participant with derived rates, as emitted by `--format json`
#[derive(Debug, Serialize)]
pub struct ParticipantView<'a> {
    pub name: &'a str,
    pub total_rolls: u32,
    pub total_success: u32,
    pub total_critical: u32,
    pub total_fumble: u32,
    pub fumble_rate: f64,
    pub critical_rate: f64,
    pub success_rate: f64,
    pub critical_skills: &'a BTreeMap<String, u32>,
    pub fumble_skills: &'a BTreeMap<String, u32>,
}

impl<'a> ParticipantView<'a> {
    pub fn new(name: &'a str, stats: &'a ParticipantStats) -> Self {
        Self {
            name,
            total_rolls: stats.total_rolls,
            total_success: stats.total_success,
            total_critical: stats.total_critical,
            total_fumble: stats.total_fumble,
            fumble_rate: round2(stats.fumble_rate()),
            critical_rate: round2(stats.critical_rate()),
            success_rate: round2(stats.success_rate()),
            critical_skills: &stats.critical_skills,
            fumble_skills: &stats.fumble_skills,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub participants: Vec<ParticipantView<'a>>,
    pub entries: SkipTally,
}

impl<'a> ReportView<'a> {
    pub fn new(ranked: &[(&'a str, &'a ParticipantStats)], tally: SkipTally) -> Self {
        Self {
            participants: ranked
                .iter()
                .map(|(name, stats)| ParticipantView::new(*name, *stats))
                .collect(),
            entries: tally,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CopyView<'a> {
    pub participants: Vec<&'a str>,
    pub text: String,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

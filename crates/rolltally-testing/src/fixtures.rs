//! Fixtures for transcript generation.
//!
//! Produces HTML shaped like a saved session log: one `<p>` per entry, a tab
//! span, a speaker span and a message span. Roll messages follow the dice
//! bot's `CCB<=` announcement format.

/// Dice bot announcement for a skill check
///
/// `roll_message("目星", 65, 4, "決定的成功/スペシャル")` gives
/// `CCB<=65 【目星】 (1D100<=65) ＞ 4 ＞ 決定的成功/スペシャル`.
pub fn roll_message(skill: &str, target: u32, rolled: u32, label: &str) -> String {
    format!(
        "CCB<={target} 【{skill}】 (1D100<={target}) ＞ {rolled} ＞ {label}",
        target = target,
        skill = skill,
        rolled = rolled,
        label = label
    )
}

/// Fluent builder for transcript documents.
///
/// # Example
/// ```
/// use rolltally_testing::TranscriptBuilder;
///
/// let html = TranscriptBuilder::new()
///     .roll("Alice", "目星", "決定的成功")
///     .chat("Bob", "ok")
///     .build();
/// assert!(html.contains("<p"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptBuilder {
    entries: Vec<String>,
}

impl TranscriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skill check on the main tab with a fixed target and roll
    pub fn roll(self, participant: &str, skill: &str, label: &str) -> Self {
        let message = roll_message(skill, 50, 25, label);
        self.entry(&["[main]", participant, message.as_str()])
    }

    /// Plain chat line
    pub fn chat(self, participant: &str, text: &str) -> Self {
        self.entry(&["[main]", participant, text])
    }

    /// Entry with arbitrary fragments, each escaped into its own span
    pub fn entry(mut self, fragments: &[&str]) -> Self {
        let spans: String = fragments
            .iter()
            .map(|f| format!("<span>{}</span>", escape(f)))
            .collect::<Vec<_>>()
            .join(" : ");
        self.entries
            .push(format!("<p style=\"color:#888888;\">{}</p>", spans));
        self
    }

    /// Raw markup inserted as-is
    pub fn raw(mut self, markup: &str) -> Self {
        self.entries.push(markup.to_string());
        self
    }

    pub fn build(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"ja\">\n<head><meta charset=\"UTF-8\" /><title>log</title></head>\n<body>\n{}\n</body>\n</html>\n",
            self.entries.join("\n")
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

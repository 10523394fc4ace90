use crate::traits::{LogEntry, TranscriptTree};
use crate::{Error, Result};
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Log entries are paragraphs
static ENTRY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Inline text fragments inside an entry (tab, speaker, message)
static FRAGMENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span").unwrap());

/// Saved HTML transcript, parsed once
///
/// Typical export shape:
///
/// ```html
/// <p style="color:#888888;">
///   <span> [main]</span>
///   <span>Alice</span> :
///   <span>CCB&lt;=50 【目星】 (1D100&lt;=50) ＞ 3 ＞ 決定的成功/スペシャル</span>
/// </p>
/// ```
pub struct HtmlTranscript {
    document: Html,
}

impl HtmlTranscript {
    /// Parse transcript markup.
    ///
    /// The HTML parser itself recovers from anything, so "not markup" is
    /// decided up front: blank input and input without a single tag are
    /// rejected.
    pub fn parse(markup: &str) -> Result<Self> {
        if markup.trim().is_empty() {
            return Err(Error::Parse("document is empty".to_string()));
        }
        if !contains_tag(markup) {
            return Err(Error::Parse("no markup tags found".to_string()));
        }

        let document = Html::parse_document(markup);
        if !document.errors.is_empty() {
            tracing::debug!(
                errors = document.errors.len(),
                "recovered from malformed markup"
            );
        }

        Ok(Self { document })
    }
}

impl TranscriptTree for HtmlTranscript {
    fn entries(&self) -> Box<dyn Iterator<Item = LogEntry> + '_> {
        Box::new(self.document.select(&ENTRY_SELECTOR).map(|paragraph| {
            LogEntry::new(
                paragraph
                    .select(&FRAGMENT_SELECTOR)
                    .map(|span| span.text().collect::<String>()),
            )
        }))
    }
}

/// True if the text has something shaped like `<name` or `</name`
fn contains_tag(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.windows(2).any(|w| {
        w[0] == b'<' && (w[1].is_ascii_alphabetic() || w[1] == b'/' || w[1] == b'!')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_in_document_order() {
        let html = "<html><body>\
            <p><span>[main]</span><span>Alice</span><span>hello</span></p>\
            <p><span>Bob</span><span>bye</span></p>\
            </body></html>";
        let transcript = HtmlTranscript::parse(html).unwrap();

        let entries: Vec<_> = transcript.entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].fragments, vec!["[main]", "Alice", "hello"]);
        assert_eq!(entries[1].speaker_and_message(), Some(("Bob", "bye")));
    }

    #[test]
    fn test_fragment_text_includes_nested_markup_and_entities() {
        let html = "<p><span>Alice</span><span>CCB&lt;=50 <b>【目星】</b></span></p>";
        let transcript = HtmlTranscript::parse(html).unwrap();

        let entry = transcript.entries().next().unwrap();
        assert_eq!(entry.speaker_and_message(), Some(("Alice", "CCB<=50 【目星】")));
    }

    #[test]
    fn test_paragraph_without_spans() {
        let transcript = HtmlTranscript::parse("<p>plain text</p>").unwrap();
        let entry = transcript.entries().next().unwrap();
        assert!(entry.fragments.is_empty());
        assert_eq!(transcript.entries().count(), 1);
    }

    #[test]
    fn test_rejects_blank_input() {
        assert!(matches!(HtmlTranscript::parse("   \n"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_rejects_text_without_tags() {
        let err = HtmlTranscript::parse("Alice: CCB<=50 【目星】 ＞ 3 ＞ 成功").err();
        assert!(matches!(err, Some(Error::Parse(_))));
    }

    #[test]
    fn test_document_without_entries_is_valid() {
        let transcript = HtmlTranscript::parse("<html><body></body></html>").unwrap();
        assert_eq!(transcript.entries().count(), 0);
    }
}

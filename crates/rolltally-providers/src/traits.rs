/// One paragraph-level entry of a transcript
///
/// `fragments` are the text contents of the entry's inline fragments, in
/// document order, untrimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogEntry {
    pub fragments: Vec<String>,
}

impl LogEntry {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Second-to-last and last fragment, i.e. speaker and message.
    /// Returns None when the entry has fewer than two fragments.
    pub fn speaker_and_message(&self) -> Option<(&str, &str)> {
        match self.fragments.as_slice() {
            [.., speaker, message] => Some((speaker.as_str(), message.as_str())),
            _ => None,
        }
    }
}

/// Tree query capability needed by the extractor
///
/// Responsibilities:
/// - Select every log entry in document order
/// - Expose each entry's inline text fragments
///
/// Any markup backend that can do both can feed the extractor.
pub trait TranscriptTree {
    fn entries(&self) -> Box<dyn Iterator<Item = LogEntry> + '_>;
}

impl TranscriptTree for [LogEntry] {
    fn entries(&self) -> Box<dyn Iterator<Item = LogEntry> + '_> {
        Box::new(self.iter().cloned())
    }
}

impl TranscriptTree for Vec<LogEntry> {
    fn entries(&self) -> Box<dyn Iterator<Item = LogEntry> + '_> {
        self.as_slice().entries()
    }
}

/// Collapse runs of whitespace into a single space and trim both ends
///
/// Unicode whitespace counts, so the ideographic space (U+3000) common in
/// Japanese transcripts collapses too.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Alice   Liddell \n"), "Alice Liddell");
        assert_eq!(normalize_whitespace("探索者\u{3000}\u{3000}A"), "探索者 A");
        assert_eq!(normalize_whitespace(" \t\n"), "");
        assert_eq!(normalize_whitespace("Bob"), "Bob");
    }
}

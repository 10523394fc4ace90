/// Percentage with two decimals, no sign: `33.33`
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.00");
        assert_eq!(format_percent(100.0), "100.00");
        assert_eq!(format_percent(100.0 / 3.0), "33.33");
        assert_eq!(format_percent(200.0 / 3.0), "66.67");
    }
}

/// Normalize an address string for comparison
///
/// Lowercases the input and collapses every run of whitespace (including
/// leading and trailing) into a single ASCII space. This is intentionally
/// minimal: no punctuation stripping, no abbreviation expansion.
pub fn normalize_address(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_collapse() {
        assert_eq!(
            normalize_address("  123  Main   St,\tNew York  "),
            "123 main st, new york"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_address(""), "");
        assert_eq!(normalize_address("   \t\n  "), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["123 Main St", "  A  B  C ", "", "ÜBER STRASSE 5"];
        for s in inputs {
            let once = normalize_address(s);
            assert_eq!(normalize_address(&once), once);
        }
    }

    #[test]
    fn test_punctuation_preserved() {
        assert_eq!(
            normalize_address("123 Main St, Suite 100"),
            "123 main st, suite 100"
        );
    }
}

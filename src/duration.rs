/// Duration-string parsing: compact `<integer><unit>` specifications.
///
/// Accepted form is a non-negative whole number followed by exactly one
/// unit suffix: `s` (seconds), `m` (minutes), `h` (hours), `d` (days),
/// `w` (weeks). Examples: "45s", "3m", "1h", "2w".
use thiserror::Error;

/// Seconds per recognized unit suffix.
const SECONDS_PER_UNIT: [(char, u64); 5] = [
    ('s', 1),
    ('m', 60),
    ('h', 3600),
    ('d', 86_400),
    ('w', 604_800),
];

/// A duration string that does not match `^\d+[smhdw]$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration '{input}'")]
pub struct InvalidDurationFormat {
    /// The rejected input, verbatim.
    pub input: String,
}

impl InvalidDurationFormat {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

/// Parse a duration specification into whole seconds.
///
/// Pure: no side effects, deterministic for any input.
///
/// # Errors
///
/// Returns `InvalidDurationFormat` when the unit suffix is missing or
/// unrecognized, the numeric prefix is empty, negative, or not a whole
/// number, or the result overflows `u64`.
pub fn parse(text: &str) -> Result<u64, InvalidDurationFormat> {
    let mut chars = text.chars();
    let unit = chars.next_back().ok_or_else(|| InvalidDurationFormat::new(text))?;
    let prefix = chars.as_str();

    let multiplier = SECONDS_PER_UNIT
        .iter()
        .find(|(suffix, _)| *suffix == unit)
        .map(|(_, secs)| *secs)
        .ok_or_else(|| InvalidDurationFormat::new(text))?;

    let count: u64 = prefix
        .parse()
        .map_err(|_| InvalidDurationFormat::new(text))?;

    count
        .checked_mul(multiplier)
        .ok_or_else(|| InvalidDurationFormat::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_multipliers() {
        assert_eq!(parse("45s").unwrap(), 45);
        assert_eq!(parse("3m").unwrap(), 180);
        assert_eq!(parse("1h").unwrap(), 3600);
        assert_eq!(parse("2d").unwrap(), 172_800);
        assert_eq!(parse("2w").unwrap(), 1_209_600);
    }

    #[test]
    fn test_zero_is_valid() {
        assert_eq!(parse("0s").unwrap(), 0);
        assert_eq!(parse("0m").unwrap(), 0);
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in ["abc", "", "10", "10x", "-5m", "m", "3.5m", " 3m", "3m "] {
            let result = parse(input);
            assert!(
                matches!(result, Err(InvalidDurationFormat { .. })),
                "expected rejection for {input:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_error_carries_input() {
        let err = parse("10x").unwrap_err();
        assert_eq!(err.input, "10x");
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(parse("99999999999999999999s").is_err());
        assert!(parse("18446744073709551615w").is_err());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(parse("7m"), parse("7m"));
        assert_eq!(parse("bogus"), parse("bogus"));
    }
}

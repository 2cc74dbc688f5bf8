//! Project-value extraction from free-form strings.
//!
//! The declared value is whatever the assessor typed ("$2.5M", "150k",
//! "1,200,000"). This heuristic takes the first run of digits/commas, strips
//! the commas, and scales by a million or a thousand when the string contains
//! an `m` or `k` anywhere (case-insensitive, `m` checked first). It is a
//! known approximation, not a currency parser; it stays isolated here so a
//! structured numeric input can replace it without touching the engine.

/// Parse a free-form project value string into an amount in dollars.
/// Strings with no digit run parse to 0.
pub fn parse_project_value(raw: &str) -> f64 {
    let Some(digits) = first_digit_run(raw) else {
        return 0.0;
    };

    let amount: f64 = match digits.replace(',', "").parse() {
        Ok(n) => n,
        Err(_) => return 0.0,
    };

    let lower = raw.to_lowercase();
    if lower.contains('m') {
        amount * 1_000_000.0
    } else if lower.contains('k') {
        amount * 1_000.0
    } else {
        amount
    }
}

/// Run of ASCII digits and commas starting at the first digit. A decimal
/// point ends the run, so "2.5M" yields "2". Walks char boundaries, so
/// non-ASCII text before the digits ("€5k") is skipped safely.
fn first_digit_run(raw: &str) -> Option<&str> {
    let start = raw
        .char_indices()
        .find_map(|(i, c)| c.is_ascii_digit().then_some(i))?;

    let len = raw[start..]
        .bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b',')
        .count();

    Some(&raw[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millions_suffix() {
        assert_eq!(parse_project_value("$2.5M"), 2_000_000.0);
        assert_eq!(parse_project_value("3m"), 3_000_000.0);
    }

    #[test]
    fn test_thousands_suffix() {
        assert_eq!(parse_project_value("150k"), 150_000.0);
        assert_eq!(parse_project_value("$150K"), 150_000.0);
    }

    #[test]
    fn test_plain_amount() {
        assert_eq!(parse_project_value("1,200,000"), 1_200_000.0);
        assert_eq!(parse_project_value("$900"), 900.0);
    }

    #[test]
    fn test_no_digits_is_zero() {
        assert_eq!(parse_project_value("abc"), 0.0);
        assert_eq!(parse_project_value(""), 0.0);
        assert_eq!(parse_project_value(",,,"), 0.0);
    }

    #[test]
    fn test_non_ascii_text_before_digits() {
        assert_eq!(parse_project_value("€5k"), 5_000.0);
        assert_eq!(parse_project_value("≈2M"), 2_000_000.0);
        assert_eq!(parse_project_value("circa –1,500–"), 1_500.0);
        assert_eq!(parse_project_value("€€€"), 0.0);
    }

    #[test]
    fn test_m_takes_precedence_over_k() {
        // "m" anywhere in the string wins, even alongside a "k".
        assert_eq!(parse_project_value("2 mkt dollars"), 2_000_000.0);
    }

    #[test]
    fn test_first_run_wins() {
        // Only the first digit run counts; later digits are ignored.
        assert_eq!(parse_project_value("between 200 and 500"), 200.0);
    }

    #[test]
    fn test_unit_letter_elsewhere_in_string() {
        // Lossy by design: any "m" in the text scales the amount.
        assert_eq!(parse_project_value("300 maybe"), 300_000_000.0);
    }
}

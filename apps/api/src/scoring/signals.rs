//! Line-level predicates used by the impact and brevity scores.

const CURRENCY_SYMBOLS: &[char] = &['%', '$', '₩'];

const CURRENCY_WORDS: &[&str] = &["usd", "krw"];

const DURATION_WORDS: &[&str] = &[
    "day", "days", "week", "weeks", "month", "months", "yr", "yrs", "year", "years",
];

const BULLET_MARKERS: &[char] = &['-', '•', '*'];

const TODO_MARKER: &str = "todo: add metric";

/// Lowercased alphanumeric runs of `line`.
fn words(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

pub fn has_digit(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit())
}

pub fn has_currency_symbol(line: &str) -> bool {
    line.contains(CURRENCY_SYMBOLS)
}

pub fn has_currency_word(line: &str) -> bool {
    words(line).any(|w| CURRENCY_WORDS.contains(&w.as_str()))
}

pub fn has_duration_word(line: &str) -> bool {
    words(line).any(|w| DURATION_WORDS.contains(&w.as_str()))
}

/// An `x` with no letter on either side: "3x", "10X faster", "x 2".
pub fn has_multiplier_x(line: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    chars.iter().enumerate().any(|(i, c)| {
        if !c.eq_ignore_ascii_case(&'x') {
            return false;
        }
        let prev_is_letter = i > 0 && chars[i - 1].is_alphabetic();
        let next_is_letter = chars.get(i + 1).is_some_and(|n| n.is_alphabetic());
        !prev_is_letter && !next_is_letter
    })
}

pub fn has_impact_signal(line: &str) -> bool {
    has_digit(line)
        || has_currency_symbol(line)
        || has_currency_word(line)
        || has_duration_word(line)
        || has_multiplier_x(line)
}

/// Placeholder the rewrite pass leaves on bullets it could not quantify.
pub fn is_todo_line(line: &str) -> bool {
    line.to_lowercase().contains(TODO_MARKER)
}

/// `-`, `•` or `*` followed by whitespace, after trimming.
pub fn is_bullet_line(line: &str) -> bool {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(marker), Some(next)) => BULLET_MARKERS.contains(&marker) && next.is_whitespace(),
        _ => false,
    }
}

/// Trimmed, non-empty lines.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_digit() {
        assert!(has_digit("Cut costs by 30"));
        assert!(!has_digit("Cut costs substantially"));
    }

    #[test]
    fn test_has_currency_symbol() {
        assert!(has_currency_symbol("Saved $2M"));
        assert!(has_currency_symbol("Grew retention by ten %"));
        assert!(has_currency_symbol("Raised ₩ funding"));
        assert!(!has_currency_symbol("Saved money"));
    }

    #[test]
    fn test_has_currency_word_is_standalone_and_case_insensitive() {
        assert!(has_currency_word("Budget in USD"));
        assert!(has_currency_word("priced in krw."));
        assert!(!has_currency_word("Fused pipelines"));
    }

    #[test]
    fn test_has_duration_word_plural_tolerant() {
        assert!(has_duration_word("Shipped in two weeks"));
        assert!(has_duration_word("over one Year"));
        assert!(has_duration_word("several yrs of ownership"));
        assert!(has_duration_word("within a day"));
        assert!(!has_duration_word("Daily standups"));
        assert!(!has_duration_word("Monthly reports"));
    }

    #[test]
    fn test_has_multiplier_x() {
        assert!(has_multiplier_x("Made builds 3x faster"));
        assert!(has_multiplier_x("10X throughput"));
        assert!(has_multiplier_x("improved by x"));
        assert!(!has_multiplier_x("Expanded the team"));
        assert!(!has_multiplier_x("Fixed flaky tests"));
    }

    #[test]
    fn test_has_impact_signal_any_rule() {
        assert!(has_impact_signal("Reduced p99 latency"));
        assert!(has_impact_signal("Delivered ahead of schedule by weeks"));
        assert!(!has_impact_signal("Collaborated with product on roadmap"));
    }

    #[test]
    fn test_is_todo_line_case_insensitive() {
        assert!(is_todo_line("- Migrated billing (TODO: add metric)"));
        assert!(is_todo_line("todo: ADD METRIC"));
        assert!(!is_todo_line("TODO add metric"));
    }

    #[test]
    fn test_is_bullet_line() {
        assert!(is_bullet_line("- Built things"));
        assert!(is_bullet_line("• Built things"));
        assert!(is_bullet_line("   * Built things"));
        assert!(!is_bullet_line("-Built things"));
        assert!(!is_bullet_line("-"));
        assert!(!is_bullet_line("Built things"));
    }

    #[test]
    fn test_content_lines_skips_blank() {
        let lines = content_lines("  a  \n\n   \n b\n");
        assert_eq!(lines, vec!["a", "b"]);
        assert!(content_lines("").is_empty());
    }
}

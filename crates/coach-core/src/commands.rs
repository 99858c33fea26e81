use regex::Regex;
use std::sync::OnceLock;

/// Phrases that start a brand-new case from any stage.
const RESET_TRIGGERS: &[&str] = &[
    "new case",
    "start new case",
    "reset case",
    "start over",
    "switch case",
    "switch domain",
    "hospital case",
    "start hospital",
    "start hr",
    "start healthcare",
];

/// Detect commands that abandon the current case and start a new one.
///
/// Case-insensitive over the trimmed input; a trigger matches as the whole
/// input or as a prefix followed by a word boundary, so "new case please"
/// resets but "new cases" does not.
pub fn is_reset_command(text: &str) -> bool {
    let t = text.trim().to_lowercase();
    if t.is_empty() {
        return false;
    }
    RESET_TRIGGERS.iter().any(|trigger| {
        if t == *trigger {
            return true;
        }
        match t.strip_prefix(trigger) {
            Some(rest) => rest.chars().next().is_some_and(|c| !c.is_alphanumeric()),
            None => false,
        }
    })
}

fn numbered_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^|\n)\s*1[)\.\-:]\s+").unwrap())
}

/// Heuristic check that the user pasted numbered answers like "1. ... 2. ...".
///
/// True iff some line of the trimmed input starts with "1" followed by one
/// of `)`, `.`, `-`, `:` and whitespace. False negatives are fine; the user
/// is simply asked to retry in a numbered format.
pub fn is_numbered_answers(text: &str) -> bool {
    let t = text.trim();
    if t.is_empty() {
        return false;
    }
    numbered_re().is_match(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_exact_phrases() {
        for phrase in RESET_TRIGGERS {
            assert!(is_reset_command(phrase), "exact: {phrase}");
        }
    }

    #[test]
    fn reset_case_insensitive_prefix() {
        assert!(is_reset_command("NEW CASE"));
        assert!(is_reset_command("New case, please"));
        assert!(is_reset_command("start over now"));
        assert!(is_reset_command("  switch domain: finance  "));
    }

    #[test]
    fn reset_requires_word_boundary() {
        assert!(!is_reset_command("new cases"));
        assert!(!is_reset_command("start overture"));
    }

    #[test]
    fn reset_rejects_unrelated_and_empty() {
        assert!(!is_reset_command(""));
        assert!(!is_reset_command("   "));
        assert!(!is_reset_command("tell me about my case"));
        assert!(!is_reset_command("1. healthcare"));
    }

    #[test]
    fn numbered_accepts_common_shapes() {
        assert!(is_numbered_answers("1. Healthcare\n2. Doctors"));
        assert!(is_numbered_answers("1) first answer"));
        assert!(is_numbered_answers("1- first"));
        assert!(is_numbered_answers("1: first"));
        assert!(is_numbered_answers("intro line\n  1. first"));
    }

    #[test]
    fn numbered_rejects_plain_text() {
        assert!(!is_numbered_answers(""));
        assert!(!is_numbered_answers("yes I think it's fine"));
        assert!(!is_numbered_answers("10. only starts at ten"));
        assert!(!is_numbered_answers("1.no space after the dot"));
    }
}

//! Markup cleanup for generated text.
//!
//! Models answer in lightweight markdown even when asked for prose. The
//! display and export paths want plain text, so emphasis and heading markers
//! are stripped while the enclosed words are kept.

use regex::Regex;
use std::sync::LazyLock;

static DOUBLE_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid double-star pattern"));
static SINGLE_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid single-star pattern"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]*").expect("valid heading pattern"));
static DOUBLE_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("valid double-underscore pattern"));
static SINGLE_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.+?)_").expect("valid single-underscore pattern"));
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid newline pattern"));

/// Strip markdown emphasis and heading markers from generated text.
///
/// Total and deterministic: empty input yields an empty string, and
/// `clean(clean(x)) == clean(x)` for every input.
///
/// # Examples
///
/// ```
/// use worldsmith_core::clean;
///
/// assert_eq!(clean("**bold** and *italic*"), "bold and italic");
/// assert_eq!(clean("## The Shattered Coast\nWaves"), "The Shattered Coast\nWaves");
/// assert_eq!(clean("a\n\n\n\nb"), "a\n\nb");
/// assert_eq!(clean(""), "");
/// ```
pub fn clean(raw: &str) -> String {
    // A later rule can expose markers for an earlier one ("_#_ x"), so run
    // passes to a fixpoint. Every pass that changes the text shortens it.
    let mut current = clean_pass(raw);
    loop {
        let next = clean_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_pass(text: &str) -> String {
    let text = DOUBLE_STAR.replace_all(text, "$1");
    let text = SINGLE_STAR.replace_all(&text, "$1");
    let text = HEADING.replace_all(&text, "");
    let text = DOUBLE_UNDERSCORE.replace_all(&text, "$1");
    let text = SINGLE_UNDERSCORE.replace_all(&text, "$1");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_nested_emphasis() {
        assert_eq!(clean("**bold** and *italic*"), "bold and italic");
        assert_eq!(clean("***both***"), "both");
    }

    #[test]
    fn removes_heading_markers_on_every_line() {
        let raw = "# Title\nBody\n###### Deep\n##\tTabbed";
        assert_eq!(clean(raw), "Title\nBody\nDeep\nTabbed");
    }

    #[test]
    fn heading_marker_does_not_swallow_the_newline() {
        assert_eq!(clean("###\nText"), "Text");
        assert_eq!(clean("intro\n##\nrest"), "intro\n\nrest");
    }

    #[test]
    fn removes_underscore_emphasis() {
        assert_eq!(clean("__strong__ and _soft_"), "strong and soft");
    }

    #[test]
    fn collapses_excess_blank_lines() {
        assert_eq!(clean("one\n\n\n\ntwo"), "one\n\ntwo");
        assert_eq!(clean("one\n\ntwo"), "one\n\ntwo");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(clean("  \n padded \n\t"), "padded");
        assert_eq!(clean("   "), "");
    }

    #[test]
    fn unpaired_markers_survive() {
        assert_eq!(clean("5 * 3 = 15"), "5 * 3 = 15");
        assert_eq!(clean("a lone _ underscore"), "a lone _ underscore");
    }

    #[test]
    fn idempotent_on_tricky_inputs() {
        let inputs = [
            "_#_ title",
            "**#** heading hidden in bold",
            "*_*a*_*",
            "__*x*__",
            "***a***",
            "**a*",
            "\n\n\n# x\n\n\n\n_y_\n\n\n",
            "snake_case_name and more_snake_case",
            "## **Bold heading**\n\n\n\n*note*",
            "_\n_\n_",
        ];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "not idempotent for {input:?}");
        }
    }
}

//! Approximate text measurement for the built-in Helvetica faces.

/// Millimetres per typographic point.
pub const MM_PER_PT: f32 = 0.3528;

/// Average glyph advance as a fraction of the font size.
const AVERAGE_ADVANCE_EM: f32 = 0.5;

/// Line height as a multiple of the font size.
const LEADING: f32 = 1.35;

/// Vertical space one line of `size_pt` text takes, in mm.
pub fn line_height(size_pt: f32) -> f32 {
    size_pt * MM_PER_PT * LEADING
}

/// How many characters fit in `width_mm` at `size_pt`. Never zero.
pub fn chars_per_line(width_mm: f32, size_pt: f32) -> usize {
    let advance = size_pt * AVERAGE_ADVANCE_EM * MM_PER_PT;
    ((width_mm / advance).floor() as usize).max(1)
}

/// Greedy word wrap. Paragraph breaks in `text` are kept as empty lines;
/// words longer than a line are split.
pub fn wrap(text: &str, width_mm: f32, size_pt: f32) -> Vec<String> {
    let limit = chars_per_line(width_mm, size_pt);
    let mut lines = Vec::new();
    for (n, paragraph) in text.split('\n').enumerate() {
        if n > 0 && paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > limit {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let rest = word.split_off(limit);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let needed = current.chars().count() + usize::from(!current.is_empty()) + word.len();
            if needed > limit && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.extend(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Like [`wrap`], but at most `max_lines` lines; a cut-off final line ends in
/// `...`.
pub fn wrap_capped(text: &str, width_mm: f32, size_pt: f32, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = wrap(text, width_mm, size_pt)
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let limit = chars_per_line(width_mm, size_pt);
        let keep = limit.saturating_sub(3);
        if last.chars().count() > keep {
            *last = last.chars().take(keep).collect::<String>().trim_end().to_string();
        }
        last.push_str("...");
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_respect_the_width() {
        let text = "the quick brown fox jumps over the lazy dog ".repeat(10);
        let limit = chars_per_line(60.0, 10.0);
        let lines = wrap(&text, 60.0, 10.0);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= limit));
    }

    #[test]
    fn long_words_are_split() {
        let limit = chars_per_line(20.0, 10.0);
        let word = "x".repeat(limit * 2 + 3);
        let lines = wrap(&word, 20.0, 10.0);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), limit);
    }

    #[test]
    fn paragraph_breaks_survive() {
        let lines = wrap("first\n\nsecond", 100.0, 10.0);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn capped_wrap_marks_truncation() {
        let text = "word ".repeat(200);
        let lines = wrap_capped(&text, 50.0, 9.0, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("..."));
        assert!(lines[1].chars().count() <= chars_per_line(50.0, 9.0));
    }

    #[test]
    fn short_text_is_not_marked() {
        assert_eq!(wrap_capped("brief", 50.0, 9.0, 2), vec!["brief"]);
    }
}

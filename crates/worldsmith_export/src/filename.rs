//! Output file naming.

use chrono::NaiveDate;

/// `{category}_{YYYY-MM-DD}` with the category lowercased and every
/// character that is not an ASCII letter or digit replaced by `_`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use worldsmith_export::file_stem;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// assert_eq!(file_stem("Post-Apocalyptic", date), "post_apocalyptic_2026-03-09");
/// ```
pub fn file_stem(category: &str, date: NaiveDate) -> String {
    let category: String = category
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{category}_{}", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn every_separator_becomes_underscore() {
        assert_eq!(file_stem("Sci-Fi / Space Opera", date()), "sci_fi___space_opera_2026-10-16");
    }

    #[test]
    fn non_ascii_letters_become_underscore() {
        assert_eq!(file_stem("Ōkami", date()), "_kami_2026-10-16");
        assert_eq!(file_stem("Ужас", date()), "_____2026-10-16");
    }

    #[test]
    fn empty_category_still_has_a_date() {
        assert_eq!(file_stem("", date()), "_2026-10-16");
    }
}

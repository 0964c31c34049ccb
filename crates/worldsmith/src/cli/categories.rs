//! Category listing.

use worldsmith::{CATEGORY_MOODS, GENERIC_MOOD};

/// Print the known categories and their mood descriptors.
pub fn list_categories() {
    let width = CATEGORY_MOODS
        .iter()
        .map(|mood| mood.category.len())
        .max()
        .unwrap_or(0);
    for mood in CATEGORY_MOODS {
        println!("{:width$}  {}", mood.category, mood.descriptor);
    }
    println!();
    println!("Any other category uses: {GENERIC_MOOD}");
}

pub(crate) mod games;
pub(crate) mod genres;

/// Star rating rendered as in the detail screen, e.g. "★★★★".
pub(crate) fn stars(rating: i64) -> String {
    "\u{2605}".repeat(rating.clamp(0, 5) as usize)
}

/// Display label for a joined genre name; a missing match (no genre or
/// a deleted one) reads as "unspecified", never as an error.
pub(crate) fn genre_label(name: Option<&str>) -> &str {
    name.unwrap_or("unspecified")
}

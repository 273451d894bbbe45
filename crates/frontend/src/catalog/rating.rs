/// Star glyphs for a rating: half-up rounded count of "★" padded with "☆"
/// to a fixed width of 5.
pub fn star_glyphs(rating: f64) -> String {
    // rating is in [0, 5] by the data invariant; the clamp keeps the
    // repeat counts sane if a record ever violates it
    let filled = (rating.round() as usize).min(5);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Numeric label with exactly one decimal place, unrounded source value:
/// 3.84 → "(3.8)".
pub fn rating_label(rating: f64) -> String {
    format!("({:.1})", rating)
}

/// Full rating display, e.g. 3.84 → "★★★★☆ (3.8)".
pub fn format_rating(rating: f64) -> String {
    format!("{} {}", star_glyphs(rating), rating_label(rating))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_up_rounding() {
        // 4.5 rounds up to 5 filled stars, label keeps the raw value
        assert_eq!(format_rating(4.5), "★★★★★ (4.5)");
        assert_eq!(format_rating(2.5), "★★★☆☆ (2.5)");
    }

    #[test]
    fn test_low_and_zero_ratings() {
        assert_eq!(format_rating(2.2), "★★☆☆☆ (2.2)");
        assert_eq!(format_rating(0.0), "☆☆☆☆☆ (0.0)");
    }

    #[test]
    fn test_label_is_one_decimal_of_unrounded_value() {
        assert_eq!(format_rating(3.84), "★★★★☆ (3.8)");
    }

    #[test]
    fn test_full_rating() {
        assert_eq!(star_glyphs(5.0), "★★★★★");
        assert_eq!(rating_label(5.0), "(5.0)");
    }
}

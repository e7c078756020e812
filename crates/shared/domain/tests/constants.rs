use arcana_domain::constants::{DECK_SIZE, MEANING_PLACEHOLDER, REVERSAL_PROBABILITY};

#[test]
fn deck_size_matches_rider_waite() {
    assert_eq!(DECK_SIZE, 22 + 4 * 14);
}

#[test]
fn reversal_probability_is_a_probability() {
    assert!((0.0..=1.0).contains(&REVERSAL_PROBABILITY));
}

#[test]
fn placeholder_is_not_empty() {
    assert!(!MEANING_PLACEHOLDER.is_empty());
}

//! The draw service: validated random selection over the deck.

use crate::deck::{Deck, DeckCard};
use crate::error::TarotError;
use arcana_domain::constants::REVERSAL_PROBABILITY;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// One card of a draw result, oriented and with its meaning resolved.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DrawnCard {
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Resolvable image reference.
    #[serde(rename = "imagem")]
    pub image: String,
    /// Whether the card came out reversed.
    #[serde(rename = "invertida")]
    pub reversed: bool,
    /// Meaning text matching the orientation.
    #[serde(rename = "significado")]
    pub meaning: String,
}

/// Draws `requested` cards from the deck.
///
/// The whole deck is shuffled (every permutation equally likely) and
/// truncated to the requested count, so every same-size subset is equally
/// probable and the draw order is uniform. Each drawn card is then
/// independently reversed with probability [`REVERSAL_PROBABILITY`].
///
/// The RNG is supplied by the caller: handlers pass a thread RNG, tests a
/// seeded one.
///
/// # Errors
/// [`TarotError::CountOutOfRange`] when `requested` is not in
/// `[1, deck.len()]`.
pub fn draw<R: Rng>(deck: &Deck, requested: i64, rng: &mut R) -> Result<Vec<DrawnCard>, TarotError> {
    let count = validate_count(deck, requested)?;

    let mut order: Vec<&DeckCard> = deck.cards().iter().collect();
    order.shuffle(rng);
    order.truncate(count);

    let drawn = order
        .into_iter()
        .map(|card| {
            let reversed = rng.gen_bool(REVERSAL_PROBABILITY);
            DrawnCard {
                name: card.name.clone(),
                image: card.image.clone(),
                reversed,
                meaning: if reversed { card.reversed.clone() } else { card.upright.clone() },
            }
        })
        .collect();

    Ok(drawn)
}

fn validate_count(deck: &Deck, requested: i64) -> Result<usize, TarotError> {
    usize::try_from(requested)
        .ok()
        .filter(|&count| count >= 1 && count <= deck.len())
        .ok_or(TarotError::CountOutOfRange { deck_size: deck.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::deck;
    use crate::meanings::{Meaning, MeaningMap};
    use arcana_domain::constants::{DECK_SIZE, MEANING_PLACEHOLDER};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn sample_deck() -> Deck {
        let mut meanings = MeaningMap::default();
        for entry in &CATALOG {
            meanings.insert(
                entry.asset.to_owned(),
                Meaning {
                    upright: format!("{} normal", entry.asset),
                    reversed: format!("{} invertida", entry.asset),
                },
            );
        }
        deck::build(&CATALOG, &meanings, "/static/images")
    }

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn draw_returns_exactly_the_requested_distinct_cards() {
        let deck = sample_deck();

        for requested in [1_i64, 3, 10, 78] {
            let drawn = draw(&deck, requested, &mut rng(7)).expect("valid count");
            assert_eq!(drawn.len(), usize::try_from(requested).unwrap());

            let names: HashSet<_> = drawn.iter().map(|card| card.name.clone()).collect();
            assert_eq!(names.len(), drawn.len(), "drawn cards must be distinct");
        }
    }

    #[test]
    fn out_of_range_counts_are_rejected() {
        let deck = sample_deck();

        for requested in [0_i64, -1, 79, i64::MIN, i64::MAX] {
            let err = draw(&deck, requested, &mut rng(7)).expect_err("invalid count");
            assert!(matches!(err, TarotError::CountOutOfRange { deck_size: DECK_SIZE }));
        }
    }

    #[test]
    fn full_draw_is_a_permutation_of_the_deck() {
        let deck = sample_deck();

        let first = draw(&deck, 78, &mut rng(1)).expect("valid count");
        let second = draw(&deck, 78, &mut rng(2)).expect("valid count");

        let first_names: HashSet<_> = first.iter().map(|card| card.name.clone()).collect();
        let second_names: HashSet<_> = second.iter().map(|card| card.name.clone()).collect();
        assert_eq!(first_names.len(), DECK_SIZE);
        assert_eq!(first_names, second_names);
    }

    #[test]
    fn meaning_tracks_orientation() {
        let deck = sample_deck();

        // Enough draws to exercise both orientations with a seeded RNG.
        let mut generator = rng(42);
        for _ in 0..200 {
            let drawn = draw(&deck, 10, &mut generator).expect("valid count");
            for card in drawn {
                if card.reversed {
                    assert!(card.meaning.ends_with("invertida"));
                } else {
                    assert!(card.meaning.ends_with("normal"));
                }
            }
        }
    }

    #[test]
    fn reversal_rate_converges_to_two_percent() {
        let deck = sample_deck();
        let mut generator = rng(99);

        let mut total = 0_u32;
        let mut reversed = 0_u32;
        for _ in 0..2_000 {
            for card in draw(&deck, 10, &mut generator).expect("valid count") {
                total += 1;
                if card.reversed {
                    reversed += 1;
                }
            }
        }

        let rate = f64::from(reversed) / f64::from(total);
        assert!((rate - REVERSAL_PROBABILITY).abs() < 0.01, "observed rate {rate}");
    }

    #[test]
    fn placeholder_meanings_survive_the_draw() {
        let deck = deck::build(&CATALOG, &MeaningMap::default(), "/static/images");

        let drawn = draw(&deck, 78, &mut rng(3)).expect("valid count");
        for card in drawn {
            assert_eq!(card.meaning, MEANING_PLACEHOLDER);
        }
    }
}

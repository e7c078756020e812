//! Deck construction: the join of the catalog with loaded meanings.

use crate::catalog::CatalogEntry;
use crate::meanings::MeaningMap;
use arcana_domain::constants::MEANING_PLACEHOLDER;
use serde::Serialize;

/// A fully-populated card: catalog identity plus meaning texts.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DeckCard {
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Resolvable image reference, `{image_base}/{asset}.jpeg`.
    #[serde(rename = "imagem")]
    pub image: String,
    /// Meaning when drawn upright.
    #[serde(rename = "normal")]
    pub upright: String,
    /// Meaning when drawn reversed.
    #[serde(rename = "invertida")]
    pub reversed: String,
}

/// The fixed, ordered deck. Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<DeckCard>,
}

impl Deck {
    #[must_use]
    pub fn cards(&self) -> &[DeckCard] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Joins the catalog with loaded meanings into a [`Deck`].
///
/// Pure function of its inputs: one card per catalog entry, catalog order
/// preserved. A card without a meanings record gets [`MEANING_PLACEHOLDER`]
/// for both orientations; absence never errors.
#[must_use]
pub fn build(catalog: &[CatalogEntry], meanings: &MeaningMap, image_base: &str) -> Deck {
    let image_base = image_base.trim_end_matches('/');

    let cards = catalog
        .iter()
        .map(|entry| {
            let meaning = meanings.get(entry.asset);
            DeckCard {
                name: entry.name.to_owned(),
                image: format!("{image_base}/{asset}.jpeg", asset = entry.asset),
                upright: meaning.map_or_else(
                    || MEANING_PLACEHOLDER.to_owned(),
                    |m| m.upright.clone(),
                ),
                reversed: meaning.map_or_else(
                    || MEANING_PLACEHOLDER.to_owned(),
                    |m| m.reversed.clone(),
                ),
            }
        })
        .collect();

    Deck { cards }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::meanings::Meaning;
    use arcana_domain::constants::DECK_SIZE;

    #[test]
    fn build_produces_one_card_per_catalog_entry_in_order() {
        let deck = build(&CATALOG, &MeaningMap::default(), "/static/images");

        assert_eq!(deck.len(), DECK_SIZE);
        for (card, entry) in deck.cards().iter().zip(CATALOG.iter()) {
            assert_eq!(card.name, entry.name);
            assert_eq!(card.image, format!("/static/images/{}.jpeg", entry.asset));
        }
    }

    #[test]
    fn missing_meanings_fall_back_to_the_placeholder() {
        let deck = build(&CATALOG, &MeaningMap::default(), "/static/images");

        for card in deck.cards() {
            assert_eq!(card.upright, MEANING_PLACEHOLDER);
            assert_eq!(card.reversed, MEANING_PLACEHOLDER);
        }
    }

    #[test]
    fn present_meanings_are_joined_by_asset_key() {
        let mut meanings = MeaningMap::default();
        meanings.insert(
            "thefool".to_owned(),
            Meaning { upright: "Novos começos.".to_owned(), reversed: "Imprudência.".to_owned() },
        );

        let deck = build(&CATALOG, &meanings, "/static/images");

        let fool = &deck.cards()[0];
        assert_eq!(fool.name, "O Louco");
        assert_eq!(fool.upright, "Novos começos.");
        assert_eq!(fool.reversed, "Imprudência.");

        // Everyone else still gets the placeholder.
        assert_eq!(deck.cards()[1].upright, MEANING_PLACEHOLDER);
    }

    #[test]
    fn image_base_trailing_slash_is_normalized() {
        let deck = build(&CATALOG, &MeaningMap::default(), "/img/");
        assert_eq!(deck.cards()[0].image, "/img/thefool.jpeg");
    }
}

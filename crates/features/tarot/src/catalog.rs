//! The compiled-in card catalog.
//!
//! A fixed, ordered table of all 78 Rider-Waite cards: 22 major arcana
//! followed by the four suits (Paus, Copas, Espadas, Ouros), each ace
//! through ten plus the four court ranks. The asset key is the identifier
//! the image files and the meanings resource are keyed by.

use arcana_domain::constants::DECK_SIZE;

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Human-readable display name, unique across the deck.
    pub name: &'static str,
    /// Lowercase, space-free identifier used for image and meaning lookups.
    pub asset: &'static str,
}

const fn card(name: &'static str, asset: &'static str) -> CatalogEntry {
    CatalogEntry { name, asset }
}

/// The full deck, in canonical order. Never mutated; equivalent to data
/// compiled into the binary.
pub const CATALOG: [CatalogEntry; DECK_SIZE] = [
    // Major arcana
    card("O Louco", "thefool"),
    card("O Mago", "themagician"),
    card("A Sacerdotisa", "thehighpriestess"),
    card("A Imperatriz", "theempress"),
    card("O Imperador", "theemperor"),
    card("O Hierofante", "thehierophant"),
    card("Os Amantes", "thelovers"),
    card("A Carruagem", "thechariot"),
    card("A Justiça", "justice"),
    card("O Eremita", "thehermit"),
    card("A Roda da Fortuna", "wheeloffortune"),
    card("A Força", "thestrength"),
    card("O Enforcado", "thehangedman"),
    card("A Morte", "death"),
    card("A Temperança", "temperance"),
    card("O Diabo", "thedevil"),
    card("A Torre", "thetower"),
    card("A Estrela", "thestar"),
    card("A Lua", "themoon"),
    card("O Sol", "thesun"),
    card("O Julgamento", "judgement"),
    card("O Mundo", "theworld"),
    // Paus
    card("Ás de Paus", "aceofwands"),
    card("Dois de Paus", "twoofwands"),
    card("Três de Paus", "threeofwands"),
    card("Quatro de Paus", "fourofwands"),
    card("Cinco de Paus", "fiveofwands"),
    card("Seis de Paus", "sixofwands"),
    card("Sete de Paus", "sevenofwands"),
    card("Oito de Paus", "eightofwands"),
    card("Nove de Paus", "nineofwands"),
    card("Dez de Paus", "tenofwands"),
    card("Pajem de Paus", "pageofwands"),
    card("Cavaleiro de Paus", "knightofwands"),
    card("Rainha de Paus", "queenofwands"),
    card("Rei de Paus", "kingofwands"),
    // Copas
    card("Ás de Copas", "aceofcups"),
    card("Dois de Copas", "twoofcups"),
    card("Três de Copas", "threeofcups"),
    card("Quatro de Copas", "fourofcups"),
    card("Cinco de Copas", "fiveofcups"),
    card("Seis de Copas", "sixofcups"),
    card("Sete de Copas", "sevenofcups"),
    card("Oito de Copas", "eightofcups"),
    card("Nove de Copas", "nineofcups"),
    card("Dez de Copas", "tenofcups"),
    card("Pajem de Copas", "pageofcups"),
    card("Cavaleiro de Copas", "knightofcups"),
    card("Rainha de Copas", "queenofcups"),
    card("Rei de Copas", "kingofcups"),
    // Espadas
    card("Ás de Espadas", "aceofswords"),
    card("Dois de Espadas", "twoofswords"),
    card("Três de Espadas", "threeofswords"),
    card("Quatro de Espadas", "fourofswords"),
    card("Cinco de Espadas", "fiveofswords"),
    card("Seis de Espadas", "sixofswords"),
    card("Sete de Espadas", "sevenofswords"),
    card("Oito de Espadas", "eightofswords"),
    card("Nove de Espadas", "nineofswords"),
    card("Dez de Espadas", "tenofswords"),
    card("Pajem de Espadas", "pageofswords"),
    card("Cavaleiro de Espadas", "knightofswords"),
    card("Rainha de Espadas", "queenofswords"),
    card("Rei de Espadas", "kingofswords"),
    // Ouros
    card("Ás de Ouros", "aceofpentacles"),
    card("Dois de Ouros", "twoofpentacles"),
    card("Três de Ouros", "threeofpentacles"),
    card("Quatro de Ouros", "fourofpentacles"),
    card("Cinco de Ouros", "fiveofpentacles"),
    card("Seis de Ouros", "sixofpentacles"),
    card("Sete de Ouros", "sevenofpentacles"),
    card("Oito de Ouros", "eightofpentacles"),
    card("Nove de Ouros", "nineofpentacles"),
    card("Dez de Ouros", "tenofpentacles"),
    card("Pajem de Ouros", "pageofpentacles"),
    card("Cavaleiro de Ouros", "knightofpentacles"),
    card("Rainha de Ouros", "queenofpentacles"),
    card("Rei de Ouros", "kingofpentacles"),
];

/// Looks up a catalog entry by asset key.
#[must_use]
pub fn find(asset: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.asset == asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_holds_a_complete_deck() {
        assert_eq!(CATALOG.len(), DECK_SIZE);

        let suits = ["wands", "cups", "swords", "pentacles"];
        for suit in suits {
            let count = CATALOG.iter().filter(|entry| entry.asset.ends_with(suit)).count();
            assert_eq!(count, 14, "suit {suit} should have 14 ranks");
        }

        let majors =
            CATALOG.iter().filter(|entry| !suits.iter().any(|s| entry.asset.ends_with(s))).count();
        assert_eq!(majors, 22);
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), DECK_SIZE);
    }

    #[test]
    fn asset_keys_are_unique_normalized_identifiers() {
        let assets: HashSet<_> = CATALOG.iter().map(|entry| entry.asset).collect();
        assert_eq!(assets.len(), DECK_SIZE);

        for entry in &CATALOG {
            assert!(!entry.asset.is_empty());
            assert!(
                entry.asset.chars().all(|c| c.is_ascii_lowercase()),
                "asset {} must be lowercase ascii without spaces",
                entry.asset
            );
        }
    }

    #[test]
    fn find_resolves_known_and_rejects_unknown() {
        assert_eq!(find("thefool").map(|entry| entry.name), Some("O Louco"));
        assert_eq!(find("kingofpentacles").map(|entry| entry.name), Some("Rei de Ouros"));
        assert!(find("notacard").is_none());
    }
}

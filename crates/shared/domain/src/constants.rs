//! Workspace-wide constants.

/// OpenAPI tag for system endpoints (health, diagnostics).
pub const SYSTEM_TAG: &str = "System";

/// OpenAPI tag for the tarot endpoints.
pub const TAROT_TAG: &str = "Tarot";

/// Number of cards in a complete Rider-Waite deck: 22 major arcana plus
/// 4 suits of 14 ranks each.
pub const DECK_SIZE: usize = 78;

/// Probability that a drawn card comes out reversed.
pub const REVERSAL_PROBABILITY: f64 = 0.02;

/// Substituted for both orientations when the meanings resource has no
/// entry for a card.
pub const MEANING_PLACEHOLDER: &str = "Significado não encontrado.";

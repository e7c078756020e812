use std::borrow::Cow;

/// Tarot slice error type.
///
/// The first two variants are validation failures surfaced to clients as
/// HTTP 400 with an `{ "erro": ... }` body; `Internal` marks a wiring bug
/// (slice not registered) and maps to 500.
#[derive(Debug, thiserror::Error)]
pub enum TarotError {
    /// Requested count is outside the inclusive `[1, deck_size]` range.
    #[error("Número de cartas inválido. Escolha entre 1 e {deck_size}.")]
    CountOutOfRange { deck_size: usize },

    /// Request body absent, malformed, or the count is not an integer.
    #[error("Dados inválidos enviados: {message}")]
    InvalidPayload { message: Cow<'static, str> },

    /// Internal wiring faults.
    #[error("Tarot slice error: {message}")]
    Internal { message: Cow<'static, str> },
}

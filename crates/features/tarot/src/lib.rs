//! Tarot feature slice.
//!
//! Owns the whole card pipeline: the compiled-in catalog, the meanings
//! resource loaded once at startup, the deck built from their join, and the
//! per-request draw service. The built deck lives behind an [`Arc`] inside
//! the [`Tarot`] slice and is never mutated again; request handlers borrow
//! it read-only through the kernel state registry.

pub mod catalog;
pub mod deck;
pub mod draw;
mod error;
#[cfg(feature = "server")]
pub mod handlers;
pub mod meanings;

pub use crate::error::TarotError;

use crate::deck::Deck;
use arcana_domain::config::ApiConfig;
use arcana_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

/// Tarot feature inner state.
#[derive(Debug)]
pub struct TarotInner {
    pub deck: Deck,
}

/// Thread-safe handle to the tarot feature state.
#[derive(Debug, Clone)]
pub struct Tarot {
    inner: Arc<TarotInner>,
}

impl Tarot {
    #[must_use]
    pub fn new(inner: TarotInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Tarot {
    type Target = TarotInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Tarot {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the tarot feature.
///
/// Loads the meanings resource from `config.deck.meanings` and builds the
/// deck exactly once. A missing or corrupt resource degrades to placeholder
/// meanings; it never prevents the service from starting.
///
/// # Errors
/// Reserved for future wiring; the current pipeline cannot fail.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, TarotError> {
    let meanings = meanings::load(&config.deck.meanings);
    let deck = deck::build(&catalog::CATALOG, &meanings, &config.deck.image_base);

    tracing::info!(cards = deck.len(), meanings = meanings.len(), "Tarot slice initialized");

    let slice = Tarot::new(TarotInner { deck });
    Ok(InitializedSlice::new(slice))
}

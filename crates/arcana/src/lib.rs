//! Facade crate for `Arcana` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `arcana` with the desired feature flags (`server`).
//! - Call `arcana::init` (server) to register feature slices; extend as new slices appear.

pub use arcana_domain as domain;
use arcana_domain::config::ApiConfig;
pub use arcana_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use arcana_kernel::server::router::system_router;
        pub use arcana_tarot::handlers::router as tarot_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use arcana_tarot as tarot;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "tarot",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Tarot deck and draw service
    slices.push(features::tarot::init(config)?);

    Ok(slices)
}

//! Convenience re-exports for slice and application crates.

pub use crate::config::{ConfigError, load_config};
pub use arcana_domain::config::ApiConfig;
pub use arcana_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::state::{ApiState, ApiStateError};

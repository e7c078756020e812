//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config loading and server state.
//!
//! ## Config loading
//! ```rust,ignore
//! use arcana_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config::<serde_json::Value>(Some("server")).unwrap();
//! ```

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use arcana_domain as domain;

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub deck: DeckConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Deck resources: where the meanings file lives and how image URLs are built.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Path to the JSON meanings resource read once at startup.
    pub meanings: PathBuf,
    /// URL prefix prepended to `{asset}.jpeg` when building image references.
    pub image_base: String,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 5000, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            meanings: PathBuf::from("data/meanings.json"),
            image_base: "/static/images".to_owned(),
        }
    }
}

use crate::paths::ROUTES;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level client configuration shared across consumers.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfigInner {
    pub api: ApiConfig,
    pub navigation: NavigationConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(flatten, default)]
    inner: Arc<ClientConfigInner>,
}

impl Deref for ClientConfig {
    type Target = ClientConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ClientConfig {
    fn deref_mut(&mut self) -> &mut ClientConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Where the HTTP client sends endpoint requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin prefixed to every endpoint template; empty means same-origin.
    pub origin: String,
    pub timeout_seconds: u64,
}

/// Router behavior knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Route shown when no deep link applies.
    pub fallback_route: String,
}

// --- Default ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self { origin: String::new(), timeout_seconds: 30 }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { fallback_route: ROUTES.lister.dashboard.as_str().to_owned() }
    }
}

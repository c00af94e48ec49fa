//! Facade crate for the BidWork client support libraries.
//! Re-exports the domain tables and kernel helpers for consumers (the HTTP
//! client and the navigation component live outside this workspace).
//! Keep this crate thin: it should compose other crates, not implement
//! client logic.

pub use bidwork_domain as domain;
pub use bidwork_kernel as kernel;

/// The path-template registry surface most consumers need.
pub mod paths {
    pub use bidwork_domain::paths::{ENDPOINTS, PathTemplate, ROUTES};
    pub use bidwork_kernel::resolve::{PathError, PathErrorExt, resolve};
}

/// Declared top-level roles, for consumers that enumerate rather than name them.
pub mod roles {
    use bidwork_domain::constants::{AUTH, BIDDER, LISTER};

    /// Every role namespace the registry declares, including the empty ones.
    pub const ALL: &[&str] = &[AUTH, LISTER, BIDDER];

    #[must_use]
    pub fn is_role(name: &str) -> bool {
        ALL.contains(&name)
    }
}

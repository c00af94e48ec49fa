//! Kernel utilities shared across client consumers.
//! Keep this crate lightweight; it re-exports the domain tables and adds the
//! helpers that can fail: runtime path resolution and config loading.

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod resolve;

pub use bidwork_domain as domain;

use std::borrow::Cow;

// Display helper shared by the error enums in this crate.
pub(crate) fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

use crate::format_context;
use bidwork_domain::constants::{ENDPOINTS_NS, ROUTES_NS};
use bidwork_domain::paths::{ENDPOINTS, PathTemplate, ROUTES};
use std::borrow::Cow;

/// A specialized [`PathError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// The namespace/role/key triple does not name a registered template.
    #[error("Unknown path template{}: {namespace}.{role}.{key}", format_context(.context))]
    NotFound { namespace: String, role: String, key: String, context: Option<Cow<'static, str>> },
}

pub trait PathErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PathError>;
}

impl<T> PathErrorExt<T> for Result<T, PathError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                PathError::NotFound { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

/// Resolve a template from segments only known at runtime.
///
/// Call sites that know their key should read the [`ENDPOINTS`]/[`ROUTES`]
/// fields directly; that access is total and cannot fail. This lookup is the
/// fallback for the rare path assembled from configuration or user input.
///
/// # Errors
/// Returns [`PathError::NotFound`] when any segment of the triple is not
/// registered. The failure is terminal for the call; whether it is fatal to
/// the process is the caller's decision.
pub fn resolve(namespace: &str, role: &str, key: &str) -> Result<&'static PathTemplate, PathError> {
    let entries = match namespace {
        ENDPOINTS_NS => ENDPOINTS.role(role),
        ROUTES_NS => ROUTES.role(role),
        _ => None,
    };

    entries
        .and_then(|entries| entries.into_iter().find(|(name, _)| *name == key))
        .map(|(_, template)| template)
        .ok_or_else(|| PathError::NotFound {
            namespace: namespace.to_owned(),
            role: role.to_owned(),
            key: key.to_owned(),
            context: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_a_registered_triple() {
        let login = resolve("ENDPOINTS", "auth", "login").unwrap();
        assert_eq!(login.as_str(), "/api/login");
    }

    #[test]
    fn rejects_a_key_missing_from_a_declared_role() {
        // ROUTES.auth exists but holds no keys yet.
        let err = resolve("ROUTES", "auth", "login");
        assert!(err.is_err());
    }

    #[test]
    fn rejects_an_unknown_namespace() {
        let err = resolve("endpoints", "auth", "login");
        assert!(err.is_err());
    }
}

use bidwork_kernel::domain::constants::{AUTH, BIDDER, ENDPOINTS_NS, LISTER, ROUTES_NS};
use bidwork_kernel::domain::paths::{ENDPOINTS, ROUTES};
use bidwork_kernel::resolve::{PathError, PathErrorExt, resolve};

#[test]
fn dynamic_lookup_agrees_with_field_access_for_every_key() {
    for role in [AUTH, LISTER, BIDDER] {
        let namespaces = [
            (ENDPOINTS_NS, ENDPOINTS.role(role).expect("declared role")),
            (ROUTES_NS, ROUTES.role(role).expect("declared role")),
        ];
        for (namespace, node) in namespaces {
            for (key, template) in node {
                let resolved = resolve(namespace, role, key).expect("registered key resolves");
                assert_eq!(resolved, template, "{namespace}.{role}.{key}");
            }
        }
    }
}

#[test]
fn bidder_contract_feed_resolves() {
    let path = resolve("ENDPOINTS", "bidder", "contracts").expect("bidder contracts");
    assert_eq!(path.as_str(), "/api/contract/bidder");
}

#[test]
fn key_missing_from_a_declared_role_reports_the_full_triple() {
    let err = resolve("ROUTES", "auth", "login").unwrap_err();
    let PathError::NotFound { namespace, role, key, .. } = err;
    assert_eq!(namespace, "ROUTES");
    assert_eq!(role, "auth");
    assert_eq!(key, "login");
}

#[test]
fn unknown_namespace_fails_without_disturbing_existing_keys() {
    assert!(resolve("ENDPOINTS", "admin", "anything").is_err());

    // Existing keys keep resolving to their table values.
    assert_eq!(resolve("ENDPOINTS", "auth", "login").unwrap().as_str(), "/api/login");
    assert_eq!(resolve("ENDPOINTS", "lister", "getContracts").unwrap().as_str(), "/api/contract");
    assert_eq!(resolve("ENDPOINTS", "lister", "createContract").unwrap().as_str(), "/api/contract");
    assert_eq!(
        resolve("ENDPOINTS", "lister", "contract").unwrap().as_str(),
        "/api/contract/lister-contract/"
    );
    assert_eq!(
        resolve("ROUTES", "lister", "listContract").unwrap().as_str(),
        "/dashboard/lister/add"
    );
}

#[test]
fn lookup_failures_carry_attached_context() {
    let err = resolve("ROUTES", "bidder", "dashboard")
        .context("Rendering bidder navigation")
        .unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("ROUTES.bidder.dashboard"), "{rendered}");
    assert!(rendered.contains("(Rendering bidder navigation)"), "{rendered}");
}

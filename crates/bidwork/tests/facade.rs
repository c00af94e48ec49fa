use bidwork::paths::{ENDPOINTS, resolve};
use bidwork::roles;

#[test]
fn declared_roles_are_enumerable() {
    assert_eq!(roles::ALL, ["auth", "lister", "bidder"]);
    assert!(roles::is_role("bidder"));
    assert!(!roles::is_role("admin"));
}

#[test]
fn facade_exposes_both_access_modes() {
    assert_eq!(ENDPOINTS.auth.login.as_str(), "/api/login");

    let stats = resolve("ROUTES", "lister", "stats").expect("stats route");
    assert_eq!(stats.as_str(), "/dashboard/lister/stats");

    assert!(resolve("ENDPOINTS", "admin", "anything").is_err());
}

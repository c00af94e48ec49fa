use bidwork_domain::constants::{AUTH, BIDDER, ENDPOINTS_NS, LISTER, ROUTES_NS};

#[test]
fn constants_match_registry_strings() {
    assert_eq!(ENDPOINTS_NS, "ENDPOINTS");
    assert_eq!(ROUTES_NS, "ROUTES");
    assert_eq!(AUTH, "auth");
    assert_eq!(LISTER, "lister");
    assert_eq!(BIDDER, "bidder");
}

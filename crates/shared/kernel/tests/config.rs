#![cfg(not(target_arch = "wasm32"))]

use bidwork_kernel::config::load_config;
use bidwork_kernel::domain::config::ClientConfig;

#[test]
fn loads_client_config_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("client.toml");
    std::fs::write(
        &path,
        "[api]\norigin = \"https://bidwork.example\"\n\n[navigation]\nfallback_route = \"/dashboard/lister/stats\"\n",
    )
    .expect("write config file");

    let cfg: ClientConfig = load_config(Some(&path)).expect("load config");
    assert_eq!(cfg.api.origin, "https://bidwork.example");
    assert_eq!(cfg.api.timeout_seconds, 30);
    assert_eq!(cfg.navigation.fallback_route, "/dashboard/lister/stats");
}

#[test]
fn missing_config_file_is_an_error() {
    let result: Result<ClientConfig, _> = load_config(Some("does-not-exist"));
    assert!(result.is_err());
}

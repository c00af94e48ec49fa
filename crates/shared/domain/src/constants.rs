//! Canonical names for registry namespaces, roles, and keys.
//!
//! Dynamic lookups and the serialized form use these exact strings. Key names
//! follow the backend's camelCase convention.

/// Namespace holding backend API path templates.
pub const ENDPOINTS_NS: &str = "ENDPOINTS";
/// Namespace holding client navigation path templates.
pub const ROUTES_NS: &str = "ROUTES";

// Roles
pub const AUTH: &str = "auth";
pub const LISTER: &str = "lister";
pub const BIDDER: &str = "bidder";

// Endpoint keys
pub const LOGIN: &str = "login";
pub const REGISTER: &str = "register";
pub const GET_CONTRACTS: &str = "getContracts";
pub const CREATE_CONTRACT: &str = "createContract";
pub const CONTRACT: &str = "contract";
pub const CONTRACTS: &str = "contracts";

// Route keys
pub const DASHBOARD: &str = "dashboard";
pub const STATS: &str = "stats";
pub const LIST_CONTRACT: &str = "listContract";

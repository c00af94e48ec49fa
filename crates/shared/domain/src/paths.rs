//! Path templates for the marketplace backend API and the client router.
//!
//! [`ENDPOINTS`] and [`ROUTES`] are the two top-level namespaces. Both are
//! fixed at compile time and shared read-only for the process lifetime, so any
//! number of concurrent readers need no synchronization. A call site that
//! knows its key reads it as a plain field (`ENDPOINTS.auth.login`);
//! runtime-assembled lookups go through the kernel resolver instead.

use crate::constants::{
    AUTH, BIDDER, CONTRACT, CONTRACTS, CREATE_CONTRACT, DASHBOARD, GET_CONTRACTS, LISTER,
    LIST_CONTRACT, LOGIN, REGISTER, STATS,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

/// A literal path template.
///
/// Always absolute (leading `/`). A template ending in `/` is a prefix: the
/// caller appends exactly one further segment (typically a resource id)
/// before use. Any other template is complete and must be used verbatim.
/// The registry never performs that concatenation itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathTemplate(Cow<'static, str>);

impl PathTemplate {
    #[must_use]
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the template expects a caller-appended segment.
    #[must_use]
    pub fn is_prefix(&self) -> bool {
        self.0.ends_with('/')
    }
}

impl Deref for PathTemplate {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Backend API path templates, by role.
pub static ENDPOINTS: Endpoints = Endpoints {
    auth: AuthEndpoints {
        login: PathTemplate::from_static("/api/login"),
        register: PathTemplate::from_static("/api/register/user"),
    },
    lister: ListerEndpoints {
        // GET and POST share the collection path; the call site picks the verb.
        get_contracts: PathTemplate::from_static("/api/contract"),
        create_contract: PathTemplate::from_static("/api/contract"),
        contract: PathTemplate::from_static("/api/contract/lister-contract/"),
    },
    bidder: BidderEndpoints { contracts: PathTemplate::from_static("/api/contract/bidder") },
};

/// Client navigation path templates, by role.
///
/// `auth` and `bidder` carry no keys yet; they are declared anyway so
/// consumers can reference every role without an existence check.
pub static ROUTES: Routes = Routes {
    lister: ListerRoutes {
        dashboard: PathTemplate::from_static("/dashboard/lister"),
        stats: PathTemplate::from_static("/dashboard/lister/stats"),
        list_contract: PathTemplate::from_static("/dashboard/lister/add"),
    },
    auth: AuthRoutes {},
    bidder: BidderRoutes {},
};

/// The `ENDPOINTS` namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Endpoints {
    pub auth: AuthEndpoints,
    pub lister: ListerEndpoints,
    pub bidder: BidderEndpoints,
}

impl Endpoints {
    /// Key/template pairs for one role, in declaration order.
    /// `None` for an undeclared role name.
    #[must_use]
    pub fn role(&self, role: &str) -> Option<Vec<(&str, &PathTemplate)>> {
        match role {
            AUTH => Some(self.auth.entries()),
            LISTER => Some(self.lister.entries()),
            BIDDER => Some(self.bidder.entries()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthEndpoints {
    pub login: PathTemplate,
    pub register: PathTemplate,
}

impl AuthEndpoints {
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &PathTemplate)> {
        vec![(LOGIN, &self.login), (REGISTER, &self.register)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListerEndpoints {
    pub get_contracts: PathTemplate,
    pub create_contract: PathTemplate,
    /// Prefix template; append the contract id.
    pub contract: PathTemplate,
}

impl ListerEndpoints {
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &PathTemplate)> {
        vec![
            (GET_CONTRACTS, &self.get_contracts),
            (CREATE_CONTRACT, &self.create_contract),
            (CONTRACT, &self.contract),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BidderEndpoints {
    pub contracts: PathTemplate,
}

impl BidderEndpoints {
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &PathTemplate)> {
        vec![(CONTRACTS, &self.contracts)]
    }
}

/// The `ROUTES` namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Routes {
    pub lister: ListerRoutes,
    pub auth: AuthRoutes,
    pub bidder: BidderRoutes,
}

impl Routes {
    /// Key/template pairs for one role, in declaration order.
    /// `None` for an undeclared role name.
    #[must_use]
    pub fn role(&self, role: &str) -> Option<Vec<(&str, &PathTemplate)>> {
        match role {
            LISTER => Some(self.lister.entries()),
            AUTH => Some(self.auth.entries()),
            BIDDER => Some(self.bidder.entries()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListerRoutes {
    pub dashboard: PathTemplate,
    pub stats: PathTemplate,
    pub list_contract: PathTemplate,
}

impl ListerRoutes {
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &PathTemplate)> {
        vec![(DASHBOARD, &self.dashboard), (STATS, &self.stats), (LIST_CONTRACT, &self.list_contract)]
    }
}

/// Empty until auth screens get client-side routes of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthRoutes {}

impl AuthRoutes {
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &PathTemplate)> {
        Vec::new()
    }
}

/// Empty until bidder screens get client-side routes of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BidderRoutes {}

impl BidderRoutes {
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &PathTemplate)> {
        Vec::new()
    }
}

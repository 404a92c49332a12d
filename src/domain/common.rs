use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of the account that owns a record, as issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Records scoped to a single user; every store checks this before mutating.
pub trait Owned {
    fn owner(&self) -> &UserId;

    fn is_owned_by(&self, user: &UserId) -> bool {
        self.owner() == user
    }
}

//! Account directory: the surrounding system's user store, reduced to the
//! snapshot the advisor needs.
//!
//! Accounts and their bearer tokens are seeded from an operator-provided TOML
//! file — never hardcoded. Reads return a cloned snapshot valid for the
//! duration of one request; a concurrent settings update affects the next
//! request, not an in-flight one.

use std::fs;
use std::path::Path;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// User record exposed by the surrounding auth/session collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub has_access: bool,
    #[serde(default)]
    pub openai_api_key: String,
}

#[derive(Debug, Deserialize)]
struct AccountsFile {
    #[serde(default)]
    accounts: Vec<SeededAccount>,
}

#[derive(Debug, Deserialize)]
struct SeededAccount {
    /// Bearer token that resolves to this account.
    token: String,
    id: String,
    email: String,
    #[serde(default)]
    is_admin: bool,
    #[serde(default)]
    email_verified: bool,
    #[serde(default)]
    has_access: bool,
    #[serde(default)]
    openai_api_key: String,
}

/// Token-keyed account map.
///
/// Seed file shape:
/// ```toml
/// [[accounts]]
/// token = "t-hr-lead"
/// id = "u1"
/// email = "hr-lead@example.com"
/// email_verified = true
/// has_access = true
/// openai_api_key = "demo"
/// ```
#[derive(Default)]
pub struct AccountDirectory {
    accounts: DashMap<String, Account>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load seeded accounts from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let parsed: AccountsFile = toml::from_str(&content)?;
        let directory = Self::new();
        for seeded in parsed.accounts {
            directory.insert(
                seeded.token,
                Account {
                    id: seeded.id,
                    email: seeded.email,
                    is_admin: seeded.is_admin,
                    email_verified: seeded.email_verified,
                    has_access: seeded.has_access,
                    openai_api_key: seeded.openai_api_key,
                },
            );
        }
        Ok(directory)
    }

    pub fn insert(&self, token: String, account: Account) {
        self.accounts.insert(token, account);
    }

    /// Snapshot of the account behind a bearer token.
    pub fn resolve(&self, token: &str) -> Option<Account> {
        self.accounts.get(token).map(|entry| entry.value().clone())
    }

    /// Update the stored API key for the account behind a token. Returns
    /// false when the token resolves to nothing.
    pub fn set_api_key(&self, token: &str, api_key: String) -> bool {
        match self.accounts.get_mut(token) {
            Some(mut entry) => {
                entry.value_mut().openai_api_key = api_key;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

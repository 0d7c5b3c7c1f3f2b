//! Bearer-token extraction and account resolution.
//!
//! The gateway owns no auth protocol: a token either resolves to a seeded
//! account snapshot or the caller is anonymous and the core handler rejects
//! the request.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use leaveline_core::{Account, AccountDirectory};

/// Token from an `Authorization: Bearer ...` header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Account snapshot for the request, if the token resolves.
pub fn resolve_account(directory: &AccountDirectory, headers: &HeaderMap) -> Option<Account> {
    bearer_token(headers).and_then(|token| directory.resolve(token))
}

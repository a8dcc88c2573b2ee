//! Authenticated-owner context.

use serde::{Deserialize, Serialize};

/// The authenticated account on whose behalf an operation runs.
///
/// Produced by the session/auth middleware after token verification and
/// passed explicitly into every service and repository call. Keeping the
/// owner as an argument rather than process-global state keeps concurrent
/// sessions (and tests) isolated from each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Database id of the authenticated account.
    pub owner_id: i64,
}

impl AuthContext {
    /// Create a context for the given owner.
    pub fn new(owner_id: i64) -> Self {
        Self { owner_id }
    }
}

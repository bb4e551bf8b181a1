//! # Authentication Policy
//!
//! The pluggable seam behind the store's `login`/`register` calls.
//!
//! The shipped policy is a placeholder, not a security boundary: every call
//! succeeds, and the only credential check is whether the password equals a
//! fixed literal that grants admin. A real implementation (credential
//! verification, token issuance) slots in behind the same trait without
//! changing any caller.

use bazaar_core::User;

/// The fixed literal that marks a login as admin.
///
/// There is no credential store; any other username/password combination is
/// accepted as a normal user.
pub const ADMIN_PASSWORD: &str = "123$%&";

// =============================================================================
// Authenticator Port
// =============================================================================

/// Resolves credentials to a session user.
///
/// Both operations are infallible here by contract: the mock policy always
/// produces a user. A real policy that can reject belongs behind the same
/// signatures with the store deciding how to surface the failure.
pub trait Authenticator: Send + Sync {
    /// Resolves a login attempt to a session user.
    fn login(&self, username: &str, password: &str) -> User;

    /// Registers a new account and resolves it to a session user.
    fn register(&self, username: &str, email: &str, password: &str) -> User;
}

// =============================================================================
// Mock Policy
// =============================================================================

/// The placeholder policy: admin iff the password matches the fixed literal,
/// registration ignores email and password entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAuthenticator;

impl Authenticator for MockAuthenticator {
    fn login(&self, username: &str, password: &str) -> User {
        User {
            username: username.to_string(),
            is_admin: password == ADMIN_PASSWORD,
        }
    }

    fn register(&self, username: &str, _email: &str, _password: &str) -> User {
        // No uniqueness or format checks; the account is the session itself.
        User {
            username: username.to_string(),
            is_admin: false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

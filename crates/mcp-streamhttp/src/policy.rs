//! Session identity policies.
//!
//! A policy decides whether sessions exist at all, how their identifiers are
//! minted, and whether clients may terminate them. The transport consults
//! the policy on every request that carries (or should carry) a session ID;
//! it never tracks per-session lifecycle itself.

use uuid::Uuid;

use crate::session::SessionId;

/// Prefix of identifiers minted by [`InsecureStatefulSessionIdPolicy`].
pub const SESSION_ID_PREFIX: &str = "mcp-session-";

#[derive(Debug, thiserror::Error)]
pub enum SessionIdError {
    /// The identifier does not have the shape the policy expects.
    #[error("invalid session id: {0}")]
    Invalid(String),
    /// A custom policy failed to look the identifier up.
    #[error("session policy error: {0}")]
    Policy(String),
}

/// Strategy for minting, validating, and terminating session identifiers.
pub trait SessionIdPolicy: Send + Sync {
    /// Mint a fresh identifier for an `initialize` request. May return the
    /// empty string to signal that sessions are not tracked.
    fn generate(&self) -> SessionId;

    /// Check an identifier presented by a client.
    ///
    /// `Ok(true)` means the identifier is well formed but belongs to a
    /// terminated session; an `Err` means it is not acceptable at all.
    fn validate(&self, session_id: &str) -> Result<bool, SessionIdError>;

    /// Mark a session as terminated on client request.
    ///
    /// `Ok(true)` means the policy forbids client-driven termination; the
    /// caller purges per-session state only on `Ok(false)`.
    fn terminate(&self, session_id: &str) -> Result<bool, SessionIdError>;
}

/// No session management at all. Every identifier is accepted and none are
/// minted, so clients never see an `Mcp-Session-Id` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatelessSessionIdPolicy;

impl SessionIdPolicy for StatelessSessionIdPolicy {
    fn generate(&self) -> SessionId {
        "".into()
    }

    fn validate(&self, _session_id: &str) -> Result<bool, SessionIdError> {
        Ok(false)
    }

    fn terminate(&self, _session_id: &str) -> Result<bool, SessionIdError> {
        Ok(false)
    }
}

/// Mints `mcp-session-<uuid>` identifiers and checks only their shape.
///
/// The policy keeps no record of issued identifiers, so a well-formed ID a
/// client made up passes validation. Use a custom [`SessionIdPolicy`] backed
/// by signed tokens or a store when that matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsecureStatefulSessionIdPolicy;

impl SessionIdPolicy for InsecureStatefulSessionIdPolicy {
    fn generate(&self) -> SessionId {
        format!("{SESSION_ID_PREFIX}{}", Uuid::new_v4()).into()
    }

    fn validate(&self, session_id: &str) -> Result<bool, SessionIdError> {
        let suffix = session_id
            .strip_prefix(SESSION_ID_PREFIX)
            .ok_or_else(|| SessionIdError::Invalid(session_id.to_owned()))?;
        Uuid::parse_str(suffix).map_err(|_| SessionIdError::Invalid(session_id.to_owned()))?;
        Ok(false)
    }

    fn terminate(&self, _session_id: &str) -> Result<bool, SessionIdError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stateless_policy_accepts_anything() {
        let policy = StatelessSessionIdPolicy;
        assert!(policy.generate().is_empty());
        assert!(!policy.validate("").unwrap());
        assert!(!policy.validate("made-up").unwrap());
        assert!(!policy.terminate("made-up").unwrap());
    }

    #[test]
    fn stateful_policy_mints_prefixed_uuids() {
        let policy = InsecureStatefulSessionIdPolicy;
        let id = policy.generate();
        let suffix = id.strip_prefix(SESSION_ID_PREFIX).expect("prefix");
        Uuid::parse_str(suffix).expect("uuid suffix");
        assert!(!policy.validate(&id).unwrap());
    }

    #[test]
    fn stateful_policy_rejects_malformed_ids() {
        let policy = InsecureStatefulSessionIdPolicy;
        assert!(policy.validate("").is_err());
        assert!(policy.validate("mcp-session-").is_err());
        assert!(policy.validate("mcp-session-not-a-uuid").is_err());
        assert!(
            policy
                .validate("wrong-prefix-4fcd0b45-5537-4e08-960f-81a4a0dcf5b5")
                .is_err()
        );
    }

    #[test]
    fn stateful_policy_allows_client_termination() {
        let policy = InsecureStatefulSessionIdPolicy;
        let id = policy.generate();
        assert!(!policy.terminate(&id).unwrap());
    }
}

//! Admin session gate.
//!
//! Two states, `Public` and `Privileged`. The privileged marker is kept in a
//! session-scoped [`Storage`] so that it survives between CLI invocations of
//! the same machine session but is dropped on `logout`.

use crate::db::storage::{ADMIN_KEY, Storage};
use crate::errors::AppResult;
use subtle::ConstantTimeEq;

const MARKER_VALUE: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Public,
    Privileged,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Public => "public",
            Role::Privileged => "admin",
        }
    }

    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Privileged)
    }
}

/// Decides whether a supplied password grants admin rights.
pub trait CredentialPolicy {
    fn verify(&self, password: &str) -> bool;
}

/// Single shared secret, compared in constant time.
pub struct StaticSecret {
    secret: String,
}

impl StaticSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialPolicy for StaticSecret {
    fn verify(&self, password: &str) -> bool {
        password.as_bytes().ct_eq(self.secret.as_bytes()).into()
    }
}

pub struct Session<P, S> {
    role: Role,
    policy: P,
    storage: S,
}

impl<P: CredentialPolicy, S: Storage> Session<P, S> {
    /// Start in `Privileged` only if a marker from a previous login is still present.
    pub fn restore(policy: P, storage: S) -> AppResult<Self> {
        let role = match storage.get(ADMIN_KEY)? {
            Some(v) if v == MARKER_VALUE => Role::Privileged,
            _ => Role::Public,
        };
        tracing::debug!(role = role.label(), "session restored");
        Ok(Self {
            role,
            policy,
            storage,
        })
    }

    /// Returns `true` and becomes privileged iff the password is accepted.
    /// No attempt counting: callers may retry freely.
    pub fn login(&mut self, password: &str) -> AppResult<bool> {
        if !self.policy.verify(password) {
            tracing::warn!("admin login rejected");
            return Ok(false);
        }
        self.storage.set(ADMIN_KEY, MARKER_VALUE)?;
        self.role = Role::Privileged;
        tracing::info!("admin login accepted");
        Ok(true)
    }

    pub fn logout(&mut self) -> AppResult<()> {
        self.role = Role::Public;
        self.storage.remove(ADMIN_KEY)?;
        tracing::info!("admin session closed");
        Ok(())
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl<P, S> Session<P, S> {
    /// The only source of write permission for [`RecordStore`](crate::core::RecordStore):
    /// a `Session` starts privileged only through [`Session::restore`] or
    /// [`Session::login`].
    pub fn is_privileged(&self) -> bool {
        self.role.is_privileged()
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication tickets and verification outcomes.
//!
//! A [`Ticket`] is the authenticated identity produced by a successful
//! verification: a principal name plus the scheme that issued it, with
//! optional role claims and free-form string properties. Tickets are created
//! fresh per request and live in the request extensions for the duration of
//! that request; nothing here is persisted or cached.

use std::collections::HashMap;

use serde::Serialize;

use crate::defaults;
use crate::error::AuthError;

/// Authenticated identity attached to a request on successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    /// Principal (display) name of the authenticated caller.
    pub principal: String,

    /// Name of the scheme that issued this ticket.
    pub scheme: String,

    /// Role claims granted by the verifier.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    /// Arbitrary string properties set by the verifier
    /// (e.g. a post-login redirect target).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, String>,
}

impl Ticket {
    /// Create a ticket for `principal` under the default scheme name.
    ///
    /// An empty principal name is a programming error in the verifier, not a
    /// failed authentication, and is rejected with
    /// [`AuthError::MissingPrincipal`] rather than coerced to a default name.
    pub fn new(principal: impl Into<String>) -> Result<Self, AuthError> {
        let principal = principal.into();
        if principal.is_empty() {
            return Err(AuthError::MissingPrincipal);
        }

        Ok(Self {
            principal,
            scheme: defaults::SCHEME.to_string(),
            roles: Vec::new(),
            properties: HashMap::new(),
        })
    }

    /// Attach a role claim.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Attach an arbitrary string property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Check whether the ticket carries the given role claim.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Look up a property by key.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Outcome of one verification attempt.
///
/// `NoResult` means "this authenticator does not apply here" and lets a host
/// running several schemes try the next one; `Fail` is an explicit rejection
/// with a reason. Both are ordinary values, never errors: faults are reserved
/// for misconfiguration (see [`AuthError`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credential accepted; the ticket describes the authenticated caller.
    Success(Ticket),

    /// Credential explicitly rejected.
    Fail {
        /// Human-readable rejection reason, surfaced to logs (never to the
        /// unauthenticated caller).
        reason: String,
    },

    /// This authenticator does not apply; defer to other schemes.
    NoResult,
}

impl AuthOutcome {
    /// Shorthand for an explicit rejection.
    pub fn fail(reason: impl Into<String>) -> Self {
        Self::Fail {
            reason: reason.into(),
        }
    }

    /// Whether this outcome carries a ticket.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The ticket, if verification succeeded.
    pub fn ticket(&self) -> Option<&Ticket> {
        match self {
            Self::Success(ticket) => Some(ticket),
            _ => None,
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Verifier capabilities and the verifier registry.
//!
//! A registered verifier implements one of two independent capabilities:
//!
//! - [`ApiKeyVerifier`] answers `(accepted, principal name)` and leaves ticket
//!   construction to the core;
//! - [`ApiKeyTicketVerifier`] returns a complete [`AuthOutcome`], controlling
//!   roles, properties and explicit rejection reasons itself. The core passes
//!   its result through untouched.
//!
//! Rather than downcasting services at runtime, the registry stores a tagged
//! [`RegisteredVerifier`] per name, so the authenticator can match on which
//! capability is present. The registry is the crate's stand-in for a
//! dependency-injection container: it is populated at startup, wrapped in an
//! `Arc`, and read concurrently for the life of the process.

use std::sync::Arc;

use crate::ticket::AuthOutcome;

/// Simple verification capability: decide acceptance and name the principal.
///
/// The returned name is only consulted when `accepted` is `true`; an accepted
/// key with an empty name is treated as a configuration error by the core.
pub trait ApiKeyVerifier: Send + Sync {
    /// Check `api_key`, returning whether it is accepted and, if so, the
    /// principal name to issue the ticket under.
    fn verify(&self, api_key: &str) -> (bool, String);
}

/// Full-ticket verification capability: control the entire outcome.
///
/// Implementations may attach role claims and arbitrary properties to the
/// ticket, or reject with an explicit reason. Whatever is returned reaches
/// the caller unchanged.
pub trait ApiKeyTicketVerifier: Send + Sync {
    /// Check `api_key` and produce the complete outcome.
    fn verify(&self, api_key: &str) -> AuthOutcome;
}

impl<F> ApiKeyVerifier for F
where
    F: Fn(&str) -> (bool, String) + Send + Sync,
{
    fn verify(&self, api_key: &str) -> (bool, String) {
        self(api_key)
    }
}

impl<F> ApiKeyTicketVerifier for F
where
    F: Fn(&str) -> AuthOutcome + Send + Sync,
{
    fn verify(&self, api_key: &str) -> AuthOutcome {
        self(api_key)
    }
}

/// A registry entry, tagged by the capability it implements.
#[derive(Clone)]
pub enum RegisteredVerifier {
    /// Simple `(accepted, principal)` verifier; the core builds the ticket.
    Simple(Arc<dyn ApiKeyVerifier>),
    /// Full-ticket verifier; its outcome is returned verbatim.
    Full(Arc<dyn ApiKeyTicketVerifier>),
}

/// Ordered name → verifier mapping consulted in registered-verifier mode.
///
/// Entries are scanned in registration order, so when several verifiers of
/// the same capability are registered the first one wins.
#[derive(Clone, Default)]
pub struct VerifierRegistry {
    entries: Vec<(String, RegisteredVerifier)>,
}

impl VerifierRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a verifier under `name`.
    pub fn register(&mut self, name: impl Into<String>, verifier: RegisteredVerifier) {
        self.entries.push((name.into(), verifier));
    }

    /// Register a simple verifier under `name`.
    pub fn register_simple(
        &mut self,
        name: impl Into<String>,
        verifier: impl ApiKeyVerifier + 'static,
    ) {
        self.register(name, RegisteredVerifier::Simple(Arc::new(verifier)));
    }

    /// Register a full-ticket verifier under `name`.
    pub fn register_full(
        &mut self,
        name: impl Into<String>,
        verifier: impl ApiKeyTicketVerifier + 'static,
    ) {
        self.register(name, RegisteredVerifier::Full(Arc::new(verifier)));
    }

    /// Look up a verifier by name.
    pub fn get(&self, name: &str) -> Option<&RegisteredVerifier> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, verifier)| verifier)
    }

    /// First registered full-ticket verifier, if any.
    pub fn find_full(&self) -> Option<&Arc<dyn ApiKeyTicketVerifier>> {
        self.entries.iter().find_map(|(_, verifier)| match verifier {
            RegisteredVerifier::Full(v) => Some(v),
            RegisteredVerifier::Simple(_) => None,
        })
    }

    /// First registered simple verifier, if any.
    pub fn find_simple(&self) -> Option<&Arc<dyn ApiKeyVerifier>> {
        self.entries.iter().find_map(|(_, verifier)| match verifier {
            RegisteredVerifier::Simple(v) => Some(v),
            RegisteredVerifier::Full(_) => None,
        })
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

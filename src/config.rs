// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication configuration.
//!
//! One `AuthConfig` is built at startup, frozen behind an `Arc`, and shared
//! by every request. The strategies are consulted in a fixed precedence
//! order (see [`authenticate`](crate::authenticate)): registered verifiers,
//! then the inline key-check function, then the static key.

use axum::http::HeaderName;
use std::sync::Arc;

use crate::defaults;

/// Caller-supplied key-check function: `(accepted, principal name)`.
///
/// Must be safe for concurrent invocation; the authenticator calls it from
/// every in-flight request without locking.
pub type KeyCheckFn = Arc<dyn Fn(&str) -> (bool, String) + Send + Sync>;

/// Authentication configuration, immutable once built.
#[derive(Clone)]
pub struct AuthConfig {
    /// Header inspected for the API key.
    pub header: HeaderName,

    /// Static key compared byte-for-byte against the header value.
    pub api_key: Option<String>,

    /// Inline verification function, consulted before the static key.
    pub key_check: Option<KeyCheckFn>,

    /// Prefer verifiers from the [`VerifierRegistry`](crate::VerifierRegistry)
    /// over the inline function and static key.
    pub use_registered_verifier: bool,

    /// Specific registry entry to use in registered-verifier mode.
    ///
    /// Naming a verifier that is not registered is a configuration error,
    /// not a failed authentication.
    pub verifier_name: Option<String>,
}

impl AuthConfig {
    /// Create a configuration inspecting the default `x-apikey` header with
    /// no strategy enabled yet.
    pub fn new() -> Self {
        Self {
            header: HeaderName::from_static(defaults::API_KEY_HEADER),
            api_key: None,
            key_check: None,
            use_registered_verifier: false,
            verifier_name: None,
        }
    }

    /// Inspect a different header.
    pub fn with_header(mut self, header: HeaderName) -> Self {
        self.header = header;
        self
    }

    /// Set the static key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the inline verification function.
    pub fn with_key_check(
        mut self,
        key_check: impl Fn(&str) -> (bool, String) + Send + Sync + 'static,
    ) -> Self {
        self.key_check = Some(Arc::new(key_check));
        self
    }

    /// Enable registered-verifier mode.
    pub fn use_registered_verifier(mut self) -> Self {
        self.use_registered_verifier = true;
        self
    }

    /// Enable registered-verifier mode and pin it to one named registry entry.
    pub fn with_verifier_name(mut self, name: impl Into<String>) -> Self {
        self.use_registered_verifier = true;
        self.verifier_name = Some(name.into());
        self
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new()
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Shared state for the authentication middleware.

use std::sync::Arc;

use crate::config::AuthConfig;
use crate::verifier::VerifierRegistry;

/// Configuration and registry bundle handed to the middleware.
///
/// Cheap to clone; both halves are behind `Arc`s and read-only after
/// construction, so one instance serves every concurrent request.
#[derive(Clone)]
pub struct ApiKeyAuthState {
    /// Immutable authentication configuration.
    pub config: Arc<AuthConfig>,
    /// Verifiers available in registered-verifier mode.
    pub registry: Arc<VerifierRegistry>,
}

impl ApiKeyAuthState {
    /// Create state with an empty verifier registry.
    pub fn new(config: AuthConfig) -> Self {
        Self::with_registry(config, VerifierRegistry::new())
    }

    /// Create state with a populated verifier registry.
    pub fn with_registry(config: AuthConfig, registry: VerifierRegistry) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }
}

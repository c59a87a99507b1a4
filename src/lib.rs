// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! API-key header authentication for Axum services.
//!
//! This crate authenticates requests by inspecting a single configurable
//! header (`X-APIKEY` by default) and resolving the presented key against one
//! of three strategies, in fixed precedence order:
//!
//! 1. a verifier from the [`VerifierRegistry`] (registered-verifier mode),
//! 2. a caller-supplied inline function,
//! 3. a static shared key.
//!
//! A successful verification yields a [`Ticket`] in the request extensions;
//! a rejection yields [`AuthOutcome::NoResult`] (or an explicit
//! [`AuthOutcome::Fail`]), which the middleware turns into a 401.
//! Misconfiguration is never reported as a 401: it surfaces as an
//! [`AuthError`] fault (500) so it is caught during integration testing.
//!
//! ## Modules
//!
//! - `authenticator` - core decision logic (pure, no HTTP)
//! - `config` - immutable per-scheme configuration
//! - `defaults` - scheme name, header and principal defaults
//! - `error` - rejection vs. configuration-fault taxonomy
//! - `extractor` - handler-side ticket extractor
//! - `middleware` - Axum middleware wiring
//! - `state` - shared config + registry bundle
//! - `ticket` - tickets and verification outcomes
//! - `verifier` - verifier capabilities and the registry

pub mod authenticator;
pub mod config;
pub mod defaults;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod state;
pub mod ticket;
pub mod verifier;

pub use authenticator::authenticate;
pub use config::{AuthConfig, KeyCheckFn};
pub use error::AuthError;
pub use extractor::{ApiKeyAuth, OptionalApiKeyAuth};
pub use middleware::api_key_auth;
pub use state::ApiKeyAuthState;
pub use ticket::{AuthOutcome, Ticket};
pub use verifier::{ApiKeyTicketVerifier, ApiKeyVerifier, RegisteredVerifier, VerifierRegistry};

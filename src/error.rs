// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.
//!
//! Rejected credentials are never errors: the core reports those as
//! [`AuthOutcome`](crate::AuthOutcome) values. This type covers the two
//! remaining cases:
//!
//! - misconfiguration (a verifier name that resolves to nothing, a verifier
//!   that accepted a key without naming a principal), surfaced as 500 so it
//!   shows up during integration testing instead of masquerading as a 401;
//! - the HTTP-layer translation of a rejection into a 401 response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Authentication error type.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Credential rejected or absent; emitted by the HTTP layer only.
    #[error("API key was not accepted")]
    Unauthorized {
        /// Rejection reason from the verifier, logged but not sent to the
        /// caller.
        reason: Option<String>,
    },

    /// Registered-verifier mode named a verifier that is not in the registry.
    #[error("no verifier registered under name '{name}'")]
    VerifierNotRegistered {
        /// The configured verifier name that failed to resolve.
        name: String,
    },

    /// A verifier accepted a key but produced an empty principal name.
    #[error("verification succeeded without a principal name")]
    MissingPrincipal,

    /// The [`ApiKeyAuth`](crate::ApiKeyAuth) extractor ran on a route that
    /// the authentication middleware never saw.
    #[error("no ticket in request extensions; is the api-key middleware installed?")]
    MissingAuthLayer,
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Unauthorized { .. } => "unauthorized",
            AuthError::VerifierNotRegistered { .. } => "verifier_not_registered",
            AuthError::MissingPrincipal => "missing_principal",
            AuthError::MissingAuthLayer => "missing_auth_layer",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AuthError::VerifierNotRegistered { .. }
            | AuthError::MissingPrincipal
            | AuthError::MissingAuthLayer => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is a configuration fault rather than a rejection.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, AuthError::Unauthorized { .. })
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            error_code: self.error_code().to_string(),
        });
        (status, body).into_response()
    }
}

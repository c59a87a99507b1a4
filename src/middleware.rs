// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication middleware for Axum.
//!
//! The middleware reads the configured header once per request, runs the
//! core decision logic and either forwards the request with a
//! [`Ticket`](crate::Ticket) in its extensions or answers for it:
//! rejections become 401, configuration faults become 500.
//!
//! # Usage
//!
//! ```rust,ignore
//! let state = ApiKeyAuthState::new(AuthConfig::new().with_api_key("testapi"));
//!
//! let app = Router::new()
//!     .route("/protected", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(state, api_key_auth));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::authenticator::authenticate;
use crate::error::AuthError;
use crate::state::ApiKeyAuthState;
use crate::ticket::AuthOutcome;

/// Authentication middleware function.
pub async fn api_key_auth(
    State(state): State<ApiKeyAuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Absent header and present-but-unreadable header are different cases:
    // the first defers to the core (which returns NoResult), the second is
    // rejected here because a non-UTF-8 key can never match anything.
    let header_value: Option<String> = match request.headers().get(&state.config.header) {
        None => None,
        Some(value) => match value.to_str() {
            Ok(v) => Some(v.to_owned()),
            Err(_) => {
                return AuthError::Unauthorized {
                    reason: Some("API key header is not valid UTF-8".to_string()),
                }
                .into_response();
            }
        },
    };

    match authenticate(header_value.as_deref(), &state.config, &state.registry) {
        Ok(AuthOutcome::Success(ticket)) => {
            request.extensions_mut().insert(ticket);
            next.run(request).await
        }
        Ok(AuthOutcome::Fail { reason }) => {
            tracing::debug!(%reason, "api key rejected");
            AuthError::Unauthorized {
                reason: Some(reason),
            }
            .into_response()
        }
        Ok(AuthOutcome::NoResult) => {
            tracing::debug!("api key authentication produced no result");
            AuthError::Unauthorized { reason: None }.into_response()
        }
        Err(error) => {
            tracing::error!(%error, "api key authentication is misconfigured");
            error.into_response()
        }
    }
}

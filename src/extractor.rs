// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for authenticated tickets.
//!
//! Use the `ApiKeyAuth` extractor in handlers behind the
//! [`api_key_auth`](crate::middleware::api_key_auth) middleware:
//!
//! ```rust,ignore
//! async fn my_handler(ApiKeyAuth(ticket): ApiKeyAuth) -> impl IntoResponse {
//!     // ticket.principal is the authenticated caller
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AuthError;
use crate::ticket::Ticket;

/// Extractor for the authenticated ticket.
///
/// The ticket is placed in the request extensions by the middleware; using
/// this extractor on a route the middleware does not cover rejects with
/// [`AuthError::MissingAuthLayer`] (a 500, since that is a wiring mistake
/// rather than a client error).
pub struct ApiKeyAuth(pub Ticket);

impl<S> FromRequestParts<S> for ApiKeyAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Ticket>()
            .cloned()
            .map(ApiKeyAuth)
            .ok_or(AuthError::MissingAuthLayer)
    }
}

/// Optional variant: `None` when the request is unauthenticated.
///
/// Useful on routes outside the middleware that still want to show
/// caller-specific data when a ticket happens to be present.
pub struct OptionalApiKeyAuth(pub Option<Ticket>);

impl<S> FromRequestParts<S> for OptionalApiKeyAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalApiKeyAuth(parts.extensions.get::<Ticket>().cloned()))
    }
}
